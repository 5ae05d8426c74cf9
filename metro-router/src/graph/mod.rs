//! The metro network graph and its shortest-path query engine.
//!
//! [`MetroGraph`] holds the station registry and the line-labeled
//! adjacency matrix; `shortest_path` answers queries with a breadth-first
//! search over it. Construction and querying are independent: build once
//! from lines, then query as often as needed.

mod network;
mod search;


pub use network::{GraphError, MetroGraph};
