//! Metro network shortest-path engine.
//!
//! A library that answers: "what is the shortest route, by number of
//! stations traversed, between two stations of a metro network, and how
//! many line transfers does it require?"

pub mod domain;
pub mod graph;
pub mod sample;
