//! Breadth-first shortest-path search.
//!
//! The network is unweighted, so breadth-first search gives minimum hop
//! counts by construction: vertices are discovered in non-decreasing
//! distance order, and a vertex's distance is fixed the first time it is
//! seen. Transfers are counted on the reconstructed route, never
//! minimized; which route is returned among equal-length candidates
//! depends only on registration order.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::{LineId, PathResult, StationId};

use super::network::{GraphError, MetroGraph};

impl MetroGraph {
    /// Find a shortest route between two registered stations.
    ///
    /// Shortest means fewest stations traversed. The returned report
    /// carries the full route in start-to-end order and the number of
    /// line transfers along it; an empty route means the stations are
    /// not connected, which is a normal outcome rather than an error.
    ///
    /// Querying a station against itself returns the single-station
    /// route with zero transfers, without searching.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownStation`] if either id has not been
    /// registered.
    pub fn shortest_path(
        &self,
        start: &StationId,
        end: &StationId,
    ) -> Result<PathResult, GraphError> {
        let start_index = self.index(start)?;
        let end_index = self.index(end)?;

        if start_index == end_index {
            return Ok(PathResult::found(
                start.clone(),
                end.clone(),
                vec![start.clone()],
                0,
            ));
        }

        let Some(predecessors) = self.breadth_first(start_index, end_index) else {
            debug!(start = %start, end = %end, "no route");
            return Ok(PathResult::not_found(start.clone(), end.clone()));
        };

        let route = walk_back(&predecessors, end_index);
        let transfers = self.count_transfers(&route);
        let stations: Vec<StationId> = route
            .iter()
            .map(|&index| self.station_at(index).clone())
            .collect();

        debug!(
            start = %start,
            end = %end,
            hops = stations.len() - 1,
            transfers,
            "shortest path found"
        );

        Ok(PathResult::found(
            start.clone(),
            end.clone(),
            stations,
            transfers,
        ))
    }

    /// Run BFS from `start`, stopping as soon as `end` is discovered.
    ///
    /// Returns the predecessor record, or `None` if `end` is
    /// unreachable. Distance and predecessor buffers are allocated here,
    /// per query, so the graph itself is never mutated.
    fn breadth_first(&self, start: usize, end: usize) -> Option<Vec<Option<usize>>> {
        let station_count = self.station_count();
        let mut distance: Vec<Option<u32>> = vec![None; station_count];
        let mut predecessor: Vec<Option<usize>> = vec![None; station_count];
        let mut frontier: VecDeque<(usize, u32)> = VecDeque::new();

        distance[start] = Some(0);
        frontier.push_back((start, 0));

        'bfs: while let Some((vertex, hops)) = frontier.pop_front() {
            trace!(station = %self.station_at(vertex), hops, "expanding");

            for neighbor in self.neighbors(vertex) {
                if distance[neighbor].is_some() {
                    continue;
                }
                distance[neighbor] = Some(hops + 1);
                predecessor[neighbor] = Some(vertex);

                // First discovery is at minimum distance; nothing past
                // the end vertex can improve on it.
                if neighbor == end {
                    break 'bfs;
                }
                frontier.push_back((neighbor, hops + 1));
            }
        }

        distance[end].map(|_| predecessor)
    }

    /// Count the line changes along a route of dense indices.
    fn count_transfers(&self, route: &[usize]) -> usize {
        let mut transfers = 0;
        let mut current: Option<&LineId> = None;

        for pair in route.windows(2) {
            let label = self.label_at(pair[0], pair[1]);
            if label.is_some() && label != current {
                if current.is_some() {
                    transfers += 1;
                }
                current = label;
            }
        }

        transfers
    }
}

/// Rebuild the route by following predecessors from `end` back to the
/// search origin, then reversing into start-to-end order.
fn walk_back(predecessors: &[Option<usize>], end: usize) -> Vec<usize> {
    let mut route = vec![end];
    let mut vertex = end;

    while let Some(previous) = predecessors[vertex] {
        route.push(previous);
        vertex = previous;
    }

    route.reverse();
    route
}
