//! Shortest-path query report.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StationId;

/// The immutable result of one shortest-path query.
///
/// Carries the queried endpoints, the ordered station sequence from start
/// to end (empty when no route exists), and the number of line transfers
/// along that route. The transfer count is the number of distinct maximal
/// line segments used, minus one, floored at zero: riding a single line
/// end to end is zero transfers, and so is not travelling at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    start: StationId,
    end: StationId,
    stations: Vec<StationId>,
    transfers: usize,
}

impl PathResult {
    /// Build a report for a found route.
    pub fn found(start: StationId, end: StationId, stations: Vec<StationId>, transfers: usize) -> Self {
        PathResult {
            start,
            end,
            stations,
            transfers,
        }
    }

    /// Build a report for a pair with no connecting route.
    pub fn not_found(start: StationId, end: StationId) -> Self {
        PathResult {
            start,
            end,
            stations: Vec::new(),
            transfers: 0,
        }
    }

    /// The queried start station.
    pub fn start(&self) -> &StationId {
        &self.start
    }

    /// The queried end station.
    pub fn end(&self) -> &StationId {
        &self.end
    }

    /// The route, start to end. Empty when no route exists.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        !self.stations.is_empty()
    }

    /// Number of connections traversed (stations minus one, or 0).
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Number of line transfers along the route.
    pub fn transfers(&self) -> usize {
        self.transfers
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shortest path from '{}' to '{}': ",
            self.start, self.end
        )?;

        if !self.is_found() {
            return f.write_str("Not found");
        }

        for (i, station) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            f.write_str(station.as_str())?;
        }
        write!(f, ". Transfers: {}", self.transfers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StationId {
        StationId::new(s.to_string()).unwrap()
    }

    #[test]
    fn found_report() {
        let result = PathResult::found(
            sid("A"),
            sid("C"),
            vec![sid("A"), sid("B"), sid("C")],
            1,
        );

        assert!(result.is_found());
        assert_eq!(result.hops(), 2);
        assert_eq!(result.transfers(), 1);
        assert_eq!(result.start(), &sid("A"));
        assert_eq!(result.end(), &sid("C"));
    }

    #[test]
    fn not_found_report() {
        let result = PathResult::not_found(sid("A"), sid("Z"));

        assert!(!result.is_found());
        assert_eq!(result.stations(), &[]);
        assert_eq!(result.hops(), 0);
        assert_eq!(result.transfers(), 0);
    }

    #[test]
    fn single_station_route_has_no_hops() {
        let result = PathResult::found(sid("D"), sid("D"), vec![sid("D")], 0);

        assert!(result.is_found());
        assert_eq!(result.hops(), 0);
        assert_eq!(result.transfers(), 0);
    }

    #[test]
    fn display_found() {
        let result = PathResult::found(
            sid("B"),
            sid("G"),
            vec![sid("B"), sid("H"), sid("J"), sid("F"), sid("G")],
            0,
        );

        assert_eq!(
            result.to_string(),
            "Shortest path from 'B' to 'G': B->H->J->F->G. Transfers: 0"
        );
    }

    #[test]
    fn display_not_found() {
        let result = PathResult::not_found(sid("A"), sid("Z"));

        assert_eq!(result.to_string(), "Shortest path from 'A' to 'Z': Not found");
    }

    #[test]
    fn display_single_station() {
        let result = PathResult::found(sid("D"), sid("D"), vec![sid("D")], 0);

        assert_eq!(
            result.to_string(),
            "Shortest path from 'D' to 'D': D. Transfers: 0"
        );
    }
}
