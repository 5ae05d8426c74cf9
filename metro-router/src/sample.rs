//! A canned demonstration network.
//!
//! The map used by the demo binary and the scenario tests: 14 stations
//! across four lines, with the Green line closing into a loop.
//!
//! ```text
//! Red:   A-B-C-D-E-F
//! Blue:  N-L-D-J-O
//! Black: B-H-J-F-G
//! Green: C-J-E-M-L-K-C
//! ```

use crate::domain::{Line, LineError, LineId, StationId};
use crate::graph::MetroGraph;

/// Number of distinct stations on the demo map.
pub const SAMPLE_STATION_COUNT: usize = 14;

fn station(id: &str) -> StationId {
    // Safe: literal ids below are non-empty.
    StationId::new(id.to_string()).unwrap()
}

fn line(id: &str) -> LineId {
    // Safe: literal ids below are non-empty.
    LineId::new(id.to_string()).unwrap()
}

fn build_lines() -> Result<Vec<Line>, LineError> {
    let mut red = Line::new(line("Red"), station("A"), station("B"));
    red.extend(&station("B"), &station("C"))?;
    red.extend(&station("D"), &station("C"))?;
    red.extend(&station("D"), &station("E"))?;
    red.extend(&station("F"), &station("E"))?;

    let mut blue = Line::new(line("Blue"), station("N"), station("L"));
    blue.extend(&station("L"), &station("D"))?;
    blue.extend(&station("D"), &station("J"))?;
    blue.extend(&station("J"), &station("O"))?;

    let mut black = Line::new(line("Black"), station("B"), station("H"));
    black.extend(&station("H"), &station("J"))?;
    black.extend(&station("J"), &station("F"))?;
    black.extend(&station("F"), &station("G"))?;

    let mut green = Line::new(line("Green"), station("C"), station("J"));
    green.extend(&station("J"), &station("E"))?;
    green.extend(&station("E"), &station("M"))?;
    green.extend(&station("M"), &station("L"))?;
    green.extend(&station("L"), &station("K"))?;
    green.extend(&station("K"), &station("C"))?;

    Ok(vec![red, blue, black, green])
}

/// The four demo lines, ready for graph construction.
pub fn sample_lines() -> Vec<Line> {
    build_lines().expect("the demo lines are well-formed")
}

/// The demo network, built from [`sample_lines`].
pub fn sample_network() -> MetroGraph {
    MetroGraph::from_lines(SAMPLE_STATION_COUNT, &sample_lines())
        .expect("the demo map fits its station count")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_build_cleanly() {
        let lines = sample_lines();

        assert_eq!(lines.len(), 4);
        let green = &lines[3];
        assert_eq!(green.id().as_str(), "Green");
        assert!(green.is_looped());
        assert!(!lines[0].is_looped());
    }

    #[test]
    fn network_holds_every_station() {
        let network = sample_network();

        assert_eq!(network.station_count(), SAMPLE_STATION_COUNT);
        for id in ["A", "B", "C", "D", "E", "F", "N", "L", "J", "O", "H", "G", "M", "K"] {
            assert!(network.contains(&station(id)), "missing station {id}");
        }
    }

    #[test]
    fn interchange_stations_carry_multiple_lines() {
        let network = sample_network();

        // J sits on Blue, Black and Green.
        assert_eq!(
            network.line_between(&station("D"), &station("J")),
            Some(&line("Blue"))
        );
        assert_eq!(
            network.line_between(&station("H"), &station("J")),
            Some(&line("Black"))
        );
        assert_eq!(
            network.line_between(&station("J"), &station("E")),
            Some(&line("Green"))
        );
    }
}
