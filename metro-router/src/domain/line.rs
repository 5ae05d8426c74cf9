//! Metro line types.
//!
//! A `Line` is an ordered, branch-free chain of stations. Lines are the
//! only way edges enter the network: every adjacent pair of stations on a
//! line becomes one connection labeled with the line's id.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::StationId;

/// Error returned when constructing an invalid line id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// The identity of a metro line ("Red", "Circle", ...).
///
/// Line ids label connections in the network; a transfer is counted
/// whenever a route switches between two differently-labeled connections.
/// The only validation is that ids must be non-empty.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(String);

impl LineId {
    /// Create a line id from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidLineId> {
        if s.is_empty() {
            return Err(InvalidLineId {
                reason: "line id cannot be empty",
            });
        }
        Ok(LineId(s))
    }

    /// Returns the line id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error from extending a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The line's ends have met; a looped line is frozen.
    #[error("line {line} is looped and cannot be extended")]
    AlreadyLooped { line: LineId },

    /// The named station is on the line but not at one of its two ends.
    #[error("station {station} is not an end of line {line}")]
    InteriorAttachment { line: LineId, station: StationId },

    /// Neither named station touches an end of the line.
    #[error("neither {from} nor {to} is an end of line {line}")]
    DetachedEndpoint {
        line: LineId,
        from: StationId,
        to: StationId,
    },
}

/// An ordered, branch-free chain of stations.
///
/// A line starts as an open chain of two stations and grows one station
/// at a time, only ever at one of its two current ends. If an extension
/// makes the two ends coincide the line becomes looped (a simple cycle)
/// and is frozen against further extension.
///
/// # Invariants
///
/// - The chain always holds at least two stations.
/// - No station has more than two neighbours within the line: growth is
///   rejected anywhere but at an end, so T-junctions cannot form.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    stations: VecDeque<StationId>,
    looped: bool,
}

impl Line {
    /// Create a new open two-station chain.
    pub fn new(id: LineId, a: StationId, b: StationId) -> Self {
        let mut stations = VecDeque::with_capacity(2);
        stations.push_back(a);
        stations.push_back(b);
        Line {
            id,
            stations,
            looped: false,
        }
    }

    /// Returns the line's id.
    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// Returns true if the line's ends have met.
    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// Returns the number of stations on the chain.
    ///
    /// A looped line counts its closing station twice (once per end).
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the given station appears anywhere on the chain.
    pub fn contains(&self, station: &StationId) -> bool {
        self.stations.contains(station)
    }

    /// The ordered station chain, front end to back end.
    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.stations.iter()
    }

    /// Adjacent station pairs along the chain, in order.
    ///
    /// Each pair is one connection of the network, labeled with this
    /// line's id.
    pub fn segments(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.stations.iter().zip(self.stations.iter().skip(1))
    }

    /// Grow the chain by one station, attached at the end named by
    /// `from` or `to` (whichever is currently an end).
    ///
    /// If the appended station equals the opposite end, the chain closes
    /// into a loop and no further extension is permitted.
    ///
    /// # Errors
    ///
    /// - [`LineError::AlreadyLooped`] if the line is already closed.
    /// - [`LineError::InteriorAttachment`] if the attachment point, or
    ///   the appended station, sits inside the chain rather than at an
    ///   end (this is what forbids branching).
    /// - [`LineError::DetachedEndpoint`] if neither station touches an
    ///   end of the chain.
    pub fn extend(&mut self, from: &StationId, to: &StationId) -> Result<(), LineError> {
        if self.looped {
            return Err(LineError::AlreadyLooped {
                line: self.id.clone(),
            });
        }

        // Safe: the chain holds at least two stations from construction.
        let front = self.stations.front().unwrap().clone();
        let back = self.stations.back().unwrap().clone();

        // One of the named stations must be an end; the other is appended.
        let (end, new) = if *from == front || *from == back {
            (from, to)
        } else if *to == front || *to == back {
            (to, from)
        } else if self.contains(from) || self.contains(to) {
            let station = if self.contains(from) { from } else { to };
            return Err(LineError::InteriorAttachment {
                line: self.id.clone(),
                station: station.clone(),
            });
        } else {
            return Err(LineError::DetachedEndpoint {
                line: self.id.clone(),
                from: from.clone(),
                to: to.clone(),
            });
        };

        // A station already on the chain may only be appended if it is the
        // opposite end, which closes the loop.
        let opposite = if *end == front { &back } else { &front };
        if self.contains(new) && new != opposite {
            return Err(LineError::InteriorAttachment {
                line: self.id.clone(),
                station: new.clone(),
            });
        }

        if *end == front {
            self.stations.push_front(new.clone());
        } else {
            self.stations.push_back(new.clone());
        }

        if self.stations.front() == self.stations.back() {
            self.looped = true;
        }

        Ok(())
    }
}
