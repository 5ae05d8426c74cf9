//! Network storage: vertex registry and labeled adjacency matrix.

use std::collections::HashMap;

use crate::domain::{Line, LineId, StationId};

/// Error from building or querying the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The named station has not been registered.
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// All station slots are in use.
    #[error("station capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}

/// The metro network as an undirected, line-labeled graph.
///
/// Stations are registered into a fixed-capacity vertex registry; each
/// gets a dense index in registration order. Connections live in an N×N
/// symmetric matrix whose cells hold the id of the line serving that
/// connection. Re-adding a connection overwrites its label (last write
/// wins), so there is no edge multiplicity.
///
/// Queries never mutate the graph: search bookkeeping is allocated per
/// call, so a `MetroGraph` can serve any number of queries, including
/// concurrently through a shared reference.
#[derive(Debug, Clone)]
pub struct MetroGraph {
    capacity: usize,
    stations: Vec<StationId>,
    index_of: HashMap<StationId, usize>,
    /// capacity × capacity cells, row-major. Kept symmetric.
    connections: Vec<Option<LineId>>,
}

impl MetroGraph {
    /// Create an empty network with room for `capacity` stations.
    pub fn new(capacity: usize) -> Self {
        MetroGraph {
            capacity,
            stations: Vec::with_capacity(capacity),
            index_of: HashMap::with_capacity(capacity),
            connections: vec![None; capacity * capacity],
        }
    }

    /// Build a network from lines, walking each line's adjacent station
    /// pairs and adding one labeled connection per pair.
    ///
    /// Stations are registered on first encounter, in line order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] if the lines mention more
    /// distinct stations than `capacity`.
    pub fn from_lines(capacity: usize, lines: &[Line]) -> Result<Self, GraphError> {
        let mut graph = MetroGraph::new(capacity);

        for line in lines {
            for (a, b) in line.segments() {
                graph.add_station(a.clone())?;
                graph.add_station(b.clone())?;
                graph.add_connection(a, b, line.id())?;
            }
        }

        Ok(graph)
    }

    /// Returns the maximum number of stations this network can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of registered stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the station is registered.
    pub fn contains(&self, station: &StationId) -> bool {
        self.index_of.contains_key(station)
    }

    /// The registered stations, in registration (index) order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Register a station. Registering the same id twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] if all slots are in use.
    pub fn add_station(&mut self, station: StationId) -> Result<(), GraphError> {
        if self.index_of.contains_key(&station) {
            return Ok(());
        }
        if self.stations.len() == self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.index_of.insert(station.clone(), self.stations.len());
        self.stations.push(station);
        Ok(())
    }

    /// Connect two registered stations with a line-labeled edge.
    ///
    /// The connection is stored symmetrically. Connecting an already
    /// connected pair overwrites the label.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownStation`] if either station has not
    /// been registered; nothing is written in that case.
    pub fn add_connection(
        &mut self,
        a: &StationId,
        b: &StationId,
        line: &LineId,
    ) -> Result<(), GraphError> {
        let i = self.index(a)?;
        let j = self.index(b)?;

        self.connections[i * self.capacity + j] = Some(line.clone());
        self.connections[j * self.capacity + i] = Some(line.clone());
        Ok(())
    }

    /// The line serving the connection between two stations, if any.
    pub fn line_between(&self, a: &StationId, b: &StationId) -> Option<&LineId> {
        let i = self.index(a).ok()?;
        let j = self.index(b).ok()?;
        self.label_at(i, j)
    }

    /// Dense index of a registered station.
    pub(crate) fn index(&self, station: &StationId) -> Result<usize, GraphError> {
        self.index_of
            .get(station)
            .copied()
            .ok_or_else(|| GraphError::UnknownStation(station.clone()))
    }

    /// The station registered at a dense index.
    pub(crate) fn station_at(&self, index: usize) -> &StationId {
        &self.stations[index]
    }

    /// The label on the connection between two dense indices, if any.
    pub(crate) fn label_at(&self, i: usize, j: usize) -> Option<&LineId> {
        self.connections[i * self.capacity + j].as_ref()
    }

    /// Indices connected to `index`, in ascending index order.
    pub(crate) fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let row = index * self.capacity;
        (0..self.stations.len()).filter(move |&j| self.connections[row + j].is_some())
    }
}
