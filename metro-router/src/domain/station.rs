//! Station identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// The identity of a station in the metro network.
///
/// Station ids are opaque strings chosen by whoever defines the network
/// ("A", "Baker Street", ...). The only validation is that they must be
/// non-empty. A `StationId` is valid by construction, so code receiving
/// one never needs to re-check it.
///
/// # Examples
///
/// ```
/// use metro_router::domain::StationId;
///
/// let a = StationId::new("A".to_string()).unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// // Empty ids are rejected
/// assert!(StationId::new(String::new()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationId(String);

impl StationId {
    /// Create a station id from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "station id cannot be empty",
            });
        }
        Ok(StationId(s))
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the StationId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert!(StationId::new("A".to_string()).is_ok());
        assert!(StationId::new("Baker Street".to_string()).is_ok());
        assert!(StationId::new("14".to_string()).is_ok());
    }

    #[test]
    fn reject_empty() {
        let err = StationId::new(String::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station id: station id cannot be empty"
        );
    }

    #[test]
    fn as_str_roundtrip() {
        let id = StationId::new("A".to_string()).unwrap();
        assert_eq!(id.as_str(), "A");
    }

    #[test]
    fn into_inner() {
        let id = StationId::new("Depot".to_string()).unwrap();
        assert_eq!(id.into_inner(), "Depot");
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::new("B".to_string()).unwrap();
        assert_eq!(format!("{}", id), "B");
        assert_eq!(format!("{:?}", id), "StationId(B)");
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;

        let a = StationId::new("A".to_string()).unwrap();
        let b = StationId::new("A".to_string()).unwrap();
        let c = StationId::new("C".to_string()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: new then as_str returns the original
        #[test]
        fn roundtrip(s in ".+") {
            let id = StationId::new(s.clone()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Any non-empty string is accepted
        #[test]
        fn non_empty_always_ok(s in ".+") {
            prop_assert!(StationId::new(s).is_ok());
        }
    }
}
