//! Network error types.
//!
//! `NodeError` covers a single malformed edge token. `GraphError` covers
//! everything else: non-text input, lookups of missing connections and
//! queries with no answer.

use std::fmt;

use super::{InvalidStation, Station};

/// Which end of an edge a symbol was read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationRole {
    Departure,
    Arrival,
}

impl fmt::Display for StationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationRole::Departure => f.write_str("departure"),
            StationRole::Arrival => f.write_str("arrival"),
        }
    }
}

/// A malformed edge token in a network description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// Fewer than three significant characters
    #[error("edge {token:?} has {len} characters; expected departure, arrival and distance")]
    TooShort { token: String, len: usize },

    /// Departure or arrival symbol is not a letter
    #[error("{role} value {symbol:?} in edge {token:?} is not a letter A-Z")]
    NotAlphabetic {
        role: StationRole,
        symbol: char,
        token: String,
    },

    /// Departure and arrival are the same station
    #[error("departure and arrival must differ in edge {token:?}")]
    SelfLoop { token: String },

    /// Trailing characters are not a non-negative integer
    #[error("distance {distance:?} in edge {token:?} is not a non-negative integer")]
    BadDistance { distance: String, token: String },
}

/// Structural and query-level network errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The network description is not text
    #[error("network description must be text: {0}")]
    NotText(#[from] std::str::Utf8Error),

    /// An edge token failed to parse
    #[error(transparent)]
    Node(#[from] NodeError),

    /// A route contains a symbol that is not a station
    #[error(transparent)]
    InvalidStation(#[from] InvalidStation),

    /// No direct connection between two stations
    #[error("the connection from {departure} to {arrival} does not exist")]
    EdgeNotFound { departure: Station, arrival: Station },

    /// No route found within the search bound
    #[error("{arrival} is unreachable from {departure} within {max_stops} stops")]
    Unreachable {
        departure: Station,
        arrival: Station,
        max_stops: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(c: char) -> Station {
        Station::from_char(c).unwrap()
    }

    #[test]
    fn node_error_display() {
        let err = NodeError::TooShort {
            token: "AB".into(),
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "edge \"AB\" has 2 characters; expected departure, arrival and distance"
        );

        let err = NodeError::NotAlphabetic {
            role: StationRole::Arrival,
            symbol: '4',
            token: "A45".into(),
        };
        assert_eq!(
            err.to_string(),
            "arrival value '4' in edge \"A45\" is not a letter A-Z"
        );

        let err = NodeError::SelfLoop {
            token: "AA5".into(),
        };
        assert_eq!(err.to_string(), "departure and arrival must differ in edge \"AA5\"");

        let err = NodeError::BadDistance {
            distance: "5X".into(),
            token: "AB5X".into(),
        };
        assert!(err.to_string().contains("\"5X\""));
    }

    #[test]
    fn graph_error_display() {
        let err = GraphError::EdgeNotFound {
            departure: station('E'),
            arrival: station('D'),
        };
        assert_eq!(err.to_string(), "the connection from E to D does not exist");

        let err = GraphError::Unreachable {
            departure: station('A'),
            arrival: station('Z'),
            max_stops: 48,
        };
        assert_eq!(err.to_string(), "Z is unreachable from A within 48 stops");
    }

    #[test]
    fn node_error_is_transparent() {
        let node = NodeError::SelfLoop {
            token: "CC1".into(),
        };
        let err = GraphError::from(node.clone());
        assert_eq!(err.to_string(), node.to_string());
    }
}
