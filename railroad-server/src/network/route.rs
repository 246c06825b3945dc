//! Routes through the network.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{InvalidStation, Station};

/// An ordered walk through the network, starting at its departure station.
///
/// A route always holds at least one station. Consecutive stations are
/// expected to be joined by an edge; routes produced by
/// [`Graph::generate_all_routes_from_station`](super::Graph::generate_all_routes_from_station)
/// always are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(Vec<Station>);

impl Route {
    /// A route that has not left its departure station.
    pub fn new(departure: Station) -> Self {
        Route(vec![departure])
    }

    /// Build a route from a sequence of stations.
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_stations(stations: Vec<Station>) -> Option<Self> {
        if stations.is_empty() {
            None
        } else {
            Some(Route(stations))
        }
    }

    /// A copy of this route continued to `next`.
    pub fn extended(&self, next: Station) -> Self {
        let mut stations = Vec::with_capacity(self.0.len() + 1);
        stations.extend_from_slice(&self.0);
        stations.push(next);
        Route(stations)
    }

    pub fn departure(&self) -> Station {
        self.0[0]
    }

    pub fn arrival(&self) -> Station {
        self.0[self.0.len() - 1]
    }

    /// Number of stations visited beyond the departure.
    pub fn stops(&self) -> usize {
        self.0.len() - 1
    }

    pub fn stations(&self) -> &[Station] {
        &self.0
    }

    /// Render with hyphen separators, e.g. `A-B-C`.
    pub fn to_dashed(&self) -> String {
        self.0
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for station in &self.0 {
            write!(f, "{station}")?;
        }
        Ok(())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Read the stations named in a route description.
///
/// Only alphanumeric characters are significant, so `"a-b-c"` and `"ABC"`
/// name the same stations. Digits are not stations and are rejected.
pub fn parse_route_stations(route: &str) -> Result<Vec<Station>, InvalidStation> {
    route
        .chars()
        .filter(|c| c.is_alphanumeric())
        .map(Station::from_char)
        .collect()
}
