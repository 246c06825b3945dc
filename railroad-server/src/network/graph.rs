//! Weighted directed graph of stations.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::debug;

use super::edge::{Edge, clean_description};
use super::error::GraphError;
use super::route::{Route, parse_route_stations};
use super::Station;

/// A railroad network: directed, weighted connections between stations.
///
/// Built once from a textual description and read-only afterwards.
/// Departure stations and their neighbors keep the order in which they
/// first appeared in the description.
///
/// # Examples
///
/// ```
/// use railroad_server::network::Graph;
///
/// let graph = Graph::build("AB5, BC4, CD8").unwrap();
/// assert_eq!(graph.route_distance("A-B-C").unwrap(), 9);
/// assert!(graph.route_distance("A-C").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: IndexMap<Station, IndexMap<Station, u32>>,
    sum_edges_weight: u64,
}

impl Graph {
    /// Create a network with no stations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from a description such as `"AB5, BC4, CD8"`.
    ///
    /// Tokens may be separated by any non-alphanumeric characters. Every
    /// token is validated before the network is assembled, so a malformed
    /// token yields an error and no network at all. A repeated connection
    /// overwrites the earlier distance but both still count towards
    /// [`sum_edges_weight`](Self::sum_edges_weight).
    pub fn build(description: &str) -> Result<Self, GraphError> {
        let edges = clean_description(description)
            .split_whitespace()
            .map(Edge::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let mut graph = Graph::new();
        for edge in edges {
            graph.insert(edge);
        }

        debug!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            sum_edges_weight = graph.sum_edges_weight,
            "network built"
        );

        Ok(graph)
    }

    /// Build a network from raw bytes, which must be UTF-8 text.
    pub fn build_bytes(description: &[u8]) -> Result<Self, GraphError> {
        let text = std::str::from_utf8(description)?;
        Self::build(text)
    }

    fn insert(&mut self, edge: Edge) {
        self.adjacency
            .entry(edge.departure)
            .or_default()
            .insert(edge.arrival, edge.distance);
        self.sum_edges_weight += u64::from(edge.distance);
    }

    /// Distance of the direct connection from `departure` to `arrival`.
    pub fn distance(&self, departure: Station, arrival: Station) -> Result<u32, GraphError> {
        self.adjacency
            .get(&departure)
            .and_then(|arrivals| arrivals.get(&arrival))
            .copied()
            .ok_or(GraphError::EdgeNotFound { departure, arrival })
    }

    /// Stations reachable from `station` by one connection, in insertion order.
    ///
    /// Empty for stations with no outgoing connections, including stations
    /// the network has never heard of.
    pub fn neighbors(&self, station: Station) -> impl Iterator<Item = Station> + '_ {
        self.adjacency
            .get(&station)
            .into_iter()
            .flat_map(|arrivals| arrivals.keys().copied())
    }

    /// Total distance of a route description such as `"A-B-C"`.
    ///
    /// A route of a single station has distance 0.
    pub fn route_distance(&self, route: &str) -> Result<u64, GraphError> {
        let stations = parse_route_stations(route)?;
        self.distance_along(&stations)
    }

    /// Total distance of an already-parsed route.
    pub fn route_distance_of(&self, route: &Route) -> Result<u64, GraphError> {
        self.distance_along(route.stations())
    }

    fn distance_along(&self, stations: &[Station]) -> Result<u64, GraphError> {
        stations
            .windows(2)
            .map(|pair| self.distance(pair[0], pair[1]).map(u64::from))
            .sum()
    }

    /// Sum of every parsed connection distance.
    ///
    /// Used as an upper bound when searching for shortest routes.
    pub fn sum_edges_weight(&self) -> u64 {
        self.sum_edges_weight
    }

    /// Stations with at least one outgoing connection, in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = Station> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every connection, grouped by departure in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&departure, arrivals)| {
            arrivals.iter().map(move |(&arrival, &distance)| Edge {
                departure,
                arrival,
                distance,
            })
        })
    }

    /// Number of distinct connections.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Number of stations that appear on either end of a connection.
    pub fn station_count(&self) -> usize {
        let mut seen: Vec<Station> = self
            .edges()
            .flat_map(|e| [e.departure, e.arrival])
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::build(s)
    }
}

/// Renders the adjacency mapping, e.g. `{A: {B: 5, D: 5}, B: {C: 4}}`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (departure, arrivals)) in self.adjacency.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{departure}: {{")?;
            for (j, (arrival, distance)) in arrivals.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arrival}: {distance}")?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}
