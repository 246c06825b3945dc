//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{Edge, Graph, Route, Station};

/// Request for the distance of an explicit route.
#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    /// Route such as `A-B-C`; separators are ignored
    pub route: String,
}

/// Distance of an explicit route.
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    /// The route as requested
    pub route: String,

    /// Total distance
    pub distance: u64,
}

/// Request for trips with at most `max_stops` stops.
#[derive(Debug, Deserialize)]
pub struct MaxStopsRequest {
    /// Departure station
    pub from: String,

    /// Arrival station
    pub to: String,

    /// Maximum number of stops
    pub max_stops: usize,
}

/// Request for trips with exactly `stops` stops.
#[derive(Debug, Deserialize)]
pub struct ExactStopsRequest {
    /// Departure station
    pub from: String,

    /// Arrival station
    pub to: String,

    /// Exact number of stops
    pub stops: usize,
}

/// Request for the shortest trip between two stations.
#[derive(Debug, Deserialize)]
pub struct ShortestRequest {
    /// Departure station
    pub from: String,

    /// Arrival station
    pub to: String,
}

/// Request for trips shorter than `max_distance`.
#[derive(Debug, Deserialize)]
pub struct MaxDistanceRequest {
    /// Departure station
    pub from: String,

    /// Arrival station
    pub to: String,

    /// Exclusive distance bound
    pub max_distance: u64,
}

/// Matching trips.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Number of trips
    pub count: usize,

    /// The trips, e.g. `"CDC"`
    pub routes: Vec<Route>,
}

impl RoutesResponse {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            count: routes.len(),
            routes,
        }
    }
}

/// Length of the shortest trip.
#[derive(Debug, Serialize)]
pub struct ShortestResponse {
    pub from: Station,
    pub to: Station,
    pub distance: u64,
}

/// A connection in the network.
#[derive(Debug, Serialize)]
pub struct EdgeResult {
    pub departure: Station,
    pub arrival: Station,
    pub distance: u32,
}

impl From<Edge> for EdgeResult {
    fn from(edge: Edge) -> Self {
        Self {
            departure: edge.departure,
            arrival: edge.arrival,
            distance: edge.distance,
        }
    }
}

/// The whole network.
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    /// Stations with outgoing connections, in insertion order
    pub stations: Vec<Station>,

    /// Every connection
    pub edges: Vec<EdgeResult>,

    /// Sum of all parsed distances
    pub sum_edges_weight: u64,
}

impl NetworkResponse {
    /// Create from a network.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            stations: graph.stations().collect(),
            edges: graph.edges().map(EdgeResult::from).collect(),
            sum_edges_weight: graph.sum_edges_weight(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
