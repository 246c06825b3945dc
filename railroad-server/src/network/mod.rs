//! The railroad network: stations, weighted connections and routes.
//!
//! A network is built once from a textual description such as
//! `"AB5, BC4, CD8"` and never changes afterwards. Every type here enforces
//! its invariants at construction time.

mod edge;
mod error;
mod explore;
mod graph;
mod route;
mod station;
mod visualise;

pub use edge::{Edge, clean_description};
pub use error::{GraphError, NodeError, StationRole};
pub use graph::Graph;
pub use route::{Route, parse_route_stations};
pub use station::{InvalidStation, Station};
pub use visualise::{DepartureView, LegView, visualise};

/// The network used by the demonstration report and as the server default.
pub const SAMPLE_NETWORK: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";
