//! Route analysis over a railroad network.
//!
//! Every query enumerates routes from the departure station with
//! [`Graph::generate_all_routes_from_station`](crate::network::Graph::generate_all_routes_from_station)
//! and then filters the result: by stop count, by arrival station and, for
//! distance queries, by the summed route distance.

mod config;
mod queries;

pub use config::QueryConfig;
pub use queries::Railroad;
