//! Railroad route analysis server.
//!
//! Builds a weighted, directed railroad network from a description such
//! as `"AB5, BC4, CD8"` and answers questions about it: route distances,
//! trips bounded by stops, shortest trips and trips bounded by distance.

pub mod config;
pub mod network;
pub mod railroad;
pub mod report;
pub mod web;
