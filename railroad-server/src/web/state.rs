//! Application state for the web layer.

use std::sync::Arc;

use crate::railroad::Railroad;

/// Shared application state.
///
/// The railroad is immutable once built, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// The network and its queries
    pub railroad: Arc<Railroad>,

    /// Largest stop or distance bound a request may ask for
    pub max_query_depth: usize,
}

impl AppState {
    /// Create a new app state.
    pub fn new(railroad: Railroad, max_query_depth: usize) -> Self {
        Self {
            railroad: Arc::new(railroad),
            max_query_depth,
        }
    }
}
