//! Configuration for railroad queries.

/// Default number of stops tried first by the shortest-route search.
const DEFAULT_INITIAL_SEARCH_DEPTH: usize = 3;

/// Configuration parameters for route queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Stop bound for the first round of the shortest-route search.
    /// Each unsuccessful round doubles it, up to the network's search cap.
    pub initial_search_depth: usize,

    /// Upper stop bound for the shortest-route search.
    /// `None` leaves only the bound derived from the network itself.
    pub max_search_depth: Option<usize>,
}

impl QueryConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(initial_search_depth: usize, max_search_depth: Option<usize>) -> Self {
        Self {
            initial_search_depth,
            max_search_depth,
        }
    }

    /// Set the first shortest-route search depth.
    pub fn with_initial_search_depth(mut self, depth: usize) -> Self {
        self.initial_search_depth = depth;
        self
    }

    /// Cap the shortest-route search at `depth` stops.
    pub fn with_max_search_depth(mut self, depth: usize) -> Self {
        self.max_search_depth = Some(depth);
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_SEARCH_DEPTH, None)
    }
}
