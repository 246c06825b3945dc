//! Route-analysis queries.

use tracing::debug;

use crate::network::{Graph, GraphError, Route, Station};

use super::config::QueryConfig;

/// A railroad network together with the queries it answers.
///
/// Vocabulary: a trip such as `ABC` departs from `A`, stops at `B` and
/// arrives (its last stop) at `C`. The number of stops is the number of
/// stations visited minus one, so `ABC` has two stops.
///
/// All queries are read-only; the same question always gets the same
/// answer.
///
/// # Examples
///
/// ```
/// use railroad_server::network::{Station, SAMPLE_NETWORK};
/// use railroad_server::railroad::Railroad;
///
/// let railroad = Railroad::build(SAMPLE_NETWORK).unwrap();
/// let c = Station::parse("C").unwrap();
///
/// assert_eq!(railroad.count_trips_max_stop(c, c, 3), 2);
/// assert_eq!(railroad.count_routes_max_distance(c, c, 30).unwrap(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct Railroad {
    graph: Graph,
    config: QueryConfig,
}

impl Railroad {
    /// Wrap a network with the default query configuration.
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, QueryConfig::default())
    }

    pub fn with_config(graph: Graph, config: QueryConfig) -> Self {
        Self { graph, config }
    }

    /// Build the network from a description and wrap it.
    pub fn build(description: &str) -> Result<Self, GraphError> {
        Ok(Self::new(Graph::build(description)?))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Total distance of a route description such as `"A-E-B-C-D"`.
    pub fn route_distance(&self, route: &str) -> Result<u64, GraphError> {
        self.graph.route_distance(route)
    }

    /// Trips from `departure` to `arrival` with between 1 and `max_stop` stops.
    pub fn trips_max_stop(
        &self,
        departure: Station,
        arrival: Station,
        max_stop: usize,
    ) -> Vec<Route> {
        self.graph
            .generate_all_routes_from_station(departure, max_stop)
            .into_iter()
            .filter(|route| {
                (1..=max_stop).contains(&route.stops()) && route.arrival() == arrival
            })
            .collect()
    }

    pub fn count_trips_max_stop(
        &self,
        departure: Station,
        arrival: Station,
        max_stop: usize,
    ) -> usize {
        self.trips_max_stop(departure, arrival, max_stop).len()
    }

    /// Trips from `departure` to `arrival` with exactly `count_stop` stops.
    ///
    /// A trip has at least one stop, so `count_stop == 0` finds nothing.
    pub fn trips_exact_stop(
        &self,
        departure: Station,
        arrival: Station,
        count_stop: usize,
    ) -> Vec<Route> {
        self.graph
            .generate_all_routes_from_station(departure, count_stop)
            .into_iter()
            .filter(|route| {
                route.stops() > 0 && route.stops() == count_stop && route.arrival() == arrival
            })
            .collect()
    }

    pub fn count_trips_exact_stop(
        &self,
        departure: Station,
        arrival: Station,
        count_stop: usize,
    ) -> usize {
        self.trips_exact_stop(departure, arrival, count_stop).len()
    }

    /// Largest stop bound the shortest-route search will try.
    ///
    /// With every distance at least 1, no shortest trip can need more stops
    /// than the sum of all distances. The connection count keeps the bound
    /// meaningful for networks with zero distances, and
    /// [`QueryConfig::max_search_depth`] can lower it further.
    pub fn search_cap(&self) -> usize {
        let weight = usize::try_from(self.graph.sum_edges_weight()).unwrap_or(usize::MAX);
        let cap = weight.max(self.graph.edge_count());
        match self.config.max_search_depth {
            Some(limit) => cap.min(limit),
            None => cap,
        }
    }

    /// Distance of the shortest trip from `departure` to `arrival`.
    ///
    /// No stop bound is known up front, so the search starts at
    /// `initial_search_depth` stops and doubles the bound after every round
    /// that finds no trip, finishing with a round at [`search_cap`](Self::search_cap).
    pub fn shortest_route_length(
        &self,
        departure: Station,
        arrival: Station,
    ) -> Result<u64, GraphError> {
        let cap = self.search_cap();
        let unreachable = GraphError::Unreachable {
            departure,
            arrival,
            max_stops: cap,
        };

        // Enumeration up to the cap is exponential; rule out the hopeless case first
        if !self.graph.is_reachable(departure, arrival) {
            debug!(%departure, %arrival, "arrival not reachable");
            return Err(unreachable);
        }

        let mut depth = self.config.initial_search_depth.min(cap);
        loop {
            let trips = self.trips_max_stop(departure, arrival, depth);
            if !trips.is_empty() {
                let mut shortest = u64::MAX;
                for trip in &trips {
                    shortest = shortest.min(self.graph.route_distance_of(trip)?);
                }
                debug!(
                    %departure,
                    %arrival,
                    depth,
                    trips = trips.len(),
                    shortest,
                    "shortest route found"
                );
                return Ok(shortest);
            }

            if depth >= cap {
                break;
            }
            debug!(%departure, %arrival, depth, "no trip found, doubling search depth");
            depth = depth.saturating_mul(2).max(1).min(cap);
        }

        Err(unreachable)
    }

    /// Trips from `departure` to `arrival` shorter than `max_distance`.
    ///
    /// Candidates are enumerated with `max_distance` used as the stop bound,
    /// which covers every qualifying trip as long as each connection has a
    /// distance of at least 1. Zero-distance connections can hide longer
    /// qualifying trips.
    pub fn routes_max_distance(
        &self,
        departure: Station,
        arrival: Station,
        max_distance: u64,
    ) -> Result<Vec<Route>, GraphError> {
        let max_stop = usize::try_from(max_distance).unwrap_or(usize::MAX);
        let mut routes = Vec::new();
        for trip in self.trips_max_stop(departure, arrival, max_stop) {
            if self.graph.route_distance_of(&trip)? < max_distance {
                routes.push(trip);
            }
        }
        Ok(routes)
    }

    pub fn count_routes_max_distance(
        &self,
        departure: Station,
        arrival: Station,
        max_distance: u64,
    ) -> Result<usize, GraphError> {
        Ok(self.routes_max_distance(departure, arrival, max_distance)?.len())
    }
}

#[cfg(test)]
#[path = "queries_tests.rs"]
mod tests;
