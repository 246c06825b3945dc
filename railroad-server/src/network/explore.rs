//! Depth-bounded route enumeration.
//!
//! The network may contain cycles (`C -> D -> C`), so the set of routes
//! from a station is unbounded. Enumeration therefore expands routes one
//! connection at a time, level by level, and stops after a fixed number of
//! rounds. Revisiting a station is allowed: that is how cyclic trips are
//! counted.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use super::{Graph, Route, Station};

impl Graph {
    /// Every route from `departure` using at most `max_depth` connections.
    ///
    /// The result holds the departure-only route followed by every route
    /// produced at each round, shortest first. Within a round, routes follow
    /// the order of the previous round and then the insertion order of
    /// neighbors. Expansion stops early once a round produces nothing.
    ///
    /// The number of routes grows exponentially with `max_depth` on cyclic
    /// networks; callers pick the bound.
    pub fn generate_all_routes_from_station(
        &self,
        departure: Station,
        max_depth: usize,
    ) -> Vec<Route> {
        let mut routes = vec![Route::new(departure)];
        let mut frontier_start = 0;

        for depth in 1..=max_depth {
            let frontier = &routes[frontier_start..];
            let next: Vec<Route> = frontier
                .iter()
                .flat_map(|route| self.extend_route(route))
                .collect();

            if next.is_empty() {
                trace!(departure = %departure, depth, "no further connections");
                break;
            }

            trace!(
                departure = %departure,
                depth,
                new_routes = next.len(),
                "expanded frontier"
            );

            frontier_start = routes.len();
            routes.extend(next);
        }

        debug!(
            departure = %departure,
            max_depth,
            routes = routes.len(),
            "route enumeration complete"
        );

        routes
    }

    /// Whether any route of at least one connection leads from `departure`
    /// to `arrival`.
    ///
    /// Unlike enumeration this visits each station once, so it answers in
    /// time linear in the size of the network even when enumeration would
    /// not.
    pub fn is_reachable(&self, departure: Station, arrival: Station) -> bool {
        let mut visited: HashSet<Station> = HashSet::new();
        let mut queue: VecDeque<Station> = self.neighbors(departure).collect();

        while let Some(station) = queue.pop_front() {
            if station == arrival {
                return true;
            }
            if visited.insert(station) {
                queue.extend(self.neighbors(station));
            }
        }

        false
    }

    /// Every one-connection continuation of `route`.
    fn extend_route<'a>(&'a self, route: &'a Route) -> impl Iterator<Item = Route> + 'a {
        self.neighbors(route.arrival())
            .map(move |next| route.extended(next))
    }
}

#[cfg(test)]
mod tests {
    use crate::network::{Graph, SAMPLE_NETWORK, Station};

    fn station(c: char) -> Station {
        Station::from_char(c).unwrap()
    }

    fn names(graph: &Graph, departure: char, max_depth: usize) -> Vec<String> {
        graph
            .generate_all_routes_from_station(station(departure), max_depth)
            .iter()
            .map(|r| r.to_string())
            .collect()
    }

    #[test]
    fn depth_zero_is_departure_only() {
        let graph = Graph::build(SAMPLE_NETWORK).unwrap();
        assert_eq!(names(&graph, 'A', 0), vec!["A"]);
    }

    #[test]
    fn keeps_every_prefix() {
        let graph = Graph::build(SAMPLE_NETWORK).unwrap();
        assert_eq!(
            names(&graph, 'A', 2),
            vec!["A", "AB", "AD", "AE", "ABC", "ADC", "ADE", "AEB"]
        );
    }

    #[test]
    fn cycles_are_followed_up_to_depth() {
        let graph = Graph::build("AB1, BA1").unwrap();
        assert_eq!(names(&graph, 'A', 4), vec!["A", "AB", "ABA", "ABAB", "ABABA"]);
    }

    #[test]
    fn stops_at_dead_ends() {
        let graph = Graph::build("AB1, BC1").unwrap();
        assert_eq!(names(&graph, 'A', 10), vec!["A", "AB", "ABC"]);
        assert_eq!(names(&graph, 'C', 10), vec!["C"]);
    }

    #[test]
    fn unknown_station_yields_departure_only() {
        let graph = Graph::build(SAMPLE_NETWORK).unwrap();
        assert_eq!(names(&graph, 'Z', 3), vec!["Z"]);
    }

    #[test]
    fn reachability() {
        let graph = Graph::build(SAMPLE_NETWORK).unwrap();
        assert!(graph.is_reachable(station('A'), station('C')));
        assert!(graph.is_reachable(station('B'), station('B')));
        // Nothing leads back to A
        assert!(!graph.is_reachable(station('C'), station('A')));
        assert!(!graph.is_reachable(station('A'), station('A')));
        assert!(!graph.is_reachable(station('A'), station('Z')));
    }

    #[test]
    fn repeated_enumeration_is_identical() {
        let graph = Graph::build(SAMPLE_NETWORK).unwrap();
        let first = graph.generate_all_routes_from_station(station('C'), 6);
        let second = graph.generate_all_routes_from_station(station('C'), 6);
        assert_eq!(first, second);
    }
}
