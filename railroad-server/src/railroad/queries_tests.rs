//! Unit tests for the route-analysis queries.

use super::*;
use crate::network::SAMPLE_NETWORK;

fn station(c: char) -> Station {
    Station::from_char(c).unwrap()
}

fn sample() -> Railroad {
    Railroad::build(SAMPLE_NETWORK).unwrap()
}

fn names(routes: &[Route]) -> Vec<String> {
    let mut names: Vec<String> = routes.iter().map(Route::to_string).collect();
    names.sort();
    names
}

#[test]
fn route_distances() {
    let railroad = sample();
    assert_eq!(railroad.route_distance("A-B-C").unwrap(), 9);
    assert_eq!(railroad.route_distance("A-D").unwrap(), 5);
    assert_eq!(railroad.route_distance("A-D-C").unwrap(), 13);
    assert_eq!(railroad.route_distance("A-E-B-C-D").unwrap(), 22);
    assert_eq!(
        railroad.route_distance("A-E-D"),
        Err(GraphError::EdgeNotFound {
            departure: station('E'),
            arrival: station('D'),
        })
    );
}

#[test]
fn trips_with_max_stops() {
    // C-D-C (2 stops) and C-E-B-C (3 stops)
    let railroad = sample();
    let trips = railroad.trips_max_stop(station('C'), station('C'), 3);
    assert_eq!(names(&trips), vec!["CDC", "CEBC"]);
    assert_eq!(railroad.count_trips_max_stop(station('C'), station('C'), 3), 2);
}

#[test]
fn trips_with_max_stops_excludes_departure_only_route() {
    let railroad = sample();
    assert_eq!(railroad.count_trips_max_stop(station('C'), station('C'), 0), 0);
    assert_eq!(railroad.count_trips_max_stop(station('C'), station('C'), 1), 0);
}

#[test]
fn trips_with_exact_stops() {
    // A to C via B,C,D; via D,C,D; and via D,E,B
    let railroad = sample();
    let trips = railroad.trips_exact_stop(station('A'), station('C'), 4);
    assert_eq!(names(&trips), vec!["ABCDC", "ADCDC", "ADEBC"]);
    assert_eq!(railroad.count_trips_exact_stop(station('A'), station('C'), 4), 3);
}

#[test]
fn exact_zero_stops_finds_nothing() {
    let railroad = sample();
    assert_eq!(railroad.count_trips_exact_stop(station('A'), station('A'), 0), 0);
}

#[test]
fn shortest_route_lengths() {
    let railroad = sample();
    assert_eq!(railroad.shortest_route_length(station('A'), station('C')).unwrap(), 9);
    assert_eq!(railroad.shortest_route_length(station('B'), station('B')).unwrap(), 9);
}

#[test]
fn shortest_route_needs_doubling() {
    // F is five connections away: rounds at 3 stops, then 6
    let railroad = Railroad::build("AB1, BC1, CD1, DE1, EF1").unwrap();
    assert_eq!(railroad.shortest_route_length(station('A'), station('F')).unwrap(), 5);
}

#[test]
fn shortest_route_unreachable() {
    let railroad = sample();
    assert_eq!(
        railroad.shortest_route_length(station('C'), station('A')),
        Err(GraphError::Unreachable {
            departure: station('C'),
            arrival: station('A'),
            max_stops: 48,
        })
    );
    assert!(matches!(
        railroad.shortest_route_length(station('A'), station('Z')),
        Err(GraphError::Unreachable { .. })
    ));
}

#[test]
fn shortest_route_respects_configured_cap() {
    let graph = Graph::build("AB1, BC1, CD1, DE1, EF1").unwrap();
    let config = QueryConfig::default().with_max_search_depth(4);
    let railroad = Railroad::with_config(graph, config);

    assert_eq!(railroad.search_cap(), 4);
    assert!(matches!(
        railroad.shortest_route_length(station('A'), station('F')),
        Err(GraphError::Unreachable { max_stops: 4, .. })
    ));
    assert_eq!(railroad.shortest_route_length(station('A'), station('E')).unwrap(), 4);
}

#[test]
fn shortest_route_with_zero_distances() {
    // Weight sum is 0; the connection count still bounds the search
    let railroad = Railroad::build("AB0, BC0").unwrap();
    assert_eq!(railroad.search_cap(), 2);
    assert_eq!(railroad.shortest_route_length(station('A'), station('C')).unwrap(), 0);
}

#[test]
fn shortest_route_with_zero_initial_depth() {
    let graph = Graph::build(SAMPLE_NETWORK).unwrap();
    let config = QueryConfig::default().with_initial_search_depth(0);
    let railroad = Railroad::with_config(graph, config);
    assert_eq!(railroad.shortest_route_length(station('A'), station('C')).unwrap(), 9);
}

#[test]
fn routes_under_max_distance() {
    let railroad = sample();
    let routes = railroad
        .routes_max_distance(station('C'), station('C'), 30)
        .unwrap();
    assert_eq!(
        names(&routes),
        vec!["CDC", "CDCEBC", "CDEBC", "CEBC", "CEBCDC", "CEBCEBC", "CEBCEBCEBC"]
    );
    assert_eq!(
        railroad
            .count_routes_max_distance(station('C'), station('C'), 30)
            .unwrap(),
        7
    );
}

#[test]
fn max_distance_is_strict() {
    let railroad = sample();
    let c = station('C');
    let count = |max| railroad.count_routes_max_distance(c, c, max).unwrap();
    // C-E-B-C is exactly 9, C-D-C exactly 16
    assert_eq!(count(9), 0);
    assert_eq!(count(10), 1);
    assert_eq!(count(16), 1);
    assert_eq!(count(17), 2);
    assert_eq!(count(0), 0);
}

#[test]
fn queries_are_idempotent() {
    let railroad = sample();
    let (a, c) = (station('A'), station('C'));

    assert_eq!(
        railroad.count_trips_exact_stop(a, c, 4),
        railroad.count_trips_exact_stop(a, c, 4)
    );
    assert_eq!(
        railroad.shortest_route_length(a, c),
        railroad.shortest_route_length(a, c)
    );
    assert_eq!(
        railroad.routes_max_distance(c, c, 30),
        railroad.routes_max_distance(c, c, 30)
    );
    assert_eq!(railroad.graph(), &Graph::build(SAMPLE_NETWORK).unwrap());
}

#[test]
fn every_trip_follows_existing_connections() {
    let railroad = sample();
    for trip in railroad.trips_max_stop(station('A'), station('C'), 6) {
        assert!(railroad.graph().route_distance_of(&trip).is_ok());
        assert_eq!(trip.departure(), station('A'));
        assert_eq!(trip.arrival(), station('C'));
    }
}
