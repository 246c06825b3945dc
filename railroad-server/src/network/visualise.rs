//! Plain-text rendering of a network's connections.

use askama::Template;

use super::{Graph, Station};

/// One departure station and its outgoing connections.
#[derive(Debug, Clone)]
pub struct DepartureView {
    pub station: Station,
    pub legs: Vec<LegView>,
}

/// A single outgoing connection.
#[derive(Debug, Clone)]
pub struct LegView {
    pub arrival: Station,
    pub distance: u32,
}

impl DepartureView {
    /// One view per departure station, in insertion order.
    pub fn from_graph(graph: &Graph) -> Vec<Self> {
        graph
            .stations()
            .map(|station| DepartureView {
                station,
                legs: graph
                    .neighbors(station)
                    .filter_map(|arrival| {
                        let distance = graph.distance(station, arrival).ok()?;
                        Some(LegView { arrival, distance })
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Template)]
#[template(
    source = "{%- for departure in departures %}\n*** The distance between the station {{ departure.station }} and:\n{%- for leg in departure.legs %}\n\t- the station {{ leg.arrival }} is: {{ leg.distance }} units\n{%- endfor %}\n{%- endfor %}\n",
    ext = "txt"
)]
struct NetworkText {
    departures: Vec<DepartureView>,
}

/// Render every connection of the network, grouped by departure station.
pub fn visualise(graph: &Graph) -> Result<String, askama::Error> {
    NetworkText {
        departures: DepartureView::from_graph(graph),
    }
    .render()
}
