//! Askama templates for the web frontend.

use askama::Template;

use crate::network::{DepartureView, Graph};

/// Network overview page.
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Railroad network</title></head>
<body>
<h1>Railroad network</h1>
<p>{{ edge_count }} connections, total distance {{ sum_edges_weight }} units.</p>
{% for departure in departures %}
<h2>From {{ departure.station }}</h2>
<ul>
{% for leg in departure.legs %}  <li>to {{ leg.arrival }}: {{ leg.distance }} units</li>
{% endfor %}</ul>
{% endfor %}
</body>
</html>
"#,
    ext = "html"
)]
pub struct NetworkTemplate {
    pub departures: Vec<DepartureView>,
    pub edge_count: usize,
    pub sum_edges_weight: u64,
}

impl NetworkTemplate {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            departures: DepartureView::from_graph(graph),
            edge_count: graph.edge_count(),
            sum_edges_weight: graph.sum_edges_weight(),
        }
    }
}
