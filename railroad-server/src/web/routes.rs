//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::network::{GraphError, InvalidStation, Station, visualise};
use crate::report::Report;

use super::dto::*;
use super::state::AppState;
use super::templates::NetworkTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network))
        .route("/report", get(report))
        .route("/distance", get(route_distance))
        .route("/trips/max-stops", get(trips_max_stops))
        .route("/trips/exact-stops", get(trips_exact_stops))
        .route("/shortest", get(shortest))
        .route("/routes/max-distance", get(routes_max_distance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// The network's connections, as an HTML page or JSON.
async fn network(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let graph = state.railroad.graph();

    if accepts_html(&headers) {
        let html = NetworkTemplate::from_graph(graph)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(NetworkResponse::from_graph(graph)).into_response())
    }
}

/// Plain-text visualisation followed by the demonstration report.
async fn report(State(state): State<AppState>) -> Result<String, AppError> {
    let mut text = visualise(state.railroad.graph()).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    text.push('\n');
    text.push_str(&Report::sample(&state.railroad, state.max_query_depth).to_string());
    Ok(text)
}

/// Distance of an explicit route.
async fn route_distance(
    State(state): State<AppState>,
    Query(req): Query<DistanceRequest>,
) -> Result<Json<DistanceResponse>, AppError> {
    let distance = state.railroad.route_distance(&req.route)?;
    Ok(Json(DistanceResponse {
        route: req.route,
        distance,
    }))
}

/// Trips with at most `max_stops` stops.
async fn trips_max_stops(
    State(state): State<AppState>,
    Query(req): Query<MaxStopsRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let (from, to) = parse_stations(&req.from, &req.to)?;
    check_depth(&state, "max_stops", req.max_stops as u64)?;

    let trips = state.railroad.trips_max_stop(from, to, req.max_stops);
    debug!(%from, %to, max_stops = req.max_stops, trips = trips.len(), "max-stop trips");
    Ok(Json(RoutesResponse::new(trips)))
}

/// Trips with exactly `stops` stops.
async fn trips_exact_stops(
    State(state): State<AppState>,
    Query(req): Query<ExactStopsRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let (from, to) = parse_stations(&req.from, &req.to)?;
    check_depth(&state, "stops", req.stops as u64)?;

    let trips = state.railroad.trips_exact_stop(from, to, req.stops);
    debug!(%from, %to, stops = req.stops, trips = trips.len(), "exact-stop trips");
    Ok(Json(RoutesResponse::new(trips)))
}

/// Length of the shortest trip.
async fn shortest(
    State(state): State<AppState>,
    Query(req): Query<ShortestRequest>,
) -> Result<Json<ShortestResponse>, AppError> {
    let (from, to) = parse_stations(&req.from, &req.to)?;
    let distance = state.railroad.shortest_route_length(from, to)?;
    Ok(Json(ShortestResponse { from, to, distance }))
}

/// Trips shorter than `max_distance`.
async fn routes_max_distance(
    State(state): State<AppState>,
    Query(req): Query<MaxDistanceRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let (from, to) = parse_stations(&req.from, &req.to)?;
    // The distance doubles as the enumeration stop bound
    check_depth(&state, "max_distance", req.max_distance)?;

    let routes = state
        .railroad
        .routes_max_distance(from, to, req.max_distance)?;
    Ok(Json(RoutesResponse::new(routes)))
}

fn parse_stations(from: &str, to: &str) -> Result<(Station, Station), AppError> {
    Ok((Station::parse(from)?, Station::parse(to)?))
}

/// Reject bounds that would make enumeration too expensive.
fn check_depth(state: &AppState, name: &str, value: u64) -> Result<(), AppError> {
    if value > state.max_query_depth as u64 {
        return Err(AppError::BadRequest {
            message: format!(
                "{name} must be at most {}, got {value}",
                state.max_query_depth
            ),
        });
    }
    Ok(())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<InvalidStation> for AppError {
    fn from(e: InvalidStation) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<GraphError> for AppError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::EdgeNotFound { .. } | GraphError::Unreachable { .. } => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
            GraphError::NotText(_) | GraphError::Node(_) | GraphError::InvalidStation(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
