use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use railroad_server::config::ServerConfig;
use railroad_server::network::visualise;
use railroad_server::report::Report;
use railroad_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Build the network (fail fast if it is malformed)
    let railroad = match config.load_railroad() {
        Ok(railroad) => railroad,
        Err(e) => {
            error!(error = %e, "failed to load network");
            std::process::exit(1);
        }
    };
    info!(
        stations = railroad.graph().station_count(),
        edges = railroad.graph().edge_count(),
        "network loaded"
    );

    match visualise(railroad.graph()) {
        Ok(text) => println!("{text}"),
        Err(e) => error!(error = %e, "failed to render network"),
    }
    println!("{}", Report::sample(&railroad, config.max_query_depth));

    let state = AppState::new(railroad, config.max_query_depth);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    println!("Railroad server listening on http://{}", config.addr);
    println!();
    println!("API Endpoints:");
    println!("  GET /health                                    - Health check");
    println!("  GET /network                                   - Network (JSON or HTML)");
    println!("  GET /report                                    - Demonstration report");
    println!("  GET /distance?route=A-B-C                      - Route distance");
    println!("  GET /trips/max-stops?from=C&to=C&max_stops=3   - Trips by maximum stops");
    println!("  GET /trips/exact-stops?from=A&to=C&stops=4     - Trips by exact stops");
    println!("  GET /shortest?from=A&to=C                      - Shortest trip length");
    println!("  GET /routes/max-distance?from=C&to=C&max_distance=30 - Trips under a distance");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for shutdown signal");
        }
        info!("shutting down");
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}
