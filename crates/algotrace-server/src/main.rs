//! Binary entrypoint for the algotrace HTTP server.
//!
//! Configuration is read from the environment, see [`ServerConfig`].

use algotrace_server::config::ServerConfig;
use algotrace_server::router::build_router;
use algotrace_server::state::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = config.addr();
    tracing::info!("algotrace server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}
