//! Binary entrypoint for the headcount server.
//!
//! Reads configuration from environment variables (see
//! [`headcount_server::config`]), optionally seeds the contact store from the
//! remote users API, and serves until Ctrl-C or SIGTERM.

use headcount_server::config::ServerConfig;
use headcount_server::retry::RetryPolicy;
use headcount_server::router::build_router;
use headcount_server::seed;
use headcount_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "server error");
        std::process::exit(1);
    }
}

async fn run() -> std::io::Result<()> {
    let config = ServerConfig::from_env();

    let contacts = if config.seed_from_api {
        match seed::fetch_contacts(&config.api_url, &RetryPolicy::default()).await {
            Ok(contacts) => contacts,
            Err(err) => {
                tracing::warn!(error = %err, "seeding failed, starting with no contacts");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let addr = config.bind_addr();
    let state = AppState::with_contacts(contacts, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("headcount server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server gracefully stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
