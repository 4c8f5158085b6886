use std::net::SocketAddr;
use envconfig::Envconfig;
use tokio::signal;
use tracing::{error, info};
use pricing::core::controller::AppState;
use pricing::core::domain::Configuration;
use pricing::pricing::controller::app;
use pricing::utils::logging::setup_tracing;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to listen for SIGINT");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => { term.recv().await; }
            Err(err) => {
                error!(error = %err, "failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT"),
        _ = terminate => info!("received SIGTERM"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::init_from_env().map_err(|err| {
        error!(error = %err, "invalid configuration");
        err
    })?;
    let addr: SocketAddr = config.bind().parse().map_err(|err| {
        error!(bind = config.bind().as_str(), "invalid bind address");
        err
    })?;

    let state = AppState::new(config);
    let app = app(state);

    info!(%addr, "pricing service listening");
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("pricing service stopped");
    Ok(())
}
