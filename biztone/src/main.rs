use biztone::{AppState, Config, app, init_logging};
use clap::Parser;
use tracing::{info, warn};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine; the environment may already be populated
    let _ = dotenvy::dotenv();
    let config = Config::parse();
    init_logging();

    let state = AppState::new(config.converter());
    let app = app(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, static_dir = %config.static_dir.display(), "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            warn!(error = %e, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await
        }
    }
}
