use cafe_queue::config::Args;
use cafe_queue::error::CafeError;
use cafe_queue::http::{self, AppState};
use cafe_queue::lifecycle::{setup_tracing, CafeSystem};
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), CafeError> {
    let args = Args::parse();
    setup_tracing(&args.log_level);

    let config = args.into_config()?;
    info!(
        bind = %config.bind,
        static_dir = %config.static_dir.display(),
        offset = %config.offset,
        "Starting café"
    );

    let system = CafeSystem::from_config(&config);
    let router = http::router(AppState::new(system.queue_client.clone()), &config.static_dir);

    let listener = TcpListener::bind(config.bind).await?;
    let served = http::serve(listener, router, async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    })
    .await;

    // The router (and its client clones) is gone once serve returns.
    system.shutdown().await?;
    served
}
