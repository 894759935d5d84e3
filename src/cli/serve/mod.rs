//! Serve command - runs the HTTP API together with the daily post job

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::api::create_router;
use crate::config::AppConfig;
use crate::domain::SystemClock;
use crate::infrastructure::logging;
use crate::infrastructure::scheduler::{DailyPostJob, DailyScheduler};
use crate::infrastructure::services::PostGenerator;

/// Run the API server and the scheduler until a shutdown signal arrives
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging)?;

    let post_generator = match crate::create_post_generator(&config.gemini) {
        Ok(generator) => generator,
        Err(e) => {
            error!(error = %e, "Application not started: Gemini API key not found");
            return Err(e.into());
        }
    };

    let scheduler = start_scheduler(&config, post_generator.clone())?;

    let state = crate::create_app_state(post_generator);
    let app = create_router(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some((shutdown, handle)) = scheduler {
        // Err only when the scheduler task has already exited
        let _ = shutdown.send(true);

        if let Err(e) = handle.await {
            warn!(error = %e, "Scheduler task ended abnormally");
        }
    }

    info!("Server shutdown complete");

    Ok(())
}

fn start_scheduler(
    config: &AppConfig,
    post_generator: Arc<PostGenerator>,
) -> anyhow::Result<Option<(watch::Sender<bool>, JoinHandle<()>)>> {
    if !config.scheduler.enabled {
        info!("Daily post job disabled");
        return Ok(None);
    }

    let schedule = config.scheduler.schedule()?;
    let job = Arc::new(DailyPostJob::new(post_generator));
    let scheduler = DailyScheduler::new(schedule, Arc::new(SystemClock), job);

    Ok(Some(scheduler.spawn()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
