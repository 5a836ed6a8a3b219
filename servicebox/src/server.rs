//! axumサーバー起動・シャットダウンハンドリング
//!
//! BOOTING → READY lifecycle. By default the socket is bound only after the
//! startup delay; with `listen_during_startup` it is bound first so probes can
//! observe the 503 phase.

use crate::common::error::ServiceError;
use crate::config::ServiceConfig;
use crate::shutdown::{wait_for_shutdown, ShutdownController, ShutdownReason};
use crate::AppState;
use std::future::IntoFuture;
use tokio::net::TcpListener;
use tracing::info;

/// Run the service until a signal, a shutdown request, or a fatal listener error.
///
/// Stopping drops the accept loop and every open connection; nothing is drained.
pub async fn run(
    config: ServiceConfig,
    shutdown: ShutdownController,
) -> Result<ShutdownReason, ServiceError> {
    let state = AppState::new(&config);
    run_with_state(config, state, shutdown).await
}

/// Like [`run`], with caller-owned state (lets tests inspect counters).
pub async fn run_with_state(
    config: ServiceConfig,
    state: AppState,
    shutdown: ShutdownController,
) -> Result<ShutdownReason, ServiceError> {
    info!(
        "Starting on port {} (PID: {})...",
        config.port,
        std::process::id()
    );
    info!(
        "Initializing... (takes ~{}s)",
        config.startup_delay.as_secs()
    );

    tokio::select! {
        result = boot_and_serve(&config, state) => {
            result?;
            Err(ServiceError::ListenerClosed)
        }
        reason = wait_for_shutdown(shutdown) => {
            match reason {
                ShutdownReason::Signal(signal) => {
                    info!("Received signal {}, shutting down...", signal);
                }
                ShutdownReason::Requested => {
                    info!("Shutdown requested, shutting down...");
                }
            }
            Ok(reason)
        }
    }
}

async fn boot_and_serve(config: &ServiceConfig, state: AppState) -> Result<(), ServiceError> {
    let app = crate::api::create_app(state.clone());

    if config.listen_during_startup {
        let listener = bind(config).await?;
        info!(
            "Listening during startup on http://localhost:{}",
            config.port
        );
        let booting = async {
            boot(config, &state).await;
            info!("Ready. Listening on http://localhost:{}", config.port);
        };
        let (_, served) = tokio::join!(booting, axum::serve(listener, app).into_future());
        served?;
    } else {
        boot(config, &state).await;
        let listener = bind(config).await?;
        info!("Ready. Listening on http://localhost:{}", config.port);
        axum::serve(listener, app).await?;
    }
    Ok(())
}

async fn boot(config: &ServiceConfig, state: &AppState) {
    tokio::time::sleep(config.startup_delay).await;
    state.runtime.mark_ready();
}

async fn bind(config: &ServiceConfig) -> Result<TcpListener, ServiceError> {
    let addr = config.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })
}
