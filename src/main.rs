#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use chirp_server::api::{AppState, MgmtState};
use chirp_server::config::Config;
use chirp_server::services::account_service::AccountService;
use chirp_server::services::health_service::HealthService;
use chirp_server::services::message_service::MessageService;
use chirp_server::storage::account_repo::AccountRepository;
use chirp_server::storage::message_repo::MessageRepository;
use chirp_server::{api, storage, telemetry};
use std::net::SocketAddr;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    telemetry::init_telemetry(&config.telemetry)?;

    // Phase 1: Infrastructure Setup (Resources)
    let pool = storage::init_pool(&config.database_url, config.db_max_connections).await?;
    storage::init_schema(&pool).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    spawn_signal_handler(shutdown_tx);

    // Phase 2: Component Wiring (Pure logic, no side effects)
    let account_repo = AccountRepository::new(pool.clone());
    let message_repo = MessageRepository::new(pool.clone());

    let state = AppState {
        account_service: AccountService::new(account_repo.clone()),
        message_service: MessageService::new(message_repo, account_repo),
    };
    let mgmt_state = MgmtState { health_service: HealthService::new(pool, config.health.clone()) };

    // Phase 3: Runtime Setup (Listeners and Routers)
    let app_router = api::app_router(state);
    let mgmt_router = api::mgmt_router(mgmt_state);

    let api_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let mgmt_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.mgmt_port).parse()?;

    let api_listener = tokio::net::TcpListener::bind(api_addr).await?;
    let mgmt_listener = tokio::net::TcpListener::bind(mgmt_addr).await?;

    tracing::info!(address = %api_addr, "listening");
    tracing::info!(address = %mgmt_addr, "management server listening");

    // Phase 4: Start Runtime
    let mut api_rx = shutdown_rx.clone();
    let api_server = axum::serve(api_listener, app_router).with_graceful_shutdown(async move {
        let _ = api_rx.wait_for(|&s| s).await;
    });

    let mut mgmt_rx = shutdown_rx;
    let mgmt_server = axum::serve(mgmt_listener, mgmt_router).with_graceful_shutdown(async move {
        let _ = mgmt_rx.wait_for(|&s| s).await;
    });

    if let Err(e) = tokio::try_join!(api_server, mgmt_server) {
        tracing::error!(error = %e, "Server error");
    }

    Ok(())
}

fn spawn_signal_handler(shutdown_tx: watch::Sender<bool>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
        }
        let _ = shutdown_tx.send(true);
    });
}
