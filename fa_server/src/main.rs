//! Fire Arena tournament server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use ctrlc::set_handler;
use fa_server::api::{self, AppState};
use fa_server::config::ServerConfig;
use fa_server::metrics;
use fire_arena::{Arena, ArenaConfig};
use log::{info, warn};
use pico_args::Arguments;

const HELP: &str = "\
Fire Arena tournament server

USAGE:
  fa_server [OPTIONS]

OPTIONS:
  --bind ADDR          Address to bind the HTTP server to [default: 127.0.0.1:8080]
  --metrics-bind ADDR  Address for the Prometheus exporter (disabled when unset)

FLAGS:
  -h, --help           Prints help information

ENVIRONMENT:
  SERVER_BIND              Same as --bind
  METRICS_BIND             Same as --metrics-bind
  ARENA_BOOTSTRAP_ADMINS   Comma-separated identities granted the admin role at startup
  RUST_LOG                 Log level filter (e.g. info, debug)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load a .env file if one exists before reading any configuration.
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }
    let bind_override: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;
    let metrics_bind_override: Option<SocketAddr> = pargs.opt_value_from_str("--metrics-bind")?;

    set_handler(|| {
        std::process::exit(0);
    })?;

    env_logger::builder().format_target(false).init();

    let config = ServerConfig::from_env(bind_override, metrics_bind_override);
    config.validate()?;

    let arena_config = ArenaConfig::from_env();
    arena_config.validate()?;
    if arena_config.bootstrap_admins.is_empty() {
        warn!("No bootstrap admins configured; admin operations will be unreachable");
    }

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(Error::msg)?;
        info!("Metrics exporter running at http://{addr}/metrics");
    }

    let arena = Arc::new(Arena::new(arena_config));
    let app = api::create_router(AppState { arena });

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down server...");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
