// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
// Suppress clippy warnings about unknown/renamed dylint lint names
#![allow(unknown_lints, renamed_and_removed_lints, max_lines_per_file)]
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

use clap::Parser;
use color_eyre::eyre::Result;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tracing::{info, warn};
use warehouse::config::{
    ensure_custom_root, load_user_config, user_config_path, ServerConfig, UserConfig,
    WarehouseConfig,
};
use warehouse::logging::{init_logging, parse_rotation, LogConfig};
use warehouse::store::{Scan, StoreError};
use warehouse::utils::{default_warehouse_path, format_display_path};
use warehouse::web::{build_router, AppState, Credentials};

const DEFAULT_BIND: &str = "0.0.0.0";

/// Warehouse - equipment and inventory tracker served over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (default: 8080, or `port` from the config file)
    #[arg(short, long, env = "WAREHOUSE_PORT")]
    port: Option<u16>,

    /// Address to bind the server to
    #[arg(long, env = "WAREHOUSE_BIND", default_value = DEFAULT_BIND)]
    bind: String,

    /// Warehouse directory (default: ~/.warehouse). Must already exist.
    #[arg(short, long, env = "WAREHOUSE_DIR")]
    dir: Option<PathBuf>,

    /// Location written to equipment when it is returned
    #[arg(long, env = "WAREHOUSE_RETURN_LOCATION")]
    return_location: Option<String>,

    /// Maximum number of item directories read concurrently
    #[arg(long, env = "WAREHOUSE_MAX_WORKERS")]
    max_workers: Option<usize>,

    /// Basic auth username; requires --auth-password
    #[arg(long, env = "WAREHOUSE_AUTH_USER")]
    auth_user: Option<String>,

    /// Basic auth password; requires --auth-user
    #[arg(long, env = "WAREHOUSE_AUTH_PASSWORD", hide_env_values = true)]
    auth_password: Option<String>,

    /// User config file (default: ~/.warehouse/config.toml)
    #[arg(long, env = "WAREHOUSE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "WAREHOUSE_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "WAREHOUSE_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: <warehouse>/logs)
    #[arg(long, env = "WAREHOUSE_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

impl Args {
    /// Server values given on the command line.
    fn server_overrides(&self) -> ServerConfig {
        ServerConfig {
            port: self.port,
            return_location: self.return_location.clone(),
            max_workers: self.max_workers,
        }
    }
}

/// Command-line credentials win; the `[auth]` table is the fallback.
fn resolve_credentials(args: &Args, user_cfg: &UserConfig) -> Option<Credentials> {
    Credentials::from_parts(args.auth_user.clone(), args.auth_password.clone()).or_else(|| {
        user_cfg.auth.as_ref().and_then(|auth| {
            Credentials::from_parts(Some(auth.username.clone()), Some(auth.password.clone()))
        })
    })
}

async fn log_startup_scan(state: &AppState) {
    let (equipment, inventory) = tokio::join!(state.equipment.items(), state.inventory.items());
    log_scan("equipment", state.equipment.root(), equipment);
    log_scan("inventory", state.inventory.root(), inventory);
}

fn log_scan<R>(module: &str, root: &Path, result: Result<Scan<R>, StoreError>) {
    let shown = format_display_path(root);
    match result {
        Ok(Scan { items, error: None }) => {
            info!(module, root = %shown, count = items.len(), "Loaded items");
        }
        Ok(Scan {
            items,
            error: Some(failures),
        }) => {
            warn!(module, root = %shown, count = items.len(), "Loaded items with errors: {failures}");
        }
        Err(e) => {
            warn!(module, root = %shown, "Failed to scan items: {e}");
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Received shutdown signal, stopping server...");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    // A directory given explicitly must exist; the default one is created.
    if let Some(dir) = &args.dir {
        ensure_custom_root(dir)?;
    }
    let root = args.dir.clone().unwrap_or_else(default_warehouse_path);

    let mut log_config = LogConfig {
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..LogConfig::for_warehouse(&root)
    };
    if let Some(dir) = &args.log_dir {
        log_config.log_dir.clone_from(dir);
    }

    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_config.log_file().display());
        eprintln!();
        return Err(e);
    }

    // User-level config is optional; a broken file falls back to defaults.
    let config_path = args.config.clone().unwrap_or_else(user_config_path);
    let user_cfg = load_user_config(&config_path).unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let server = user_cfg.server.clone().overlay(args.server_overrides());
    let config = server.apply(WarehouseConfig::new(root));
    let credentials = resolve_credentials(&args, &user_cfg);

    let addr = SocketAddr::new(args.bind.parse()?, server.port_or_default());

    info!(
        root = %format_display_path(&config.root),
        return_location = %config.return_location,
        max_workers = config.max_workers,
        auth = credentials.is_some(),
        "Starting warehouse"
    );

    let state = AppState::new(&config, credentials)?;
    log_startup_scan(&state).await;

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!();
            eprintln!("Error: Failed to bind {addr}: {e}");
            eprintln!("Logs: {}", log_config.log_file().display());
            eprintln!();
            return Err(e.into());
        }
    };
    info!("Listening on http://{addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Warehouse stopped");
    Ok(())
}
