use clap::Parser;
use pdns_backend_api::AppState;
use pdns_backend_domain::CliOverrides;
use pdns_backend_jobs::{JobRunner, SuffixRefreshJob};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "pdns-backend")]
#[command(version)]
#[command(about = "PowerDNS remote backend serving zones from sqlite")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// UNIX socket path
    #[arg(short = 's', long, value_name = "PATH")]
    socket: Option<String>,

    /// HTTP endpoint port (enables the HTTP endpoint)
    #[arg(short = 'p', long)]
    http_port: Option<u16>,

    /// HTTP bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        socket_path: cli.socket.clone(),
        http_port: cli.http_port,
        http_bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting PowerDNS remote backend v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let suffix = di::SuffixServices::new(&config, &repos)?;
    let use_cases = di::UseCases::new(&config, &repos, &suffix);

    let shutdown = CancellationToken::new();
    tokio::spawn(wait_for_signal(shutdown.clone()));

    let mut jobs = JobRunner::new().with_shutdown_token(shutdown.clone());
    if let Some(table) = suffix.table.clone() {
        jobs = jobs.with_suffix_refresh(
            SuffixRefreshJob::new(table).with_interval(config.suffix.refresh_interval_secs),
        );
    }
    jobs.start().await;

    let web_task = if config.server.http_enabled {
        let web_addr: SocketAddr = format!(
            "{}:{}",
            config.server.http_bind_address, config.server.http_port
        )
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid HTTP bind address: {}", e))?;

        let app_state = AppState {
            engine: use_cases.engine.clone(),
            get_queries: use_cases.get_queries.clone(),
        };
        let web_shutdown = shutdown.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = server::start_web_server(web_addr, app_state, web_shutdown).await {
                error!(error = %e, "HTTP endpoint error");
            }
        }))
    } else {
        None
    };

    let result = server::start_socket_server(
        &config.server.socket_path,
        use_cases.engine.clone(),
        shutdown.clone(),
    )
    .await;

    shutdown.cancel();
    if let Some(task) = web_task {
        if let Err(e) = task.await {
            warn!(error = %e, "HTTP endpoint task did not finish cleanly");
        }
    }

    if let Err(e) = result {
        error!(error = %e, "Remote backend socket server failed");
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}

async fn wait_for_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
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
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
    shutdown.cancel();
}
