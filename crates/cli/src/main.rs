use clap::Parser;
use jailwatch_api::AppState;
use jailwatch_application::use_cases::ReconcileOutcome;
use jailwatch_domain::{CliOverrides, HistoryBackend};
use jailwatch_jobs::{HistoryPruneJob, JobRunner, ReconciliationJob};
use std::net::{IpAddr, SocketAddr};
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "jailwatch")]
#[command(version)]
#[command(about = "Jailwatch - fail2ban ban history monitor with a web dashboard")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// History backend (json, sqlite)
    #[arg(long)]
    history_backend: Option<HistoryBackend>,

    /// JSON history file path
    #[arg(long, value_name = "FILE")]
    history_path: Option<String>,

    /// SQLite database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Run a single reconciliation pass, print its report and exit
    #[arg(long)]
    once: bool,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    init_config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        history_backend: cli.history_backend,
        history_path: cli.history_path.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    if let Some(path) = cli.init_config.as_deref() {
        config.save(path)?;
        println!("Configuration written to {}", path);
        return Ok(());
    }

    bootstrap::init_logging(&config);

    info!("Starting Jailwatch v{}", env!("CARGO_PKG_VERSION"));

    let adapters = di::Adapters::new(&config).await?;
    let use_cases = di::UseCases::new(&config, &adapters)?;

    if cli.once {
        return match use_cases.reconcile.execute().await {
            ReconcileOutcome::Completed(report) => {
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(())
            }
            ReconcileOutcome::Skipped => anyhow::bail!("reconciliation already running"),
            ReconcileOutcome::Failed(reason) => anyhow::bail!("reconciliation failed: {}", reason),
        };
    }

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_reconciliation(
            ReconciliationJob::new(use_cases.reconcile.clone())
                .with_interval(config.scheduler.reconcile_interval_secs)
                .with_run_on_startup(config.scheduler.run_on_startup),
        )
        .with_history_prune(
            HistoryPruneJob::new(use_cases.prune_history.clone())
                .with_interval(config.scheduler.prune_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let app_state = AppState {
        get_history: use_cases.get_history,
        get_status: use_cases.get_status,
        reconcile: use_cases.reconcile,
        display_tz: use_cases.display_tz,
    };

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", config.server.bind_address, e))?;
    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);

    tokio::spawn(server::cancel_on_signal(shutdown.clone()));

    server::start_web_server(web_addr, app_state, shutdown.clone()).await?;

    shutdown.cancel();
    info!("Server shutdown complete");
    Ok(())
}
