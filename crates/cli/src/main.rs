use clap::Parser;
use portare_dns_domain::config::{DispatchMode, ZoneMatchOrder};
use portare_dns_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "portare-dns")]
#[command(version)]
#[command(about = "Portare DNS - Authoritative DNS server over UDP")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Zone suffix walk order (shortest_first, longest_first)
    #[arg(long)]
    zone_match_order: Option<ZoneMatchOrder>,

    /// Datagram dispatch (concurrent, sequential)
    #[arg(long)]
    dispatch: Option<DispatchMode>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        zone_match_order: cli.zone_match_order,
        dispatch: cli.dispatch,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Portare DNS Server v{}", env!("CARGO_PKG_VERSION"));

    let store = bootstrap::seed_zones(&config).await?;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        bootstrap::wait_for_shutdown_signal().await;
        info!("Shutdown signal received");
        signal_token.cancel();
    });

    if let Err(e) = server::start_dns_server(&config, store, shutdown).await {
        error!(error = %e, "DNS server error");
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}
