use clap::Parser;
use tern_dns_domain::config::CliOverrides;
use tern_dns_infrastructure::dns::server::DnsServerHandler;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "tern-dns")]
#[command(version)]
#[command(about = "Tern DNS - caching forwarder with local authoritative zones")]
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

    /// Upstream resolver (ip:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Zone file path
    #[arg(short = 'z', long, value_name = "FILE")]
    zones: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        upstream: cli.upstream,
        zones_path: cli.zones,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Tern DNS Server v{}", env!("CARGO_PKG_VERSION"));

    let zones = bootstrap::load_zones(&config);
    let dns_services = di::DnsServices::new(&config, zones).await?;
    let dns_handler = DnsServerHandler::new(dns_services.handler_use_case);

    let dns_addr = config.server.listen_address();
    let mut upstream_task = dns_services.upstream_task;

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_handler) => {
            result?;
        }
        outcome = &mut upstream_task => {
            match outcome {
                Ok(Ok(())) => info!("Passthrough resolver stopped"),
                Ok(Err(e)) => {
                    error!(error = %e, "Upstream failure, shutting down");
                    return Err(e.into());
                }
                Err(e) => {
                    error!(error = %e, "Passthrough resolver task failed");
                    return Err(e.into());
                }
            }
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
