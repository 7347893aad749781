use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pinger::{Monitor, MonitorConfig};

/// Continuously probe a router and an external server, appending each
/// outcome as a JSON line to a success or failure log.
#[derive(Parser, Debug)]
#[command(name = "pinger", version, about)]
struct Cli {
    /// Router / local gateway address (hostname or IP)
    #[arg(long, env = "PINGER_ROUTER")]
    router: String,

    /// External server address (hostname or IP)
    #[arg(long, env = "PINGER_EXTERNAL_SERVER")]
    external_server: String,

    /// File receiving successful probe records
    #[arg(long, env = "PINGER_SUCCESS_FILE")]
    success_file: PathBuf,

    /// File receiving failed probe records
    #[arg(long, env = "PINGER_FAILURE_FILE")]
    failure_file: PathBuf,

    /// Per-probe reply timeout in milliseconds
    #[arg(long, env = "PINGER_TIMEOUT")]
    timeout: u64,

    /// Delay between polling cycles in milliseconds
    #[arg(long, env = "PINGER_INTERVAL", default_value_t = 3000)]
    interval: u64,
}

impl From<Cli> for MonitorConfig {
    fn from(cli: Cli) -> Self {
        Self {
            router: cli.router,
            external_server: cli.external_server,
            success_file: cli.success_file,
            failure_file: cli.failure_file,
            timeout: Duration::from_millis(cli.timeout),
            interval: Duration::from_millis(cli.interval),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = MonitorConfig::from(Cli::parse());
    config.prepare_sink_dirs()?;

    log::info!(
        "polling {} and {} every {:?} (probe timeout {:?})",
        config.router,
        config.external_server,
        config.interval,
        config.timeout
    );

    Monitor::new(config).run().await;
    Ok(())
}
