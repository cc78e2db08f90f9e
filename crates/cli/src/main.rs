//! # netbridge
//!
//! Feeds control-plane lifecycle events to the network, subnet and port
//! handlers and prints one status line per event.

mod bootstrap;
mod di;
mod events;

use bootstrap::{init_logging, load_config};
use clap::Parser;
use events::Dispatcher;
use netbridge_domain::CliOverrides;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tracing::info;

#[derive(Parser)]
#[command(name = "netbridge")]
#[command(version)]
#[command(about = "Bridges network, subnet and port events to a network-virtualization API server")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// API server host
    #[arg(long)]
    api_host: Option<String>,

    /// API server port
    #[arg(long)]
    api_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// JSON-lines event file, or `-` for stdin
    #[arg(default_value = "-")]
    events: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        api_host: cli.api_host,
        api_port: cli.api_port,
        log_level: cli.log_level,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        api_server = %config.api_server.base_url(),
        "Configuration loaded"
    );

    let handlers = di::connect(&config).await?;
    let dispatcher = Dispatcher::new(handlers);

    if cli.events == "-" {
        run(&dispatcher, tokio::io::stdin()).await
    } else {
        let file = tokio::fs::File::open(&cli.events).await?;
        run(&dispatcher, file).await
    }
}

async fn run<R>(dispatcher: &Dispatcher, input: R) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let mut stdout = tokio::io::stdout();
    let mut line_no = 0;
    let mut processed = 0;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = dispatcher.dispatch_line(line_no, &line).await;
        let mut json = serde_json::to_vec(&outcome)?;
        json.push(b'\n');
        stdout.write_all(&json).await?;
        processed += 1;
    }
    stdout.flush().await?;

    info!(
        events = processed,
        subnets_registered = dispatcher.handlers().registry.len(),
        "Event stream finished"
    );

    Ok(())
}
