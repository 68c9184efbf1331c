use arp_channel_application::services::MethodDispatcher;
use arp_channel_domain::{CliOverrides, MethodCall, MethodResult, METHOD_GET_ARP_TABLE};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "arp-channel")]
#[command(version)]
#[command(about = "Kernel ARP neighbor table over a JSON method channel")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Default)]
enum Command {
    /// Print the current ARP table as JSON (default)
    #[default]
    Read,
    /// Answer newline-delimited JSON method calls on stdin until EOF
    Serve,
    /// List the methods registered on the channel
    Methods,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let use_cases = di::UseCases::new();
    let dispatcher = use_cases.arp_channel();

    match cli.command.unwrap_or_default() {
        Command::Read => println!("{}", read_arp_table(&dispatcher)?),
        Command::Serve => {
            info!(
                "Starting arp-channel v{} on {}",
                env!("CARGO_PKG_VERSION"),
                dispatcher.channel()
            );
            let served = server::serve_stdio(Arc::new(dispatcher)).await?;
            info!(served, "Shutdown complete");
        }
        Command::Methods => {
            for method in dispatcher.methods() {
                println!("{}/{}", dispatcher.channel(), method);
            }
        }
    }

    Ok(())
}

/// A handler error is reported once, by the returned error.
fn read_arp_table(dispatcher: &MethodDispatcher) -> anyhow::Result<String> {
    match dispatcher.dispatch(&MethodCall::new(METHOD_GET_ARP_TABLE)) {
        MethodResult::Success { result } => Ok(result),
        MethodResult::Error { code, message } => anyhow::bail!("{}: {}", code, message),
        MethodResult::NotImplemented => {
            anyhow::bail!("{} is not implemented", METHOD_GET_ARP_TABLE)
        }
    }
}
