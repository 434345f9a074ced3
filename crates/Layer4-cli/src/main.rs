//! Herald CLI - Main entry point

mod demo;

use anyhow::Context;
use clap::{Parser, Subcommand};
use herald_foundation::BrokerConfig;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Herald - in-process event broker
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Load broker config from this file instead of ~/.herald and ./.herald
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effective broker config as JSON
    Config,
    /// List the built-in demo event types
    Events,
    /// Fire a demo event at a printing listener
    Fire {
        /// Event name (message, shutdown, demo.message)
        name: String,

        /// Constructor arguments (JSON, or plain strings)
        args: Vec<String>,

        /// Subscribe a listener in front that cancels the event
        #[arg(long)]
        cancel_first: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = load_config(args.config.as_deref())?;
    debug!(?config, "Broker config loaded");

    match args.command {
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Events => {
            for name in demo::registry()?.names() {
                println!("{}", name);
            }
        }
        Command::Fire {
            name,
            args: raw,
            cancel_first,
        } => {
            let broker = demo::broker(config)?;
            broker.subscribe(&demo::printer(), &name)?;
            if cancel_first {
                broker.subscribe_first(&demo::canceler(), &name)?;
            }

            println!("Firing '{}'", name);
            broker.fire(&name, demo::parse_args(&raw))?;

            if broker.fired_count() == 0 {
                println!("No event type named '{}', nothing dispatched", name);
            }
            for record in broker.history(None) {
                println!(
                    "[{}] {} notified={} outcome={}",
                    record.timestamp.format("%H:%M:%S%.3f"),
                    record.event_name,
                    record.notified,
                    record.outcome.as_str()
                );
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<BrokerConfig> {
    match path {
        Some(path) => BrokerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("Cannot get current directory")?;
            Ok(BrokerConfig::load(&cwd)?)
        }
    }
}
