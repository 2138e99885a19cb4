//! BookingDesk - Main Entry Point
//!
//! Console front end for fare quoting and the stock price market session.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use booking_desk::cli::{run_quote, run_session, QuoteRequest};
use booking_desk::common::types::parse_amount;
use booking_desk::config::load_config;
use booking_desk::{MarketRegistry, ServiceTier, TransportMode};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, env = "BOOKING_DESK_LOG", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a trip
    Quote {
        /// Distance in kilometers
        #[arg(short, long, value_parser = parse_decimal, allow_hyphen_values = true)]
        distance: Decimal,

        /// Service tier: economy or business (1 or 2)
        #[arg(short, long, default_value = "economy")]
        tier: ServiceTier,

        /// Transport mode: air, rail or road (1, 2 or 3)
        #[arg(short, long)]
        mode: TransportMode,

        /// Flat discount subtracted from the fare
        #[arg(long, value_parser = parse_decimal, allow_hyphen_values = true)]
        discount: Option<Decimal>,

        /// Print the full quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read market commands from stdin (type `help` for the list)
    Market {
        /// Print listener reactions as JSON lines
        #[arg(long)]
        json: bool,
    },
}

fn parse_decimal(input: &str) -> std::result::Result<Decimal, String> {
    parse_amount(input).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present, before clap
    // reads `env` fallbacks such as BOOKING_DESK_LOG
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();
    let config = load_config(Some(&args.config))?;

    // Initialize logging
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.settings.log_level.clone());
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting BookingDesk");
    info!("Configuration file: {}", args.config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Quote {
            distance,
            tier,
            mode,
            discount,
            json,
        } => {
            let request = QuoteRequest {
                distance,
                tier,
                mode,
                discount,
            };
            run_quote(&request, &config.booking, json, &mut out)?;
        }
        Command::Market { json } => {
            let mut registry = MarketRegistry::new();
            let stdin = io::stdin();
            let summary = run_session(&mut registry, &config.market, stdin.lock(), &mut out, json)?;
            info!(
                "Session closed after {} commands ({} updates, {} errors)",
                summary.commands, summary.updates, summary.errors
            );
        }
    }

    Ok(())
}
