use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::common::errors::{DeskError, Result};
use crate::common::types::{normalize_symbol, parse_amount};
use crate::config::MarketConfig;
use crate::market::{MarketRegistry, PassiveObserver, PriceListener, ThresholdTrader};

const HELP: &str = "\
commands:
  observer [NAME]                 attach a passive observer
  trader [BUY_BELOW SELL_ABOVE]   attach a threshold trader
  detach N                        detach the listener at position N (see list)
  update SYMBOL PRICE             set a price and notify listeners
  price SYMBOL                    show the stored price (0 if never set)
  list                            show listeners and prices
  help                            show this text
  quit                            leave the session";

/// One line of input to a market session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketCommand {
    AttachObserver {
        name: Option<String>,
    },
    /// Thresholds fall back to the configured defaults when absent
    AttachTrader {
        thresholds: Option<(Decimal, Decimal)>,
    },
    /// 1-based roster position
    Detach(usize),
    Update {
        symbol: String,
        price: Decimal,
    },
    Price(String),
    List,
    Help,
    Quit,
}

impl FromStr for MarketCommand {
    type Err = DeskError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let command = parts
            .next()
            .ok_or_else(|| DeskError::InvalidInput("empty command".to_string()))?
            .to_lowercase();
        let args: Vec<&str> = parts.collect();

        let parsed = match (command.as_str(), args.as_slice()) {
            ("observer" | "1", []) => MarketCommand::AttachObserver { name: None },
            ("observer" | "1", [name]) => MarketCommand::AttachObserver {
                name: Some(name.to_string()),
            },
            ("trader" | "robot" | "2", []) => MarketCommand::AttachTrader { thresholds: None },
            ("trader" | "robot" | "2", [buy, sell]) => MarketCommand::AttachTrader {
                thresholds: Some((parse_amount(buy)?, parse_amount(sell)?)),
            },
            ("detach", [position]) => {
                let position: usize = position
                    .parse()
                    .map_err(|_| DeskError::InvalidInput(format!("not a position: {}", position)))?;
                if position == 0 {
                    return Err(DeskError::InvalidInput("positions start at 1".to_string()));
                }
                MarketCommand::Detach(position)
            }
            ("update", [symbol, price]) => MarketCommand::Update {
                symbol: normalize_symbol(symbol)?,
                price: parse_amount(price)?,
            },
            ("price", [symbol]) => MarketCommand::Price(normalize_symbol(symbol)?),
            ("list", []) => MarketCommand::List,
            ("help" | "?", []) => MarketCommand::Help,
            ("quit" | "exit" | "0", []) => MarketCommand::Quit,
            _ => {
                return Err(DeskError::InvalidInput(format!(
                    "unrecognized command: {} (try help)",
                    line.trim()
                )))
            }
        };

        Ok(parsed)
    }
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub updates: usize,
    pub errors: usize,
}

/// Drive `registry` from line commands read from `input`
///
/// Every `update` writes one line per attached listener, in attachment
/// order (JSON objects when `json` is set). Malformed lines produce an
/// `error:` line and the session continues; only I/O failures end it early.
pub fn run_session<R: BufRead, W: Write>(
    registry: &mut MarketRegistry,
    defaults: &MarketConfig,
    input: R,
    out: &mut W,
    json: bool,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<MarketCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected session input: {}", e);
                summary.errors += 1;
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };
        summary.commands += 1;
        debug!("Session command: {:?}", command);

        match command {
            MarketCommand::AttachObserver { name } => {
                let observer = match name {
                    Some(name) => PassiveObserver::named(name),
                    None => PassiveObserver::new(),
                };
                writeln!(out, "attached {}", observer.name())?;
                registry.attach(Arc::new(observer));
            }
            MarketCommand::AttachTrader { thresholds } => {
                let (buy_below, sell_above) =
                    thresholds.unwrap_or((defaults.default_buy_below, defaults.default_sell_above));
                registry.attach(Arc::new(ThresholdTrader::new(buy_below, sell_above)));
                writeln!(
                    out,
                    "attached trader (buy below {}, sell above {})",
                    buy_below, sell_above
                )?;
            }
            MarketCommand::Detach(position) => match registry.detach_at(position - 1) {
                Some(listener) => writeln!(out, "detached {}", listener.name())?,
                None => {
                    summary.errors += 1;
                    writeln!(out, "error: no listener at position {}", position)?;
                }
            },
            MarketCommand::Update { symbol, price } => {
                summary.updates += 1;
                let reactions = registry.update_price(symbol, price);
                for reaction in &reactions {
                    if json {
                        writeln!(out, "{}", serde_json::to_string(reaction)?)?;
                    } else {
                        writeln!(out, "{}", reaction)?;
                    }
                }
            }
            MarketCommand::Price(symbol) => {
                writeln!(out, "{} {}", symbol, registry.get_price(&symbol))?;
            }
            MarketCommand::List => {
                for (index, listener) in registry.listeners().iter().enumerate() {
                    writeln!(out, "{}. {}", index + 1, listener.name())?;
                }
                for (symbol, price) in registry.prices() {
                    writeln!(out, "{} {}", symbol, price)?;
                }
            }
            MarketCommand::Help => writeln!(out, "{}", HELP)?,
            MarketCommand::Quit => break,
        }
    }

    Ok(summary)
}
