/*
[INPUT]:  Parsed command line and application configuration
[OUTPUT]: Dispatch of one subcommand against a configured FuturesClient
[POS]:    CLI layer - argument definitions and command routing
[UPDATE]: When adding subcommands or flags
*/

pub mod interactive;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use binance_futures_adapter::{FuturesClient, OrderInput};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use binance_futures_bot::credentials::{
    CredentialFlags, CredentialPrompt, TerminalPrompt, process_env, resolve_credentials,
};
use binance_futures_bot::{AppConfig, Renderer, orders};

#[derive(Parser, Debug)]
#[command(
    name = "trading-bot",
    version,
    about = "Binance USDT-M futures testnet trading bot",
    after_help = "Credentials: --api-key/--api-secret, or BINANCE_API_KEY/BINANCE_API_SECRET"
)]
pub struct Cli {
    /// Testnet API key (falls back to BINANCE_API_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,
    /// Testnet API secret (falls back to BINANCE_API_SECRET)
    #[arg(long, global = true, value_name = "SECRET")]
    pub api_secret: Option<String>,
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
    /// Console log level or EnvFilter directive
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Place a single order
    Order(OrderArgs),
    /// Show non-zero account balances
    Balance,
    /// List open orders
    OpenOrders {
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Cancel an open order
    Cancel {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        order_id: i64,
    },
    /// Show exchange server time
    Time,
    /// Show exchange or symbol trading rules
    ExchangeInfo {
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Menu-driven session
    Interactive,
}

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Trading pair, e.g. BTCUSDT
    #[arg(long)]
    pub symbol: String,
    /// BUY or SELL
    #[arg(long)]
    pub side: String,
    /// MARKET, LIMIT or STOP_MARKET
    #[arg(long = "type", value_name = "TYPE")]
    pub order_type: String,
    #[arg(long, allow_negative_numbers = true)]
    pub qty: Decimal,
    /// Limit price (LIMIT, STOP_MARKET)
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<Decimal>,
    /// Trigger price (STOP_MARKET)
    #[arg(long, allow_negative_numbers = true)]
    pub stop_price: Option<Decimal>,
    /// GTC, IOC or FOK (LIMIT only)
    #[arg(long)]
    pub time_in_force: Option<String>,
    #[arg(long)]
    pub reduce_only: bool,
}

impl From<OrderArgs> for OrderInput {
    fn from(args: OrderArgs) -> Self {
        OrderInput {
            symbol: args.symbol,
            side: args.side,
            order_type: args.order_type,
            quantity: args.qty,
            price: args.price,
            stop_price: args.stop_price,
            time_in_force: args.time_in_force,
            reduce_only: args.reduce_only,
        }
    }
}

/// Resolve credentials, build the client and run the chosen command
pub async fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let flags = CredentialFlags {
        api_key: cli.api_key,
        api_secret: cli.api_secret,
    };
    let terminal = TerminalPrompt;
    let prompt: Option<&dyn CredentialPrompt> = if io::stdin().is_terminal() {
        Some(&terminal)
    } else {
        None
    };
    let credentials = resolve_credentials(&flags, process_env, prompt)?;

    let client = FuturesClient::with_config_and_base_url(
        credentials,
        config.client_config(),
        &config.base_url,
    )
    .context("build futures client")?;
    let mut renderer = Renderer::stdout();

    match cli.command {
        Command::Order(args) => {
            orders::place_order(&client, &args.into(), &mut renderer).await?;
        }
        Command::Balance => orders::show_balances(&client, &mut renderer).await?,
        Command::OpenOrders { symbol } => {
            orders::show_open_orders(&client, symbol.as_deref(), &mut renderer).await?;
        }
        Command::Cancel { symbol, order_id } => {
            orders::cancel_order(&client, &symbol, order_id, &mut renderer).await?;
        }
        Command::Time => orders::show_server_time(&client, &mut renderer).await?,
        Command::ExchangeInfo { symbol } => {
            orders::show_exchange_info(&client, symbol.as_deref(), &mut renderer).await?;
        }
        Command::Interactive => interactive::run(&client, &mut renderer).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn test_market_order_flags() {
        let cli = parse(&[
            "trading-bot", "order", "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET",
            "--qty", "0.001",
        ]);
        let Command::Order(args) = cli.command else {
            panic!("expected order command");
        };
        let input = OrderInput::from(args);
        assert_eq!(input.order_type, "MARKET");
        assert_eq!(input.quantity, Decimal::from_str("0.001").unwrap());
        assert_eq!(input.price, None);
        assert!(!input.reduce_only);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "trading-bot", "balance", "--api-key", "k", "--api-secret", "s", "--log-dir", "/tmp/x",
        ]);
        assert!(matches!(cli.command, Command::Balance));
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let cli = parse(&[
            "trading-bot", "order", "--symbol", "BTCUSDT", "--side", "SELL", "--type", "LIMIT",
            "--qty", "-1", "--price", "3200", "--reduce-only",
        ]);
        let Command::Order(args) = cli.command else {
            panic!("expected order command");
        };
        assert_eq!(args.qty, Decimal::NEGATIVE_ONE);
        assert!(args.reduce_only);
    }

    #[test]
    fn test_non_numeric_quantity_is_a_usage_error() {
        let err = Cli::try_parse_from([
            "trading-bot", "order", "--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET",
            "--qty", "lots",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cancel_requires_order_id() {
        assert!(Cli::try_parse_from(["trading-bot", "cancel", "--symbol", "BTCUSDT"]).is_err());
        let cli = parse(&["trading-bot", "cancel", "--symbol", "BTCUSDT", "--order-id", "42"]);
        assert!(matches!(cli.command, Command::Cancel { order_id: 42, .. }));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
