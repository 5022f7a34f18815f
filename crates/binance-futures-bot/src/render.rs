/*
[INPUT]:  Validated requests, exchange responses and errors
[OUTPUT]: Human-readable panels written to stdout or any io::Write
[POS]:    Presentation layer - operator-facing output
[UPDATE]: When adding panels or changing displayed fields
*/

use std::io::{self, Write};

use binance_futures_adapter::{
    AssetBalance, ExchangeInfo, NewOrderRequest, OrderResponse, ServerTime, Side,
    ValidationError,
};
use chrono::DateTime;
use console::style;
use rust_decimal::Decimal;

const RULE_WIDTH: usize = 50;
const NOT_AVAILABLE: &str = "N/A";

/// Writes operator panels; stdout in the binary, a buffer in tests
pub struct Renderer<W: Write> {
    out: W,
}

impl Renderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", style("━".repeat(RULE_WIDTH)).cyan())
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.rule()?;
        writeln!(self.out, "  {}", style(title).bold())?;
        self.rule()
    }

    fn row(&mut self, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "  {label:<14}: {value}")
    }

    pub fn order_summary(&mut self, request: &NewOrderRequest) -> io::Result<()> {
        self.header("ORDER SUMMARY")?;
        self.row("Symbol", style(&request.symbol).bold())?;
        let side = match request.side {
            Side::Buy => style(request.side.as_str()).green(),
            Side::Sell => style(request.side.as_str()).red(),
        };
        self.row("Side", side)?;
        self.row("Type", request.order_type)?;
        self.row("Quantity", request.quantity.normalize())?;
        if let Some(price) = request.price {
            self.row("Price", price.normalize())?;
        }
        if let Some(stop_price) = request.stop_price {
            self.row("Stop Price", stop_price.normalize())?;
        }
        if request.reduce_only {
            self.row("Reduce Only", "yes")?;
        }
        self.rule()?;
        writeln!(self.out)
    }

    pub fn order_result(&mut self, order: &OrderResponse) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "  {}", style("ORDER PLACED SUCCESSFULLY").green().bold())?;
        writeln!(self.out, "{}", style("━".repeat(RULE_WIDTH)).green())?;
        self.order_fields(order)?;
        writeln!(self.out, "{}", style("━".repeat(RULE_WIDTH)).green())?;
        writeln!(self.out)
    }

    fn order_fields(&mut self, order: &OrderResponse) -> io::Result<()> {
        self.row("Order ID", order.order_id)?;
        let client_id = if order.client_order_id.is_empty() {
            NOT_AVAILABLE
        } else {
            order.client_order_id.as_str()
        };
        self.row("Client OID", client_id)?;
        self.row("Symbol", &order.symbol)?;
        self.row("Status", style(order.status).yellow())?;
        self.row("Side", order.side)?;
        self.row("Type", order.order_type)?;
        self.row("Orig Qty", order.orig_qty.normalize())?;
        self.row("Executed Qty", order.executed_qty.normalize())?;
        self.row("Avg Price", display_decimal(order.effective_price()))?;
        self.row("Update Time", display_millis(order.update_time))
    }

    /// Exchange rejection with its code and message
    pub fn order_failure(&mut self, code: i64, message: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", style("━".repeat(RULE_WIDTH)).red())?;
        writeln!(self.out, "  {}", style("ORDER FAILED").red().bold())?;
        writeln!(self.out, "{}", style("━".repeat(RULE_WIDTH)).red())?;
        self.row("Code", code)?;
        self.row("Message", message)?;
        writeln!(self.out, "{}", style("━".repeat(RULE_WIDTH)).red())?;
        writeln!(self.out)
    }

    pub fn validation_failure(&mut self, err: &ValidationError) -> io::Result<()> {
        writeln!(
            self.out,
            "  {} {} ({})",
            style("Invalid input:").red().bold(),
            err,
            err.field()
        )
    }

    /// Generic one-line error, used by the interactive shell
    pub fn error(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "  {}", style(format!("Error: {message}")).red())
    }

    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "  {}", style(message).yellow())
    }

    /// Assets with a non-zero balance only
    pub fn balances(&mut self, balances: &[AssetBalance]) -> io::Result<()> {
        self.header("ACCOUNT BALANCES")?;
        let mut shown = 0;
        for asset in balances.iter().filter(|b| !b.balance.is_zero()) {
            writeln!(
                self.out,
                "  {:<8}  Balance: {:.4}  Available: {:.4}",
                asset.asset, asset.balance, asset.available_balance
            )?;
            shown += 1;
        }
        if shown == 0 {
            writeln!(self.out, "  {}", style("No funded assets.").yellow())?;
        }
        self.rule()?;
        writeln!(self.out)
    }

    pub fn open_orders(&mut self, orders: &[OrderResponse]) -> io::Result<()> {
        if orders.is_empty() {
            return self.notice("No open orders found.");
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "  {}",
            style(format!("Open Orders ({})", orders.len())).bold()
        )?;
        for order in orders {
            writeln!(
                self.out,
                "  [{}] {} {} {} qty={} price={} status={}",
                order.order_id,
                order.symbol,
                order.side,
                order.order_type,
                order.orig_qty.normalize(),
                display_decimal(order.price),
                order.status
            )?;
        }
        Ok(())
    }

    pub fn cancellation(&mut self, order: &OrderResponse) -> io::Result<()> {
        writeln!(
            self.out,
            "  {}",
            style(format!(
                "Cancelled order {} ({}) status: {}",
                order.order_id, order.symbol, order.status
            ))
            .green()
        )
    }

    pub fn server_time(&mut self, time: &ServerTime) -> io::Result<()> {
        self.row("Server Time", display_millis(Some(time.server_time)))
    }

    /// Whole-exchange summary, or one symbol's trading rules when `symbol` is set
    pub fn exchange_info(&mut self, info: &ExchangeInfo, symbol: Option<&str>) -> io::Result<()> {
        self.header("EXCHANGE INFO")?;
        self.row("Timezone", &info.timezone)?;
        self.row("Server Time", display_millis(Some(info.server_time)))?;
        match symbol {
            Some(symbol) => match info.symbol(symbol) {
                Some(found) => {
                    self.row("Symbol", &found.symbol)?;
                    self.row("Status", &found.status)?;
                    self.row("Contract", &found.contract_type)?;
                    self.row("Assets", format!("{}/{}", found.base_asset, found.quote_asset))?;
                    self.row("Price Prec.", found.price_precision)?;
                    self.row("Qty Prec.", found.quantity_precision)?;
                }
                None => self.row("Symbol", style(format!("{symbol} not listed")).yellow())?,
            },
            None => self.row("Symbols", info.symbols.len())?,
        }
        self.rule()?;
        writeln!(self.out)
    }
}

fn display_decimal(value: Option<Decimal>) -> String {
    value
        .map(|v| v.normalize().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn display_millis(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
