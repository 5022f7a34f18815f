/*
[INPUT]:  FuturesClient and operator input via dialoguer prompts
[OUTPUT]: Orders placed/cancelled and account views rendered in a menu loop
[POS]:    CLI interactive flow
[UPDATE]: When adding menu actions or changing order prompts
*/

use std::io::Write;

use anyhow::Result;
use binance_futures_adapter::{FuturesClient, OrderInput, OrderType, Side};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use rust_decimal::Decimal;
use tracing::{info, warn};

use binance_futures_bot::{Renderer, orders};

const DEFAULT_SYMBOL: &str = "BTCUSDT";

/// Menu loop; a failed action is reported and the menu shown again
pub async fn run<W: Write>(client: &FuturesClient, renderer: &mut Renderer<W>) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Binance Futures Testnet - Trading Bot").bold().cyan());
    info!("interactive session started");

    loop {
        let actions = vec![
            "Place an order",
            "View account balance",
            "View open orders",
            "Cancel an order",
            "Quit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => place_order(client, renderer, &theme).await,
            1 => orders::show_balances(client, renderer).await,
            2 => open_orders(client, renderer, &theme).await,
            3 => cancel_order(client, renderer, &theme).await,
            _ => {
                println!("{}", style("Goodbye!").yellow());
                info!("interactive session ended");
                return Ok(());
            }
        };

        if let Err(err) = outcome {
            warn!(action = actions[selection], "{err:#}");
            renderer.error(format!("{err:#}"))?;
        }
    }
}

async fn place_order<W: Write>(
    client: &FuturesClient,
    renderer: &mut Renderer<W>,
    theme: &ColorfulTheme,
) -> Result<()> {
    println!("{}", style("Place order").bold());

    let symbol: String = Input::with_theme(theme)
        .with_prompt("Symbol")
        .default(DEFAULT_SYMBOL.to_string())
        .interact_text()?;

    let sides = [Side::Buy, Side::Sell];
    let side = sides[Select::with_theme(theme)
        .with_prompt("Side")
        .items(&sides)
        .default(0)
        .interact()?];

    let types = OrderType::SUBMITTABLE;
    let order_type = types[Select::with_theme(theme)
        .with_prompt("Type")
        .items(&types)
        .default(0)
        .interact()?];

    let quantity: Decimal = Input::with_theme(theme)
        .with_prompt("Quantity (e.g. 0.001)")
        .interact_text()?;

    let price = if order_type.requires_price() {
        let label = if order_type == OrderType::Limit {
            "Limit price"
        } else {
            "Price"
        };
        Some(
            Input::<Decimal>::with_theme(theme)
                .with_prompt(label)
                .interact_text()?,
        )
    } else {
        None
    };

    let stop_price = if order_type.requires_stop_price() {
        Some(
            Input::<Decimal>::with_theme(theme)
                .with_prompt("Stop price")
                .interact_text()?,
        )
    } else {
        None
    };

    let reduce_only = Confirm::with_theme(theme)
        .with_prompt("Reduce only?")
        .default(false)
        .interact()?;

    let confirmed = Confirm::with_theme(theme)
        .with_prompt("Confirm order?")
        .default(true)
        .interact()?;
    if !confirmed {
        renderer.notice("Order cancelled.")?;
        return Ok(());
    }

    let input = OrderInput {
        symbol,
        side: side.as_str().to_string(),
        order_type: order_type.as_str().to_string(),
        quantity,
        price,
        stop_price,
        time_in_force: None,
        reduce_only,
    };
    orders::place_order(client, &input, renderer).await?;
    Ok(())
}

async fn open_orders<W: Write>(
    client: &FuturesClient,
    renderer: &mut Renderer<W>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let symbol: String = Input::with_theme(theme)
        .with_prompt("Symbol (blank for all)")
        .allow_empty(true)
        .interact_text()?;
    let symbol = symbol.trim();
    let symbol = (!symbol.is_empty()).then_some(symbol);

    orders::show_open_orders(client, symbol, renderer).await?;
    Ok(())
}

async fn cancel_order<W: Write>(
    client: &FuturesClient,
    renderer: &mut Renderer<W>,
    theme: &ColorfulTheme,
) -> Result<()> {
    let symbol: String = Input::with_theme(theme)
        .with_prompt("Symbol")
        .default(DEFAULT_SYMBOL.to_string())
        .interact_text()?;
    let order_id: i64 = Input::with_theme(theme)
        .with_prompt("Order ID")
        .interact_text()?;

    orders::cancel_order(client, &symbol, order_id, renderer).await?;
    Ok(())
}
