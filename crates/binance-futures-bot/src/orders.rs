/*
[INPUT]:  FuturesClient, operator order input, Renderer
[OUTPUT]: Placed/cancelled orders and account views rendered to the operator
[POS]:    Workflow layer - validate, submit, render
[UPDATE]: When adding operator actions or changing the placement flow
*/

use std::io::Write;

use anyhow::{Context, Result};
use binance_futures_adapter::{
    FuturesClient, FuturesError, OrderInput, OrderResponse, validate_order,
};
use tracing::{debug, error, info, warn};

use crate::render::Renderer;

/// Validate, summarise, submit and render one order.
///
/// Validation failures return before any request is made. Exchange
/// rejections are rendered with their code and message, then propagated.
pub async fn place_order<W: Write>(
    client: &FuturesClient,
    input: &OrderInput,
    renderer: &mut Renderer<W>,
) -> Result<OrderResponse> {
    let request = match validate_order(input) {
        Ok(request) => request,
        Err(err) => {
            warn!(field = err.field(), error = %err, "order rejected by validation");
            renderer.validation_failure(&err).context("render validation failure")?;
            return Err(FuturesError::from(err).into());
        }
    };
    debug!(?request, "validated order");

    renderer.order_summary(&request).context("render order summary")?;

    let order = match client.new_order(&request).await {
        Ok(order) => order,
        Err(FuturesError::Api { code, message }) => {
            error!(code, %message, "exchange rejected order");
            renderer
                .order_failure(code, &message)
                .context("render order failure")?;
            return Err(FuturesError::Api { code, message }.into());
        }
        Err(err) => {
            error!(error = ?err, "order submission failed");
            return Err(err.into());
        }
    };

    info!(
        order_id = order.order_id,
        status = %order.status,
        executed_qty = %order.executed_qty,
        "order placed"
    );
    renderer.order_result(&order).context("render order result")?;
    Ok(order)
}

pub async fn show_balances<W: Write>(
    client: &FuturesClient,
    renderer: &mut Renderer<W>,
) -> Result<()> {
    let balances = client.account_balance().await.inspect_err(|err| {
        error!(error = ?err, "balance query failed");
    })?;
    debug!(assets = balances.len(), "balances fetched");
    renderer.balances(&balances).context("render balances")?;
    Ok(())
}

pub async fn show_open_orders<W: Write>(
    client: &FuturesClient,
    symbol: Option<&str>,
    renderer: &mut Renderer<W>,
) -> Result<Vec<OrderResponse>> {
    let orders = client.open_orders(symbol).await.inspect_err(|err| {
        error!(error = ?err, "open orders query failed");
    })?;
    info!(count = orders.len(), symbol = ?symbol, "open orders fetched");
    renderer.open_orders(&orders).context("render open orders")?;
    Ok(orders)
}

pub async fn cancel_order<W: Write>(
    client: &FuturesClient,
    symbol: &str,
    order_id: i64,
    renderer: &mut Renderer<W>,
) -> Result<OrderResponse> {
    let order = client
        .cancel_order(symbol, order_id)
        .await
        .inspect_err(|err| error!(order_id, symbol, error = ?err, "cancel order failed"))?;
    info!(order_id, symbol = %order.symbol, status = %order.status, "order cancelled");
    renderer.cancellation(&order).context("render cancellation")?;
    Ok(order)
}

pub async fn show_server_time<W: Write>(
    client: &FuturesClient,
    renderer: &mut Renderer<W>,
) -> Result<()> {
    let time = client.server_time().await.inspect_err(|err| {
        error!(error = ?err, "server time query failed");
    })?;
    renderer.server_time(&time).context("render server time")?;
    Ok(())
}

pub async fn show_exchange_info<W: Write>(
    client: &FuturesClient,
    symbol: Option<&str>,
    renderer: &mut Renderer<W>,
) -> Result<()> {
    let info = client.exchange_info(symbol).await.inspect_err(|err| {
        error!(symbol = ?symbol, error = ?err, "exchange info query failed");
    })?;
    debug!(symbols = info.symbols.len(), "exchange info fetched");
    renderer
        .exchange_info(&info, symbol)
        .context("render exchange info")?;
    Ok(())
}
