/*
[INPUT]:  Raw order parameters from CLI flags or interactive prompts
[OUTPUT]: Normalized NewOrderRequest or a field-specific ValidationError
[POS]:    Validation layer - runs before any network call
[UPDATE]: When order types or per-type price rules change
*/

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::types::{NewOrderRequest, OrderType, Side, TimeInForce};

/// Order input as typed by the operator, before normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderInput {
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub time_in_force: Option<String>,
    pub reduce_only: bool,
}

/// Rejected order parameter; each variant names one field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Symbol cannot be empty.")]
    EmptySymbol,

    #[error("Symbol '{0}' contains invalid characters.")]
    InvalidSymbol(String),

    #[error("Side must be one of BUY, SELL, got '{0}'.")]
    InvalidSide(String),

    #[error("Order type must be one of MARKET, LIMIT, STOP_MARKET, got '{0}'.")]
    InvalidOrderType(String),

    #[error("Quantity must be > 0, got {0}.")]
    NonPositiveQuantity(Decimal),

    #[error("Price is required for {0} orders.")]
    MissingPrice(OrderType),

    #[error("Price must be > 0, got {0}.")]
    NonPositivePrice(Decimal),

    #[error("Stop price is required for STOP_MARKET orders.")]
    MissingStopPrice,

    #[error("Stop price must be > 0, got {0}.")]
    NonPositiveStopPrice(Decimal),

    #[error("Time in force must be one of GTC, IOC, FOK, got '{0}'.")]
    InvalidTimeInForce(String),
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptySymbol | ValidationError::InvalidSymbol(_) => "symbol",
            ValidationError::InvalidSide(_) => "side",
            ValidationError::InvalidOrderType(_) => "type",
            ValidationError::NonPositiveQuantity(_) => "quantity",
            ValidationError::MissingPrice(_) | ValidationError::NonPositivePrice(_) => "price",
            ValidationError::MissingStopPrice | ValidationError::NonPositiveStopPrice(_) => {
                "stopPrice"
            }
            ValidationError::InvalidTimeInForce(_) => "timeInForce",
        }
    }
}

pub fn validate_symbol(symbol: &str) -> Result<String, ValidationError> {
    let symbol = symbol.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(ValidationError::EmptySymbol);
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidSymbol(symbol));
    }
    Ok(symbol)
}

pub fn validate_side(side: &str) -> Result<Side, ValidationError> {
    let side = side.trim().to_ascii_uppercase();
    side.parse::<Side>().map_err(ValidationError::InvalidSide)
}

pub fn validate_order_type(order_type: &str) -> Result<OrderType, ValidationError> {
    let normalized = order_type.trim().to_ascii_uppercase();
    match normalized.parse::<OrderType>() {
        Ok(parsed) if parsed.is_submittable() => Ok(parsed),
        _ => Err(ValidationError::InvalidOrderType(normalized)),
    }
}

pub fn validate_quantity(quantity: Decimal) -> Result<Decimal, ValidationError> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity(quantity));
    }
    Ok(quantity)
}

/// LIMIT and STOP_MARKET both require a positive price; MARKET passes it
/// through unchecked.
pub fn validate_price(
    price: Option<Decimal>,
    order_type: OrderType,
) -> Result<Option<Decimal>, ValidationError> {
    if !order_type.requires_price() {
        return Ok(price);
    }
    match price {
        None => Err(ValidationError::MissingPrice(order_type)),
        Some(value) if value <= Decimal::ZERO => Err(ValidationError::NonPositivePrice(value)),
        Some(value) => Ok(Some(value)),
    }
}

pub fn validate_stop_price(
    stop_price: Option<Decimal>,
    order_type: OrderType,
) -> Result<Option<Decimal>, ValidationError> {
    if !order_type.requires_stop_price() {
        return Ok(None);
    }
    match stop_price {
        None => Err(ValidationError::MissingStopPrice),
        Some(value) if value <= Decimal::ZERO => Err(ValidationError::NonPositiveStopPrice(value)),
        Some(value) => Ok(Some(value)),
    }
}

pub fn validate_time_in_force(time_in_force: Option<&str>) -> Result<TimeInForce, ValidationError> {
    let Some(raw) = time_in_force else {
        return Ok(TimeInForce::default());
    };
    let normalized = raw.trim().to_ascii_uppercase();
    match normalized.parse::<TimeInForce>() {
        Ok(tif @ (TimeInForce::Gtc | TimeInForce::Ioc | TimeInForce::Fok)) => Ok(tif),
        _ => Err(ValidationError::InvalidTimeInForce(normalized)),
    }
}

/// Run every check in field order; the first failure wins.
///
/// Time in force only applies to LIMIT orders; for other types a supplied
/// value is ignored and never validated.
pub fn validate_order(input: &OrderInput) -> Result<NewOrderRequest, ValidationError> {
    let symbol = validate_symbol(&input.symbol)?;
    let side = validate_side(&input.side)?;
    let order_type = validate_order_type(&input.order_type)?;
    let quantity = validate_quantity(input.quantity)?;
    let price = validate_price(input.price, order_type)?;
    let stop_price = validate_stop_price(input.stop_price, order_type)?;
    let time_in_force = if order_type == OrderType::Limit {
        validate_time_in_force(input.time_in_force.as_deref())?
    } else {
        if let Some(ignored) = input.time_in_force.as_deref() {
            warn!(time_in_force = ignored, %order_type, "time in force ignored for non-LIMIT order");
        }
        TimeInForce::default()
    };

    Ok(NewOrderRequest {
        symbol,
        side,
        order_type,
        quantity,
        price,
        stop_price,
        time_in_force,
        reduce_only: input.reduce_only,
    })
}
