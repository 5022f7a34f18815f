/*
[INPUT]:  Validated order fields
[OUTPUT]: Typed order request and its ordered wire parameters
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new request fields added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side, TimeInForce};

/// A validated order, ready to be signed and sent.
///
/// Build it through [`crate::validation::validate_order`] so the
/// price/stop-price rules for each type hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    pub time_in_force: TimeInForce,
    pub reduce_only: bool,
}

impl NewOrderRequest {
    /// Parameters in the order they are signed and sent.
    ///
    /// `price` and `timeInForce` only go out for LIMIT; `stopPrice` only for
    /// STOP_MARKET.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type.as_str().to_string()),
            ("quantity", self.quantity.normalize().to_string()),
        ];

        if self.order_type == OrderType::Limit {
            if let Some(price) = self.price {
                params.push(("price", price.normalize().to_string()));
            }
            params.push(("timeInForce", self.time_in_force.as_str().to_string()));
        }

        if self.order_type == OrderType::StopMarket {
            if let Some(stop_price) = self.stop_price {
                params.push(("stopPrice", stop_price.normalize().to_string()));
            }
        }

        if self.reduce_only {
            params.push(("reduceOnly", "true".to_string()));
        }

        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub symbol: String,
    pub order_id: i64,
}

impl CancelOrderRequest {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("symbol", self.symbol.to_ascii_uppercase()),
            ("orderId", self.order_id.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn base(order_type: OrderType) -> NewOrderRequest {
        NewOrderRequest {
            symbol: "BTCUSDT".to_string(),
            side: Side::Buy,
            order_type,
            quantity: dec("0.001"),
            price: None,
            stop_price: None,
            time_in_force: TimeInForce::Gtc,
            reduce_only: false,
        }
    }

    fn keys(params: &[(&'static str, String)]) -> Vec<&'static str> {
        params.iter().map(|(key, _)| *key).collect()
    }

    #[test]
    fn test_market_params() {
        let params = base(OrderType::Market).to_params();
        assert_eq!(keys(&params), vec!["symbol", "side", "type", "quantity"]);
        assert_eq!(params[3].1, "0.001");
    }

    #[test]
    fn test_limit_params_carry_price_and_tif() {
        let mut req = base(OrderType::Limit);
        req.price = Some(dec("65000.50"));
        req.reduce_only = true;

        let params = req.to_params();
        assert_eq!(
            keys(&params),
            vec!["symbol", "side", "type", "quantity", "price", "timeInForce", "reduceOnly"]
        );
        assert_eq!(params[4].1, "65000.5");
        assert_eq!(params[5].1, "GTC");
        assert_eq!(params[6].1, "true");
    }

    #[test]
    fn test_stop_market_sends_stop_price_only() {
        let mut req = base(OrderType::StopMarket);
        req.side = Side::Sell;
        req.price = Some(dec("58000"));
        req.stop_price = Some(dec("58000"));

        let params = req.to_params();
        assert_eq!(
            keys(&params),
            vec!["symbol", "side", "type", "quantity", "stopPrice"]
        );
        assert_eq!(params[2].1, "STOP_MARKET");
    }

    #[test]
    fn test_cancel_params() {
        let req = CancelOrderRequest {
            symbol: "btcusdt".to_string(),
            order_id: 42,
        };
        assert_eq!(
            req.to_params(),
            vec![("symbol", "BTCUSDT".to_string()), ("orderId", "42".to_string())]
        );
    }
}
