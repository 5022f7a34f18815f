/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization and wire-string support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            other => Err(other.to_string()),
        }
    }
}

/// Order types reported by the exchange.
///
/// Only [`OrderType::SUBMITTABLE`] can be placed through this client; the
/// others may still show up in open-order listings. Names this client does
/// not know decode as [`OrderType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    Limit,
    StopMarket,
    Stop,
    TakeProfit,
    TakeProfitMarket,
    TrailingStopMarket,
    #[serde(other)]
    Unknown,
}

impl OrderType {
    pub const SUBMITTABLE: [OrderType; 3] =
        [OrderType::Market, OrderType::Limit, OrderType::StopMarket];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::StopMarket => "STOP_MARKET",
            OrderType::Stop => "STOP",
            OrderType::TakeProfit => "TAKE_PROFIT",
            OrderType::TakeProfitMarket => "TAKE_PROFIT_MARKET",
            OrderType::TrailingStopMarket => "TRAILING_STOP_MARKET",
            OrderType::Unknown => "UNKNOWN",
        }
    }

    pub fn is_submittable(&self) -> bool {
        Self::SUBMITTABLE.contains(self)
    }

    /// Whether validation demands a limit/trigger `price`
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::StopMarket)
    }

    pub fn requires_stop_price(&self) -> bool {
        matches!(self, OrderType::StopMarket)
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            "STOP_MARKET" => Ok(OrderType::StopMarket),
            "STOP" => Ok(OrderType::Stop),
            "TAKE_PROFIT" => Ok(OrderType::TakeProfit),
            "TAKE_PROFIT_MARKET" => Ok(OrderType::TakeProfitMarket),
            "TRAILING_STOP_MARKET" => Ok(OrderType::TrailingStopMarket),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeInForce {
    #[default]
    #[serde(rename = "GTC")]
    Gtc,
    #[serde(rename = "IOC")]
    Ioc,
    #[serde(rename = "FOK")]
    Fok,
    #[serde(rename = "GTX")]
    Gtx,
    #[serde(rename = "GTD")]
    Gtd,
    /// Attached to close-position conditional orders
    #[serde(rename = "GTE_GTC")]
    GteGtc,
    #[serde(rename = "UNKNOWN", other)]
    Unknown,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::Gtx => "GTX",
            TimeInForce::Gtd => "GTD",
            TimeInForce::GteGtc => "GTE_GTC",
            TimeInForce::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for TimeInForce {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GTC" => Ok(TimeInForce::Gtc),
            "IOC" => Ok(TimeInForce::Ioc),
            "FOK" => Ok(TimeInForce::Fok),
            "GTX" => Ok(TimeInForce::Gtx),
            "GTD" => Ok(TimeInForce::Gtd),
            "GTE_GTC" => Ok(TimeInForce::GteGtc),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    #[serde(alias = "CANCELLED")]
    Canceled,
    Rejected,
    Expired,
    ExpiredInMatch,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::PartiallyFilled => "PARTIALLY_FILLED",
            OrderStatus::Filled => "FILLED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Expired => "EXPIRED",
            OrderStatus::ExpiredInMatch => "EXPIRED_IN_MATCH",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Side, OrderType, TimeInForce, OrderStatus);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_wire_names_round_trip_through_serde() {
        for ty in OrderType::SUBMITTABLE {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
    }

    #[test]
    fn test_price_requirements_follow_type() {
        assert!(!OrderType::Market.requires_price());
        assert!(OrderType::Limit.requires_price());
        assert!(OrderType::StopMarket.requires_price());
        assert!(OrderType::StopMarket.requires_stop_price());
        assert!(!OrderType::Limit.requires_stop_price());
    }

    #[test]
    fn test_only_three_types_are_submittable() {
        assert!(OrderType::StopMarket.is_submittable());
        assert!(!OrderType::TakeProfitMarket.is_submittable());
        assert_eq!("STOP".parse::<OrderType>(), Ok(OrderType::Stop));
    }

    #[test]
    fn test_status_accepts_both_spellings() {
        let canceled: OrderStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(canceled, OrderStatus::Canceled);
        let canceled: OrderStatus = serde_json::from_str("\"CANCELED\"").unwrap();
        assert_eq!(canceled.to_string(), "CANCELED");
    }

    #[test]
    fn test_unlisted_wire_names_decode_as_unknown() {
        let ty: OrderType = serde_json::from_str("\"LIQUIDATION\"").unwrap();
        assert_eq!(ty, OrderType::Unknown);
        assert!(!ty.is_submittable());
        assert!("UNKNOWN".parse::<OrderType>().is_err());

        let tif: TimeInForce = serde_json::from_str("\"GTE_GTC\"").unwrap();
        assert_eq!(tif, TimeInForce::GteGtc);
        let tif: TimeInForce = serde_json::from_str("\"HIDDEN\"").unwrap();
        assert_eq!(tif, TimeInForce::Unknown);

        let status: OrderStatus = serde_json::from_str("\"NEW_INSURANCE\"").unwrap();
        assert_eq!(status.to_string(), "UNKNOWN");
    }
}
