/*
[INPUT]:  Optional symbol filter and signed credentials
[OUTPUT]: Account data (open orders, wallet balances)
[POS]:    HTTP layer - user data endpoints (API key + signature)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{FuturesClient, Result};
use crate::types::{AssetBalance, OrderResponse};

impl FuturesClient {
    /// Query open orders, optionally for one symbol
    ///
    /// GET /fapi/v1/openOrders?symbol={symbol}
    pub async fn open_orders(&self, symbol: Option<&str>) -> Result<Vec<OrderResponse>> {
        let mut params = Vec::new();
        if let Some(s) = symbol {
            params.push(("symbol", s.to_ascii_uppercase()));
        }
        self.send_signed(Method::GET, "/fapi/v1/openOrders", params)
            .await
    }

    /// Query futures wallet balances
    ///
    /// GET /fapi/v2/balance
    pub async fn account_balance(&self) -> Result<Vec<AssetBalance>> {
        self.send_signed(Method::GET, "/fapi/v2/balance", Vec::new())
            .await
    }
}
