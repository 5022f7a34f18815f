/*
[INPUT]:  Optional symbol filters
[OUTPUT]: Server time and exchange metadata
[POS]:    HTTP layer - market metadata endpoints
[UPDATE]: When adding new metadata endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{FuturesClient, Result};
use crate::types::{ExchangeInfo, ServerTime};

impl FuturesClient {
    /// Query exchange server time
    ///
    /// GET /fapi/v1/time
    pub async fn server_time(&self) -> Result<ServerTime> {
        self.send_signed(Method::GET, "/fapi/v1/time", Vec::new())
            .await
    }

    /// Query exchange trading rules and symbol metadata
    ///
    /// GET /fapi/v1/exchangeInfo?symbol={symbol}
    pub async fn exchange_info(&self, symbol: Option<&str>) -> Result<ExchangeInfo> {
        let mut params = Vec::new();
        if let Some(s) = symbol {
            params.push(("symbol", s.to_ascii_uppercase()));
        }
        self.send_signed(Method::GET, "/fapi/v1/exchangeInfo", params)
            .await
    }
}
