/*
[INPUT]:  Validated order requests and cancellation targets
[OUTPUT]: Order acknowledgements from the exchange
[POS]:    HTTP layer - trading endpoints (API key + signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use tracing::info;

use crate::http::{FuturesClient, Result};
use crate::types::{CancelOrderRequest, NewOrderRequest, OrderResponse};

impl FuturesClient {
    /// Place a new order
    ///
    /// POST /fapi/v1/order
    pub async fn new_order(&self, req: &NewOrderRequest) -> Result<OrderResponse> {
        info!(
            symbol = %req.symbol,
            side = %req.side,
            order_type = %req.order_type,
            quantity = %req.quantity,
            price = ?req.price.or(req.stop_price),
            reduce_only = req.reduce_only,
            "placing order"
        );
        self.send_signed(Method::POST, "/fapi/v1/order", req.to_params())
            .await
    }

    /// Cancel an existing order by id
    ///
    /// DELETE /fapi/v1/order?symbol={symbol}&orderId={order_id}
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<OrderResponse> {
        let req = CancelOrderRequest {
            symbol: symbol.to_string(),
            order_id,
        };
        self.send_signed(Method::DELETE, "/fapi/v1/order", req.to_params())
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, FuturesClient};
    use crate::types::{NewOrderRequest, OrderStatus, OrderType, Side, TimeInForce};
    use rust_decimal::Decimal;
    use wiremock::matchers::{body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FuturesClient {
        FuturesClient::with_config_and_base_url(
            Credentials::new("test-key", "test-secret"),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_new_order_posts_form_body() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/fapi/v1/order"))
            .and(header("X-MBX-APIKEY", "test-key"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains(
                "symbol=ETHUSDT&side=SELL&type=LIMIT&quantity=0.01&price=3200&timeInForce=GTC&timestamp=",
            ))
            .and(body_string_contains("&signature="))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "orderId": 4_051_234_i64,
                "clientOrderId": "web_abc",
                "symbol": "ETHUSDT",
                "status": "NEW",
                "side": "SELL",
                "type": "LIMIT",
                "origQty": "0.010",
                "executedQty": "0",
                "avgPrice": "0.00",
                "price": "3200",
                "timeInForce": "GTC",
                "updateTime": 1_700_000_000_000_i64
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = NewOrderRequest {
            symbol: "ETHUSDT".to_string(),
            side: Side::Sell,
            order_type: OrderType::Limit,
            quantity: "0.01".parse::<Decimal>().unwrap(),
            price: Some(Decimal::from(3200)),
            stop_price: None,
            time_in_force: TimeInForce::Gtc,
            reduce_only: false,
        };

        let response = client_for(&server)
            .new_order(&request)
            .await
            .expect("new_order failed");

        assert_eq!(response.order_id, 4_051_234);
        assert_eq!(response.status, OrderStatus::New);
        assert_eq!(response.effective_price(), Some(Decimal::from(3200)));
    }

    #[tokio::test]
    async fn test_cancel_order_uses_delete_query() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/fapi/v1/order"))
            .and(query_param("symbol", "BTCUSDT"))
            .and(query_param("orderId", "283194212"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "orderId": 283_194_212_i64,
                "symbol": "BTCUSDT",
                "status": "CANCELED",
                "side": "BUY",
                "type": "LIMIT",
                "origQty": "0.001",
                "executedQty": "0",
                "price": "40000"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .cancel_order("btcusdt", 283_194_212)
            .await
            .expect("cancel_order failed");

        assert_eq!(response.status, OrderStatus::Canceled);
    }
}
