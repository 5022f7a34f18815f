/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-bot tests

#![allow(dead_code)]

use binance_futures_adapter::{ClientConfig, Credentials, FuturesClient, OrderInput};
use binance_futures_bot::Renderer;
use rust_decimal::Decimal;
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> FuturesClient {
    FuturesClient::with_config_and_base_url(
        Credentials::new("bot-test-key", "bot-test-secret"),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}

pub fn buffer_renderer() -> Renderer<Vec<u8>> {
    Renderer::new(Vec::new())
}

/// Rendered text with colour codes removed
pub fn output(renderer: Renderer<Vec<u8>>) -> String {
    let raw = String::from_utf8(renderer.into_inner()).expect("utf-8 output");
    console::strip_ansi_codes(&raw).into_owned()
}

pub fn order_input(symbol: &str, order_type: &str, quantity: &str) -> OrderInput {
    OrderInput {
        symbol: symbol.to_string(),
        side: "BUY".to_string(),
        order_type: order_type.to_string(),
        quantity: quantity.parse::<Decimal>().expect("decimal quantity"),
        ..OrderInput::default()
    }
}
