/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET environment variables
[OUTPUT]: Server time, a validated market order and its acknowledgement
[POS]:    Examples - signed trading operations against the testnet
[UPDATE]: When trading API changes
*/

use binance_futures_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: place a small testnet market order through the validator
#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Binance Futures Testnet Order Example ===\n");

    let (Ok(api_key), Ok(api_secret)) = (
        std::env::var("BINANCE_API_KEY"),
        std::env::var("BINANCE_API_SECRET"),
    ) else {
        eprintln!("Set BINANCE_API_KEY and BINANCE_API_SECRET first");
        return;
    };

    let client = match FuturesClient::new(Credentials::new(api_key, api_secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {e:?}");
            return;
        }
    };
    println!("✓ HTTP client created");

    match client.server_time().await {
        Ok(time) => println!("✓ Server time: {}", time.server_time),
        Err(e) => eprintln!("✗ Server time failed: {e:?}"),
    }

    let input = OrderInput {
        symbol: "btcusdt".to_string(),
        side: "buy".to_string(),
        order_type: "market".to_string(),
        quantity: Decimal::from_str("0.001").unwrap_or_default(),
        ..OrderInput::default()
    };

    let request = match validate_order(&input) {
        Ok(req) => req,
        Err(e) => {
            eprintln!("✗ {} ({})", e, e.field());
            return;
        }
    };
    println!("\nValidated order: {:?}", request);

    match client.new_order(&request).await {
        Ok(order) => println!("✓ Order {} status {}", order.order_id, order.status),
        Err(FuturesError::Api { code, message }) => eprintln!("✗ Exchange rejected: {code} {message}"),
        Err(e) => eprintln!("✗ Transport failure: {e:?}"),
    }
}
