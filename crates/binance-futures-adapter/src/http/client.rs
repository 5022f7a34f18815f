/*
[INPUT]:  HTTP configuration (base URL, timeouts, recvWindow) and API credentials
[OUTPUT]: Signed requests and decoded responses mapped onto FuturesError
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing response mapping
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::http::{FuturesError, RequestSigner, Result};

/// Base URL for the USDT-M futures testnet
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

const API_KEY_HEADER: &str = "X-MBX-APIKEY";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// `code` value the exchange uses for a successful payload
const SUCCESS_CODE: i64 = 200;

/// Response bodies are cut to this many characters in logs and errors
const BODY_PREVIEW_CHARS: usize = 500;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Optional `recvWindow` (ms) added to every signed request
    pub recv_window: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            recv_window: None,
        }
    }
}

/// API key and secret for signed requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask(&self.api_key))
            .field("api_secret", &"***")
            .finish()
    }
}

fn mask(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    format!("{visible}***")
}

/// Main HTTP client for the Binance futures REST API
pub struct FuturesClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
    signer: RequestSigner,
    recv_window: Option<u64>,
}

impl fmt::Debug for FuturesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuturesClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &mask(&self.api_key))
            .field("recv_window", &self.recv_window)
            .finish_non_exhaustive()
    }
}

impl FuturesClient {
    /// Create a testnet client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a testnet client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, TESTNET_BASE_URL)
    }

    /// Create a client against an explicit base URL (mock servers, other environments)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        let signer = RequestSigner::new(&credentials.api_secret)?;

        debug!(base_url, "futures client initialised");

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            api_key: credentials.api_key,
            signer,
            recv_window: config.recv_window,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Build full URL for an endpoint path
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Sign `params` and send them: query string for GET/DELETE, form body
    /// for POST. The string that was signed is the string that goes out.
    pub(crate) async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<T> {
        if let Some(window) = self.recv_window {
            params.push(("recvWindow", window.to_string()));
        }
        let signed = self.signer.sign(&params, RequestSigner::timestamp_ms());

        debug!(
            method = %method,
            endpoint,
            params = %signed.query,
            "→ signed request"
        );

        let mut url = self.endpoint_url(endpoint)?;
        let builder = if method == Method::POST {
            self.http_client
                .request(method, url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(signed.encoded())
        } else {
            url.set_query(Some(&signed.encoded()));
            self.http_client.request(method, url)
        };

        self.send_json(builder.header(API_KEY_HEADER, &self.api_key))
            .await
    }

    /// Send a prepared request and decode the response
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(|err| {
            error!(error = %err, "network error");
            FuturesError::from(err)
        })?;

        let status = response.status();
        let body = response.text().await?;
        debug!(
            status = status.as_u16(),
            body = %preview(&body),
            "← response"
        );

        decode(status, &body)
    }
}

/// Map a raw response onto a typed payload or an error.
///
/// An exchange error payload wins over the HTTP status; the status only
/// matters when the body carries no error code.
pub fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) if status.is_success() => {
            return Err(FuturesError::InvalidResponse(format!(
                "body is not JSON ({err}): {}",
                preview(body)
            )));
        }
        Err(_) => {
            return Err(FuturesError::Status {
                status: status.as_u16(),
                body: preview(body),
            });
        }
    };

    if let Some(api_error) = api_error(&value) {
        return Err(api_error);
    }

    if !status.is_success() {
        return Err(FuturesError::Status {
            status: status.as_u16(),
            body: preview(body),
        });
    }

    Ok(serde_json::from_value(value)?)
}

fn api_error(value: &Value) -> Option<FuturesError> {
    let object = value.as_object()?;
    let code = object.get("code")?.as_i64()?;
    if code == SUCCESS_CODE {
        return None;
    }
    let message = object
        .get("msg")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error");
    Some(FuturesError::api_error(code, message))
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
