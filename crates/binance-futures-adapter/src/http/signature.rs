/*
[INPUT]:  Ordered request parameters and the account API secret
[OUTPUT]: URL-encoded query string with timestamp and HMAC-SHA256 signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter encoding
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::form_urlencoded;

use crate::http::{FuturesError, Result};

type HmacSha256 = Hmac<Sha256>;

/// A parameter string ready to send, plus the signature computed over it.
///
/// `query` already contains `timestamp`; `signature` is appended only by
/// [`SignedQuery::encoded`], so the signed bytes and the sent bytes match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery {
    pub query: String,
    pub signature: String,
}

impl SignedQuery {
    /// Full string as transmitted (query string or form body)
    pub fn encoded(&self) -> String {
        format!("{}&signature={}", self.query, self.signature)
    }
}

/// Signs request parameters with HMAC-SHA256 keyed by the API secret
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha256,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a new request signer for the given secret
    pub fn new(api_secret: &str) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(api_secret.as_bytes())
            .map_err(|err| FuturesError::Config(format!("invalid API secret: {err}")))?;
        Ok(Self { mac })
    }

    /// Current time in milliseconds since the Unix epoch
    pub fn timestamp_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// Append `timestamp`, encode and sign.
    ///
    /// Parameter order is preserved exactly as given.
    pub fn sign(&self, params: &[(&str, String)], timestamp: i64) -> SignedQuery {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            serializer.append_pair(key, value);
        }
        serializer.append_pair("timestamp", &timestamp.to_string());
        let query = serializer.finish();
        let signature = self.digest(&query);
        SignedQuery { query, signature }
    }

    /// Lowercase hex HMAC-SHA256 of `payload`
    pub fn digest(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Recompute the signature over `query` and compare in constant time
    pub fn verify(&self, query: &str, signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(query.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}
