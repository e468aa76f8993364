use std::ops::Index;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Body key carrying the derived `status == 200` flag.
pub const SUCCESS_KEY: &str = "success?";
/// Body key carrying the derived `status == 401` flag.
pub const NOT_AUTHORIZED_KEY: &str = "not_authorized?";
/// Body key carrying the derived "any other status" flag.
pub const FAILED_KEY: &str = "failed?";

static NULL: Value = Value::Null;

#[derive(Debug, Clone, PartialEq)]
/// Decoded gateway response: the JSON body plus derived status flags.
///
/// Exactly one of [`success`](Self::success),
/// [`not_authorized`](Self::not_authorized) and [`failed`](Self::failed) is
/// true for any completed response. The same three flags are merged into the
/// body under [`SUCCESS_KEY`], [`NOT_AUTHORIZED_KEY`] and [`FAILED_KEY`],
/// overwriting colliding body keys.
pub struct ApiResponse {
    status: u16,
    body: Map<String, Value>,
}

impl ApiResponse {
    /// Wrap a decoded body, deriving the classification flags from the HTTP
    /// status code.
    pub fn classify(status: u16, mut body: Map<String, Value>) -> Self {
        body.insert(SUCCESS_KEY.to_owned(), Value::Bool(status == 200));
        body.insert(NOT_AUTHORIZED_KEY.to_owned(), Value::Bool(status == 401));
        body.insert(
            FAILED_KEY.to_owned(),
            Value::Bool(status != 200 && status != 401),
        );
        Self { status, body }
    }

    /// HTTP status code the flags were derived from.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The request completed with status 200.
    pub fn success(&self) -> bool {
        self.status == 200
    }

    /// The gateway rejected the credentials (status 401).
    pub fn not_authorized(&self) -> bool {
        self.status == 401
    }

    /// Any status other than 200 or 401.
    pub fn failed(&self) -> bool {
        !self.success() && !self.not_authorized()
    }

    /// Look up a body key. The classification flags are regular body keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Borrow the full body, flags included.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Deserialize the body into a typed payload view such as [`Balance`].
    ///
    /// The flag keys are ignored by views that do not declare them.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.body.clone()))
    }
}

impl Index<&str> for ApiResponse {
    type Output = Value;

    /// Keyed lookup into the body; missing keys yield `Value::Null`.
    fn index(&self, key: &str) -> &Value {
        self.body.get(key).unwrap_or(&NULL)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Payload of `GET /account/get-balance`.
pub struct Balance {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// One carrier entry inside a pricing payload.
pub struct Network {
    pub code: String,
    pub network: String,
    /// `null` in prefix pricing responses; passed through, not defaulted.
    #[serde(default)]
    pub ranges: Option<Vec<String>>,
    #[serde(default, alias = "mtPrice")]
    pub mt_price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Payload of `GET /account/get-pricing/outbound`.
pub struct OutboundPricing {
    pub country: String,
    pub name: String,
    pub prefix: String,
    pub mt: String,
    #[serde(default)]
    pub networks: Vec<Network>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Payload of `GET /account/get-prefix-pricing/outbound`.
pub struct PrefixPricing {
    pub count: u32,
    #[serde(default)]
    pub prices: Vec<OutboundPricing>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// One provisioned number inside an `account/numbers` payload.
pub struct OwnedNumber {
    pub country: String,
    pub msisdn: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Payload of `GET /account/numbers`.
pub struct NumbersList {
    pub count: u32,
    #[serde(default)]
    pub numbers: Vec<OwnedNumber>,
}
