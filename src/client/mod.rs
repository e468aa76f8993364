//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use url::Url;

use crate::config;
use crate::domain::{ApiCall, ApiResponse, Method, Params, account};
use crate::transport;

const DEFAULT_BASE_URL: &str = "https://rest.nexmo.com";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: std::fmt::Debug + Send + Sync {
    fn dispatch<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn dispatch<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let request = match method {
                Method::Get => self.client.get(url).query(&params),
                Method::Post => self.client.post(url).form(&params),
            };
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Client`].
pub enum Error {
    /// A credential could not be resolved at construction time.
    #[error("{field} should be set")]
    Configuration { field: &'static str },

    /// Required parameters were absent; no request was made.
    #[error("{names} params required")]
    MissingParameters { names: String },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc). Passed
    /// through as-is: no retry, no wrapping of the payload.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone)]
/// Builder for [`Client`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct ClientBuilder {
    api_key: Option<String>,
    api_secret: Option<String>,
    base_url: String,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: None,
            timeout: None,
        }
    }

    /// Set explicit credentials instead of resolving them from
    /// [`config`](crate::config).
    pub fn credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.api_key = Some(api_key.into());
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Override the gateway base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a [`Client`].
    ///
    /// Credentials not supplied via [`credentials`](Self::credentials) fall
    /// back to the process-wide defaults; a credential that resolves to
    /// nothing (or to an empty string) fails with [`Error::Configuration`].
    pub fn build(self) -> Result<Client, Error> {
        let defaults = config::current();
        let api_key = resolve_credential(self.api_key, defaults.api_key, "api_key")?;
        let api_secret = resolve_credential(self.api_secret, defaults.api_secret, "api_secret")?;
        let user_agent = self.user_agent.unwrap_or(defaults.user_agent);

        let base_url =
            Url::parse(&self.base_url).map_err(|err| Error::Transport(Box::new(err)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| Error::Transport(Box::new(err)))?;

        Ok(Client {
            default_params: Params::new().set("api_key", api_key).set("api_secret", api_secret),
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn resolve_credential(
    explicit: Option<String>,
    default: Option<String>,
    field: &'static str,
) -> Result<String, Error> {
    match explicit.or(default) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Configuration { field }),
    }
}

#[derive(Clone, Debug)]
/// Nexmo REST API client.
///
/// Account credentials are injected into every request as
/// `api_key`/`api_secret` parameters. Each operation is one HTTP round trip
/// against `https://rest.nexmo.com`, returning a classified [`ApiResponse`].
pub struct Client {
    default_params: Params,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl Client {
    /// Create a client with explicit credentials.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self, Error> {
        Self::builder().credentials(api_key, api_secret).build()
    }

    /// Create a client from the process-wide defaults (see
    /// [`config::setup`](crate::config::setup)).
    pub fn from_defaults() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Dispatch one catalog operation.
    ///
    /// Merges the client credentials into `params` (credentials always win),
    /// verifies the descriptor's required keys before any I/O, normalizes
    /// the parameters (camelizing keys when the descriptor asks for it),
    /// performs the HTTP round trip and classifies the response by status
    /// code. Non-2xx statuses are not errors; they surface through the
    /// envelope's classification flags.
    pub async fn make_api_call(
        &self,
        call: &ApiCall,
        params: Params,
    ) -> Result<ApiResponse, Error> {
        let mut merged = params;
        for (key, value) in self.default_params.iter() {
            merged.insert(key, value.clone());
        }

        let missing = check_required_params(call, &merged);
        if !missing.is_empty() {
            return Err(Error::MissingParameters {
                names: missing.join(","),
            });
        }

        let mut wire = merged.normalized();
        if call.camelize {
            wire = wire.camelized();
        }

        let url = self
            .base_url
            .join(call.url)
            .map_err(|err| Error::Transport(Box::new(err)))?;
        tracing::debug!(method = ?call.method, url = %url, "dispatching API call");

        let response = self
            .http
            .dispatch(call.method, url.as_str(), transport::encode_pairs(&wire))
            .await
            .map_err(Error::Transport)?;
        tracing::debug!(status = response.status, "classifying API response");

        let body = transport::decode_json_body(&response.body)
            .map_err(|err| Error::Parse(Box::new(err)))?;
        Ok(ApiResponse::classify(response.status, body))
    }

    /// Current account balance (`GET /account/get-balance`).
    pub async fn get_balance(&self) -> Result<ApiResponse, Error> {
        self.make_api_call(&account::GET_BALANCE, Params::new()).await
    }

    /// Outbound pricing for one country (`GET /account/get-pricing/outbound`).
    /// Requires `country`.
    pub async fn get_pricing(&self, params: Params) -> Result<ApiResponse, Error> {
        self.make_api_call(&account::GET_PRICING, params).await
    }

    /// Outbound pricing for one dialing prefix
    /// (`GET /account/get-prefix-pricing/outbound`). Requires `prefix`.
    pub async fn get_prefix_pricing(&self, params: Params) -> Result<ApiResponse, Error> {
        self.make_api_call(&account::GET_PREFIX_PRICING, params).await
    }

    /// Numbers provisioned on the account (`GET /account/numbers`).
    pub async fn get_numbers(&self, params: Params) -> Result<ApiResponse, Error> {
        self.make_api_call(&account::GET_NUMBERS, params).await
    }

    /// Re-run a charge on an auto-reload account (`GET /account/top-up`).
    /// Requires `trx`.
    pub async fn top_up(&self, params: Params) -> Result<ApiResponse, Error> {
        self.make_api_call(&account::TOP_UP, params).await
    }
}

fn check_required_params<'a>(call: &'a ApiCall, params: &Params) -> Vec<&'a str> {
    call.required
        .iter()
        .copied()
        .filter(|key| !params.contains(key))
        .collect()
}
