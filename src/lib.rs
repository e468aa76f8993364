//! Typed Rust client for the Nexmo REST API.
//!
//! The crate is a thin wrapper over the gateway's HTTP surface: a domain
//! layer of strong types (parameters, operation descriptors, the response
//! envelope), a transport layer for wire-format quirks, and a small client
//! layer orchestrating requests. Account credentials are injected into every
//! call; responses come back as an [`ApiResponse`] carrying the decoded JSON
//! body and three derived status flags.
//!
//! ```rust,no_run
//! use nexmo::{Client, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nexmo::Error> {
//!     let client = Client::new("key", "secret")?;
//!     let res = client.get_pricing(Params::new().set("country", "FI")).await?;
//!     if res.success() {
//!         println!("mt price: {}", res["mt"]);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{Client, ClientBuilder, Error};
pub use config::Config;
pub use domain::{
    ApiCall, ApiResponse, Balance, Method, Network, NumbersList, OutboundPricing, OwnedNumber,
    ParamValue, Params, PrefixPricing, account, camelize,
};
