//! Domain layer: strong types with validation and invariants (no I/O).

mod catalog;
mod params;
mod response;

pub use catalog::{ApiCall, Method, account};
pub use params::{ParamValue, Params, camelize};
pub use response::{
    ApiResponse, Balance, FAILED_KEY, NOT_AUTHORIZED_KEY, Network, NumbersList, OutboundPricing,
    OwnedNumber, PrefixPricing, SUCCESS_KEY,
};
