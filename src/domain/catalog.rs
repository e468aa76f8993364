#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP verb used by a gateway operation.
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static metadata for one gateway endpoint.
///
/// Descriptors are defined as constants per API group and handed to
/// [`Client::make_api_call`](crate::Client::make_api_call); the named
/// operation methods on the client are thin wrappers over that pairing.
pub struct ApiCall {
    /// HTTP verb.
    pub method: Method,
    /// Path relative to the gateway base URL.
    pub url: &'static str,
    /// Parameter names that must be present before dispatch.
    pub required: &'static [&'static str],
    /// Rewrite `underscore_case` parameter keys as `camelCase` on the wire.
    pub camelize: bool,
}

impl ApiCall {
    pub const fn get(url: &'static str) -> Self {
        Self {
            method: Method::Get,
            url,
            required: &[],
            camelize: false,
        }
    }

    pub const fn post(url: &'static str) -> Self {
        Self {
            method: Method::Post,
            url,
            required: &[],
            camelize: false,
        }
    }

    pub const fn required(mut self, required: &'static [&'static str]) -> Self {
        self.required = required;
        self
    }

    pub const fn camelized(mut self) -> Self {
        self.camelize = true;
        self
    }
}

/// `account` API group.
pub mod account {
    use super::ApiCall;

    pub const GET_BALANCE: ApiCall = ApiCall::get("/account/get-balance");
    pub const GET_PRICING: ApiCall =
        ApiCall::get("/account/get-pricing/outbound").required(&["country"]);
    pub const GET_PREFIX_PRICING: ApiCall =
        ApiCall::get("/account/get-prefix-pricing/outbound").required(&["prefix"]);
    pub const GET_NUMBERS: ApiCall = ApiCall::get("/account/numbers");
    pub const TOP_UP: ApiCall = ApiCall::get("/account/top-up").required(&["trx"]);

    /// Name → descriptor table for the group.
    pub const TABLE: &[(&str, &ApiCall)] = &[
        ("get_balance", &GET_BALANCE),
        ("get_pricing", &GET_PRICING),
        ("get_prefix_pricing", &GET_PREFIX_PRICING),
        ("get_numbers", &GET_NUMBERS),
        ("top_up", &TOP_UP),
    ];
}
