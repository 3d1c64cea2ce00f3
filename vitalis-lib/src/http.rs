//! Shared HTTP client construction.
//!
//! Every upstream call (registries and hosting APIs) goes through a client built here so
//! that a per-request timeout always bounds how long an unresponsive server can stall
//! an evaluation.

use crate::Result;
use core::time::Duration;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

const USER_AGENT: &str = concat!("vitalis/", env!("CARGO_PKG_VERSION"));

/// Default timeout for a single upstream request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build an HTTP client with the given timeout and an optional authentication header
/// attached to every request.
pub fn build_client(timeout: Duration, auth: Option<(HeaderName, String)>) -> Result<reqwest::Client> {
    let mut client_builder = reqwest::Client::builder().user_agent(USER_AGENT).timeout(timeout);

    if let Some((name, value)) = auth {
        let mut auth_val = HeaderValue::from_str(&value)?;
        auth_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let _ = headers.insert(name, auth_val);

        client_builder = client_builder.default_headers(headers);
    }

    Ok(client_builder.build()?)
}
