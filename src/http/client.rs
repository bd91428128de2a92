use std::time::Duration;

use reqwest::Client;
use tracing::error;

use crate::error::AppResult;

pub const DEFAULT_USER_AGENT: &str = concat!("ocsp-loadgen/", env!("CARGO_PKG_VERSION"));

/// Knobs for the one client shared by every send.
///
/// Timeouts are off unless set, so a responder that never answers keeps its
/// send (and therefore the drain) waiting.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub no_user_agent: bool,
}

/// Builds the shared HTTP client.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialised.
pub fn build_client(options: &ClientOptions) -> AppResult<Client> {
    let mut client_builder = Client::builder();

    if let Some(timeout) = options.request_timeout {
        client_builder = client_builder.timeout(timeout);
    }
    if let Some(timeout) = options.connect_timeout {
        client_builder = client_builder.connect_timeout(timeout);
    }
    if !options.no_user_agent {
        client_builder = client_builder.user_agent(DEFAULT_USER_AGENT);
    }

    match client_builder.build() {
        Ok(client) => Ok(client),
        Err(err) => {
            error!("Failed to build HTTP client: {}", err);
            Err(err.into())
        }
    }
}
