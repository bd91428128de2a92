//! Outbound OCSP traffic: the shared client, single sends and rate scheduling.
mod client;
mod rate;
mod sender;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::{ClientOptions, DEFAULT_USER_AGENT, build_client};
pub use rate::RateScheduler;
pub use sender::{OCSP_REQUEST_CONTENT_TYPE, SendContext, send, spawn_send};
