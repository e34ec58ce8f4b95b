//! Runtime configuration.
//!
//! Every setting has an environment variable and a command-line flag; the
//! flag wins. See `main.rs` for the wiring.

use std::net::SocketAddr;

use storefront_catalog::ContentSource;

pub const CONTENT_ENV: &str = "STOREFRONT_CONTENT";
pub const BIND_ENV: &str = "STOREFRONT_BIND";

pub const DEFAULT_CONTENT: &str = "content.json";
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Where `content.json` is read or fetched from.
    pub content: ContentSource,
    /// Listen address of `storefront serve`.
    pub bind: SocketAddr,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            content: ContentSource::file(DEFAULT_CONTENT),
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}
