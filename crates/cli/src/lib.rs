//! `storefront` binary support: configuration, page commands, content server.

pub mod commands;
pub mod config;
pub mod server;

pub use config::StorefrontConfig;
