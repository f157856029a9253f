//! Host startup errors.

use std::net::SocketAddr;

use crate::config::ConfigError;

/// Errors that abort server startup or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unusable value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The `[package.metadata.leptos]` configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
