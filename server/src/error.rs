//! Server startup errors.

use std::net::SocketAddr;

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {message}")]
    Config { var: &'static str, message: String },

    /// The Leptos build configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
