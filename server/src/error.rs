//! Server startup and runtime errors.

/// Failures that stop the server. Request handling itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `PORT` was set but is not a valid port number.
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),

    /// `[package.metadata.leptos]` / `LEPTOS_*` configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listener could not bind to the configured address.
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    /// The accept loop terminated with an I/O error.
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
