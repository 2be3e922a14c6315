//! Server startup errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid leptos configuration: {0}")]
    Configuration(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped unexpectedly: {0}")]
    Serve(#[from] std::io::Error),
}
