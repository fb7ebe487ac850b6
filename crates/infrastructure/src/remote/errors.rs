use thiserror::Error;

/// Transport setup failures; these end the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to remove stale socket {path}: {source}")]
    StaleSocket {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to bind socket {path}: {source}")]
    Bind {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
