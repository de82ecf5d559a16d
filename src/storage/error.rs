use thiserror::Error;

/// Failures of a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend refuses all access (e.g. storage disabled by the host).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded writing `{key}` ({needed} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serde(String),
    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
