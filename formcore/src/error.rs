use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backing store could not be reached or refused the request.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("unknown error")]
    Unknown,
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("unsupported value: {0}")]
    Unsupported(String),
}
