use thiserror::Error;

/// Failures while preparing fixtures or reading what the code under test produced.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    JoseError(#[from] josekit::JoseError),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("Failed to derive session key: {0}")]
    KeyDerivation(String),
    #[error("Session claims must be a JSON object")]
    ClaimsNotObject,
}
