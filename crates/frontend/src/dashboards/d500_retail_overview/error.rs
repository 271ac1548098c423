use thiserror::Error;

/// Why a single loader gave up. Never leaves the loader that produced it.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("render target #{0} is not mounted")]
    MissingTarget(&'static str),

    #[error("chart construction failed: {0}")]
    Chart(String),
}
