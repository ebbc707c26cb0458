use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The HTTP exchange could not be completed: DNS, connect, timeout or body read.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog returned status {status} {text}")]
    UnexpectedStatus { status: u16, text: String },
    #[error("catalog returned a malformed body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{name} must not be empty")]
    EmptyArgument { name: &'static str },
    #[error("invalid catalog url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("catalog url '{0}' cannot be used as a base url")]
    UnsupportedUrl(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::UnexpectedStatus { status: 404, .. })
    }
}
