use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaposError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("parse error: {0}")]
    ParseError(String),
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("query error: {0}")]
    QueryError(String),
}

impl From<serde_json::Error> for TaposError {
    fn from(err: serde_json::Error) -> Self {
        TaposError::ParseError(err.to_string())
    }
}
