use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("invalid connection id '{value}': {source}")]
    InvalidConnectionId {
        value: String,
        #[source]
        source: uuid::Error,
    },
}
