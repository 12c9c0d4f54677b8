use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("API error: {0}")]
    ApiStatus(String),

    #[error("Invalid TTL: {0}")]
    InvalidTtl(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Config(String),
}
