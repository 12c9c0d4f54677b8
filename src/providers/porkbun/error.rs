use thiserror::Error;

use crate::error::Error;

#[derive(Error, Debug)]
pub enum PorkbunProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    ApiStatus {
        status: String,
        message: Option<String>,
    },

    #[error("Invalid TTL: {0}")]
    InvalidTtl(String),

    #[error("Create response carried no record ID")]
    MissingId,
}

pub fn map_error(e: PorkbunProviderError) -> Error {
    use PorkbunProviderError::*;
    match e {
        Http(err) => Error::Transport(err.to_string()),
        Decode(err) => Error::Decode(err.to_string()),
        ApiStatus { status, message } => Error::ApiStatus(message.unwrap_or(status)),
        InvalidTtl(raw) => Error::InvalidTtl(raw),
        MissingId => Error::Decode("missing record ID".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_map_error_variants() {
        use PorkbunProviderError::*;

        let err = map_error(ApiStatus {
            status: "ERROR".to_string(),
            message: Some("Invalid API key. (002)".to_string()),
        });
        assert!(matches!(err, Error::ApiStatus(ref m) if m == "Invalid API key. (002)"));
        let err = map_error(ApiStatus {
            status: "ERROR".to_string(),
            message: None,
        });
        assert!(matches!(err, Error::ApiStatus(ref m) if m == "ERROR"));
        let err = map_error(InvalidTtl("abc".to_string()));
        assert!(matches!(err, Error::InvalidTtl(_)));
        let err = map_error(MissingId);
        assert!(matches!(err, Error::Decode(_)));
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = map_error(Decode(json_err));
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_api_status_display() {
        let err = PorkbunProviderError::ApiStatus {
            status: "ERROR".to_string(),
            message: Some("Invalid API key".to_string()),
        };
        assert_eq!(err.to_string(), "API status ERROR: Invalid API key");
    }
}
