//! Error taxonomy shared by the editor, the serializer and the HTTP layer

use crate::enums::LanguageCode;

/// Draft content that cannot be turned into a request payload
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: \"{value}\" is not a number")]
    InvalidNumber { field: String, value: String },

    #[error("{field}: language is required")]
    MissingLanguage { field: String },

    #[error("language \"{language}\" is used by more than one service detail")]
    DuplicateLanguage { language: LanguageCode },
}

impl ValidationError {
    /// Path of the offending field, e.g. `serviceDetails[0].servicePrice`
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidNumber { field, .. } => Some(field),
            ValidationError::MissingLanguage { field } => Some(field),
            ValidationError::DuplicateLanguage { .. } => None,
        }
    }
}

/// Failure of a request to the catalog API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request did not reach the backend (offline, CORS, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Request could not be built (query string, body)
    #[error("failed to build request: {0}")]
    Encode(String),
}

/// Submission refused before any request was sent
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error("record {0} is not loaded in this form")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to encode payload: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::InvalidNumber {
            field: "serviceDetails[0].servicePrice".into(),
            value: "12a".into(),
        };
        assert_eq!(err.field(), Some("serviceDetails[0].servicePrice"));
        assert_eq!(
            err.to_string(),
            "serviceDetails[0].servicePrice: \"12a\" is not a number"
        );

        let dup = ValidationError::DuplicateLanguage {
            language: LanguageCode::Vi,
        };
        assert_eq!(dup.field(), None);
        assert!(dup.to_string().contains("\"vi\""));
    }

    #[test]
    fn test_submit_error_wraps_validation() {
        let err: SubmitError = ValidationError::MissingLanguage {
            field: "serviceDetails[1].language".into(),
        }
        .into();
        assert_eq!(err.to_string(), "serviceDetails[1].language: language is required");
    }
}
