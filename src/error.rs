use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failure reported by a custom meal provider.
    #[error("{0}")]
    Provider(Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Advice(#[from] AdviceGenerationError),
}

/// A required profile field was absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// The single error type returned by the advice facade.
///
/// Carries only a human-readable message; the underlying cause is folded
/// into it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to generate nutrition advice: {message}")]
pub struct AdviceGenerationError {
    message: String,
}

impl AdviceGenerationError {
    pub const UNKNOWN: &'static str = "Unknown error";

    /// Wrap any error, falling back to "Unknown error" when it renders empty.
    pub fn wrap<E: std::fmt::Display>(cause: E) -> Self {
        let message = cause.to_string();
        if message.trim().is_empty() {
            Self {
                message: Self::UNKNOWN.to_string(),
            }
        } else {
            Self { message }
        }
    }

    /// The wrapped cause's message.
    pub fn cause(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, NutriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ValidationError::MissingField("age");
        assert_eq!(err.to_string(), "Missing required field: age");
    }

    #[test]
    fn test_wrap_embeds_cause() {
        let err = AdviceGenerationError::wrap(ValidationError::MissingField("weight"));
        assert_eq!(
            err.to_string(),
            "Failed to generate nutrition advice: Missing required field: weight"
        );
        assert_eq!(err.cause(), "Missing required field: weight");
    }

    #[test]
    fn test_wrap_empty_message_is_unknown() {
        let err = AdviceGenerationError::wrap("");
        assert_eq!(
            err.to_string(),
            "Failed to generate nutrition advice: Unknown error"
        );
    }
}
