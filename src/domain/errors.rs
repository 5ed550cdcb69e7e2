use derive_more::Display;

/// Rejected user input. Surfaced as a warning toast, never mutates state.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "Select at least one symbol first")]
    EmptySelection,
    #[display(fmt = "You can compare at most {} symbols", max)]
    SelectionFull { max: usize },
    #[display(fmt = "{} is already selected", _0)]
    DuplicateSymbol(String),
    #[display(fmt = "Symbol cannot be empty")]
    BlankSymbol,
    #[display(fmt = "Refresh interval must be at least {} seconds", min)]
    RefreshIntervalTooShort { min: u32 },
}

/// Error taxonomy of the whole application. None of these is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "Malformed response: {}", _0)]
    Decode(String),
    #[display(fmt = "No API URL configured")]
    ConfigMissing,
    #[display(fmt = "Request timed out after {} ms", _0)]
    Timeout(u32),
    #[display(fmt = "Storage error: {}", _0)]
    Storage(String),
    #[display(fmt = "{}", _0)]
    Validation(ValidationError),
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Decode(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        let err: AppError = ValidationError::SelectionFull { max: 10 }.into();
        assert_eq!(err.to_string(), "You can compare at most 10 symbols");
        assert_eq!(
            ValidationError::DuplicateSymbol("AAPL".into()).to_string(),
            "AAPL is already selected"
        );
    }

    #[test]
    fn json_errors_become_decode_failures() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
