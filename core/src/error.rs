//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use crate::contract::Unresolved;
use crate::validation::ValidationFailure;
use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The loaded document does not have the shape of a resolved API description
    /// (e.g. `paths` is not a mapping). Created explicitly by the loader.
    #[from(ignore)]
    #[display("Document Error: {_0}")]
    Document(String),

    /// A request path or method/status combination could not be resolved to a schema.
    #[display("Unresolved: {_0}")]
    Unresolved(Unresolved),

    /// A payload does not conform to its response schema.
    #[display("Validation Error: {_0}")]
    Validation(ValidationFailure),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String must land in General, never in Document
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_document_manual_creation() {
        let app_err = AppError::Document("paths is not a mapping".into());
        assert_eq!(
            format!("{}", app_err),
            "Document Error: paths is not a mapping"
        );
    }

    #[test]
    fn test_unresolved_conversion() {
        let app_err: AppError = Unresolved::NoMatch {
            path: "/nowhere".into(),
        }
        .into();
        assert!(matches!(app_err, AppError::Unresolved(_)));
        assert!(app_err.to_string().contains("/nowhere"));
    }
}
