//! Error types for the jobnote-core library.
//!
//! Field extraction never fails; these errors belong to the collaborators
//! around it (settings persistence, remote submission, configuration).

use thiserror::Error;

/// Main error type for the jobnote library.
#[derive(Error, Debug)]
pub enum JobnoteError {
    /// Settings store error.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Remote submission error.
    #[error("submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to credential storage.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write the settings file.
    #[error("failed to access settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// One of the two credentials is missing or empty.
    #[error("both settings fields are required")]
    Incomplete,
}

/// Errors reported by a remote sink.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The remote service answered and refused the record.
    ///
    /// The message is shown to the operator verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced an answer (connection, TLS, timeout).
    #[error("{0}")]
    Transport(String),
}

/// Result type for the jobnote library.
pub type Result<T> = std::result::Result<T, JobnoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_message_is_verbatim() {
        let err = SubmissionError::Rejected("Could not find database.".to_string());
        assert_eq!(err.to_string(), "Could not find database.");
    }

    #[test]
    fn test_settings_error_converts() {
        let err: JobnoteError = SettingsError::Incomplete.into();
        assert_eq!(err.to_string(), "settings error: both settings fields are required");
    }
}
