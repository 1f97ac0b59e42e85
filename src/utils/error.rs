use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookwormsError {
    #[error("Bookworms file not found: {path}")]
    NotFound { path: String },

    #[error("Invalid bookworms document {path}: {source}")]
    InvalidDocument {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

impl BookwormsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookwormsError::NotFound { .. } | BookwormsError::InvalidDocument { .. } => {
                ErrorCategory::Input
            }
            BookwormsError::IoError(_)
            | BookwormsError::SerializationError(_)
            | BookwormsError::CsvError(_) => ErrorCategory::Output,
            BookwormsError::ConfigError { .. }
            | BookwormsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 對應 CLI 的結束代碼
    pub fn exit_code(&self) -> i32 {
        match self {
            BookwormsError::NotFound { .. } => 2,
            BookwormsError::ConfigError { .. }
            | BookwormsError::InvalidConfigValueError { .. } => 3,
            _ => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookwormsError::NotFound { .. } => {
                "Check the --path argument points to an existing file"
            }
            BookwormsError::InvalidDocument { .. } => {
                "The file must be a JSON array of {\"name\", \"books\": [{\"author\", \"title\"}]}"
            }
            BookwormsError::ConfigError { .. }
            | BookwormsError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
            _ => "Check the output location is writable and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookwormsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_and_invalid_document_are_distinct() {
        let not_found = BookwormsError::NotFound {
            path: "missing.json".to_string(),
        };
        let invalid = BookwormsError::InvalidDocument {
            path: "bad.json".to_string(),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };

        assert_eq!(not_found.category(), ErrorCategory::Input);
        assert_eq!(invalid.category(), ErrorCategory::Input);
        assert_eq!(not_found.exit_code(), 2);
        assert_eq!(invalid.exit_code(), 1);
        assert!(not_found.to_string().contains("missing.json"));
        assert!(invalid.to_string().contains("bad.json"));
    }

    #[test]
    fn test_config_errors_exit_code() {
        let err = BookwormsError::InvalidConfigValueError {
            field: "path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 3);
    }
}
