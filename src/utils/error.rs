use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeggError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}': '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KeggError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) => ErrorCategory::Network,
            Self::IoError(_) => ErrorCategory::Storage,
            Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ApiError(_) => ErrorSeverity::Medium,
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) | Self::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) => format!("Could not reach the KEGG REST API: {}", e),
            Self::IoError(e) => format!("Could not write pathway files to disk: {}", e),
            Self::SerializationError(e) => format!("Could not encode the download manifest: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
            Self::ProcessingError { message } => format!("Download failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection and that https://rest.kegg.jp is reachable"
                    .to_string()
            }
            ErrorCategory::Storage => {
                "Check that the base path exists and is writable".to_string()
            }
            ErrorCategory::Configuration => {
                "Fix the flagged command-line option and try again".to_string()
            }
            ErrorCategory::Processing => {
                "Re-run the download; a partial run can be resumed by deleting the affected species directory".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KeggError>;
