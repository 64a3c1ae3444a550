use thiserror::Error;

#[derive(Error, Debug)]
pub enum FestError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("No festival found for identifier {id}")]
    NotFound { id: String },

    #[error("A request is already in flight")]
    RequestInFlight,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load festivals. Check your internet connection and try again.";

impl FestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FestError::ApiError(_) | FestError::HttpStatus { .. } | FestError::RequestInFlight => {
                ErrorCategory::Network
            }
            FestError::CsvError(_) | FestError::SerializationError(_) | FestError::NotFound { .. } => {
                ErrorCategory::Data
            }
            FestError::ConfigError { .. }
            | FestError::InvalidConfigValueError { .. }
            | FestError::MissingConfigError { .. }
            | FestError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            FestError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // An empty lookup is an answer, not a failure.
            FestError::NotFound { .. } => ErrorSeverity::Low,
            FestError::ApiError(_) | FestError::HttpStatus { .. } | FestError::RequestInFlight => {
                ErrorSeverity::Medium
            }
            FestError::CsvError(_) | FestError::SerializationError(_) => ErrorSeverity::High,
            FestError::ConfigError { .. }
            | FestError::InvalidConfigValueError { .. }
            | FestError::MissingConfigError { .. }
            | FestError::ConfigValidationError { .. } => ErrorSeverity::High,
            FestError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => LOAD_FAILURE_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FestError::ApiError(_) | FestError::HttpStatus { .. } => {
                "Check network access to the open data portal, or raise --timeout-seconds"
            }
            FestError::RequestInFlight => "Wait for the current page to finish loading",
            FestError::NotFound { .. } => "List festivals first and copy an identifier from the output",
            FestError::SerializationError(_) | FestError::CsvError(_) => {
                "The dataset format may have changed; rerun with --verbose to inspect the payload"
            }
            FestError::ConfigError { .. }
            | FestError::InvalidConfigValueError { .. }
            | FestError::MissingConfigError { .. }
            | FestError::ConfigValidationError { .. } => {
                "Fix the flag or configuration file value and run again"
            }
            FestError::IoError(_) => "Check file permissions and disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, FestError>;
