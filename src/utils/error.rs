use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Not a numeric value: '{input}'")]
    ParseError { input: String },

    #[error("No boundary selected")]
    NoBoundSelected,

    #[error("Data set contains no values")]
    EmptyDataset,

    #[error("Invalid value domain: min bound {min_bound} must be below max bound {max_bound}")]
    InvalidDomain { min_bound: f64, max_bound: f64 },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserInput,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SelectError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SelectError::ParseError { .. } | SelectError::NoBoundSelected => {
                ErrorCategory::UserInput
            }
            SelectError::InvalidConfigValueError { .. }
            | SelectError::MissingConfigError { .. }
            | SelectError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            SelectError::EmptyDataset | SelectError::InvalidDomain { .. } => ErrorCategory::Data,
            SelectError::IoError(_) | SelectError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Recoverable inside a running session: the selector stays open.
            SelectError::ParseError { .. } | SelectError::NoBoundSelected => ErrorSeverity::Low,
            SelectError::SerializationError(_) => ErrorSeverity::Medium,
            SelectError::EmptyDataset
            | SelectError::InvalidDomain { .. }
            | SelectError::InvalidConfigValueError { .. }
            | SelectError::MissingConfigError { .. }
            | SelectError::ConfigValidationError { .. } => ErrorSeverity::High,
            SelectError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SelectError::ParseError { .. } => {
                "Enter a plain decimal number, e.g. 3.5 or -120".to_string()
            }
            SelectError::NoBoundSelected => {
                "Enable at least one of the min/max boundaries before confirming".to_string()
            }
            SelectError::EmptyDataset => {
                "Provide a values file with at least one data point, or pass explicit bounds"
                    .to_string()
            }
            SelectError::InvalidDomain { .. } => {
                "Check the configured bounds: min_bound must be strictly below max_bound"
                    .to_string()
            }
            SelectError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and retry", field)
            }
            SelectError::MissingConfigError { field } => {
                format!("Set '{}' on the command line or in the config file", field)
            }
            SelectError::ConfigValidationError { .. } => {
                "Check the configuration file against the documented format".to_string()
            }
            SelectError::IoError(_) => {
                "Check that the input files exist and the output path is writable".to_string()
            }
            SelectError::SerializationError(_) => {
                "Check that the input file contains valid JSON".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SelectError::ParseError { input } => format!("'{}' is not a number", input),
            SelectError::NoBoundSelected => "Choose at least one boundary.".to_string(),
            SelectError::EmptyDataset => "The data set is empty".to_string(),
            SelectError::InvalidDomain {
                min_bound,
                max_bound,
            } => format!(
                "Bounds [{}, {}] do not form a valid range",
                min_bound, max_bound
            ),
            SelectError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            SelectError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            SelectError::ConfigValidationError { message, .. } => {
                format!("Configuration file problem: {}", message)
            }
            SelectError::IoError(e) => format!("File access failed: {}", e),
            SelectError::SerializationError(e) => format!("Data format problem: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectError>;
