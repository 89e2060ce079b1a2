use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupSumError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Parse error on line {line}: invalid integer '{token}' at token {position}")]
    ParseError {
        line: usize,
        token: String,
        position: usize,
    },

    #[error("Missing input: {what}")]
    MissingInput { what: String },

    #[error("Invalid target line: expected exactly one integer, found {found} tokens")]
    InvalidTarget { found: usize },

    #[error("Sequence of length {length} exceeds maximum recursion depth {max_depth}")]
    DepthLimitExceeded { length: usize, max_depth: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Resource,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl GroupSumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ParseError { .. } | Self::MissingInput { .. } | Self::InvalidTarget { .. } => {
                ErrorCategory::Input
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::DepthLimitExceeded { .. } => ErrorCategory::Resource,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Resource => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Input and config problems exit 1,
    /// a refused search exits 2, system failures exit 3.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ParseError { line: 1, .. } => {
                "The first line must hold whitespace-separated integers, e.g. `2 4 8`".to_string()
            }
            Self::ParseError { .. } | Self::InvalidTarget { .. } => {
                "The second line must hold a single integer target, e.g. `10`".to_string()
            }
            Self::MissingInput { .. } => {
                "Provide two lines on stdin: the sequence, then the target".to_string()
            }
            Self::DepthLimitExceeded { .. } => {
                "Use --strategy iterative, or raise --max-depth".to_string()
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file against the documented [search] and [output] keys"
                    .to_string()
            }
            Self::IoError(_) => "Check that stdin and stdout are readable and writable".to_string(),
            Self::SerializationError(_) => "Retry with --format plain".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ParseError { token, .. } => format!("'{}' is not a valid integer", token),
            Self::MissingInput { what } => format!("No {} was provided", what),
            Self::InvalidTarget { found } => {
                format!("Expected one target value but got {}", found)
            }
            Self::DepthLimitExceeded { length, max_depth } => format!(
                "A sequence of {} numbers is too long for the recursive search (limit {})",
                length, max_depth
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GroupSumError>;
