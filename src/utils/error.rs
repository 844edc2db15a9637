use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimesError {
    #[error("-s and -e must be greater than or equal to zero (start = {start}, end = {end})")]
    InvalidBounds { start: i64, end: i64 },

    #[error("-s must be less than -e (start = {start}, end = {end})")]
    InvalidRange { start: i64, end: i64 },

    #[error("unrecognized option: {message}")]
    UnrecognizedOption { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PrimesError {
    /// Process exit status for this error.
    ///
    /// Bound and option errors keep the historical codes (1 and 2); the
    /// config and output failures get their own codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrimesError::InvalidBounds { .. } | PrimesError::UnrecognizedOption { .. } => 1,
            PrimesError::InvalidRange { .. } => 2,
            PrimesError::ConfigError { .. } | PrimesError::InvalidConfigValueError { .. } => 3,
            PrimesError::IoError(_) | PrimesError::SerializationError(_) => 4,
        }
    }

    /// Whether the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            PrimesError::InvalidBounds { .. }
                | PrimesError::InvalidRange { .. }
                | PrimesError::UnrecognizedOption { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PrimesError::InvalidBounds { .. } | PrimesError::InvalidRange { .. } => {
                format!("ERROR: {}", self)
            }
            PrimesError::UnrecognizedOption { message } => {
                format!("ERROR: unrecognized option or value: {}", message.trim_end())
            }
            PrimesError::ConfigError { message } => {
                format!("ERROR: could not load configuration: {}", message)
            }
            PrimesError::InvalidConfigValueError { field, value, reason } => {
                format!("ERROR: bad configuration value {} = {} ({})", field, value, reason)
            }
            PrimesError::IoError(e) => format!("ERROR: could not write output: {}", e),
            PrimesError::SerializationError(e) => {
                format!("ERROR: could not render summary: {}", e)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PrimesError::InvalidBounds { .. } => "pass non-negative values to -s and -e",
            PrimesError::InvalidRange { .. } => "make sure -s is strictly smaller than -e",
            PrimesError::UnrecognizedOption { .. } => "run with --help to list the accepted options",
            PrimesError::ConfigError { .. } => "check that the config file exists and is valid TOML",
            PrimesError::InvalidConfigValueError { .. } => {
                "fix the reported field in the config file or override it on the command line"
            }
            PrimesError::IoError(_) => "check that stdout is writable (e.g. not a closed pipe)",
            PrimesError::SerializationError(_) => "use --summary text instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimesError>;
