use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Negative input is not supported: {value}")]
    NegativeInput { value: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

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
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl KataError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KataError::NegativeInput { .. } => ErrorCategory::Input,
            KataError::ConfigError { .. }
            | KataError::ConfigValidationError { .. }
            | KataError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            KataError::IoError(_) | KataError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KataError::SerializationError(_) => ErrorSeverity::Medium,
            _ => match self.category() {
                ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
                ErrorCategory::System => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            KataError::NegativeInput { .. } => {
                "Provide a number greater than or equal to zero".to_string()
            }
            KataError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            KataError::SerializationError(_) => {
                "Try the text output format instead of json".to_string()
            }
            KataError::ConfigError { .. } | KataError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            KataError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in your configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::NegativeInput { value } => {
                format!("Cannot find the largest digit of {}: negative numbers are not supported", value)
            }
            KataError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let negative = KataError::NegativeInput { value: -1 };
        assert_eq!(negative.category(), ErrorCategory::Input);
        assert_eq!(negative.severity().exit_code(), 1);

        let io = KataError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.severity().exit_code(), 3);
        assert!(io.user_friendly_message().starts_with("Could not read input"));
    }

    #[test]
    fn test_config_errors_name_the_field() {
        let err = KataError::InvalidConfigValueError {
            field: "largest_digit.number".to_string(),
            value: "-2".to_string(),
            reason: "Value must be zero or greater".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("largest_digit.number"));
        assert!(err.recovery_suggestion().contains("largest_digit.number"));
    }
}
