use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Resume content is unparsed binary data")]
    BinaryContent,

    #[error("Catalog request failed: {0}")]
    CatalogFetch(#[from] reqwest::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Pattern error for keyword '{keyword}': {message}")]
    PatternError { keyword: String, message: String },
}

impl MatchError {
    /// Message suitable for direct display to an end user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::BinaryContent => {
                "The resume was not parsed correctly and still contains raw PDF data.".to_string()
            }
            MatchError::CatalogFetch(_) => {
                "The keyword catalog could not be downloaded.".to_string()
            }
            MatchError::CatalogParse(_) => "The keyword catalog is not valid JSON.".to_string(),
            MatchError::IoError(e) => format!("File access failed: {}", e),
            MatchError::ConfigError { message } => format!("Configuration problem: {}", message),
            MatchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            MatchError::PatternError { keyword, .. } => {
                format!(
                    "Catalog entry '{}' could not be compiled into a pattern.",
                    keyword
                )
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MatchError::BinaryContent => "Re-export the resume as plain text and try again.",
            MatchError::CatalogFetch(_) => {
                "Check the catalog URL and network connectivity, or omit it to use the built-in catalog."
            }
            MatchError::CatalogParse(_) => {
                "Verify the catalog file contains the expected techKeywords/softKeywords arrays."
            }
            MatchError::IoError(_) => "Check that the input paths exist and are readable.",
            MatchError::ConfigError { .. } | MatchError::InvalidConfigValueError { .. } => {
                "Fix the flagged configuration value and re-run."
            }
            MatchError::PatternError { .. } => "Remove or correct the offending catalog entry.",
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
