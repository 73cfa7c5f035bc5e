//! TOML settings file with `${ENV_VAR}` substitution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::engine::MIN_JOB_LENGTH;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub analysis: AnalysisSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// HTTP endpoint serving the catalog JSON.
    pub url: Option<String>,
    /// Local catalog file; takes priority over `url` when both are set.
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub min_job_length: usize,
    pub highlight: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            min_job_length: MIN_JOB_LENGTH,
            highlight: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Write the JSON report here instead of stdout.
    pub report_path: Option<String>,
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| MatchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment variable's value; unset
    /// variables are left as-is so validation can flag them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();
        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for Settings {
    fn catalog_url(&self) -> Option<&str> {
        self.catalog.url.as_deref()
    }

    fn catalog_file(&self) -> Option<&str> {
        self.catalog.file.as_deref()
    }

    fn min_job_length(&self) -> usize {
        self.analysis.min_job_length
    }

    fn highlight(&self) -> bool {
        self.analysis.highlight
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.catalog.url {
            validate_url("catalog.url", url)?;
        }
        if let Some(file) = &self.catalog.file {
            validate_path("catalog.file", file)?;
        }
        if let Some(report) = &self.output.report_path {
            validate_path("output.report_path", report)?;
        }
        validate_range(
            "analysis.min_job_length",
            self.analysis.min_job_length,
            0,
            10_000,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_settings() {
        let toml_content = r#"
[catalog]
url = "https://example.com/keywords.json"

[analysis]
min_job_length = 80
highlight = true
"#;
        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(
            settings.catalog_url(),
            Some("https://example.com/keywords.json")
        );
        assert_eq!(settings.min_job_length(), 80);
        assert!(settings.highlight());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_sections_absent() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.min_job_length(), MIN_JOB_LENGTH);
        assert!(!settings.highlight());
        assert!(settings.catalog_url().is_none());
        assert!(settings.catalog_file().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CATALOG_URL", "https://catalog.test/kw.json");

        let toml_content = r#"
[catalog]
url = "${TEST_CATALOG_URL}"
"#;
        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.catalog_url(), Some("https://catalog.test/kw.json"));

        std::env::remove_var("TEST_CATALOG_URL");
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let toml_content = r#"
[catalog]
url = "not-a-url"
"#;
        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[analysis]\nmin_job_length = 25\n")
            .unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.min_job_length(), 25);
    }
}
