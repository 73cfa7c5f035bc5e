pub mod settings;

pub use settings::Settings;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "resume-match")]
#[command(about = "Scores a resume against a job description by keyword overlap")]
pub struct CliConfig {
    /// Path to the resume as plain text.
    #[arg(long)]
    pub resume: Option<String>,

    /// Path to the job description as plain text.
    #[arg(long)]
    pub job: String,

    /// Job title, used for domain detection.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Company name, carried into the report.
    #[arg(long, default_value = "")]
    pub company: String,

    /// Posting URL, used for domain detection and carried into the report.
    #[arg(long, default_value = "")]
    pub url: String,

    /// HTTP endpoint serving the keyword catalog JSON.
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Local keyword catalog JSON file; takes priority over --catalog-url.
    #[arg(long)]
    pub catalog_file: Option<String>,

    /// TOML settings file; CLI flags override its values.
    #[arg(long)]
    pub config: Option<String>,

    /// Job descriptions shorter than this log a warning.
    #[arg(long)]
    pub min_job_length: Option<usize>,

    /// Include an HTML rendering of the job text with keywords highlighted.
    #[arg(long)]
    pub highlight: bool,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Folds a settings file underneath the CLI flags: a flag that was not
    /// given falls back to the file's value.
    pub fn merge_settings(&mut self, settings: &Settings) {
        if self.catalog_url.is_none() {
            self.catalog_url = settings.catalog.url.clone();
        }
        if self.catalog_file.is_none() {
            self.catalog_file = settings.catalog.file.clone();
        }
        if !self.highlight {
            self.highlight = settings.analysis.highlight;
        }
        if self.min_job_length.is_none() {
            self.min_job_length = Some(settings.analysis.min_job_length);
        }
        if self.output.is_none() {
            self.output = settings.output.report_path.clone();
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn catalog_url(&self) -> Option<&str> {
        self.catalog_url.as_deref()
    }

    fn catalog_file(&self) -> Option<&str> {
        self.catalog_file.as_deref()
    }

    fn min_job_length(&self) -> usize {
        self.min_job_length
            .unwrap_or(crate::core::engine::MIN_JOB_LENGTH)
    }

    fn highlight(&self) -> bool {
        self.highlight
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("job", &self.job)?;
        if let Some(resume) = &self.resume {
            validate_path("resume", resume)?;
        }
        if let Some(url) = &self.catalog_url {
            validate_url("catalog_url", url)?;
        }
        if let Some(file) = &self.catalog_file {
            validate_path("catalog_file", file)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        validate_range("min_job_length", self.min_job_length(), 0, 10_000)?;
        Ok(())
    }
}
