use clap::Parser;
use resume_match::utils::{logger, validation::Validate};
use resume_match::{
    load_catalog, BuiltinCatalogSource, CatalogSource, CliConfig, ConfigProvider,
    FileCatalogSource, HttpCatalogSource, JobMetadata, MatchEngine, Settings,
};

/// Stand-in resume used when no resume file is given, so the tool can be
/// tried without any setup.
const PLACEHOLDER_RESUME: &str =
    "JavaScript React TypeScript Node.js Python Git SQL MongoDB HTML CSS";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting resume-match CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        match Settings::from_file(&path) {
            Ok(settings) => {
                if let Err(e) = settings.validate() {
                    tracing::error!("❌ Settings file validation failed: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
                config.merge_settings(&settings);
            }
            Err(e) => {
                tracing::error!("❌ Could not load settings from {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // File beats URL beats built-in lists.
    let source: Box<dyn CatalogSource> = if let Some(file) = config.catalog_file() {
        Box::new(FileCatalogSource::new(file))
    } else if let Some(url) = config.catalog_url() {
        Box::new(HttpCatalogSource::new(url.to_string()))
    } else {
        Box::new(BuiltinCatalogSource)
    };
    let catalog = load_catalog(source.as_ref()).await;

    let resume_text = match &config.resume {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            tracing::warn!("No resume given, scoring against a placeholder skill list");
            PLACEHOLDER_RESUME.to_string()
        }
    };
    let job_text = std::fs::read_to_string(&config.job)?;

    let metadata = JobMetadata {
        title: config.title.clone(),
        company: config.company.clone(),
        date: String::new(),
        source_url: config.url.clone(),
    };

    let engine = MatchEngine::new(catalog)
        .with_highlight(config.highlight())
        .with_min_job_length(config.min_job_length());

    match engine.analyze_job(&resume_text, &job_text, &metadata) {
        Ok(report) => {
            let r = &report.result;
            println!(
                "✅ Your resume has {} out of {} keywords from this job description ({}% match, {} role)",
                r.matched_count, r.total_keywords, r.score, r.domain
            );
            let json = serde_json::to_string_pretty(&report)?;
            match &config.output {
                Some(path) => {
                    std::fs::write(path, &json)?;
                    println!("📁 Report saved to: {}", path);
                }
                None => println!("{}", json),
            }
        }
        Err(e) => {
            tracing::error!("❌ Analysis failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
