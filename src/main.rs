use clap::Parser;
use group_sum::config::toml_config::TomlConfig;
use group_sum::domain::model::OutputFormat;
use group_sum::domain::ports::ConfigProvider;
use group_sum::utils::{logger, validation::Validate};
use group_sum::{CliConfig, GroupSumError, LineSource, SearchEngine, Settings, WriterSink};
use std::io;

fn main() {
    let cli = CliConfig::parse();

    // Logging follows the resolved output format.
    let settings = load_settings(&cli);
    let format = match &settings {
        Ok(settings) => settings.output_format(),
        Err(_) => cli.format.unwrap_or_default(),
    };
    if format == OutputFormat::Json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);
    if let (Some(path), Ok(_)) = (&cli.config, &settings) {
        tracing::info!("📁 Loaded configuration from: {}", path.display());
    }

    if let Err(e) = settings.and_then(|settings| run(&settings)) {
        tracing::error!(
            "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn load_settings(cli: &CliConfig) -> Result<Settings, GroupSumError> {
    let file_config = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    let settings = Settings::resolve(cli, file_config.as_ref());
    settings.validate()?;
    Ok(settings)
}

fn run(settings: &Settings) -> Result<(), GroupSumError> {
    tracing::debug!("Effective settings: {:?}", settings);

    if settings.monitoring_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let source = LineSource::new(io::stdin().lock());
    let sink = WriterSink::new(io::stdout().lock());
    let mut engine = SearchEngine::new_with_monitoring(source, sink, settings.monitoring_enabled());

    engine.run(&settings.search_request(), settings.output_format())?;
    Ok(())
}
