use crate::config::toml_config::TomlConfig;
use crate::core::engine::MAX_DEPTH_LIMIT;
use crate::domain::model::{OutputFormat, SearchRequest, DEFAULT_MAX_DEPTH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

#[cfg(feature = "cli")]
use crate::config::CliConfig;

/// Effective settings for one run after command-line flags are layered
/// over the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub request: SearchRequest,
    pub format: OutputFormat,
    pub monitor: bool,
}

impl Settings {
    pub fn from_file_config(file: &TomlConfig) -> Self {
        Self {
            request: SearchRequest {
                strategy: file.search.strategy.unwrap_or_default(),
                max_depth: file.search.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
                witness: file.search.witness.unwrap_or(false),
                all: file.search.all.unwrap_or(false),
            },
            format: file.output.format.unwrap_or_default(),
            monitor: file.monitoring.enabled.unwrap_or(false),
        }
    }

    /// Flags that were given on the command line win over the file.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let mut settings = file.map(Self::from_file_config).unwrap_or_default();

        if let Some(strategy) = cli.strategy {
            settings.request.strategy = strategy;
        }
        if let Some(max_depth) = cli.max_depth {
            settings.request.max_depth = max_depth;
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }
        settings.request.witness |= cli.witness;
        settings.request.all |= cli.all;
        settings.monitor |= cli.monitor;

        settings
    }
}

impl ConfigProvider for Settings {
    fn search_request(&self) -> SearchRequest {
        self.request
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("max_depth", self.request.max_depth, 1, MAX_DEPTH_LIMIT)
    }
}
