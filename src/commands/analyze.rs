use crate::config::{self, EffortOverrides, EffortParameters, JobmapConfig};
use crate::errors::JobmapError;
use crate::formatting::FormattingConfig;
use crate::io::output::DEFAULT_EXPORT_FILE_NAME;
use crate::io::{self, create_writer, OutputFormat, ReportOptions};
use crate::pipeline;
use crate::report::{GroupKey, GroupMetric};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub overrides: EffortOverrides,
    pub top: Option<usize>,
    pub tail: Option<usize>,
    pub group_by: Option<Vec<GroupKey>>,
    pub metric: GroupMetric,
    pub formatting_config: FormattingConfig,
}

/// Attach the error category so the user sees e.g. `SchemaError: ...`.
fn classified(err: JobmapError) -> anyhow::Error {
    let kind = err.kind();
    anyhow::Error::new(err).context(kind)
}

fn load_settings(config_path: Option<&Path>) -> Result<JobmapConfig> {
    match config_path {
        Some(path) => config::load_config_from_path(path).map_err(classified),
        None => {
            let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Ok(config::load_config(&start))
        }
    }
}

// Pure function to resolve effort parameters from config and CLI overrides
fn resolve_parameters(settings: &JobmapConfig, overrides: &EffortOverrides) -> EffortParameters {
    settings.effort.with_overrides(overrides)
}

// Pure function to build report options
fn build_report_options(config: &AnalyzeConfig, settings: &JobmapConfig) -> ReportOptions {
    ReportOptions {
        top: config.top.unwrap_or(settings.report.top),
        tail: config.tail.unwrap_or(settings.report.top),
        grouping: config
            .group_by
            .clone()
            .filter(|keys| !keys.is_empty())
            .map(|keys| (keys, config.metric)),
    }
}

/// CSV exports to a directory land in the default export file name.
fn resolve_output_path(output: &Path, format: OutputFormat) -> PathBuf {
    if format == OutputFormat::Csv && io::dir_exists(output) {
        output.join(DEFAULT_EXPORT_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

fn open_destination(config: &AnalyzeConfig) -> Result<(Box<dyn Write>, FormattingConfig)> {
    match &config.output {
        Some(output) => {
            let path = resolve_output_path(output, config.format);
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            log::info!("Writing report to {}", path.display());
            // Never write escape codes into files
            Ok((Box::new(BufWriter::new(file)), FormattingConfig::plain()))
        }
        None => Ok((Box::new(std::io::stdout()), config.formatting_config)),
    }
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = load_settings(config.config_path.as_deref())?;
    let params = resolve_parameters(&settings, &config.overrides);
    log::debug!("Effort parameters: {:?}", params);

    let rows = io::read_component_rows_from_path(&config.input)
        .map_err(classified)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;

    // Nothing is written unless the whole analysis succeeded
    let report = pipeline::analyze(&rows, &params).map_err(classified)?;

    let options = build_report_options(&config, &settings);
    let (destination, formatting) = open_destination(&config)?;
    let mut writer = create_writer(config.format, destination, options, formatting);
    writer.write_report(&report)?;
    Ok(())
}
