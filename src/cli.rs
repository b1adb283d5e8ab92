use crate::config::EffortOverrides;
use crate::io::OutputFormat as WriterFormat;
use crate::report::{GroupKey, GroupMetric};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jobmap")]
#[command(about = "ETL job migration complexity classifier and effort estimator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify job files and estimate migration effort
    Analyze {
        /// Component inventory CSV (columns: file, component_type, unique_name)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file or directory (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .jobmap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        effort: EffortArgs,

        /// Show only top N most complex files
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Show only bottom N easiest files
        #[arg(long = "tail")]
        tail: Option<usize>,

        /// Add a grouped summary by these categories
        #[arg(long = "group-by", value_enum, value_delimiter = ',')]
        group_by: Option<Vec<GroupBy>>,

        /// Column aggregated by --group-by
        #[arg(long, value_enum, default_value = "score")]
        metric: Metric,

        /// Disable colors and emoji
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print an example input CSV
    Sample {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Effort parameter overrides. Unset flags keep the configured value.
#[derive(Args, Debug, Clone, Default)]
pub struct EffortArgs {
    /// Baseline hours for Small files
    #[arg(long)]
    pub small_hours: Option<f64>,

    /// Baseline hours for Medium files
    #[arg(long)]
    pub medium_hours: Option<f64>,

    /// Baseline hours for Large files
    #[arg(long)]
    pub large_hours: Option<f64>,

    /// Baseline hours for XLarge files
    #[arg(long)]
    pub xlarge_hours: Option<f64>,

    /// Low complexity multiplier
    #[arg(long)]
    pub low_multiplier: Option<f64>,

    /// Medium complexity multiplier
    #[arg(long)]
    pub medium_multiplier: Option<f64>,

    /// High complexity multiplier
    #[arg(long)]
    pub high_multiplier: Option<f64>,

    /// Number of developers
    #[arg(long, env = "JOBMAP_DEVELOPERS")]
    pub developers: Option<u32>,

    /// Working hours per day
    #[arg(long)]
    pub hours_per_day: Option<u32>,

    /// Working days per week
    #[arg(long)]
    pub days_per_week: Option<u32>,
}

impl From<&EffortArgs> for EffortOverrides {
    fn from(args: &EffortArgs) -> Self {
        Self {
            small_hours: args.small_hours,
            medium_hours: args.medium_hours,
            large_hours: args.large_hours,
            xlarge_hours: args.xlarge_hours,
            low_multiplier: args.low_multiplier,
            medium_multiplier: args.medium_multiplier,
            high_multiplier: args.high_multiplier,
            developers: args.developers,
            hours_per_day: args.hours_per_day,
            days_per_week: args.days_per_week,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for WriterFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => WriterFormat::Csv,
            OutputFormat::Json => WriterFormat::Json,
            OutputFormat::Markdown => WriterFormat::Markdown,
            OutputFormat::Terminal => WriterFormat::Terminal,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Size,
    Complexity,
    Database,
}

impl From<GroupBy> for GroupKey {
    fn from(key: GroupBy) -> Self {
        match key {
            GroupBy::Size => GroupKey::Size,
            GroupBy::Complexity => GroupKey::Complexity,
            GroupBy::Database => GroupKey::Database,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    Score,
    Hours,
}

impl From<Metric> for GroupMetric {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Score => GroupMetric::ComplexityScore,
            Metric::Hours => GroupMetric::EstimatedHours,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_with_overrides() {
        let cli = Cli::try_parse_from([
            "jobmap",
            "analyze",
            "jobs.csv",
            "--format",
            "csv",
            "--developers",
            "5",
            "--high-multiplier",
            "2.0",
            "--group-by",
            "size,complexity",
            "--metric",
            "hours",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                input,
                format,
                effort,
                group_by,
                metric,
                ..
            } => {
                assert_eq!(input, PathBuf::from("jobs.csv"));
                assert_eq!(format, OutputFormat::Csv);
                assert_eq!(effort.developers, Some(5));
                assert_eq!(effort.high_multiplier, Some(2.0));
                assert_eq!(effort.small_hours, None);
                assert_eq!(group_by, Some(vec![GroupBy::Size, GroupBy::Complexity]));
                assert_eq!(metric, Metric::Hours);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_negative_developers_rejected_by_parser() {
        let result = Cli::try_parse_from(["jobmap", "analyze", "jobs.csv", "--developers", "-1"]);
        assert!(result.is_err());
    }
}
