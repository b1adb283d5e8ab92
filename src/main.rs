use anyhow::Result;
use jobmap::cli::Commands;
use jobmap::commands::AnalyzeConfig;
use jobmap::formatting::FormattingConfig;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = jobmap::cli::parse_args();
    init_logging(cli.verbosity);

    match cli.command {
        command @ Commands::Analyze { .. } => handle_analyze_command(command),
        Commands::Init { force } => jobmap::commands::init_config(force),
        Commands::Sample { output } => jobmap::commands::write_sample(output.as_deref()),
    }
}

// Side effect at the edge: RUST_LOG still wins when set
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

// Pure function to map -v repetitions to a log level
fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

fn handle_analyze_command(command: Commands) -> Result<()> {
    if let Commands::Analyze {
        input,
        format,
        output,
        config,
        effort,
        top,
        tail,
        group_by,
        metric,
        plain,
    } = command
    {
        let analyze_config = AnalyzeConfig {
            input,
            format: format.into(),
            output,
            config_path: config,
            overrides: (&effort).into(),
            top,
            tail,
            group_by: group_by.map(|keys| keys.into_iter().map(Into::into).collect()),
            metric: metric.into(),
            formatting_config: create_formatting_config(plain),
        };
        jobmap::commands::handle_analyze(analyze_config)
    } else {
        Err(anyhow::anyhow!("Invalid command"))
    }
}
