// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use quizparse::app_config::{self, Config};
use quizparse::app_controller::{ConvertOptions, Controller};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a single quiz PDF or text transcript to JSON
    Convert(ConvertArgs),

    /// Convert every PDF in a directory and write a quiz index
    Batch(BatchArgs),

    /// Generate shell completions for quizparse
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input PDF or text file
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Output JSON file (default: input path with a .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Quiz title (default: input file name without extension)
    #[arg(short, long)]
    title: Option<String>,

    /// Source name recorded in the metadata (default: input file name)
    #[arg(short, long)]
    source: Option<String>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input directory containing PDF files
    #[arg(short, long, default_value = ".")]
    input: PathBuf,

    /// Output directory for JSON files (default: from config, ./data/quizzes)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Quiz index file (default: from config, ./data/quiz-index.json)
    #[arg(long)]
    index: Option<PathBuf>,

    /// Overwrite JSON files that already exist
    #[arg(short, long)]
    force_overwrite: bool,
}

/// quizparse - quiz transcript to JSON converter
///
/// Turns the text of trivia-contest PDFs into structured JSON with rounds,
/// players, questions, answers, accepted alternatives and translations.
#[derive(Parser, Debug)]
#[command(name = "quizparse")]
#[command(version)]
#[command(about = "Convert quiz contest PDFs to structured JSON")]
#[command(long_about = "quizparse extracts the text of quiz contest PDFs and converts it to JSON.

EXAMPLES:
    quizparse convert quiz.pdf                      # Writes quiz.json next to the PDF
    quizparse convert quiz.txt -o out.json -t 'ICC Quiz'
    quizparse batch -i ./pdfs -o ./data/quizzes     # Convert a whole directory
    quizparse completions bash > quizparse.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in quizparse.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "quizparse.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "quizparse", &mut std::io::stdout());
            Ok(())
        }
        Commands::Convert(args) => {
            let config = load_config(&cli.config_path, cli.log_level.is_none())?;
            run_convert(config, args)
        }
        Commands::Batch(args) => {
            let config = load_config(&cli.config_path, cli.log_level.is_none())?;
            run_batch(config, args)
        }
    }
}

/// Load the config file, creating a default one when it is missing
fn load_config(config_path: &str, apply_log_level: bool) -> Result<Config> {
    let config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    // If log level was not set via command line, take it from config now
    if apply_log_level {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

fn run_convert(config: Config, args: ConvertArgs) -> Result<()> {
    let controller = Controller::with_config(config)?;

    let options = ConvertOptions {
        output: args.output,
        title: args.title,
        source: args.source,
        force_overwrite: args.force_overwrite,
    };

    controller.run(&args.input_file, &options)?;
    Ok(())
}

fn run_batch(mut config: Config, args: BatchArgs) -> Result<()> {
    if let Some(output) = &args.output {
        config.output_dir = output.to_string_lossy().to_string();
    }
    if let Some(index) = &args.index {
        config.index_path = index.to_string_lossy().to_string();
    }
    if args.force_overwrite {
        config.skip_existing = false;
    }

    let output_dir = PathBuf::from(&config.output_dir);
    let index_path = PathBuf::from(&config.index_path);
    let controller = Controller::with_config(config)?;

    let report = controller.run_folder(&args.input, &output_dir, &index_path)?;

    if report.converted.is_empty() && !report.failed.is_empty() {
        return Err(anyhow!("All {} file(s) failed to convert", report.failed.len()));
    }

    Ok(())
}
