// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, SchemaVariant, StageConfig};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod comment_extractor;
mod dataset_writer;
mod file_utils;
mod language_utils;
mod providers;
mod translation;
mod errors;

/// CLI Wrapper for SchemaVariant to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSchemaVariant {
    Flat,
    KindTracked,
}

impl From<CliSchemaVariant> for SchemaVariant {
    fn from(cli_variant: CliSchemaVariant) -> Self {
        match cli_variant {
            CliSchemaVariant::Flat => SchemaVariant::Flat,
            CliSchemaVariant::KindTracked => SchemaVariant::KindTracked,
        }
    }
}

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
    /// Build a comment translation corpus (default command)
    Build(BuildArgs),

    /// Generate shell completions for comtrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input source file or directory to scan
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output CSV file path
    #[arg(short, long, default_value = "corpus.csv")]
    output_path: PathBuf,

    /// Translation chain as a list of language codes (e.g. 'zh,en,ru')
    #[arg(short, long, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// File extension filter for directory mode (e.g. 'py')
    #[arg(short = 'e', long)]
    file_extension: Option<String>,

    /// Output schema variant
    #[arg(long, value_enum)]
    schema: Option<CliSchemaVariant>,

    /// Keep comments whose trimmed text is empty
    #[arg(long)]
    keep_empty_comments: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short = 'L', long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// comtrans - comment translation corpus builder
///
/// Scans source files, extracts embedded comments and produces
/// machine-translated versions through a chain of translation stages,
/// emitting one CSV row per comment.
#[derive(Parser, Debug)]
#[command(name = "comtrans")]
#[command(version = "0.2.0")]
#[command(about = "Comment translation corpus builder")]
#[command(long_about = "comtrans extracts comments from source files and translates them through \
a chain of machine translation stages, writing a parallel-text CSV dataset.

EXAMPLES:
    comtrans ./datasets/pythoncodes               # Scan a tree with default config
    comtrans -o corpus.csv ./pythoncodes          # Choose the output file
    comtrans -l zh,en,ru ./pythoncodes            # Chinese -> English -> Russian
    comtrans --schema flat single_file.py         # Flat schema, single-file mode
    comtrans -L debug ./pythoncodes               # Debug logging
    comtrans completions bash > comtrans.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

BACKENDS:
    Each translation stage talks to an OPUS-MT/Marian-style inference server
    (default endpoint http://localhost:8989, model derived from the language
    pair). Per-stage endpoints and models are set in the config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input source file or directory to scan
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output CSV file path
    #[arg(short, long, default_value = "corpus.csv")]
    output_path: PathBuf,

    /// Translation chain as a list of language codes (e.g. 'zh,en,ru')
    #[arg(short, long, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// File extension filter for directory mode (e.g. 'py')
    #[arg(short = 'e', long)]
    file_extension: Option<String>,

    /// Output schema variant
    #[arg(long, value_enum)]
    schema: Option<CliSchemaVariant>,

    /// Keep comments whose trimmed text is empty
    #[arg(long)]
    keep_empty_comments: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short = 'L', long, value_enum)]
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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
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

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "comtrans", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Build(args)) => run_build(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let build_args = BuildArgs {
                input_path,
                output_path: cli.output_path,
                languages: cli.languages,
                file_extension: cli.file_extension,
                schema: cli.schema,
                keep_empty_comments: cli.keep_empty_comments,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_build(build_args).await
        }
    }
}

async fn run_build(options: BuildArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(languages) = &options.languages {
        if languages.len() < 2 {
            return Err(anyhow!(
                "A translation chain needs at least two language codes, got {:?}",
                languages
            ));
        }
        config.pipeline = languages
            .windows(2)
            .map(|pair| StageConfig::new(&pair[0], &pair[1]))
            .collect();
    }

    if let Some(extension) = &options.file_extension {
        config.extraction.file_extension = extension.trim_start_matches('.').to_string();
    }

    if let Some(schema) = &options.schema {
        config.output.schema = schema.clone().into();
    }

    if options.keep_empty_comments {
        config.extraction.keep_empty_comments = true;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller and run
    let controller = Controller::with_config(config)?;
    controller
        .run(options.input_path, options.output_path)
        .await?;

    Ok(())
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
