// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::compactor::Compactor;

mod app_config;
mod compactor;
mod errors;
mod file_utils;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compact the configured JSON resource directories (default command)
    #[command(alias = "compact")]
    Pack(PackArgs),

    /// Generate shell completions for respack
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Root directory the source files are read from
    #[arg(short, long)]
    source_root: Option<PathBuf>,

    /// Root directory the compacted files are written to
    #[arg(short, long)]
    output_root: Option<PathBuf>,

    /// Directory to process, relative to both roots (repeatable, replaces the configured list)
    #[arg(short, long = "directory", value_name = "DIR")]
    directory: Vec<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Continue with the remaining files when one fails to parse
    #[arg(short, long)]
    keep_going: bool,
}

/// respack - JSON resource compaction tool
///
/// Strips insignificant whitespace from JSON data and localization files,
/// mirroring them from a source tree into a build-output tree.
#[derive(Parser, Debug)]
#[command(name = "respack")]
#[command(version = "0.1.0")]
#[command(about = "JSON resource compaction tool")]
#[command(long_about = "respack re-serializes JSON resource and localization files without \
formatting to shave bytes off their on-disk size.

EXAMPLES:
    respack                                  # Compact res/data and res/i18n from ../
    respack -s ../game -o build              # Explicit source and output roots
    respack -d res/data                      # Compact a single directory
    respack -k                               # Skip files that fail to parse
    respack --log-level debug                # Log every compacted file
    respack completions bash > respack.bash  # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, built-in defaults are used: directories res/data and res/i18n,
    source root '..', output root '.'.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root directory the source files are read from
    #[arg(short, long)]
    source_root: Option<PathBuf>,

    /// Root directory the compacted files are written to
    #[arg(short, long)]
    output_root: Option<PathBuf>,

    /// Directory to process, relative to both roots (repeatable, replaces the configured list)
    #[arg(short, long = "directory", value_name = "DIR")]
    directory: Vec<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Continue with the remaining files when one fails to parse
    #[arg(short, long)]
    keep_going: bool,
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

    // @returns: ANSI color prefix for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
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

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "respack", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Pack(args)) => run_pack(args),
        None => {
            // Default behavior - use top-level args so a bare invocation packs
            let pack_args = PackArgs {
                source_root: cli.source_root,
                output_root: cli.output_root,
                directory: cli.directory,
                config_path: cli.config_path,
                log_level: cli.log_level,
                keep_going: cli.keep_going,
            };
            run_pack(pack_args)
        }
    }
}

fn run_pack(options: PackArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load configuration, falling back to built-in defaults
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .context(format!("Failed to load config file: {}", config_path))?
    } else {
        debug!(
            "Config file not found at '{}', using built-in defaults.",
            config_path
        );
        Config::default()
    };

    // Override config with CLI options if provided
    if let Some(source_root) = &options.source_root {
        config.source_root = source_root.clone();
    }

    if let Some(output_root) = &options.output_root {
        config.output_root = output_root.clone();
    }

    if !options.directory.is_empty() {
        config.directories = options.directory.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create compactor and run the pass
    let compactor = Compactor::with_config(config)?;
    compactor.run(options.keep_going)?;

    Ok(())
}
