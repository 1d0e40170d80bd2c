use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Guidepub: publishes markdown guides into the website content tree
#[derive(Parser)]
#[command(name = "guidepub")]
#[command(version)]
#[command(about = "Publishes markdown guides into the website content tree")]
#[command(
    long_about = "Guidepub reads the guide list from resources.yml, wraps each markdown source in generated front-matter and attribution blocks, and writes the results into web/src/pages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log verbosity; falls back to the LOG_LEVEL environment variable
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render and write every guide listed in the manifest
    Publish {
        /// Project root containing resources.yml
        #[arg(long, default_value = ".")]
        project_root: PathBuf,

        /// Manifest file path, overriding <project-root>/resources.yml
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Render without writing any files
        #[arg(short, long)]
        dry_run: bool,
    },

    /// Check that every manifest entry has a source guide
    Validate {
        /// Project root containing resources.yml
        #[arg(long, default_value = ".")]
        project_root: PathBuf,

        /// Manifest file path, overriding <project-root>/resources.yml
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Exit non-zero when any source guide is missing
        #[arg(short, long)]
        strict: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Publish { .. } => "publish",
            Commands::Validate { .. } => "validate",
        }
    }

    /// Check if this command modifies files
    pub fn modifies_files(&self) -> bool {
        matches!(self, Commands::Publish { dry_run: false, .. })
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse a severity name as found in the LOG_LEVEL environment
    /// variable. Accepts the standard names in any case; WARNING and
    /// CRITICAL map onto the nearest tracing level.
    pub fn from_env_name(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ERROR" | "CRITICAL" => Some(LogLevel::Error),
            "WARN" | "WARNING" => Some(LogLevel::Warn),
            "INFO" => Some(LogLevel::Info),
            "DEBUG" => Some(LogLevel::Debug),
            "TRACE" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}
