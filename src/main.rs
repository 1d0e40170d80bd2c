//! Guidepub - build-time guide publisher for the website content tree

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use guidepub::cli::commands::{
    publish::PublishCommand, validate::ValidateCommand, CommandHandler,
};
use guidepub::cli::{Cli, Commands, LogLevel};

/// Initialize tracing from the --log-level flag, falling back to the
/// LOG_LEVEL environment variable, then to info.
fn initialize_tracing(flag: Option<LogLevel>) {
    let level = flag
        .or_else(|| {
            std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|value| LogLevel::from_env_name(&value))
        })
        .unwrap_or(LogLevel::Info);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.to_filter_directive()))
        .with_target(false)
        .with_writer(std::io::stderr) // diagnostics to stderr, reports to stdout
        .init();
}

fn main() {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level);

    let command: Box<dyn CommandHandler> = match cli.command {
        Commands::Publish {
            project_root,
            manifest,
            dry_run,
        } => Box::new(PublishCommand::new(project_root, manifest, dry_run)),
        Commands::Validate {
            project_root,
            manifest,
            strict,
            json,
        } => Box::new(ValidateCommand::new(project_root, manifest, strict, json)),
    };

    debug!("Running {} command", command.name());

    if let Err(e) = command.execute() {
        error!("{}", e);
        std::process::exit(1);
    }
}
