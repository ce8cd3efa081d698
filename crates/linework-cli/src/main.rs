//! Linework CLI - Command-line interface for the LINE artifact pipeline.

use clap::Parser;
use linework_cli::commands;
use linework_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so document chunks on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> linework_cli::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(std::path::Path::new(path))?,
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Create(args) => commands::execute_create(args, &formatter),
        Command::Update(args) => commands::execute_update(args, &formatter),
        Command::Validate(args) => commands::execute_validate(args, &formatter),
        Command::Extract(args) => commands::execute_extract(args, &formatter),
        Command::Setup(args) => commands::execute_setup(args, &formatter),
    }
}
