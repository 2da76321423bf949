mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pbidoc")]
#[command(about = "Generate documentation from Power BI report archives")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Generate a documentation file from a report archive")]
    Generate {
        #[arg(help = "Path to the report archive (.pbix)")]
        archive: String,
        #[arg(long, short, help = "Output path (default: archive stem + .md/.json)")]
        output: Option<String>,
        #[arg(long, short, value_enum, default_value = "markdown", help = "Output format")]
        format: OutputFormat,
        #[arg(long, short, help = "Verbose mode: show extraction diagnostics")]
        verbose: bool,
    },
    #[command(about = "Show information about a report archive")]
    Info {
        #[arg(help = "Path to the report archive")]
        archive: String,
        #[arg(long, short, help = "Verbose mode: show extraction diagnostics")]
        verbose: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbose = match &cli.command {
        Commands::Generate { verbose, .. } | Commands::Info { verbose, .. } => *verbose,
    };
    init_tracing(verbose);

    let result = match cli.command {
        Commands::Generate {
            archive,
            output,
            format,
            verbose: _,
        } => commands::generate::run(&archive, output.as_deref(), format),
        Commands::Info {
            archive,
            verbose: _,
        } => commands::info::run(&archive),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "pbidoc=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
