//! # esquisse
//!
//! Command-line entry point: reads HTML from a file or stdin and prints the
//! builder declaration on stdout.

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::Level;

use esquisse::config::load_config;
use esquisse::{transpile, TranspileError, TranspileOptions};

#[derive(Parser)]
#[command(name = "esquisse")]
#[command(about = "Convert HTML into fluent tag builder source", long_about = None)]
#[command(version)]
struct Cli {
    /// HTML file to read (stdin when omitted)
    input: Option<PathBuf>,

    /// Qualify constructor and Text calls with this package name
    #[arg(long)]
    pkg: Option<String>,

    /// Emit only the single node inside <body>, without the Body wrapper
    #[arg(long)]
    children_only: bool,

    /// Name of the declared variable
    #[arg(long)]
    binding: Option<String>,

    /// Use single quotes instead of double quotes
    #[arg(long)]
    single_quote: bool,

    /// Config file path (default: ./esquisse.config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the generated expression as-is, once it validates
    #[arg(long)]
    raw: bool,

    /// Log pipeline details to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let options = resolve_options(&cli);

    match run(&cli, &options) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Config file values, overridden by flags
fn resolve_options(cli: &Cli) -> TranspileOptions {
    let mut options = load_config(cli.config.as_deref(), None).options;

    if let Some(pkg) = &cli.pkg {
        options.package = Some(pkg.clone());
    }
    if cli.children_only {
        options.children_only = true;
    }
    if let Some(binding) = &cli.binding {
        options.binding = binding.clone();
    }
    if cli.single_quote {
        options.single_quote = true;
    }

    options
}

fn run(cli: &Cli, options: &TranspileOptions) -> Result<String, TranspileError> {
    let markup = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let transpiled = transpile(&markup, options)?;
    Ok(if cli.raw {
        transpiled.candidate
    } else {
        transpiled.code
    })
}
