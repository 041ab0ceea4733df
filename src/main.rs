use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codespan_reporting::term::termcolor::ColorChoice;
use colored::Colorize;
use std::path::PathBuf;

use monkeylex::{CheckState, Scanner, ScannerConfig, Token};

#[derive(Parser)]
#[command(name = "monkeylex")]
#[command(author, version, about = "The Monkey language lexer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Columns between tab stops
    #[arg(long, global = true, default_value = "4", value_parser = clap::value_parser!(u16).range(1..))]
    tab_width: u16,

    /// Extra codepoints that end words (e.g. "[]:")
    #[arg(long, global = true, default_value = "")]
    reserve: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One token per line
    #[value(name = "text")]
    Text,
    /// JSON array of tokens
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the token stream of a source file
    Tokens {
        /// The source file to scan
        input: PathBuf,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Report unrecognized codepoints in a source file
    Check {
        /// The source file to check
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set log level based on verbose flag; RUST_LOG still wins
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(cli.verbose)),
    )
    .init();

    let config = ScannerConfig::new()
        .with_tab_width(usize::from(cli.tab_width))
        .reserve(cli.reserve.chars());

    let result = match cli.command {
        Commands::Tokens { input, format } => tokens(input, format, config),
        Commands::Check { input } => check(input, config),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn tokens(input: PathBuf, format: OutputFormat, config: ScannerConfig) -> Result<()> {
    log::info!("Scanning {:?}", input);

    let scanner = Scanner::open_with_config(&input, config)
        .with_context(|| format!("Failed to open source file: {:?}", input))?;
    let tokens = scanner
        .collect::<Result<Vec<Token>, _>>()
        .with_context(|| format!("Failed to scan {:?}", input))?;

    match format {
        OutputFormat::Text => {
            println!("{}", "=== Tokens ===".blue().bold());
            for (i, token) in tokens.iter().enumerate() {
                println!("{:4}: {}", i, token);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
    }

    Ok(())
}

fn check(input: PathBuf, config: ScannerConfig) -> Result<()> {
    log::info!("Checking {:?}", input);

    let mut state = CheckState::new(&input)?;
    let tokens = state.scan(config)?;
    log::debug!("Scanned {} tokens", tokens.len());

    if state.has_errors() {
        state.report_diagnostics(ColorChoice::Auto)?;
        anyhow::bail!(
            "Lexical analysis failed: {} unrecognized codepoint(s)",
            state.error_count()
        );
    }

    println!("{}: No errors found", "success".green().bold());
    Ok(())
}
