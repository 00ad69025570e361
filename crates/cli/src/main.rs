use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(
    name = "htmlsplit",
    about = "Split an HTML page into HTML, CSS and JS files, or combine them back",
    version
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Move inline <style> and <script> blocks into style.css and script.js
    Split {
        /// HTML file to split ("-" or omitted reads stdin)
        input: Option<PathBuf>,
        /// Directory that receives index.html, style.css and script.js
        #[arg(long, short, default_value = ".")]
        out_dir: PathBuf,
        /// Print the three artifacts as JSON on stdout instead of writing files
        #[arg(long)]
        json: bool,
    },
    /// Merge HTML, CSS and JS into one self-contained page
    Combine {
        /// HTML shell (a minimal page is used when omitted or blank)
        #[arg(long)]
        html: Option<PathBuf>,
        /// Stylesheet to inline
        #[arg(long)]
        css: Option<PathBuf>,
        /// Script to inline
        #[arg(long)]
        js: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Split {
            input,
            out_dir,
            json,
        } => cli::split_cmd::run(input.as_deref(), &out_dir, json),
        Commands::Combine {
            html,
            css,
            js,
            output,
        } => cli::combine_cmd::run(
            html.as_deref(),
            css.as_deref(),
            js.as_deref(),
            output.as_deref(),
        ),
    }
}

/// Logs go to stderr so stdout carries only generated output
fn init_tracing(verbose: bool, quiet: bool) {
    let default_directive = if verbose {
        "htmlsplit=debug,splitter=debug,dom=debug"
    } else if quiet {
        "warn"
    } else {
        "htmlsplit=info,splitter=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
