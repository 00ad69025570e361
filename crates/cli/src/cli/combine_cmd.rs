//! `htmlsplit combine`: HTML, CSS and JS files in, one page out.

use super::io::{read_optional, write_output};
use anyhow::{Context, Result};
use splitter::Combiner;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

pub fn run(
    html: Option<&Path>,
    css: Option<&Path>,
    js: Option<&Path>,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let page = combine_files(html, css, js)?;
    write_output(output, &page)?;

    info!("Combine complete!");
    Ok(ExitCode::SUCCESS)
}

/// Read whichever inputs were given (missing ones are empty) and merge them
pub fn combine_files(html: Option<&Path>, css: Option<&Path>, js: Option<&Path>) -> Result<String> {
    let html = read_optional(html)?;
    let css = read_optional(css)?;
    let js = read_optional(js)?;

    Combiner::new()
        .combine(&html, &css, &js)
        .context("combine failed")
}
