//! Reading inputs and writing outputs; `-` means stdin/stdout.

use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Read a required input, falling back to stdin
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stdio(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Read an optional input; absent means empty
pub fn read_optional(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_input(Some(path)),
        None => Ok(String::new()),
    }
}

/// Write to a file, or stdout when no path is given
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) if !is_stdio(path) => std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display())),
        _ => write_stream(&mut std::io::stdout().lock(), contents),
    }
}

/// Same bytes as the file path: no trailing newline is added
fn write_stream(out: &mut impl Write, contents: &str) -> Result<()> {
    out.write_all(contents.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write stdout")
}
