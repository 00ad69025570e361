//! `htmlsplit split`: one page in, three files out.

use super::io::{read_input, write_output};
use anyhow::{Context, Result};
use splitter::{ArtifactBundle, BundleConfig, BundleError, Splitter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

/// Blank input is a warning with a failing exit status, not an error
pub fn run(input: Option<&Path>, out_dir: &Path, json: bool) -> Result<ExitCode> {
    match execute(input, out_dir, json) {
        Ok(()) => {
            info!("Split complete!");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.downcast_ref::<BundleError>() {
            Some(bundle_err) if bundle_err.is_user_warning() => {
                warn!("{bundle_err}");
                Ok(ExitCode::FAILURE)
            }
            _ => Err(err),
        },
    }
}

fn execute(input: Option<&Path>, out_dir: &Path, json: bool) -> Result<()> {
    let html = read_input(input)?;
    let config = BundleConfig::default();
    let bundle = Splitter::with_config(config.clone()).split(&html)?;

    if json {
        let rendered = serde_json::to_string_pretty(&bundle)?;
        return write_output(None, &rendered);
    }

    for path in write_bundle(&bundle, out_dir, &config)? {
        info!("wrote {}", path.display());
    }
    Ok(())
}

/// Write the three artifacts into `out_dir`, creating it if needed
pub fn write_bundle(
    bundle: &ArtifactBundle,
    out_dir: &Path,
    config: &BundleConfig,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(3);
    for (name, contents) in bundle.file_entries(config) {
        let path = out_dir.join(name);
        write_output(Some(&path), contents)?;
        written.push(path);
    }
    Ok(written)
}
