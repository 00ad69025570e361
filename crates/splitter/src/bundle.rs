//! The three-file result of a split

use crate::config::BundleConfig;
use serde::{Deserialize, Serialize};

/// HTML shell, stylesheet and script produced by one split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl ArtifactBundle {
    /// `(file name, contents)` for each artifact, HTML first
    ///
    /// The CSS and JS names are the ones the HTML shell references.
    pub fn file_entries<'a>(&'a self, config: &'a BundleConfig) -> [(&'a str, &'a str); 3] {
        [
            (config.html_file_name.as_str(), self.html.as_str()),
            (config.stylesheet_href.as_str(), self.css.as_str()),
            (config.script_src.as_str(), self.js.as_str()),
        ]
    }
}
