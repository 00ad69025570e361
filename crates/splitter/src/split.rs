//! Splitter - one combined document in, HTML/CSS/JS out
//!
//! Styles and scripts are collected per tag, each in document order. A page
//! that interleaves `<style>` and `<script>` therefore gets its CSS and JS
//! ordered independently; there is no global ordering between the two.

use crate::bundle::ArtifactBundle;
use crate::config::BundleConfig;
use crate::error::{BundleError, Result};
use dom::{DomArena, DomError, DomService, HtmlSerializer};
use tracing::debug;

pub struct Splitter {
    config: BundleConfig,
}

impl Splitter {
    pub fn new() -> Self {
        Self::with_config(BundleConfig::default())
    }

    pub fn with_config(config: BundleConfig) -> Self {
        Self { config }
    }

    /// Extract every `<style>` and inline `<script>` into separate texts
    ///
    /// Scripts with a `src` attribute (CDN and other external files) stay
    /// where they are. The returned HTML links `style.css` from `<head>` and
    /// loads `script.js` at the end of `<body>`.
    pub fn split(&self, html: &str) -> Result<ArtifactBundle> {
        if html.trim().is_empty() {
            debug!("split requested with empty input");
            return Err(BundleError::EmptyInput);
        }

        let mut service = DomService::new();
        service.parse_html(html)?;
        let arena = service.arena_mut();

        let css = self.extract_styles(arena)?;
        let js = self.extract_inline_scripts(arena)?;

        let head = arena.head().ok_or(DomError::MissingElement("head"))?;
        let link = arena.create_element(
            "link",
            &[("rel", "stylesheet"), ("href", self.config.stylesheet_href.as_str())],
        );
        arena.append_child(head, link)?;

        let body = arena.body().ok_or(DomError::MissingElement("body"))?;
        let script = arena.create_element("script", &[("src", self.config.script_src.as_str())]);
        arena.append_child(body, script)?;

        let html = HtmlSerializer::with_config(self.config.serializer_config())
            .serialize_document(arena)?;

        Ok(ArtifactBundle { html, css, js })
    }

    fn extract_styles(&self, arena: &mut DomArena) -> Result<String> {
        let styles = arena.find_by_tag("style");
        let mut css = String::new();
        for &style_id in &styles {
            css.push_str(arena.text_content(style_id)?.trim());
            css.push_str("\n\n");
            arena.detach(style_id)?;
        }

        debug!(count = styles.len(), "extracted style blocks");
        Ok(with_header(&self.config.css_header, &css))
    }

    fn extract_inline_scripts(&self, arena: &mut DomArena) -> Result<String> {
        let mut js = String::new();
        let mut inline = 0usize;
        let mut external = 0usize;
        for script_id in arena.find_by_tag("script") {
            if arena.get(script_id)?.has_attr("src") {
                external += 1;
                continue;
            }
            js.push_str(arena.text_content(script_id)?.trim());
            js.push_str("\n\n");
            arena.detach(script_id)?;
            inline += 1;
        }

        debug!(inline, external, "extracted script blocks");
        Ok(with_header(&self.config.js_header, &js))
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Header line, blank line, fragments; trimmed at both ends
fn with_header(header: &str, body: &str) -> String {
    format!("{header}\n\n{body}").trim().to_string()
}

/// Split with the default configuration
pub fn split(html: &str) -> Result<ArtifactBundle> {
    Splitter::new().split(html)
}
