//! Combiner - HTML, CSS and JS texts in, one self-contained document out

use crate::config::BundleConfig;
use crate::error::Result;
use dom::{DomArena, DomError, DomService, HtmlSerializer, NodeId};
use tracing::debug;

pub struct Combiner {
    config: BundleConfig,
}

impl Combiner {
    pub fn new() -> Self {
        Self::with_config(BundleConfig::default())
    }

    pub fn with_config(config: BundleConfig) -> Self {
        Self { config }
    }

    /// Merge the three texts into one document
    ///
    /// Any input may be empty. Blank HTML is replaced by a minimal page.
    /// Every `<script>` that arrives inside the HTML is dropped: only `js`
    /// ends up executable, in a single script tagged with the marker
    /// attribute. References to `style.css` / `script.js` left over from a
    /// split are removed.
    pub fn combine(&self, html: &str, css: &str, js: &str) -> Result<String> {
        let source = if html.trim().is_empty() {
            debug!("no html supplied, using boilerplate");
            self.config.boilerplate.as_str()
        } else {
            html
        };

        let mut service = DomService::new();
        service.parse_html(source)?;
        let arena = service.arena_mut();

        let scripts = arena.find_by_tag("script");
        let dropped = detach_all(arena, scripts)?;
        debug!(dropped, "removed scripts from html input");

        let css = css.trim();
        if !css.is_empty() {
            let head = arena.head().ok_or(DomError::MissingElement("head"))?;
            let style = arena.create_element("style", &[]);
            arena.set_text_content(style, &format!("\n{css}\n"))?;
            arena.append_child(head, style)?;
        }

        let js = js.trim();
        if !js.is_empty() {
            let body = arena.body().ok_or(DomError::MissingElement("body"))?;
            let script =
                arena.create_element("script", &[(self.config.combined_marker.as_str(), "true")]);
            arena.set_text_content(script, &format!("\n{js}\n"))?;
            arena.append_child(body, script)?;
        }

        self.remove_split_references(arena)?;

        let html = HtmlSerializer::with_config(self.config.serializer_config())
            .serialize_document(arena)?;
        Ok(html)
    }

    /// Drop `<link rel="stylesheet" href="style.css">` and
    /// `<script src="script.js">` so the merged page points at no missing files
    fn remove_split_references(&self, arena: &mut DomArena) -> Result<()> {
        let href = self.config.stylesheet_href.as_str();
        let src = self.config.script_src.as_str();

        // `rel` compares ASCII case-insensitively in HTML attribute selectors
        let links = arena.find_elements(|node| {
            node.is_tag("link")
                && node
                    .attr("rel")
                    .is_some_and(|rel| rel.eq_ignore_ascii_case("stylesheet"))
                && node.attr("href") == Some(href)
        });
        let scripts =
            arena.find_elements(|node| node.is_tag("script") && node.attr("src") == Some(src));

        let links = detach_all(arena, links)?;
        let scripts = detach_all(arena, scripts)?;
        debug!(links, scripts, "removed split file references");
        Ok(())
    }
}

impl Default for Combiner {
    fn default() -> Self {
        Self::new()
    }
}

fn detach_all(arena: &mut DomArena, nodes: Vec<NodeId>) -> Result<usize> {
    for &node_id in &nodes {
        arena.detach(node_id)?;
    }
    Ok(nodes.len())
}

/// Combine with the default configuration
pub fn combine(html: &str, css: &str, js: &str) -> Result<String> {
    Combiner::new().combine(html, css, js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_into_boilerplate() {
        let output = combine("", "p{margin:0}", "console.log(1)").unwrap();

        assert!(output.starts_with("<!DOCTYPE html>\n<html lang=\"en\"><head>"));
        assert!(output.contains("<title>Combined App</title>"));
        assert!(output.contains("<div id=\"app\"></div>"));
        assert!(output.contains("<style>\np{margin:0}\n</style></head>"));
        assert!(output.contains(
            "<script data-combined-js=\"true\">\nconsole.log(1)\n</script></body></html>"
        ));
    }

    #[test]
    fn test_boilerplate_without_css_or_js() {
        let output = combine("  \n", "", "").unwrap();

        assert!(output.contains("<meta charset=\"UTF-8\">"));
        assert!(output.contains(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        ));
        assert!(output.contains("<title>Combined App</title>"));
        assert_eq!(output.matches("<div id=\"app\">").count(), 1);
        assert!(!output.contains("<style>"));
        assert!(!output.contains("<script"));
    }

    #[test]
    fn test_input_scripts_are_always_dropped() {
        let output = combine(
            "<head><script src=\"https://cdn.example.com/x.js\"></script></head>\
             <body><script>evil()</script><p>ok</p><script>more()</script></body>",
            "",
            "",
        )
        .unwrap();

        assert!(!output.contains("<script"));
        assert!(!output.contains("evil()"));
        assert!(output.contains("<p>ok</p>"));
    }

    #[test]
    fn test_only_one_marked_script() {
        let output = combine("<body><script>old()</script></body>", "", "  fresh()  ").unwrap();

        assert_eq!(output.matches("<script").count(), 1);
        assert!(output.contains("<script data-combined-js=\"true\">\nfresh()\n</script>"));
        assert!(!output.contains("old()"));
    }

    #[test]
    fn test_whitespace_css_and_js_are_ignored() {
        let output = combine("<p>x</p>", " \n ", "\t").unwrap();
        assert_eq!(
            output,
            "<!DOCTYPE html>\n<html><head></head><body><p>x</p></body></html>"
        );
    }

    #[test]
    fn test_split_references_are_removed() {
        let html = "<!DOCTYPE html>\n<html><head><link rel=\"stylesheet\" href=\"style.css\">\
                    <link rel=\"stylesheet\" href=\"theme.css\"><link rel=\"icon\" href=\"style.css\">\
                    </head><body><script src=\"script.js\"></script></body></html>";
        let output = combine(html, "a{}", "").unwrap();

        assert!(!output.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
        assert!(output.contains("<link rel=\"stylesheet\" href=\"theme.css\">"));
        assert!(output.contains("<link rel=\"icon\" href=\"style.css\">"));
        assert!(!output.contains("script.js"));
    }

    #[test]
    fn test_stylesheet_rel_matches_case_insensitively() {
        let output = combine(
            "<head><link rel=\"StyleSheet\" href=\"style.css\"></head>",
            "",
            "",
        )
        .unwrap();
        assert!(!output.contains("<link"));
    }

    #[test]
    fn test_reference_match_is_exact() {
        let output = combine(
            "<head><link rel=\"stylesheet\" href=\"./style.css\"></head>",
            "",
            "",
        )
        .unwrap();
        assert!(output.contains("href=\"./style.css\""));
    }

    #[test]
    fn test_injected_text_is_raw() {
        let output = combine("<p>x</p>", "a > b { content: \"&\"; }", "if (a < b && c) {}").unwrap();

        assert!(output.contains("<style>\na > b { content: \"&\"; }\n</style>"));
        assert!(output.contains("\nif (a < b && c) {}\n</script>"));
    }

    #[test]
    fn test_custom_marker_attribute() {
        let combiner = Combiner::with_config(BundleConfig {
            combined_marker: "data-inline".to_string(),
            ..Default::default()
        });
        let output = combiner.combine("<p>x</p>", "", "go()").unwrap();
        assert!(output.contains("<script data-inline=\"true\">\ngo()\n</script>"));
    }
}
