//! Names, headers and boilerplate shared by the splitter and combiner

use dom::SerializerConfig;

/// Document used by the combiner when no HTML is supplied
pub const DEFAULT_BOILERPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Combined App</title>
</head>
<body>
    <div id="app"></div>
</body>
</html>"#;

#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// First line of the extracted CSS
    pub css_header: String,
    /// First line of the extracted JS
    pub js_header: String,
    /// File name of the HTML shell when written to disk
    pub html_file_name: String,
    /// Stylesheet reference the splitter adds and the combiner strips
    pub stylesheet_href: String,
    /// Script reference the splitter adds and the combiner strips
    pub script_src: String,
    /// Attribute set to `"true"` on the script the combiner injects
    pub combined_marker: String,
    /// Used by the combiner when the HTML input is blank
    pub boilerplate: String,
    /// Written before the root element of every HTML output
    pub doctype: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            css_header: "/* Extracted Styles */".to_string(),
            js_header: "// Extracted Scripts".to_string(),
            html_file_name: "index.html".to_string(),
            stylesheet_href: "style.css".to_string(),
            script_src: "script.js".to_string(),
            combined_marker: "data-combined-js".to_string(),
            boilerplate: DEFAULT_BOILERPLATE.to_string(),
            doctype: "<!DOCTYPE html>".to_string(),
        }
    }
}

impl BundleConfig {
    pub(crate) fn serializer_config(&self) -> SerializerConfig {
        SerializerConfig {
            doctype: self.doctype.clone(),
        }
    }
}
