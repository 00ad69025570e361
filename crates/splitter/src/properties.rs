//! Randomized checks over generated documents

use crate::{combine, split};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Block {
    Style(String),
    Inline(String),
    External(String),
    Icon(String),
}

impl Block {
    fn render(&self) -> String {
        match self {
            Block::Style(css) => format!("<style>{css}</style>"),
            Block::Inline(js) => format!("<script>{js}</script>"),
            Block::External(src) => format!("<script src=\"{src}\"></script>"),
            Block::Icon(id) => format!(
                "<svg xmlns:xlink=\"http://www.w3.org/1999/xlink\"><use xlink:href=\"#{id}\"></use></svg>"
            ),
        }
    }
}

fn block() -> impl Strategy<Value = Block> {
    prop_oneof![
        "[a-z0-9{}:;() \n]{0,20}".prop_map(Block::Style),
        "[a-z0-9{}:;() \n]{0,20}".prop_map(Block::Inline),
        "lib/[a-z]{1,8}\\.js".prop_map(Block::External),
        "[a-z]{1,8}".prop_map(Block::Icon),
    ]
}

#[derive(Debug, Clone)]
struct Page {
    head: Vec<Block>,
    body: Vec<Block>,
    paragraphs: Vec<String>,
}

impl Page {
    fn render(&self) -> String {
        let head: String = self.head.iter().map(Block::render).collect();
        let mut body = String::new();
        for (i, block) in self.body.iter().enumerate() {
            if let Some(text) = self.paragraphs.get(i) {
                body.push_str(&format!("<p>{text}</p>"));
            }
            body.push_str(&block.render());
        }
        format!("<html><head>{head}</head><body><main>page</main>{body}</body></html>")
    }

    fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.head.iter().chain(self.body.iter())
    }

    fn styles(&self) -> Vec<&str> {
        self.blocks()
            .filter_map(|b| match b {
                Block::Style(css) => Some(css.as_str()),
                _ => None,
            })
            .collect()
    }

    fn inline_scripts(&self) -> Vec<&str> {
        self.blocks()
            .filter_map(|b| match b {
                Block::Inline(js) => Some(js.as_str()),
                _ => None,
            })
            .collect()
    }

    fn external_scripts(&self) -> Vec<&str> {
        self.blocks()
            .filter_map(|b| match b {
                Block::External(src) => Some(src.as_str()),
                _ => None,
            })
            .collect()
    }
}

fn page() -> impl Strategy<Value = Page> {
    (
        prop::collection::vec(block(), 0..5),
        prop::collection::vec(block(), 0..5),
        prop::collection::vec("[a-z ]{1,10}", 0..5),
    )
        .prop_map(|(head, body, paragraphs)| Page {
            head,
            body,
            paragraphs,
        })
}

/// Header, then each trimmed fragment followed by a blank line, trimmed
fn expected_output(header: &str, fragments: &[&str]) -> String {
    let mut out = format!("{header}\n\n");
    for fragment in fragments {
        out.push_str(fragment.trim());
        out.push_str("\n\n");
    }
    out.trim().to_string()
}

proptest! {
    #[test]
    fn split_extracts_every_block_in_order(page in page()) {
        let bundle = split(&page.render()).unwrap();

        prop_assert_eq!(bundle.css, expected_output("/* Extracted Styles */", &page.styles()));
        prop_assert_eq!(bundle.js, expected_output("// Extracted Scripts", &page.inline_scripts()));
    }

    #[test]
    fn split_html_references_exactly_once(page in page()) {
        let bundle = split(&page.render()).unwrap();
        let externals = page.external_scripts();

        prop_assert!(bundle.html.starts_with("<!DOCTYPE html>\n"));
        prop_assert!(!bundle.html.contains("<style"));
        prop_assert_eq!(bundle.html.matches("<link rel=\"stylesheet\" href=\"style.css\">").count(), 1);
        prop_assert_eq!(bundle.html.matches("<script src=\"script.js\"></script>").count(), 1);
        prop_assert_eq!(bundle.html.matches("<script").count(), externals.len() + 1);
        for src in externals {
            let tag = format!("<script src=\"{src}\"></script>");
            prop_assert!(bundle.html.contains(&tag));
        }
    }

    #[test]
    fn combine_keeps_only_supplied_js(
        page in page(),
        css in "[ a-z;{}\n]{0,12}",
        js in "[ a-z;()\n]{0,12}"
    ) {
        let output = combine(&page.render(), &css, &js).unwrap();
        let injected_js = !js.trim().is_empty();
        let injected_css = !css.trim().is_empty();

        prop_assert!(output.starts_with("<!DOCTYPE html>\n"));
        prop_assert_eq!(output.matches("<script").count(), usize::from(injected_js));
        prop_assert_eq!(
            output.matches("<script data-combined-js=\"true\">").count(),
            usize::from(injected_js)
        );
        prop_assert_eq!(
            output.matches("<style>").count(),
            page.styles().len() + usize::from(injected_css)
        );
    }

    #[test]
    fn combine_after_split_reinlines_everything(page in page()) {
        let bundle = split(&page.render()).unwrap();
        let output = combine(&bundle.html, &bundle.css, &bundle.js).unwrap();

        prop_assert!(!output.contains("style.css"));
        prop_assert!(!output.contains("script.js"));
        prop_assert_eq!(output.matches("<style>").count(), 1);
        prop_assert_eq!(output.matches("<script").count(), 1);
        prop_assert!(output.contains("<main>page</main>"));
        for css in page.styles() {
            prop_assert!(output.contains(css.trim()));
        }
        for js in page.inline_scripts() {
            prop_assert!(output.contains(js.trim()));
        }
        for icon in page.blocks().filter(|b| matches!(b, Block::Icon(_))) {
            prop_assert!(output.contains(&icon.render()));
        }
    }
}

#[test]
fn combine_with_empty_html_always_has_container() {
    for (css, js) in [("", ""), ("a{}", ""), ("", "go()"), ("a{}", "go()")] {
        let output = combine("", css, js).unwrap();
        assert_eq!(output.matches("<title>").count(), 1);
        assert_eq!(output.matches("<div id=\"app\"></div>").count(), 1);
    }
}

#[test]
fn combine_after_split_keeps_inline_svg() {
    let sprite = "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
                  viewBox=\"0 0 16 16\"><clipPath id=\"clip\"><rect width=\"16\" height=\"16\"></rect></clipPath>\
                  <use xlink:href=\"#icon\" clip-path=\"url(#clip)\"></use>\
                  <foreignObject><p xml:lang=\"fr\">salut</p></foreignObject></svg>";
    let page = format!(
        "<html><head><style>svg{{width:1em}}</style></head><body>{sprite}<script>draw()</script></body></html>"
    );

    let bundle = split(&page).unwrap();
    assert!(bundle.html.contains(sprite));

    let output = combine(&bundle.html, &bundle.css, &bundle.js).unwrap();
    assert!(output.contains(sprite));
    assert!(!output.contains(" xlink=\""));
    assert!(!output.contains("<use href="));
}
