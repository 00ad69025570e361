//! Split a combined HTML page into `index.html` + `style.css` + `script.js`,
//! and merge such a triple back into one page.
//!
//! ```text
//! split:    HTML ──parse──► DomArena ──extract <style>/<script>──► (HTML, CSS, JS)
//! combine:  (HTML, CSS, JS) ──parse HTML──► DomArena ──inject──► HTML
//! ```
//!
//! Both operations are pure functions of their text inputs. Each call
//! parses into its own arena and drops it on return.

pub mod bundle;
pub mod combine;
pub mod config;
pub mod error;
pub mod split;

pub use bundle::ArtifactBundle;
pub use combine::{combine, Combiner};
pub use config::{BundleConfig, DEFAULT_BOILERPLATE};
pub use error::{BundleError, Result};
pub use split::{split, Splitter};

#[cfg(test)]
mod properties;
