//! Owned HTML document trees
//!
//! Parse markup into an arena, query and rewrite it, serialize it back.
//!
//! ## Core Design
//!
//! ```text
//! HTML text → html5ever (via scraper) → DomArena (owned) → mutate → HtmlSerializer → HTML text
//!                                           ↓
//!                                    NodeId (u32)
//! ```
//!
//! One arena per document, one owner per arena. Nothing is shared between
//! documents, so there is nothing to lock.

pub mod arena;
pub mod error;
pub mod serializer;
pub mod service;
pub mod types;
pub mod utils;

pub use arena::DomArena;
pub use error::{DomError, Result};
pub use serializer::{HtmlSerializer, SerializerConfig};
pub use service::{DomService, DomServiceConfig};
pub use types::*;
