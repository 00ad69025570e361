//! Error types for split/combine

use dom::DomError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BundleError>;

#[derive(Debug, Error)]
pub enum BundleError {
    /// Nothing to split; shown to the user as a warning
    #[error("Please enter HTML code first.")]
    EmptyInput,

    #[error("Document error: {0}")]
    Dom(#[from] DomError),
}

impl BundleError {
    /// True for conditions the user caused and can fix by changing input
    pub fn is_user_warning(&self) -> bool {
        matches!(self, BundleError::EmptyInput)
    }
}
