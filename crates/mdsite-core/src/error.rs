//! Error type for document conversion

use mdsite_html::RenderError;
use thiserror::Error;

/// Errors raised while converting a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("No `# ` heading found to use as the page title")]
    NoHeading,
}

/// Result type for document conversion
pub type Result<T> = std::result::Result<T, Error>;
