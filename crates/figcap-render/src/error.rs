//! Error types for page rendering and layout extraction.
//!
//! Uses [`thiserror`] for ergonomic error derivation. [`RenderError`] covers
//! failures inside a rendering backend; [`ExtractError`] distinguishes a
//! page that could not be loaded from a page that has no reference image to
//! anchor coordinates to.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for rendering backend operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page artifact could not be loaded into the renderer.
    #[error("failed to load page {}: {reason}", path.display())]
    Load {
        /// Path of the page artifact.
        path: PathBuf,
        /// Backend-specific description of the failure.
        reason: String,
    },

    /// The element selector could not be parsed.
    #[error("invalid selector {selector:?}")]
    Selector { selector: String },

    /// An element query was issued before a page was loaded.
    #[error("no page loaded")]
    NotLoaded,
}

/// Error type for page layout extraction.
///
/// A failed extraction never yields a partial or zero-valued page: either
/// the page loads and anchors to its reference image, or one of these
/// surfaces to the caller so downstream aggregation can skip or flag it.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The rendering backend could not load the page artifact.
    #[error("failed to render page {}: {source}", path.display())]
    RenderLoad {
        /// Path of the page artifact.
        path: PathBuf,
        /// The backend failure.
        #[source]
        source: RenderError,
    },

    /// The page has no reference image element, so its layout cannot be
    /// geometrically anchored.
    #[error("no page image element in {}", path.display())]
    MissingPageImage { path: PathBuf },

    /// A backend failure outside the load call.
    #[error(transparent)]
    Renderer(#[from] RenderError),
}
