//! Single-page layout extraction.
//!
//! One stateless pass per page: load, anchor to the reference image, sweep
//! the text containers. No state survives between calls.

use std::path::Path;

use figcap_core::{HtmlPage, TextLine};

use crate::error::ExtractError;
use crate::renderer::PageRenderer;

/// Selector for the page's reference image (the rasterized page bitmap).
pub const PAGE_IMAGE_SELECTOR: &str = "body > img";

/// Selector for the page's text containers.
pub const TEXT_CONTAINER_SELECTOR: &str = "body > div";

/// Reconstruct the layout of one rendered page.
///
/// Loads `page` into the renderer, reads the pixel dimensions of the single
/// reference image element, and collects every text container with
/// non-empty text as a [`TextLine`] (`x1 = x + width`, `y1 = y + height`),
/// in document order. Containers whose text is empty after the rendering
/// layer's trimming are skipped. Boxes are taken as reported; a box
/// extending past the image bounds is kept as-is.
///
/// # Errors
///
/// [`ExtractError::RenderLoad`] if the renderer cannot load the page, and
/// [`ExtractError::MissingPageImage`] if the page has no reference image:
/// without it the layout cannot be anchored, and no partial page is
/// produced.
pub fn extract_page_text_content<R: PageRenderer>(
    renderer: &mut R,
    page: &Path,
) -> Result<HtmlPage, ExtractError> {
    renderer.load(page).map_err(|source| ExtractError::RenderLoad {
        path: page.to_path_buf(),
        source,
    })?;

    let image = renderer
        .find_single(PAGE_IMAGE_SELECTOR)?
        .ok_or_else(|| ExtractError::MissingPageImage {
            path: page.to_path_buf(),
        })?;

    let mut text_lines = Vec::new();
    for elem in renderer.find_all(TEXT_CONTAINER_SELECTOR)? {
        if elem.text.is_empty() {
            continue;
        }
        text_lines.push(TextLine {
            x0: elem.x,
            y0: elem.y,
            x1: elem.x + elem.width as i32,
            y1: elem.y + elem.height as i32,
            text: elem.text,
        });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        page = %page.display(),
        width = image.width,
        height = image.height,
        text_lines = text_lines.len(),
        "extracted page layout"
    );

    Ok(HtmlPage {
        width: image.width,
        height: image.height,
        text_lines,
    })
}
