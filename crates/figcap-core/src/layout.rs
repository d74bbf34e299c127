//! Page layout model: text regions anchored to a rendered page image.

/// A detected text fragment on a rendered page.
///
/// Coordinates are integer pixels in the page image's space: `(x0, y0)` is
/// the top-left corner of the fragment's bounding box, `(x1, y1)` the
/// bottom-right, with `x0 <= x1` and `y0 <= y1`. `text` is never empty;
/// empty fragments are dropped during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextLine {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    /// The fragment's visible text content.
    pub text: String,
}

impl TextLine {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32, text: impl Into<String>) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            text: text.into(),
        }
    }

    /// Width of the fragment's bounding box.
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    /// Height of the fragment's bounding box.
    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

/// The reconstructed layout of one rendered page.
///
/// `width` and `height` are the pixel dimensions of the page's reference
/// image, which anchors every coordinate. `text_lines` keeps the order the
/// fragments were discovered in the document; it is not sorted by position.
/// Fragment boxes normally lie within `[0, width] x [0, height]` but are not
/// clipped to it; downstream consumers must tolerate out-of-range boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HtmlPage {
    pub width: u32,
    pub height: u32,
    pub text_lines: Vec<TextLine>,
}
