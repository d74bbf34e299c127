//! Browserless rendering backend for pre-positioned HTML artifacts.
//!
//! PDF-to-HTML converters in the xpdf family emit each page as a single
//! page image plus absolutely positioned text containers whose geometry is
//! already spelled out in attributes and inline styles. For those artifacts
//! no layout engine is needed: [`StaticRenderer`] parses the document with
//! [`scraper`] and reads the geometry straight from the markup.
//!
//! Containers that carry no explicit size get a coarse estimate from their
//! font size (height = one font size, width = glyph count at an average
//! advance). A real browser engine reports exact boxes; slot one in behind
//! [`PageRenderer`](crate::renderer::PageRenderer) when that matters.

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html, Selector};

use crate::error::RenderError;
use crate::renderer::{PageRenderer, RenderedElement};

/// Average glyph advance relative to font size, used when a text container
/// has no explicit width.
const GLYPH_ADVANCE_EM: f64 = 0.55;

/// Renderer that reads element geometry statically from the markup.
#[derive(Debug, Default)]
pub struct StaticRenderer {
    document: Option<Html>,
}

impl StaticRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageRenderer for StaticRenderer {
    fn load(&mut self, page: &Path) -> Result<(), RenderError> {
        let source = fs::read_to_string(page).map_err(|err| RenderError::Load {
            path: page.to_path_buf(),
            reason: err.to_string(),
        })?;
        self.document = Some(Html::parse_document(&source));
        Ok(())
    }

    fn find_single(&self, selector: &str) -> Result<Option<RenderedElement>, RenderError> {
        let document = self.document.as_ref().ok_or(RenderError::NotLoaded)?;
        let selector = parse_selector(selector)?;
        Ok(document.select(&selector).next().map(measure))
    }

    fn find_all(&self, selector: &str) -> Result<Vec<RenderedElement>, RenderError> {
        let document = self.document.as_ref().ok_or(RenderError::NotLoaded)?;
        let selector = parse_selector(selector)?;
        Ok(document.select(&selector).map(measure).collect())
    }
}

fn parse_selector(selector: &str) -> Result<Selector, RenderError> {
    Selector::parse(selector).map_err(|_| RenderError::Selector {
        selector: selector.to_string(),
    })
}

/// Read an element's geometry from its attributes and inline style.
fn measure(element: ElementRef<'_>) -> RenderedElement {
    let text = collect_text(element);

    let x = style_or_attr(element, "left").unwrap_or(0.0);
    let y = style_or_attr(element, "top").unwrap_or(0.0);

    let font_size = style_or_attr(element, "font-size").unwrap_or(0.0);
    let width = style_or_attr(element, "width")
        .unwrap_or_else(|| font_size * GLYPH_ADVANCE_EM * text.chars().count() as f64);
    let height = style_or_attr(element, "height").unwrap_or(font_size);

    RenderedElement {
        x: x.round() as i32,
        y: y.round() as i32,
        width: width.round().max(0.0) as u32,
        height: height.round().max(0.0) as u32,
        text,
    }
}

/// Concatenated descendant text, whitespace-normalized and trimmed. This is
/// the trimming the extractor's empty-text check sees.
fn collect_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for chunk in element.text() {
        for word in chunk.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}

/// Look up a pixel quantity first in the inline `style`, then as a bare
/// attribute (`<img width="800">`).
fn style_or_attr(element: ElementRef<'_>, property: &str) -> Option<f64> {
    if let Some(style) = element.value().attr("style") {
        if let Some(value) = style_property(style, property) {
            return parse_px(value);
        }
    }
    element.value().attr(property).and_then(parse_px)
}

/// Extract `property` from an inline CSS declaration list.
fn style_property<'a>(style: &'a str, property: &str) -> Option<&'a str> {
    for declaration in style.split(';') {
        if let Some((name, value)) = declaration.split_once(':') {
            if name.trim().eq_ignore_ascii_case(property) {
                return Some(value.trim());
            }
        }
    }
    None
}

/// Parse `"800"`, `"800px"`, or `"12.5px"` as pixels.
fn parse_px(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse::<f64>().ok()
}
