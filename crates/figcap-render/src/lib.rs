//! figcap-render: page loading and layout extraction.
//!
//! Defines the capability surface of the external rendering engine
//! ([`PageRenderer`]), the extractor that turns one rendered page into a
//! [`figcap_core::HtmlPage`], and [`StaticRenderer`], a browserless backend
//! for pre-positioned HTML artifacts.
//!
//! # Architecture
//!
//! - **figcap-core**: backend-independent data types and algorithms
//! - **figcap-render** (this crate): the seam to the rendering engine and
//!   the single-page extraction pass built on it

pub mod error;
pub mod extract;
pub mod renderer;
pub mod static_render;

pub use error::{ExtractError, RenderError};
pub use extract::{PAGE_IMAGE_SELECTOR, TEXT_CONTAINER_SELECTOR, extract_page_text_content};
pub use renderer::{PageRenderer, RenderedElement};
pub use static_render::StaticRenderer;
