//! End-to-end extraction against the static backend.
//!
//! Writes xpdf-style page artifacts to disk and runs the full pipeline:
//! load, anchor to the page image, sweep the text containers.

use std::io::Write;
use std::path::Path;

use figcap_core::TextLine;
use figcap_render::{ExtractError, StaticRenderer, extract_page_text_content};
use tempfile::NamedTempFile;

fn page_file(html: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(html.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn extracts_layout_from_artifact() {
    let file = page_file(
        r#"<html><body>
<img src="page-1.png" width="800" height="1000">
<div style="position:absolute;top:50px;left:10px;width:40px;height:10px"></div>
<div style="position:absolute;top:20px;left:10px;width:100px;height:15px">Figure 1</div>
</body></html>"#,
    );

    let mut renderer = StaticRenderer::new();
    let page = extract_page_text_content(&mut renderer, file.path()).unwrap();

    assert_eq!(page.width, 800);
    assert_eq!(page.height, 1000);
    assert_eq!(page.text_lines, vec![TextLine::new(10, 20, 110, 35, "Figure 1")]);
}

#[test]
fn artifact_without_page_image_fails() {
    let file = page_file(
        r#"<html><body>
<div style="top:20px;left:10px;width:100px;height:15px">stray caption</div>
</body></html>"#,
    );

    let mut renderer = StaticRenderer::new();
    let err = extract_page_text_content(&mut renderer, file.path()).unwrap_err();
    assert!(matches!(err, ExtractError::MissingPageImage { .. }));
}

#[test]
fn unreadable_artifact_fails_as_load_error() {
    let mut renderer = StaticRenderer::new();
    let err =
        extract_page_text_content(&mut renderer, Path::new("/nonexistent/page-1.html")).unwrap_err();
    assert!(matches!(err, ExtractError::RenderLoad { .. }));
}

#[test]
fn renderer_is_reusable_across_pages() {
    let first = page_file(
        r#"<html><body><img src="a.png" width="640" height="480">
<div style="top:1px;left:1px;width:10px;height:5px">one</div></body></html>"#,
    );
    let second = page_file(
        r#"<html><body><img src="b.png" width="320" height="240">
<div style="top:2px;left:2px;width:12px;height:6px">two</div></body></html>"#,
    );

    let mut renderer = StaticRenderer::new();
    let page1 = extract_page_text_content(&mut renderer, first.path()).unwrap();
    let page2 = extract_page_text_content(&mut renderer, second.path()).unwrap();

    assert_eq!((page1.width, page1.height), (640, 480));
    assert_eq!((page2.width, page2.height), (320, 240));
    assert_eq!(page2.text_lines, vec![TextLine::new(2, 2, 14, 8, "two")]);
}
