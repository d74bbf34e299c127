use std::path::Path;

use figcap_render::{StaticRenderer, extract_page_text_content};

use crate::cli::OutputFormat;

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let mut renderer = StaticRenderer::new();
    let page = match extract_page_text_content(&mut renderer, file) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("error: {err}");
            return Err(1);
        }
    };

    match format {
        OutputFormat::Text => {
            println!("page\t{}x{}", page.width, page.height);
            println!("x0\ty0\tx1\ty1\ttext");
            for line in &page.text_lines {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    line.x0, line.y0, line.x1, line.y1, line.text
                );
            }
            Ok(())
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&page) {
            Ok(json) => {
                println!("{json}");
                Ok(())
            }
            Err(err) => {
                eprintln!("error: failed to serialize layout: {err}");
                Err(1)
            }
        },
    }
}
