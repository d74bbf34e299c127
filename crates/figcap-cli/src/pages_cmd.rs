use std::fs;
use std::path::Path;

use figcap_core::natural_sort;

use crate::cli::OutputFormat;

pub fn run(dir: &Path, format: &OutputFormat) -> Result<(), i32> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("error: cannot read {}: {err}", dir.display());
            return Err(1);
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("error: cannot read {}: {err}", dir.display());
                return Err(1);
            }
        };
        let path = entry.path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
        {
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.push(name.to_string());
            }
        }
    }

    let ordered = natural_sort(&names);

    match format {
        OutputFormat::Text => {
            for name in &ordered {
                println!("{name}");
            }
            Ok(())
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&ordered) {
            Ok(json) => {
                println!("{json}");
                Ok(())
            }
            Err(err) => {
                eprintln!("error: failed to serialize listing: {err}");
                Err(1)
            }
        },
    }
}
