use dabs_core::error::DabsError;
use dabs_core::extraction::mudraw::MudrawRenderer;
use dabs_core::layout::BulletinLayout;
use dabs_core::{extract_pdf, ExtractOptions, MalformedPolicy};
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    skip_malformed: bool,
    layout: Option<&str>,
) -> Result<(), DabsError> {
    let layout = match layout {
        Some(name) => {
            BulletinLayout::by_name(name).ok_or_else(|| DabsError::UnknownLayout(name.into()))?
        }
        None => BulletinLayout::default(),
    };
    let options = ExtractOptions {
        layout,
        malformed: if skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Fail
        },
    };

    let pdf_bytes = std::fs::read(&pdf_file)?;
    let renderer = MudrawRenderer::new();
    let extraction = extract_pdf(&pdf_bytes, &renderer, &options)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&extraction)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} notice(s), written to {}",
                extraction.table.len(),
                path.display()
            );
            for s in &extraction.skipped {
                eprintln!("  skipped record {}: {}", s.index, s.reason);
            }
        }
        None => {
            match output_format {
                "json" => output::json::print(&extraction)?,
                _ => output::table::print(&extraction),
            };
        }
    }

    Ok(())
}
