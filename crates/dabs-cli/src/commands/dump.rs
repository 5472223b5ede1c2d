use dabs_core::error::DabsError;
use dabs_core::extraction::mudraw::MudrawRenderer;
use dabs_core::extraction::BulletinRenderer;
use std::path::PathBuf;

/// Print the raw text dump, for debugging the pipeline against bulletin
/// layout drift.
pub fn run(pdf_file: PathBuf) -> Result<(), DabsError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let renderer = MudrawRenderer::new();
    let text = renderer.dump_text(&pdf_bytes)?;
    println!("{text}");
    Ok(())
}
