use dabs_core::error::DabsError;
use dabs_core::extraction::mudraw::MudrawRenderer;
use dabs_core::extraction::BulletinRenderer;
use std::path::PathBuf;

pub fn run(pdf_file: PathBuf, out_png: PathBuf) -> Result<(), DabsError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let renderer = MudrawRenderer::new();
    renderer.extract_map(&pdf_bytes, &out_png)?;
    eprintln!("Chart written to {}", out_png.display());
    Ok(())
}
