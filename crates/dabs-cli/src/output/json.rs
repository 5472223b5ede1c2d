use dabs_core::error::DabsError;
use dabs_core::Extraction;

pub fn print(extraction: &Extraction) -> Result<(), DabsError> {
    let json = serde_json::to_string_pretty(extraction)?;
    println!("{json}");
    Ok(())
}
