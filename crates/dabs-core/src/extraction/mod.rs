pub mod mudraw;

use crate::error::DabsError;
use std::path::Path;

/// Boundary to the external PDF tool. The pipeline itself never touches
/// PDF internals; it consumes the flat text dump a renderer produces.
pub trait BulletinRenderer: Send + Sync {
    /// Flatten the bulletin PDF to plain text.
    fn dump_text(&self, pdf_bytes: &[u8]) -> Result<String, DabsError>;

    /// Render the chart on page 1 to a PNG file.
    fn extract_map(&self, pdf_bytes: &[u8], out_png: &Path) -> Result<(), DabsError>;

    /// Name of this rendering backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
