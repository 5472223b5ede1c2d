use crate::error::DabsError;
use crate::extraction::BulletinRenderer;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// PDF rendering backend using mudraw (from mupdf-tools).
///
/// `mudraw -t` flattens the page text, which is what the pipeline parses;
/// `mudraw -r 150 -o <png> <pdf> 1` rasterizes the chart page.
pub struct MudrawRenderer;

impl MudrawRenderer {
    pub fn new() -> Self {
        MudrawRenderer
    }

    /// Check if mudraw is available on the system.
    pub fn is_available() -> bool {
        Command::new("mudraw")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn write_temp_pdf(&self, pdf_bytes: &[u8]) -> Result<tempfile::NamedTempFile, DabsError> {
        let mut tmpfile = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| DabsError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| DabsError::Extraction(e.to_string()))?;
        Ok(tmpfile)
    }

    fn run(&self, cmd: &mut Command) -> Result<Vec<u8>, DabsError> {
        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DabsError::MudrawNotFound
            } else {
                DabsError::Extraction(format!("mudraw failed: {}", e))
            }
        })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(DabsError::MudrawFailed { code, stderr });
        }

        Ok(output.stdout)
    }
}

impl Default for MudrawRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletinRenderer for MudrawRenderer {
    fn dump_text(&self, pdf_bytes: &[u8]) -> Result<String, DabsError> {
        let tmpfile = self.write_temp_pdf(pdf_bytes)?;
        let stdout = self.run(Command::new("mudraw").arg("-t").arg(tmpfile.path()))?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    fn extract_map(&self, pdf_bytes: &[u8], out_png: &Path) -> Result<(), DabsError> {
        let tmpfile = self.write_temp_pdf(pdf_bytes)?;
        self.run(
            Command::new("mudraw")
                .arg("-r")
                .arg("150")
                .arg("-o")
                .arg(out_png)
                .arg(tmpfile.path())
                .arg("1"),
        )?;
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "mudraw"
    }
}
