#[derive(Debug, thiserror::Error)]
pub enum DabsError {
    #[error("bulletin structure not recognized ({layout} layout): {reason}")]
    Structure { layout: &'static str, reason: String },

    #[error("record {record}: could not isolate {field}: {reason}")]
    FieldShape {
        record: usize,
        field: &'static str,
        reason: String,
    },

    #[error("unknown bulletin layout '{0}'")]
    UnknownLayout(String),

    #[error("mudraw not found. Install mupdf-tools: brew install mupdf-tools (macOS) or apt install mupdf-tools (Linux)")]
    MudrawNotFound,

    #[error("mudraw failed with exit code {code}: {stderr}")]
    MudrawFailed { code: i32, stderr: String },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
