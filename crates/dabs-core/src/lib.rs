pub mod error;
pub mod extraction;
pub mod layout;
pub mod model;
pub mod parsing;

use error::DabsError;
use extraction::BulletinRenderer;
use layout::BulletinLayout;
use model::NoticeTable;
use serde::{Deserialize, Serialize};

/// What to do with a record block that does not match the expected field
/// shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// One malformed record aborts the entire extraction (reference
    /// behavior).
    #[default]
    Fail,
    /// Drop malformed records and report them alongside the table.
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Bulletin layout variant whose anchor phrases bound the tables.
    pub layout: BulletinLayout,
    pub malformed: MalformedPolicy,
}

/// A record block dropped under `MalformedPolicy::Skip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Index of the block in source order.
    pub index: usize,
    pub reason: String,
}

/// Result of one extraction call: the parsed table plus any records
/// skipped under `MalformedPolicy::Skip` (always empty under `Fail`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    pub table: NoticeTable,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRecord>,
}

/// Extract the notice table from a bulletin text dump with default
/// options: current layout, all-or-nothing on malformed records.
pub fn extract_table(text: &str) -> Result<NoticeTable, DabsError> {
    let extraction = extract_with(text, &ExtractOptions::default())?;
    Ok(extraction.table)
}

/// Extract the notice table from a bulletin text dump.
pub fn extract_with(text: &str, options: &ExtractOptions) -> Result<Extraction, DabsError> {
    parsing::parse_notices(text, options)
}

/// Flatten a bulletin PDF through the given renderer, then extract its
/// notice table.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    renderer: &dyn BulletinRenderer,
    options: &ExtractOptions,
) -> Result<Extraction, DabsError> {
    let text = renderer.dump_text(pdf_bytes)?;
    extract_with(&text, options)
}
