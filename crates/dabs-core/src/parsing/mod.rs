pub mod record;
pub mod segment;

use crate::error::DabsError;
use crate::model::NoticeTable;
use crate::{ExtractOptions, Extraction, MalformedPolicy, SkippedRecord};

/// Run the full pipeline on one bulletin text dump: segment into raw
/// record blocks, then parse each block independently, preserving source
/// order.
///
/// Under the default `MalformedPolicy::Fail`, the first block that does
/// not match the expected field shapes aborts the whole extraction — no
/// partial table is ever returned. Under `Skip`, malformed blocks are
/// dropped and reported instead.
pub fn parse_notices(text: &str, options: &ExtractOptions) -> Result<Extraction, DabsError> {
    let blocks = segment::segment(text, &options.layout)?;

    let mut records = Vec::with_capacity(blocks.len());
    let mut skipped = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        match record::parse_record(block, index) {
            Ok(r) => records.push(r),
            Err(e) => match options.malformed {
                MalformedPolicy::Fail => return Err(e),
                MalformedPolicy::Skip => skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                }),
            },
        }
    }

    Ok(Extraction {
        table: NoticeTable::new(records),
        skipped,
    })
}
