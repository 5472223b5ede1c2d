//! Integration tests for the full extraction pipeline.
//!
//! Uses a MockRenderer that returns a pre-built text dump without invoking
//! mudraw, so these tests run without mupdf-tools.

use dabs_core::error::DabsError;
use dabs_core::extraction::BulletinRenderer;
use dabs_core::model::HEADERS;
use dabs_core::{extract_pdf, extract_table, extract_with, ExtractOptions, MalformedPolicy};
use std::path::Path;

struct MockRenderer {
    text: String,
}

impl BulletinRenderer for MockRenderer {
    fn dump_text(&self, _pdf_bytes: &[u8]) -> Result<String, DabsError> {
        Ok(self.text.clone())
    }

    fn extract_map(&self, _pdf_bytes: &[u8], _out_png: &Path) -> Result<(), DabsError> {
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

/// Assemble a bulletin text dump the way mudraw flattens it: page header,
/// first table (firing / D-areas), chart-side legend, second table
/// (NOTAM R-areas), closing text.
fn dump(table1_blocks: &[&str], table2_blocks: &[&str]) -> String {
    format!(
        "DABS\nDaily Airspace Bulletin Switzerland\nValid 26 JUL 2013\n\n\
         Firing-Nr    Validity UTC    Lower Limit    Upper Limit    \
         Location    Center Point    Covering Radius    Activity / Remarks\n\
         {}\n\n\n\
         Activities not shown on the DABS Chart Side:\n\
         see the chart legend\n\n\
         NOTAM-Nr    Validity UTC    Lower Limit    Upper Limit    \
         Location    Center Point    Covering Radius    Activity / Remarks\n\
         {}\n\n\n\
         For detailed information regarding the DABS consult the AIP.\n",
        table1_blocks.join("\n\n\n"),
        table2_blocks.join("\n\n\n"),
    )
}

const D_12: &str = "D-12\n0600 - 1000\n1100 - 1600\nGND\n1800m / 5950ft\n\
                    SIHLTAL\n470140N 0085126E\n3.6 KM/1.9 NM\nD-AREA ACTIVE";
const D_15: &str = "D-15\n0730 - 1130\nGND\n2200m / 7220ft\n\
                    GLAUBENBERG\n465345N 0081030E\n6.5 KM/3.5 NM\nD-AREA ACTIVE";
const W_0631: &str = "W0631/13\n0800 - 0900\nGND\nFL100\nWANGEN LACHEN AD\n\
                      471219N 0085202E\n10.0 KM/5.4 NM\n\
                      R-AREA ACT. ENTRY PROHIBITED.\n\nFOR INFO CTC ZURICH INFO 124.7";
const W_0887: &str = "W0887/13\n1145 - 1245\nGND\nFL100\n4.7 KM NW MEIRINGEN\n\
                      464530N 0080830E\n7.0 KM/3.8 NM\n\
                      R-AREA ACT. ENTRY PROHIBITED.\n\nFOR INFO CTC ZURICH INFO 124.7";
const W_0895: &str = "W0895/13\n0745 - 0845\nGND\nFL080\nZUG\n\
                      471017N 0083113E\n7.1 KM/3.8 NM\n\
                      R-AREA ACT. ENTRY PROHIBITED.\n\nFOR INFO CTC ZURICH INFO 124.7";
const W_0791: &str = "W0791/13\n0800 - 1910\nGND\nFL100\nSAANEN\n\
                      462923N 0071542E\n9.3 KM/5.0 NM\n\
                      INTENSE GLIDER ACTIVITY\n   \nIN VICINITY OF SAANEN";
const W_0837: &str = "W0837/13\n0600 - 2000\nGND\nFL100\nZWEISIMMEN\n\
                      463311N 0072250E\n9.3 KM/5.0 NM\n\
                      INTENSE GLIDER ACTIVITY\nIN VICINITY OF ZWEISIMMEN";

fn full_dump() -> String {
    dump(
        &[D_12, D_15],
        &[W_0631, W_0887, W_0895, W_0791, W_0837],
    )
}

#[test]
fn full_two_table_dump_yields_seven_rows_in_source_order() {
    let table = extract_table(&full_dump()).unwrap();

    assert_eq!(table.len(), 7);
    assert_eq!(table.headers(), &HEADERS);
    assert_eq!(HEADERS[0], "Firing-Nr\nD-/R-Area\nNOTAM-Nr");

    let ids: Vec<&str> = table.records().iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "D-12", "D-15", "W0631/13", "W0887/13", "W0895/13", "W0791/13", "W0837/13"
        ]
    );

    let d12 = &table.records()[0];
    assert_eq!(d12.validity, "0600 - 1000\n1100 - 1600");
    assert_eq!(d12.upper_limit, "1800m / 5950ft");

    // Ghost whitespace line inside the remarks collapses to one break.
    let w0791 = &table.records()[5];
    assert_eq!(
        w0791.activity,
        "INTENSE GLIDER ACTIVITY\nIN VICINITY OF SAANEN"
    );
}

#[test]
fn extraction_is_idempotent() {
    let text = full_dump();
    let a = extract_table(&text).unwrap();
    let b = extract_table(&text).unwrap();
    assert_eq!(a, b);
}

#[test]
fn reordering_blocks_reorders_rows_identically() {
    let reordered = dump(&[D_15, D_12], &[W_0837, W_0631, W_0895, W_0791, W_0887]);
    let table = extract_table(&reordered).unwrap();
    let ids: Vec<&str> = table.records().iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "D-15", "D-12", "W0837/13", "W0631/13", "W0895/13", "W0791/13", "W0887/13"
        ]
    );
}

#[test]
fn every_record_has_eight_columns() {
    let table = extract_table(&full_dump()).unwrap();
    for row in table.rows() {
        assert_eq!(row.len(), HEADERS.len());
    }
}

#[test]
fn missing_anchors_is_a_structure_error_not_an_empty_table() {
    let err = extract_table("some unrelated PDF text dump").unwrap_err();
    assert!(matches!(err, DabsError::Structure { .. }));
}

#[test]
fn malformed_record_aborts_extraction_by_default() {
    // W0631 with its altitude tokens mangled.
    let bad = "W0631/13\n0800 - 0900\nground\nflight level 100\nWANGEN LACHEN AD\n\
               471219N 0085202E\n10.0 KM/5.4 NM\nR-AREA ACT.";
    let text = dump(&[D_12], &[bad, W_0895]);

    let err = extract_table(&text).unwrap_err();
    assert!(matches!(
        err,
        DabsError::FieldShape {
            record: 1,
            field: "lower_limit",
            ..
        }
    ));
}

#[test]
fn skip_policy_reports_malformed_records_and_keeps_order() {
    let bad = "W0631/13\n0800 - 0900\nground\nflight level 100\nWANGEN LACHEN AD\n\
               471219N 0085202E\n10.0 KM/5.4 NM\nR-AREA ACT.";
    let text = dump(&[D_12], &[bad, W_0895]);

    let options = ExtractOptions {
        malformed: MalformedPolicy::Skip,
        ..Default::default()
    };
    let extraction = extract_with(&text, &options).unwrap();

    assert_eq!(extraction.table.len(), 2);
    assert_eq!(extraction.skipped.len(), 1);
    assert_eq!(extraction.skipped[0].index, 1);
    let ids: Vec<&str> = extraction
        .table
        .records()
        .iter()
        .map(|r| r.identifier.as_str())
        .collect();
    assert_eq!(ids, vec!["D-12", "W0895/13"]);
}

#[test]
fn extract_pdf_runs_the_renderer_then_the_pipeline() {
    let renderer = MockRenderer { text: full_dump() };
    let extraction = extract_pdf(&[], &renderer, &ExtractOptions::default()).unwrap();
    assert_eq!(extraction.table.len(), 7);
    assert!(extraction.skipped.is_empty());
}
