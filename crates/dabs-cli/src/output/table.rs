use dabs_core::Extraction;

/// Print one labeled block per notice. Cells may contain internal line
/// breaks (multiple validity ranges, multi-line remarks), so a flat
/// column-per-field grid would not stay readable in a terminal.
pub fn print(extraction: &Extraction) {
    let table = &extraction.table;

    for (i, record) in table.records().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ===", record.identifier);
        print_field("Validity UTC", &record.validity);
        print_field("Lower Limit", &record.lower_limit);
        print_field("Upper Limit", &record.upper_limit);
        print_field("Location", &record.location);
        print_field("Center Point", &record.center);
        print_field("Covering Radius", &record.radius);
        print_field("Activity / Remarks", &record.activity);
    }

    if !extraction.skipped.is_empty() {
        println!();
        for s in &extraction.skipped {
            println!("skipped record {}: {}", s.index, s.reason);
        }
    }
}

fn print_field(label: &str, value: &str) {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or("");
    println!("  {label:<20} {first}");
    for line in lines {
        println!("  {:<20} {line}", "");
    }
}
