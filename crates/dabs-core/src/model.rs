use serde::{Deserialize, Serialize};

/// Column headers of the bulletin table, verbatim including the internal
/// line breaks the bulletin itself uses in multi-line header cells.
pub const HEADERS: [&str; 8] = [
    "Firing-Nr\nD-/R-Area\nNOTAM-Nr",
    "Validity UTC",
    "Lower Limit\nAMSL or FL",
    "Upper Limit\nAMSL or FL",
    "Location",
    "Center Point",
    "Covering Radius",
    "Activity / Remarks",
];

/// One restricted-airspace notice — one row of the bulletin table.
///
/// Every field is mandatory: a bulletin row from which any of these cannot
/// be recovered is a parse failure, never a record with defaulted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRecord {
    /// Alphanumeric notice number and/or area code (`D-12`, `W0631/13`,
    /// or a bare running number for firing notices).
    pub identifier: String,
    /// One or more UTC time ranges (`HHMM - HHMM`), newline-joined when
    /// several ranges apply on the same notice.
    pub validity: String,
    /// `GND`, `REF AIP`, a metric/imperial pair, or a flight level.
    pub lower_limit: String,
    pub upper_limit: String,
    /// Free-text place name.
    pub location: String,
    /// Coordinate pair, `DDMMSSN DDDMMSSE`.
    pub center: String,
    /// Covering radius in kilometers and nautical miles.
    pub radius: String,
    /// Free-text remarks; internal line breaks preserved.
    pub activity: String,
}

impl NoticeRecord {
    /// The record as one row, in header column order.
    pub fn row(&self) -> [&str; 8] {
        [
            &self.identifier,
            &self.validity,
            &self.lower_limit,
            &self.upper_limit,
            &self.location,
            &self.center,
            &self.radius,
            &self.activity,
        ]
    }
}

/// The parsed bulletin table: fixed header plus records in source order.
///
/// Built once per extraction call and immutable afterwards. Row order is
/// the bulletin's own row order — no other ordering key exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeTable {
    records: Vec<NoticeRecord>,
}

impl NoticeTable {
    pub fn new(records: Vec<NoticeRecord>) -> Self {
        NoticeTable { records }
    }

    pub fn headers(&self) -> &'static [&'static str; 8] {
        &HEADERS
    }

    pub fn records(&self) -> &[NoticeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows as 8-element tuples matching `headers()`. Arity is guaranteed
    /// by `NoticeRecord::row`, so every row matches the header count.
    pub fn rows(&self) -> impl Iterator<Item = [&str; 8]> {
        self.records.iter().map(NoticeRecord::row)
    }
}
