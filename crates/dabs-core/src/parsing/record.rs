use crate::error::DabsError;
use crate::model::NoticeRecord;
use regex::Regex;
use std::sync::LazyLock;

/// A validity time range, `HHMM - HHMM` in UTC.
static TIME_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-2][0-9][0-6][0-9] - [0-2][0-9][0-6][0-9]").unwrap());

/// An altitude band limit: ground, AIP reference, metric/imperial pair,
/// or flight level.
static ALTITUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GND|REF AIP|[0-9]+m / [0-9]+ft|FL[0-9]{2,3}").unwrap());

/// Center coordinate (`DDMMSSN DDDMMSSE`) followed by the covering radius,
/// which always ends in `NM`.
static CENTER_RADIUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{6}N [0-9]{7}E)\s+?(.*?NM)").unwrap());

static NEWLINE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Extract the eight fields of one notice from its raw text block.
///
/// Four sequential splits, each committing to its partition before the next
/// begins — no backtracking. This works because the token shapes are
/// mutually exclusive: a time range cannot look like an altitude, an
/// altitude cannot look like a coordinate. `record` is the block's index in
/// source order, carried into errors for diagnostics against layout drift.
pub fn parse_record(block: &str, record: usize) -> Result<NoticeRecord, DabsError> {
    // Stage 1: validity time ranges. Identifier is everything before the
    // first range; the remainder after the last range carries on.
    let times: Vec<regex::Match> = TIME_RANGE_RE.find_iter(block).collect();
    let (first, last) = match (times.first(), times.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => {
            return Err(field_error(
                record,
                "validity",
                "no `HHMM - HHMM` time range in block",
            ))
        }
    };
    let identifier = block[..first.start()].trim().to_string();
    let validity = collapse_newlines(&block[first.start()..last.end()]);
    let rest = block[last.end()..].trim();

    // Stage 2: altitude band.
    let mut altitudes = ALTITUDE_RE.find_iter(rest);
    let lower = altitudes
        .next()
        .ok_or_else(|| field_error(record, "lower_limit", "no altitude token after validity"))?;
    let upper = altitudes.next().ok_or_else(|| {
        field_error(
            record,
            "upper_limit",
            "fewer than two altitude tokens after validity",
        )
    })?;
    let lower_limit = lower.as_str().to_string();
    let upper_limit = upper.as_str().to_string();
    let rest = rest[upper.end()..].trim();

    // Stage 3: center point and covering radius. Exactly one match; with
    // several there is no defensible tie-break, so the block is malformed.
    let mut pairs = CENTER_RADIUS_RE.captures_iter(rest);
    let caps = pairs.next().ok_or_else(|| {
        field_error(record, "center", "no coordinate/radius pair after altitudes")
    })?;
    if pairs.next().is_some() {
        return Err(field_error(
            record,
            "center",
            "multiple coordinate/radius pairs in block",
        ));
    }
    let matched = caps.get(0).unwrap();
    let location = rest[..matched.start()].trim().to_string();
    let center = caps[1].trim().to_string();
    let radius = caps[2].trim().to_string();

    // Stage 4: whatever trails the radius is the remarks column.
    let activity = collapse_newlines(rest[matched.end()..].trim());

    Ok(NoticeRecord {
        identifier,
        validity,
        lower_limit,
        upper_limit,
        location,
        center,
        radius,
        activity,
    })
}

fn field_error(record: usize, field: &'static str, reason: &str) -> DabsError {
    DabsError::FieldShape {
        record,
        field,
        reason: reason.to_string(),
    }
}

/// Collapse runs of line breaks to single line breaks, keeping single
/// internal breaks intact.
fn collapse_newlines(s: &str) -> String {
    NEWLINE_RUN_RE.replace_all(s, "\n").into_owned()
}
