use crate::error::DabsError;
use crate::layout::BulletinLayout;
use regex::Regex;
use std::sync::LazyLock;

/// Whitespace-only line surrounded by blank lines — an artifact of column
/// wrapping in the text dump, not a record separator.
static GHOST_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]+\n").unwrap());

/// Isolate the bulletin's two notice tables and split their combined body
/// into one raw text block per notice, in source order.
///
/// The dump must contain both tables, each bounded by the layout's anchor
/// phrases; a dump missing either anchor fails as a whole. There is no
/// partial-success mode.
pub fn segment(text: &str, layout: &BulletinLayout) -> Result<Vec<String>, DabsError> {
    let anchor_re = anchor_regex(layout);

    let caps = anchor_re.captures(text).ok_or_else(|| DabsError::Structure {
        layout: layout.name,
        reason: "table anchor phrases not found in text dump".to_string(),
    })?;

    // Table 1 body, then table 2 body, joined by a record separator.
    let combined = format!("{}\n\n\n{}", &caps[1], &caps[2]);

    let cleaned = GHOST_LINE_RE.replace_all(&combined, "\n\n");

    let blocks: Vec<String> = cleaned
        .split("\n\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect();

    Ok(blocks)
}

/// One dot-matches-newline pattern capturing both table bodies between the
/// layout's anchor phrases.
fn anchor_regex(layout: &BulletinLayout) -> Regex {
    let pattern = format!(
        "(?s){header}(.*?){end1}.*?{header}(.*?){end2}",
        header = regex::escape(layout.table_header),
        end1 = regex::escape(layout.table1_end),
        end2 = regex::escape(layout.table2_end),
    );
    // Escaped literals always form a valid pattern.
    Regex::new(&pattern).unwrap()
}
