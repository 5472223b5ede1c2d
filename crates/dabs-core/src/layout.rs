/// Anchor phrases bounding the two notice tables of one bulletin edition.
///
/// The bulletin layout has drifted across editions; each known layout is a
/// named variant selected by configuration, never silently forked parser
/// logic. Only the latest observed layout is defined today — adding an
/// older edition means adding another constant here, not another parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletinLayout {
    pub name: &'static str,
    /// Header phrase after which each table body begins.
    pub table_header: &'static str,
    /// Phrase that terminates the first table.
    pub table1_end: &'static str,
    /// Phrase that terminates the second table.
    pub table2_end: &'static str,
}

/// The latest observed bulletin layout.
pub const CURRENT: BulletinLayout = BulletinLayout {
    name: "2013",
    table_header: "Activity / Remarks",
    table1_end: "Activities not shown on the DABS Chart Side:",
    table2_end: "For detailed information regarding the DABS",
};

impl BulletinLayout {
    /// All known layout variants, newest first.
    pub fn all() -> &'static [BulletinLayout] {
        &[CURRENT]
    }

    /// Look up a layout variant by its name (e.g. for a CLI flag).
    pub fn by_name(name: &str) -> Option<BulletinLayout> {
        Self::all().iter().copied().find(|l| l.name == name)
    }
}

impl Default for BulletinLayout {
    fn default() -> Self {
        CURRENT
    }
}
