use crate::core::types::{LeveledList, LeveledListItem};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_SPACES_PER_LEVEL: usize = 2;

static OUTLINE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<indent>[ \t]*)(?:[-*+][ \t]+)?(?P<label>.*?)\s*$").unwrap()
});

/// Read an indented outline into a leveled list.
///
/// Each tab is one level and every `spaces_per_level` spaces are one more.
/// A leading `-`, `*` or `+` bullet is dropped from the label. Blank lines
/// are skipped.
pub fn read_outline(text: &str, spaces_per_level: usize) -> LeveledList {
    let spaces_per_level = spaces_per_level.max(1);
    let mut items = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            trace!("Skipping blank line {}", line_no + 1);
            continue;
        }

        let Some(caps) = OUTLINE_LINE_REGEX.captures(line) else {
            continue;
        };
        let indent = caps.name("indent").map_or("", |m| m.as_str());
        let label = caps.name("label").map_or("", |m| m.as_str());

        let tabs = indent.chars().filter(|&c| c == '\t').count();
        let spaces = indent.len() - tabs;
        let level = tabs + spaces / spaces_per_level;

        trace!("Line {}: level={level} label={label:?}", line_no + 1);
        items.push(LeveledListItem::new(
            i64::try_from(level).unwrap_or(i64::MAX),
            label,
        ));
    }

    debug!("Read {} outline item(s)", items.len());
    items
}
