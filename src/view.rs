//! View-model formatting for summary and row display
//!
//! Maps raw tree values (byte counts, timestamps, permission bits) to the
//! strings a layer-inspection UI shows next to each entry and in the layer
//! summary line. Pure string mapping; the actual rendering belongs to the
//! consumer.

use crate::entry::{FileInfo, FileKind};
use crate::tree::FileTree;
use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count with decimal SI units: `817 B`, `1 kB`, `1.5 kB`,
/// `4 MB`.
///
/// One fractional digit at most, trailing zeros trimmed. Negative counts
/// (a shrinking aggregate) keep their sign: `-2 kB`.
pub fn human_size(bytes: i64) -> String {
    let mut value = bytes.unsigned_abs() as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let magnitude = if unit == 0 {
        format!("{}", value as u64)
    } else {
        let rounded = (value * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            format!("{}", rounded as i64)
        } else {
            format!("{:.1}", rounded)
        }
    };

    let sign = if bytes < 0 { "-" } else { "" };
    format!("{}{} {}", sign, magnitude, SIZE_UNITS[unit])
}

/// Format how long ago `then` was, relative to `now`, in coarse buckets:
/// `just now`, `5 minutes ago`, `3 days ago`, `2 months ago`.
///
/// Months are 30 days, years 365; precision beyond that serves no one in a
/// summary line. A `then` later than `now` reports `in the future`.
pub fn human_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    let seconds = (now - then).num_seconds();
    if seconds < 0 {
        "in the future".to_string()
    } else if seconds < MINUTE {
        "just now".to_string()
    } else if seconds < HOUR {
        count_ago(seconds / MINUTE, "minute")
    } else if seconds < DAY {
        count_ago(seconds / HOUR, "hour")
    } else if seconds < MONTH {
        count_ago(seconds / DAY, "day")
    } else if seconds < YEAR {
        count_ago(seconds / MONTH, "month")
    } else {
        count_ago(seconds / YEAR, "year")
    }
}

fn count_ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// `ls -l` style mode column: kind prefix plus nine permission characters,
/// e.g. `drwxr-xr-x`. Entries without reported permission bits render as
/// `----------` (with the kind prefix).
pub fn mode_string(kind: FileKind, mode: Option<u32>) -> String {
    let mut out = String::with_capacity(10);
    out.push(match kind {
        FileKind::Directory => 'd',
        FileKind::Symlink => 'l',
        FileKind::File => '-',
    });
    match mode {
        Some(mode) => {
            for shift in [6u32, 3, 0] {
                let bits = (mode >> shift) & 0o7;
                out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
                out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
                out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
            }
        }
        None => out.push_str("---------"),
    }
    out
}

/// One display row for a tree entry: mode column, right-aligned size, name.
pub fn entry_label(name: &str, info: &FileInfo) -> String {
    let size = human_size(i64::try_from(info.size).unwrap_or(i64::MAX));
    format!("{} {:>8} {}", mode_string(info.kind, info.mode), size, name)
}

/// Plain-text dump of a tree: one line per node, two spaces of indentation
/// per depth level, `/` suffixed to nodes with children.
///
/// Meant for logs and test assertions; the consuming UI renders the node
/// graph itself.
pub fn render<T>(tree: &FileTree<T>) -> String {
    let mut out = String::new();
    for id in tree.walk() {
        let Some(node) = tree.get(id) else { continue };
        for _ in 0..tree.depth(id) {
            out.push_str("  ");
        }
        if id == tree.root() {
            out.push('/');
        } else {
            out.push_str(node.name());
            if node.has_children() {
                out.push('/');
            }
        }
        out.push('\n');
    }
    out
}
