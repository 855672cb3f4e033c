//! Log entry decompaction
//!
//! The server may merge several console lines into one entry. Delivery works
//! on single lines, so each entry is split on line breaks and every piece
//! keeps the level and context of the entry it came from.

use dispatch_core::domain::output::{LogEntry, OutputBatch};

/// Flatten the entries of `batch` into one entry per line
pub fn decompact(batch: &OutputBatch) -> Vec<LogEntry> {
    decompact_entries(&batch.entries)
}

/// Flatten `entries` into one entry per line, preserving order
pub fn decompact_entries(entries: &[LogEntry]) -> Vec<LogEntry> {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        lines.extend(split_lines(&entry.log).map(|line| entry.with_log(line)));
    }
    lines
}

/// Split on `\n`, dropping trailing `\r`s per line and empty trailing lines
///
/// Always yields at least one line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let parts: Vec<&str> = text
        .split('\n')
        .map(|part| part.trim_end_matches('\r'))
        .collect();
    let keep = parts
        .iter()
        .rposition(|part| !part.is_empty())
        .map_or(1, |last| last + 1);
    parts.into_iter().take(keep)
}
