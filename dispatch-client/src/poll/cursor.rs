//! Output cursor

use dispatch_core::domain::output::OutputBatch;

/// Default number of log lines requested per output fetch
pub const DEFAULT_MAX_LINES: u32 = 500;

/// Position in an execution's console output
///
/// `offset` and `last_modified` come from the server and are never computed
/// locally; `max_lines` caps the size of the next batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub offset: i64,
    pub last_modified: i64,
    pub max_lines: u32,
}

impl Cursor {
    /// Cursor at the very beginning of the output
    pub fn start(max_lines: u32) -> Self {
        Self {
            offset: 0,
            last_modified: 0,
            max_lines,
        }
    }

    /// Cursor resuming right after `batch`
    pub fn after(batch: &OutputBatch, max_lines: u32) -> Self {
        Self {
            offset: batch.offset,
            last_modified: batch.last_modified,
            max_lines,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::start(DEFAULT_MAX_LINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_copies_server_tokens() {
        let batch = OutputBatch {
            offset: 7331,
            last_modified: 1_700_000_000_123,
            ..Default::default()
        };
        let cursor = Cursor::after(&batch, 50);
        assert_eq!(cursor.offset, 7331);
        assert_eq!(cursor.last_modified, 1_700_000_000_123);
        assert_eq!(cursor.max_lines, 50);
    }

    #[test]
    fn test_default_starts_at_zero() {
        let cursor = Cursor::default();
        assert_eq!(cursor, Cursor::start(500));
    }
}
