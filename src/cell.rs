//! Table cell: owned content, optional style prefix, derived width.
//!
//! A [`Cell`] stores already-formatted text (the engine does no format
//! interpolation) plus an optional ANSI style prefix. The widest sub-row
//! segment is computed eagerly at construction so that column sizing is a
//! simple max-scan at render time.

use crate::event::{LogLevel, emit_log};

/// Maximum character count of one cell's content. Longer content is
/// silently truncated, not rejected.
pub const MAX_CONTENT_LEN: usize = 96;

/// Maximum character count of a style prefix. A longer prefix is silently
/// dropped (the cell renders unstyled), not rejected.
pub const MAX_PREFIX_LEN: usize = 24;

/// One table entry.
///
/// Cells are position-free: row/column placement is purely a function of
/// the cell's flat index in its [`Table`](crate::Table) and the column
/// count supplied at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    content: String,
    prefix: Option<String>,
    max_subrow_width: usize,
}

impl Cell {
    /// Create a cell from an optional style prefix and optional text.
    ///
    /// `None` (or empty) text yields an empty cell that still reserves one
    /// character of width. Content beyond [`MAX_CONTENT_LEN`] characters is
    /// truncated; a prefix beyond [`MAX_PREFIX_LEN`] characters is dropped.
    /// Both degradations are silent successes, reported only via the log
    /// callback.
    #[must_use]
    pub fn new(prefix: Option<&str>, text: Option<&str>) -> Self {
        let content = match text {
            Some(t) if t.chars().count() > MAX_CONTENT_LEN => {
                emit_log(
                    LogLevel::Warn,
                    &format!("cell content truncated to {MAX_CONTENT_LEN} characters"),
                );
                t.chars().take(MAX_CONTENT_LEN).collect()
            }
            Some(t) => t.to_string(),
            None => String::new(),
        };

        let prefix = match prefix {
            Some(p) if p.chars().count() > MAX_PREFIX_LEN => {
                emit_log(
                    LogLevel::Warn,
                    &format!("style prefix longer than {MAX_PREFIX_LEN} characters dropped"),
                );
                None
            }
            Some(p) => Some(p.to_string()),
            None => None,
        };

        let max_subrow_width = widest_segment(&content);

        Self {
            content,
            prefix,
            max_subrow_width,
        }
    }

    /// The cell's text, post-truncation.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The style prefix, if one was accepted.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Character count of the style prefix (0 when absent).
    #[must_use]
    pub fn prefix_width(&self) -> usize {
        self.prefix.as_deref().map_or(0, |p| p.chars().count())
    }

    /// Widest newline-separated segment of the content, minimum 1.
    #[must_use]
    pub fn max_subrow_width(&self) -> usize {
        self.max_subrow_width
    }

    /// Number of physical lines this cell spans: one per newline, plus one.
    ///
    /// A trailing newline contributes a final blank sub-row.
    #[must_use]
    pub fn subrow_count(&self) -> usize {
        self.content.matches('\n').count() + 1
    }
}

/// Maximum character count among the `\n`-separated segments of `content`,
/// with a floor of 1 so empty and newline-only cells still reserve width.
fn widest_segment(content: &str) -> usize {
    content
        .split('\n')
        .map(|segment| segment.chars().count())
        .max()
        .unwrap_or(0)
        .max(1)
}
