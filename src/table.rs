//! The table: an ordered entry store plus border configuration.
//!
//! Cells are appended flat, row-major; the column count is supplied only
//! at render time, so the same store can be reshaped freely. Rendering
//! borrows the table immutably - repeated renders with identical arguments
//! produce byte-identical output.

use crate::cell::Cell;
use crate::error::Result;
use crate::render;
use crate::style::{BorderChars, TableStyle};

/// A text table under construction.
///
/// # Examples
///
/// ```
/// use texttable::{Table, TableStyle};
///
/// let mut table = Table::new();
/// table.add(None, Some("key"));
/// table.add(None, Some("value"));
/// let out = table
///     .render_to_string(TableStyle::Bordered, 0, 2)
///     .unwrap();
/// assert_eq!(out, "+-----+-------+\n| key | value |\n+-----+-------+\n");
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    cells: Vec<Cell>,
    /// Border character knobs; mutable between renders.
    pub chars: BorderChars,
    /// Spaces between border and cell text; mutable between renders.
    pub padding: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Create an empty table with default border characters and padding 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            chars: BorderChars::default(),
            padding: 1,
        }
    }

    /// Append one cell.
    ///
    /// `text` is already-formatted content (use `format!` upstream for
    /// interpolation); `None` produces an empty cell. `prefix` is an
    /// optional ANSI styling sequence, closed automatically with
    /// [`crate::ansi::RESET`] at render time. Oversized content or prefix
    /// degrades silently per [`Cell::new`].
    pub fn add(&mut self, prefix: Option<&str>, text: Option<&str>) {
        self.cells.push(Cell::new(prefix, text));
    }

    /// Release every cell, keeping the border configuration.
    ///
    /// A no-op on an already-empty table.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of appended cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the table has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The appended cells, in insertion order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Render the table into `columns` columns, delivering each physical
    /// line to `sink` in top-to-bottom order.
    ///
    /// Fails (with the sink never called) when `columns` is zero, the
    /// table is empty, the entry count is not divisible by `columns`, or
    /// `pos_x` exceeds [`render::MAX_POS_X`].
    pub fn render<F>(&self, mut sink: F, style: TableStyle, pos_x: usize, columns: usize) -> Result<()>
    where
        F: FnMut(&str),
    {
        render::render(self, &mut sink, style, pos_x, columns)
    }

    /// Render into a single string, one line per physical line, each
    /// terminated with `\n`.
    pub fn render_to_string(
        &self,
        style: TableStyle,
        pos_x: usize,
        columns: usize,
    ) -> Result<String> {
        let mut out = String::new();
        self.render(
            |line| {
                out.push_str(line);
                out.push('\n');
            },
            style,
            pos_x,
            columns,
        )?;
        Ok(out)
    }
}
