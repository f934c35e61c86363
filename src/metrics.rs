//! Column metrics: row-count derivation and per-column width scan.
//!
//! Computed once per render call; never stored on the table. The scan
//! visits cells at flat indices `c, c + columns, c + 2*columns, ...` for
//! each column `c`, taking the maximum content width and style-prefix
//! width seen in that column.

use crate::cell::Cell;
use crate::error::{Error, Result};

/// Per-column maxima used to pad every cell in the column to equal width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnMetrics {
    /// Maximum sub-row content width in the column.
    pub width: usize,
    /// Maximum style-prefix character count in the column.
    pub prefix_width: usize,
}

/// The shape of one render: row count plus per-column metrics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub columns: Vec<ColumnMetrics>,
}

impl Layout {
    /// Derive the layout for `cells` arranged row-major into `columns`
    /// columns.
    ///
    /// Fails if `columns` is zero, `cells` is empty, or the entry count is
    /// not exactly divisible by `columns` (ragged tables are unsupported).
    pub fn compute(cells: &[Cell], columns: usize) -> Result<Self> {
        if columns == 0 {
            return Err(Error::ZeroColumns);
        }
        if cells.is_empty() {
            return Err(Error::Empty);
        }
        let rows = cells.len() / columns;
        if cells.len() != rows * columns {
            return Err(Error::ShapeMismatch {
                entries: cells.len(),
                columns,
            });
        }

        let mut metrics = vec![ColumnMetrics::default(); columns];
        for (i, cell) in cells.iter().enumerate() {
            let m = &mut metrics[i % columns];
            m.width = m.width.max(cell.max_subrow_width());
            m.prefix_width = m.prefix_width.max(cell.prefix_width());
        }

        Ok(Self {
            rows,
            columns: metrics,
        })
    }

    /// Cells of logical row `i`, given the backing flat slice.
    #[must_use]
    pub fn row<'a>(&self, cells: &'a [Cell], i: usize) -> &'a [Cell] {
        let columns = self.columns.len();
        &cells[i * columns..(i + 1) * columns]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(texts: &[&str]) -> Vec<Cell> {
        texts.iter().map(|t| Cell::new(None, Some(t))).collect()
    }

    #[test]
    fn test_rows_from_even_division() {
        let cells = cells(&["a", "b", "c", "d", "e", "f"]);
        let layout = Layout::compute(&cells, 3).unwrap();
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.columns.len(), 3);

        let layout = Layout::compute(&cells, 2).unwrap();
        assert_eq!(layout.rows, 3);
    }

    #[test]
    fn test_column_width_is_columnwise_max() {
        let cells = cells(&["a", "bbbb", "cc", "d"]);
        let layout = Layout::compute(&cells, 2).unwrap();
        assert_eq!(layout.columns[0].width, 2); // max("a", "cc")
        assert_eq!(layout.columns[1].width, 4); // max("bbbb", "d")
    }

    #[test]
    fn test_multiline_cell_counts_widest_segment() {
        let cells = cells(&["x", "a\nbbb\ncc", "y", "z"]);
        let layout = Layout::compute(&cells, 2).unwrap();
        assert_eq!(layout.columns[1].width, 3);
    }

    #[test]
    fn test_prefix_width_tracked_per_column() {
        let cells = vec![
            Cell::new(Some("\x1b[4m"), Some("a")),
            Cell::new(None, Some("b")),
            Cell::new(None, Some("c")),
            Cell::new(None, Some("d")),
        ];
        let layout = Layout::compute(&cells, 2).unwrap();
        assert_eq!(layout.columns[0].prefix_width, 4);
        assert_eq!(layout.columns[1].prefix_width, 0);
    }

    #[test]
    fn test_shape_errors() {
        let three = cells(&["a", "b", "c"]);
        assert_eq!(Layout::compute(&three, 0), Err(Error::ZeroColumns));
        assert_eq!(Layout::compute(&[], 2), Err(Error::Empty));
        assert_eq!(
            Layout::compute(&three, 2),
            Err(Error::ShapeMismatch {
                entries: 3,
                columns: 2
            })
        );
    }

    #[test]
    fn test_row_slicing() {
        let all = cells(&["a", "b", "c", "d"]);
        let layout = Layout::compute(&all, 2).unwrap();
        assert_eq!(layout.row(&all, 0)[1].content(), "b");
        assert_eq!(layout.row(&all, 1)[0].content(), "c");
    }
}
