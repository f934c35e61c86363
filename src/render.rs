//! Row renderer: turns a table plus a column count into physical lines.
//!
//! Border lines are built once per render call. Each logical row is then
//! emitted as one or more physical lines: a cell with embedded newlines
//! keeps the row "open" until every column's cursor is exhausted, with the
//! other columns padded to width. Cursors live in a render-scoped side
//! table (one per column, reset at each logical row), so rendering takes
//! the table by shared reference and repeated renders are independent.

use crate::ansi;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::metrics::Layout;
use crate::style::{StyleRules, TableStyle};
use crate::table::Table;

/// Maximum left-shift (`pos_x`) of the whole table.
pub const MAX_POS_X: usize = 30;

/// Render `table` into `columns` columns, streaming each physical line to
/// `sink` in top-to-bottom order.
///
/// All validation happens before the first sink call: on `Err` the sink
/// has been invoked zero times.
pub(crate) fn render<F>(
    table: &Table,
    sink: &mut F,
    style: TableStyle,
    pos_x: usize,
    columns: usize,
) -> Result<()>
where
    F: FnMut(&str),
{
    if pos_x > MAX_POS_X {
        return Err(Error::ShiftOutOfRange {
            pos_x,
            max: MAX_POS_X,
        });
    }
    let layout = Layout::compute(table.cells(), columns)?;
    let rules = style.rules();

    let grid_line = border_line(&layout, table, pos_x, table.chars.grid_x);
    let head_line = border_line(&layout, table, pos_x, table.chars.head_x);

    if rules.contains(StyleRules::HEAD_TOP) {
        sink(&head_line);
    } else if rules.contains(StyleRules::GRID_TOP) {
        sink(&grid_line);
    }

    let mut line = String::with_capacity(line_capacity(&layout, table, pos_x));
    let mut cursors = vec![0usize; columns];

    for i in 0..layout.rows {
        let row = layout.row(table.cells(), i);
        cursors.fill(0);
        loop {
            line.clear();
            let more = write_subrow(
                &mut line,
                table,
                &layout,
                row,
                &mut cursors,
                i == 0,
                rules,
                pos_x,
            );
            sink(&line);
            if !more {
                break;
            }
        }

        if i == 0 {
            if rules.contains(StyleRules::HEAD_AFTER_FIRST) {
                sink(&head_line);
            } else if rules.contains(StyleRules::GRID_AFTER_FIRST) {
                sink(&grid_line);
            }
        } else if i + 1 < layout.rows && rules.contains(StyleRules::GRID_BETWEEN) {
            sink(&grid_line);
        }
    }

    if rules.contains(StyleRules::GRID_BOTTOM) {
        sink(&grid_line);
    }

    emit_log(
        LogLevel::Debug,
        &format!("rendered {}x{columns} table ({style:?})", layout.rows),
    );
    Ok(())
}

/// Write one physical line of a logical row into `line`.
///
/// Returns true when at least one cell stopped at a newline, meaning the
/// row needs another pass. The newline is consumed here so the next pass
/// starts on the following segment and never reconsumes it.
#[allow(clippy::too_many_arguments)]
fn write_subrow(
    line: &mut String,
    table: &Table,
    layout: &Layout,
    row: &[Cell],
    cursors: &mut [usize],
    first_row: bool,
    rules: StyleRules,
    pos_x: usize,
) -> bool {
    let framed = rules.has_frame();
    let head_row = first_row && rules.contains(StyleRules::HEAD_ROW0);
    let (boundary, separator) = if head_row {
        (table.chars.head_boundary, table.chars.head_separator)
    } else {
        (table.chars.grid_boundary, table.chars.grid_separator)
    };

    push_spaces(line, pos_x);

    let mut more = false;
    for (j, cell) in row.iter().enumerate() {
        if j == 0 {
            if framed {
                line.push(boundary);
                push_spaces(line, table.padding);
            }
        } else {
            push_spaces(line, table.padding);
        }

        if let Some(prefix) = cell.prefix() {
            line.push_str(prefix);
        }
        let content = cell.content();
        for _ in 0..layout.columns[j].width {
            // The cursor stops at end-of-content or a newline; the rest of
            // the column is space-filled.
            match content[cursors[j]..].chars().next() {
                Some('\n') | None => line.push(' '),
                Some(c) => {
                    line.push(c);
                    cursors[j] += c.len_utf8();
                }
            }
        }
        if cell.prefix().is_some() {
            line.push_str(ansi::RESET);
        }

        if content[cursors[j]..].starts_with('\n') {
            more = true;
            cursors[j] += 1;
        }

        push_spaces(line, table.padding);
        if framed && j + 1 < row.len() {
            line.push(separator);
        }
    }
    if framed {
        line.push(boundary);
    }
    more
}

/// Build a horizontal divider line: `pos_x` leading spaces, a connector,
/// then `width + 2*padding` fill characters and a connector per column.
fn border_line(layout: &Layout, table: &Table, pos_x: usize, fill: char) -> String {
    let mut line = String::with_capacity(line_capacity(layout, table, pos_x));
    push_spaces(&mut line, pos_x);
    line.push(table.chars.connector);
    for m in &layout.columns {
        for _ in 0..(m.width + 2 * table.padding) {
            line.push(fill);
        }
        line.push(table.chars.connector);
    }
    line
}

/// Character capacity of the widest possible line of this render.
fn line_capacity(layout: &Layout, table: &Table, pos_x: usize) -> usize {
    let mut cap = pos_x + 1;
    for m in &layout.columns {
        cap += m.width + 2 * table.padding + 1;
        if m.prefix_width > 0 {
            cap += m.prefix_width + ansi::RESET.len();
        }
    }
    cap
}

fn push_spaces(line: &mut String, n: usize) {
    for _ in 0..n {
        line.push(' ');
    }
}
