//! Property-based tests for table rendering.
//!
//! Uses proptest to verify shape invariants that must hold across all
//! valid inputs: line counts, uniform line width, idempotence, and the
//! zero-output guarantee on failure.

use proptest::prelude::*;
use texttable::{Table, TableStyle};

/// Cell text: short printable ASCII segments joined by up to two newlines.
fn cell_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[ -~]{0,12}", 1..=3).prop_map(|segments| segments.join("\n"))
}

/// A table shape: rows x columns worth of cell texts.
fn table_shape() -> impl Strategy<Value = (Vec<String>, usize)> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(cell_text(), rows * columns)
            .prop_map(move |texts| (texts, columns))
    })
}

fn any_style() -> impl Strategy<Value = TableStyle> {
    prop::sample::select(TableStyle::ALL.to_vec())
}

fn build(texts: &[String]) -> Table {
    let mut table = Table::new();
    for text in texts {
        table.add(None, Some(text));
    }
    table
}

/// Expected physical line count: per-row sub-row totals plus the §4.4
/// divider schedule for the style.
fn expected_line_count(texts: &[String], columns: usize, style: TableStyle) -> usize {
    let rows = texts.len() / columns;
    let content: usize = (0..rows)
        .map(|i| {
            texts[i * columns..(i + 1) * columns]
                .iter()
                .map(|t| t.matches('\n').count() + 1)
                .max()
                .unwrap_or(1)
        })
        .sum();
    let dividers = match style {
        TableStyle::BorderedHeader => 3,
        TableStyle::Bordered => 2,
        TableStyle::SeparatedHeader | TableStyle::Separated => 3 + rows.saturating_sub(2),
        TableStyle::Compact => 0,
    };
    content + dividers
}

proptest! {
    /// Emitted line count matches the sub-row totals plus the divider
    /// schedule of the selected style.
    #[test]
    fn line_count_matches_schedule(
        (texts, columns) in table_shape(),
        style in any_style(),
    ) {
        let table = build(&texts);
        let mut count = 0usize;
        table.render(|_| count += 1, style, 0, columns).unwrap();
        prop_assert_eq!(count, expected_line_count(&texts, columns, style));
    }

    /// Every line of one render has the same character count (uniform
    /// table width), for every style and shift.
    #[test]
    fn lines_have_uniform_width(
        (texts, columns) in table_shape(),
        style in any_style(),
        pos_x in 0usize..=30,
    ) {
        let table = build(&texts);
        let mut widths = Vec::new();
        table
            .render(|l| widths.push(l.chars().count()), style, pos_x, columns)
            .unwrap();
        prop_assert!(!widths.is_empty());
        for w in &widths {
            prop_assert_eq!(*w, widths[0]);
        }
        // Every line carries the shift.
        prop_assert!(widths[0] > pos_x);
    }

    /// Rendering twice with identical arguments is byte-identical.
    #[test]
    fn render_is_idempotent(
        (texts, columns) in table_shape(),
        style in any_style(),
        pos_x in 0usize..=30,
    ) {
        let table = build(&texts);
        let first = table.render_to_string(style, pos_x, columns).unwrap();
        let second = table.render_to_string(style, pos_x, columns).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A failed render never calls the sink.
    #[test]
    fn failure_emits_nothing(
        (texts, columns) in table_shape(),
        style in any_style(),
        extra in 1usize..=3,
        pos_x in 31usize..=100,
    ) {
        // Shape mismatch: add cells so the count no longer divides evenly.
        let table = {
            let mut t = build(&texts);
            if columns > 1 {
                for i in 0..(extra.min(columns - 1)) {
                    t.add(None, Some(&format!("extra{i}")));
                }
            }
            t
        };
        let mut calls = 0usize;
        if columns > 1 {
            prop_assert!(table.render(|_| calls += 1, style, 0, columns).is_err());
        }
        // Out-of-range shift fails regardless of shape.
        prop_assert!(table.render(|_| calls += 1, style, pos_x, columns).is_err());
        // Zero columns always fails.
        prop_assert!(table.render(|_| calls += 1, style, 0, 0).is_err());
        prop_assert_eq!(calls, 0);
    }

    /// Render never panics for arbitrary argument combinations.
    #[test]
    fn render_never_panics(
        (texts, columns) in table_shape(),
        style in any_style(),
        pos_x in 0usize..=64,
        requested in 0usize..=8,
    ) {
        let table = build(&texts);
        let _ = table.render(|_| {}, style, pos_x, requested);
        let _ = table.render(|_| {}, style, pos_x, columns);
    }
}
