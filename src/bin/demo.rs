//! Demo of the table styles, ANSI-styled cells, and 256-color swatches.
//!
//! Run with `cargo run --bin demo`. Styled output assumes a terminal with
//! ANSI passthrough enabled; enabling it is the caller's job.

use texttable::{Table, TableStyle, ansi};

fn print_line(line: &str) {
    println!("{line}");
}

fn style_showcase() {
    let mut table = Table::new();
    for head in ["Headline1", "Headline2", "Headline3", "Headline4"] {
        table.add(None, Some(head));
    }
    for text in [
        "Row2 Column1",
        "Row2 Column2",
        "Row2 Column3",
        "Row2 Column4",
    ] {
        table.add(None, Some(text));
    }
    table.add(None, Some("Row3.1 Column1"));
    table.add(
        None,
        Some(&format!(
            "Row3.1 Column2\nRow3.2 Column2 '{}'\nRow3.n Column2 ...",
            "some text"
        )),
    );
    table.add(None, Some(&format!("Row3.1 Column3 int: '{}'", 4711)));
    table.add(None, Some("Row3.1 Column4"));
    for text in [
        "Row n Column1",
        "Row n Column2",
        "Row n Column3",
        "Row n Column4",
    ] {
        table.add(None, Some(text));
    }

    let styles = [
        ("BorderedHeader", TableStyle::BorderedHeader),
        ("Bordered", TableStyle::Bordered),
        ("SeparatedHeader", TableStyle::SeparatedHeader),
        ("Separated", TableStyle::Separated),
        ("Compact", TableStyle::Compact),
    ];
    for (shift, (name, style)) in styles.into_iter().enumerate() {
        println!("\n {name}");
        table
            .render(print_line, style, shift, 4)
            .expect("showcase table renders");
    }
}

fn styled_cells() {
    println!("\n BorderedHeader - styled cells");
    let mut table = Table::new();
    table.add(Some(ansi::UNDERLINE), Some("Head1 underlined"));
    table.add(Some(ansi::UNDERLINE), Some("Head2 underlined"));
    table.add(Some(ansi::UNDERLINE), Some("Head3 underlined"));
    table.add(Some("\x1b[0;34m"), Some("Row2 Column1 blue"));
    table.add(None, Some("Row2.1 Column2\nRow2.2 Column2"));
    table.add(Some("\x1b[46;37m"), Some("Row2 Column3\ncyan"));
    table.add(None, Some("Row3 Column1"));
    table.add(Some("\x1b[0;33m"), Some("Row3 Column2 yellow"));
    table.add(None, Some("Row3 Column3"));
    table
        .render(print_line, TableStyle::BorderedHeader, 0, 3)
        .expect("styled table renders");
}

fn color_swatches(title: &str, range: std::ops::Range<u16>, columns: usize, sample: &str) {
    println!("\n {title}");
    let mut table = Table::new();
    table.padding = 0;
    for i in range {
        let idx = u8::try_from(i).expect("palette index fits in u8");
        table.add(Some(&ansi::bg_256(idx)), Some(sample));
    }
    table
        .render(print_line, TableStyle::Compact, 0, columns)
        .expect("swatch table renders");
}

fn main() {
    style_showcase();
    styled_cells();
    color_swatches("16 standard and high intensity colors", 0..16, 16, "  ");
    color_swatches("216 colors", 16..232, 36, "  ");
    color_swatches("Grayscale colors", 232..256, 24, "  ");
}
