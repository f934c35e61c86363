//! Table styles and the divider/border policy table.
//!
//! The renderer never branches on the style directly: each [`TableStyle`]
//! maps to a set of [`StyleRules`] flags that say which border lines exist
//! and which character set (header or regular) each one uses. Adding a
//! style is a data change, not a code change.

use bitflags::bitflags;

bitflags! {
    /// Divider/border placement rules for one table style.
    ///
    /// `HEAD_*` flags select the header character set (`head_x`,
    /// `head_boundary`, `head_separator`); `GRID_*` flags select the
    /// regular set. At most one of the `*_TOP` and one of the
    /// `*_AFTER_FIRST` flags is set per style.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct StyleRules: u8 {
        /// Vertical boundary and separator characters are drawn at all.
        const BORDERS          = 0x01;
        /// Top border uses header characters.
        const HEAD_TOP         = 0x02;
        /// Top border uses regular characters.
        const GRID_TOP         = 0x04;
        /// Divider after the first logical row uses header characters.
        const HEAD_AFTER_FIRST = 0x08;
        /// Divider after the first logical row uses regular characters.
        const GRID_AFTER_FIRST = 0x10;
        /// Regular divider between every later pair of rows.
        const GRID_BETWEEN     = 0x20;
        /// Regular closing divider after the last row.
        const GRID_BOTTOM      = 0x40;
        /// Row 0 uses the header boundary/separator characters.
        const HEAD_ROW0        = 0x80;
    }
}

impl StyleRules {
    /// Whether any border line (top, divider, bottom) is ever drawn.
    #[must_use]
    pub const fn has_frame(self) -> bool {
        self.contains(Self::BORDERS)
    }
}

/// One of the five rendering styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TableStyle {
    /// Bordered, first row set off as a header:
    ///
    /// ```text
    /// +======+=======+
    /// | H1   | H2    |
    /// +======+=======+
    /// | R1C1 | R1C2  |
    /// | R2C1 | R2C2  |
    /// +------+-------+
    /// ```
    #[default]
    BorderedHeader,
    /// Bordered, no header emphasis:
    ///
    /// ```text
    /// +------+-------+
    /// | R1C1 | R1C2  |
    /// | R2C1 | R2C2  |
    /// +------+-------+
    /// ```
    Bordered,
    /// Header plus a divider between every row:
    ///
    /// ```text
    /// +======+=======+
    /// | H1   | H2    |
    /// +======+=======+
    /// | R1C1 | R1C2  |
    /// +------+-------+
    /// | R2C1 | R2C2  |
    /// +------+-------+
    /// ```
    SeparatedHeader,
    /// Divider between every row, no header emphasis.
    Separated,
    /// No borders or dividers; columns separated only by padding:
    ///
    /// ```text
    /// R1C1 R1C2
    /// R2C1 R2C2
    /// ```
    Compact,
}

impl TableStyle {
    /// All styles, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::BorderedHeader,
        Self::Bordered,
        Self::SeparatedHeader,
        Self::Separated,
        Self::Compact,
    ];

    /// The divider/border placement rules for this style.
    #[must_use]
    pub const fn rules(self) -> StyleRules {
        match self {
            Self::BorderedHeader => StyleRules::BORDERS
                .union(StyleRules::HEAD_TOP)
                .union(StyleRules::HEAD_AFTER_FIRST)
                .union(StyleRules::GRID_BOTTOM)
                .union(StyleRules::HEAD_ROW0),
            Self::Bordered => StyleRules::BORDERS
                .union(StyleRules::GRID_TOP)
                .union(StyleRules::GRID_BOTTOM),
            Self::SeparatedHeader => StyleRules::BORDERS
                .union(StyleRules::HEAD_TOP)
                .union(StyleRules::HEAD_AFTER_FIRST)
                .union(StyleRules::GRID_BETWEEN)
                .union(StyleRules::GRID_BOTTOM)
                .union(StyleRules::HEAD_ROW0),
            Self::Separated => StyleRules::BORDERS
                .union(StyleRules::GRID_TOP)
                .union(StyleRules::GRID_AFTER_FIRST)
                .union(StyleRules::GRID_BETWEEN)
                .union(StyleRules::GRID_BOTTOM),
            Self::Compact => StyleRules::empty(),
        }
    }
}

/// The seven single-character border knobs.
///
/// Mutable fields on the table; may be changed between renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    /// Fill character of regular divider lines.
    pub grid_x: char,
    /// Left/right boundary of regular rows.
    pub grid_boundary: char,
    /// Column separator within regular rows.
    pub grid_separator: char,
    /// Fill character of header divider lines.
    pub head_x: char,
    /// Left/right boundary of the header row.
    pub head_boundary: char,
    /// Column separator within the header row.
    pub head_separator: char,
    /// Corner/junction character of divider lines.
    pub connector: char,
}

impl Default for BorderChars {
    fn default() -> Self {
        Self {
            grid_x: '-',
            grid_boundary: '|',
            grid_separator: '|',
            head_x: '=',
            head_boundary: '|',
            head_separator: '|',
            connector: '+',
        }
    }
}
