//! ANSI escape sequences used around cell content.
//!
//! The engine itself only ever emits [`RESET`], the fixed closing sequence
//! that follows a styled column region. The remaining constants and
//! builders exist for callers composing style prefixes.

/// Reset all attributes to default. Emitted automatically after the
/// content region of any cell that carries a style prefix.
pub const RESET: &str = "\x1b[0m";

/// Bold/increased intensity.
pub const BOLD: &str = "\x1b[1m";

/// Dim/decreased intensity.
pub const DIM: &str = "\x1b[2m";

/// Italic (not widely supported).
pub const ITALIC: &str = "\x1b[3m";

/// Underlined text.
pub const UNDERLINE: &str = "\x1b[4m";

/// Swapped foreground/background.
pub const INVERSE: &str = "\x1b[7m";

/// Generate an SGR sequence selecting a 256-color palette foreground.
#[must_use]
pub fn fg_256(idx: u8) -> String {
    format!("\x1b[38;5;{idx}m")
}

/// Generate an SGR sequence selecting a 256-color palette background.
#[must_use]
pub fn bg_256(idx: u8) -> String {
    format!("\x1b[48;5;{idx}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_sequences() {
        assert_eq!(fg_256(0), "\x1b[38;5;0m");
        assert_eq!(fg_256(196), "\x1b[38;5;196m");
        assert_eq!(bg_256(255), "\x1b[48;5;255m");
    }

    #[test]
    fn test_reset_is_sgr_zero() {
        assert_eq!(RESET.as_bytes(), &[0x1b, b'[', b'0', b'm']);
    }
}
