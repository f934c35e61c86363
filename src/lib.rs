//! `texttable` - Aligned ASCII/ANSI text tables
//!
//! A small layout engine that turns a flat, row-major sequence of cell
//! values into an aligned text table: per-column widths, multi-line cell
//! wrapping, and line-by-line delivery through a caller-supplied sink.
//!
//! # Usage
//!
//! ```
//! use texttable::{Table, TableStyle};
//!
//! let mut table = Table::new();
//! table.add(None, Some("Name"));
//! table.add(None, Some("Value"));
//! table.add(None, Some("answer"));
//! table.add(None, Some("42"));
//!
//! table
//!     .render(|line| println!("{line}"), TableStyle::BorderedHeader, 0, 2)
//!     .unwrap();
//! ```
//!
//! Cells may contain embedded newlines; a logical row then spans several
//! physical output lines with the other columns padded. An optional ANSI
//! style prefix per cell is closed automatically with [`ansi::RESET`].

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow TableStyle, ColumnMetrics etc
#![allow(clippy::missing_errors_doc)] // Error conditions documented on Error
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod ansi;
pub mod cell;
pub mod error;
pub mod event;
pub mod metrics;
pub mod render;
pub mod style;
pub mod table;

// Re-export core types at crate root
pub use cell::{Cell, MAX_CONTENT_LEN, MAX_PREFIX_LEN};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use metrics::{ColumnMetrics, Layout};
pub use render::MAX_POS_X;
pub use style::{BorderChars, StyleRules, TableStyle};
pub use table::Table;
