//! Terminal output for the `outfitter` binary.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] writing styled output with `console`
//! - [`MockUI`] capturing output for assertions
//! - [`Table`] for installer listings
//!
//! # Example
//!
//! ```
//! use outfitter::ui::{MockUI, Table, UserInterface};
//!
//! let mut ui = MockUI::new();
//! let mut table = Table::new(["Key", "Name"]);
//! table.add_row(["exec:1.0.1", "Exec"]);
//! ui.show_table(&table);
//! ui.success("1 installer");
//!
//! assert!(ui.has_output("exec:1.0.1"));
//! assert!(ui.has_success("1 installer"));
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, OutfitterTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Errors are shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Print a command result (a document, a listing line).
    fn output(&mut self, text: &str);

    /// Print a table as a command result.
    fn show_table(&mut self, table: &Table) {
        self.output(&table.render());
    }
}
