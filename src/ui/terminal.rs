//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutfitterTheme, OutputMode, Table, UserInterface};

/// Terminal UI implementation.
///
/// Results and status go to stdout, warnings and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: OutfitterTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            OutfitterTheme::new()
        } else {
            OutfitterTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn output(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn show_table(&mut self, table: &Table) {
        for line in table.render().lines() {
            // Borders dimmed, cell text untouched
            let styled: String = line
                .chars()
                .map(|c| {
                    if "┌┬┐├┼┤└┴┘─│".contains(c) {
                        self.theme.border.apply_to(c).to_string()
                    } else {
                        c.to_string()
                    }
                })
                .collect();
            writeln!(self.out, "{}", styled).ok();
        }
    }
}

/// Create the terminal UI for `mode`.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
