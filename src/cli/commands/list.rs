//! List command implementation.
//!
//! The `outfitter list` command shows registered installers, either all of
//! them or a single page.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::installer::InstallerDescriptor;
use crate::registry::InstallerRegistry;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Page size used when only `--skip-count` is given.
const DEFAULT_PAGE_SIZE: usize = 50;

/// The list command implementation.
pub struct ListCommand<'a> {
    registry: &'a dyn InstallerRegistry,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(registry: &'a dyn InstallerRegistry, args: ListArgs) -> Self {
        Self { registry, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn table(installers: &[InstallerDescriptor], verbose: bool) -> Table {
        let mut headers = vec!["Key", "Name", "Dependencies"];
        if verbose {
            headers.push("Description");
        }

        let mut table = Table::new(headers);
        for installer in installers {
            let mut row = vec![
                installer.key().to_string(),
                installer.name.clone(),
                installer.dependencies.join(", "),
            ];
            if verbose {
                row.push(installer.description.clone());
            }
            table.add_row(row);
        }
        table
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let paged = self.args.max_items.is_some() || self.args.skip_count > 0;

        let (installers, footer) = if paged {
            let max_items = self.args.max_items.unwrap_or(DEFAULT_PAGE_SIZE);
            let page = self
                .registry
                .get_installers_page(max_items, self.args.skip_count)?;

            let shown = page.items().len();
            let mut footer = format!(
                "Showing {} of {} installers (skipped {})",
                shown,
                page.total_items_count(),
                self.args.skip_count
            );
            if let Some(next) = page.next_page_ref() {
                footer.push_str(&format!(
                    "; next page: --max-items {} --skip-count {}",
                    next.page_size, next.item_offset
                ));
            }
            (page.into_items(), footer)
        } else {
            let installers = self.registry.get_installers()?;
            let footer = format!("{} installers", installers.len());
            (installers, footer)
        };

        if self.args.json {
            ui.output(&serde_json::to_string_pretty(&installers)?);
            return Ok(CommandResult::success());
        }

        if installers.is_empty() {
            ui.warning("No installers registered");
        } else {
            let verbose = ui.output_mode().shows_details();
            ui.show_table(&Self::table(&installers, verbose));
        }
        ui.message(&footer);

        Ok(CommandResult::success())
    }
}
