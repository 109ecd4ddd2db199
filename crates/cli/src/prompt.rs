//! Interactive selection of versions and processes.

use dialoguer::Select;

/// Presents a list of choices and returns the selected one.
pub trait Chooser: Sync {
    /// Show `prompt` over `items` and return the chosen item.
    fn choose(&self, prompt: &str, items: &[String]) -> Result<String, String>;
}

/// Arrow-key selection on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalChooser;

impl Chooser for TerminalChooser {
    fn choose(&self, prompt: &str, items: &[String]) -> Result<String, String> {
        if items.is_empty() {
            return Err(format!("Nothing to choose from: {prompt}"));
        }
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|err| format!("Failed to read selection: {err}"))?;
        items
            .get(selection)
            .cloned()
            .ok_or_else(|| format!("Invalid selection {selection}"))
    }
}
