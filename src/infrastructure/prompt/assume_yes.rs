//! Non-interactive prompter adapter

use async_trait::async_trait;
use colored::*;

use crate::application::ports::Prompter;

/// Prompter that answers every question with "yes".
///
/// Used for unattended runs; questions and errors are still echoed to
/// stderr so the log shows what was decided.
pub struct AssumeYesPrompter;

impl AssumeYesPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AssumeYesPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompter for AssumeYesPrompter {
    async fn ask_yes_no(&self, title: &str, message: &str) -> bool {
        eprintln!("{} {}: {} [yes]", "?".yellow(), title.bold(), message);
        true
    }

    async fn show_error(&self, title: &str, message: &str) {
        eprintln!("{} {}: {}", "✗".red(), title.bold(), message);
    }

    async fn pick_folder(&self, _title: &str) -> Option<String> {
        None
    }
}
