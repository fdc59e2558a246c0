//! Prompt infrastructure module
//!
//! Provides terminal prompts, or automatic answers for unattended runs.

mod assume_yes;
mod terminal;

pub use assume_yes::AssumeYesPrompter;
pub use terminal::{is_yes, TerminalPrompter};

use crate::application::ports::Prompter;

/// Create the prompter for the current run
pub fn create_prompter(assume_yes: bool) -> Box<dyn Prompter> {
    if assume_yes {
        Box::new(AssumeYesPrompter::new())
    } else {
        Box::new(TerminalPrompter::new())
    }
}
