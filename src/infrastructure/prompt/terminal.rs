//! Terminal prompter adapter

use std::io::Write;

use async_trait::async_trait;
use colored::*;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

use crate::application::ports::Prompter;

/// Prompter that asks on stderr and reads answers line by line.
///
/// End of input counts as "no" and as a dismissed folder picker.
pub struct TerminalPrompter<R = BufReader<Stdin>> {
    input: Mutex<R>,
}

impl TerminalPrompter {
    /// Create a prompter reading from stdin
    pub fn new() -> Self {
        Self::with_input(BufReader::new(io::stdin()))
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncBufRead + Unpin + Send> TerminalPrompter<R> {
    /// Create a prompter reading from `input`
    pub fn with_input(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }

    async fn read_answer(&self, prompt: &str) -> Option<String> {
        eprint!("{}", prompt);
        let _ = std::io::stderr().flush();

        let mut line = String::new();
        let mut input = self.input.lock().await;
        match input.read_line(&mut line).await {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// Interpret a yes/no answer
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Prompter for TerminalPrompter<R> {
    async fn ask_yes_no(&self, title: &str, message: &str) -> bool {
        let prompt = format!("{} {}: {} [y/N] ", "?".yellow(), title.bold(), message);
        self.read_answer(&prompt)
            .await
            .is_some_and(|answer| is_yes(&answer))
    }

    async fn show_error(&self, title: &str, message: &str) {
        eprintln!("{} {}: {}", "✗".red(), title.bold(), message);
    }

    async fn pick_folder(&self, title: &str) -> Option<String> {
        let prompt = format!("{} {} ", "?".yellow(), title);
        self.read_answer(&prompt)
            .await
            .filter(|folder| !folder.is_empty())
    }
}
