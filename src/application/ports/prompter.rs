//! Prompter port interface

use async_trait::async_trait;

/// Port for modal user prompts.
///
/// Every call suspends the calling session until the user has answered.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question.
    ///
    /// # Returns
    /// true if the user answered yes
    async fn ask_yes_no(&self, title: &str, message: &str) -> bool;

    /// Show an error message and wait for acknowledgement.
    async fn show_error(&self, title: &str, message: &str);

    /// Let the user pick a folder.
    ///
    /// # Returns
    /// The chosen folder, or None if the user dismissed the picker
    async fn pick_folder(&self, title: &str) -> Option<String>;
}

/// Blanket implementation for boxed prompter types
#[async_trait]
impl Prompter for Box<dyn Prompter> {
    async fn ask_yes_no(&self, title: &str, message: &str) -> bool {
        self.as_ref().ask_yes_no(title, message).await
    }

    async fn show_error(&self, title: &str, message: &str) {
        self.as_ref().show_error(title, message).await
    }

    async fn pick_folder(&self, title: &str) -> Option<String> {
        self.as_ref().pick_folder(title).await
    }
}
