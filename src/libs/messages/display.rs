//! Display implementation for taskdesk application messages.
//!
//! All user-facing text lives here, in one `match`, so wording stays
//! consistent between the interactive screens and the one-shot commands.
//! Messages with dynamic content carry their parameters in the variant:
//!
//! ```rust
//! use taskdesk::libs::messages::Message;
//!
//! let message = Message::TaskNotFoundWithId(9999);
//! assert_eq!(message.to_string(), "Task with ID 9999 not found.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} '{}' created.", id, title),
            Message::TaskSaved(title) => format!("Task '{}' saved.", title),
            Message::TaskDeleted(id) => format!("Task #{} deleted.", id),
            Message::TaskStatusChanged(id, status) => format!("Task #{} is now '{}'.", id, status),
            Message::TitleRequired => "Please enter a task title.".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskCreateFailed(error) => format!("Failed to create task: {}", error),
            Message::TaskSaveFailed(error) => format!("Failed to save task: {}", error),
            Message::TaskDeleteFailed(error) => format!("Failed to delete task: {}", error),
            Message::TaskStatusChangeFailed(error) => format!("Failed to change status: {}", error),
            Message::TasksLoadFailed(error) => format!("Failed to load tasks: {}", error),
            Message::ConfirmDeleteTask(id) => format!("Delete task #{}? This cannot be undone.", id),
            Message::NoTasks => "No tasks yet. Add one to get started.".to_string(),
            Message::TasksHeader => "🗂️  My Tasks".to_string(),
            Message::DetailUnavailable => "The task view could not be displayed. Please restart the application.".to_string(),
            Message::ViewUnavailable(error) => format!("The task list could not be displayed: {}", error),
            Message::NoChangesGiven => "Nothing to change: pass --description and/or --status.".to_string(),

            // === BANNER MESSAGES ===
            Message::BannerUpdated => "Banner updated.".to_string(),
            Message::BannerRemoved => "Banner removed.".to_string(),
            Message::BannerImportFailed(error) => format!("Unable to upload the image: {}", error),
            Message::BannerRemoveFailed(error) => format!("Unable to remove the image: {}", error),
            Message::ImageUpdateFailed(error) => format!("Failed to record the banner change: {}", error),
            Message::NoBanner => "🖼️  No image".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleAppearance => "Appearance".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptSelectAction => "What would you like to do?".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),
            Message::PromptSelectStatus => "Status".to_string(),
            Message::PromptBannerPath => "Path to an image (png, jpg, jpeg, bmp)".to_string(),
            Message::PromptTheme => "Display theme".to_string(),

            // === MENU ENTRIES ===
            Message::MenuAddTask => "Add task".to_string(),
            Message::MenuOpenTask => "Open task".to_string(),
            Message::MenuChangeStatus => "Change status".to_string(),
            Message::MenuDeleteTask => "Delete task".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::MenuEditDescription => "Edit description".to_string(),
            Message::MenuUploadBanner => "Change banner".to_string(),
            Message::MenuRemoveBanner => "Remove banner".to_string(),
            Message::MenuSave => "💾 Save".to_string(),
            Message::MenuBack => "← Back".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
