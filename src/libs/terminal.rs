//! Interactive terminal front end.
//!
//! Renders the task list and the detail card with prettytable and drives
//! the menus with dialoguer. Banner files are handled here, before the
//! coordinator is told about the new path; everything else is turned into
//! an [`Intent`] untouched.

use super::banner::BannerStore;
use super::config::Theme;
use super::messages::Message;
use super::presentation::{Intent, Presentation};
use super::task::{ImageUpdate, Status, Task, TaskUpdate};
use super::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{Confirm, Editor, Input, Select};
use std::path::Path;

#[derive(Debug, Clone)]
enum TerminalScreen {
    List,
    /// Detail card. Status changes are stored right away and patched into
    /// `task`; only the description is an unsaved draft.
    Detail { task: Task, description: String },
}

#[derive(Debug, Clone, Copy)]
enum ListAction {
    Add,
    Open,
    ChangeStatus,
    Delete,
}

#[derive(Debug, Clone, Copy)]
enum DetailAction {
    EditDescription,
    ChangeStatus,
    UploadBanner,
    RemoveBanner,
    Save,
    Back,
}

pub struct TerminalPresentation {
    theme: Theme,
    dialog_theme: Box<dyn dialoguer::theme::Theme>,
    banners: BannerStore,
    tasks: Vec<Task>,
    screen: TerminalScreen,
    inputs: (String, String),
    dirty: bool,
}

impl TerminalPresentation {
    pub fn new(theme: Theme, banners: BannerStore) -> Self {
        Self {
            theme,
            dialog_theme: theme.dialog_theme(),
            banners,
            tasks: Vec::new(),
            screen: TerminalScreen::List,
            inputs: (String::new(), String::new()),
            dirty: false,
        }
    }

    fn render(&self, screen: &TerminalScreen) -> Result<()> {
        match screen {
            TerminalScreen::List => {
                msg_print!(Message::TasksHeader, true);
                if self.tasks.is_empty() {
                    msg_info!(Message::NoTasks);
                    Ok(())
                } else {
                    View::tasks(&self.tasks, self.theme)
                }
            }
            TerminalScreen::Detail { task, description } => {
                let mut draft = task.clone();
                draft.description = description.clone();
                View::task_detail(&draft, self.theme)
            }
        }
    }

    fn select(&self, prompt: &Message, items: &[String], default: usize) -> Result<Option<usize>> {
        let selection = Select::with_theme(self.dialog_theme.as_ref())
            .with_prompt(prompt.to_string())
            .items(items)
            .default(default)
            .interact_opt()?;
        Ok(selection)
    }

    fn pick_task(&self) -> Result<Option<i64>> {
        if self.tasks.is_empty() {
            msg_info!(Message::NoTasks);
            return Ok(None);
        }
        let items: Vec<String> = self.tasks.iter().map(|task| format!("#{} {} [{}]", task.id, task.title, task.status)).collect();
        Ok(self.select(&Message::PromptSelectTask, &items, 0)?.map(|index| self.tasks[index].id))
    }

    fn pick_status(&self, current: Status) -> Result<Option<Status>> {
        let items: Vec<String> = Status::ALL.iter().map(|status| status.label().to_string()).collect();
        let default = Status::ALL.iter().position(|status| *status == current).unwrap_or(0);
        Ok(self.select(&Message::PromptSelectStatus, &items, default)?.map(|index| Status::ALL[index]))
    }

    fn prompt_text(&self, prompt: &Message, initial: &str) -> Result<String> {
        let text = Input::<String>::with_theme(self.dialog_theme.as_ref())
            .with_prompt(prompt.to_string())
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok(text)
    }

    fn list_intent(&mut self) -> Result<Option<Intent>> {
        let actions = [
            (ListAction::Add, Message::MenuAddTask),
            (ListAction::Open, Message::MenuOpenTask),
            (ListAction::ChangeStatus, Message::MenuChangeStatus),
            (ListAction::Delete, Message::MenuDeleteTask),
        ];
        loop {
            let mut items: Vec<String> = actions.iter().map(|(_, label)| label.to_string()).collect();
            items.push(Message::MenuQuit.to_string());

            let action = match self.select(&Message::PromptSelectAction, &items, 0)? {
                Some(index) if index < actions.len() => actions[index].0,
                _ => return Ok(None),
            };

            match action {
                ListAction::Add => {
                    let title = self.prompt_text(&Message::PromptTaskTitle, &self.inputs.0)?;
                    let description = self.prompt_text(&Message::PromptTaskDescription, &self.inputs.1)?;
                    // Kept until the coordinator confirms the create.
                    self.inputs = (title.clone(), description.clone());
                    return Ok(Some(Intent::Create { title, description }));
                }
                ListAction::Open => {
                    if let Some(id) = self.pick_task()? {
                        return Ok(Some(Intent::OpenDetail(id)));
                    }
                }
                ListAction::ChangeStatus => {
                    let Some(id) = self.pick_task()? else { continue };
                    let current = self.tasks.iter().find(|task| task.id == id).map(|task| task.status).unwrap_or_default();
                    if let Some(status) = self.pick_status(current)? {
                        return Ok(Some(self.status_intent(id, status)));
                    }
                }
                ListAction::Delete => {
                    if let Some(id) = self.pick_task()? {
                        return Ok(Some(Intent::Delete(id)));
                    }
                }
            }
        }
    }

    fn detail_intent(&mut self) -> Result<Option<Intent>> {
        loop {
            let TerminalScreen::Detail { task, description } = self.screen.clone() else {
                return Ok(None);
            };

            let mut actions = vec![
                (DetailAction::EditDescription, Message::MenuEditDescription),
                (DetailAction::ChangeStatus, Message::MenuChangeStatus),
                (DetailAction::UploadBanner, Message::MenuUploadBanner),
            ];
            if task.image_path.is_some() {
                actions.push((DetailAction::RemoveBanner, Message::MenuRemoveBanner));
            }
            actions.push((DetailAction::Save, Message::MenuSave));
            actions.push((DetailAction::Back, Message::MenuBack));

            let items: Vec<String> = actions.iter().map(|(_, label)| label.to_string()).collect();
            let action = match self.select(&Message::PromptSelectAction, &items, 0)? {
                Some(index) => actions[index].0,
                None => DetailAction::Back,
            };

            match action {
                DetailAction::EditDescription => {
                    if let Some(edited) = Editor::new().edit(&description)? {
                        self.set_draft_description(edited.trim_end().to_string());
                        self.render(&self.screen)?;
                    }
                }
                DetailAction::ChangeStatus => {
                    if let Some(new_status) = self.pick_status(task.status)? {
                        return Ok(Some(self.status_intent(task.id, new_status)));
                    }
                }
                DetailAction::UploadBanner => {
                    let source = self.prompt_text(&Message::PromptBannerPath, "")?;
                    let source = source.trim();
                    if source.is_empty() {
                        msg_info!(Message::OperationCancelled);
                        continue;
                    }
                    match self.banners.import(task.id, Path::new(source)) {
                        Ok(stored) => {
                            let image = ImageUpdate::Set(stored.to_string_lossy().into_owned());
                            return Ok(self.banner_update(image).map(Intent::ImageChanged));
                        }
                        Err(err) => {
                            tracing::warn!(id = task.id, error = %err, "banner import failed");
                            msg_error!(Message::BannerImportFailed(err.to_string()));
                        }
                    }
                }
                DetailAction::RemoveBanner => {
                    let Some(path) = task.image_path.as_deref() else { continue };
                    match self.banners.remove(Path::new(path)) {
                        Ok(()) => return Ok(self.banner_update(ImageUpdate::Clear).map(Intent::ImageChanged)),
                        Err(err) => msg_error!(Message::BannerRemoveFailed(err.to_string())),
                    }
                }
                DetailAction::Save => return Ok(self.save_update().map(Intent::Save)),
                DetailAction::Back => return Ok(Some(Intent::Back)),
            }
        }
    }

    fn set_draft_description(&mut self, description: String) {
        if let TerminalScreen::Detail { description: draft, .. } = &mut self.screen {
            *draft = description;
        }
    }

    /// Inline status change. The store is updated by the coordinator before
    /// anything is reloaded, so the shown copies are patched here; a failed
    /// change is undone by the coordinator's reload.
    fn status_intent(&mut self, id: i64, status: Status) -> Intent {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.status = status;
        }
        if let TerminalScreen::Detail { task, .. } = &mut self.screen {
            if task.id == id {
                task.status = status;
            }
        }
        Intent::ChangeStatus(id, status)
    }

    /// Banner change for the open task. Leaves the description draft out so
    /// only the image column changes.
    fn banner_update(&self, image: ImageUpdate) -> Option<TaskUpdate> {
        match &self.screen {
            TerminalScreen::Detail { task, .. } => Some(TaskUpdate::from_task(task).with_image(image)),
            TerminalScreen::List => None,
        }
    }

    fn save_update(&self) -> Option<TaskUpdate> {
        match &self.screen {
            TerminalScreen::Detail { task, description } => Some(TaskUpdate::from_task(task).with_description(description.clone())),
            TerminalScreen::List => None,
        }
    }
}

impl Presentation for TerminalPresentation {
    fn clear_tasks(&mut self) {
        self.tasks.clear();
    }

    fn add_task(&mut self, task: &Task) {
        self.tasks.push(task.clone());
    }

    fn clear_inputs(&mut self) {
        self.inputs = (String::new(), String::new());
    }

    fn show_list(&mut self) -> Result<()> {
        self.render(&TerminalScreen::List)?;
        self.screen = TerminalScreen::List;
        self.dirty = false;
        Ok(())
    }

    fn show_detail(&mut self, task: &Task) -> Result<()> {
        // A refresh of the same task keeps the unsaved description.
        let description = match &self.screen {
            TerminalScreen::Detail { task: current, description } if current.id == task.id => description.clone(),
            _ => task.description.clone(),
        };
        let screen = TerminalScreen::Detail { task: task.clone(), description };
        self.render(&screen)?;
        self.screen = screen;
        self.dirty = false;
        Ok(())
    }

    fn show_error(&mut self, message: &Message) {
        msg_error!(message);
    }

    fn show_success(&mut self, message: &Message) {
        msg_success!(message);
    }

    fn confirm(&mut self, message: &Message) -> Result<bool> {
        let confirmed = Confirm::with_theme(self.dialog_theme.as_ref())
            .with_prompt(message.to_string())
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    fn next_intent(&mut self) -> Result<Option<Intent>> {
        if self.dirty {
            self.render(&self.screen)?;
            self.dirty = false;
        }
        let intent = match self.screen {
            TerminalScreen::List => self.list_intent()?,
            TerminalScreen::Detail { .. } => self.detail_intent()?,
        };
        self.dirty = intent.is_some();
        Ok(intent)
    }
}
