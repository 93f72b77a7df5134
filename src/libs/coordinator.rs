//! Mediates between the presentation and the task repository.
//!
//! The coordinator enforces the one business rule (a task needs a title),
//! forwards every user intent to [`Tasks`], and tells the presentation what
//! to show afterwards. Repository failures stop here: each one becomes a
//! `show_error` call and the loop carries on.
//!
//! Screens form a two-state machine driven from here:
//!
//! ```text
//!  List ──open_detail(id)──▶ Detail(id)
//!   ▲                            │
//!   └──────── back / save ───────┘
//! ```

use super::messages::Message;
use super::presentation::{Intent, Presentation, Screen};
use super::task::{ImageUpdate, Status, Task, TaskUpdate};
use crate::db::tasks::Tasks;
use crate::msg_debug;
use anyhow::Result;

pub struct Coordinator<P: Presentation> {
    tasks: Tasks,
    presentation: P,
    screen: Screen,
}

impl<P: Presentation> Coordinator<P> {
    /// Takes ownership of both sides and loads every task into the view.
    pub fn new(tasks: Tasks, presentation: P) -> Self {
        let mut coordinator = Self {
            tasks,
            presentation,
            screen: Screen::List,
        };
        coordinator.load_all();
        coordinator
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn tasks_mut(&mut self) -> &mut Tasks {
        &mut self.tasks
    }

    /// Interactive loop: shows the list, then handles intents until the
    /// presentation reports quit. Only presentation I/O errors escape.
    pub fn run(&mut self) -> Result<()> {
        self.show_list();
        while let Some(intent) = self.presentation.next_intent()? {
            self.dispatch(intent);
        }
        Ok(())
    }

    pub fn dispatch(&mut self, intent: Intent) {
        msg_debug!("dispatching {:?} on {:?}", intent, self.screen);
        match intent {
            Intent::Create { title, description } => {
                self.create(&title, &description);
            }
            Intent::OpenDetail(id) => {
                self.open_detail(id);
            }
            Intent::Delete(id) => {
                self.delete(id);
            }
            Intent::ChangeStatus(id, status) => {
                self.change_status(id, status);
            }
            Intent::Save(update) => {
                self.save_edit(update);
            }
            Intent::ImageChanged(update) => {
                self.handle_image_update(update);
            }
            Intent::Back => self.return_to_list(),
        }
    }

    /// Replaces the displayed list with every stored task.
    pub fn load_all(&mut self) -> bool {
        self.presentation.clear_tasks();
        match self.tasks.get_all() {
            Ok(tasks) => {
                for task in &tasks {
                    self.presentation.add_task(task);
                }
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "loading tasks failed");
                self.presentation.show_error(&Message::TasksLoadFailed(err.to_string()));
                false
            }
        }
    }

    pub fn show_list(&mut self) {
        self.screen = Screen::List;
        if let Err(err) = self.presentation.show_list() {
            tracing::error!(error = %err, "list view failed");
            self.presentation.show_error(&Message::ViewUnavailable(err.to_string()));
        }
    }

    pub fn create(&mut self, title: &str, description: &str) -> Option<Task> {
        let title = title.trim();
        if title.is_empty() {
            self.presentation.show_error(&Message::TitleRequired);
            return None;
        }

        match self.tasks.create(title, description.trim(), Status::Todo) {
            Ok(task) => {
                self.presentation.add_task(&task);
                self.presentation.clear_inputs();
                self.presentation.show_success(&Message::TaskCreated(task.id, task.title.clone()));
                Some(task)
            }
            Err(err) => {
                tracing::error!(error = %err, "task creation failed");
                self.presentation.show_error(&Message::TaskCreateFailed(err.to_string()));
                None
            }
        }
    }

    /// Asks for confirmation, deletes, then reloads the whole list.
    pub fn delete(&mut self, id: i64) -> bool {
        match self.presentation.confirm(&Message::ConfirmDeleteTask(id)) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(err) => {
                self.presentation.show_error(&Message::TaskDeleteFailed(err.to_string()));
                return false;
            }
        }

        match self.tasks.delete(id) {
            Ok(()) => {
                self.load_all();
                self.presentation.show_success(&Message::TaskDeleted(id));
                true
            }
            Err(err) => {
                tracing::error!(id, error = %err, "task deletion failed");
                self.presentation.show_error(&Message::TaskDeleteFailed(err.to_string()));
                false
            }
        }
    }

    pub fn open_detail(&mut self, id: i64) -> bool {
        let task = match self.tasks.get_by_id(id) {
            Ok(Some(task)) => task,
            Ok(None) => {
                self.presentation.show_error(&Message::TaskNotFoundWithId(id));
                return false;
            }
            Err(err) => {
                self.presentation.show_error(&Message::TasksLoadFailed(err.to_string()));
                return false;
            }
        };

        match self.presentation.show_detail(&task) {
            Ok(()) => {
                self.screen = Screen::Detail(id);
                true
            }
            Err(err) => {
                tracing::error!(id, error = %err, "detail view failed");
                self.screen = Screen::List;
                self.presentation.show_error(&Message::DetailUnavailable);
                false
            }
        }
    }

    /// Goes back to the list, reloading it so edits show up.
    pub fn return_to_list(&mut self) {
        self.load_all();
        self.show_list();
    }

    /// Inline status change; the view is only refreshed when the change
    /// fails, to drop the status the presentation already shows.
    pub fn change_status(&mut self, id: i64, status: Status) -> bool {
        match self.tasks.update_status_only(id, status.as_str()) {
            Ok(()) => {
                self.presentation.show_success(&Message::TaskStatusChanged(id, status.label().to_string()));
                true
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "status change failed");
                self.presentation.show_error(&Message::TaskStatusChangeFailed(err.to_string()));
                self.load_all();
                if self.screen == Screen::Detail(id) {
                    self.refresh_detail(id);
                }
                false
            }
        }
    }

    fn refresh_detail(&mut self, id: i64) {
        match self.tasks.get_by_id(id) {
            Ok(Some(task)) => {
                if let Err(err) = self.presentation.show_detail(&task) {
                    tracing::warn!(id, error = %err, "detail refresh failed");
                }
            }
            // Gone from the store: nothing left to show.
            Ok(None) => self.show_list(),
            Err(err) => self.presentation.show_error(&Message::TasksLoadFailed(err.to_string())),
        }
    }

    /// Saves a detail edit and returns to the list; on failure the detail
    /// screen stays so the user can retry.
    pub fn save_edit(&mut self, update: TaskUpdate) -> bool {
        match self.tasks.update_full(&update) {
            Ok(task) => {
                self.presentation.show_success(&Message::TaskSaved(task.title));
                self.return_to_list();
                true
            }
            Err(err) => {
                self.presentation.show_error(&Message::TaskSaveFailed(err.to_string()));
                false
            }
        }
    }

    /// Records a banner stored or removed by the presentation.
    pub fn handle_image_update(&mut self, update: TaskUpdate) -> bool {
        let cleared = update.image == ImageUpdate::Clear;
        match self.tasks.update_full(&update) {
            Ok(task) => {
                if self.screen == Screen::Detail(task.id) {
                    if let Err(err) = self.presentation.show_detail(&task) {
                        tracing::warn!(id = task.id, error = %err, "detail refresh failed");
                    }
                }
                let message = if cleared { Message::BannerRemoved } else { Message::BannerUpdated };
                self.presentation.show_success(&message);
                true
            }
            Err(err) => {
                tracing::warn!(id = update.id, error = %err, "banner change not recorded");
                self.presentation.show_error(&Message::ImageUpdateFailed(err.to_string()));
                false
            }
        }
    }
}
