#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use std::collections::VecDeque;
    use taskdesk::db::tasks::Tasks;
    use taskdesk::libs::coordinator::Coordinator;
    use taskdesk::libs::messages::Message;
    use taskdesk::libs::presentation::{Intent, Presentation, Screen};
    use taskdesk::libs::task::{ImageUpdate, Status, Task, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Presentation that replays queued intents and records what it was told.
    #[derive(Default)]
    struct ScriptedPresentation {
        intents: VecDeque<Intent>,
        confirm_answer: bool,
        fail_detail: bool,
        listed: Vec<Task>,
        detail: Option<Task>,
        list_shown: usize,
        inputs_cleared: usize,
        errors: Vec<Message>,
        successes: Vec<Message>,
        confirmations: Vec<Message>,
    }

    impl Presentation for ScriptedPresentation {
        fn clear_tasks(&mut self) {
            self.listed.clear();
        }

        fn add_task(&mut self, task: &Task) {
            self.listed.push(task.clone());
        }

        fn clear_inputs(&mut self) {
            self.inputs_cleared += 1;
        }

        fn show_list(&mut self) -> Result<()> {
            self.list_shown += 1;
            self.detail = None;
            Ok(())
        }

        fn show_detail(&mut self, task: &Task) -> Result<()> {
            if self.fail_detail {
                return Err(anyhow!("detail view destroyed"));
            }
            self.detail = Some(task.clone());
            Ok(())
        }

        fn show_error(&mut self, message: &Message) {
            self.errors.push(message.clone());
        }

        fn show_success(&mut self, message: &Message) {
            self.successes.push(message.clone());
        }

        fn confirm(&mut self, message: &Message) -> Result<bool> {
            self.confirmations.push(message.clone());
            Ok(self.confirm_answer)
        }

        fn next_intent(&mut self) -> Result<Option<Intent>> {
            Ok(self.intents.pop_front())
        }
    }

    struct CoordinatorTestContext {
        _temp_dir: TempDir,
        coordinator: Coordinator<ScriptedPresentation>,
    }

    impl TestContext for CoordinatorTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(temp_dir.path().join("taskdesk.db")).unwrap();
            let coordinator = Coordinator::new(tasks, ScriptedPresentation::default());
            CoordinatorTestContext { _temp_dir: temp_dir, coordinator }
        }
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_create_trims_and_lists_task(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("  Buy milk  ", "  two litres ").unwrap();

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "two litres");
        assert_eq!(task.status, Status::Todo);

        let presentation = ctx.coordinator.presentation();
        assert_eq!(presentation.listed, vec![task.clone()]);
        assert_eq!(presentation.inputs_cleared, 1);
        assert_eq!(presentation.successes, vec![Message::TaskCreated(task.id, "Buy milk".to_string())]);
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_create_with_blank_title_writes_nothing(ctx: &mut CoordinatorTestContext) {
        assert!(ctx.coordinator.create("   ", "something").is_none());

        assert_eq!(ctx.coordinator.presentation().errors, vec![Message::TitleRequired]);
        assert_eq!(ctx.coordinator.presentation().inputs_cleared, 0);
        assert!(ctx.coordinator.tasks_mut().get_all().unwrap().is_empty());
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_open_unknown_task_stays_on_list(ctx: &mut CoordinatorTestContext) {
        assert!(!ctx.coordinator.open_detail(9999));

        assert_eq!(ctx.coordinator.screen(), Screen::List);
        assert_eq!(ctx.coordinator.presentation().errors, vec![Message::TaskNotFoundWithId(9999)]);
        assert!(ctx.coordinator.presentation().detail.is_none());
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_open_detail_switches_screen(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("Open me", "").unwrap();

        assert!(ctx.coordinator.open_detail(task.id));

        assert_eq!(ctx.coordinator.screen(), Screen::Detail(task.id));
        assert_eq!(ctx.coordinator.presentation().detail, Some(task));
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_detail_failure_keeps_list(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("Fragile", "").unwrap();
        ctx.coordinator.presentation_mut().fail_detail = true;

        assert!(!ctx.coordinator.open_detail(task.id));

        assert_eq!(ctx.coordinator.screen(), Screen::List);
        assert_eq!(ctx.coordinator.presentation().errors, vec![Message::DetailUnavailable]);
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_delete_declined_keeps_task(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("Keep me", "").unwrap();
        ctx.coordinator.presentation_mut().confirm_answer = false;

        assert!(!ctx.coordinator.delete(task.id));

        assert_eq!(ctx.coordinator.presentation().confirmations, vec![Message::ConfirmDeleteTask(task.id)]);
        assert!(ctx.coordinator.tasks_mut().get_by_id(task.id).unwrap().is_some());
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_delete_confirmed_reloads_list(ctx: &mut CoordinatorTestContext) {
        let doomed = ctx.coordinator.create("Remove me", "").unwrap();
        let survivor = ctx.coordinator.create("Stay", "").unwrap();
        ctx.coordinator.presentation_mut().confirm_answer = true;

        assert!(ctx.coordinator.delete(doomed.id));

        assert!(ctx.coordinator.tasks_mut().get_by_id(doomed.id).unwrap().is_none());
        assert_eq!(ctx.coordinator.presentation().listed, vec![survivor]);
        assert!(ctx.coordinator.presentation().successes.contains(&Message::TaskDeleted(doomed.id)));
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_change_status_inline(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("Progress", "").unwrap();

        assert!(ctx.coordinator.change_status(task.id, Status::Done));

        assert_eq!(ctx.coordinator.tasks_mut().get_by_id(task.id).unwrap().unwrap().status, Status::Done);
        assert!(ctx.coordinator.presentation().successes.contains(&Message::TaskStatusChanged(task.id, "Done".to_string())));
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_change_status_unknown_task_reports_error(ctx: &mut CoordinatorTestContext) {
        assert!(!ctx.coordinator.change_status(404, Status::Done));

        assert!(matches!(ctx.coordinator.presentation().errors.as_slice(), [Message::TaskStatusChangeFailed(_)]));
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_failed_status_change_reloads_list(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("Vanishing", "").unwrap();
        // Presentation already shows the new status
        ctx.coordinator.presentation_mut().listed[0].status = Status::Done;
        ctx.coordinator.tasks_mut().delete(task.id).unwrap();

        assert!(!ctx.coordinator.change_status(task.id, Status::Done));

        assert!(ctx.coordinator.presentation().listed.is_empty());
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_failed_status_change_on_missing_detail_returns_to_list(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("Open then gone", "").unwrap();
        ctx.coordinator.open_detail(task.id);
        ctx.coordinator.tasks_mut().delete(task.id).unwrap();

        assert!(!ctx.coordinator.change_status(task.id, Status::InProgress));

        assert_eq!(ctx.coordinator.screen(), Screen::List);
        assert!(ctx.coordinator.presentation().detail.is_none());
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_save_edit_returns_to_list(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("Edit me", "before").unwrap();
        ctx.coordinator.open_detail(task.id);
        let shown_before = ctx.coordinator.presentation().list_shown;

        let update = TaskUpdate::from_task(&task).with_description("after").with_status(Status::InProgress);
        assert!(ctx.coordinator.save_edit(update));

        assert_eq!(ctx.coordinator.screen(), Screen::List);
        let presentation = ctx.coordinator.presentation();
        assert_eq!(presentation.list_shown, shown_before + 1);
        assert_eq!(presentation.listed[0].description, "after");
        assert_eq!(presentation.listed[0].status, Status::InProgress);
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_save_edit_failure_stays_on_detail(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("Invalid", "").unwrap();
        ctx.coordinator.open_detail(task.id);

        let mut update = TaskUpdate::from_task(&task);
        update.status = "Blocked".to_string();
        assert!(!ctx.coordinator.save_edit(update));

        assert_eq!(ctx.coordinator.screen(), Screen::Detail(task.id));
        assert!(matches!(ctx.coordinator.presentation().errors.as_slice(), [Message::TaskSaveFailed(_)]));
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_image_update_refreshes_open_detail(ctx: &mut CoordinatorTestContext) {
        let task = ctx.coordinator.create("Pictured", "").unwrap();
        ctx.coordinator.open_detail(task.id);

        let update = TaskUpdate::from_task(&task).with_image(ImageUpdate::Set("images/task_banner.png".to_string()));
        assert!(ctx.coordinator.handle_image_update(update));

        let detail = ctx.coordinator.presentation().detail.clone().unwrap();
        assert_eq!(detail.image_path.as_deref(), Some("images/task_banner.png"));
        assert!(ctx.coordinator.presentation().successes.contains(&Message::BannerUpdated));

        let cleared = TaskUpdate::from_task(&detail).with_image(ImageUpdate::Clear);
        assert!(ctx.coordinator.handle_image_update(cleared));
        assert_eq!(ctx.coordinator.presentation().detail.as_ref().unwrap().image_path, None);
        assert!(ctx.coordinator.presentation().successes.contains(&Message::BannerRemoved));
    }

    #[test_context(CoordinatorTestContext)]
    #[test]
    fn test_run_dispatches_until_quit(ctx: &mut CoordinatorTestContext) {
        ctx.coordinator.presentation_mut().intents = VecDeque::from(vec![
            Intent::Create {
                title: "From the loop".to_string(),
                description: String::new(),
            },
            Intent::Create {
                title: String::new(),
                description: String::new(),
            },
        ]);

        ctx.coordinator.run().unwrap();

        let tasks = ctx.coordinator.tasks_mut().get_all().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "From the loop");
        assert_eq!(ctx.coordinator.presentation().errors, vec![Message::TitleRequired]);

        let id = tasks[0].id;
        ctx.coordinator.presentation_mut().intents = VecDeque::from(vec![Intent::OpenDetail(id), Intent::ChangeStatus(id, Status::Done), Intent::Back]);
        ctx.coordinator.run().unwrap();

        assert_eq!(ctx.coordinator.screen(), Screen::List);
        assert_eq!(ctx.coordinator.presentation().listed[0].status, Status::Done);
    }

    #[test]
    fn test_new_loads_existing_tasks() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("taskdesk.db");
        let mut tasks = Tasks::open(&path).unwrap();
        tasks.create("Older", "", Status::Todo).unwrap();

        let coordinator = Coordinator::new(Tasks::open(&path).unwrap(), ScriptedPresentation::default());

        assert_eq!(coordinator.presentation().listed.len(), 1);
        assert_eq!(coordinator.screen(), Screen::List);
    }
}
