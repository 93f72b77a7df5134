use super::config::Theme;
use super::messages::Message;
use super::task::{Status, Task};
use anyhow::Result;
use chrono::{Local, NaiveDateTime, TimeZone};
use prettytable::{format, row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints the task list, one row per task.
    pub fn tasks(tasks: &[Task], theme: Theme) -> Result<()> {
        let mut table = Self::table(theme);

        table.set_titles(row![b->"ID", b->"TITLE", b->"STATUS", b->"BANNER", b->"UPDATED"]);
        for task in tasks {
            table.add_row(Row::new(vec![
                Cell::new(&task.id.to_string()),
                Cell::new(&task.title),
                Self::status_cell(task.status, theme),
                Cell::new(if task.image_path.is_some() { "🖼️" } else { "" }),
                Cell::new(&format_timestamp(task.updated_at)),
            ]));
        }
        table.print_tty(false)?;

        Ok(())
    }

    /// Prints a single task as a two-column card.
    pub fn task_detail(task: &Task, theme: Theme) -> Result<()> {
        let mut table = Self::table(theme);

        table.set_titles(Row::new(vec![Cell::new(&format!("#{}", task.id)).style_spec("b"), Cell::new(&task.title).style_spec("b")]));
        table.add_row(Row::new(vec![Cell::new("Status"), Self::status_cell(task.status, theme)]));
        table.add_row(row!["Description", task.description]);
        let banner = match &task.image_path {
            Some(path) => path.clone(),
            None => Message::NoBanner.to_string(),
        };
        table.add_row(row!["Banner", banner]);
        table.add_row(row!["Created", format_timestamp(task.created_at)]);
        table.add_row(row!["Updated", format_timestamp(task.updated_at)]);
        table.print_tty(false)?;

        Ok(())
    }

    fn table(theme: Theme) -> Table {
        let mut table = Table::new();
        match theme {
            Theme::Colorful => table.set_format(*format::consts::FORMAT_BOX_CHARS),
            Theme::Plain => table.set_format(*format::consts::FORMAT_DEFAULT),
        }
        table
    }

    fn status_cell(status: Status, theme: Theme) -> Cell {
        let cell = Cell::new(status.label());
        match (theme, status) {
            (Theme::Plain, _) => cell,
            (Theme::Colorful, Status::Todo) => cell.style_spec("Fy"),
            (Theme::Colorful, Status::InProgress) => cell.style_spec("Fb"),
            (Theme::Colorful, Status::Done) => cell.style_spec("Fg"),
        }
    }
}

/// Store timestamps are UTC; show them in local time.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    Local.from_utc_datetime(&timestamp).format("%Y-%m-%d %H:%M").to_string()
}
