/*
[INPUT]:  Store snapshots, notifications, profile, theme flag
[OUTPUT]: Styled terminal output
[POS]:    CLI layer - presentation only, no state
[UPDATE]: When changing how tasks or feedback are displayed
*/

use console::{StyledObject, style};

use taskflow_adapter::{Priority, Task, TaskStatus, UserProfile};
use taskflow_client::{Notification, NotificationKind, StatusCounts, ValidationErrors};

/// Color choices for the light and dark themes
pub struct Palette {
    dark: bool,
}

impl Palette {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn header(&self, text: &str) -> StyledObject<String> {
        let styled = style(text.to_string()).bold();
        if self.dark { styled.cyan().bright() } else { styled.blue() }
    }

    fn muted(&self, text: String) -> StyledObject<String> {
        if self.dark { style(text).white().dim() } else { style(text).dim() }
    }

    fn priority(&self, priority: Priority) -> StyledObject<&'static str> {
        let styled = style(priority.label());
        let styled = match priority {
            Priority::High => styled.red(),
            Priority::Medium => styled.yellow(),
            Priority::Low => styled.green(),
        };
        if self.dark { styled.bright() } else { styled }
    }

    fn status(&self, status: TaskStatus) -> StyledObject<&'static str> {
        let styled = style(status.label());
        let styled = match status {
            TaskStatus::Completed => styled.green(),
            TaskStatus::InProgress => styled.cyan(),
            TaskStatus::Pending => styled.magenta(),
        };
        if self.dark { styled.bright() } else { styled }
    }
}

pub fn theme(dark: bool) {
    let name = if dark { "dark" } else { "light" };
    println!("Theme: {}", style(name).bold());
}

pub fn notification(palette: &Palette, notification: Option<&Notification>) {
    let Some(notification) = notification else {
        return;
    };
    let banner = match notification.kind {
        NotificationKind::Success => style(format!("✓ {}", notification.message)).green(),
        NotificationKind::Error => style(format!("✗ {}", notification.message)).red(),
    };
    let banner = if palette.dark { banner.bright() } else { banner };
    println!("{banner}");
}

pub fn validation(palette: &Palette, errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        println!(
            "  {} {}",
            palette.muted(format!("{field}:")),
            style(message).red()
        );
    }
}

/// `total` is the size of the unfiltered collection; it picks the empty-state hint
pub fn tasks(palette: &Palette, visible: &[Task], total: usize, counts: StatusCounts) {
    println!(
        "\n{}",
        palette.header(&format!(
            "Tasks ({} total, {} pending, {} in progress, {} completed)",
            counts.total, counts.pending, counts.in_progress, counts.completed
        ))
    );

    if visible.is_empty() {
        println!("{}", style("No tasks found").yellow());
        let hint = if total == 0 {
            "Create your first task to get started"
        } else {
            "Try changing your filters"
        };
        println!("{}", palette.muted(hint.to_string()));
        return;
    }

    for task in visible {
        task_row(palette, task);
    }
}

fn task_row(palette: &Palette, task: &Task) {
    let marker = if task.is_completed() { "[x]" } else { "[ ]" };
    let title = if task.is_completed() {
        style(task.title.clone()).strikethrough().dim()
    } else {
        style(task.title.clone()).bold()
    };
    println!(
        "{} {} {}  {}  {}",
        marker,
        palette.muted(format!("#{}", task.id)),
        title,
        palette.priority(task.priority),
        palette.status(task.status)
    );
    if !task.description.is_empty() {
        println!("      {}", task.description);
    }
    if let Some(due) = task.due_date {
        println!(
            "      {}",
            palette.muted(format!("Due {}", due.format("%b %-d, %Y")))
        );
    }
}

pub fn profile(palette: &Palette, profile: &UserProfile) {
    println!("{}", palette.header("Profile"));
    let rows = [
        ("Name", profile.full_name()),
        ("Email", profile.email().unwrap_or("Not provided").to_string()),
        ("Phone", profile.phone().to_string()),
        (
            "Last login",
            profile
                .last_login()
                .map(|at| at.format("%b %-d, %Y %H:%M").to_string())
                .unwrap_or_else(|| "Never".to_string()),
        ),
        (
            "Member since",
            profile
                .created_on()
                .map(|at| at.format("%b %-d, %Y").to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
    ];
    for (label, value) in rows {
        println!("  {} {}", palette.muted(format!("{label}:")), value);
    }
}
