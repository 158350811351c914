/*
[INPUT]:  Task collection and view-owned filter criteria
[OUTPUT]: Filtered, order-preserving task views
[POS]:    Query layer - derived view computation
[UPDATE]: When adding filter predicates
*/

use std::fmt;
use std::str::FromStr;

use taskflow_adapter::{Priority, Task, TaskStatus};

/// `all` or one specific value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> FromStr for Selector<T> {
    type Err = T::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Selector::All);
        }
        value.parse().map(Selector::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("all"),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub status: Selector<TaskStatus>,
    pub priority: Selector<Priority>,
    /// Case-insensitive substring of the title; empty matches everything
    pub search: String,
}

impl FilterCriteria {
    pub fn matches(&self, task: &Task) -> bool {
        if !self.status.matches(&task.status) {
            return false;
        }
        if !self.priority.matches(&task.priority) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        task.title
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

/// Ordered subsequence of `tasks` matching every predicate of `criteria`
pub fn derive(tasks: &[Task], criteria: &FilterCriteria) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| criteria.matches(task))
        .cloned()
        .collect()
}
