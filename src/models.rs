//! Frontend Models
//!
//! Task record and view-layer value types, matching the backend wire format.

use serde::{Deserialize, Serialize};

/// Longest accepted task title, in characters after trimming.
pub const TITLE_MAX_CHARS: usize = 255;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub is_completed: bool,
    /// ISO-8601 creation timestamp, assigned by the backend (or locally
    /// when running without one).
    pub created_at: String,
}

impl Task {
    /// Build a locally generated record for the no-backend fallback path.
    pub fn local(id: u64, title: String, created_at: String) -> Self {
        Self {
            id,
            title,
            is_completed: false,
            created_at,
        }
    }
}

/// Which subset of the task cache is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

/// Filter tab options, in display order
pub const FILTERS: &[(TaskFilter, &str)] = &[
    (TaskFilter::All, "All"),
    (TaskFilter::Active, "Active"),
    (TaskFilter::Completed, "Completed"),
];

impl TaskFilter {
    pub fn shows_active(&self) -> bool {
        matches!(self, TaskFilter::All | TaskFilter::Active)
    }

    pub fn shows_completed(&self) -> bool {
        matches!(self, TaskFilter::All | TaskFilter::Completed)
    }
}

/// Split tasks into (active, completed), preserving relative order.
///
/// Every task lands in exactly one of the two subsets.
pub fn partition_tasks(tasks: &[Task]) -> (Vec<Task>, Vec<Task>) {
    tasks.iter().cloned().partition(|t| !t.is_completed)
}

/// Whether the empty indicator is shown: true exactly when the subsets
/// visible under `filter` contain zero tasks. Under `All`, one empty
/// section next to a populated one does not count.
pub fn no_visible_tasks(filter: TaskFilter, tasks: &[Task]) -> bool {
    match filter {
        TaskFilter::All => tasks.is_empty(),
        TaskFilter::Active => !tasks.iter().any(|t| !t.is_completed),
        TaskFilter::Completed => !tasks.iter().any(|t| t.is_completed),
    }
}

/// Title validation failure, surfaced inline before any remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    Empty,
    TooLong,
}

impl std::fmt::Display for TitleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleError::Empty => write!(f, "Please enter a task title"),
            TitleError::TooLong => {
                write!(f, "Task title is too long (max {} characters)", TITLE_MAX_CHARS)
            }
        }
    }
}

/// Trim and validate a raw title, returning the string to submit.
pub fn validate_title(raw: &str) -> Result<String, TitleError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TitleError::Empty);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(TitleError::TooLong);
    }
    Ok(title.to_string())
}

/// Delete confirmation state machine
///
/// `Idle` until a delete is requested; `Pending` while the confirmation
/// overlay is up. Confirm and cancel both return to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Pending(u64),
}

impl DeleteConfirm {
    pub fn request(self, id: u64) -> Self {
        DeleteConfirm::Pending(id)
    }

    pub fn cancel(self) -> Self {
        DeleteConfirm::Idle
    }

    pub fn pending_id(&self) -> Option<u64> {
        match self {
            DeleteConfirm::Pending(id) => Some(*id),
            DeleteConfirm::Idle => None,
        }
    }
}

/// UI color theme, persisted in localStorage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}
