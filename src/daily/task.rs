//! Daily task types.
//!
//! A daily task is unrelated to a roadmap [`Stage`](crate::roadmap::Stage)
//! despite the visual similarity: it lives for one day, has a one-way
//! completed flag, and may be optional.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Task Kind
// ============================================================================

/// Which slot of the day a task fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// The day's primary skill work
    Main,
    /// A recurring habit builder
    Habit,
    /// A bonus challenge
    Challenge,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Main => write!(f, "Main Skill"),
            TaskKind::Habit => write!(f, "Habit Builder"),
            TaskKind::Challenge => write!(f, "Bonus Challenge"),
        }
    }
}

// ============================================================================
// Daily Task
// ============================================================================

/// One entry in today's plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTask {
    /// Unique identifier within the plan
    pub id: String,
    /// Short display title
    pub title: String,
    /// Longer description of what to do
    pub description: String,
    /// Slot this task fills
    pub kind: TaskKind,
    /// Free-text effort label ("5 min", "25 min")
    pub duration: String,
    /// XP awarded on completion
    pub xp: u32,
    /// One-way completion flag
    pub completed: bool,
    /// Optional tasks do not gate the daily reward
    pub optional: bool,
}

impl DailyTask {
    /// Create a required, incomplete task.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: TaskKind, xp: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            kind,
            duration: String::new(),
            xp,
            completed: false,
            optional: false,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the effort label.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Mark the task optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

// ============================================================================
// Custom Task Spec
// ============================================================================

/// Input for a user-authored task.
///
/// Validated and turned into a [`DailyTask`] by
/// [`DailyPlan::add_custom`](crate::daily::DailyPlan::add_custom).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomTaskSpec {
    /// Title, required non-empty after trimming
    pub title: String,
    /// Optional description
    pub description: String,
    /// Slot the task fills
    pub kind: TaskKind,
    /// Free-text effort label
    pub duration: String,
    /// XP awarded on completion
    pub xp: u32,
}

/// Generate a client-side task id with a millisecond timestamp suffix.
///
/// `taken` disambiguates ids minted within the same millisecond.
#[must_use]
pub fn generate_task_id(taken: &[&str]) -> String {
    let base = format!("custom-{}", Utc::now().timestamp_millis());
    if !taken.contains(&base.as_str()) {
        return base;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.contains(&candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_kind_display() {
        assert_eq!(TaskKind::Main.to_string(), "Main Skill");
        assert_eq!(TaskKind::Habit.to_string(), "Habit Builder");
        assert_eq!(TaskKind::Challenge.to_string(), "Bonus Challenge");
    }

    #[test]
    fn test_task_kind_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskKind::Challenge).unwrap(),
            "\"challenge\""
        );
    }

    #[test]
    fn test_task_builder_defaults() {
        let task = DailyTask::new("1", "Morning Intention Setting", TaskKind::Habit, 30);
        assert!(!task.completed);
        assert!(!task.optional);
        assert!(task.duration.is_empty());
    }

    #[test]
    fn test_task_builder_optional() {
        let task = DailyTask::new("3", "Learn a New Concept", TaskKind::Challenge, 50)
            .with_duration("15 min")
            .optional();
        assert!(task.optional);
        assert_eq!(task.duration, "15 min");
    }

    #[test]
    fn test_generate_task_id_has_timestamp_suffix() {
        let id = generate_task_id(&[]);
        let suffix = id.strip_prefix("custom-").unwrap();
        assert!(suffix.parse::<i64>().is_ok());
    }

    #[test]
    fn test_generate_task_id_disambiguates_collisions() {
        let first = generate_task_id(&[]);
        let second = generate_task_id(&[&first]);
        assert_ne!(first, second);
        let third = generate_task_id(&[&first, &second]);
        assert_ne!(third, first);
        assert_ne!(third, second);
    }
}
