//! Stage types and status transitions.
//!
//! This module contains the core state machine types for roadmap stages:
//! - [`StageStatus`] - Where a stage sits relative to the progress frontier
//! - [`Category`] - The kind of growth a stage trains
//! - [`Stage`] - One milestone on the skills mountain

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Stage Status
// ============================================================================

/// Status of a stage relative to the progress frontier.
///
/// # State Transitions
///
/// - `Locked` -> `Current`: The preceding stage was completed
/// - `Current` -> `Completed`: The user completed the stage
///
/// Strictly forward; a stage never skips `Current` and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// Stage is gated behind earlier stages
    #[default]
    Locked,
    /// Stage is the single frontier eligible for completion
    Current,
    /// Stage has been completed
    Completed,
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageStatus::Locked => write!(f, "locked"),
            StageStatus::Current => write!(f, "current"),
            StageStatus::Completed => write!(f, "completed"),
        }
    }
}

impl StageStatus {
    /// Check if this status can transition to the target status.
    ///
    /// # Example
    ///
    /// ```
    /// use lifepath::roadmap::StageStatus;
    ///
    /// assert!(StageStatus::Locked.can_transition_to(StageStatus::Current));
    /// assert!(!StageStatus::Completed.can_transition_to(StageStatus::Current));
    /// ```
    #[must_use]
    pub fn can_transition_to(&self, target: StageStatus) -> bool {
        use StageStatus::*;
        matches!((self, target), (Locked, Current) | (Current, Completed))
    }

    /// Check if this status is the terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, StageStatus::Completed)
    }
}

// ============================================================================
// Category
// ============================================================================

/// The kind of growth a stage trains.
///
/// Fixed enumeration used for theming and filtering, never for logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Practical abilities (deep work, leading projects)
    Skills,
    /// Recurring behaviors (morning intentions, daily reading)
    Habits,
    /// Courses and certifications
    Academics,
    /// Attitude and framing work
    Mindset,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Skills => write!(f, "Skills"),
            Category::Habits => write!(f, "Habits"),
            Category::Academics => write!(f, "Academics"),
            Category::Mindset => write!(f, "Mindset"),
        }
    }
}

// ============================================================================
// Stage
// ============================================================================

/// One milestone on a user's skills mountain.
///
/// Stages are created once at roadmap-generation time and only ever
/// mutated through [`Roadmap::complete_stage`](crate::roadmap::Roadmap::complete_stage).
///
/// # Example
///
/// ```
/// use lifepath::roadmap::{Category, Stage, StageStatus};
///
/// let stage = Stage::new("1", "Morning Intention Setting", Category::Habits, 50)
///     .with_description("Write your top 3 priorities for the day")
///     .with_duration("5 min")
///     .with_reward("Early Bird Badge");
/// assert_eq!(stage.status, StageStatus::Locked);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    /// Unique identifier within the roadmap
    pub id: String,
    /// Short display title
    pub title: String,
    /// Longer description of what the stage asks for
    pub description: String,
    /// Growth category
    pub category: Category,
    /// Free-text effort label ("5 min", "2 weeks", "Ongoing")
    pub duration: String,
    /// XP awarded on completion
    pub xp: u32,
    /// Optional reward label surfaced on completion
    pub reward: Option<String>,
    /// Position relative to the progress frontier
    pub status: StageStatus,
}

impl Stage {
    /// Create a locked stage with the required fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        xp: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category,
            duration: String::new(),
            xp,
            reward: None,
            status: StageStatus::Locked,
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

    /// Set the reward label.
    #[must_use]
    pub fn with_reward(mut self, reward: impl Into<String>) -> Self {
        self.reward = Some(reward.into());
        self
    }

    /// Set the initial status (used when seeding a partially climbed mountain).
    #[must_use]
    pub fn with_status(mut self, status: StageStatus) -> Self {
        self.status = status;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_status_default() {
        assert_eq!(StageStatus::default(), StageStatus::Locked);
    }

    #[test]
    fn test_stage_status_display() {
        assert_eq!(StageStatus::Locked.to_string(), "locked");
        assert_eq!(StageStatus::Current.to_string(), "current");
        assert_eq!(StageStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_stage_status_forward_transitions() {
        assert!(StageStatus::Locked.can_transition_to(StageStatus::Current));
        assert!(StageStatus::Current.can_transition_to(StageStatus::Completed));
    }

    #[test]
    fn test_stage_status_no_skip() {
        assert!(!StageStatus::Locked.can_transition_to(StageStatus::Completed));
    }

    #[test]
    fn test_stage_status_no_revert() {
        assert!(!StageStatus::Completed.can_transition_to(StageStatus::Current));
        assert!(!StageStatus::Completed.can_transition_to(StageStatus::Locked));
        assert!(!StageStatus::Current.can_transition_to(StageStatus::Locked));
    }

    #[test]
    fn test_stage_status_is_terminal() {
        assert!(!StageStatus::Locked.is_terminal());
        assert!(!StageStatus::Current.is_terminal());
        assert!(StageStatus::Completed.is_terminal());
    }

    #[test]
    fn test_stage_status_serialize_lowercase() {
        let json = serde_json::to_string(&StageStatus::Current).unwrap();
        assert_eq!(json, "\"current\"");
    }

    #[test]
    fn test_category_roundtrip() {
        let json = serde_json::to_string(&Category::Mindset).unwrap();
        assert_eq!(json, "\"mindset\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Mindset);
    }

    #[test]
    fn test_stage_builder() {
        let stage = Stage::new("3", "Build Daily Reading Habit", Category::Habits, 300)
            .with_description("Read 30 minutes daily")
            .with_duration("30 min/day")
            .with_reward("Book Worm Title")
            .with_status(StageStatus::Current);

        assert_eq!(stage.id, "3");
        assert_eq!(stage.xp, 300);
        assert_eq!(stage.duration, "30 min/day");
        assert_eq!(stage.reward.as_deref(), Some("Book Worm Title"));
        assert_eq!(stage.status, StageStatus::Current);
    }

    #[test]
    fn test_stage_defaults_to_locked() {
        let stage = Stage::new("9", "Apply for Leadership Roles", Category::Skills, 1500);
        assert_eq!(stage.status, StageStatus::Locked);
        assert!(stage.reward.is_none());
        assert!(stage.description.is_empty());
    }
}
