//! Roadmap store and stage progression engine.
//!
//! This module owns the ordered list of stages that make up a user's
//! skills mountain and enforces the single rule that keeps it coherent:
//! statuses read in order always form a prefix of completed stages,
//! then at most one current stage, then locked stages.
//!
//! # Architecture
//!
//! ```text
//! Roadmap
//!   ├── stages: Vec<Stage>        - ordered, never removed in-session
//!   ├── complete_stage(id)        - the only mutation; atomic reject-or-apply
//!   └── summary()                 - pure aggregate query
//! ```
//!
//! # Example
//!
//! ```
//! use lifepath::roadmap::{Category, Roadmap, Stage, StageStatus};
//!
//! let roadmap = Roadmap::new(vec![
//!     Stage::new("a", "First", Category::Habits, 50),
//!     Stage::new("b", "Second", Category::Skills, 100),
//! ]).unwrap();
//!
//! assert_eq!(roadmap.current().unwrap().id, "a");
//! ```

mod stage;

pub use stage::{Category, Stage, StageStatus};

use serde::{Deserialize, Serialize};

use crate::error::{LifePathError, Result};

// ============================================================================
// Completion Receipt
// ============================================================================

/// What a successful stage completion emits to the caller.
///
/// The engine reports the XP and reward label so the session layer can
/// aggregate lifetime XP and surface the celebration; the engine itself
/// owns neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCompletion {
    /// Id of the stage that was completed
    pub stage_id: String,
    /// XP awarded by the completed stage
    pub xp_awarded: u32,
    /// Reward label attached to the stage, if any
    pub reward: Option<String>,
    /// Id of the stage that became current, if a successor exists
    pub unlocked: Option<String>,
}

// ============================================================================
// Summary
// ============================================================================

/// Aggregate progress over a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapSummary {
    /// Number of completed stages
    pub completed: usize,
    /// Total number of stages
    pub total: usize,
    /// Completion percentage, rounded to the nearest integer
    pub percent: u32,
    /// Sum of XP over completed stages
    pub total_xp: u32,
}

// ============================================================================
// Roadmap
// ============================================================================

/// Ordered stage list with enforced monotonic progression.
///
/// Constructed once per session from an injected stage list; the only
/// mutation is [`complete_stage`](Roadmap::complete_stage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    stages: Vec<Stage>,
}

impl Roadmap {
    /// Build a roadmap from an ordered stage list.
    ///
    /// The list must already be monotonic (`completed* current? locked*`).
    /// A list with no current stage and at least one locked stage has its
    /// first locked stage promoted to current, so a freshly generated
    /// all-locked list starts at stage zero.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::CorruptRoadmap`] when statuses are out of
    /// order or more than one stage is current.
    pub fn new(stages: Vec<Stage>) -> Result<Self> {
        validate_order(&stages)?;

        let mut roadmap = Self { stages };
        let has_current = roadmap
            .stages
            .iter()
            .any(|s| s.status == StageStatus::Current);
        if !has_current {
            if let Some(first_locked) = roadmap
                .stages
                .iter_mut()
                .find(|s| s.status == StageStatus::Locked)
            {
                first_locked.status = StageStatus::Current;
            }
        }
        Ok(roadmap)
    }

    /// Complete the stage with the given id.
    ///
    /// Only the current stage is eligible. The check happens before any
    /// mutation, so a rejected call leaves the list untouched.
    ///
    /// # Errors
    ///
    /// - [`LifePathError::StageNotFound`] for an unknown id
    /// - [`LifePathError::StageNotEligible`] when the stage is locked or
    ///   already completed
    ///
    /// # Example
    ///
    /// ```
    /// use lifepath::roadmap::{Category, Roadmap, Stage};
    ///
    /// let mut roadmap = Roadmap::new(vec![
    ///     Stage::new("a", "First", Category::Habits, 50).with_reward("Badge"),
    ///     Stage::new("b", "Second", Category::Skills, 100),
    /// ]).unwrap();
    ///
    /// let receipt = roadmap.complete_stage("a").unwrap();
    /// assert_eq!(receipt.xp_awarded, 50);
    /// assert_eq!(receipt.unlocked.as_deref(), Some("b"));
    /// ```
    pub fn complete_stage(&mut self, stage_id: &str) -> Result<StageCompletion> {
        let index = self
            .stages
            .iter()
            .position(|s| s.id == stage_id)
            .ok_or_else(|| LifePathError::stage_not_found(stage_id))?;

        let status = self.stages[index].status;
        if status != StageStatus::Current {
            return Err(LifePathError::StageNotEligible {
                id: stage_id.to_string(),
                status,
            });
        }

        self.stages[index].status = StageStatus::Completed;
        let unlocked = if index + 1 < self.stages.len() {
            self.stages[index + 1].status = StageStatus::Current;
            Some(self.stages[index + 1].id.clone())
        } else {
            None
        };

        debug_assert!(validate_order(&self.stages).is_ok());

        let stage = &self.stages[index];
        tracing::info!(stage = %stage.id, xp = stage.xp, "stage completed");

        Ok(StageCompletion {
            stage_id: stage.id.clone(),
            xp_awarded: stage.xp,
            reward: stage.reward.clone(),
            unlocked,
        })
    }

    /// Aggregate progress over the roadmap.
    ///
    /// # Example
    ///
    /// ```
    /// use lifepath::roadmap::{Category, Roadmap, Stage};
    ///
    /// let mut roadmap = Roadmap::new(vec![
    ///     Stage::new("a", "First", Category::Habits, 50),
    ///     Stage::new("b", "Second", Category::Skills, 100),
    ///     Stage::new("c", "Third", Category::Mindset, 200),
    /// ]).unwrap();
    /// roadmap.complete_stage("a").unwrap();
    ///
    /// let summary = roadmap.summary();
    /// assert_eq!(summary.completed, 1);
    /// assert_eq!(summary.percent, 33);
    /// assert_eq!(summary.total_xp, 50);
    /// ```
    #[must_use]
    pub fn summary(&self) -> RoadmapSummary {
        let total = self.stages.len();
        let completed = self
            .stages
            .iter()
            .filter(|s| s.status == StageStatus::Completed)
            .count();
        let total_xp = self
            .stages
            .iter()
            .filter(|s| s.status == StageStatus::Completed)
            .map(|s| s.xp)
            .sum();
        let percent = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u32
        };

        RoadmapSummary {
            completed,
            total,
            percent,
            total_xp,
        }
    }

    /// The frontier stage eligible for completion, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Stage> {
        self.stages
            .iter()
            .find(|s| s.status == StageStatus::Current)
    }

    /// Look up a stage by id.
    #[must_use]
    pub fn get(&self, stage_id: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == stage_id)
    }

    /// All stages in defined order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Check if every stage has been completed (terminal state).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.stages.is_empty()
            && self
                .stages
                .iter()
                .all(|s| s.status == StageStatus::Completed)
    }

    /// Check the monotonic-status invariant.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        validate_order(&self.stages).is_ok()
    }
}

/// Validate that statuses form `completed* current? locked*`.
fn validate_order(stages: &[Stage]) -> Result<()> {
    let mut current_seen = 0usize;
    let mut last_rank = 0u8;
    for stage in stages {
        let rank = match stage.status {
            StageStatus::Completed => 0,
            StageStatus::Current => 1,
            StageStatus::Locked => 2,
        };
        if rank < last_rank {
            return Err(LifePathError::corrupt_roadmap(format!(
                "stage '{}' is {} after a {} stage",
                stage.id,
                stage.status,
                match last_rank {
                    1 => "current",
                    2 => "locked",
                    _ => "completed",
                }
            )));
        }
        if stage.status == StageStatus::Current {
            current_seen += 1;
            if current_seen > 1 {
                return Err(LifePathError::corrupt_roadmap(format!(
                    "stage '{}' is a second current stage",
                    stage.id
                )));
            }
        }
        last_rank = rank;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stage_roadmap() -> Roadmap {
        Roadmap::new(vec![
            Stage::new("A", "First", Category::Habits, 50).with_status(StageStatus::Current),
            Stage::new("B", "Second", Category::Skills, 100),
            Stage::new("C", "Third", Category::Mindset, 200),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_promotes_first_locked_to_current() {
        let roadmap = Roadmap::new(vec![
            Stage::new("a", "First", Category::Habits, 10),
            Stage::new("b", "Second", Category::Skills, 20),
        ])
        .unwrap();

        assert_eq!(roadmap.current().unwrap().id, "a");
        assert_eq!(roadmap.stages()[1].status, StageStatus::Locked);
    }

    #[test]
    fn test_new_keeps_preseeded_frontier() {
        let roadmap = Roadmap::new(vec![
            Stage::new("a", "First", Category::Habits, 10).with_status(StageStatus::Completed),
            Stage::new("b", "Second", Category::Skills, 20).with_status(StageStatus::Current),
            Stage::new("c", "Third", Category::Mindset, 30),
        ])
        .unwrap();

        assert_eq!(roadmap.current().unwrap().id, "b");
        assert_eq!(roadmap.summary().completed, 1);
    }

    #[test]
    fn test_new_accepts_terminal_roadmap() {
        let roadmap = Roadmap::new(vec![
            Stage::new("a", "First", Category::Habits, 10).with_status(StageStatus::Completed),
            Stage::new("b", "Second", Category::Skills, 20).with_status(StageStatus::Completed),
        ])
        .unwrap();

        assert!(roadmap.is_complete());
        assert!(roadmap.current().is_none());
    }

    #[test]
    fn test_new_rejects_out_of_order_statuses() {
        let err = Roadmap::new(vec![
            Stage::new("a", "First", Category::Habits, 10),
            Stage::new("b", "Second", Category::Skills, 20).with_status(StageStatus::Completed),
        ])
        .unwrap_err();

        assert!(matches!(err, LifePathError::CorruptRoadmap { .. }));
    }

    #[test]
    fn test_new_rejects_two_current_stages() {
        let err = Roadmap::new(vec![
            Stage::new("a", "First", Category::Habits, 10).with_status(StageStatus::Current),
            Stage::new("b", "Second", Category::Skills, 20).with_status(StageStatus::Current),
        ])
        .unwrap_err();

        assert!(matches!(err, LifePathError::CorruptRoadmap { .. }));
    }

    #[test]
    fn test_complete_stage_advances_frontier() {
        let mut roadmap = three_stage_roadmap();

        let receipt = roadmap.complete_stage("A").unwrap();

        assert_eq!(receipt.xp_awarded, 50);
        assert_eq!(receipt.unlocked.as_deref(), Some("B"));
        assert_eq!(roadmap.stages()[0].status, StageStatus::Completed);
        assert_eq!(roadmap.stages()[1].status, StageStatus::Current);
        assert_eq!(roadmap.stages()[2].status, StageStatus::Locked);

        let summary = roadmap.summary();
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percent, 33);
        assert_eq!(summary.total_xp, 50);
    }

    #[test]
    fn test_complete_stage_unknown_id() {
        let mut roadmap = three_stage_roadmap();
        let err = roadmap.complete_stage("Z").unwrap_err();
        assert!(matches!(err, LifePathError::StageNotFound { .. }));
    }

    #[test]
    fn test_complete_locked_stage_rejected_without_mutation() {
        let mut roadmap = three_stage_roadmap();
        let before: Vec<_> = roadmap.stages().iter().map(|s| s.status).collect();

        let err = roadmap.complete_stage("C").unwrap_err();

        assert!(matches!(
            err,
            LifePathError::StageNotEligible {
                status: StageStatus::Locked,
                ..
            }
        ));
        let after: Vec<_> = roadmap.stages().iter().map(|s| s.status).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_complete_stage_twice_rejected() {
        let mut roadmap = three_stage_roadmap();
        roadmap.complete_stage("A").unwrap();

        let err = roadmap.complete_stage("A").unwrap_err();

        assert!(matches!(
            err,
            LifePathError::StageNotEligible {
                status: StageStatus::Completed,
                ..
            }
        ));
        // The frontier did not advance past B.
        assert_eq!(roadmap.current().unwrap().id, "B");
        assert_eq!(roadmap.summary().completed, 1);
    }

    #[test]
    fn test_complete_last_stage_is_terminal() {
        let mut roadmap = three_stage_roadmap();
        roadmap.complete_stage("A").unwrap();
        roadmap.complete_stage("B").unwrap();
        let receipt = roadmap.complete_stage("C").unwrap();

        assert!(receipt.unlocked.is_none());
        assert!(roadmap.is_complete());
        assert!(roadmap.current().is_none());
        assert_eq!(roadmap.summary().percent, 100);
        assert_eq!(roadmap.summary().total_xp, 350);
    }

    #[test]
    fn test_order_invariant_holds_across_full_climb() {
        let mut roadmap = three_stage_roadmap();
        for id in ["A", "B", "C"] {
            assert!(roadmap.is_ordered());
            roadmap.complete_stage(id).unwrap();
        }
        assert!(roadmap.is_ordered());
    }

    #[test]
    fn test_summary_total_xp_matches_completed_sum() {
        let mut roadmap = three_stage_roadmap();
        roadmap.complete_stage("A").unwrap();
        roadmap.complete_stage("B").unwrap();

        let expected: u32 = roadmap
            .stages()
            .iter()
            .filter(|s| s.status == StageStatus::Completed)
            .map(|s| s.xp)
            .sum();
        assert_eq!(roadmap.summary().total_xp, expected);
        assert_eq!(roadmap.summary().total_xp, 150);
    }

    #[test]
    fn test_summary_empty_roadmap() {
        let roadmap = Roadmap::new(Vec::new()).unwrap();
        let summary = roadmap.summary();
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percent, 0);
        assert_eq!(summary.total_xp, 0);
        assert!(!roadmap.is_complete());
    }

    #[test]
    fn test_get_by_id() {
        let roadmap = three_stage_roadmap();
        assert_eq!(roadmap.get("B").unwrap().title, "Second");
        assert!(roadmap.get("missing").is_none());
    }
}
