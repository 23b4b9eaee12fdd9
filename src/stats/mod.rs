//! Levels, achievements, and the weekly view.
//!
//! Pure arithmetic over session state. Achievements are computed on
//! demand from a snapshot, never stored, so they can neither go stale
//! nor be lost.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Level Track
// ============================================================================

/// XP-within-level bookkeeping.
///
/// Levels start at 1. Each level requires `150 + 50 * level` XP, so the
/// bar keeps growing as the climb gets steeper. Overflow carries across
/// multiple level-ups in a single grant.
///
/// # Example
///
/// ```
/// use lifepath::stats::LevelTrack;
///
/// let mut track = LevelTrack::new();
/// assert_eq!(track.xp_to_next(), 200);
/// let gained = track.grant(250);
/// assert_eq!(gained, 1);
/// assert_eq!(track.level, 2);
/// assert_eq!(track.xp_into_level, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTrack {
    /// Current level, starting at 1
    pub level: u32,
    /// XP accumulated toward the next level
    pub xp_into_level: u32,
}

impl LevelTrack {
    /// Start at level 1 with no XP.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: 1,
            xp_into_level: 0,
        }
    }

    /// XP required to finish the current level.
    #[must_use]
    pub fn xp_to_next(&self) -> u32 {
        150 + 50 * self.level
    }

    /// Grant XP, carrying overflow across level-ups.
    ///
    /// Returns the number of levels gained.
    pub fn grant(&mut self, xp: u32) -> u32 {
        let mut gained = 0;
        self.xp_into_level += xp;
        while self.xp_into_level >= self.xp_to_next() {
            self.xp_into_level -= self.xp_to_next();
            self.level += 1;
            gained += 1;
        }
        if gained > 0 {
            tracing::info!(level = self.level, "level up");
        }
        gained
    }

    /// Progress through the current level as a rounded percentage.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.xp_into_level as f64 / self.xp_to_next() as f64 * 100.0).round() as u32
    }
}

impl Default for LevelTrack {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Achievements
// ============================================================================

/// Inputs for achievement evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsSnapshot {
    /// Roadmap stages completed
    pub stages_completed: usize,
    /// Current streak in days
    pub streak_days: u32,
    /// Daily tasks completed over the account lifetime
    pub tasks_completed_lifetime: u32,
    /// Current level
    pub level: u32,
}

/// The fixed achievement set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Achievement {
    /// Complete the first roadmap stage
    FirstSummit,
    /// Hold a 7-day streak
    WeekWarrior,
    /// Complete 50 daily tasks
    SkillMaster,
    /// Reach level 10
    PeakPerformer,
}

impl Achievement {
    /// All achievements in display order.
    pub const ALL: [Achievement; 4] = [
        Achievement::FirstSummit,
        Achievement::WeekWarrior,
        Achievement::SkillMaster,
        Achievement::PeakPerformer,
    ];

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstSummit => "First Summit",
            Achievement::WeekWarrior => "Week Warrior",
            Achievement::SkillMaster => "Skill Master",
            Achievement::PeakPerformer => "Peak Performer",
        }
    }

    /// Display description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstSummit => "Complete your first checkpoint",
            Achievement::WeekWarrior => "7-day streak",
            Achievement::SkillMaster => "Complete 50 skills",
            Achievement::PeakPerformer => "Reach level 10",
        }
    }

    /// Evaluate against a snapshot.
    #[must_use]
    pub fn is_unlocked(&self, snapshot: &StatsSnapshot) -> bool {
        match self {
            Achievement::FirstSummit => snapshot.stages_completed >= 1,
            Achievement::WeekWarrior => snapshot.streak_days >= 7,
            Achievement::SkillMaster => snapshot.tasks_completed_lifetime >= 50,
            Achievement::PeakPerformer => snapshot.level >= 10,
        }
    }
}

// ============================================================================
// Weekly View
// ============================================================================

/// One closed day's completion record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The day being recorded
    pub day: NaiveDate,
    /// Tasks completed that day
    pub completed: usize,
    /// Tasks in that day's plan
    pub total: usize,
    /// Whether every required task was completed
    pub all_required_complete: bool,
}

/// Completion percentage across a set of day records, rounded.
#[must_use]
pub fn week_completion(records: &[DayRecord]) -> u32 {
    let total: usize = records.iter().map(|r| r.total).sum();
    if total == 0 {
        return 0;
    }
    let completed: usize = records.iter().map(|r| r.completed).sum();
    (completed as f64 / total as f64 * 100.0).round() as u32
}

// ============================================================================
// Tests
// ============================================================================
