//! Session state and persistence.
//!
//! A session binds the two engines together for the CLI: the roadmap,
//! today's plan, and the aggregates neither engine owns (lifetime XP,
//! level, streak, history). The engines stay pure; everything about
//! files, dates, and aggregation lives here.
//!
//! # Architecture
//!
//! ```text
//! SessionState
//!   ├── answers: SurveyAnswers     - what onboarding collected
//!   ├── roadmap: Roadmap           - the skills mountain
//!   ├── plan: DailyPlan            - today's tasks
//!   ├── level / lifetime_xp / streak_days
//!   └── history: Vec<DayRecord>    - last seven closed days
//! ```
//!
//! # Persistence
//!
//! [`SessionStore`] provides atomic file-based storage:
//! - Atomic writes prevent corruption on crash
//! - File locking serializes concurrent invocations
//! - Loaded state is re-validated against the roadmap invariant

pub mod persistence;

pub use persistence::SessionStore;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::daily::{CustomTaskSpec, DailyPlan, DailyTask, TaskCompletion};
use crate::error::Result;
use crate::generator::{GeneratedPath, PathGenerator};
use crate::onboarding::SurveyAnswers;
use crate::roadmap::{Roadmap, StageCompletion};
use crate::stats::{DayRecord, LevelTrack, StatsSnapshot};

/// Current schema version for session state.
/// Increment when making breaking changes to the serialization format.
pub const SESSION_STATE_VERSION: u32 = 1;

/// Number of closed days kept for the weekly view.
const HISTORY_DAYS: usize = 7;

// ============================================================================
// Session State
// ============================================================================

/// Everything LifePath knows about one user, serialized as one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Schema version for forward compatibility.
    pub version: u32,
    /// Unique session identifier.
    pub session_id: String,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was last saved.
    pub saved_at: DateTime<Utc>,
    /// Survey answers collected at onboarding.
    pub answers: SurveyAnswers,
    /// Display title of the generated track.
    pub track_title: String,
    /// The skills mountain.
    pub roadmap: Roadmap,
    /// Today's plan.
    pub plan: DailyPlan,
    /// The day the plan belongs to.
    pub day: NaiveDate,
    /// XP accumulated over the account lifetime.
    pub lifetime_xp: u32,
    /// Level bookkeeping.
    pub level: LevelTrack,
    /// Consecutive days with all required tasks completed.
    pub streak_days: u32,
    /// Daily tasks completed over the account lifetime.
    pub tasks_completed_lifetime: u32,
    /// Closed-day records, most recent last, capped at seven.
    pub history: Vec<DayRecord>,
}

impl SessionState {
    /// Create a fresh session from survey answers and a generated path.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::CorruptRoadmap`](crate::error::LifePathError::CorruptRoadmap)
    /// if the generated stage list is out of order (a generator bug).
    pub fn create(answers: SurveyAnswers, path: GeneratedPath, today: NaiveDate) -> Result<Self> {
        let now = Utc::now();
        Ok(Self {
            version: SESSION_STATE_VERSION,
            session_id: Uuid::new_v4().to_string(),
            created_at: now,
            saved_at: now,
            answers,
            track_title: path.track_title,
            roadmap: Roadmap::new(path.stages)?,
            plan: DailyPlan::new(path.daily_tasks),
            day: today,
            lifetime_xp: 0,
            level: LevelTrack::new(),
            streak_days: 0,
            tasks_completed_lifetime: 0,
            history: Vec::new(),
        })
    }

    /// Re-check invariants after deserialization.
    pub fn validate(&self) -> Result<()> {
        if !self.roadmap.is_ordered() {
            return Err(crate::error::LifePathError::corrupt_roadmap(
                "stored stage statuses are out of order",
            ));
        }
        Ok(())
    }

    /// Complete a roadmap stage and fold its XP into the session.
    ///
    /// Returns the engine receipt plus the number of levels gained.
    pub fn complete_stage(&mut self, stage_id: &str) -> Result<(StageCompletion, u32)> {
        let receipt = self.roadmap.complete_stage(stage_id)?;
        self.lifetime_xp += receipt.xp_awarded;
        let levels_gained = self.level.grant(receipt.xp_awarded);
        Ok((receipt, levels_gained))
    }

    /// Complete a daily task and fold its XP into the session.
    ///
    /// Returns the engine receipt plus the number of levels gained.
    pub fn complete_task(&mut self, task_id: &str) -> Result<(TaskCompletion, u32)> {
        let receipt = self.plan.complete_task(task_id)?;
        self.lifetime_xp += receipt.xp_awarded;
        self.tasks_completed_lifetime += 1;
        let levels_gained = self.level.grant(receipt.xp_awarded);
        Ok((receipt, levels_gained))
    }

    /// Append a user-authored task to today's plan.
    pub fn add_custom_task(&mut self, spec: CustomTaskSpec) -> Result<&DailyTask> {
        self.plan.add_custom(spec)
    }

    /// Roll the plan forward if the stored day is in the past.
    ///
    /// Closes the stored day into history, settles the streak, and
    /// reseeds the plan from the generator. The streak grows only when
    /// the closed day completed all required tasks and no day was
    /// skipped in between; otherwise it resets.
    ///
    /// Returns true if a rollover happened.
    pub fn roll_day(&mut self, today: NaiveDate, generator: &PathGenerator) -> bool {
        if self.day >= today {
            return false;
        }

        let gap = (today - self.day).num_days();
        let closed_complete = self.plan.all_required_complete();

        self.history.push(DayRecord {
            day: self.day,
            completed: self.plan.completed_count(),
            total: self.plan.tasks().len(),
            all_required_complete: closed_complete,
        });
        if self.history.len() > HISTORY_DAYS {
            let excess = self.history.len() - HISTORY_DAYS;
            self.history.drain(..excess);
        }

        if closed_complete && gap == 1 {
            self.streak_days += 1;
        } else {
            self.streak_days = 0;
        }

        self.plan = DailyPlan::new(generator.daily_seed());
        self.day = today;

        tracing::info!(day = %today, streak = self.streak_days, "day rolled over");
        true
    }

    /// Snapshot the inputs achievement evaluation needs.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            stages_completed: self.roadmap.summary().completed,
            streak_days: self.streak_days,
            tasks_completed_lifetime: self.tasks_completed_lifetime,
            level: self.level.level,
        }
    }

    /// Update the saved-at timestamp.
    pub fn touch(&mut self) {
        self.saved_at = Utc::now();
    }
}

// ============================================================================
// Test Support
// ============================================================================


// ============================================================================
// Tests
// ============================================================================
