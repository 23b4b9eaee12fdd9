//! Daily plan tracking.
//!
//! Tracks today's task set and the running XP accumulator. Independent of
//! the roadmap engine: the sets never reference each other and completion
//! of one has no effect on the other.
//!
//! Two invariants hold after every operation:
//! - completion is one-way per task (no un-completing)
//! - the XP accumulator equals the sum of `xp` over completed tasks

mod task;

pub use task::{generate_task_id, CustomTaskSpec, DailyTask, TaskKind};

use serde::{Deserialize, Serialize};

use crate::error::{LifePathError, Result};

// ============================================================================
// Completion Receipt
// ============================================================================

/// What a successful task completion emits to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCompletion {
    /// Id of the task that was completed
    pub task_id: String,
    /// XP awarded by the completed task
    pub xp_awarded: u32,
    /// Whether every required task is now complete (reward trigger)
    pub all_required_complete: bool,
}

// ============================================================================
// Daily Plan
// ============================================================================

/// Today's task set with a running XP accumulator.
///
/// # Example
///
/// ```
/// use lifepath::daily::{DailyPlan, DailyTask, TaskKind};
///
/// let mut plan = DailyPlan::new(vec![
///     DailyTask::new("1", "Deep Work Session", TaskKind::Main, 100),
/// ]);
///
/// let receipt = plan.complete_task("1").unwrap();
/// assert_eq!(receipt.xp_awarded, 100);
/// assert!(receipt.all_required_complete);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    tasks: Vec<DailyTask>,
    xp_earned: u32,
}

impl DailyPlan {
    /// Build a plan from an injected task list.
    ///
    /// The accumulator starts at the sum over already-completed tasks, so
    /// a plan restored mid-day keeps its invariant.
    #[must_use]
    pub fn new(tasks: Vec<DailyTask>) -> Self {
        let xp_earned = tasks.iter().filter(|t| t.completed).map(|t| t.xp).sum();
        Self { tasks, xp_earned }
    }

    /// Complete the task with the given id.
    ///
    /// Completion is one-way: a second call for the same id is rejected
    /// and leaves the accumulator untouched.
    ///
    /// # Errors
    ///
    /// - [`LifePathError::TaskNotFound`] for an unknown id
    /// - [`LifePathError::TaskAlreadyComplete`] for a completed task
    pub fn complete_task(&mut self, task_id: &str) -> Result<TaskCompletion> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| LifePathError::task_not_found(task_id))?;

        if task.completed {
            return Err(LifePathError::TaskAlreadyComplete {
                id: task_id.to_string(),
            });
        }

        task.completed = true;
        let xp_awarded = task.xp;
        self.xp_earned += xp_awarded;

        tracing::info!(task = %task_id, xp = xp_awarded, "task completed");

        Ok(TaskCompletion {
            task_id: task_id.to_string(),
            xp_awarded,
            all_required_complete: self.all_required_complete(),
        })
    }

    /// Append a user-authored task.
    ///
    /// The new task is always optional and incomplete, with a
    /// client-generated id carrying a millisecond timestamp suffix.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::EmptyTitle`] when the title is empty or
    /// whitespace-only; the plan is unchanged.
    pub fn add_custom(&mut self, spec: CustomTaskSpec) -> Result<&DailyTask> {
        let title = spec.title.trim();
        if title.is_empty() {
            return Err(LifePathError::EmptyTitle);
        }

        let taken: Vec<&str> = self.tasks.iter().map(|t| t.id.as_str()).collect();
        let id = generate_task_id(&taken);

        let index = self.tasks.len();
        self.tasks.push(DailyTask {
            id,
            title: title.to_string(),
            description: spec.description,
            kind: spec.kind,
            duration: spec.duration,
            xp: spec.xp,
            completed: false,
            optional: true,
        });

        Ok(&self.tasks[index])
    }

    /// True iff every required (non-optional) task is completed.
    ///
    /// This is the reward-unlock signal consumed by the presentation
    /// layer; a plan with no required tasks reports true.
    #[must_use]
    pub fn all_required_complete(&self) -> bool {
        self.tasks.iter().filter(|t| !t.optional).all(|t| t.completed)
    }

    /// XP earned today.
    #[must_use]
    pub fn xp_earned(&self) -> u32 {
        self.xp_earned
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Completion percentage over all tasks, rounded.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.tasks.is_empty() {
            return 0;
        }
        (self.completed_count() as f64 / self.tasks.len() as f64 * 100.0).round() as u32
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[DailyTask] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, task_id: &str) -> Option<&DailyTask> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}

// ============================================================================
// Tests
// ============================================================================
