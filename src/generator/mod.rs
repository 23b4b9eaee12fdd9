//! Path generation from survey answers.
//!
//! "AI path generation" in this product is deterministic template
//! selection: the survey's goals pick a track, the track's stage table
//! becomes the mountain, and the shared daily seed becomes today's plan.
//! The "building your mountain" delay belongs entirely to the
//! presentation layer; nothing here waits.

mod templates;

use templates::{Track, DAILY_SEED, TRACKS};

use crate::daily::DailyTask;
use crate::onboarding::SurveyAnswers;
use crate::roadmap::Stage;

// ============================================================================
// Generated Path
// ============================================================================

/// The full output of path generation.
#[derive(Debug, Clone)]
pub struct GeneratedPath {
    /// Display title of the selected track
    pub track_title: String,
    /// Ordered stage list, all locked (the roadmap promotes the first)
    pub stages: Vec<Stage>,
    /// Seed tasks for the first day
    pub daily_tasks: Vec<DailyTask>,
}

// ============================================================================
// Path Generator
// ============================================================================

/// Deterministic track selection and instantiation.
///
/// # Example
///
/// ```
/// use lifepath::generator::PathGenerator;
/// use lifepath::onboarding::{SelectionList, SurveyAnswers};
///
/// let mut answers = SurveyAnswers::new();
/// answers.toggle(SelectionList::Goals, "Leadership").unwrap();
///
/// let path = PathGenerator::new().generate(&answers);
/// assert_eq!(path.track_title, "Software Engineering Lead");
/// assert_eq!(path.stages.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathGenerator;

impl PathGenerator {
    /// Create a generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate a path from survey answers.
    ///
    /// Track selection walks the track table in priority order and picks
    /// the first track with a trigger goal among the answers; the final
    /// table entry matches everything. Same answers, same path.
    #[must_use]
    pub fn generate(&self, answers: &SurveyAnswers) -> GeneratedPath {
        let track = select_track(answers);
        tracing::debug!(track = track.title, "path generated");

        let stages = track
            .stages
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let mut stage = Stage::new((i + 1).to_string(), t.title, t.category, t.xp)
                    .with_description(t.description)
                    .with_duration(t.duration);
                if let Some(reward) = t.reward {
                    stage = stage.with_reward(reward);
                }
                stage
            })
            .collect();

        GeneratedPath {
            track_title: track.title.to_string(),
            stages,
            daily_tasks: self.daily_seed(),
        }
    }

    /// Instantiate the daily seed tasks.
    ///
    /// Used at generation time and again at every day boundary.
    #[must_use]
    pub fn daily_seed(&self) -> Vec<DailyTask> {
        DAILY_SEED
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let mut task = DailyTask::new((i + 1).to_string(), t.title, t.kind, t.xp)
                    .with_description(t.description)
                    .with_duration(t.duration);
                if t.optional {
                    task = task.optional();
                }
                task
            })
            .collect()
    }
}

fn select_track(answers: &SurveyAnswers) -> &'static Track {
    for track in TRACKS {
        if track
            .trigger_goals
            .iter()
            .any(|g| answers.goals.iter().any(|s| s == g))
        {
            return track;
        }
    }
    &TRACKS[TRACKS.len() - 1]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::SelectionList;
    use crate::roadmap::{Roadmap, StageStatus};

    fn answers_with_goal(goal: &str) -> SurveyAnswers {
        let mut answers = SurveyAnswers::new();
        answers.toggle(SelectionList::Goals, goal).unwrap();
        answers
    }

    #[test]
    fn test_leadership_goal_selects_engineering_track() {
        let path = PathGenerator::new().generate(&answers_with_goal("Leadership"));
        assert_eq!(path.track_title, "Software Engineering Lead");
    }

    #[test]
    fn test_business_goal_selects_founder_track() {
        let path = PathGenerator::new().generate(&answers_with_goal("Starting a Business"));
        assert_eq!(path.track_title, "Founder in the Making");
    }

    #[test]
    fn test_unmatched_goals_fall_back() {
        let path = PathGenerator::new().generate(&answers_with_goal("Health & Wellness"));
        assert_eq!(path.track_title, "Balanced Growth");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let answers = answers_with_goal("Leadership");
        let generator = PathGenerator::new();
        let a = generator.generate(&answers);
        let b = generator.generate(&answers);
        assert_eq!(a.track_title, b.track_title);
        let titles_a: Vec<_> = a.stages.iter().map(|s| s.title.clone()).collect();
        let titles_b: Vec<_> = b.stages.iter().map(|s| s.title.clone()).collect();
        assert_eq!(titles_a, titles_b);
    }

    #[test]
    fn test_generated_stages_feed_a_valid_roadmap() {
        let path = PathGenerator::new().generate(&answers_with_goal("Leadership"));
        assert!(path.stages.iter().all(|s| s.status == StageStatus::Locked));

        let roadmap = Roadmap::new(path.stages).unwrap();
        assert_eq!(roadmap.current().unwrap().id, "1");
        assert_eq!(roadmap.summary().total, 8);
    }

    #[test]
    fn test_generated_stage_ids_are_sequential() {
        let path = PathGenerator::new().generate(&answers_with_goal("Leadership"));
        let ids: Vec<_> = path.stages.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_daily_seed_shape() {
        let tasks = PathGenerator::new().daily_seed();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| !t.completed));
        assert_eq!(tasks.iter().filter(|t| t.optional).count(), 1);
    }
}
