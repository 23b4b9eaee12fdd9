//! LifePath - gamified self-improvement tracker.
//!
//! Climb a personalized "skills mountain": onboard with a preference
//! survey, receive a generated path of sequential stages, complete daily
//! micro-tasks for XP and streaks, and unlock a daily reward when every
//! required task is done.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`roadmap`] - Stage store and progression engine (the mountain)
//! - [`daily`] - Daily plan tracking (today's tasks and XP)
//! - [`onboarding`] - Survey step machine and option catalogs
//! - [`generator`] - Deterministic path generation from survey answers
//! - [`stats`] - Levels, achievements, and the weekly view
//! - [`session`] - Session state binding the engines, with atomic persistence
//! - [`render`] - Terminal presentation (pure string production)
//! - [`config`] - User configuration file
//! - [`error`] - Custom error types and handling
//!
//! # Example
//!
//! ```
//! use lifepath::generator::PathGenerator;
//! use lifepath::onboarding::{SelectionList, SurveyAnswers};
//! use lifepath::roadmap::Roadmap;
//!
//! let mut answers = SurveyAnswers::new();
//! answers.toggle(SelectionList::Goals, "Leadership")?;
//!
//! let path = PathGenerator::new().generate(&answers);
//! let mut roadmap = Roadmap::new(path.stages)?;
//!
//! let receipt = roadmap.complete_stage("1")?;
//! assert_eq!(receipt.xp_awarded, 50);
//! # Ok::<(), lifepath::LifePathError>(())
//! ```

pub mod config;
pub mod daily;
pub mod error;
pub mod generator;
pub mod onboarding;
pub mod render;
pub mod roadmap;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use error::{LifePathError, Result};

// Re-export engine types
pub use daily::{CustomTaskSpec, DailyPlan, DailyTask, TaskCompletion, TaskKind};
pub use roadmap::{Category, Roadmap, RoadmapSummary, Stage, StageCompletion, StageStatus};

// Re-export onboarding and generation types
pub use generator::{GeneratedPath, PathGenerator};
pub use onboarding::{SelectionList, Survey, SurveyAnswers, SurveyStep};

// Re-export session types
pub use session::{SessionState, SessionStore};

// Re-export stats types
pub use stats::{Achievement, DayRecord, LevelTrack, StatsSnapshot};

// Re-export configuration
pub use config::AppConfig;
