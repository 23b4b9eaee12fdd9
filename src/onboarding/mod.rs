//! Onboarding survey model.
//!
//! Five steps in fixed order collect the preferences the path generator
//! consumes. Each step gates advancement: the multi-select steps need at
//! least one selection, the final step needs a situation plus at least
//! one struggle. Selections are chips from fixed catalogs, never free
//! text.
//!
//! # Step Flow
//!
//! ```text
//! Goals -> Interests -> Strengths -> Challenges -> Situation -> (complete)
//!   ^________back________________________________________|
//! ```

mod catalog;

pub use catalog::{
    CHALLENGE_OPTIONS, GOAL_OPTIONS, INTEREST_OPTIONS, SITUATION_OPTIONS, STRENGTH_OPTIONS,
    STRUGGLE_OPTIONS,
};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LifePathError, Result};

// ============================================================================
// Survey Step
// ============================================================================

/// One of the five survey steps, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurveyStep {
    /// What the user wants to reach
    Goals,
    /// What drives their curiosity
    Interests,
    /// What they are already good at
    Strengths,
    /// What slows them down
    Challenges,
    /// Where they are on their journey
    Situation,
}

impl fmt::Display for SurveyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyStep::Goals => write!(f, "Goals"),
            SurveyStep::Interests => write!(f, "Interests"),
            SurveyStep::Strengths => write!(f, "Strengths"),
            SurveyStep::Challenges => write!(f, "Challenges"),
            SurveyStep::Situation => write!(f, "Situation"),
        }
    }
}

impl SurveyStep {
    /// All steps in survey order.
    pub const ALL: [SurveyStep; 5] = [
        SurveyStep::Goals,
        SurveyStep::Interests,
        SurveyStep::Strengths,
        SurveyStep::Challenges,
        SurveyStep::Situation,
    ];

    /// The following step, or `None` after the last.
    #[must_use]
    pub fn next(&self) -> Option<SurveyStep> {
        match self {
            SurveyStep::Goals => Some(SurveyStep::Interests),
            SurveyStep::Interests => Some(SurveyStep::Strengths),
            SurveyStep::Strengths => Some(SurveyStep::Challenges),
            SurveyStep::Challenges => Some(SurveyStep::Situation),
            SurveyStep::Situation => None,
        }
    }

    /// The preceding step, or `None` before the first.
    #[must_use]
    pub fn back(&self) -> Option<SurveyStep> {
        match self {
            SurveyStep::Goals => None,
            SurveyStep::Interests => Some(SurveyStep::Goals),
            SurveyStep::Strengths => Some(SurveyStep::Interests),
            SurveyStep::Challenges => Some(SurveyStep::Strengths),
            SurveyStep::Situation => Some(SurveyStep::Challenges),
        }
    }
}

// ============================================================================
// Selection List
// ============================================================================

/// One of the multi-select lists collected by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionList {
    /// Goals (step 1)
    Goals,
    /// Interests (step 2)
    Interests,
    /// Strengths (step 3)
    Strengths,
    /// Challenges (step 4)
    Challenges,
    /// Struggles (step 5, alongside the single-select situation)
    Struggles,
}

impl SelectionList {
    /// The catalog this list selects from.
    #[must_use]
    pub fn catalog(&self) -> &'static [&'static str] {
        match self {
            SelectionList::Goals => GOAL_OPTIONS,
            SelectionList::Interests => INTEREST_OPTIONS,
            SelectionList::Strengths => STRENGTH_OPTIONS,
            SelectionList::Challenges => CHALLENGE_OPTIONS,
            SelectionList::Struggles => STRUGGLE_OPTIONS,
        }
    }

    /// The survey step this list belongs to.
    #[must_use]
    pub fn step(&self) -> SurveyStep {
        match self {
            SelectionList::Goals => SurveyStep::Goals,
            SelectionList::Interests => SurveyStep::Interests,
            SelectionList::Strengths => SurveyStep::Strengths,
            SelectionList::Challenges => SurveyStep::Challenges,
            SelectionList::Struggles => SurveyStep::Situation,
        }
    }
}

// ============================================================================
// Survey Answers
// ============================================================================

/// Accumulated survey selections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyAnswers {
    /// Selected goals
    pub goals: Vec<String>,
    /// Selected interests
    pub interests: Vec<String>,
    /// Selected strengths
    pub strengths: Vec<String>,
    /// Selected challenges
    pub challenges: Vec<String>,
    /// Single-select current situation
    pub situation: Option<String>,
    /// Selected struggles
    pub struggles: Vec<String>,
}

impl SurveyAnswers {
    /// Create an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an option in a multi-select list.
    ///
    /// Selecting an already-selected option deselects it.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::UnknownOption`] when the option is not in
    /// the list's catalog.
    pub fn toggle(&mut self, list: SelectionList, option: &str) -> Result<()> {
        if !list.catalog().contains(&option) {
            return Err(LifePathError::UnknownOption {
                step: list.step(),
                option: option.to_string(),
            });
        }

        let selections = match list {
            SelectionList::Goals => &mut self.goals,
            SelectionList::Interests => &mut self.interests,
            SelectionList::Strengths => &mut self.strengths,
            SelectionList::Challenges => &mut self.challenges,
            SelectionList::Struggles => &mut self.struggles,
        };

        if let Some(pos) = selections.iter().position(|s| s == option) {
            selections.remove(pos);
        } else {
            selections.push(option.to_string());
        }
        Ok(())
    }

    /// Set the single-select situation.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::UnknownOption`] for an option outside the
    /// situation catalog.
    pub fn set_situation(&mut self, option: &str) -> Result<()> {
        if !SITUATION_OPTIONS.contains(&option) {
            return Err(LifePathError::UnknownOption {
                step: SurveyStep::Situation,
                option: option.to_string(),
            });
        }
        self.situation = Some(option.to_string());
        Ok(())
    }

    /// Check a step's advance gate.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::SurveyIncomplete`] describing what the
    /// step still needs.
    pub fn check_step(&self, step: SurveyStep) -> Result<()> {
        let incomplete = |reason: &str| LifePathError::SurveyIncomplete {
            step,
            reason: reason.to_string(),
        };
        match step {
            SurveyStep::Goals if self.goals.is_empty() => {
                Err(incomplete("select at least one goal"))
            }
            SurveyStep::Interests if self.interests.is_empty() => {
                Err(incomplete("select at least one interest"))
            }
            SurveyStep::Strengths if self.strengths.is_empty() => {
                Err(incomplete("select at least one strength"))
            }
            SurveyStep::Challenges if self.challenges.is_empty() => {
                Err(incomplete("select at least one challenge"))
            }
            SurveyStep::Situation if self.situation.is_none() => {
                Err(incomplete("select your current situation"))
            }
            SurveyStep::Situation if self.struggles.is_empty() => {
                Err(incomplete("select at least one struggle"))
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Survey
// ============================================================================

/// The survey step machine.
///
/// Wraps [`SurveyAnswers`] with the forward/backward navigation the
/// onboarding flow uses; advancing past a step whose gate fails is
/// rejected, and advancing past the final step completes the survey.
///
/// # Example
///
/// ```
/// use lifepath::onboarding::{SelectionList, Survey, SurveyStep};
///
/// let mut survey = Survey::new();
/// survey.answers_mut().toggle(SelectionList::Goals, "Leadership").unwrap();
/// survey.advance().unwrap();
/// assert_eq!(survey.step(), SurveyStep::Interests);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    step: SurveyStep,
    answers: SurveyAnswers,
    complete: bool,
}

impl Survey {
    /// Start a fresh survey at the first step.
    #[must_use]
    pub fn new() -> Self {
        Self::with_answers(SurveyAnswers::new())
    }

    /// Start at the first step with pre-filled answers.
    #[must_use]
    pub fn with_answers(answers: SurveyAnswers) -> Self {
        Self {
            step: SurveyStep::Goals,
            answers,
            complete: false,
        }
    }

    /// The step currently shown.
    #[must_use]
    pub fn step(&self) -> SurveyStep {
        self.step
    }

    /// Read access to the answers.
    #[must_use]
    pub fn answers(&self) -> &SurveyAnswers {
        &self.answers
    }

    /// Mutable access to the answers.
    pub fn answers_mut(&mut self) -> &mut SurveyAnswers {
        &mut self.answers
    }

    /// Whether the survey has been submitted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance past the current step; completes the survey on the last.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::SurveyIncomplete`] when the current
    /// step's gate fails; the step does not change.
    pub fn advance(&mut self) -> Result<()> {
        self.answers.check_step(self.step)?;
        match self.step.next() {
            Some(next) => self.step = next,
            None => self.complete = true,
        }
        Ok(())
    }

    /// Step back; a no-op on the first step.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.back() {
            self.step = prev;
        }
    }

    /// Consume the survey, returning the answers.
    ///
    /// # Errors
    ///
    /// Returns [`LifePathError::SurveyIncomplete`] when called before
    /// every gate has passed.
    pub fn into_answers(self) -> Result<SurveyAnswers> {
        if !self.complete {
            for step in SurveyStep::ALL {
                self.answers.check_step(step)?;
            }
        }
        Ok(self.answers)
    }
}

impl Default for Survey {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
