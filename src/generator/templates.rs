//! Static path templates.
//!
//! Each track is a hand-authored eight-stage mountain plus the shared
//! daily seed tasks. These tables are module-private; the only way to
//! consume them is through [`PathGenerator`](super::PathGenerator).

use crate::daily::TaskKind;
use crate::roadmap::Category;

/// One stage row in a track template.
pub(super) struct StageTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub duration: &'static str,
    pub xp: u32,
    pub reward: Option<&'static str>,
}

/// One seed task row in the daily template.
pub(super) struct TaskTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: TaskKind,
    pub duration: &'static str,
    pub xp: u32,
    pub optional: bool,
}

/// A full track: the goals that select it plus its stages.
pub(super) struct Track {
    pub title: &'static str,
    /// A survey goal matching any of these selects the track.
    pub trigger_goals: &'static [&'static str],
    pub stages: &'static [StageTemplate],
}

/// Tracks in selection-priority order; the last entry is the fallback.
pub(super) const TRACKS: &[Track] = &[
    Track {
        title: "Software Engineering Lead",
        trigger_goals: &["Leadership", "Career Growth"],
        stages: &[
            StageTemplate {
                title: "Morning Intention Setting",
                description: "Start each day by writing your top 3 priorities and visualizing success",
                category: Category::Habits,
                duration: "5 min",
                xp: 50,
                reward: Some("Early Bird Badge"),
            },
            StageTemplate {
                title: "Complete Online Leadership Course",
                description: "Take a comprehensive course on engineering leadership fundamentals",
                category: Category::Academics,
                duration: "2 weeks",
                xp: 500,
                reward: Some("Leadership Badge"),
            },
            StageTemplate {
                title: "Build Daily Reading Habit",
                description: "Read 30 minutes of leadership and management books daily",
                category: Category::Habits,
                duration: "30 min/day",
                xp: 300,
                reward: Some("Book Worm Title"),
            },
            StageTemplate {
                title: "Practice Deep Work Sessions",
                description: "Complete 25-minute focused work sessions without distractions",
                category: Category::Skills,
                duration: "25 min",
                xp: 100,
                reward: Some("Focus Master"),
            },
            StageTemplate {
                title: "Lead Your First Project",
                description: "Volunteer to lead a small team project at your current role",
                category: Category::Skills,
                duration: "1-2 months",
                xp: 750,
                reward: Some("Project Leader Badge"),
            },
            StageTemplate {
                title: "Develop Growth Mindset",
                description: "Practice reframing challenges as opportunities for learning",
                category: Category::Mindset,
                duration: "Ongoing",
                xp: 400,
                reward: Some("Mindset Shifter"),
            },
            StageTemplate {
                title: "Earn Management Certification",
                description: "Complete a recognized management certification program",
                category: Category::Academics,
                duration: "3-6 months",
                xp: 1000,
                reward: Some("Certified Manager"),
            },
            StageTemplate {
                title: "Apply for Leadership Roles",
                description: "Start applying for engineering manager or team lead positions",
                category: Category::Skills,
                duration: "Ongoing",
                xp: 1500,
                reward: Some("Career Climber"),
            },
        ],
    },
    Track {
        title: "Founder in the Making",
        trigger_goals: &["Starting a Business", "Financial Freedom"],
        stages: &[
            StageTemplate {
                title: "Write Your Business One-Pager",
                description: "Capture the problem, the customer, and your first offer on one page",
                category: Category::Skills,
                duration: "1 hour",
                xp: 100,
                reward: Some("Visionary Badge"),
            },
            StageTemplate {
                title: "Talk to Five Potential Customers",
                description: "Interview five people who have the problem you want to solve",
                category: Category::Skills,
                duration: "1 week",
                xp: 300,
                reward: Some("Listener Badge"),
            },
            StageTemplate {
                title: "Build a Weekly Money Review",
                description: "Track income and spending every week to know your runway",
                category: Category::Habits,
                duration: "20 min/week",
                xp: 200,
                reward: None,
            },
            StageTemplate {
                title: "Study Pricing Fundamentals",
                description: "Work through a short course on pricing and positioning",
                category: Category::Academics,
                duration: "1 week",
                xp: 400,
                reward: Some("Numbers Badge"),
            },
            StageTemplate {
                title: "Ship a Tiny First Version",
                description: "Put the smallest sellable version of your offer in front of people",
                category: Category::Skills,
                duration: "2-4 weeks",
                xp: 750,
                reward: Some("Builder Badge"),
            },
            StageTemplate {
                title: "Practice Rejection Tolerance",
                description: "Collect ten no's on purpose and write down what each taught you",
                category: Category::Mindset,
                duration: "Ongoing",
                xp: 400,
                reward: Some("Thick Skin Title"),
            },
            StageTemplate {
                title: "Land Your First Paying Customer",
                description: "Close one real sale, however small",
                category: Category::Skills,
                duration: "1-2 months",
                xp: 1000,
                reward: Some("First Dollar Badge"),
            },
            StageTemplate {
                title: "Design a Repeatable Sales Week",
                description: "Turn what worked into a weekly outreach and follow-up routine",
                category: Category::Habits,
                duration: "Ongoing",
                xp: 1200,
                reward: Some("Momentum Badge"),
            },
        ],
    },
    Track {
        title: "Balanced Growth",
        trigger_goals: &[],
        stages: &[
            StageTemplate {
                title: "Morning Intention Setting",
                description: "Start each day by writing your top 3 priorities and visualizing success",
                category: Category::Habits,
                duration: "5 min",
                xp: 50,
                reward: Some("Early Bird Badge"),
            },
            StageTemplate {
                title: "Map Your Energy Week",
                description: "Log when you feel sharp and when you crash for one full week",
                category: Category::Skills,
                duration: "1 week",
                xp: 150,
                reward: None,
            },
            StageTemplate {
                title: "Build a Daily Learning Block",
                description: "Reserve 20 minutes a day for a skill you chose, not one you drifted into",
                category: Category::Habits,
                duration: "20 min/day",
                xp: 300,
                reward: Some("Steady Learner Title"),
            },
            StageTemplate {
                title: "Practice Deep Work Sessions",
                description: "Complete 25-minute focused work sessions without distractions",
                category: Category::Skills,
                duration: "25 min",
                xp: 100,
                reward: Some("Focus Master"),
            },
            StageTemplate {
                title: "Finish a Short Course",
                description: "Pick one course in your strongest interest area and finish it",
                category: Category::Academics,
                duration: "2-4 weeks",
                xp: 500,
                reward: Some("Finisher Badge"),
            },
            StageTemplate {
                title: "Reframe One Weekly Setback",
                description: "Each week, write down one setback and the lesson hiding in it",
                category: Category::Mindset,
                duration: "10 min/week",
                xp: 400,
                reward: Some("Mindset Shifter"),
            },
            StageTemplate {
                title: "Take On a Stretch Commitment",
                description: "Say yes to one project slightly beyond your comfort zone",
                category: Category::Skills,
                duration: "1-2 months",
                xp: 750,
                reward: Some("Stretch Badge"),
            },
            StageTemplate {
                title: "Review and Reset Your Goals",
                description: "Look back at your climb and pick the next peak deliberately",
                category: Category::Mindset,
                duration: "1 hour",
                xp: 1000,
                reward: Some("Summit Badge"),
            },
        ],
    },
];

/// The shared daily seed: one habit, one main, one optional challenge.
pub(super) const DAILY_SEED: &[TaskTemplate] = &[
    TaskTemplate {
        title: "Morning Intention Setting",
        description: "Write down your top 3 priorities for today and visualize completing them successfully.",
        kind: TaskKind::Habit,
        duration: "5 min",
        xp: 30,
        optional: false,
    },
    TaskTemplate {
        title: "Deep Work Session",
        description: "Focus on your most important task for 25 minutes without distractions. Use the Pomodoro technique.",
        kind: TaskKind::Main,
        duration: "25 min",
        xp: 100,
        optional: false,
    },
    TaskTemplate {
        title: "Learn a New Concept",
        description: "Read one article or watch one video about a skill you're developing. Take notes.",
        kind: TaskKind::Challenge,
        duration: "15 min",
        xp: 50,
        optional: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_track_has_eight_stages() {
        for track in TRACKS {
            assert_eq!(track.stages.len(), 8, "track {}", track.title);
        }
    }

    #[test]
    fn test_last_track_is_fallback() {
        assert!(TRACKS.last().unwrap().trigger_goals.is_empty());
    }

    #[test]
    fn test_daily_seed_has_required_and_optional() {
        assert!(DAILY_SEED.iter().any(|t| !t.optional));
        assert!(DAILY_SEED.iter().any(|t| t.optional));
    }
}
