//! Fixed option catalogs for the onboarding survey.
//!
//! Selections outside these lists are rejected; the survey is chip
//! selection, not free text.

/// Goal options (step 1).
pub const GOAL_OPTIONS: &[&str] = &[
    "Career Growth",
    "Financial Freedom",
    "Work-Life Balance",
    "Creative Fulfillment",
    "Leadership",
    "Learning New Skills",
    "Starting a Business",
    "Health & Wellness",
];

/// Interest options (step 2).
pub const INTEREST_OPTIONS: &[&str] = &[
    "Technology",
    "Arts & Design",
    "Business",
    "Science",
    "Writing",
    "Education",
    "Healthcare",
    "Sports",
    "Music",
    "Travel",
];

/// Strength options (step 3).
pub const STRENGTH_OPTIONS: &[&str] = &[
    "Problem Solving",
    "Communication",
    "Leadership",
    "Creativity",
    "Analytical Thinking",
    "Adaptability",
    "Time Management",
    "Teamwork",
];

/// Challenge options (step 4).
pub const CHALLENGE_OPTIONS: &[&str] = &[
    "Procrastination",
    "Public Speaking",
    "Technical Skills",
    "Patience",
    "Delegation",
    "Risk-Taking",
    "Self-Confidence",
    "Work-Life Balance",
];

/// Current-situation options (step 5, single-select).
pub const SITUATION_OPTIONS: &[&str] = &[
    "Student",
    "Early Career",
    "Mid-Career",
    "Career Change",
    "Freelancer",
    "Entrepreneur",
    "Returning to Work",
    "Exploring Options",
];

/// Struggle options (step 5, multi-select).
pub const STRUGGLE_OPTIONS: &[&str] = &[
    "Unclear Direction",
    "Lack of Motivation",
    "Financial Constraints",
    "Time Management",
    "Skill Gaps",
    "Imposter Syndrome",
    "Burnout",
    "Decision Paralysis",
];
