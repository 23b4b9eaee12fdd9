//! Terminal presentation.
//!
//! Everything here is pure string production over engine state; no
//! function in this module mutates anything or waits on anything. The
//! single mountain renderer lives in [`mountain`], with visual variation
//! confined to [`MapTheme`].

pub mod mountain;
pub mod theme;

pub use mountain::render_mountain;
pub use theme::MapTheme;

use colored::Colorize;

use crate::daily::{DailyPlan, TaskKind};
use crate::session::SessionState;
use crate::stats::{week_completion, Achievement};

/// A fixed-width progress bar.
#[must_use]
pub fn progress_bar(percent: u32, width: usize, theme: &MapTheme) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!(
        "{}{}",
        theme.bar_filled.repeat(filled).color(theme.current_color),
        theme.bar_empty.repeat(width - filled).dimmed()
    )
}

/// Badge shown next to a task's kind.
fn kind_badge(kind: TaskKind) -> String {
    let label = kind.to_string();
    match kind {
        TaskKind::Main => label.cyan().to_string(),
        TaskKind::Habit => label.magenta().to_string(),
        TaskKind::Challenge => label.yellow().to_string(),
    }
}

/// Render today's plan.
#[must_use]
pub fn render_daily(plan: &DailyPlan, streak_days: u32, theme: &MapTheme) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}\n\n",
        "Today's Skills".bold(),
        format!("🔥 {streak_days} day streak").dimmed()
    ));

    for task in plan.tasks() {
        let marker = if task.completed {
            theme
                .completed_glyph
                .color(theme.completed_color)
                .to_string()
        } else {
            theme.locked_glyph.dimmed().to_string()
        };
        let mut line = format!(
            "{marker} {}  {}  {}",
            task.id.dimmed(),
            if task.completed {
                task.title.dimmed().strikethrough().to_string()
            } else {
                task.title.bold().to_string()
            },
            kind_badge(task.kind)
        );
        if task.optional {
            line.push_str(&format!("  {}", "(optional)".dimmed()));
        }
        out.push_str(&line);
        out.push('\n');
        out.push_str(&format!(
            "    {}\n",
            format!("{} · +{} XP", task.duration, task.xp).dimmed()
        ));
    }

    out.push_str(&format!(
        "\n{} {}/{} completed · {} XP today\n",
        progress_bar(plan.percent(), 24, theme),
        plan.completed_count(),
        plan.tasks().len(),
        plan.xp_earned()
    ));

    if plan.all_required_complete() {
        out.push_str(&format!(
            "{}\n",
            "🎁 Reward unlocked: 30 minutes of screen time. Use it wisely!"
                .green()
                .bold()
        ));
    }

    out
}

/// Render the stats summary.
#[must_use]
pub fn render_summary(state: &SessionState, theme: &MapTheme) -> String {
    let mut out = String::new();
    let summary = state.roadmap.summary();

    out.push_str(&format!("{}\n\n", "Your Progress".bold()));
    out.push_str(&format!(
        "  🔥 {}    ⚡ {} XP    🏔 {}/{} stages    🎯 {} skills done\n\n",
        format!("{} day streak", state.streak_days).bold(),
        state.lifetime_xp,
        summary.completed,
        summary.total,
        state.tasks_completed_lifetime
    ));

    // Level track.
    out.push_str(&format!(
        "  Level {}  {} {}\n\n",
        state.level.level.to_string().bold(),
        progress_bar(state.level.percent(), 24, theme),
        format!(
            "{}/{} XP to next level",
            state.level.xp_into_level,
            state.level.xp_to_next()
        )
        .dimmed()
    ));

    // Weekly bars.
    if !state.history.is_empty() {
        out.push_str(&format!(
            "  {}  {}\n",
            "This Week".bold(),
            format!("{}% completion", week_completion(&state.history)).dimmed()
        ));
        for record in &state.history {
            let percent = if record.total == 0 {
                0
            } else {
                (record.completed as f64 / record.total as f64 * 100.0).round() as u32
            };
            out.push_str(&format!(
                "  {}  {} {}/{}\n",
                record.day.format("%a"),
                progress_bar(percent, 12, theme),
                record.completed,
                record.total
            ));
        }
        out.push('\n');
    }

    // Achievements.
    let snapshot = state.snapshot();
    out.push_str(&format!("  {}\n", "Achievements".bold()));
    for achievement in Achievement::ALL {
        let unlocked = achievement.is_unlocked(&snapshot);
        let marker = if unlocked {
            theme
                .completed_glyph
                .color(theme.completed_color)
                .to_string()
        } else {
            theme.locked_glyph.dimmed().to_string()
        };
        let title = if unlocked {
            achievement.title().bold().to_string()
        } else {
            achievement.title().dimmed().to_string()
        };
        out.push_str(&format!(
            "  {marker} {title}  {}\n",
            achievement.description().dimmed()
        ));
    }

    out
}

/// One-line XP feedback after a completion.
#[must_use]
pub fn xp_line(xp: u32, levels_gained: u32, level: u32) -> String {
    let mut line = format!("{}", format!("+{xp} XP").yellow().bold());
    if levels_gained > 0 {
        line.push_str(&format!(
            "  {}",
            format!("⬆ Level up! You reached level {level}").cyan().bold()
        ));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::DailyTask;
    use crate::render::theme::TRAIL;
    use crate::session::test_support::sample_state;

    fn plan() -> DailyPlan {
        DailyPlan::new(vec![
            DailyTask::new("1", "Morning Intention Setting", TaskKind::Habit, 30)
                .with_duration("5 min"),
            DailyTask::new("2", "Learn a New Concept", TaskKind::Challenge, 50)
                .with_duration("15 min")
                .optional(),
        ])
    }

    #[test]
    fn test_progress_bar_width() {
        colored::control::set_override(false);
        assert_eq!(progress_bar(50, 10, &TRAIL), "#####-----");
        assert_eq!(progress_bar(0, 4, &TRAIL), "----");
        assert_eq!(progress_bar(100, 4, &TRAIL), "####");
    }

    #[test]
    fn test_progress_bar_clamps_over_100() {
        colored::control::set_override(false);
        assert_eq!(progress_bar(250, 4, &TRAIL), "####");
    }

    #[test]
    fn test_render_daily_lists_tasks() {
        colored::control::set_override(false);
        let out = render_daily(&plan(), 3, &TRAIL);
        assert!(out.contains("Morning Intention Setting"));
        assert!(out.contains("(optional)"));
        assert!(out.contains("3 day streak"));
        assert!(!out.contains("Reward unlocked"));
    }

    #[test]
    fn test_render_daily_shows_reward_when_required_done() {
        colored::control::set_override(false);
        let mut p = plan();
        p.complete_task("1").unwrap();
        let out = render_daily(&p, 3, &TRAIL);
        assert!(out.contains("Reward unlocked"));
        assert!(out.contains("1/2 completed"));
    }

    #[test]
    fn test_render_summary_sections() {
        colored::control::set_override(false);
        let mut state = sample_state();
        state.complete_stage("1").unwrap();
        let out = render_summary(&state, &TRAIL);
        assert!(out.contains("Your Progress"));
        assert!(out.contains("Level 1"));
        assert!(out.contains("Achievements"));
        assert!(out.contains("First Summit"));
    }

    #[test]
    fn test_xp_line_mentions_level_up() {
        colored::control::set_override(false);
        assert!(!xp_line(50, 0, 1).contains("Level up"));
        assert!(xp_line(500, 2, 3).contains("level 3"));
    }
}
