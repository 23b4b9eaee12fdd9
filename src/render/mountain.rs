//! The mountain map renderer.
//!
//! Summit-first vertical path over the roadmap's stages. There is
//! exactly one of these; visual variation comes from [`MapTheme`].

use colored::Colorize;

use super::progress_bar;
use super::theme::MapTheme;
use crate::roadmap::{Roadmap, StageStatus};

/// Render the skills mountain.
///
/// Completed stages show their reward, the current stage shows full
/// detail, and locked stages keep their detail hidden until unlocked.
#[must_use]
pub fn render_mountain(roadmap: &Roadmap, track_title: &str, theme: &MapTheme) -> String {
    let summary = roadmap.summary();
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}\n",
        track_title.bold(),
        format!("{}/{} stages · {} XP", summary.completed, summary.total, summary.total_xp)
            .dimmed()
    ));
    out.push_str(&format!(
        "{} {}%\n\n",
        progress_bar(summary.percent, 24, theme),
        summary.percent
    ));

    // Summit at the top, base camp at the bottom.
    for (i, stage) in roadmap.stages().iter().enumerate().rev() {
        let indent = " ".repeat(2 * i);
        let marker = match stage.status {
            StageStatus::Completed => theme
                .completed_glyph
                .color(theme.completed_color)
                .to_string(),
            StageStatus::Current => theme.current_glyph.color(theme.current_color).to_string(),
            StageStatus::Locked => theme.locked_glyph.dimmed().to_string(),
        };

        match stage.status {
            StageStatus::Completed => {
                let mut line = format!(
                    "{indent}{marker} {}. {}  {}",
                    stage.id,
                    stage.title.color(theme.completed_color),
                    format!("+{} XP", stage.xp).dimmed()
                );
                if let Some(reward) = &stage.reward {
                    line.push_str(&format!("  {}", format!("🏆 {reward}").dimmed()));
                }
                out.push_str(&line);
                out.push('\n');
            }
            StageStatus::Current => {
                out.push_str(&format!(
                    "{indent}{marker} {}. {}  {}\n",
                    stage.id,
                    stage.title.color(theme.current_color).bold(),
                    format!("[{}]", stage.category).dimmed()
                ));
                out.push_str(&format!(
                    "{indent}{}   {}\n",
                    theme.path_glyph.dimmed(),
                    stage.description.dimmed()
                ));
                let mut detail = format!("{} · +{} XP", stage.duration, stage.xp);
                if let Some(reward) = &stage.reward {
                    detail.push_str(&format!(" · reward: {reward}"));
                }
                out.push_str(&format!(
                    "{indent}{}   {}\n",
                    theme.path_glyph.dimmed(),
                    detail.dimmed()
                ));
            }
            StageStatus::Locked => {
                out.push_str(&format!(
                    "{indent}{marker} {}. {}\n",
                    stage.id,
                    stage.title.dimmed()
                ));
            }
        }

        if i > 0 {
            out.push_str(&format!("{}{}\n", " ".repeat(2 * (i - 1) + 1), theme.path_glyph.dimmed()));
        }
    }

    if roadmap.is_complete() {
        out.push('\n');
        out.push_str(&"You reached the summit! Every stage is complete.".green().bold().to_string());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::TRAIL;
    use crate::roadmap::{Category, Stage};

    fn roadmap() -> Roadmap {
        Roadmap::new(vec![
            Stage::new("1", "Morning Intention Setting", Category::Habits, 50)
                .with_reward("Early Bird Badge")
                .with_status(StageStatus::Completed),
            Stage::new("2", "Deep Work", Category::Skills, 100)
                .with_description("Focused sessions")
                .with_duration("25 min")
                .with_status(StageStatus::Current),
            Stage::new("3", "Lead a Project", Category::Skills, 750),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_shows_all_stage_titles() {
        colored::control::set_override(false);
        let out = render_mountain(&roadmap(), "Software Engineering Lead", &TRAIL);
        assert!(out.contains("Morning Intention Setting"));
        assert!(out.contains("Deep Work"));
        assert!(out.contains("Lead a Project"));
        assert!(out.contains("1/3 stages"));
    }

    #[test]
    fn test_render_summit_comes_first() {
        colored::control::set_override(false);
        let out = render_mountain(&roadmap(), "Track", &TRAIL);
        let summit = out.find("Lead a Project").unwrap();
        let base = out.find("Morning Intention Setting").unwrap();
        assert!(summit < base);
    }

    #[test]
    fn test_render_hides_locked_detail() {
        colored::control::set_override(false);
        let out = render_mountain(&roadmap(), "Track", &TRAIL);
        // Current stage detail is visible, locked stage XP is not.
        assert!(out.contains("25 min"));
        assert!(!out.contains("750"));
    }

    #[test]
    fn test_render_terminal_roadmap_celebrates() {
        colored::control::set_override(false);
        let mut map = roadmap();
        map.complete_stage("2").unwrap();
        map.complete_stage("3").unwrap();
        let out = render_mountain(&map, "Track", &TRAIL);
        assert!(out.contains("summit"));
    }
}
