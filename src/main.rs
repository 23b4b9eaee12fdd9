//! LifePath - gamified self-improvement tracker.
//!
//! Climb a personalized skills mountain: onboard once, then complete
//! daily skills and roadmap stages for XP, streaks, and rewards.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;

use lifepath::config::AppConfig;
use lifepath::daily::{CustomTaskSpec, TaskKind};
use lifepath::error::{LifePathError, Result};
use lifepath::generator::PathGenerator;
use lifepath::onboarding::{
    SelectionList, Survey, SurveyAnswers, CHALLENGE_OPTIONS, GOAL_OPTIONS, INTEREST_OPTIONS,
    SITUATION_OPTIONS, STRENGTH_OPTIONS, STRUGGLE_OPTIONS,
};
use lifepath::render::{render_daily, render_mountain, render_summary, xp_line};
use lifepath::session::{SessionState, SessionStore};

#[derive(Parser)]
#[command(name = "lifepath")]
#[command(version = "0.1.0")]
#[command(about = "Climb your personalized skills mountain", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory where session data is stored (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the survey and build your skills mountain
    Onboard {
        /// A goal to pursue (repeatable)
        #[arg(long = "goal", value_name = "OPTION")]
        goals: Vec<String>,

        /// An area of interest (repeatable)
        #[arg(long = "interest", value_name = "OPTION")]
        interests: Vec<String>,

        /// A strength you already have (repeatable)
        #[arg(long = "strength", value_name = "OPTION")]
        strengths: Vec<String>,

        /// An obstacle that slows you down (repeatable)
        #[arg(long = "challenge", value_name = "OPTION")]
        challenges: Vec<String>,

        /// Something currently holding you back (repeatable)
        #[arg(long = "struggle", value_name = "OPTION")]
        struggles: Vec<String>,

        /// Where you are on your journey
        #[arg(long, value_name = "OPTION")]
        situation: Option<String>,

        /// Print the available options for every survey step and exit
        #[arg(long)]
        list_options: bool,

        /// Overwrite an existing session
        #[arg(short, long)]
        force: bool,
    },

    /// Show today's skills
    Today,

    /// Complete a daily skill
    Done {
        /// Id of the task to complete
        task_id: String,
    },

    /// Add a custom skill to today's list
    Add {
        /// Skill title
        #[arg(long)]
        title: String,

        /// Skill description
        #[arg(long, default_value = "")]
        description: String,

        /// Skill type
        #[arg(long, value_enum, default_value = "main")]
        kind: TaskKind,

        /// Duration label
        #[arg(long, default_value = "15 min")]
        duration: String,

        /// XP reward
        #[arg(long, default_value = "50")]
        xp: u32,
    },

    /// Show your skills mountain
    Mountain,

    /// Complete a roadmap stage
    Climb {
        /// Id of the stage to complete (defaults to the current stage)
        stage_id: Option<String>,
    },

    /// Show streak, XP, level, and achievements
    Progress,

    /// Delete the saved session
    Reset {
        /// Skip the confirmation requirement
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "lifepath=debug,info"
    } else {
        "lifepath=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load()?;
    let theme = config.theme_ref()?;
    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref());
    let store = SessionStore::new(&data_dir);

    match cli.command {
        Commands::Onboard {
            goals,
            interests,
            strengths,
            challenges,
            struggles,
            situation,
            list_options,
            force,
        } => {
            if list_options {
                print_catalogs();
                return Ok(());
            }
            if store.exists() && !force {
                return Err(LifePathError::session(format!(
                    "a session already exists at {} (use --force to start over)",
                    store.session_file_path().display()
                )));
            }

            let mut answers = SurveyAnswers::new();
            for goal in &goals {
                answers.toggle(SelectionList::Goals, goal)?;
            }
            for interest in &interests {
                answers.toggle(SelectionList::Interests, interest)?;
            }
            for strength in &strengths {
                answers.toggle(SelectionList::Strengths, strength)?;
            }
            for challenge in &challenges {
                answers.toggle(SelectionList::Challenges, challenge)?;
            }
            for struggle in &struggles {
                answers.toggle(SelectionList::Struggles, struggle)?;
            }
            if let Some(situation) = &situation {
                answers.set_situation(situation)?;
            }

            // Walk every survey gate the way the step flow would.
            let mut survey = Survey::with_answers(answers);
            while !survey.is_complete() {
                survey.advance()?;
            }
            let answers = survey.into_answers()?;

            run_generation_delay();

            let path = PathGenerator::new().generate(&answers);
            let today = chrono::Local::now().date_naive();
            let state = SessionState::create(answers, path, today)?;
            store.save(&state)?;

            println!(
                "{}",
                "Your Skills Mountain is ready! 🏔".green().bold()
            );
            println!(
                "Track: {}  ·  {} stages to the summit",
                state.track_title.bold(),
                state.roadmap.summary().total
            );
            println!();
            println!("Your first daily skills are waiting - run {}.", "lifepath today".cyan());
        }

        Commands::Today => {
            let state = load_and_roll(&store)?;
            print!("{}", render_daily(&state.plan, state.streak_days, theme));
        }

        Commands::Done { task_id } => {
            let mut state = load_and_roll(&store)?;
            let (receipt, levels_gained) = state.complete_task(&task_id)?;
            state.touch();
            store.save(&state)?;

            let task_title = state
                .plan
                .get(&task_id)
                .map(|t| t.title.clone())
                .unwrap_or_default();
            println!(
                "{} {}  {}",
                "Completed:".green().bold(),
                task_title,
                xp_line(receipt.xp_awarded, levels_gained, state.level.level)
            );
            if receipt.all_required_complete {
                println!(
                    "{}",
                    "🎁 All required skills done - today's reward is unlocked!"
                        .green()
                        .bold()
                );
            }
        }

        Commands::Add {
            title,
            description,
            kind,
            duration,
            xp,
        } => {
            let mut state = load_and_roll(&store)?;
            let spec = CustomTaskSpec {
                title,
                description,
                kind,
                duration,
                xp,
            };
            let task = state.add_custom_task(spec)?;
            let line = format!(
                "{} {} ({}, +{} XP, id {})",
                "Added:".green().bold(),
                task.title,
                task.kind,
                task.xp,
                task.id
            );
            state.touch();
            store.save(&state)?;
            println!("{line}");
        }

        Commands::Mountain => {
            let state = load_and_roll(&store)?;
            print!("{}", render_mountain(&state.roadmap, &state.track_title, theme));
        }

        Commands::Climb { stage_id } => {
            let mut state = load_and_roll(&store)?;
            let stage_id = match stage_id {
                Some(id) => id,
                None => state
                    .roadmap
                    .current()
                    .map(|s| s.id.clone())
                    .ok_or_else(|| {
                        LifePathError::session("the mountain is fully climbed - nothing to complete")
                    })?,
            };

            let (receipt, levels_gained) = state.complete_stage(&stage_id)?;
            state.touch();
            store.save(&state)?;

            let title = state
                .roadmap
                .get(&stage_id)
                .map(|s| s.title.clone())
                .unwrap_or_default();
            println!(
                "{} {}  {}",
                "Stage complete:".green().bold(),
                title.bold(),
                xp_line(receipt.xp_awarded, levels_gained, state.level.level)
            );
            if let Some(reward) = &receipt.reward {
                println!("🏆 Reward earned: {}", reward.yellow().bold());
            }
            match &receipt.unlocked {
                Some(next_id) => {
                    if let Some(next) = state.roadmap.get(next_id) {
                        println!("Next up: {} ({})", next.title.cyan(), next.duration);
                    }
                }
                None => println!(
                    "{}",
                    "You reached the summit! Every stage is complete.".green().bold()
                ),
            }
        }

        Commands::Progress => {
            let state = load_and_roll(&store)?;
            print!("{}", render_summary(&state, theme));
        }

        Commands::Reset { force } => {
            if !store.exists() {
                println!("No session to reset.");
                return Ok(());
            }
            if !force {
                return Err(LifePathError::session(
                    "resetting deletes all progress; pass --force to confirm",
                ));
            }
            store.delete()?;
            println!("Session deleted. Run {} to start a new climb.", "lifepath onboard".cyan());
        }
    }

    Ok(())
}

/// Load the session, rolling (and saving) the day boundary if one passed.
fn load_and_roll(store: &SessionStore) -> Result<SessionState> {
    let mut state = store.load()?;
    let today = chrono::Local::now().date_naive();
    if state.roll_day(today, &PathGenerator::new()) {
        state.touch();
        store.save(&state)?;
        println!(
            "{}",
            "A new day - your skills have been refreshed.".dimmed()
        );
    }
    Ok(state)
}

/// The "AI is building your mountain" moment.
///
/// Pure theater: a spinner for a fixed duration, skipped when stdout is
/// not a terminal. The generator itself is instantaneous.
fn run_generation_delay() {
    if !std::io::stdout().is_terminal() {
        return;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Analyzing your profile...");
    thread::sleep(Duration::from_millis(1200));
    spinner.set_message("Crafting your personalized Skills Mountain...");
    thread::sleep(Duration::from_millis(1200));
    spinner.finish_and_clear();
}

fn print_catalogs() {
    let section = |title: &str, flag: &str, options: &[&str]| {
        println!("{} ({flag})", title.bold());
        for option in options {
            println!("  - {option}");
        }
        println!();
    };
    section("Goals", "--goal", GOAL_OPTIONS);
    section("Interests", "--interest", INTEREST_OPTIONS);
    section("Strengths", "--strength", STRENGTH_OPTIONS);
    section("Challenges", "--challenge", CHALLENGE_OPTIONS);
    section("Situations", "--situation", SITUATION_OPTIONS);
    section("Struggles", "--struggle", STRUGGLE_OPTIONS);
}
