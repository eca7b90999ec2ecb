//! One handler per subcommand.
//!
//! Handlers print to stdout. Tip failures are wrapped into reports that carry
//! a suggestion, so the user always sees how to try again.

use color_eyre::Section;
use eyre::Result;
use tipwell_core::models::goal::Goal;
use tipwell_core::models::profile::{Gender, Profile};
use tipwell_core::models::tip::Tip;
use tipwell_gemini::error::TipError;
use tipwell_tips::board::resolve_saved_board;
use tipwell_tips::profile::{load_profile, logout, save_profile};

use crate::config::{self, API_KEY_ENV, TipwellConfig};
use crate::router::{Cli, Commands, ConfigAction, ProfileAction};
use crate::state::AppState;

pub async fn run(cli: Cli) -> Result<()> {
    let config = config::load_config()?;

    if let Commands::Config { action } = &cli.command {
        return config_command(&config, cli.store.as_deref(), action);
    }
    if let Commands::Goals = &cli.command {
        list_goals();
        return Ok(());
    }

    let store_path = config.resolve_store_path(cli.store.as_deref())?;
    tracing::debug!(path = %store_path.display(), "opening store");
    let mut app = AppState::open(&config, &store_path, config::api_key_from_env())?;

    match cli.command {
        Commands::Profile { action } => match action {
            ProfileAction::Set { age, gender, goal } => set_profile(&app, age, gender, goal),
            ProfileAction::Show => show_profile(&app),
        },
        Commands::Tips { regenerate } => show_tips(&app, regenerate).await,
        Commands::Tip { id } => show_tip(&app, &id).await,
        Commands::Save { id } => save_tip(&mut app, &id),
        Commands::Unsave { id } => unsave_tip(&mut app, &id),
        Commands::Saved => show_saved(&app),
        Commands::Logout => logout_command(&mut app),
        Commands::Goals | Commands::Config { .. } => Ok(()),
    }
}

/// Turn a tip failure into a report with a next step for the user.
pub fn tip_failure(err: TipError, action: &str) -> eyre::Report {
    tracing::debug!(error = %err, action, "tip request failed");
    let report =
        eyre::eyre!(err.user_message().to_string()).wrap_err(format!("could not {action}"));
    if err.is_retryable() {
        report.suggestion("Run the same command again to retry.")
    } else {
        report.suggestion(format!(
            "Set {API_KEY_ENV} in your environment, then run the command again."
        ))
    }
}

fn require_profile(app: &AppState) -> Result<(Profile, Goal)> {
    let profile = load_profile(&*app.store).ok_or_else(|| {
        eyre::eyre!("no profile found")
            .suggestion("Create one with `tipwell profile set --age <AGE> --gender <GENDER> --goal <GOAL>`.")
    })?;
    let goal = profile
        .primary_goal()
        .ok_or_else(|| eyre::eyre!("profile has no goal"))?;
    Ok((profile, goal))
}

fn require_listed_tip(app: &AppState, profile: &Profile, goal: Goal, id: &str) -> Result<Tip> {
    app.cache
        .find_cached_tip(goal.label(), profile.age, id)
        .ok_or_else(|| {
            eyre::eyre!("tip `{id}` is not in your current tip list")
                .suggestion("Run `tipwell tips` to load your list first.")
        })
}

fn list_goals() {
    for goal in Goal::ALL {
        println!("{:<16} {}", goal.id(), goal.label());
    }
}

fn set_profile(app: &AppState, age: u8, gender: Gender, goal: Goal) -> Result<()> {
    let profile = Profile::new(age, gender, vec![goal])?;
    save_profile(&*app.store, &profile)?;
    println!("Profile saved: {age}, {gender}, goal: {}", goal.label());
    println!("Run `tipwell tips` to see your tips.");
    Ok(())
}

fn show_profile(app: &AppState) -> Result<()> {
    let (profile, goal) = require_profile(app)?;
    println!("Age:    {}", profile.age);
    println!("Gender: {}", profile.gender);
    println!("Goal:   {} ({})", goal.label(), goal.id());
    Ok(())
}

async fn show_tips(app: &AppState, regenerate: bool) -> Result<()> {
    let (profile, goal) = require_profile(app)?;

    let tips = app
        .cache
        .get_tip_list(goal.label(), profile.age, regenerate)
        .await
        .map_err(|e| tip_failure(e, "load your tips"))?;

    println!("Tips for {} (age {}):", goal.label(), profile.age);
    println!();
    for tip in &tips {
        let marker = if app.saved.is_saved(&tip.id) { "*" } else { " " };
        println!(
            "{marker} {} {:<40}  {} · {}",
            tip.icon, tip.title, tip.category, tip.duration
        );
        println!("    id: {}", tip.id);
    }
    println!();
    println!("`tipwell tip <ID>` for details, `tipwell tips --regenerate` for new ones.");
    Ok(())
}

async fn show_tip(app: &AppState, id: &str) -> Result<()> {
    let (profile, goal) = require_profile(app)?;
    let tip = require_listed_tip(app, &profile, goal, id)?;

    let detail = app
        .cache
        .get_tip_detail(goal.label(), &tip.id, &tip.title, profile.age)
        .await
        .map_err(|e| tip_failure(e, "load this tip"))?;

    println!("{} {}", tip.icon, tip.title);
    println!("{} · {}", tip.category, tip.duration);
    println!();
    println!("{}", detail.description);
    println!();
    for (n, step) in detail.steps.iter().enumerate() {
        println!("{}. {step}", n + 1);
    }
    println!();
    if app.saved.is_saved(&tip.id) {
        println!("Saved. `tipwell unsave {}` to remove it.", tip.id);
    } else {
        println!("`tipwell save {}` to keep it.", tip.id);
    }
    Ok(())
}

fn save_tip(app: &mut AppState, id: &str) -> Result<()> {
    let (profile, goal) = require_profile(app)?;
    let tip = require_listed_tip(app, &profile, goal, id)?;

    if app.saved.save(&tip.id, goal.label(), profile.age) {
        println!("Saved \"{}\".", tip.title);
    } else {
        println!("\"{}\" is already saved.", tip.title);
    }
    Ok(())
}

fn unsave_tip(app: &mut AppState, id: &str) -> Result<()> {
    if app.saved.remove(id) {
        println!("Removed `{id}` from your saved tips.");
    } else {
        println!("`{id}` was not saved.");
    }
    Ok(())
}

fn show_saved(app: &AppState) -> Result<()> {
    if app.saved.is_empty() {
        println!("No saved tips yet. `tipwell save <ID>` adds one.");
        return Ok(());
    }

    let board = resolve_saved_board(&app.cache, app.saved.tips());
    for entry in &board {
        println!("{} {}", entry.tip.icon, entry.tip.title);
        println!(
            "    id: {}  ·  {} (age {})  ·  saved {}",
            entry.tip.id, entry.saved.goal_label, entry.saved.age, entry.saved.saved_at
        );
    }

    let hidden = app.saved.len() - board.len();
    if hidden > 0 {
        println!();
        println!("{hidden} saved tip(s) are not shown because their tip list is no longer cached.");
    }
    Ok(())
}

fn logout_command(app: &mut AppState) -> Result<()> {
    logout(&*app.store)?;
    app.saved.reset();
    println!("Logged out. Profile, saved tips and cached tips were removed.");
    Ok(())
}

fn config_command(
    config: &TipwellConfig,
    store_override: Option<&std::path::Path>,
    action: &ConfigAction,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("config file: {}", config::config_path()?.display());
            println!("model:       {}", config.model);
            println!("base url:    {}", config.base_url);
            println!("retry delay: {} ms", config.retry_delay_ms);
            println!(
                "store:       {}",
                config.resolve_store_path(store_override)?.display()
            );
            match config::api_key_from_env() {
                Some(key) => println!(
                    "api key:     {} (from {API_KEY_ENV})",
                    config::redact_api_key(&key)
                ),
                None => println!("api key:     not set ({API_KEY_ENV})"),
            }
            Ok(())
        }
        ConfigAction::Init { force } => {
            let path = config::config_path()?;
            if path.exists() && !force {
                return Err(eyre::eyre!("config already exists at {}", path.display())
                    .suggestion("Pass --force to overwrite it."));
            }
            let written = config::save_config(&TipwellConfig::default())?;
            println!("Wrote {}", written.display());
            Ok(())
        }
    }
}
