use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::api::HabitApi;
use crate::cli::{Cli, Commands};
use crate::consts::MAX_HABIT_NAME_LEN;
use crate::core::{
    DashboardSnapshot, HistoryResponse, HistorySnapshot, StatisticsSnapshot, StreakSummary,
    suggestion,
};
use crate::error::AppError;
use crate::output::{
    ViewOptions, dashboard_json, history_json, print_dashboard, print_history, print_json,
    print_notice, print_statistics, print_statusline, print_suggestions, statistics_json,
    statusline_json,
};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) api: &'a dyn HabitApi,
    pub(crate) today: NaiveDate,
    pub(crate) options: ViewOptions,
}

/// Fetch the habit list and turn it into a dashboard snapshot
fn load_dashboard(api: &dyn HabitApi, today: NaiveDate) -> Result<DashboardSnapshot, AppError> {
    let habits = api
        .list_habits()
        .map_err(AppError::operation("load habits"))?;
    debug!(habits = habits.len(), "dashboard loaded");
    Ok(DashboardSnapshot::build(habits, today))
}

/// History and streak are independent requests; issue them together.
fn load_history(
    api: &dyn HabitApi,
    id: i64,
    days: u32,
) -> Result<(HistoryResponse, StreakSummary), AppError> {
    let (history, streak) = rayon::join(|| api.history(id, days), || api.streak(id));
    let history = history.map_err(AppError::operation("load habit history"))?;
    let streak = streak.map_err(AppError::operation("load habit streak"))?;
    debug!(id, records = history.history.len(), "history loaded");
    Ok((history, streak))
}

fn load_statistics(api: &dyn HabitApi) -> Result<StatisticsSnapshot, AppError> {
    let (habits, overall) = rayon::join(|| api.list_habits(), || api.overall_stats());
    let habits = habits.map_err(AppError::operation("load habits"))?;
    let overall = overall.map_err(AppError::operation("load statistics"))?;
    Ok(StatisticsSnapshot::build(habits, overall))
}

/// Validate a habit name the way the add form does before anything is sent
fn validate_habit_name(raw: &str) -> Result<&str, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::InvalidHabitName {
            reason: "Habit name is required",
        });
    }
    if name.chars().count() > MAX_HABIT_NAME_LEN {
        return Err(AppError::InvalidHabitName {
            reason: "Habit name must be at most 100 characters",
        });
    }
    Ok(name)
}

/// Ask on stderr so stdout stays machine-readable with `--json`
fn confirm(prompt: &str, input: &mut dyn BufRead) -> Result<bool, AppError> {
    eprint!("{prompt} [y/N] ");
    io::stderr().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn show_dashboard(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let snapshot = load_dashboard(ctx.api, ctx.today)?;
    if ctx.cli.json {
        print_json(&dashboard_json(&snapshot))
    } else {
        print_dashboard(&snapshot, ctx.options);
        Ok(())
    }
}

/// Report a successful mutation, then show the freshly fetched dashboard
fn refresh_after(ctx: &CommandContext<'_>, notice: &str) -> Result<(), AppError> {
    let snapshot = load_dashboard(ctx.api, ctx.today)?;
    if ctx.cli.json {
        print_json(&serde_json::json!({
            "message": notice,
            "dashboard": dashboard_json(&snapshot),
        }))
    } else {
        print_notice(notice, ctx.options);
        print_dashboard(&snapshot, ctx.options);
        Ok(())
    }
}

fn handle_add(
    ctx: &CommandContext<'_>,
    name: Option<&str>,
    suggestion_index: Option<usize>,
) -> Result<(), AppError> {
    let raw = match suggestion_index {
        Some(index) => suggestion(index).ok_or(AppError::UnknownSuggestion { index })?,
        None => name.unwrap_or_default(),
    };
    let name = validate_habit_name(raw)?;
    let created = ctx
        .api
        .add_habit(name)
        .map_err(AppError::operation("add habit"))?;
    info!(id = ?created.habit_id, name = created.name.as_deref().unwrap_or(name), "habit added");
    let message = if created.message.is_empty() {
        "Habit added successfully!"
    } else {
        created.message.as_str()
    };
    refresh_after(ctx, &format!("✅ {message}"))
}

fn handle_done(ctx: &CommandContext<'_>, id: i64) -> Result<(), AppError> {
    let message = ctx
        .api
        .mark_done(id)
        .map_err(AppError::operation("mark habit as done"))?;
    let snapshot = load_dashboard(ctx.api, ctx.today)?;
    let name = snapshot
        .find(id)
        .map_or_else(|| format!("Habit #{id}"), |h| h.name.clone());
    let notice = format!("✅ {name}: {message}");
    if ctx.cli.json {
        print_json(&serde_json::json!({
            "message": notice,
            "dashboard": dashboard_json(&snapshot),
        }))
    } else {
        print_notice(&notice, ctx.options);
        print_dashboard(&snapshot, ctx.options);
        Ok(())
    }
}

fn handle_delete(
    ctx: &CommandContext<'_>,
    id: i64,
    yes: bool,
    input: &mut dyn BufRead,
) -> Result<(), AppError> {
    let before = load_dashboard(ctx.api, ctx.today)?;
    let name = before
        .find(id)
        .map_or_else(|| format!("Habit #{id}"), |h| h.name.clone());

    if !yes && !confirm(&format!("Delete \"{name}\"?"), input)? {
        info!(id, "delete cancelled");
        if ctx.cli.json {
            return print_json(&serde_json::json!({ "message": "Cancelled.", "deleted": false }));
        }
        println!("Cancelled.");
        return Ok(());
    }

    ctx.api
        .delete_habit(id)
        .map_err(AppError::operation("delete habit"))?;
    info!(id, "habit deleted");
    refresh_after(ctx, &format!("🗑️ {name} deleted"))
}

fn handle_history(ctx: &CommandContext<'_>, id: i64, days: Option<u32>) -> Result<(), AppError> {
    let days = days.unwrap_or_else(|| ctx.cli.default_history_days());
    if days == 0 {
        return Err(AppError::InvalidDays { days });
    }
    let (history, streak) = load_history(ctx.api, id, days)?;
    let snapshot = HistorySnapshot::build(id, &history, streak, ctx.today)?;
    if ctx.cli.json {
        print_json(&history_json(&snapshot))
    } else {
        print_history(&snapshot, ctx.options);
        Ok(())
    }
}

fn handle_stats(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let snapshot = load_statistics(ctx.api)?;
    if ctx.cli.json {
        print_json(&statistics_json(&snapshot))
    } else {
        print_statistics(&snapshot, ctx.options);
        Ok(())
    }
}

fn handle_statusline(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let snapshot = load_dashboard(ctx.api, ctx.today)?;
    if ctx.cli.json {
        print_json(&statusline_json(&snapshot))
    } else {
        print_statusline(&snapshot);
        Ok(())
    }
}

/// Dispatch one CLI command
pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match &ctx.cli.command {
        None | Some(Commands::Dashboard) => show_dashboard(ctx),
        Some(Commands::Add { name, suggestion }) => handle_add(ctx, name.as_deref(), *suggestion),
        Some(Commands::Suggestions) => {
            print_suggestions(ctx.options);
            Ok(())
        }
        Some(Commands::Done { id }) => handle_done(ctx, *id),
        Some(Commands::Delete { id, yes }) => {
            handle_delete(ctx, *id, *yes, &mut io::stdin().lock())
        }
        Some(Commands::History { id, days }) => handle_history(ctx, *id, *days),
        Some(Commands::Stats) => handle_stats(ctx),
        Some(Commands::Statusline) => handle_statusline(ctx),
    }
}
