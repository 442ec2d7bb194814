use comfy_table::{Cell, Color};

use crate::core::{DashboardSnapshot, SUGGESTED_HABITS};
use crate::output::format::{
    ViewOptions, create_styled_table, format_last_completed, header_cell, print_title,
    progress_bar, right_cell, styled_cell,
};

const SUMMARY_BAR_WIDTH: usize = 20;

pub(crate) fn print_dashboard(snapshot: &DashboardSnapshot, options: ViewOptions) {
    print_title(&format!("Habits for {}", snapshot.today), options);

    if snapshot.rows.is_empty() {
        println!("  No habits yet. Add one with `habitctl add <NAME>` or see `habitctl suggestions`.\n");
        return;
    }

    let c = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("ID", c),
        header_cell("Habit", c),
        header_cell("Today", c),
        header_cell("Total", c),
        header_cell("Last Done", c),
    ]);

    for row in &snapshot.rows {
        let status = if row.completed_today {
            styled_cell("✓ done", options.color(Color::Green), true)
        } else {
            styled_cell("pending", options.color(Color::Yellow), false)
        };
        table.add_row(vec![
            right_cell(&row.habit.id.to_string(), None, false),
            Cell::new(&row.habit.name),
            status,
            right_cell(&row.habit.total_completed.to_string(), None, false),
            Cell::new(format_last_completed(row.habit.last_completed.as_deref())),
        ]);
    }

    println!("{table}");

    let summary = &snapshot.summary;
    println!(
        "\n  {}/{} done today | {} remaining | {} {}%\n",
        summary.completed,
        summary.total,
        summary.remaining,
        progress_bar(summary.completion_rate_percent, SUMMARY_BAR_WIDTH),
        summary.completion_rate_percent
    );
}

/// Feedback line printed before the refreshed dashboard after a mutation
pub(crate) fn print_notice(text: &str, options: ViewOptions) {
    if options.use_color {
        println!("\x1b[32m{text}\x1b[0m");
    } else {
        println!("{text}");
    }
}

pub(crate) fn print_suggestions(options: ViewOptions) {
    print_title("Need inspiration?", options);
    let c = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("#", c), header_cell("Suggested habit", c)]);
    for (i, name) in SUGGESTED_HABITS.iter().enumerate() {
        table.add_row(vec![right_cell(&(i + 1).to_string(), None, false), Cell::new(name)]);
    }
    println!("{table}");
    println!("\n  Add one with `habitctl add --suggestion <#>`\n");
}
