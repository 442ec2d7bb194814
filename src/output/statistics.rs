use comfy_table::{Cell, Color};

use crate::core::StatisticsSnapshot;
use crate::output::format::{
    ViewOptions, activity_meter, create_styled_table, format_last_completed, header_cell,
    print_title, right_cell, styled_cell,
};

pub(crate) fn print_statistics(snapshot: &StatisticsSnapshot, options: ViewOptions) {
    let c = options.use_color;
    let overall = &snapshot.overall;

    print_title("Statistics", options);
    let mut summary = create_styled_table();
    summary.set_header(vec![
        header_cell("Habits", c),
        header_cell("Done Today", c),
        header_cell("Remaining", c),
        header_cell("Rate Today", c),
        header_cell("All-time Completions", c),
    ]);
    summary.add_row(vec![
        right_cell(&overall.total_habits.to_string(), None, true),
        right_cell(&overall.completed_today.to_string(), options.color(Color::Green), true),
        right_cell(&overall.remaining_today.to_string(), options.color(Color::Yellow), false),
        right_cell(&format!("{:.1}%", overall.completion_rate_today), None, true),
        right_cell(&overall.total_completions.to_string(), None, false),
    ]);
    println!("{summary}");

    if snapshot.habits.is_empty() {
        println!("\n  No habits to analyze yet. Add one with `habitctl add <NAME>`.\n");
        return;
    }

    print_title("Habit Activity", options);
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("ID", c),
        header_cell("Habit", c),
        header_cell("Completed", c),
        header_cell("Activity", c),
        header_cell("Last Done", c),
    ]);
    for entry in &snapshot.habits {
        table.add_row(vec![
            right_cell(&entry.habit.id.to_string(), None, false),
            Cell::new(&entry.habit.name),
            right_cell(&format!("{} times", entry.habit.total_completed), None, false),
            styled_cell(&activity_meter(entry.activity_level), options.color(Color::Green), false),
            Cell::new(format_last_completed(entry.habit.last_completed.as_deref())),
        ]);
    }
    println!("{table}");
    println!("\n  Run `habitctl history <ID>` for a habit's calendar.\n");
}
