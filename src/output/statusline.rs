use crate::core::DashboardSnapshot;

/// Single line for statusline/tmux integration
/// Format: "Habits: 2/5 today (40%)"
pub(crate) fn statusline_text(snapshot: &DashboardSnapshot) -> String {
    let summary = &snapshot.summary;
    if summary.total == 0 {
        return "Habits: none".to_string();
    }
    let mut line = format!(
        "Habits: {}/{} today ({}%)",
        summary.completed, summary.total, summary.completion_rate_percent
    );
    if summary.remaining == 0 {
        line.push_str(" ✓");
    }
    line
}

pub(crate) fn print_statusline(snapshot: &DashboardSnapshot) {
    println!("{}", statusline_text(snapshot));
}
