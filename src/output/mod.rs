mod dashboard;
mod format;
mod history;
mod json;
mod statistics;
mod statusline;

pub(crate) use dashboard::{print_dashboard, print_notice, print_suggestions};
pub(crate) use format::ViewOptions;
pub(crate) use history::print_history;
pub(crate) use json::{dashboard_json, history_json, print_json, statistics_json, statusline_json};
pub(crate) use statistics::print_statistics;
pub(crate) use statusline::print_statusline;
