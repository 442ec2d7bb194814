use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::ACTIVITY_LEVELS;

/// Rendering switches shared by every view
#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewOptions {
    pub(crate) use_color: bool,
}

impl ViewOptions {
    pub(super) fn color(self, color: Color) -> Option<Color> {
        self.use_color.then_some(color)
    }
}

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Horizontal bar of `width` cells, filled in proportion to `percent` (clamped to 100)
pub(super) fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    let mut bar = String::with_capacity(width * BAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(BAR_FILLED, filled));
    bar.extend(std::iter::repeat_n(BAR_EMPTY, width - filled));
    bar
}

/// Five-dot meter, e.g. `●●●○○` for level 3
pub(super) fn activity_meter(level: u8) -> String {
    let level = level.min(ACTIVITY_LEVELS);
    let mut meter = "●".repeat(level as usize);
    meter.push_str(&"○".repeat((ACTIVITY_LEVELS - level) as usize));
    meter
}

/// Last completion as a date, or a dash when the habit was never done
pub(super) fn format_last_completed(last_completed: Option<&str>) -> String {
    match last_completed.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw.get(..10).unwrap_or(raw).to_string(),
        None => "-".to_string(),
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

pub(super) fn center_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Center)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Section title with an optional ANSI bold/colour
pub(super) fn print_title(title: &str, options: ViewOptions) {
    if options.use_color {
        println!("\n  \x1b[1;36m{title}\x1b[0m\n");
    } else {
        println!("\n  {title}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_widths() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(50, 4), "██░░");
        assert_eq!(progress_bar(100, 4), "████");
        assert_eq!(progress_bar(250, 4), "████");
        assert_eq!(progress_bar(67, 10).chars().filter(|&c| c == BAR_FILLED).count(), 7);
    }

    #[test]
    fn activity_meter_levels() {
        assert_eq!(activity_meter(0), "○○○○○");
        assert_eq!(activity_meter(3), "●●●○○");
        assert_eq!(activity_meter(9), "●●●●●");
    }

    #[test]
    fn last_completed_is_truncated_to_date() {
        assert_eq!(format_last_completed(Some("2024-03-05T10:00:00")), "2024-03-05");
        assert_eq!(format_last_completed(Some("2024-03-05")), "2024-03-05");
        assert_eq!(format_last_completed(None), "-");
        assert_eq!(format_last_completed(Some("  ")), "-");
    }

    #[test]
    fn color_is_suppressed_without_color() {
        let plain = ViewOptions { use_color: false };
        let colored = ViewOptions { use_color: true };
        assert_eq!(plain.color(Color::Green), None);
        assert_eq!(colored.color(Color::Green), Some(Color::Green));
    }
}
