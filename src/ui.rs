use ratatui::style::Color;

use crate::models::NoticeLevel;
use crate::store::SortDirection;

/// Header marker for a sortable column: direction arrow when the column is
/// the active sort, a neutral marker otherwise
pub fn sort_marker(state: (SortDirection, bool)) -> &'static str {
    match state {
        (SortDirection::Ascending, true) => "↑",
        (SortDirection::Descending, true) => "↓",
        (_, false) => "↕",
    }
}

/// Price cell text
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Status bar color per notice severity
pub fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::Cyan,
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_marker_reflects_active_direction() {
        assert_eq!(sort_marker((SortDirection::Ascending, true)), "↑");
        assert_eq!(sort_marker((SortDirection::Descending, true)), "↓");
        assert_eq!(sort_marker((SortDirection::Descending, false)), "↕");
    }

    #[test]
    fn test_format_price_drops_trailing_zero() {
        assert_eq!(format_price(5.0), "$5");
        assert_eq!(format_price(7.5), "$7.5");
    }
}
