//! Shared rendering helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Returns a rect centered in `r` covering the given percentages.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Formats an amount in euros, dropping the cents when they are zero.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("{amount:.0} €")
    } else {
        format!("{amount:.2} €")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_whole_and_fractional_amounts() {
        assert_eq!(format_amount(400.0), "400 €");
        assert_eq!(format_amount(348.5), "348.50 €");
    }

    #[test]
    fn test_centered_rect_fits_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, parent);
        assert!(rect.width <= 50);
        assert!(parent.contains(rect.as_position()));
    }
}
