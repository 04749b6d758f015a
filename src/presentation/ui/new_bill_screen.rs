//! New bill screen.
//!
//! Navigation target only: the submission form itself lives in the back
//! office and is out of scope here. The screen exists so that the
//! new-bill route is observable and the user can return to the list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Title of the new-bill screen; stable marker.
pub const NEW_BILL_TITLE: &str = "Envoyer une note de frais";

/// Result of handling a key on the new-bill screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewBillAction {
    /// Nothing to do.
    None,
    /// Return to the bills list.
    Back,
}

/// Placeholder screen for the new-bill route.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewBillScreen;

impl NewBillScreen {
    /// Creates the screen.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handles a key event.
    #[must_use]
    pub fn handle_key(self, key: KeyEvent) -> NewBillAction {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => NewBillAction::Back,
            _ => NewBillAction::None,
        }
    }
}

impl Widget for &NewBillScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]);
        let [body, footer] = vertical.areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {NEW_BILL_TITLE} "));

        Paragraph::new(Line::styled(
            "La saisie se fait depuis le back office.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block)
        .render(body, buf);

        Paragraph::new("Échap: retour aux notes de frais")
            .style(Style::default().fg(Color::DarkGray))
            .render(footer, buf);
    }
}
