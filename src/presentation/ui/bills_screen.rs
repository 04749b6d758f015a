//! Bills list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::domain::entities::DisplayBill;
use crate::domain::ports::NavigatorPort;
use crate::domain::route::Route;
use crate::presentation::ui::format_amount;
use crate::presentation::widgets::ReceiptViewer;

/// Stable markers located by automated checks. They are interface, not
/// decoration: renaming one breaks the rendered-markup contract.
pub mod markers {
    /// Shown while the fetch is in flight.
    pub const LOADING: &str = "Chargement...";
    /// Title of the error surface; the error message renders inside it.
    pub const ERROR: &str = " Erreur ";
    /// Title of the bills table.
    pub const BILLS_TABLE: &str = " Mes notes de frais ";
    /// Label of the new-bill control.
    pub const NEW_BILL: &str = "Nouvelle note de frais";
    /// Per-row control revealing the receipt.
    pub const VIEW_RECEIPT: &str = "[o]";
}

/// What the user currently sees.
///
/// Exactly one variant is active; the state is owned by the mount and
/// recomputed on every fetch, never persisted. `Error` and `Ready` are
/// terminal for a mount; a reload re-enters at `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum BillsViewState {
    /// Fetch in flight.
    Loading,
    /// The fetch rejected; carries the error message, surfaced verbatim.
    Error(String),
    /// Bills ready to display, already ordered.
    Ready(Vec<DisplayBill>),
}

/// Result of handling a key on the bills screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillsAction {
    /// Nothing to do.
    None,
    /// Open the new-bill screen.
    NewBill,
    /// Re-enter loading and fetch again.
    Reload,
}

/// The bills list screen and its transient view-state.
pub struct BillsScreen {
    state: BillsViewState,
    table: TableState,
    receipt_viewer: ReceiptViewer,
}

impl BillsScreen {
    /// Creates the screen in its initial loading state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: BillsViewState::Loading,
            table: TableState::default(),
            receipt_viewer: ReceiptViewer::new(),
        }
    }

    /// Returns the current view-state.
    #[must_use]
    pub const fn state(&self) -> &BillsViewState {
        &self.state
    }

    /// Returns the receipt viewer modal.
    #[must_use]
    pub const fn receipt_viewer(&self) -> &ReceiptViewer {
        &self.receipt_viewer
    }

    /// Transitions to `Ready` with the bills in display order.
    pub fn set_ready(&mut self, bills: Vec<DisplayBill>) {
        self.table
            .select((!bills.is_empty()).then_some(0));
        self.state = BillsViewState::Ready(bills);
    }

    /// Transitions to `Error`, keeping the message untouched.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = BillsViewState::Error(message.into());
    }

    /// Re-enters the loading state for a fresh fetch.
    pub fn set_loading(&mut self) {
        self.state = BillsViewState::Loading;
        self.table.select(None);
        self.receipt_viewer.close();
    }

    /// Returns the currently selected bill, if any.
    #[must_use]
    pub fn selected_bill(&self) -> Option<&DisplayBill> {
        let BillsViewState::Ready(bills) = &self.state else {
            return None;
        };
        self.table.selected().and_then(|i| bills.get(i))
    }

    /// Opens the new-bill screen through the supplied navigator.
    ///
    /// Side effect only; navigation is assumed always available.
    pub fn open_new_bill(navigator: &dyn NavigatorPort) {
        navigator.navigate(Route::NewBill);
    }

    /// Opens the receipt viewer on the selected bill.
    ///
    /// A bill without a receipt still opens the viewer, with no image.
    pub fn open_selected_receipt(&mut self) {
        let file_url = self.selected_bill().and_then(|b| b.file_url.clone());
        self.receipt_viewer.open(file_url);
    }

    /// Handles a key event, returning the action the caller must perform.
    pub fn handle_key(&mut self, key: KeyEvent) -> BillsAction {
        if self.receipt_viewer.is_visible() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.receipt_viewer.close();
            }
            return BillsAction::None;
        }

        match key.code {
            KeyCode::Char('n') => return BillsAction::NewBill,
            KeyCode::Char('r') => return BillsAction::Reload,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter | KeyCode::Char('v') => {
                if matches!(self.state, BillsViewState::Ready(_)) {
                    self.open_selected_receipt();
                }
            }
            _ => {}
        }

        BillsAction::None
    }

    fn select_next(&mut self) {
        let BillsViewState::Ready(bills) = &self.state else {
            return;
        };
        if bills.is_empty() {
            return;
        }
        let next = self
            .table
            .selected()
            .map_or(0, |i| (i + 1).min(bills.len() - 1));
        self.table.select(Some(next));
    }

    fn select_previous(&mut self) {
        if matches!(&self.state, BillsViewState::Ready(bills) if !bills.is_empty()) {
            let previous = self.table.selected().map_or(0, |i| i.saturating_sub(1));
            self.table.select(Some(previous));
        }
    }

    fn render_loading(area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        Paragraph::new(Line::styled(
            markers::LOADING,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ))
        .centered()
        .render(center, buf);
    }

    fn render_error(message: &str, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(markers::ERROR);

        Paragraph::new(Line::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ))
        .block(block)
        .render(area, buf);
    }

    fn render_table(&self, bills: &[DisplayBill], area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]);
        let [table_area, footer_area] = vertical.areas(area);

        let header = Row::new(["Date", "Nom", "Montant", "Statut", "Justif."])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = bills.iter().map(|bill| {
            let receipt = if bill.file_url.is_some() {
                markers::VIEW_RECEIPT
            } else {
                ""
            };
            Row::new(vec![
                bill.date.clone(),
                bill.name.clone(),
                format_amount(bill.amount),
                bill.status.clone(),
                receipt.to_string(),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Fill(1),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(7),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(markers::BILLS_TABLE),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        let mut table_state = self.table.clone();
        StatefulWidget::render(table, table_area, buf, &mut table_state);

        let footer = Line::from(vec![
            Span::styled("n", Style::default().fg(Color::Cyan)),
            Span::raw(format!(": {}", markers::NEW_BILL)),
            Span::raw(" | "),
            Span::styled("Entrée", Style::default().fg(Color::Cyan)),
            Span::raw(": voir le justificatif | "),
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::raw(": recharger | "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(": quitter"),
        ]);
        Paragraph::new(footer)
            .style(Style::default().fg(Color::DarkGray))
            .render(footer_area, buf);
    }
}

impl Default for BillsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &BillsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state {
            BillsViewState::Loading => BillsScreen::render_loading(area, buf),
            BillsViewState::Error(message) => BillsScreen::render_error(message, area, buf),
            BillsViewState::Ready(bills) => self.render_table(bills, area, buf),
        }

        (&self.receipt_viewer).render(area, buf);
    }
}
