//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::use_cases::LoadBillsUseCase;
use crate::domain::entities::UserType;
use crate::domain::ports::{BillsPort, NavigatorPort, SessionPort};
use crate::domain::route::Route;
use crate::presentation::events::{Action, ChannelNavigator};
use crate::presentation::ui::{BillsAction, BillsScreen, NewBillAction, NewBillScreen};

enum CurrentScreen {
    Bills(BillsScreen),
    NewBill(NewBillScreen),
}

/// Top-level application: owns the screens, the action channel and the
/// fetch lifecycle.
pub struct App {
    screen: CurrentScreen,
    load_bills: LoadBillsUseCase,
    session: Arc<dyn SessionPort>,
    navigator: ChannelNavigator,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Bumped on every bills-screen mount; a fetch result tagged with an
    /// older generation belongs to a torn-down mount and is ignored.
    generation: u64,
    running: bool,
}

impl App {
    /// Creates the application.
    ///
    /// The bills port is optional: without one the list resolves empty
    /// and only the interaction handlers remain functional.
    #[must_use]
    pub fn new(bills_port: Option<Arc<dyn BillsPort>>, session: Arc<dyn SessionPort>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let load_bills = bills_port.map_or_else(
            LoadBillsUseCase::without_store,
            LoadBillsUseCase::new,
        );

        Self {
            screen: CurrentScreen::Bills(BillsScreen::new()),
            load_bills,
            session,
            navigator: ChannelNavigator::new(action_tx.clone()),
            action_tx,
            action_rx,
            generation: 0,
            running: true,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if terminal drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        match self.session.current_user().await {
            Some(user) => {
                info!(user_type = %user.user_type, email = %user.email, "Session found");
                if user.user_type == UserType::Admin {
                    warn!("Admin dashboard is not available here, showing employee bills");
                }
            }
            None => info!("No stored session, continuing without one"),
        }

        self.spawn_fetch();

        let mut terminal_events = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                maybe_event = terminal_events.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event
                        && key.kind == KeyEventKind::Press
                    {
                        self.handle_key(key);
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    /// Spawns the fetch for the current bills-screen mount.
    fn spawn_fetch(&self) {
        let use_case = self.load_bills.clone();
        let tx = self.action_tx.clone();
        let generation = self.generation;

        tokio::spawn(async move {
            let action = match use_case.execute().await {
                Ok(bills) => Action::BillsLoaded { generation, bills },
                Err(e) => Action::LoadFailed {
                    generation,
                    message: e.to_string(),
                },
            };
            if tx.send(action).is_err() {
                debug!("Fetch finished after the main loop stopped");
            }
        });
    }

    /// Tears down the current mount and re-enters the bills screen at
    /// its loading state.
    fn mount_bills(&mut self) {
        self.generation += 1;
        self.screen = CurrentScreen::Bills(BillsScreen::new());
        self.spawn_fetch();
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::BillsLoaded { generation, bills } => {
                if generation != self.generation {
                    debug!(generation, "Ignoring fetch result from a stale mount");
                    return;
                }
                if let CurrentScreen::Bills(screen) = &mut self.screen {
                    screen.set_ready(bills);
                }
            }
            Action::LoadFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    debug!(generation, "Ignoring fetch failure from a stale mount");
                    return;
                }
                if let CurrentScreen::Bills(screen) = &mut self.screen {
                    screen.set_error(message);
                }
            }
            Action::Navigate(route) => self.navigate_to(route),
        }
    }

    fn navigate_to(&mut self, route: Route) {
        debug!(route = %route, "Navigating");
        match route {
            Route::Bills => self.mount_bills(),
            Route::NewBill => self.screen = CurrentScreen::NewBill(NewBillScreen::new()),
            Route::Login => warn!("Login screen is handled by the back office, ignoring"),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            CurrentScreen::Bills(screen) => {
                if !screen.receipt_viewer().is_visible() && Self::is_quit_event(key) {
                    self.running = false;
                    return;
                }
                match screen.handle_key(key) {
                    BillsAction::NewBill => BillsScreen::open_new_bill(&self.navigator),
                    BillsAction::Reload => self.mount_bills(),
                    BillsAction::None => {}
                }
            }
            CurrentScreen::NewBill(screen) => {
                if Self::is_quit_event(key) {
                    self.running = false;
                    return;
                }
                if screen.handle_key(key) == NewBillAction::Back {
                    self.navigator.navigate(Route::Bills);
                }
            }
        }
    }

    fn is_quit_event(key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    fn render(&self, frame: &mut Frame) {
        match &self.screen {
            CurrentScreen::Bills(screen) => frame.render_widget(screen, frame.area()),
            CurrentScreen::NewBill(screen) => frame.render_widget(screen, frame.area()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BillId, DisplayBill};
    use crate::domain::ports::mocks::{MockBillsPort, MockSessionPort};
    use crate::presentation::ui::BillsViewState;

    fn app_with_bills() -> App {
        let port: Arc<dyn BillsPort> = Arc::new(MockBillsPort::with_bills(Vec::new()));
        App::new(Some(port), Arc::new(MockSessionPort::employee("a@a")))
    }

    fn loaded(generation: u64) -> Action {
        Action::BillsLoaded {
            generation,
            bills: vec![DisplayBill {
                id: BillId::from("b1"),
                date: "2 Jui. 21".to_string(),
                raw_date: "2021-06-02".to_string(),
                status: "En attente".to_string(),
                amount: 100.0,
                name: "expense".to_string(),
                file_url: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_fetch_result_transitions_to_ready() {
        let mut app = app_with_bills();
        app.handle_action(loaded(0));

        let CurrentScreen::Bills(screen) = &app.screen else {
            panic!("expected bills screen");
        };
        assert!(matches!(screen.state(), BillsViewState::Ready(bills) if bills.len() == 1));
    }

    #[tokio::test]
    async fn test_fetch_failure_transitions_to_error() {
        let mut app = app_with_bills();
        app.handle_action(Action::LoadFailed {
            generation: 0,
            message: "Erreur 404".to_string(),
        });

        let CurrentScreen::Bills(screen) = &app.screen else {
            panic!("expected bills screen");
        };
        assert_eq!(*screen.state(), BillsViewState::Error("Erreur 404".into()));
    }

    #[tokio::test]
    async fn test_stale_fetch_result_is_ignored() {
        let mut app = app_with_bills();
        app.generation = 3;

        app.handle_action(loaded(2));

        let CurrentScreen::Bills(screen) = &app.screen else {
            panic!("expected bills screen");
        };
        assert_eq!(*screen.state(), BillsViewState::Loading);
    }

    #[tokio::test]
    async fn test_new_bill_key_emits_one_navigation() {
        let mut app = app_with_bills();
        app.handle_action(loaded(0));

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));

        let action = app.action_rx.try_recv().unwrap();
        assert!(matches!(action, Action::Navigate(Route::NewBill)));
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_navigation_switches_screens() {
        let mut app = app_with_bills();

        app.handle_action(Action::Navigate(Route::NewBill));
        assert!(matches!(app.screen, CurrentScreen::NewBill(_)));

        app.handle_action(Action::Navigate(Route::Bills));
        assert!(matches!(app.screen, CurrentScreen::Bills(_)));
        assert_eq!(app.generation, 1);
    }
}
