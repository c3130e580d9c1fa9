use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::status_bar::StatusBar;
use crate::components::tab_bar::TabBar;
use crate::components::{Component, EventResult};
use crate::screens::burn::BurnScreen;
use crate::screens::economics::EconomicsScreen;
use crate::screens::opportunity::OpportunityScreen;
use crate::screens::valuation::ValuationScreen;
use crate::state::{AppState, TabId};

/// One instance of each dashboard screen.
struct Screens {
    opportunity: OpportunityScreen,
    burn: BurnScreen,
    valuation: ValuationScreen,
    economics: EconomicsScreen,
}

impl Screens {
    fn by_tab(&mut self, tab: TabId) -> &mut dyn Component {
        match tab {
            TabId::Opportunity => &mut self.opportunity,
            TabId::Burn => &mut self.burn,
            TabId::Valuation => &mut self.valuation,
            TabId::Economics => &mut self.economics,
        }
    }
}

/// The application shell: owns the state, the chrome components, and
/// the event loop.
pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    screens: Screens,
}

impl App {
    /// Build the app with `variates` trials per distribution. Every
    /// pipeline runs once here so the first frame has charts.
    pub fn new(variates: usize) -> Self {
        Self {
            state: AppState::new(variates),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            screens: Screens {
                opportunity: OpportunityScreen::new(),
                burn: BurnScreen::new(),
                valuation: ValuationScreen::new(),
                economics: EconomicsScreen::new(),
            },
        }
    }

    /// Runs the application's main loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(variates = self.state.variates, "Starting main loop");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        self.screens
            .by_tab(self.state.active_tab)
            .render(frame, area, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('r') if key_event.modifiers.is_empty() => {
                // Fresh draws for the visible dashboard and anything
                // sharing its assumptions
                self.state.recompute_dependents(self.state.active_tab);
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Tab bar gets first crack at digit keys
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then the active screen
        self.screens
            .by_tab(self.state.active_tab)
            .handle_key(key_event, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Test that q sets the exit flag
    #[test]
    fn test_quit_key_exits() {
        let mut app = App::new(16);
        assert!(!app.state.exit);

        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(app.state.exit);
    }

    /// Test that digit keys reach the tab bar and switch dashboards
    #[test]
    fn test_digit_keys_switch_tabs() {
        let mut app = App::new(16);
        assert_eq!(app.state.active_tab, TabId::Opportunity);

        app.handle_key_event(press(KeyCode::Char('3')));
        assert_eq!(app.state.active_tab, TabId::Valuation);

        app.handle_key_event(press(KeyCode::Char('1')));
        assert_eq!(app.state.active_tab, TabId::Opportunity);
    }

    /// Test that adjustment keys reach the active screen and trigger
    /// a recompute with fresh draws
    #[test]
    fn test_adjust_key_recomputes_active_screen() {
        let mut app = App::new(16);
        app.handle_key_event(press(KeyCode::Char('4')));

        let truck_mean_before = app.state.economics.params.truck_mean.value;
        let samples_before = app.state.economics.charts[0].samples.clone();

        app.handle_key_event(press(KeyCode::Char('l')));

        assert_eq!(
            app.state.economics.params.truck_mean.value,
            truck_mean_before + 10.0
        );
        assert_ne!(app.state.economics.charts[0].samples, samples_before);
    }

    /// Test that Esc clears a surfaced error
    #[test]
    fn test_esc_clears_error() {
        let mut app = App::new(16);
        app.state.set_error("something failed".to_string());

        app.handle_key_event(press(KeyCode::Esc));
        assert!(app.state.error_message.is_none());
    }

    /// Test that r resamples without touching any parameter
    #[test]
    fn test_resample_key_redraws() {
        let mut app = App::new(16);
        let params_before = app.state.opportunity.years;
        let samples_before = app.state.opportunity.charts[0].samples.clone();

        app.handle_key_event(press(KeyCode::Char('r')));

        assert_eq!(app.state.opportunity.years, params_before);
        assert_ne!(app.state.opportunity.charts[0].samples, samples_before);
    }
}
