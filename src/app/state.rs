//! Application state management
//!
//! Maps key presses to button actions and applies them to the navigation
//! stack. All handling happens on the single event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::navigation::{LifecycleLedger, ScreenStack};
use super::screens::{ActiveScreen, CounterScreen, MenuScreen, ScreenCommand, ScreenKind};
use super::tui::HostEvent;
use crate::config::AppVariant;

/// Physical buttons of the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Select,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// One of the three buttons (arrows/k/j, Enter/Space)
    Button(Button),
    /// Leave the current screen (Esc, Backspace)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Which screen is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    MenuVisible,
    CounterVisible,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    stack: ScreenStack,
    should_quit: bool,
}

impl StateManager {
    /// Create the state manager with the initial screen pushed
    pub fn new(variant: AppVariant) -> Self {
        let mut stack = ScreenStack::new();
        match variant {
            AppVariant::Journal => stack.push(ActiveScreen::Menu(MenuScreen::new())),
            AppVariant::Counter => stack.push(ActiveScreen::Counter(CounterScreen::standalone())),
        }
        Self {
            stack,
            should_quit: false,
        }
    }

    /// Get the current application state, `None` once torn down
    pub fn current_state(&self) -> Option<AppState> {
        self.stack.top().map(|screen| match screen.kind() {
            ScreenKind::Menu => AppState::MenuVisible,
            ScreenKind::Counter => AppState::CounterVisible,
        })
    }

    /// Screen kinds from bottom to top
    pub fn screens(&self) -> Vec<ScreenKind> {
        self.stack.kinds()
    }

    /// The visible screen, for rendering
    pub fn top_screen_mut(&mut self) -> Option<&mut ActiveScreen> {
        self.stack.top_mut()
    }

    /// The visible counter screen, if a counter is on top
    pub fn counter_screen(&self) -> Option<&CounterScreen> {
        match self.stack.top() {
            Some(ActiveScreen::Counter(screen)) => Some(screen),
            _ => None,
        }
    }

    /// Load/unload counts of every screen pushed so far
    pub fn ledger(&self) -> &LifecycleLedger {
        self.stack.ledger()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Unload all screens
    pub fn teardown(&mut self) {
        if !self.stack.is_empty() {
            log::info!("Tearing down {} screen(s)", self.stack.len());
        }
        self.stack.teardown();
    }

    /// Apply an input action to the visible screen and the stack
    pub fn handle_action(&mut self, action: InputAction) {
        if self.should_quit {
            return;
        }

        match action {
            InputAction::Quit => self.quit(),
            InputAction::Back => {
                // Back at the base screen leaves the app
                if self.stack.pop().is_none() {
                    self.quit();
                }
            }
            InputAction::Button(button) => {
                let command = match self.stack.top_mut() {
                    Some(screen) => screen.handle_button(button),
                    None => ScreenCommand::None,
                };
                self.apply(command);
            }
            InputAction::None => {}
        }
    }

    fn apply(&mut self, command: ScreenCommand) {
        match command {
            ScreenCommand::None => {}
            ScreenCommand::OpenCounter(exercise) => {
                self.stack
                    .push(ActiveScreen::Counter(CounterScreen::for_exercise(exercise)));
            }
            ScreenCommand::Close => {
                if self.stack.pop().is_none() {
                    log::warn!("Ignoring close request on the base screen");
                }
            }
        }
    }

    /// Convert keyboard event to an input action
    pub fn key_to_action(key: KeyEvent) -> InputAction {
        if key.kind != KeyEventKind::Press {
            return InputAction::None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputAction::Quit;
        }

        // Everything else must be a plain (or shifted) key
        if !KeyModifiers::SHIFT.contains(key.modifiers) {
            return InputAction::None;
        }

        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,

            // Buttons
            KeyCode::Up | KeyCode::Char('k') => InputAction::Button(Button::Up),
            KeyCode::Down | KeyCode::Char('j') => InputAction::Button(Button::Down),
            KeyCode::Enter | KeyCode::Char(' ') => InputAction::Button(Button::Select),

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => InputAction::Back,

            _ => InputAction::None,
        }
    }

    /// Handle a keyboard event and update state accordingly
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let action = Self::key_to_action(key);
        self.handle_action(action);
    }

    /// Handle an event delivered by the host terminal
    pub fn handle_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Key(key) => self.handle_key_event(key),
            HostEvent::Terminate => {
                log::info!("Termination requested by host");
                self.quit();
            }
            HostEvent::Resize | HostEvent::Tick => {}
        }
    }
}

impl Drop for StateManager {
    fn drop(&mut self) {
        self.teardown();
    }
}
