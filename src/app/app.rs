//! Main application controller
//!
//! Owns the terminal and the navigation state and runs the event loop.

use crate::{
    app::{
        screens::{display_region, text_style},
        state::StateManager,
        tui::Tui,
    },
    config::AppConfig,
    JournalError, Result,
};
use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders},
    Frame,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Navigation and screen state
    state_manager: StateManager,
}

impl App {
    /// Create a new application instance with its initial screen pushed
    pub fn new(config: &AppConfig) -> Result<Self> {
        let tui = Tui::new(config.tick_rate()).map_err(tui_error)?;
        Ok(Self {
            tui,
            state_manager: StateManager::new(config.variant),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init().map_err(tui_error)?;
        log::debug!(
            "Done initializing, visible screen: {:?}",
            self.state_manager.current_state()
        );
        Ok(())
    }

    /// Run the main application loop until quit or termination
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.draw()?;
            let event = self.tui.next_event().await.map_err(tui_error)?;
            self.state_manager.handle_host_event(event);
        }
        Ok(())
    }

    /// Release all screens and give the terminal back
    pub fn shutdown(&mut self) -> Result<()> {
        self.state_manager.teardown();
        log::info!(
            "Shutdown complete, screen lifecycle balanced: {}",
            self.state_manager.ledger().is_balanced()
        );
        self.tui.restore().map_err(tui_error)
    }

    fn draw(&mut self) -> Result<()> {
        let state_manager = &mut self.state_manager;
        self.tui
            .draw(|f| render(f, state_manager))
            .map_err(tui_error)
    }
}

fn tui_error(err: std::io::Error) -> JournalError {
    JournalError::TuiError(err.to_string())
}

/// Draw the watch display with the visible screen inside it
pub fn render(f: &mut Frame, state_manager: &mut StateManager) {
    let region: Rect = display_region(f.size());
    let bezel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(text_style());
    let inner = bezel.inner(region);
    f.render_widget(bezel, region);

    if let Some(screen) = state_manager.top_screen_mut() {
        screen.render(f, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Button, InputAction};
    use crate::config::AppVariant;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(state_manager: &mut StateManager) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
        terminal.draw(|f| render(f, state_manager)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_menu() {
        let mut state_manager = StateManager::new(AppVariant::Journal);
        let text = screen_text(&mut state_manager);
        assert!(text.contains("Exercises"));
        assert!(text.contains("Squat"));
        assert!(text.contains("Bench Press"));
        assert!(text.contains("Deadlift"));
    }

    #[test]
    fn test_render_counter() {
        let mut state_manager = StateManager::new(AppVariant::Journal);
        state_manager.handle_action(InputAction::Button(Button::Select));
        for _ in 0..3 {
            state_manager.handle_action(InputAction::Button(Button::Up));
        }
        let text = screen_text(&mut state_manager);
        assert!(text.contains("Squat"));
        assert!(text.contains("Reps: 3"));
    }

    #[test]
    fn test_render_after_teardown_draws_only_bezel() {
        let mut state_manager = StateManager::new(AppVariant::Counter);
        state_manager.teardown();
        let text = screen_text(&mut state_manager);
        assert!(!text.contains("Reps"));
    }
}
