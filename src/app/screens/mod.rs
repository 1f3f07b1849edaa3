//! TUI screen components
//!
//! The two screens of the journal and the pieces they share: the watch
//! display region, the text style, and the commands a screen can issue.

pub mod counter;
pub mod menu;

pub use counter::{CounterScreen, SelectBehavior};
pub use menu::MenuScreen;

use crate::models::ExerciseEntry;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    Frame,
};

use super::state::Button;

/// Width of the watch display, in terminal cells
pub const DISPLAY_WIDTH: u16 = 36;
/// Height of the watch display, in terminal cells
pub const DISPLAY_HEIGHT: u16 = 12;

/// The one text style used by every screen
pub fn text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Fixed-size display area centered in `area`, clipped when `area` is smaller
pub fn display_region(area: Rect) -> Rect {
    let width = DISPLAY_WIDTH.min(area.width);
    let height = DISPLAY_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Screen type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Menu,
    Counter,
}

/// Navigation requested by a screen after handling a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenCommand {
    /// Stay on the current screen
    None,
    /// Push a counter screen for the chosen exercise
    OpenCounter(ExerciseEntry),
    /// Pop the current screen
    Close,
}

/// A screen instance living on the navigation stack
#[derive(Debug)]
pub enum ActiveScreen {
    Menu(MenuScreen),
    Counter(CounterScreen),
}

impl ActiveScreen {
    /// Screen type of this instance
    pub fn kind(&self) -> ScreenKind {
        match self {
            ActiveScreen::Menu(_) => ScreenKind::Menu,
            ActiveScreen::Counter(_) => ScreenKind::Counter,
        }
    }

    /// Create the screen's visual elements
    pub fn load(&mut self) {
        match self {
            ActiveScreen::Menu(screen) => screen.load(),
            ActiveScreen::Counter(screen) => screen.load(),
        }
    }

    /// Destroy the screen's visual elements
    pub fn unload(&mut self) {
        match self {
            ActiveScreen::Menu(screen) => screen.unload(),
            ActiveScreen::Counter(screen) => screen.unload(),
        }
    }

    /// Whether the visual elements exist
    pub fn is_loaded(&self) -> bool {
        match self {
            ActiveScreen::Menu(screen) => screen.is_loaded(),
            ActiveScreen::Counter(screen) => screen.is_loaded(),
        }
    }

    /// Forward a button press to the screen
    pub fn handle_button(&mut self, button: Button) -> ScreenCommand {
        match self {
            ActiveScreen::Menu(screen) => screen.handle_button(button),
            ActiveScreen::Counter(screen) => screen.handle_button(button),
        }
    }

    /// Draw the screen into `area`
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        match self {
            ActiveScreen::Menu(screen) => screen.render(f, area),
            ActiveScreen::Counter(screen) => screen.render(f, area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_region_is_centered() {
        let region = display_region(Rect::new(0, 0, 80, 24));
        assert_eq!(region, Rect::new(22, 6, DISPLAY_WIDTH, DISPLAY_HEIGHT));
    }

    #[test]
    fn test_display_region_clips_to_small_terminal() {
        let region = display_region(Rect::new(0, 0, 20, 8));
        assert_eq!(region, Rect::new(0, 0, 20, 8));
    }
}
