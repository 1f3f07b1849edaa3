//! Exercise menu screen
//!
//! One section listing the fixed exercises. Picking any of them opens a
//! fresh counter; every entry behaves the same.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::{text_style, ScreenCommand};
use crate::app::{layers::MenuLayer, state::Button};
use crate::models::{ExerciseEntry, EXERCISES, MENU_SECTION_TITLE};

/// Exercise selection screen
#[derive(Debug, Default)]
pub struct MenuScreen {
    menu: Option<MenuLayer>,
}

impl MenuScreen {
    /// Create the menu screen; rows are built on load
    pub fn new() -> Self {
        Self { menu: None }
    }

    /// Create the menu layer
    pub fn load(&mut self) {
        let rows = EXERCISES.iter().map(|e| e.name).collect();
        self.menu = Some(MenuLayer::new(MENU_SECTION_TITLE, rows));
    }

    /// Destroy the menu layer
    pub fn unload(&mut self) {
        self.menu = None;
    }

    /// Whether the menu layer exists
    pub fn is_loaded(&self) -> bool {
        self.menu.is_some()
    }

    /// Entries shown by the menu, in display order
    pub fn entries(&self) -> &'static [ExerciseEntry] {
        &EXERCISES
    }

    /// The highlighted entry, if the screen is loaded
    pub fn selected_entry(&self) -> Option<&'static ExerciseEntry> {
        self.menu
            .as_ref()
            .and_then(MenuLayer::selected)
            .and_then(ExerciseEntry::at)
    }

    /// Highlight the next row
    pub fn select_next(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.select_next();
        }
    }

    /// Highlight the previous row
    pub fn select_previous(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.select_previous();
        }
    }

    /// Choose an entry; always opens the counter screen
    pub fn select(&self, entry: ExerciseEntry) -> ScreenCommand {
        log::info!("Selected exercise: {}", entry.name);
        ScreenCommand::OpenCounter(entry)
    }

    /// React to a button press
    pub fn handle_button(&mut self, button: Button) -> ScreenCommand {
        match button {
            Button::Up => {
                self.select_previous();
                ScreenCommand::None
            }
            Button::Down => {
                self.select_next();
                ScreenCommand::None
            }
            Button::Select => match self.selected_entry() {
                Some(entry) => self.select(*entry),
                None => ScreenCommand::None,
            },
        }
    }

    /// Render the section header and the exercise list
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(menu) = &mut self.menu else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Section header
                Constraint::Min(0),    // Rows
            ])
            .split(area);

        let header = Paragraph::new(menu.section_title())
            .style(text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = menu
            .rows()
            .iter()
            .map(|row| ListItem::new(*row))
            .collect();

        let list = List::new(items)
            .style(text_style())
            .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, chunks[1], menu.list_state_mut());
    }
}
