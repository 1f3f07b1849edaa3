//! Visual elements owned by screens
//!
//! A screen creates its elements when it is loaded and drops them when it
//! is unloaded. While a screen is not loaded it has nothing to draw.

use ratatui::{layout::Alignment, widgets::ListState};

/// A single line of text drawn centered in its area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayer {
    text: String,
    alignment: Alignment,
}

impl TextLayer {
    /// Create a centered text layer
    pub fn new(text: String) -> Self {
        Self {
            text,
            alignment: Alignment::Center,
        }
    }

    /// Replace the displayed text
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// The displayed text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Horizontal alignment of the text
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

/// A one-section selectable list
#[derive(Debug, Clone)]
pub struct MenuLayer {
    section_title: &'static str,
    rows: Vec<&'static str>,
    list_state: ListState,
}

impl MenuLayer {
    /// Create a menu with the first row highlighted
    pub fn new(section_title: &'static str, rows: Vec<&'static str>) -> Self {
        let mut list_state = ListState::default();
        if !rows.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            section_title,
            rows,
            list_state,
        }
    }

    /// Title shown above the rows
    pub fn section_title(&self) -> &'static str {
        self.section_title
    }

    /// Row labels, in display order
    pub fn rows(&self) -> &[&'static str] {
        &self.rows
    }

    /// Index of the highlighted row
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Move the highlight down, wrapping to the first row
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i < self.rows.len() - 1 => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the highlight up, wrapping to the last row
    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.rows.len() - 1,
        };
        self.list_state.select(Some(previous));
    }

    /// Selection state for stateful rendering
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_layer_is_centered() {
        let mut layer = TextLayer::new("Reps: 0".to_string());
        assert_eq!(layer.alignment(), Alignment::Center);
        layer.set_text("Reps: 1".to_string());
        assert_eq!(layer.text(), "Reps: 1");
    }

    #[test]
    fn test_menu_layer_wraps() {
        let mut menu = MenuLayer::new("Exercises", vec!["a", "b"]);
        assert_eq!(menu.selected(), Some(0));

        menu.select_next();
        assert_eq!(menu.selected(), Some(1));
        menu.select_next();
        assert_eq!(menu.selected(), Some(0));

        menu.select_previous();
        assert_eq!(menu.selected(), Some(1));
    }

    #[test]
    fn test_empty_menu_has_no_selection() {
        let mut menu = MenuLayer::new("Empty", Vec::new());
        menu.select_next();
        menu.select_previous();
        assert_eq!(menu.selected(), None);
    }
}
