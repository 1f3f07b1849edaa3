//! Rep counter screen
//!
//! Up adds a rep, Down removes one, Select resets. The count is owned by
//! this screen and goes away with it; nothing is saved.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    widgets::Paragraph,
    Frame,
};

use super::{text_style, ScreenCommand};
use crate::app::{layers::TextLayer, state::Button};
use crate::models::{ExerciseEntry, RepCounter};

/// What the Select button does after clearing the count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectBehavior {
    /// Clear and return to the previous screen
    ResetAndExit,
    /// Clear and stay (used when the counter is the only screen)
    ResetInPlace,
}

/// Counter screen component
#[derive(Debug)]
pub struct CounterScreen {
    exercise: Option<ExerciseEntry>,
    counter: RepCounter,
    select_behavior: SelectBehavior,
    text_layer: Option<TextLayer>,
}

impl CounterScreen {
    /// Counter opened from the exercise menu
    pub fn for_exercise(exercise: ExerciseEntry) -> Self {
        Self {
            exercise: Some(exercise),
            counter: RepCounter::new(),
            select_behavior: SelectBehavior::ResetAndExit,
            text_layer: None,
        }
    }

    /// Counter used as the base screen
    pub fn standalone() -> Self {
        Self {
            exercise: None,
            counter: RepCounter::new(),
            select_behavior: SelectBehavior::ResetInPlace,
            text_layer: None,
        }
    }

    /// Create the text layer showing the current count
    pub fn load(&mut self) {
        self.text_layer = Some(TextLayer::new(self.counter.display_text()));
    }

    /// Destroy the text layer
    pub fn unload(&mut self) {
        self.text_layer = None;
    }

    /// Whether the text layer exists
    pub fn is_loaded(&self) -> bool {
        self.text_layer.is_some()
    }

    /// Current count
    pub fn reps(&self) -> u32 {
        self.counter.value()
    }

    /// Exercise this counter was opened for, if any
    pub fn exercise(&self) -> Option<&ExerciseEntry> {
        self.exercise.as_ref()
    }

    /// What Select does on this screen
    pub fn select_behavior(&self) -> SelectBehavior {
        self.select_behavior
    }

    /// Text currently shown, if loaded
    pub fn display_text(&self) -> Option<&str> {
        self.text_layer.as_ref().map(TextLayer::text)
    }

    /// Add a rep and update the text
    pub fn increment(&mut self) {
        self.counter.increment();
        self.refresh();
    }

    /// Remove a rep (not below zero) and update the text
    pub fn decrement(&mut self) {
        self.counter.decrement();
        self.refresh();
    }

    /// Clear the count and update the text
    pub fn reset(&mut self) {
        self.counter.reset();
        self.refresh();
    }

    /// Clear the count and ask to leave the screen
    // Saving the finished set is not implemented; the count is discarded.
    pub fn reset_and_exit(&mut self) -> ScreenCommand {
        self.reset();
        ScreenCommand::Close
    }

    fn refresh(&mut self) {
        log::debug!("{}", self.counter.display_text());
        if let Some(layer) = &mut self.text_layer {
            layer.set_text(self.counter.display_text());
        }
    }

    /// React to a button press
    pub fn handle_button(&mut self, button: Button) -> ScreenCommand {
        match button {
            Button::Up => {
                self.increment();
                ScreenCommand::None
            }
            Button::Down => {
                self.decrement();
                ScreenCommand::None
            }
            Button::Select => match self.select_behavior {
                SelectBehavior::ResetAndExit => self.reset_and_exit(),
                SelectBehavior::ResetInPlace => {
                    self.reset();
                    ScreenCommand::None
                }
            },
        }
    }

    /// Render the exercise name, the count, and the button hints
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(layer) = &self.text_layer else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Exercise name
                Constraint::Min(0),
                Constraint::Length(1), // Count
                Constraint::Min(0),
                Constraint::Length(1), // Hints
            ])
            .split(area);

        if let Some(exercise) = &self.exercise {
            let title = Paragraph::new(exercise.name)
                .style(text_style())
                .alignment(Alignment::Center);
            f.render_widget(title, chunks[0]);
        }

        let count = Paragraph::new(layer.text())
            .style(text_style().add_modifier(Modifier::BOLD))
            .alignment(layer.alignment());
        f.render_widget(count, chunks[2]);

        let select_hint = match self.select_behavior {
            SelectBehavior::ResetAndExit => "done",
            SelectBehavior::ResetInPlace => "reset",
        };
        let hints = Paragraph::new(format!("Up +1  Enter {}  Down -1", select_hint))
            .style(text_style())
            .alignment(Alignment::Center);
        f.render_widget(hints, chunks[4]);
    }
}
