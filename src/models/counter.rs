//! Repetition counter
//!
//! The only mutable domain state of the journal. A counter belongs to one
//! counter screen and lives exactly as long as that screen does.

/// Label prefix used when rendering the count
pub const REPS_LABEL: &str = "Reps";

/// Non-negative repetition counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepCounter {
    reps: u32,
}

impl RepCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current number of repetitions
    pub fn value(&self) -> u32 {
        self.reps
    }

    /// Add one repetition
    pub fn increment(&mut self) {
        self.reps = self.reps.saturating_add(1);
    }

    /// Remove one repetition, staying at zero when already there
    pub fn decrement(&mut self) {
        self.reps = self.reps.saturating_sub(1);
    }

    /// Clear the count
    pub fn reset(&mut self) {
        self.reps = 0;
    }

    /// Text shown on the counter screen, e.g. `Reps: 3`
    pub fn display_text(&self) -> String {
        format!("{}: {}", REPS_LABEL, self.reps)
    }
}
