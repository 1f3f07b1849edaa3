//! Data models module
//!
//! Contains the rep counter and the fixed exercise list.

pub mod counter;
pub mod exercise;

// Re-export commonly used types
pub use counter::RepCounter;
pub use exercise::{ExerciseEntry, EXERCISES, MENU_SECTION_TITLE};
