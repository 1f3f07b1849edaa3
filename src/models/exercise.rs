//! Exercise list
//!
//! The menu entries are compiled in and never change at runtime.

/// A selectable exercise in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseEntry {
    /// Display name
    pub name: &'static str,
    /// Position in the fixed list
    pub index: usize,
}

/// Title of the single menu section
pub const MENU_SECTION_TITLE: &str = "Exercises";

/// All exercises, in menu order
pub const EXERCISES: [ExerciseEntry; 3] = [
    ExerciseEntry { name: "Squat", index: 0 },
    ExerciseEntry { name: "Bench Press", index: 1 },
    ExerciseEntry { name: "Deadlift", index: 2 },
];

impl ExerciseEntry {
    /// Look up an entry by its menu position
    pub fn at(index: usize) -> Option<&'static ExerciseEntry> {
        EXERCISES.get(index)
    }
}
