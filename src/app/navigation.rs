//! Navigation stack
//!
//! Screens are loaded when pushed and unloaded when popped or torn down.
//! The ledger counts both so a full run can be checked for balance.

use std::collections::HashMap;

use super::screens::{ActiveScreen, ScreenKind};

/// Load and unload counts per screen type
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LifecycleLedger {
    loads: HashMap<ScreenKind, usize>,
    unloads: HashMap<ScreenKind, usize>,
}

impl LifecycleLedger {
    fn record_load(&mut self, kind: ScreenKind) {
        *self.loads.entry(kind).or_insert(0) += 1;
    }

    fn record_unload(&mut self, kind: ScreenKind) {
        *self.unloads.entry(kind).or_insert(0) += 1;
    }

    /// Number of times a screen of this kind was loaded
    pub fn loads(&self, kind: ScreenKind) -> usize {
        self.loads.get(&kind).copied().unwrap_or(0)
    }

    /// Number of times a screen of this kind was unloaded
    pub fn unloads(&self, kind: ScreenKind) -> usize {
        self.unloads.get(&kind).copied().unwrap_or(0)
    }

    /// True when every loaded screen has been unloaded exactly once
    pub fn is_balanced(&self) -> bool {
        [ScreenKind::Menu, ScreenKind::Counter]
            .iter()
            .all(|kind| self.loads(*kind) == self.unloads(*kind))
    }
}

/// LIFO stack of screens; the top one is visible
#[derive(Debug, Default)]
pub struct ScreenStack {
    screens: Vec<ActiveScreen>,
    ledger: LifecycleLedger,
}

impl ScreenStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a screen and make it the visible one
    pub fn push(&mut self, mut screen: ActiveScreen) {
        screen.load();
        self.ledger.record_load(screen.kind());
        log::info!("Pushed {:?} screen (depth {})", screen.kind(), self.screens.len() + 1);
        self.screens.push(screen);
    }

    /// Unload and remove the top screen. The base screen is never popped;
    /// `None` is returned instead.
    pub fn pop(&mut self) -> Option<ActiveScreen> {
        if self.screens.len() <= 1 {
            return None;
        }
        let mut screen = self.screens.pop()?;
        screen.unload();
        self.ledger.record_unload(screen.kind());
        log::info!("Popped {:?} screen (depth {})", screen.kind(), self.screens.len());
        Some(screen)
    }

    /// Unload every screen, top first. Safe to call more than once.
    pub fn teardown(&mut self) {
        while let Some(mut screen) = self.screens.pop() {
            screen.unload();
            self.ledger.record_unload(screen.kind());
        }
    }

    /// The visible screen
    pub fn top(&self) -> Option<&ActiveScreen> {
        self.screens.last()
    }

    /// The visible screen, mutably
    pub fn top_mut(&mut self) -> Option<&mut ActiveScreen> {
        self.screens.last_mut()
    }

    /// Number of screens on the stack
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// True once the stack has been torn down
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Screen kinds from bottom to top
    pub fn kinds(&self) -> Vec<ScreenKind> {
        self.screens.iter().map(ActiveScreen::kind).collect()
    }

    /// Load/unload counts so far
    pub fn ledger(&self) -> &LifecycleLedger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::{CounterScreen, MenuScreen};
    use crate::models::EXERCISES;

    fn menu() -> ActiveScreen {
        ActiveScreen::Menu(MenuScreen::new())
    }

    fn counter() -> ActiveScreen {
        ActiveScreen::Counter(CounterScreen::for_exercise(EXERCISES[0]))
    }

    #[test]
    fn test_push_loads_screen() {
        let mut stack = ScreenStack::new();
        stack.push(menu());
        assert_eq!(stack.len(), 1);
        assert!(stack.top().unwrap().is_loaded());
        assert_eq!(stack.ledger().loads(ScreenKind::Menu), 1);
    }

    #[test]
    fn test_pop_unloads_and_keeps_base() {
        let mut stack = ScreenStack::new();
        stack.push(menu());
        stack.push(counter());
        assert_eq!(stack.kinds(), vec![ScreenKind::Menu, ScreenKind::Counter]);

        let popped = stack.pop().expect("counter should pop");
        assert_eq!(popped.kind(), ScreenKind::Counter);
        assert!(!popped.is_loaded());

        assert!(stack.pop().is_none());
        assert_eq!(stack.kinds(), vec![ScreenKind::Menu]);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut stack = ScreenStack::new();
        stack.push(menu());
        stack.push(counter());
        stack.teardown();
        stack.teardown();

        assert!(stack.is_empty());
        assert_eq!(stack.ledger().unloads(ScreenKind::Menu), 1);
        assert_eq!(stack.ledger().unloads(ScreenKind::Counter), 1);
        assert!(stack.ledger().is_balanced());
    }

    #[test]
    fn test_ledger_unbalanced_while_running() {
        let mut stack = ScreenStack::new();
        stack.push(menu());
        assert!(!stack.ledger().is_balanced());
    }
}
