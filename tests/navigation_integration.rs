//! Integration tests for menu/counter navigation

use workout_journal::app::{AppState, Button, InputAction, ScreenKind, StateManager};
use workout_journal::config::AppVariant;
use workout_journal::models::EXERCISES;

fn press(state_manager: &mut StateManager, button: Button, times: usize) {
    for _ in 0..times {
        state_manager.handle_action(InputAction::Button(button));
    }
}

#[test]
fn test_every_exercise_opens_a_fresh_counter() {
    for (index, exercise) in EXERCISES.iter().enumerate() {
        let mut state_manager = StateManager::new(AppVariant::Journal);
        press(&mut state_manager, Button::Down, index);
        press(&mut state_manager, Button::Select, 1);

        assert_eq!(state_manager.screens(), vec![ScreenKind::Menu, ScreenKind::Counter]);
        let counter = state_manager.counter_screen().expect("counter on top");
        assert_eq!(counter.reps(), 0);
        assert_eq!(counter.display_text(), Some("Reps: 0"));
        assert_eq!(counter.exercise(), Some(exercise));
    }
}

#[test]
fn test_confirm_resets_and_returns_to_menu() {
    let mut state_manager = StateManager::new(AppVariant::Journal);
    press(&mut state_manager, Button::Select, 1);
    press(&mut state_manager, Button::Up, 17);
    assert_eq!(state_manager.counter_screen().map(|c| c.reps()), Some(17));

    press(&mut state_manager, Button::Select, 1);
    assert_eq!(state_manager.current_state(), Some(AppState::MenuVisible));
    assert_eq!(state_manager.screens(), vec![ScreenKind::Menu]);

    // Count is not carried over to the next set
    press(&mut state_manager, Button::Select, 1);
    assert_eq!(state_manager.counter_screen().map(|c| c.reps()), Some(0));
}

#[test]
fn test_floor_and_display_through_navigation() {
    let mut state_manager = StateManager::new(AppVariant::Journal);
    press(&mut state_manager, Button::Select, 1);

    press(&mut state_manager, Button::Down, 2);
    assert_eq!(
        state_manager.counter_screen().and_then(|c| c.display_text()),
        Some("Reps: 0")
    );

    press(&mut state_manager, Button::Up, 3);
    assert_eq!(
        state_manager.counter_screen().and_then(|c| c.display_text()),
        Some("Reps: 3")
    );
}

#[test]
fn test_counter_variant_never_leaves_counter() {
    let mut state_manager = StateManager::new(AppVariant::Counter);
    press(&mut state_manager, Button::Up, 5);
    press(&mut state_manager, Button::Select, 1);

    assert_eq!(state_manager.current_state(), Some(AppState::CounterVisible));
    assert_eq!(state_manager.screens().len(), 1);
    assert_eq!(state_manager.counter_screen().map(|c| c.reps()), Some(0));
}

#[test]
fn test_full_run_releases_every_screen_once() {
    let mut state_manager = StateManager::new(AppVariant::Journal);
    for _ in 0..3 {
        press(&mut state_manager, Button::Select, 1);
        press(&mut state_manager, Button::Up, 4);
        press(&mut state_manager, Button::Select, 1);
    }
    press(&mut state_manager, Button::Select, 1);
    state_manager.handle_action(InputAction::Quit);
    assert!(state_manager.should_quit());

    state_manager.teardown();
    let ledger = state_manager.ledger();
    assert_eq!(ledger.loads(ScreenKind::Menu), 1);
    assert_eq!(ledger.unloads(ScreenKind::Menu), 1);
    assert_eq!(ledger.loads(ScreenKind::Counter), 4);
    assert_eq!(ledger.unloads(ScreenKind::Counter), 4);
    assert!(ledger.is_balanced());
}
