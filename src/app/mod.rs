//! TUI application module
//!
//! Contains the terminal host, the navigation stack, the two screens,
//! and the application loop.

pub mod app;
pub mod layers;
pub mod navigation;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use navigation::{LifecycleLedger, ScreenStack};
pub use screens::{ActiveScreen, CounterScreen, MenuScreen, ScreenCommand, ScreenKind};
pub use state::{AppState, Button, InputAction, StateManager};
pub use tui::{HostEvent, Tui};
