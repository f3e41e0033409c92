//! Application module
//!
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State

pub mod actions;
pub mod state;
pub mod reducer;
pub mod event;

pub use actions::{Action, Tab};
pub use state::{AppState, CartViewState, HomeState, UiConfig};
pub use reducer::{reduce, resolve_key};
