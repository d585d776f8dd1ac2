//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the search and carousel
//! components. Data flows one way:
//!
//! ```text
//! Keys / Responses / Timers → Events → Event Handler → State Mutations → Actions → Host Calls
//!                                ↑                                           ↓
//!                                └──────────── Web responses, timers ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
