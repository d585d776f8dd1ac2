//! User interface rendering layer with component-based architecture.
//!
//! Transforms application state into an ANSI-styled frame through small
//! rendering components.
//!
//! ```text
//! AppState → compute_viewmodel → select → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`selector`]: Pure choice of what the body shows
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning and char-aware text fitting
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod selector;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_frame};
pub use selector::{select, Card, DisplayOptions, RenderMode};
pub use theme::Theme;
pub use viewmodel::{
    BackdropInfo, BodyView, DisplayCard, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};
