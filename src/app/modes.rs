//! Input mode state for the application.
//!
//! The pane has one text field and one list, so input is routed to exactly one
//! of them:
//! - **Typing**: printable keys edit the query, Enter submits
//! - **Browsing**: single-letter keys act on the selected result card
//!
//! Arrow keys and `Ctrl+n`/`Ctrl+p` move the card selection in both modes.
//!
//! # Example
//!
//! ```
//! use scentsphere::app::InputMode;
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Typing);
//! ```

/// Current input handling mode.
///
/// Controls how the plugin shim maps keys to events and which keybinding
/// hints the footer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys edit the query text.
    ///
    /// Available keybindings: type to edit, Enter (search), Esc (new search),
    /// Tab (browse results).
    #[default]
    Typing,

    /// Keys act on the result cards.
    ///
    /// Available keybindings: j/k (navigate), Enter or o (open purchase link),
    /// / or Esc (edit query), n (new search), q (hide).
    Browsing,
}
