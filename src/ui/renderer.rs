//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: `UIViewModel` → one ANSI frame
//!
//! The frame is built in memory and printed once, so a render never leaves a
//! half-drawn pane behind.
//!
//! # Example
//!
//! ```
//! use scentsphere::ui::render_frame;
//! use scentsphere::{initialize, Config};
//!
//! let state = initialize(&Config::default());
//! let frame = render_frame(&state, 24, 80);
//! assert!(frame.contains("ScentSphere"));
//! assert!(frame.contains("Press Enter to begin your scent journey"));
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_frame(state, rows, cols));
}

/// Renders one frame to a string without printing it.
#[must_use]
pub fn render_frame(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut frame = String::new();
    components::render_layout(&mut frame, &viewmodel, &state.theme, rows, cols);
    frame
}
