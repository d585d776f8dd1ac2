//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host` inside the sandbox, so any
//! user-supplied path (a custom theme file) and the plugin's own data
//! directory (trace exports) go through [`paths`].

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, otlp_export_path};
