//! ScentSphere: a Zellij plugin that finds fragrances by mood or occasion.
//!
//! Type a mood ("rainy afternoon in Paris"), an occasion ("first date"), or a
//! note ("vetiver") and the plugin asks a recommendation backend for matching
//! perfumes, then shows them as cards with their accords and a purchase link.
//! A carousel of backdrop images keeps rotating underneath the whole time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls only
//! └─────────────────────────────────────────────────────┘
//!                        │ Events ↓   ↑ Actions
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, input mode, card selection       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Search        │   │ Carousel      │   │ UI Layer      │
//! │ (search/)     │   │ (carousel/)   │   │ (ui/)         │
//! │ - Lifecycle   │   │ - Ticker lease│   │ - Selector    │
//! │ - Tokens      │   │ - Rotation    │   │ - Components  │
//! │ - Wire format │   │               │   │ - Theming     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Query, ResultItem, errors (domain/)              │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The search orchestrator and the carousel never touch each other. Every
//! outbound search carries a [`RequestToken`](search::RequestToken); a response
//! whose token is not the one in flight is dropped, so the last submitted
//! search always wins no matter the order responses arrive in.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/scentsphere.wasm" {
//!         backend_url "http://localhost:8000"
//!         result_limit "5"
//!         carousel_interval "5"
//!         tag_cap "4"
//!         show_purchase_link "true"
//!         theme "rose-noir"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use scentsphere::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! state.search.set_query("first date");
//!
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! let Action::SendSearch(request) = &actions[0] else { unreachable!() };
//! assert_eq!(request.url, "http://localhost:8000/search/first%20date");
//! # Ok::<(), scentsphere::ScentSphereError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod carousel;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Result, ScentSphereError};
pub use ui::Theme;

use carousel::{Carousel, DEFAULT_IMAGES, DEFAULT_INTERVAL_SECS};
use search::SearchOrchestrator;
use std::collections::BTreeMap;
use ui::selector::{DisplayOptions, DEFAULT_TAG_CAP};

/// Backend address used when `backend_url` is not configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Plugin configuration parsed from the plugin's KDL block.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base address of the recommendation backend, without a trailing `/`.
    pub backend_url: String,

    /// Appended as `?limit=N` when set.
    pub result_limit: Option<u32>,

    /// Seconds between backdrop changes. Always positive.
    pub carousel_interval: f64,

    /// Backdrop image references in display order. Never empty.
    pub carousel_images: Vec<String>,

    /// Accord tags shown per card. At least 1.
    pub tag_cap: usize,

    pub show_purchase_link: bool,

    /// Built-in theme name (`rose-noir`, `aether-dawn`). Ignored if
    /// `theme_file` loads.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. `~` maps to the sandbox `/host` mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            result_limit: None,
            carousel_interval: DEFAULT_INTERVAL_SECS,
            carousel_images: DEFAULT_IMAGES.iter().map(ToString::to_string).collect(),
            tag_cap: DEFAULT_TAG_CAP,
            show_purchase_link: true,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing, blank, or unparseable values fall back to their defaults, so
    /// this never fails.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use scentsphere::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("backend_url".to_string(), "https://scents.example/".to_string()),
    ///     ("tag_cap".to_string(), "3".to_string()),
    ///     ("carousel_interval".to_string(), "soon".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.backend_url, "https://scents.example");
    /// assert_eq!(config.tag_cap, 3);
    /// assert_eq!(config.carousel_interval, 5.0);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| config.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let backend_url = get("backend_url")
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map_or(defaults.backend_url, String::from);

        let result_limit = get("result_limit")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|limit| *limit > 0);

        let carousel_interval = get("carousel_interval")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .unwrap_or(defaults.carousel_interval);

        let carousel_images = get("carousel_images")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|image| !image.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|images| !images.is_empty())
            .unwrap_or(defaults.carousel_images);

        let tag_cap = get("tag_cap")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|cap| *cap >= 1)
            .unwrap_or(defaults.tag_cap);

        let show_purchase_link = get("show_purchase_link")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(defaults.show_purchase_link);

        Self {
            backend_url,
            result_limit,
            carousel_interval,
            carousel_images,
            tag_cap,
            show_purchase_link,
            theme_name: get("theme").map(String::from),
            theme_file: get("theme_file").map(String::from),
            trace_level: get("trace_level").map(String::from),
        }
    }

    /// Card presentation options derived from this configuration.
    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            tag_cap: self.tag_cap.max(1),
            show_purchase_link: self.show_purchase_link,
            ..DisplayOptions::default()
        }
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// Each failure is logged and falls through to the next option.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, trying next option");
                }
            }
        }

        if let Some(theme_name) = &self.theme_name {
            if let Some(theme) = Theme::from_name(theme_name) {
                return theme;
            }
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
        }

        Theme::default()
    }
}

/// Builds the initial application state from configuration.
///
/// The search starts `Idle` and the carousel starts stopped; it begins
/// rotating when the host reports the pane as mounted. A carousel config that
/// cannot be used (only possible for hand-built configs) is logged and
/// replaced with the bundled images.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(backend_url = %config.backend_url, "initializing scentsphere plugin");

    let carousel = Carousel::new(config.carousel_images.clone(), config.carousel_interval)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unusable carousel configuration, using defaults");
            Carousel::default()
        });
    let search = SearchOrchestrator::new(config.backend_url.clone(), config.result_limit);

    AppState::new(search, carousel, config.display_options(), config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let config = Config::from_zellij(&map(&[
            ("backend_url", "   "),
            ("result_limit", "-2"),
            ("carousel_interval", "0"),
            ("carousel_images", " , ,"),
            ("tag_cap", "0"),
            ("show_purchase_link", "maybe"),
        ]));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_every_option() {
        let config = Config::from_zellij(&map(&[
            ("backend_url", "https://scents.example//"),
            ("result_limit", "8"),
            ("carousel_interval", "2.5"),
            ("carousel_images", "a.jpg, b.jpg"),
            ("tag_cap", "3"),
            ("show_purchase_link", "false"),
            ("theme", "aether-dawn"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.backend_url, "https://scents.example");
        assert_eq!(config.result_limit, Some(8));
        assert_eq!(config.carousel_interval, 2.5);
        assert_eq!(config.carousel_images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(config.tag_cap, 3);
        assert!(!config.show_purchase_link);
        assert_eq!(config.load_theme().name, "aether-dawn");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = toml::to_string(&Theme {
            name: "vetiver".to_string(),
            ..Theme::default()
        })
        .unwrap();
        file.write_all(custom.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("aether-dawn".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "vetiver");
    }

    #[test]
    fn broken_theme_sources_fall_through() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            theme_file: Some("/definitely/not/here.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme(), Theme::default());
    }

    #[test]
    fn initialize_replaces_unusable_carousel() {
        let config = Config {
            carousel_images: vec![],
            carousel_interval: -1.0,
            ..Config::default()
        };
        assert_eq!(initialize(&config).carousel.len(), DEFAULT_IMAGES.len());
    }

    #[test]
    fn initialize_applies_display_options() {
        let config = Config {
            tag_cap: 3,
            show_purchase_link: false,
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.display.tag_cap, 3);
        assert!(!state.display.show_purchase_link);
        assert_eq!(state.carousel.len(), 4);
        assert!(!state.carousel.is_running());
    }
}
