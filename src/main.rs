//! Zellij plugin wrapper and entry point.
//!
//! The thin integration layer between the ScentSphere library and the Zellij
//! plugin system. Everything that talks to the host lives here: translating
//! host events into library [`Event`]s and library [`Action`]s into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, `WebRequestResult`, `Timer`, `RunCommandResult`,
//!    `PermissionRequestResult`, `BeforeClose`
//! 3. **Mount**: Start the carousel (arms the first host timer)
//! 4. **Update**: Map events, delegate to `handle_event`, execute actions
//! 5. **Render**: Call library render function
//! 6. **Close**: Release the carousel and drop any pending search
//!
//! # Event Mapping
//!
//! - `WebRequestResult` → `Event::SearchResponse` (token read back from the context)
//! - `Timer` → `Event::Tick`
//! - `RunCommandResult` with non-zero exit → `Event::LinkOpenFailed`
//! - `BeforeClose` → `Event::Unmount`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`/`Down`: Next card
//! - `Ctrl+p`/`Up`: Previous card
//!
//! Typing:
//! - Printable keys: Edit query
//! - `Enter`: Search
//! - `Tab`: Browse results
//! - `Esc`: New search
//!
//! Browsing:
//! - `j`/`k`: Next/previous card
//! - `Enter`/`o`: Open purchase link
//! - `/`, `Tab`, `Esc`: Edit query
//! - `n`: New search
//! - `q`: Hide plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use scentsphere::search::RequestToken;
use scentsphere::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Context key carrying the URL of a purchase link being opened.
const LINK_CONTEXT_KEY: &str = "purchase_url";

/// Command used to open purchase links on the host.
const OPEN_COMMAND: &str = "xdg-open";

/// Plugin state wrapper.
struct State {
    app: scentsphere::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: scentsphere::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests permissions, subscribes to events, and
    /// starts the carousel.
    ///
    /// # Permissions
    ///
    /// - `WebAccess`: Query the recommendation backend
    /// - `RunCommands`: Open purchase links with the system URL handler
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = scentsphere::observability::init_tracing(&config) {
            eprintln!("scentsphere: tracing disabled: {e}");
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            backend_url = %config.backend_url,
            result_limit = ?config.result_limit,
            carousel_images = config.carousel_images.len(),
            "parsed configuration"
        );
        self.app = scentsphere::initialize(&config);

        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
            EventType::BeforeClose,
        ]);

        self.dispatch(&Event::Mounted);
        tracing::debug!("plugin load complete");
    }

    /// Translates a Zellij event, delegates to `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_response(status, body, &context)
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick,
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                match Self::map_command_result(exit_code, &stderr, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Self::log_permission_result(status);
                return false;
            }
            zellij_tile::prelude::Event::BeforeClose => Event::Unmount,
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        scentsphere::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one library event and its actions. Returns the render flag.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            zellij_tile::prelude::Event::BeforeClose => "BeforeClose".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectNext),
                BareKey::Char('p') => Some(Event::SelectPrevious),
                _ => None,
            };
        }

        match (key.bare_key, self.app.input_mode) {
            (BareKey::Down, _) => Some(Event::SelectNext),
            (BareKey::Up, _) => Some(Event::SelectPrevious),

            (BareKey::Enter, InputMode::Typing) => Some(Event::Submit),
            (BareKey::Esc, InputMode::Typing) => Some(Event::NewSearch),
            (BareKey::Tab, InputMode::Typing) => Some(Event::FocusResults),
            (BareKey::Backspace, InputMode::Typing) => Some(Event::Backspace),
            (BareKey::Char(c), InputMode::Typing) => Some(Event::Char(c)),

            (BareKey::Char('j'), InputMode::Browsing) => Some(Event::SelectNext),
            (BareKey::Char('k'), InputMode::Browsing) => Some(Event::SelectPrevious),
            (BareKey::Enter | BareKey::Char('o'), InputMode::Browsing) => Some(Event::OpenPurchaseLink),
            (BareKey::Char('/') | BareKey::Tab | BareKey::Esc, InputMode::Browsing) => Some(Event::FocusQuery),
            (BareKey::Char('n'), InputMode::Browsing) => Some(Event::NewSearch),
            (BareKey::Char('q'), InputMode::Browsing) => Some(Event::CloseFocus),

            _ => None,
        }
    }

    fn map_web_response(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Event {
        let token = RequestToken::from_context(context);
        tracing::debug!(status, token = ?token, body_len = body.len(), "web request result");
        Event::SearchResponse { token, status, body }
    }

    /// Only failed link launches become events; successful ones are silent.
    fn map_command_result(
        exit_code: Option<i32>,
        stderr: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let url = context.get(LINK_CONTEXT_KEY)?;
        if exit_code == Some(0) {
            tracing::debug!(url = %url, "purchase link opened");
            return None;
        }

        let detail = String::from_utf8_lossy(stderr).trim().to_string();
        Some(Event::LinkOpenFailed {
            url: url.clone(),
            error: format!("{OPEN_COMMAND} exited with {exit_code:?}: {detail}"),
        })
    }

    fn log_permission_result(status: PermissionStatus) {
        match status {
            PermissionStatus::Granted => tracing::debug!("permissions granted"),
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - searches and purchase links will fail");
            }
        }
    }

    /// Translates a library action into a host call.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::SendSearch(request) => {
                tracing::debug!(token = %request.token, url = %request.url, "sending search");
                web_request(
                    request.url.as_str(),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context(),
                );
            }
            Action::ArmTimer { seconds } => set_timeout(*seconds),
            Action::OpenLink { url } => {
                tracing::debug!(url = %url, "opening purchase link");
                let context = BTreeMap::from([(LINK_CONTEXT_KEY.to_string(), url.clone())]);
                run_command(&[OPEN_COMMAND, url.as_str()], context);
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
