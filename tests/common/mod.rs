#![allow(dead_code)]

use scentsphere::search::{RequestToken, SearchRequest};
use scentsphere::{handle_event, initialize, Action, AppState, Config, Event};

pub const ROMANTIC_BODY: &[u8] = br#"{"query":"romantic","results":[
    {"Name":"Rose Noir","Brand":"Aether","Main Accords":["floral","woody","amber","musk"],"Image URL":"https://x/img.jpg"}
]}"#;

pub const CITRUS_BODY: &[u8] = br#"{"query":"summer","results":[
    {"Name":"Bergamot Sun","Brand":"Lumen","Main Accords":["citrus","fresh"],"Image URL":"https://x/sun.jpg","Purchase URL":"https://shop/sun"},
    {"Name":"Neroli Tide","Brand":"Lumen","Main Accords":["citrus"],"Image URL":"https://x/tide.jpg"}
]}"#;

pub const EMPTY_BODY: &[u8] = br#"{"query":"xyzzy","results":[]}"#;

/// Fresh plugin state with the given tag cap and three backdrop images.
pub fn app(tag_cap: usize) -> AppState {
    initialize(&Config {
        tag_cap,
        carousel_images: vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()],
        ..Config::default()
    })
}

pub fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).expect("event handled")
}

pub fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

/// Replaces the query with `text`, submits it, and returns the outbound request.
pub fn search(state: &mut AppState, text: &str) -> SearchRequest {
    state.search.set_query("");
    type_text(state, text);
    let (_, actions) = send(state, Event::Submit);
    match actions.as_slice() {
        [Action::SendSearch(request)] => request.clone(),
        other => panic!("expected one SendSearch, got {other:?}"),
    }
}

pub fn respond(state: &mut AppState, token: RequestToken, status: u16, body: &[u8]) -> (bool, Vec<Action>) {
    send(
        state,
        Event::SearchResponse {
            token: Some(token),
            status,
            body: body.to_vec(),
        },
    )
}
