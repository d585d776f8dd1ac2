mod common;

use common::{app, respond, search, send, type_text, CITRUS_BODY, EMPTY_BODY, ROMANTIC_BODY};
use pretty_assertions::assert_eq;
use scentsphere::app::state::{NO_RESULTS_MESSAGE, PROMPT_MESSAGE};
use scentsphere::domain::error::GENERIC_ERROR_MESSAGE;
use scentsphere::search::response::NO_RESPONSE_STATUS;
use scentsphere::search::SearchState;
use scentsphere::ui::{render_frame, BodyView};
use scentsphere::{Action, Event, InputMode};

#[test]
fn blank_queries_never_reach_the_network() {
    for text in ["", " ", "   ", "\t"] {
        let mut state = app(4);
        type_text(&mut state, text);
        let before = state.search.state().clone();

        let (should_render, actions) = send(&mut state, Event::Submit);

        assert!(actions.is_empty(), "query {text:?} sent a request");
        assert!(!should_render);
        assert_eq!(state.search.state(), &before);
        assert!(!state.search.has_searched());
    }
}

#[test]
fn blank_submit_after_results_keeps_them() {
    let mut state = app(4);
    let request = search(&mut state, "romantic");
    respond(&mut state, request.token, 200, ROMANTIC_BODY);
    let before = state.search.state().clone();

    state.search.set_query("  ");
    let (_, actions) = send(&mut state, Event::Submit);

    assert!(actions.is_empty());
    assert_eq!(state.search.state(), &before);
    assert_eq!(state.search.results().len(), 1);
}

#[test]
fn later_search_wins_over_earlier_response() {
    let mut state = app(4);
    let first = search(&mut state, "romantic");
    let second = search(&mut state, "summer");
    assert!(second.token > first.token);

    respond(&mut state, second.token, 200, CITRUS_BODY);
    let after_second = state.search.state().clone();

    let (should_render, actions) = respond(&mut state, first.token, 200, ROMANTIC_BODY);

    assert!(!should_render);
    assert!(actions.is_empty());
    assert_eq!(state.search.state(), &after_second);
    assert_eq!(state.search.results()[0].name, "Bergamot Sun");
}

#[test]
fn earlier_response_arriving_first_is_also_dropped() {
    let mut state = app(4);
    let first = search(&mut state, "romantic");
    let second = search(&mut state, "summer");

    respond(&mut state, first.token, 500, b"");
    assert!(state.search.state().is_loading());

    respond(&mut state, second.token, 200, CITRUS_BODY);
    assert_eq!(state.search.results().len(), 2);
}

#[test]
fn clear_resets_every_state() {
    let mut loading = app(4);
    search(&mut loading, "romantic");

    let mut success = app(4);
    let request = search(&mut success, "romantic");
    respond(&mut success, request.token, 200, ROMANTIC_BODY);

    let mut error = app(4);
    let request = search(&mut error, "romantic");
    respond(&mut error, request.token, 500, b"oops");

    for mut state in [loading, success, error] {
        send(&mut state, Event::NewSearch);

        assert_eq!(state.search.state(), &SearchState::Idle);
        assert_eq!(state.search.query(), "");
        assert!(state.search.results().is_empty());
        assert_eq!(state.search.state().error_message(), None);
        assert_eq!(state.input_mode, InputMode::Typing);
    }
}

#[test]
fn response_after_clear_is_ignored() {
    let mut state = app(4);
    let request = search(&mut state, "romantic");
    send(&mut state, Event::NewSearch);

    respond(&mut state, request.token, 200, ROMANTIC_BODY);

    assert_eq!(state.search.state(), &SearchState::Idle);
}

#[test]
fn romantic_search_shows_one_card_with_capped_tags() {
    for (cap, expected) in [(4, 4), (3, 3)] {
        let mut state = app(cap);
        let request = search(&mut state, "romantic");
        assert!(request.url.ends_with("/search/romantic"));

        respond(&mut state, request.token, 200, ROMANTIC_BODY);

        let BodyView::Results { cards, total, .. } = state.compute_viewmodel(40, 100).body else {
            panic!("expected results");
        };
        assert_eq!(total, 1);
        assert_eq!(cards[0].name, "Rose Noir");
        assert_eq!(cards[0].brand, "Aether");
        assert_eq!(cards[0].tags.len(), expected);
        assert_eq!(cards[0].tags[0], "floral");
    }
}

#[test]
fn empty_success_shows_no_results_not_error() {
    let mut state = app(4);
    let request = search(&mut state, "xyzzy");
    respond(&mut state, request.token, 200, EMPTY_BODY);

    let body = state.compute_viewmodel(40, 100).body;
    let BodyView::Empty(empty) = body else {
        panic!("expected empty state, got {body:?}");
    };
    assert_eq!(empty.message, NO_RESULTS_MESSAGE);

    let frame = render_frame(&state, 40, 100);
    assert!(frame.contains(NO_RESULTS_MESSAGE));
    assert!(!frame.contains(GENERIC_ERROR_MESSAGE));
}

#[test]
fn server_failure_shows_generic_error_and_clears_results() {
    let mut state = app(4);
    let request = search(&mut state, "romantic");
    respond(&mut state, request.token, 200, ROMANTIC_BODY);

    let request = search(&mut state, "romantic again");
    respond(&mut state, request.token, 500, b"<html>Internal Server Error</html>");

    assert_eq!(state.search.state(), &SearchState::Error(GENERIC_ERROR_MESSAGE.to_string()));
    assert!(state.search.results().is_empty());
    assert_eq!(
        state.compute_viewmodel(40, 100).body,
        BodyView::ErrorBanner {
            message: GENERIC_ERROR_MESSAGE.to_string()
        }
    );
}

#[test]
fn transport_failure_hides_connection_details() {
    let mut state = app(4);
    let request = search(&mut state, "romantic");
    respond(
        &mut state,
        request.token,
        NO_RESPONSE_STATUS,
        b"error sending request: connection refused (os error 111)",
    );

    assert_eq!(state.search.state(), &SearchState::Error(GENERIC_ERROR_MESSAGE.to_string()));
    let frame = render_frame(&state, 40, 100);
    assert!(frame.contains(GENERIC_ERROR_MESSAGE));
    assert!(!frame.contains("refused"));
}

#[test]
fn undecodable_body_is_a_generic_error() {
    let mut state = app(4);
    let request = search(&mut state, "romantic");
    respond(&mut state, request.token, 200, b"not json");

    assert_eq!(state.search.state().error_message(), Some(GENERIC_ERROR_MESSAGE));
}

#[test]
fn prompt_shows_before_first_search() {
    let state = app(4);
    assert_eq!(
        state.compute_viewmodel(40, 100).body,
        BodyView::Prompt {
            message: PROMPT_MESSAGE.to_string()
        }
    );
}

#[test]
fn loading_shows_skeleton_and_keeps_query_editable() {
    let mut state = app(4);
    search(&mut state, "romantic");

    assert!(matches!(
        state.compute_viewmodel(40, 100).body,
        BodyView::Skeleton { placeholders: 3, .. }
    ));

    type_text(&mut state, " dinner");
    assert_eq!(state.search.query(), "romantic dinner");
    assert!(state.search.state().is_loading());
}

#[test]
fn browsing_cards_and_opening_links() {
    let mut state = app(4);
    let request = search(&mut state, "summer");
    respond(&mut state, request.token, 200, CITRUS_BODY);
    assert_eq!(state.input_mode, InputMode::Typing);

    send(&mut state, Event::FocusResults);
    assert_eq!(state.input_mode, InputMode::Browsing);

    let (_, actions) = send(&mut state, Event::OpenPurchaseLink);
    assert_eq!(
        actions,
        vec![Action::OpenLink {
            url: "https://shop/sun".to_string()
        }]
    );

    send(&mut state, Event::SelectNext);
    assert_eq!(state.selected_index, 1);
    let (_, actions) = send(&mut state, Event::OpenPurchaseLink);
    assert!(actions.is_empty());

    send(&mut state, Event::SelectNext);
    assert_eq!(state.selected_index, 0);
}

#[test]
fn hidden_purchase_links_never_open() {
    let mut state = scentsphere::initialize(&scentsphere::Config {
        show_purchase_link: false,
        ..scentsphere::Config::default()
    });
    let request = search(&mut state, "summer");
    respond(&mut state, request.token, 200, CITRUS_BODY);
    send(&mut state, Event::FocusResults);

    let (_, actions) = send(&mut state, Event::OpenPurchaseLink);
    assert!(actions.is_empty());
}
