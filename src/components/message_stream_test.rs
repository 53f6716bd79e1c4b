#![cfg(feature = "ssr")]

use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use super::*;

fn msg(id: &str, user_name: &str, content: &str, created_at: &str) -> Message {
    Message {
        id: id.to_owned(),
        user_name: user_name.to_owned(),
        avatar_url: String::new(),
        content: content.to_owned(),
        created_at: created_at.to_owned(),
    }
}

fn render(messages: Vec<Message>, is_loading: bool) -> String {
    Owner::new().with(|| {
        view! {
            <MessageStream messages=Signal::stored(messages) is_loading=Signal::stored(is_loading)/>
        }
        .to_html()
    })
}

#[test]
fn loading_renders_three_placeholders_and_no_content() {
    let html = render(
        vec![msg("1", "ada", "first body", "2026-10-18T10:00:00Z")],
        true,
    );
    assert_eq!(html.matches("class=\"skeleton-row\"").count(), 3);
    assert!(!html.contains("message-row"));
    assert!(!html.contains("first body"));
}

#[test]
fn empty_renders_placeholder_without_rows() {
    let html = render(Vec::new(), false);
    assert!(html.contains("No messages yet"));
    assert!(html.contains("Be the first to start the conversation!"));
    assert!(!html.contains("class=\"message-row\""));
    assert!(!html.contains("skeleton-row"));
}

#[test]
fn populated_renders_rows_in_given_order() {
    let html = render(
        vec![
            msg("1", "ada", "first body", "2026-10-18T10:00:00Z"),
            msg("2", "grace", "second body", "2026-10-18T10:05:00Z"),
        ],
        false,
    );
    assert_eq!(html.matches("class=\"message-row\"").count(), 2);
    let first = html.find("first body").unwrap();
    let second = html.find("second body").unwrap();
    assert!(first < second);
    assert!(!html.contains("No messages yet"));
}

#[test]
fn blank_avatar_renders_fallback_source() {
    let html = render(vec![msg("1", "ada", "hi", "2026-10-18T10:00:00Z")], false);
    assert!(html.contains("https://ui-avatars.com/api/?name=ada"));
}
