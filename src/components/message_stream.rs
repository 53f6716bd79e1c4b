//! Scrollable message list with loading and empty states.
//!
//! DESIGN
//! ======
//! The `StreamMode` is memoized, so the outer branch only re-renders when the
//! mode changes. Populated rows go through a keyed `<For>`: an insert adds one
//! row and existing rows (and their avatar fallback state) are kept. The
//! component never writes to `messages` or `is_loading`.

#[cfg(test)]
#[path = "message_stream_test.rs"]
mod message_stream_test;

use chrono::{DateTime, Local};
use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::icons::{ClockIcon, MessageCircleIcon};
use crate::config::{ClockStyle, ViewConfig};
use crate::net::types::Message;
use crate::state::stream::StreamMode;
use crate::util::timestamp::format_timestamp;

/// Message list driven entirely by its inputs.
#[component]
pub fn MessageStream(
    #[prop(into)] messages: Signal<Vec<Message>>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let clock = use_context::<ViewConfig>().unwrap_or_default().clock_style;
    let mode = Memo::new(move |_| messages.with(|rows| StreamMode::select(is_loading.get(), rows)));

    move || match mode.get() {
        loading @ StreamMode::Loading => view! {
            <div class="message-stream message-stream--loading" aria-busy="true">
                {(0..loading.placeholder_rows())
                    .map(|_| view! { <SkeletonRow/> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        StreamMode::Empty => view! { <EmptyState/> }.into_any(),
        StreamMode::Populated => view! {
            <div class="message-stream" role="log" aria-label="Chat messages">
                <For
                    each=move || messages.get()
                    key=|message: &Message| message.id.clone()
                    children=move |message: Message| {
                        view! { <MessageRow message=message now=Local::now() clock=clock/> }
                    }
                />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn MessageRow(message: Message, now: DateTime<Local>, clock: ClockStyle) -> impl IntoView {
    let stamp = format_timestamp(&message.created_at, &now, clock);
    let Message {
        user_name,
        avatar_url,
        content,
        created_at,
        ..
    } = message;

    view! {
        <article class="message-row">
            <Avatar avatar_url=avatar_url user_name=user_name.clone()/>
            <div class="message-row__body">
                <div class="message-row__meta">
                    <span class="message-row__author">{user_name}</span>
                    <time class="message-row__time" datetime=created_at>
                        <ClockIcon/>
                        {stamp}
                    </time>
                </div>
                <p class="message-row__text">{content}</p>
            </div>
        </article>
    }
}

#[component]
fn SkeletonRow() -> impl IntoView {
    view! {
        <div class="skeleton-row">
            <div class="skeleton skeleton--avatar"></div>
            <div class="skeleton-row__body">
                <div class="skeleton-row__meta">
                    <div class="skeleton skeleton--name"></div>
                    <div class="skeleton skeleton--time"></div>
                </div>
                <div class="skeleton skeleton--text"></div>
            </div>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="message-stream__empty">
            <MessageCircleIcon/>
            <p class="message-stream__empty-title">"No messages yet"</p>
            <p class="message-stream__empty-hint">"Be the first to start the conversation!"</p>
        </div>
    }
}
