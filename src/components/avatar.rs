//! Sender avatar with the generated-avatar fallback.

use leptos::prelude::*;

use crate::util::avatar::{avatar_src, starts_on_fallback};

/// Round avatar image. A load error swaps in the fallback URL once; later
/// errors (including from the fallback itself) leave it alone.
#[component]
pub fn Avatar(avatar_url: String, user_name: String) -> impl IntoView {
    let failed = RwSignal::new(starts_on_fallback(&avatar_url));
    let alt = user_name.clone();
    let log_name = user_name.clone();

    let src = move || avatar_src(&avatar_url, &user_name, failed.get());

    let on_error = move |_| {
        if failed.get_untracked() {
            return;
        }
        log::debug!("avatar for {log_name} failed to load; using fallback");
        failed.set(true);
    };

    view! { <img class="message-row__avatar" src=src alt=alt on:error=on_error/> }
}
