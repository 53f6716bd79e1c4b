//! Root application component and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::identity_form::IdentityForm;
use crate::components::message_stream::MessageStream;
use crate::components::toast_host::ToastHost;
use crate::config::{CONFIG_ELEMENT_ID, ViewConfig};
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is embedded as JSON so the hydrating client renders identically.
pub fn shell(options: LeptosOptions, config: ViewConfig) -> impl IntoView {
    let config_json = config.to_json();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=config_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config=config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, toast, session and chat contexts, then shows the identity
/// form until a name is accepted and the message stream afterwards. An
/// embedding page that owns the realtime source passes its own `chat` signal.
#[component]
pub fn App(
    #[prop(optional)] config: Option<ViewConfig>,
    #[prop(optional)] chat: Option<RwSignal<ChatState>>,
) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    let toasts = RwSignal::new(ToastState::with_capacity(config.max_visible_toasts));
    let session = RwSignal::new(SessionState::default());
    let chat = chat.unwrap_or_else(|| RwSignal::new(ChatState::default()));

    provide_context(config);
    provide_context(toasts);
    provide_context(session);
    provide_context(chat);

    let on_accept = Callback::new(move |name: String| session.update(|s| s.accept(name)));
    let on_leave = move |_| session.update(SessionState::leave);

    let messages = Signal::derive(move || chat.get().messages);
    let is_loading = Signal::derive(move || chat.get().loading);

    view! {
        <Stylesheet id="leptos" href="/pkg/chatroom-views.css"/>
        <Title text="Chat"/>

        <main class="chat-app">
            <Show
                when=move || session.get().is_signed_in()
                fallback=move || view! { <IdentityForm on_accept=on_accept/> }
            >
                <header class="chat-app__header">
                    <span class="chat-app__user">
                        {move || session.get().username.unwrap_or_default()}
                    </span>
                    <button class="btn chat-app__leave" type="button" on:click=on_leave>
                        "Leave"
                    </button>
                </header>
                <MessageStream messages=messages is_loading=is_loading/>
            </Show>
        </main>

        <ToastHost/>
    }
}
