//! "Join the Chat" form collecting a display name.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation is local string inspection only. The accepted name goes to the
//! caller through `on_accept`; feedback goes through the toast notifier.

#[cfg(test)]
#[path = "identity_form_test.rs"]
mod identity_form_test;

use leptos::prelude::*;

use crate::components::icons::{LoaderIcon, LogInIcon};
use crate::components::toast_host::ToastNotifier;
use crate::config::ViewConfig;
use crate::state::identity::{
    IdentityError, IdentityFormState, MIN_USERNAME_LEN, SubmitOutcome, USERNAME_PATTERN, evaluate_submission,
};
use crate::state::toast::Notify;

/// Run one submission against the form signal.
///
/// The form is busy while `on_accept` and the notifier run, and settled
/// afterwards. Ignored submissions never touch the busy flag.
pub fn handle_submit<N, F>(form: RwSignal<IdentityFormState>, notifier: &mut N, on_accept: F)
where
    N: Notify + ?Sized,
    F: FnOnce(String),
{
    let current = form.get_untracked();
    let outcome = evaluate_submission(&current);
    if outcome == SubmitOutcome::Ignored {
        return;
    }

    form.set(current.submitting());
    outcome.dispatch(notifier, on_accept);
    form.set(form.get_untracked().settled());
}

/// Username form. `on_accept` receives the name at most once per submission,
/// and only when it passes validation.
#[component]
pub fn IdentityForm(#[prop(into)] on_accept: Callback<String>) -> impl IntoView {
    let config = use_context::<ViewConfig>().unwrap_or_default();
    let notifier = ToastNotifier::from_context();
    let form = RwSignal::new(IdentityFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut notifier = notifier;
        handle_submit(form, &mut notifier, |name| on_accept.run(name));
    };

    let on_input = move |ev: leptos::ev::Event| form.set(form.get_untracked().with_input(event_target_value(&ev)));
    let busy = move || form.get().busy;

    view! {
        <div class="identity-form">
            <h2 class="identity-form__title">"Join the Chat"</h2>

            <form class="identity-form__form" on:submit=on_submit>
                <label class="identity-form__label" for="identity-form-username">
                    "Choose a Username"
                </label>
                <input
                    id="identity-form-username"
                    class="identity-form__input"
                    type="text"
                    placeholder="Enter your username"
                    required=true
                    minlength=MIN_USERNAME_LEN.to_string()
                    maxlength=config.username_input_max_len.to_string()
                    pattern=USERNAME_PATTERN
                    title=IdentityError::InvalidCharacters.to_string()
                    prop:value=move || form.get().username
                    on:input=on_input
                />

                <button class="btn btn--primary identity-form__submit" type="submit" disabled=busy>
                    {move || {
                        if busy() {
                            view! { <LoaderIcon/> }.into_any()
                        } else {
                            view! { <LogInIcon/> }.into_any()
                        }
                    }}
                    <span>"Join Chat"</span>
                </button>
            </form>

            <p class="identity-form__hint">
                "No account needed - just pick a username and start chatting!"
            </p>
        </div>
    }
}
