use leptos::reactive::owner::Owner;

use super::*;
use crate::state::toast::{ToastLevel, ToastState};

// =============================================================
// handle_submit
// =============================================================

#[test]
fn accepted_submission_is_busy_during_callback_then_settles() {
    Owner::new().with(|| {
        let form = RwSignal::new(IdentityFormState::default().with_input("ada_l"));
        let mut toasts = ToastState::default();
        let mut seen = Vec::new();
        handle_submit(form, &mut toasts, |name| {
            assert!(form.get_untracked().busy);
            seen.push(name);
        });
        assert_eq!(seen, vec!["ada_l".to_owned()]);
        assert!(!form.get_untracked().busy);
        assert_eq!(form.get_untracked().username, "ada_l");
        assert_eq!(toasts.toasts.len(), 1);
        assert_eq!(toasts.toasts[0].level, ToastLevel::Success);
    });
}

#[test]
fn rejected_submission_settles_and_notifies_failure() {
    Owner::new().with(|| {
        let form = RwSignal::new(IdentityFormState::default().with_input("ab"));
        let mut toasts = ToastState::default();
        let mut calls = 0;
        handle_submit(form, &mut toasts, |_| calls += 1);
        assert_eq!(calls, 0);
        assert!(!form.get_untracked().busy);
        assert_eq!(toasts.toasts[0].level, ToastLevel::Error);
        assert_eq!(toasts.toasts[0].message, IdentityError::TooShort.to_string());
    });
}

#[test]
fn blank_submission_leaves_form_untouched() {
    Owner::new().with(|| {
        let form = RwSignal::new(IdentityFormState::default().with_input("   "));
        let mut toasts = ToastState::default();
        handle_submit(form, &mut toasts, |_| panic!("blank input must not be accepted"));
        assert_eq!(form.get_untracked(), IdentityFormState::default().with_input("   "));
        assert!(toasts.toasts.is_empty());
    });
}

#[test]
fn busy_form_ignores_second_submission() {
    Owner::new().with(|| {
        let form = RwSignal::new(IdentityFormState::default().with_input("ada_l").submitting());
        let mut toasts = ToastState::default();
        handle_submit(form, &mut toasts, |_| panic!("in-flight submission must not re-accept"));
        assert!(form.get_untracked().busy);
        assert!(toasts.toasts.is_empty());
    });
}

// =============================================================
// Rendering
// =============================================================

#[cfg(feature = "ssr")]
#[test]
fn form_renders_labels_and_input_constraints() {
    use leptos::tachys::view::RenderHtml;

    let html = Owner::new().with(|| {
        provide_context(RwSignal::new(ToastState::default()));
        view! { <IdentityForm on_accept=Callback::new(|_: String| {})/> }.to_html()
    });
    assert!(html.contains("Join the Chat"));
    assert!(html.contains("Choose a Username"));
    assert!(html.contains("Join Chat"));
    assert!(html.contains("minlength=\"3\""));
    assert!(html.contains("maxlength=\"20\""));
    assert!(html.contains("No account needed - just pick a username and start chatting!"));
}
