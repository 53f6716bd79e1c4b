use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn level_class_has_modifier() {
    assert_eq!(level_class(ToastLevel::Success), "toast toast--success");
    assert_eq!(level_class(ToastLevel::Error), "toast toast--error");
}

#[test]
fn notifier_pushes_into_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let mut notifier = ToastNotifier::new(toasts, &ViewConfig::default());
        notifier.success("hello");
        notifier.failure("bad");
        let state = toasts.get_untracked();
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0].level, ToastLevel::Success);
        assert_eq!(state.toasts[1].message, "bad");
    });
}

#[test]
fn notifier_keeps_durations_from_config() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        let config = ViewConfig {
            success_toast_ms: 10,
            error_toast_ms: 20,
            ..ViewConfig::default()
        };
        let notifier = ToastNotifier::new(toasts, &config);
        assert_eq!(notifier.success_ms, 10);
        assert_eq!(notifier.error_ms, 20);
    });
}
