//! Toast rendering and the signal-backed notifier.
//!
//! TRADE-OFFS
//! ==========
//! Auto-dismiss timers only run in the browser. SSR and native tests keep
//! toasts until dismissed explicitly.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::config::ViewConfig;
use crate::state::toast::{Notify, ToastLevel, ToastState};

/// `Notify` implementation that pushes into the shared toast signal and
/// schedules dismissal.
#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
    success_ms: u32,
    error_ms: u32,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>, config: &ViewConfig) -> Self {
        Self {
            toasts,
            success_ms: config.success_toast_ms,
            error_ms: config.error_toast_ms,
        }
    }

    /// Build from the toast signal and config provided by `App`.
    pub fn from_context() -> Self {
        let toasts = expect_context::<RwSignal<ToastState>>();
        let config = use_context::<ViewConfig>().unwrap_or_default();
        Self::new(toasts, &config)
    }

    fn show(&self, level: ToastLevel, message: &str) {
        let Some(id) = self.toasts.try_update(|t| t.push(level, message)) else {
            return;
        };
        let ttl_ms = match level {
            ToastLevel::Success => self.success_ms,
            ToastLevel::Error => self.error_ms,
        };
        schedule_dismiss(self.toasts, id, ttl_ms);
    }
}

impl Notify for ToastNotifier {
    fn success(&mut self, message: &str) {
        self.show(ToastLevel::Success, message);
    }

    fn failure(&mut self, message: &str) {
        self.show(ToastLevel::Error, message);
    }
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64, ttl_ms: u32) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
        // Signal may be gone if the app unmounted meanwhile.
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id, ttl_ms);
    }
}

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast toast--success",
        ToastLevel::Error => "toast toast--error",
    }
}

/// Stack of visible toasts. Clicking a toast dismisses it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=level_class(toast.level)
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
