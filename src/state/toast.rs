//! Transient notification queue.
//!
//! DESIGN
//! ======
//! `ToastState` is a plain value holding the queue rules (ids, cap,
//! dismissal). Timers and signals live in `components::toast_host`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Fire-and-forget notification sink.
pub trait Notify {
    fn success(&mut self, message: &str);
    fn failure(&mut self, message: &str);
}

/// Severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A single visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub max_visible: usize,
    next_id: u64,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::with_capacity(3)
    }
}

impl ToastState {
    /// Empty queue that keeps at most `max_visible` toasts (minimum one).
    pub fn with_capacity(max_visible: usize) -> Self {
        Self {
            toasts: Vec::new(),
            max_visible: max_visible.max(1),
            next_id: 1,
        }
    }

    /// Append a toast and return its id. Drops the oldest entries past the cap.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        if self.toasts.len() > self.max_visible {
            let overflow = self.toasts.len() - self.max_visible;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl Notify for ToastState {
    fn success(&mut self, message: &str) {
        self.push(ToastLevel::Success, message);
    }

    fn failure(&mut self, message: &str) {
        self.push(ToastLevel::Error, message);
    }
}
