//! Snapshot of the external message source, owned by the parent view.
//!
//! The transport that fills this lives elsewhere. These reducers only keep
//! the snapshot consistent: history loads replace it, realtime inserts append
//! and skip ids already present. Nothing here re-sorts; ordering is the
//! source's responsibility.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::Message;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub loading: bool,
}

impl ChatState {
    /// Mark a history fetch as in flight. Existing messages are kept.
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the snapshot with a fetched history and clear `loading`.
    pub fn load_history(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.loading = false;
    }

    /// Append a realtime insert. Returns `false` for a duplicate id.
    pub fn apply_insert(&mut self, message: Message) -> bool {
        if self.messages.iter().any(|m| m.id == message.id) {
            log::debug!("skipping duplicate message {}", message.id);
            return false;
        }
        self.messages.push(message);
        true
    }
}
