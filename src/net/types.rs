//! Message rows as delivered by the external realtime source.
//!
//! DESIGN
//! ======
//! `created_at` stays the raw ISO-8601 string from the source. Parsing happens
//! at render time in `util::timestamp`, so an odd value degrades one label
//! instead of failing the whole row decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single chat message. Owned by the message source; views only read it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: String,
    /// Display name of the sender.
    pub user_name: String,
    /// Avatar image URL. May be empty.
    #[serde(default)]
    pub avatar_url: String,
    /// Message body text.
    pub content: String,
    /// Creation time as an ISO-8601 string.
    pub created_at: String,
}
