//! Display mode selection for the message stream.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

use crate::net::types::Message;

/// Number of placeholder rows shown while loading.
pub const SKELETON_ROWS: usize = 3;

/// The three mutually exclusive ways the stream can render.
///
/// The mode carries no rows: populated rows are rendered keyed by message id,
/// so a new message only adds a row instead of rebuilding the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamMode {
    Loading,
    Empty,
    Populated,
}

impl StreamMode {
    /// Pick the mode for one render. Loading wins over any message content.
    pub fn select(is_loading: bool, messages: &[Message]) -> Self {
        if is_loading {
            Self::Loading
        } else if messages.is_empty() {
            Self::Empty
        } else {
            Self::Populated
        }
    }

    /// Placeholder rows this mode renders.
    pub fn placeholder_rows(self) -> usize {
        match self {
            Self::Loading => SKELETON_ROWS,
            Self::Empty | Self::Populated => 0,
        }
    }
}
