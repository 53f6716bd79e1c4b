//! Wire-facing data types.
//!
//! SYSTEM CONTEXT
//! ==============
//! The realtime message source lives outside this crate; `types` only defines
//! the row shape it delivers so views and state can stay schema-driven.

pub mod types;
