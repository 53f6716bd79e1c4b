//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the identity form, the message stream and toasts. They
//! read shared state from Leptos context and delegate rules to `state`/`util`.

pub mod avatar;
pub mod icons;
pub mod identity_form;
pub mod message_stream;
pub mod toast_host;
