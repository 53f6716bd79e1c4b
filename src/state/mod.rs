//! View and session state.
//!
//! DESIGN
//! ======
//! State is split by concern (`identity`, `stream`, `toast`, ...) as plain
//! values. Components wrap them in `RwSignal`s; the rules stay testable
//! without a browser.

pub mod chat;
pub mod identity;
pub mod session;
pub mod stream;
pub mod toast;
