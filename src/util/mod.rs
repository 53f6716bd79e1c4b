//! Pure helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting and URL rules live here so components stay thin and the rules
//! can be tested without a DOM.

pub mod avatar;
pub mod timestamp;
