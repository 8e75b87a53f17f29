//! UI state machines for interactive sections.
//!
//! ARCHITECTURE
//! ============
//! Plain structs with no Leptos or DOM types so every transition is
//! unit-testable natively. Components hold them in `RwSignal`s.

pub mod contact;
pub mod projects;
pub mod scroll;
pub mod skills;
