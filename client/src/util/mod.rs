//! Browser-facing helpers shared by the section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The math behind each interaction (typing, counting, tilt, magnetism,
//! key sequences) lives in plain functions here so it can be tested
//! natively. Modules that touch the DOM gate those parts on `hydrate`.

pub mod clock;
pub mod counter;
pub mod frame_loop;
pub mod konami;
pub mod magnetic;
pub mod reveal;
pub mod scroll;
pub mod ticker;
pub mod tilt;
pub mod typing;
