//! Section and overlay components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page section is one component reading static `content`. Overlays
//! (particles, cursor trail, scroll progress, back-to-top, easter egg) sit
//! outside the section flow. Scroll-linked chrome reads the
//! `RwSignal<ScrollState>` provided by the home page.

pub mod about;
pub mod back_to_top;
pub mod contact_section;
pub mod cursor_trail;
pub mod easter_egg;
pub mod footer;
pub mod globe_canvas;
pub mod hero;
pub mod magnetic;
pub mod navbar;
pub mod noise_overlay;
pub mod particle_background;
pub mod projects;
pub mod scroll_progress;
pub mod section_divider;
pub mod skills;
pub mod vision;
