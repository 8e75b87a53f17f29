//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! The site has a single route. The page provides shared scroll state and
//! starts page-wide observers; sections render themselves.

pub mod home;
