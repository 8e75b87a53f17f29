//! Canvas effects for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! three decorative canvas loops of the page: the cursor trail, the ambient
//! particle field and the rotating wireframe globe. Every effect is a plain
//! simulation that can be stepped and inspected without a browser; only
//! [`render`] and [`engine::Engine`] touch the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::Effect`] trait and the canvas-bound [`engine::Engine`] |
//! | [`trail`] | Cursor trail simulation |
//! | [`particles`] | Ambient particle field with pointer repulsion |
//! | [`globe`] | Rotating wireframe globe geometry |
//! | [`render`] | Drawing onto a `CanvasRenderingContext2d` |
//! | [`geom`] | Points and viewport sizing |
//! | [`color`] | HSLA colors and the site palette |
//! | [`consts`] | Shared numeric constants |

pub mod color;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod globe;
pub mod particles;
pub mod render;
pub mod trail;
