//! View layer: UI rendering.
//!
//! Reads the model, never mutates it.

mod components;
mod layout;
pub mod theme;

pub use layout::render;
