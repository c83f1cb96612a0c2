//! Reusable view components.

pub mod form;
pub mod output;
pub mod statusbar;
