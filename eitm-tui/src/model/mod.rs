//! Model layer: application state.
//!
//! The model is read by the view and mutated only by the update layer.

mod app;
mod focus;
mod form;

pub use app::App;
pub use focus::FocusField;
pub use form::FormState;
