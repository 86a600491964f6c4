//! UI Components
//!
//! Each component encapsulates its own presentation state, event handling,
//! and rendering logic. Components communicate through Actions rather than
//! direct state mutation.

pub mod form;
pub mod layout;
pub mod output;

pub use form::{Field, FormComponent};
pub use layout::{calculate_main_layout, MainLayout};
pub use output::OutputComponent;
