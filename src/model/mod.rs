//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `FormState` - The user-editable fields for one pending generation request
//! - `CallKind` - The selected REST verb (or none)
//! - `template` - The pure generator mapping form values to pseudocode text

pub mod form;
pub mod template;

// Re-export commonly used types
pub use form::{CallKind, FormState};
