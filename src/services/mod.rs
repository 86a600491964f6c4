//! Services layer - side-effectful operations
//!
//! The system clipboard is the only external boundary of the application.

pub mod clipboard;

pub use clipboard::{SystemClipboard, TextClipboard};
