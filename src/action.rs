//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next form control
    FocusNext,
    /// Move focus to the previous form control
    FocusPrev,

    // ─────────────────────────────────────────────────────────────────────────
    // Field Editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Append a character to the focused text field
    Input(char),
    /// Remove the last character from the focused text field
    Backspace,
    /// Flip the "needs useState" toggle
    ToggleStateHook,
    /// Flip the "needs useEffect" toggle
    ToggleEffectHook,
    /// Cycle the API call type forward (none → GET → ... → DELETE → none)
    NextCallKind,
    /// Cycle the API call type backward
    PrevCallKind,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Run the template generator on the current form values
    Generate,
    /// Reset the form to its creation defaults
    ClearForm,
    /// Copy the generated pseudocode to the system clipboard
    CopyOutput,

    // ─────────────────────────────────────────────────────────────────────────
    // Output Panel
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the output panel up one line
    ScrollOutputUp,
    /// Scroll the output panel down one line
    ScrollOutputDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::Input(c) => write!(f, "Input('{}')", c),
            Action::Backspace => write!(f, "Backspace"),
            Action::ToggleStateHook => write!(f, "ToggleStateHook"),
            Action::ToggleEffectHook => write!(f, "ToggleEffectHook"),
            Action::NextCallKind => write!(f, "NextCallKind"),
            Action::PrevCallKind => write!(f, "PrevCallKind"),
            Action::Generate => write!(f, "Generate"),
            Action::ClearForm => write!(f, "ClearForm"),
            Action::CopyOutput => write!(f, "CopyOutput"),
            Action::ScrollOutputUp => write!(f, "ScrollOutputUp"),
            Action::ScrollOutputDown => write!(f, "ScrollOutputDown"),
        }
    }
}
