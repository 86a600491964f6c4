//! Form state - the user-editable fields for one generation request
//!
//! `FormState` is owned by the App and mutated only through action dispatch.
//! `generated_text` is derived: it is either empty or exactly the generator
//! output for the other fields at the most recent Generate action.

use std::fmt;

/// The selected REST verb for the optional API call snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallKind {
    /// No API call
    #[default]
    None,
    Get,
    Post,
    Put,
    Delete,
}

impl CallKind {
    /// All kinds in selection order
    pub fn all() -> &'static [CallKind] {
        &[
            CallKind::None,
            CallKind::Get,
            CallKind::Post,
            CallKind::Put,
            CallKind::Delete,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallKind::None => "none",
            CallKind::Get => "GET",
            CallKind::Post => "POST",
            CallKind::Put => "PUT",
            CallKind::Delete => "DELETE",
        }
    }

    /// Next kind in selection order, wrapping
    pub fn next(&self) -> CallKind {
        let all = Self::all();
        let index = all.iter().position(|k| k == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// Previous kind in selection order, wrapping
    pub fn prev(&self) -> CallKind {
        let all = Self::all();
        let index = all.iter().position(|k| k == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The complete set of user-editable and derived fields describing one
/// pending generation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Free-text component name, may be empty
    pub component_name: String,
    /// Whether the component needs a useState hook
    pub needs_state: bool,
    /// Whether the component needs a useEffect hook
    pub needs_effect: bool,
    /// Selected API call type
    pub call_kind: CallKind,
    /// API URL, meaningful only when `call_kind != None`
    pub call_url: String,
    /// Last generated pseudocode, empty until generation is invoked
    pub generated_text: String,
    /// Transient copy acknowledgement, auto-cleared by the app timer
    pub copy_acknowledged: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the URL input is part of the form
    pub fn url_visible(&self) -> bool {
        self.call_kind != CallKind::None
    }

    /// Reset every field to its creation default
    ///
    /// `copy_acknowledged` is timer-driven and deliberately left alone.
    pub fn clear(&mut self) {
        self.component_name.clear();
        self.needs_state = false;
        self.needs_effect = false;
        self.call_kind = CallKind::None;
        self.call_url.clear();
        self.generated_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_kind_cycles_wrap() {
        let mut kind = CallKind::None;
        for _ in 0..CallKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, CallKind::None);

        assert_eq!(CallKind::None.prev(), CallKind::Delete);
        assert_eq!(CallKind::Delete.next(), CallKind::None);
    }

    #[test]
    fn test_clear_resets_all_fields_except_copy_ack() {
        let mut state = FormState {
            component_name: "Widget".to_string(),
            needs_state: true,
            needs_effect: true,
            call_kind: CallKind::Put,
            call_url: "/api/items".to_string(),
            generated_text: "some output".to_string(),
            copy_acknowledged: true,
        };

        state.clear();

        assert_eq!(state.component_name, "");
        assert!(!state.needs_state);
        assert!(!state.needs_effect);
        assert_eq!(state.call_kind, CallKind::None);
        assert_eq!(state.call_url, "");
        assert_eq!(state.generated_text, "");
        // The acknowledgement flag is owned by the copy timer, not the form
        assert!(state.copy_acknowledged);
    }

    #[test]
    fn test_url_visible_tracks_call_kind() {
        let mut state = FormState::new();
        assert!(!state.url_visible());
        state.call_kind = CallKind::Get;
        assert!(state.url_visible());
    }
}
