//! Form component - the single-page input form
//!
//! Owns the focus cursor and converts key events into semantic Actions.
//! The form values themselves live in `FormState`, owned by the App.

use crate::action::Action;
use crate::component::Component;
use crate::model::form::{CallKind, FormState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// A focusable form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    StateHook,
    EffectHook,
    CallKind,
    CallUrl,
    Generate,
    Clear,
}

impl Field {
    /// Focus order; the URL input participates only while visible
    fn order(url_visible: bool) -> &'static [Field] {
        if url_visible {
            &[
                Field::Name,
                Field::StateHook,
                Field::EffectHook,
                Field::CallKind,
                Field::CallUrl,
                Field::Generate,
                Field::Clear,
            ]
        } else {
            &[
                Field::Name,
                Field::StateHook,
                Field::EffectHook,
                Field::CallKind,
                Field::Generate,
                Field::Clear,
            ]
        }
    }
}

/// Form component for the input panel
/// Owns the focus cursor and handles field-level key interactions
#[derive(Default)]
pub struct FormComponent {
    /// Currently focused control
    pub focus: Field,
}

impl FormComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to the next control, wrapping
    pub fn focus_next(&mut self, url_visible: bool) {
        let order = Field::order(url_visible);
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(index + 1) % order.len()];
    }

    /// Move focus to the previous control, wrapping
    pub fn focus_prev(&mut self, url_visible: bool) {
        let order = Field::order(url_visible);
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(index + order.len() - 1) % order.len()];
    }

    /// Pull focus off the URL input if it just disappeared
    pub fn normalize_focus(&mut self, url_visible: bool) {
        if !url_visible && self.focus == Field::CallUrl {
            self.focus = Field::CallKind;
        }
    }

    fn marker(&self, field: Field) -> Span<'static> {
        if self.focus == field {
            Span::styled("▶ ", Style::default().fg(Color::Yellow))
        } else {
            Span::raw("  ")
        }
    }

    fn label_style(&self, field: Field) -> Style {
        if self.focus == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    fn input_line<'a>(&self, field: Field, value: &'a str, max_width: usize) -> Line<'a> {
        let cursor = if self.focus == field { "_" } else { "" };
        Line::from(vec![
            Span::raw("  "),
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{}{}", visible_tail(value, max_width), cursor),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn checkbox_line(&self, field: Field, checked: bool, label: &str) -> Line<'static> {
        let mark = if checked { "[x]" } else { "[ ]" };
        let style = if self.focus == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            self.marker(field),
            Span::styled(format!("{} {}", mark, label), style),
        ])
    }

    fn call_kind_line(&self, selected: CallKind) -> Line<'static> {
        let mut spans = vec![self.marker(Field::CallKind)];
        for kind in CallKind::all() {
            if *kind == selected {
                spans.push(Span::styled(
                    format!("[{}]", kind.label()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", kind.label()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn button_span(&self, field: Field, label: &str) -> Span<'static> {
        let style = if self.focus == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(format!("[ {} ]", label), style)
    }
}

impl Component for FormComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Focus movement works from any control
        match key.code {
            KeyCode::Tab | KeyCode::Down => return Ok(Some(Action::FocusNext)),
            KeyCode::BackTab | KeyCode::Up => return Ok(Some(Action::FocusPrev)),
            _ => {}
        }

        let action = match self.focus {
            Field::Name | Field::CallUrl => match key.code {
                KeyCode::Char(c) => Some(Action::Input(c)),
                KeyCode::Backspace => Some(Action::Backspace),
                KeyCode::Enter => Some(Action::FocusNext),
                _ => None,
            },
            Field::StateHook => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleStateHook),
                _ => None,
            },
            Field::EffectHook => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleEffectHook),
                _ => None,
            },
            Field::CallKind => match key.code {
                KeyCode::Left => Some(Action::PrevCallKind),
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                    Some(Action::NextCallKind)
                }
                _ => None,
            },
            Field::Generate => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Generate),
                _ => None,
            },
            Field::Clear => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ClearForm),
                _ => None,
            },
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &FormState) -> Result<()> {
        let input_width = area.width.saturating_sub(8) as usize;

        let state_label = if state.needs_state {
            "Remove useState"
        } else {
            "Add useState"
        };
        let effect_label = if state.needs_effect {
            "Remove useEffect"
        } else {
            "Add useEffect"
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                self.marker(Field::Name),
                Span::styled("Component Name", self.label_style(Field::Name)),
            ]),
            self.input_line(Field::Name, &state.component_name, input_width),
            Line::from(""),
            self.checkbox_line(Field::StateHook, state.needs_state, state_label),
            self.checkbox_line(Field::EffectHook, state.needs_effect, effect_label),
            Line::from(""),
            Line::from(vec![
                self.marker(Field::CallKind),
                Span::styled("API Call Type", self.label_style(Field::CallKind)),
            ]),
            self.call_kind_line(state.call_kind),
        ];

        if state.url_visible() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                self.marker(Field::CallUrl),
                Span::styled("API URL", self.label_style(Field::CallUrl)),
            ]));
            lines.push(self.input_line(Field::CallUrl, &state.call_url, input_width));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            self.button_span(Field::Generate, "Generate Pseudocode"),
            Span::raw("  "),
            self.button_span(Field::Clear, "Clear"),
        ]));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" React Pseudocode Generator ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);

        Ok(())
    }
}

/// Tail of `text` that fits in `max_width` terminal columns
///
/// Keeps the end of the value visible while typing, wide characters
/// accounted for.
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_order_skips_url_when_hidden() {
        let mut form = FormComponent::new();
        assert_eq!(form.focus, Field::Name);

        form.focus = Field::CallKind;
        form.focus_next(false);
        assert_eq!(form.focus, Field::Generate);

        form.focus = Field::CallKind;
        form.focus_next(true);
        assert_eq!(form.focus, Field::CallUrl);
    }

    #[test]
    fn test_focus_wraps_in_both_directions() {
        let mut form = FormComponent::new();
        form.focus = Field::Clear;
        form.focus_next(false);
        assert_eq!(form.focus, Field::Name);

        form.focus_prev(false);
        assert_eq!(form.focus, Field::Clear);
    }

    #[test]
    fn test_normalize_focus_leaves_hidden_url_field() {
        let mut form = FormComponent::new();
        form.focus = Field::CallUrl;
        form.normalize_focus(false);
        assert_eq!(form.focus, Field::CallKind);

        form.focus = Field::CallUrl;
        form.normalize_focus(true);
        assert_eq!(form.focus, Field::CallUrl);
    }

    #[test]
    fn test_key_mapping_depends_on_focus() {
        let mut form = FormComponent::new();

        form.focus = Field::Name;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Char('a'))).unwrap(),
            Some(Action::Input('a'))
        );
        assert_eq!(
            form.handle_key_event(key(KeyCode::Backspace)).unwrap(),
            Some(Action::Backspace)
        );

        form.focus = Field::StateHook;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Char(' '))).unwrap(),
            Some(Action::ToggleStateHook)
        );

        form.focus = Field::CallKind;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Left)).unwrap(),
            Some(Action::PrevCallKind)
        );

        form.focus = Field::Generate;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::Generate)
        );

        form.focus = Field::Clear;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::ClearForm)
        );
    }

    #[test]
    fn test_tab_moves_focus_from_any_control() {
        let mut form = FormComponent::new();
        form.focus = Field::Name;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Tab)).unwrap(),
            Some(Action::FocusNext)
        );
        assert_eq!(
            form.handle_key_event(key(KeyCode::BackTab)).unwrap(),
            Some(Action::FocusPrev)
        );
    }

    #[test]
    fn test_visible_tail_keeps_end_of_value() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello", 3), "llo");
        assert_eq!(visible_tail("", 3), "");
        // Wide characters count as two columns
        assert_eq!(visible_tail("ab日本", 4), "日本");
        assert_eq!(visible_tail("ab日本", 5), "b日本");
    }
}
