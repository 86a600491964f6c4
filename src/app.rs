//! Root application coordinator
//!
//! Owns the form values, the copy acknowledgement timer, the clipboard
//! handle, and the child components. App is intentionally lean - it
//! dispatches Actions between components but the template logic lives
//! in the model layer.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, Field, FormComponent, OutputComponent};
use crate::config::Config;
use crate::model::form::FormState;
use crate::model::template;
use crate::services::{SystemClipboard, TextClipboard};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Main application state - coordinates between components
pub struct App {
    /// Form values (domain state)
    pub state: FormState,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub form: FormComponent,
    pub output: OutputComponent,

    /// Clipboard handle
    clipboard: Box<dyn TextClipboard>,

    /// When the last successful copy happened; a new copy re-arms this,
    /// so at most one reset is ever pending
    copy_acked_at: Option<Instant>,

    /// How long the copy acknowledgement stays visible
    ack_duration: Duration,
}

impl App {
    /// Create a new App instance backed by the system clipboard
    pub fn new(config: &Config) -> App {
        Self::with_clipboard(
            Box::new(SystemClipboard::new()),
            Duration::from_millis(config.copy_ack_ms),
        )
    }

    fn with_clipboard(clipboard: Box<dyn TextClipboard>, ack_duration: Duration) -> App {
        App {
            state: FormState::new(),
            should_quit: false,
            form: FormComponent::new(),
            output: OutputComponent::new(),
            clipboard,
            copy_acked_at: None,
            ack_duration,
        }
    }

    /// Convert a key event into an Action
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Global shortcuts work regardless of focus
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                KeyCode::Char('g') => Some(Action::Generate),
                KeyCode::Char('r') => Some(Action::ClearForm),
                KeyCode::Char('y') => Some(Action::CopyOutput),
                _ => None,
            });
        }

        match key.code {
            KeyCode::Esc => Ok(Some(Action::Quit)),
            KeyCode::PageUp => Ok(Some(Action::ScrollOutputUp)),
            KeyCode::PageDown => Ok(Some(Action::ScrollOutputDown)),
            _ => self.form.handle_key_event(key),
        }
    }

    /// Process an Action, updating state
    pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.expire_copy_ack(),
            Action::Resize(_, _) => {}
            Action::Quit => self.should_quit = true,

            // ─────────────────────────────────────────────────────────────────
            // Focus Navigation (delegate to FormComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext => self.form.focus_next(self.state.url_visible()),
            Action::FocusPrev => self.form.focus_prev(self.state.url_visible()),

            // ─────────────────────────────────────────────────────────────────
            // Field Editing
            // ─────────────────────────────────────────────────────────────────
            Action::Input(c) => match self.form.focus {
                Field::Name => self.state.component_name.push(c),
                Field::CallUrl => self.state.call_url.push(c),
                _ => {}
            },
            Action::Backspace => match self.form.focus {
                Field::Name => {
                    self.state.component_name.pop();
                }
                Field::CallUrl => {
                    self.state.call_url.pop();
                }
                _ => {}
            },
            Action::ToggleStateHook => self.state.needs_state = !self.state.needs_state,
            Action::ToggleEffectHook => self.state.needs_effect = !self.state.needs_effect,
            Action::NextCallKind => {
                self.state.call_kind = self.state.call_kind.next();
                self.form.normalize_focus(self.state.url_visible());
            }
            Action::PrevCallKind => {
                self.state.call_kind = self.state.call_kind.prev();
                self.form.normalize_focus(self.state.url_visible());
            }

            // ─────────────────────────────────────────────────────────────────
            // Form Operations
            // ─────────────────────────────────────────────────────────────────
            Action::Generate => {
                self.state.generated_text = template::generate(&self.state);
                self.output.reset_scroll();
            }
            Action::ClearForm => {
                self.state.clear();
                self.form.normalize_focus(self.state.url_visible());
                self.output.reset_scroll();
            }
            Action::CopyOutput => self.copy_output(),

            // ─────────────────────────────────────────────────────────────────
            // Output Panel
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollOutputUp => self.output.scroll_up(),
            Action::ScrollOutputDown => {
                self.output
                    .scroll_down(self.state.generated_text.lines().count());
            }
        }
        Ok(None)
    }

    /// Draw the whole screen
    pub fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);
        self.form.draw(frame, layout.form, &self.state)?;
        self.output.draw(frame, layout.output, &self.state)?;
        self.draw_help(frame, layout.help);
        Ok(())
    }

    /// Copy the generated text to the clipboard
    ///
    /// A successful copy (re)arms the acknowledgement timer. A failed copy
    /// leaves all state untouched; the error is only recorded as a
    /// diagnostic.
    fn copy_output(&mut self) {
        if self.state.generated_text.is_empty() {
            return;
        }
        match self.clipboard.set_text(&self.state.generated_text) {
            Ok(()) => {
                self.state.copy_acknowledged = true;
                self.copy_acked_at = Some(Instant::now());
            }
            Err(e) => tracing::warn!("failed to copy pseudocode to clipboard: {:#}", e),
        }
    }

    /// Clear the copy acknowledgement once its interval has elapsed
    fn expire_copy_ack(&mut self) {
        if let Some(acked_at) = self.copy_acked_at {
            if acked_at.elapsed() >= self.ack_duration {
                self.state.copy_acknowledged = false;
                self.copy_acked_at = None;
            }
        }
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(Color::DarkGray);

        let help = Line::from(vec![
            Span::styled(" Tab/↓ ↑", key_style),
            Span::styled(" move  ", text_style),
            Span::styled("Space", key_style),
            Span::styled(" toggle/cycle  ", text_style),
            Span::styled("Enter", key_style),
            Span::styled(" activate  ", text_style),
            Span::styled("^g", key_style),
            Span::styled(" generate  ", text_style),
            Span::styled("^r", key_style),
            Span::styled(" clear  ", text_style),
            Span::styled("^y", key_style),
            Span::styled(" copy  ", text_style),
            Span::styled("PgUp/PgDn", key_style),
            Span::styled(" scroll  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" quit", text_style),
        ]);

        let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
        frame.render_widget(help_widget, area);
    }
}
