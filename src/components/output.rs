//! Output panel component
//!
//! Renders the generated pseudocode with a copy affordance in the block
//! title. The affordance swaps to an acknowledgement while the copy flag
//! is set.

use crate::component::Component;
use crate::model::form::FormState;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
    Frame,
};

/// Output panel for the generated pseudocode
/// Owns the vertical scroll offset
#[derive(Default)]
pub struct OutputComponent {
    /// Vertical scroll offset in lines
    pub scroll: u16,
}

impl OutputComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll down, clamped to the last line of the text
    pub fn scroll_down(&mut self, line_count: usize) {
        if (self.scroll as usize) + 1 < line_count {
            self.scroll += 1;
        }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }
}

impl Component for OutputComponent {
    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &FormState) -> Result<()> {
        let copy_hint = if state.copy_acknowledged {
            Span::styled(
                " ✓ copied ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else if !state.generated_text.is_empty() {
            Span::styled(" ⧉ Ctrl-y to copy ", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Generated Pseudocode ")
            .title(Title::from(copy_hint).alignment(Alignment::Right));

        let paragraph = if state.generated_text.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " Fill in the form and press Generate",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
        } else {
            Paragraph::new(state.generated_text.as_str())
                .scroll((self.scroll, 0))
                .block(block)
        };
        frame.render_widget(paragraph, area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut output = OutputComponent::new();
        output.scroll_up();
        assert_eq!(output.scroll, 0);

        output.scroll_down(3);
        output.scroll_down(3);
        output.scroll_down(3);
        assert_eq!(output.scroll, 2);

        output.reset_scroll();
        assert_eq!(output.scroll, 0);
    }
}
