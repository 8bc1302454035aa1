//! Computer type selection screen

use pcsim_core::BootReport;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::report_lines;
use crate::theme::styles;

/// Prompt, plus the result of the previous build when there is one.
pub struct SelectionView<'a> {
    last_outcome: Option<&'a BootReport>,
}

impl<'a> SelectionView<'a> {
    pub fn new(last_outcome: Option<&'a BootReport>) -> Self {
        Self { last_outcome }
    }
}

impl Widget for SelectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "Which computer do you want to assemble?",
                styles::title(),
            )),
        ];

        if let Some(report) = self.last_outcome {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Last {} build:", report.computer_type.label().to_lowercase()),
                styles::text_muted(),
            )));
            lines.extend(report_lines(report));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pcsim_core::ComputerType;

    #[test]
    fn test_prompt_without_history() {
        let mut term = TestTerminal::new();
        term.render_widget(SelectionView::new(None), term.area());
        assert!(term.buffer_contains("Which computer do you want to assemble?"));
        assert!(!term.buffer_contains("Last"));
    }

    #[test]
    fn test_shows_previous_outcome() {
        let report = BootReport::new(ComputerType::Desktop, &["RAM DDR4 8GB"]);
        let mut term = TestTerminal::new();
        term.render_widget(SelectionView::new(Some(&report)), term.area());
        assert!(term.buffer_contains("Last desktop build:"));
        assert!(term.buffer_contains("The computer does not power on"));
        assert!(term.buffer_contains("Missing:"));
    }
}
