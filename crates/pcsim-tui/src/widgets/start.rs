//! Start screen banner

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

const BANNER: [&str; 3] = [
    "╔══════════════════════════════════╗",
    "║   P C   A S S E M B L Y   L A B  ║",
    "╚══════════════════════════════════╝",
];

pub struct StartView;

impl Widget for StartView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = BANNER
            .iter()
            .map(|row| Line::from(Span::styled(*row, styles::accent_bold())))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Pick the parts, drag them into place, then power it on.",
            styles::text_secondary(),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
