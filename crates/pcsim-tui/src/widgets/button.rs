//! Clickable button

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Paragraph, Widget};

use super::truncate;
use crate::theme::styles;

pub struct ButtonView<'a> {
    label: &'a str,
    hovered: bool,
}

impl<'a> ButtonView<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            hovered: false,
        }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }
}

impl Widget for ButtonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::button_block(self.hovered);
        let inner = block.inner(area);
        block.render(area, buf);

        let style = if self.hovered {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };
        Paragraph::new(truncate(self.label, inner.width as usize))
            .style(style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
