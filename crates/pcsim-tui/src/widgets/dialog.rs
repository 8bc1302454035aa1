//! Modal alert and confirm dialogs

use pcsim_app::dialog::Dialog;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Clear, Paragraph, Widget, Wrap};

use crate::theme::styles;

/// Dialog frame and message. Buttons are drawn on top by the caller.
pub struct DialogView<'a> {
    dialog: &'a Dialog,
}

impl<'a> DialogView<'a> {
    pub fn new(dialog: &'a Dialog) -> Self {
        Self { dialog }
    }
}

impl Widget for DialogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let title_style = match self.dialog {
            Dialog::Alert { .. } => styles::status_yellow(),
            Dialog::Confirm { .. } => styles::status_red(),
        };
        let block = styles::modal_block()
            .title(Span::styled(format!(" {} ", self.dialog.title()), title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let message_area = Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        };
        Paragraph::new(self.dialog.message())
            .style(styles::text_primary())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message_area, buf);
    }
}
