//! Header bar with the screen title and key hints

use pcsim_app::Screen;
use pcsim_core::ComputerType;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct Header {
    screen: Screen,
    computer_type: Option<ComputerType>,
}

impl Header {
    pub fn new(screen: Screen, computer_type: Option<ComputerType>) -> Self {
        Self {
            screen,
            computer_type,
        }
    }

    fn hint(&self) -> &'static str {
        match self.screen {
            Screen::Start => "enter start · q quit",
            Screen::Selection => "l laptop · d desktop · q quit",
            Screen::Shelf => "tab pane · enter continue · esc back",
            Screen::Worktable | Screen::ExternalConnection => "drag cards · enter continue",
            Screen::LaptopBoot => "p power on · f finish",
            Screen::Quit => "",
        }
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(self.screen.title(), styles::title())];
        if let Some(ty) = self.computer_type {
            spans.push(Span::styled("  ·  ", styles::text_muted()));
            spans.push(Span::styled(ty.label(), styles::accent()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        Paragraph::new(Span::styled(self.hint(), styles::keybinding()))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
