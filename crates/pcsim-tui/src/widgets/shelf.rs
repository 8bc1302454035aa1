//! Shelf screen: toggleable component cards in two panes

use pcsim_app::layout;
use pcsim_app::shelf::{ShelfCard, ShelfState};
use pcsim_core::{ComputerType, Point};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use super::{clip, truncate};
use crate::theme::{palette, styles};

pub struct ShelfView<'a> {
    shelf: &'a ShelfState,
    viewport: pcsim_core::Rect,
    pointer: Option<Point>,
}

impl<'a> ShelfView<'a> {
    pub fn new(shelf: &'a ShelfState, viewport: pcsim_core::Rect) -> Self {
        Self {
            shelf,
            viewport,
            pointer: None,
        }
    }

    pub fn pointer(mut self, pointer: Option<Point>) -> Self {
        self.pointer = pointer;
        self
    }

    fn pane_title(&self) -> Line<'static> {
        let pane = self.shelf.pane();
        let selected = self.shelf.selected_in(pane).len();
        let other = self.shelf.selected_in(pane.toggle()).len();
        Line::from(vec![
            Span::styled(format!(" {} components ", capitalize(pane.label())), styles::accent_bold()),
            Span::styled(format!("· {} selected ", selected), styles::text_secondary()),
            Span::styled(
                format!("({} {}) ", other, pane.toggle().label()),
                styles::text_muted(),
            ),
        ])
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render_card(card: &ShelfCard, hovered: bool, area: Rect, buf: &mut Buffer) {
    let border_style = if !card.enabled {
        styles::border_inactive()
    } else if hovered {
        styles::border_active()
    } else if card.selected {
        styles::status_green()
    } else {
        styles::border_inactive()
    };
    // Short cards keep only their side borders so the name still has a row
    let borders = if area.height < layout::CARD_HEIGHT {
        Borders::LEFT | Borders::RIGHT
    } else {
        Borders::ALL
    };
    let block = Block::default()
        .borders(borders)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    block.render(area, buf);

    let (mark, style) = match (card.enabled, card.selected) {
        (false, _) => ("[-] ", styles::text_muted()),
        (true, true) => ("[x] ", styles::status_green()),
        (true, false) => ("[ ] ", styles::text_primary()),
    };
    let name = truncate(
        card.display_name,
        (inner.width as usize).saturating_sub(mark.len()),
    );
    Paragraph::new(Line::from(vec![
        Span::styled(mark, style),
        Span::styled(name, style),
    ]))
    .render(inner, buf);
}

impl Widget for ShelfView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(body) = clip(layout::body_area(self.viewport), area) else {
            return;
        };

        let mut block = styles::glass_block(true).title(self.pane_title());
        if self.shelf.computer_type() == ComputerType::Laptop {
            block = block.title_bottom(Span::styled(
                " [-] desktop-only parts do not fit a laptop ",
                styles::text_muted(),
            ));
        }
        block.render(body, buf);

        let cards = self.shelf.visible_cards();
        let rects = layout::shelf_card_rects(self.viewport, cards.len());
        for (card, rect) in cards.iter().zip(rects) {
            let hovered = self.pointer.is_some_and(|p| rect.contains(p));
            if let Some(card_area) = clip(rect, body) {
                render_card(card, hovered, card_area, buf);
            }
        }
    }
}
