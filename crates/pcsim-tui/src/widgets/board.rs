//! Placement board: chassis slots, the tray and draggable tokens

use pcsim_app::board::{PlacementBoard, PlacementToken, Slot, TokenState, TOKEN_HEIGHT};
use pcsim_core::ComponentGroup;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use super::{clip, truncate};
use crate::theme::styles;

pub struct BoardView<'a> {
    board: &'a PlacementBoard,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a PlacementBoard) -> Self {
        Self { board }
    }

    fn chassis_title(&self) -> String {
        let ty = self.board.computer_type().label();
        match self.board.group() {
            ComponentGroup::Internal => format!(" {} chassis ", ty),
            ComponentGroup::External => format!(" {} ports ", ty),
        }
    }
}

/// Short cells keep only the side borders so the label still has a row.
fn fit_borders(block: Block<'static>, height: u16) -> Block<'static> {
    if height < TOKEN_HEIGHT {
        block.borders(Borders::LEFT | Borders::RIGHT)
    } else {
        block
    }
}

fn render_slot(slot: &Slot, highlighted: bool, area: Rect, buf: &mut Buffer) {
    let block = fit_borders(styles::slot_block(highlighted), slot.rect.height);
    let inner = block.inner(area);
    block.render(area, buf);

    let style = if highlighted {
        styles::status_green()
    } else {
        styles::text_muted()
    };
    Paragraph::new(truncate(slot.label, inner.width as usize))
        .style(style)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

fn render_token(token: &PlacementToken, area: Rect, buf: &mut Buffer) {
    let lifted = token.state == TokenState::Dragging;
    let mut block = styles::token_block(lifted);
    if token.is_placed() {
        block = block.border_style(styles::status_green());
    }
    let block = fit_borders(block, token.size.height);
    let inner = block.inner(area);

    Clear.render(area, buf);
    block.render(area, buf);
    Paragraph::new(truncate(token.display_name, inner.width as usize))
        .style(styles::text_primary())
        .alignment(Alignment::Center)
        .render(inner, buf);
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = self.board;
        let (placed, total) = board.progress();

        if let Some(chassis) = clip(board.chassis_area(), area) {
            styles::glass_block(true)
                .title(Span::styled(self.chassis_title(), styles::accent_bold()))
                .title_bottom(Span::styled(
                    format!(" {}/{} placed ", placed, total),
                    if board.is_complete() {
                        styles::status_green()
                    } else {
                        styles::text_secondary()
                    },
                ))
                .render(chassis, buf);
        }
        if let Some(tray) = clip(board.tray_area(), area) {
            styles::glass_block(false)
                .title(Span::styled(" Tray ", styles::text_secondary()))
                .render(tray, buf);
        }

        let hover = board.hover_slot();
        for slot in board.slots().iter().filter(|s| !s.is_occupied()) {
            if let Some(slot_area) = clip(slot.rect, area) {
                render_slot(slot, hover == Some(slot.id), slot_area, buf);
            }
        }

        // The dragged token is painted last so it stays on top
        let resting = board
            .tokens()
            .iter()
            .filter(|t| t.state != TokenState::Dragging);
        for token in resting.chain(board.dragging()) {
            if let Some(token_area) = clip(token.rect(), area) {
                render_token(token, token_area, buf);
            }
        }
    }
}
