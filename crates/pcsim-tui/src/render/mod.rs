//! Main render/view function (View in TEA pattern)


use std::time::Instant;

use pcsim_app::layout::{self, Button};
use pcsim_app::{AppState, Screen};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::widgets::{
    clip, BoardView, BootView, ButtonView, DialogView, Header, SelectionView, ShelfView,
    StartView,
};

/// Render the complete UI (View function in TEA)
///
/// Geometry comes from `pcsim_app::layout` and the board itself, the same
/// rectangles the pointer handler hit-tests against. Anything outside the
/// frame is clipped.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let viewport = state.viewport;
    let screen = state.current_screen();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    if let Some(header) = clip(layout::header_area(viewport), area) {
        let computer_type = state
            .flow
            .computer_type
            .filter(|_| !matches!(screen, Screen::Start | Screen::Selection));
        frame.render_widget(Header::new(screen, computer_type), header);
    }

    let body = clip(layout::body_area(viewport), area);
    match screen {
        Screen::Start => {
            if let Some(body) = body {
                frame.render_widget(StartView, body);
            }
        }
        Screen::Selection => {
            if let Some(body) = body {
                frame.render_widget(SelectionView::new(state.flow.last_outcome.as_ref()), body);
            }
        }
        Screen::Shelf => {
            if let Some(shelf) = state.shelf() {
                frame.render_widget(ShelfView::new(shelf, viewport).pointer(state.pointer), area);
            }
        }
        Screen::Worktable | Screen::ExternalConnection => {
            if let Some(board) = state.board() {
                frame.render_widget(BoardView::new(board), area);
            }
        }
        Screen::LaptopBoot => {
            if let (Some(boot), Some(body)) = (state.boot(), body) {
                frame.render_widget(
                    BootView::new(boot, Instant::now()).tick(state.tick_count),
                    body,
                );
            }
        }
        Screen::Quit => {}
    }

    let screen_hover = state.dialog.is_none();
    render_buttons(frame, &layout::screen_buttons(screen, viewport), state, screen_hover);

    if let Some(dialog) = &state.dialog {
        if let Some(dialog_area) = clip(layout::dialog_area(viewport), area) {
            frame.render_widget(DialogView::new(dialog), dialog_area);
        }
        render_buttons(frame, &layout::dialog_buttons(dialog, viewport), state, true);
    }
}

fn render_buttons(frame: &mut Frame, buttons: &[Button], state: &AppState, hover: bool) {
    let area = frame.area();
    for button in buttons {
        let Some(button_area) = clip(button.rect, area) else {
            continue;
        };
        let hovered = hover && state.pointer.is_some_and(|p| button.rect.contains(p));
        frame.render_widget(ButtonView::new(button.label).hovered(hovered), button_area);
    }
}
