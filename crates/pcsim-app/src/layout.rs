//! Screen layout shared by hit testing and rendering
//!
//! Every clickable thing has one rectangle, computed here from the viewport.
//! The pointer handler hit-tests against these and the TUI paints at them, so
//! the two cannot drift apart.

use pcsim_core::{ComputerType, Point, Rect};

use crate::dialog::Dialog;
use crate::flow::Screen;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

pub const BUTTON_WIDTH: u16 = 20;
pub const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;

pub const CARD_WIDTH: u16 = 26;
pub const CARD_HEIGHT: u16 = 3;
const CARD_GAP: u16 = 1;

pub const DIALOG_WIDTH: u16 = 54;
pub const DIALOG_HEIGHT: u16 = 9;

/// Identifies a clickable button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Start,
    Quit,
    ChooseType(ComputerType),
    Back,
    Continue,
    SwitchPane,
    PowerOn,
    Finish,
    DialogOk,
    DialogDiscard,
    DialogContinue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub id: ButtonId,
    pub label: &'static str,
    pub rect: Rect,
}

impl Button {
    fn new(id: ButtonId, label: &'static str, rect: Rect) -> Self {
        Self { id, label, rect }
    }
}

// ─────────────────────────────────────────────────────────
// Regions
// ─────────────────────────────────────────────────────────

pub fn header_area(viewport: Rect) -> Rect {
    Rect::new(
        viewport.x,
        viewport.y,
        viewport.width,
        HEADER_HEIGHT.min(viewport.height),
    )
}

pub fn footer_area(viewport: Rect) -> Rect {
    let height = FOOTER_HEIGHT.min(viewport.height.saturating_sub(HEADER_HEIGHT));
    Rect::new(
        viewport.x,
        viewport.bottom() - i32::from(height),
        viewport.width,
        height,
    )
}

/// Everything between header and footer
pub fn body_area(viewport: Rect) -> Rect {
    let header = header_area(viewport);
    let footer = footer_area(viewport);
    let height = viewport
        .height
        .saturating_sub(header.height)
        .saturating_sub(footer.height);
    Rect::new(viewport.x, header.bottom(), viewport.width, height)
}

/// Board area of the worktable and connection screens
pub fn board_area(viewport: Rect) -> Rect {
    body_area(viewport)
}

// ─────────────────────────────────────────────────────────
// Buttons
// ─────────────────────────────────────────────────────────

/// Buttons laid out left to right, centered on `row`.
fn button_row(row: Rect, buttons: &[(ButtonId, &'static str)]) -> Vec<Button> {
    let count = buttons.len() as i32;
    let total = count * i32::from(BUTTON_WIDTH) + (count - 1).max(0) * i32::from(BUTTON_GAP);
    let mut x = row.x + (i32::from(row.width) - total).max(0) / 2;
    buttons
        .iter()
        .map(|&(id, label)| {
            let rect = Rect::new(x, row.y, BUTTON_WIDTH, BUTTON_HEIGHT);
            x += i32::from(BUTTON_WIDTH + BUTTON_GAP);
            Button::new(id, label, rect)
        })
        .collect()
}

/// A row of buttons vertically centered in `area`.
fn centered_row(area: Rect, buttons: &[(ButtonId, &'static str)]) -> Vec<Button> {
    let y = area.y + (i32::from(area.height) - i32::from(BUTTON_HEIGHT)).max(0) / 2;
    button_row(Rect::new(area.x, y, area.width, BUTTON_HEIGHT), buttons)
}

/// The buttons of `screen` for a terminal of `viewport` size.
pub fn screen_buttons(screen: Screen, viewport: Rect) -> Vec<Button> {
    let body = body_area(viewport);
    let footer = footer_area(viewport);

    match screen {
        Screen::Start => centered_row(body, &[(ButtonId::Start, "Start"), (ButtonId::Quit, "Quit")]),
        Screen::Selection => centered_row(
            body,
            &ComputerType::ALL.map(|ty| (ButtonId::ChooseType(ty), ty.label())),
        ),
        Screen::Shelf => button_row(
            footer,
            &[
                (ButtonId::Back, "Back"),
                (ButtonId::SwitchPane, "Switch pane"),
                (ButtonId::Continue, "Continue assembly"),
            ],
        ),
        Screen::Worktable | Screen::ExternalConnection => button_row(
            footer,
            &[(ButtonId::Back, "Back"), (ButtonId::Continue, "Continue")],
        ),
        Screen::LaptopBoot => button_row(
            footer,
            &[(ButtonId::PowerOn, "Power on"), (ButtonId::Finish, "Finish")],
        ),
        Screen::Quit => Vec::new(),
    }
}

pub fn button_at(buttons: &[Button], point: Point) -> Option<ButtonId> {
    buttons
        .iter()
        .find(|b| b.rect.contains(point))
        .map(|b| b.id)
}

// ─────────────────────────────────────────────────────────
// Dialogs
// ─────────────────────────────────────────────────────────

/// Centered dialog box
pub fn dialog_area(viewport: Rect) -> Rect {
    let width = DIALOG_WIDTH.min(viewport.width);
    let height = DIALOG_HEIGHT.min(viewport.height);
    Rect::new(
        viewport.x + i32::from(viewport.width - width) / 2,
        viewport.y + i32::from(viewport.height - height) / 2,
        width,
        height,
    )
}

pub fn dialog_buttons(dialog: &Dialog, viewport: Rect) -> Vec<Button> {
    let area = dialog_area(viewport);
    let row = Rect::new(
        area.x,
        area.bottom() - i32::from(BUTTON_HEIGHT) - 1,
        area.width,
        BUTTON_HEIGHT,
    );
    match dialog {
        Dialog::Alert { .. } => button_row(row, &[(ButtonId::DialogOk, "OK")]),
        Dialog::Confirm { .. } => button_row(
            row,
            &[
                (ButtonId::DialogDiscard, "Discard"),
                (ButtonId::DialogContinue, "Continue"),
            ],
        ),
    }
}

// ─────────────────────────────────────────────────────────
// Shelf
// ─────────────────────────────────────────────────────────

/// Card rectangles for the visible shelf pane, row-major inside the body.
///
/// Cards get shorter, then narrower, until every row fits the body.
pub fn shelf_card_rects(viewport: Rect, count: usize) -> Vec<Rect> {
    let body = body_area(viewport).inner(1);
    let gap = i32::from(CARD_GAP);
    let total = (count as i32).max(1);
    let height = i32::from(body.height).max(1);

    let mut columns = ((i32::from(body.width) + gap) / i32::from(CARD_WIDTH + CARD_GAP)).clamp(1, total);
    while (total + columns - 1) / columns > height && columns < total {
        columns += 1;
    }
    let rows = (total + columns - 1) / columns;
    let card_width = ((i32::from(body.width) + gap) / columns - gap).clamp(1, i32::from(CARD_WIDTH));
    let card_height = (height / rows).clamp(1, i32::from(CARD_HEIGHT));

    (0..count as i32)
        .map(|i| {
            Rect::new(
                body.x + (i % columns) * (card_width + gap),
                body.y + (i / columns) * card_height,
                card_width as u16,
                card_height as u16,
            )
        })
        .collect()
}
