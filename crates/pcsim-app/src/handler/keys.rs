//! Key event handlers per screen

use pcsim_core::ComputerType;

use crate::dialog::Dialog;
use crate::flow::Screen;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if let Some(dialog) = &state.dialog {
        return handle_key_dialog(dialog, key);
    }

    match state.current_screen() {
        Screen::Start => handle_key_start(key),
        Screen::Selection => handle_key_selection(key),
        Screen::Shelf => handle_key_shelf(key),
        Screen::Worktable | Screen::ExternalConnection => handle_key_board(key),
        Screen::LaptopBoot => handle_key_boot(key),
        Screen::Quit => None,
    }
}

fn handle_key_dialog(dialog: &Dialog, key: InputKey) -> Option<Message> {
    match (dialog, key) {
        (Dialog::Alert { .. }, InputKey::Enter | InputKey::Esc) => Some(Message::DialogOk),
        (Dialog::Confirm { .. }, InputKey::Char('d')) => Some(Message::DialogDiscard),
        (Dialog::Confirm { .. }, InputKey::Enter | InputKey::Esc | InputKey::Char('c')) => {
            Some(Message::DialogContinue)
        }
        _ => None,
    }
}

fn handle_key_start(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') | InputKey::Char('s') => Some(Message::StartPressed),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_selection(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('l') | InputKey::Left => Some(Message::ChooseType(ComputerType::Laptop)),
        InputKey::Char('d') | InputKey::Right => Some(Message::ChooseType(ComputerType::Desktop)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_shelf(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::BackTab => Some(Message::SwitchPane),
        InputKey::Esc => Some(Message::Back),
        InputKey::Enter => Some(Message::Continue),
        _ => None,
    }
}

fn handle_key_board(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::Back),
        InputKey::Enter => Some(Message::Continue),
        _ => None,
    }
}

fn handle_key_boot(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('p') => Some(Message::PowerOn),
        InputKey::Esc | InputKey::Char('f') => Some(Message::Finish),
        _ => None,
    }
}
