//! Message types for the application (TEA pattern)

use pcsim_core::ComputerType;

use crate::input_key::InputKey;
use crate::pointer::PointerEvent;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse event from terminal
    Pointer(PointerEvent),

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Tick event for animation and the boot timer
    Tick,

    /// Window closed (Ctrl+C, `q`, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Screen Messages
    // ─────────────────────────────────────────────────────────
    /// "Start" on the start screen
    StartPressed,

    /// Laptop or desktop picked on the selection screen
    ChooseType(ComputerType),

    /// Back button of the current screen
    Back,

    /// Continue button of the current screen
    Continue,

    /// Show the other shelf pane
    SwitchPane,

    /// Select or deselect a shelf card
    ToggleCard(&'static str),

    /// Arm the boot timer
    PowerOn,

    /// Leave the boot screen
    Finish,

    // ─────────────────────────────────────────────────────────
    // Dialog Messages
    // ─────────────────────────────────────────────────────────
    /// Close an alert
    DialogOk,

    /// Accept a confirm dialog's pending action
    DialogDiscard,

    /// Dismiss a confirm dialog
    DialogContinue,
}

impl Message {
    /// Messages that act on the screen behind an open dialog
    pub fn is_screen_intent(&self) -> bool {
        matches!(
            self,
            Message::StartPressed
                | Message::ChooseType(_)
                | Message::Back
                | Message::Continue
                | Message::SwitchPane
                | Message::ToggleCard(_)
                | Message::PowerOn
                | Message::Finish
        )
    }
}
