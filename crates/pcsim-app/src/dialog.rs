//! Modal dialogs
//!
//! While a dialog is open it takes every key and pointer event.

/// Action performed when a confirm dialog is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Drop the shelf selections and go back to the type selection
    LeaveShelf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// A message with a single OK button
    Alert { message: String },
    /// "Discard" runs `action`, "Continue" closes the dialog
    Confirm {
        message: String,
        action: PendingAction,
    },
}

impl Dialog {
    pub fn alert(message: impl Into<String>) -> Self {
        Dialog::Alert {
            message: message.into(),
        }
    }

    pub fn confirm_leave_shelf() -> Self {
        Dialog::Confirm {
            message: "Discard the selected components?".to_string(),
            action: PendingAction::LeaveShelf,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Dialog::Alert { message } | Dialog::Confirm { message, .. } => message,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Alert { .. } => "Notice",
            Dialog::Confirm { .. } => "Discard changes?",
        }
    }
}
