//! Selection validator - gating for leaving the shelf
//!
//! The visible pane is checked before the overall internal/external
//! requirement so an obviously empty screen gets the more direct message.

use crate::shelf::{ShelfCard, ShelfPane};

/// Outcome of [`validate_can_proceed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    OkProceed,
    NeedsCurrentPaneSelection,
    NeedsInternalSelection,
    NeedsExternalSelection,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationResult::OkProceed)
    }

    /// Alert text for a blocked result, `None` when proceeding is allowed.
    pub fn alert_message(&self, current_pane: ShelfPane) -> Option<String> {
        match self {
            ValidationResult::OkProceed => None,
            ValidationResult::NeedsCurrentPaneSelection => Some(format!(
                "Select at least one {} component to continue",
                current_pane.label()
            )),
            ValidationResult::NeedsInternalSelection => {
                Some("Select at least one internal component as well".to_string())
            }
            ValidationResult::NeedsExternalSelection => {
                Some("Select at least one external component as well".to_string())
            }
        }
    }
}

/// True iff at least one card of the pane is selected.
pub fn has_any_selection(pane_components: &[ShelfCard]) -> bool {
    pane_components.iter().any(|card| card.selected)
}

/// Decide whether the shelf may be left with the given selections.
pub fn validate_can_proceed<S: AsRef<str>>(
    current_pane_selections: &[S],
    internal_selections: &[S],
    external_selections: &[S],
) -> ValidationResult {
    if current_pane_selections.is_empty() {
        ValidationResult::NeedsCurrentPaneSelection
    } else if internal_selections.is_empty() {
        ValidationResult::NeedsInternalSelection
    } else if external_selections.is_empty() {
        ValidationResult::NeedsExternalSelection
    } else {
        ValidationResult::OkProceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn test_empty_current_pane_wins_over_everything() {
        assert_eq!(
            validate_can_proceed(NONE, NONE, NONE),
            ValidationResult::NeedsCurrentPaneSelection
        );
        assert_eq!(
            validate_can_proceed(NONE, &["RAM DDR4 8GB"], NONE),
            ValidationResult::NeedsCurrentPaneSelection
        );
    }

    #[test]
    fn test_internal_checked_before_external() {
        let mouse = ["Mouse Razen"];
        assert_eq!(
            validate_can_proceed(&mouse, NONE, &mouse),
            ValidationResult::NeedsInternalSelection
        );
        let ram = ["RAM DDR4 8GB"];
        assert_eq!(
            validate_can_proceed(&ram, &ram, NONE),
            ValidationResult::NeedsExternalSelection
        );
    }

    #[test]
    fn test_ok_when_both_groups_selected() {
        let result = validate_can_proceed(&["RAM DDR4 8GB"], &["RAM DDR4 8GB"], &["Mouse Razen"]);
        assert!(result.is_ok());
        assert_eq!(result.alert_message(ShelfPane::Internal), None);
    }

    #[test]
    fn test_alert_names_the_pane() {
        let msg = ValidationResult::NeedsCurrentPaneSelection
            .alert_message(ShelfPane::External)
            .unwrap();
        assert!(msg.contains("external"));
        assert!(ValidationResult::NeedsInternalSelection
            .alert_message(ShelfPane::External)
            .unwrap()
            .contains("internal"));
    }
}
