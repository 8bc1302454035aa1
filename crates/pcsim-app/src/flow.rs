//! Screen flow controller
//!
//! A finite state machine over the simulator's screens. [`transition`] is
//! pure: it takes the current [`FlowState`] and an event and returns the next
//! state, or an error for events the current screen does not accept.
//!
//! The main path is Start, Selection, Shelf, Worktable, ExternalConnection
//! and LaptopBoot. Every cycle ends back on Selection: from the worktable when
//! there are no peripherals, from the connection screen for a desktop, and
//! from the boot screen for a laptop.

use std::fmt;

use pcsim_core::{BootReport, Catalog, ComputerType};
use thiserror::Error;

use crate::shelf::SelectionSet;

/// Screens of the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Selection,
    Shelf,
    Worktable,
    ExternalConnection,
    LaptopBoot,
    Quit,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Start => "PC Assembly Simulator",
            Screen::Selection => "Choose a computer type",
            Screen::Shelf => "Pick your components",
            Screen::Worktable => "Worktable",
            Screen::ExternalConnection => "Connect the peripherals",
            Screen::LaptopBoot => "Power-on test",
            Screen::Quit => "Goodbye",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Typed results that screens hand to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// The user confirmed the start screen
    Confirm,
    TypeChosen(ComputerType),
    Back,
    /// The shelf was left with these selections
    Proceed { selections: SelectionSet },
    /// The internal worktable is complete; `installed` are the placed names
    AssemblyComplete { installed: Vec<String> },
    ExternalComplete,
    /// The boot screen was closed
    Finish,
    WindowClosed,
}

impl FlowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::Confirm => "confirm",
            FlowEvent::TypeChosen(_) => "type chosen",
            FlowEvent::Back => "back",
            FlowEvent::Proceed { .. } => "proceed",
            FlowEvent::AssemblyComplete { .. } => "assembly complete",
            FlowEvent::ExternalComplete => "external complete",
            FlowEvent::Finish => "finish",
            FlowEvent::WindowClosed => "window closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("event '{event}' is not valid on the {screen} screen")]
    InvalidTransition { screen: Screen, event: &'static str },

    #[error("no computer type chosen before the {screen} screen")]
    MissingComputerType { screen: Screen },
}

/// The current screen plus everything carried between screens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowState {
    pub screen: Screen,
    pub computer_type: Option<ComputerType>,
    pub internal_selections: Vec<String>,
    pub external_selections: Vec<String>,
    /// Names placed on the internal worktable, set when it completes
    pub installed: Vec<String>,
    /// Boot result shown on the selection screen after a cycle without
    /// peripherals
    pub last_outcome: Option<BootReport>,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flow state positioned on the shelf for `computer_type`, as if the
    /// user had just picked it.
    pub fn at_shelf(computer_type: ComputerType) -> Self {
        Self {
            screen: Screen::Shelf,
            computer_type: Some(computer_type),
            ..Self::default()
        }
    }

    pub fn is_quit(&self) -> bool {
        self.screen == Screen::Quit
    }

    /// Every carried selection, internal first.
    pub fn all_selections(&self) -> Vec<String> {
        self.internal_selections
            .iter()
            .chain(&self.external_selections)
            .cloned()
            .collect()
    }

    fn require_type(&self) -> Result<ComputerType, FlowError> {
        self.computer_type
            .ok_or(FlowError::MissingComputerType {
                screen: self.screen,
            })
    }

    fn goto(&self, screen: Screen) -> FlowState {
        FlowState {
            screen,
            ..self.clone()
        }
    }
}

/// Compute the next flow state for `event`.
pub fn transition(
    state: &FlowState,
    event: FlowEvent,
    catalog: &Catalog,
) -> Result<FlowState, FlowError> {
    use Screen::*;

    let invalid = |event: &FlowEvent| FlowError::InvalidTransition {
        screen: state.screen,
        event: event.name(),
    };

    match (state.screen, event) {
        (_, FlowEvent::WindowClosed) => Ok(state.goto(Quit)),

        (Start, FlowEvent::Confirm) => Ok(state.goto(Selection)),

        (Selection, FlowEvent::TypeChosen(computer_type)) => Ok(FlowState::at_shelf(computer_type)),

        (Shelf, FlowEvent::Back) => Ok(state.goto(Selection)),

        (Shelf, FlowEvent::Proceed { selections }) => {
            state.require_type()?;
            let (internal, external) = selections.partition(catalog);
            Ok(FlowState {
                screen: Worktable,
                internal_selections: internal,
                external_selections: external,
                installed: Vec::new(),
                last_outcome: None,
                ..state.clone()
            })
        }

        (Worktable, FlowEvent::Back) => Ok(state.goto(Shelf)),

        (Worktable, FlowEvent::AssemblyComplete { installed }) => {
            let computer_type = state.require_type()?;
            if state.external_selections.is_empty() {
                Ok(FlowState {
                    screen: Selection,
                    last_outcome: Some(BootReport::new(computer_type, &installed)),
                    installed,
                    ..state.clone()
                })
            } else {
                Ok(FlowState {
                    screen: ExternalConnection,
                    installed,
                    ..state.clone()
                })
            }
        }

        (ExternalConnection, FlowEvent::Back) => Ok(state.goto(Worktable)),

        (ExternalConnection, FlowEvent::ExternalComplete) => match state.require_type()? {
            ComputerType::Laptop => Ok(state.goto(LaptopBoot)),
            ComputerType::Desktop => Ok(FlowState {
                screen: Selection,
                last_outcome: None,
                ..state.clone()
            }),
        },

        (LaptopBoot, FlowEvent::Finish) => Ok(FlowState {
            screen: Selection,
            last_outcome: None,
            ..state.clone()
        }),

        (_, event) => Err(invalid(&event)),
    }
}
