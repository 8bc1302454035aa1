//! Application state (Model in TEA pattern)

use pcsim_core::prelude::*;
use pcsim_core::{Catalog, ComponentGroup, Point, Rect};

use crate::board::PlacementBoard;
use crate::boot_sequence::BootSequence;
use crate::config::Settings;
use crate::dialog::Dialog;
use crate::flow::{self, FlowEvent, FlowState, Screen};
use crate::layout::{self, Button};
use crate::shelf::ShelfState;

/// Terminal size assumed until the first resize event arrives
const DEFAULT_VIEWPORT: Rect = Rect::new(0, 0, 80, 24);

/// Interaction state of the active screen
///
/// Rebuilt from [`FlowState`] on every transition; nothing here outlives
/// its screen.
#[derive(Debug, Clone)]
pub enum ScreenState {
    /// Start, selection and quit screens have nothing to track
    Idle,
    Shelf(ShelfState),
    Board(PlacementBoard),
    Boot(BootSequence),
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    pub catalog: Catalog,

    /// Current screen and carried selections
    pub flow: FlowState,

    pub screen: ScreenState,

    /// Modal dialog on top of the screen
    pub dialog: Option<Dialog>,

    /// Terminal area in cells
    pub viewport: Rect,

    /// Last known pointer position, for hover highlights
    pub pointer: Option<Point>,

    /// Frames since startup, drives animations
    pub tick_count: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// State for `settings`, starting at the shelf when a computer type is
    /// preconfigured.
    pub fn with_settings(settings: Settings) -> Self {
        let flow = match settings.start.computer_type {
            Some(computer_type) => FlowState::at_shelf(computer_type),
            None => FlowState::new(),
        };
        let mut state = Self {
            settings,
            catalog: Catalog::standard(),
            flow,
            screen: ScreenState::Idle,
            dialog: None,
            viewport: DEFAULT_VIEWPORT,
            pointer: None,
            tick_count: 0,
        };
        state.enter_screen();
        state
    }

    pub fn current_screen(&self) -> Screen {
        self.flow.screen
    }

    pub fn should_quit(&self) -> bool {
        self.flow.is_quit()
    }

    pub fn shelf(&self) -> Option<&ShelfState> {
        match &self.screen {
            ScreenState::Shelf(shelf) => Some(shelf),
            _ => None,
        }
    }

    pub fn shelf_mut(&mut self) -> Option<&mut ShelfState> {
        match &mut self.screen {
            ScreenState::Shelf(shelf) => Some(shelf),
            _ => None,
        }
    }

    pub fn board(&self) -> Option<&PlacementBoard> {
        match &self.screen {
            ScreenState::Board(board) => Some(board),
            _ => None,
        }
    }

    pub fn board_mut(&mut self) -> Option<&mut PlacementBoard> {
        match &mut self.screen {
            ScreenState::Board(board) => Some(board),
            _ => None,
        }
    }

    pub fn boot(&self) -> Option<&BootSequence> {
        match &self.screen {
            ScreenState::Boot(boot) => Some(boot),
            _ => None,
        }
    }

    pub fn boot_mut(&mut self) -> Option<&mut BootSequence> {
        match &mut self.screen {
            ScreenState::Boot(boot) => Some(boot),
            _ => None,
        }
    }

    /// Buttons that currently accept clicks (only the dialog's while one is
    /// open).
    pub fn active_buttons(&self) -> Vec<Button> {
        match &self.dialog {
            Some(dialog) => layout::dialog_buttons(dialog, self.viewport),
            None => layout::screen_buttons(self.current_screen(), self.viewport),
        }
    }

    /// Resize the viewport and move board geometry along with it.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        let area = layout::board_area(self.viewport);
        if let Some(board) = self.board_mut() {
            board.relayout(area);
        }
    }

    /// Feed `event` to the flow controller.
    ///
    /// Returns false (and logs) when the current screen rejects the event.
    pub fn apply(&mut self, event: FlowEvent) -> bool {
        let from = self.flow.screen;
        match flow::transition(&self.flow, event, &self.catalog) {
            Ok(next) => {
                info!("Screen {} -> {}", from, next.screen);
                self.flow = next;
                self.dialog = None;
                self.enter_screen();
                true
            }
            Err(e) => {
                warn!("Ignoring flow event: {}", e);
                false
            }
        }
    }

    /// Build the interaction state for the current flow screen.
    fn enter_screen(&mut self) {
        let computer_type = self.flow.computer_type;
        let area = layout::board_area(self.viewport);

        self.screen = match (self.flow.screen, computer_type) {
            (Screen::Shelf, Some(ty)) => ScreenState::Shelf(ShelfState::new(
                &self.catalog,
                ty,
                &self.flow.all_selections(),
            )),
            (Screen::Worktable, Some(ty)) => ScreenState::Board(PlacementBoard::new(
                &self.catalog,
                ty,
                ComponentGroup::Internal,
                &self.flow.internal_selections,
                area,
            )),
            (Screen::ExternalConnection, Some(ty)) => ScreenState::Board(PlacementBoard::new(
                &self.catalog,
                ty,
                ComponentGroup::External,
                &self.flow.external_selections,
                area,
            )),
            (Screen::LaptopBoot, Some(ty)) => ScreenState::Boot(BootSequence::new(
                ty,
                self.flow.installed.clone(),
                self.settings.boot.delay(),
            )),
            _ => ScreenState::Idle,
        };
    }
}
