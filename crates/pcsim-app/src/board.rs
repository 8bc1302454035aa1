//! Placement board - slots, draggable tokens and the drag lifecycle
//!
//! One board type serves every assembly screen: the internal worktable of a
//! laptop or a desktop and the external connection screen. The catalog decides
//! which slots exist; the shelf selections decide which tokens exist.
//!
//! Invariant: a token is `Placed(slot)` iff that slot's occupant is the
//! token's component id.

use pcsim_core::{Catalog, ComponentGroup, ComputerType, Point, Rect};
use thiserror::Error;
use tracing::{debug, trace};

/// Full width of a slot and of a token, in cells
pub const TOKEN_WIDTH: u16 = 22;

/// Full height of a slot and of a token, in cells
pub const TOKEN_HEIGHT: u16 = 3;

/// Horizontal gap between grid cells
const GAP_X: u16 = 2;

/// Share of the board width given to the chassis (the rest is the tray)
const CHASSIS_PERCENT: u16 = 62;

/// Size shared by every slot and token of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl CellSize {
    pub const FULL: CellSize = CellSize {
        width: TOKEN_WIDTH,
        height: TOKEN_HEIGHT,
    };

    /// Too short for a bordered box with a label inside
    pub fn is_compact(&self) -> bool {
        self.height < TOKEN_HEIGHT
    }

    fn min(self, other: CellSize) -> CellSize {
        CellSize {
            width: self.width.min(other.width),
            height: self.height.min(other.height),
        }
    }
}

/// Contract violations of the drag lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no token with id {0}")]
    UnknownToken(String),

    #[error("no drag in progress")]
    NoActiveDrag,

    #[error("a drag is already in progress")]
    AlreadyDragging,
}

/// Where a token currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    InTray,
    Dragging,
    Placed(&'static str),
}

/// A socket on the chassis schematic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: &'static str,
    /// Shown while the slot is empty
    pub label: &'static str,
    pub accepted_component_id: &'static str,
    pub occupant_id: Option<&'static str>,
    pub rect: Rect,
}

impl Slot {
    pub fn is_occupied(&self) -> bool {
        self.occupant_id.is_some()
    }
}

/// One draggable component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementToken {
    pub component_id: &'static str,
    pub display_name: &'static str,
    pub target_slot_id: &'static str,
    /// Current top-left corner
    pub position: Point,
    /// Tray position the token returns to
    pub home: Point,
    pub size: CellSize,
    pub state: TokenState,
}

impl PlacementToken {
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, TokenState::Placed(_))
    }
}

/// Why a dropped token went back to the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnReason {
    /// The token did not overlap its target slot
    NotOverTarget,
    /// The target slot already holds a component
    Occupied,
}

/// Result of releasing a dragged token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed { slot_id: &'static str },
    Returned { reason: ReturnReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveDrag {
    token: usize,
    /// Pointer position relative to the token's top-left corner
    grab: Point,
}

/// Slots and tokens for one assembly screen
#[derive(Debug, Clone)]
pub struct PlacementBoard {
    computer_type: ComputerType,
    group: ComponentGroup,
    area: Rect,
    cell: CellSize,
    slots: Vec<Slot>,
    tokens: Vec<PlacementToken>,
    drag: Option<ActiveDrag>,
}

impl PlacementBoard {
    /// Build the board for `computer_type` and `group` inside `area`.
    ///
    /// Every placeable catalog component of the group gets a slot. Only the
    /// names in `selected` get a token; names the catalog does not know, or
    /// that belong to another group or machine type, are skipped.
    pub fn new<S: AsRef<str>>(
        catalog: &Catalog,
        computer_type: ComputerType,
        group: ComponentGroup,
        selected: &[S],
        area: Rect,
    ) -> Self {
        let slots = catalog
            .slots_for(computer_type, group)
            .into_iter()
            .map(|def| Slot {
                id: def.id,
                label: def.label,
                accepted_component_id: def.accepted_component_id,
                occupant_id: None,
                rect: Rect::default(),
            })
            .collect();

        let mut tokens: Vec<PlacementToken> = Vec::new();
        for name in selected {
            let name = name.as_ref();
            let Some(def) = catalog.lookup_by_name(name) else {
                debug!("Skipping unknown component {:?}", name);
                continue;
            };
            if def.group() != group || !computer_type.accepts(def.category) {
                debug!("Skipping {} on the {} board", def.display_name, group.label());
                continue;
            }
            let Some(target_slot_id) = def.target_slot_id else {
                continue;
            };
            if tokens.iter().any(|t| t.component_id == def.id) {
                continue;
            }
            tokens.push(PlacementToken {
                component_id: def.id,
                display_name: def.display_name,
                target_slot_id,
                position: Point::default(),
                home: Point::default(),
                size: CellSize::FULL,
                state: TokenState::InTray,
            });
        }

        let mut board = Self {
            computer_type,
            group,
            area,
            cell: CellSize::FULL,
            slots,
            tokens,
            drag: None,
        };
        board.relayout(area);
        board
    }

    pub fn computer_type(&self) -> ComputerType {
        self.computer_type
    }

    pub fn group(&self) -> ComponentGroup {
        self.group
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Current slot and token size
    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn tokens(&self) -> &[PlacementToken] {
        &self.tokens
    }

    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    pub fn token(&self, component_id: &str) -> Option<&PlacementToken> {
        self.tokens.iter().find(|t| t.component_id == component_id)
    }

    /// The chassis region slots are laid out in.
    pub fn chassis_area(&self) -> Rect {
        split_area(self.area).0
    }

    /// The tray region tokens wait in.
    pub fn tray_area(&self) -> Rect {
        split_area(self.area).1
    }

    /// The token being dragged, if any.
    pub fn dragging(&self) -> Option<&PlacementToken> {
        self.drag.map(|d| &self.tokens[d.token])
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Drag lifecycle
    // ─────────────────────────────────────────────────────────

    /// Pick up a token at `pointer`.
    ///
    /// A placed token releases its slot first.
    pub fn begin_drag(&mut self, component_id: &str, pointer: Point) -> Result<(), BoardError> {
        if self.drag.is_some() {
            return Err(BoardError::AlreadyDragging);
        }
        let index = self.token_index(component_id)?;

        if let TokenState::Placed(slot_id) = self.tokens[index].state {
            self.release_slot(slot_id);
        }

        let token = &mut self.tokens[index];
        token.state = TokenState::Dragging;
        self.drag = Some(ActiveDrag {
            token: index,
            grab: pointer.offset_from(token.position),
        });
        trace!("Dragging {}", token.component_id);
        Ok(())
    }

    /// Move the dragged token with the pointer. Slots are not affected.
    pub fn update_drag(&mut self, pointer: Point) -> Result<(), BoardError> {
        let drag = self.drag.ok_or(BoardError::NoActiveDrag)?;
        self.tokens[drag.token].position = Point::new(pointer.x - drag.grab.x, pointer.y - drag.grab.y);
        Ok(())
    }

    /// Release the dragged token at `pointer`.
    ///
    /// The token is placed only if it overlaps its own target slot and that
    /// slot is empty; otherwise it goes back to its tray position.
    pub fn end_drag(&mut self, pointer: Point) -> Result<DropOutcome, BoardError> {
        self.update_drag(pointer)?;
        let drag = self.drag.take().ok_or(BoardError::NoActiveDrag)?;

        let token_rect = self.tokens[drag.token].rect();
        let target = self.tokens[drag.token].target_slot_id;
        let component_id = self.tokens[drag.token].component_id;

        let outcome = match self.slots.iter_mut().find(|s| s.id == target) {
            Some(slot) if slot.rect.intersects(&token_rect) => {
                if slot.is_occupied() {
                    DropOutcome::Returned {
                        reason: ReturnReason::Occupied,
                    }
                } else {
                    slot.occupant_id = Some(component_id);
                    DropOutcome::Placed { slot_id: slot.id }
                }
            }
            _ => DropOutcome::Returned {
                reason: ReturnReason::NotOverTarget,
            },
        };

        let token = &mut self.tokens[drag.token];
        match outcome {
            DropOutcome::Placed { slot_id } => {
                token.state = TokenState::Placed(slot_id);
                if let Some(slot) = self.slots.iter().find(|s| s.id == slot_id) {
                    token.position = slot.rect.origin();
                }
            }
            DropOutcome::Returned { .. } => {
                token.state = TokenState::InTray;
                token.position = token.home;
            }
        }
        debug!("Dropped {}: {:?}", component_id, outcome);
        Ok(outcome)
    }

    /// Detach a placed token and send it back to the tray.
    ///
    /// Returns whether the token was placed.
    pub fn remove_from_slot(&mut self, component_id: &str) -> Result<bool, BoardError> {
        let index = self.token_index(component_id)?;
        let TokenState::Placed(slot_id) = self.tokens[index].state else {
            return Ok(false);
        };
        self.release_slot(slot_id);
        let token = &mut self.tokens[index];
        token.state = TokenState::InTray;
        token.position = token.home;
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Every token is placed. A board without tokens is complete.
    pub fn is_complete(&self) -> bool {
        self.tokens.iter().all(PlacementToken::is_placed)
    }

    /// `(placed, total)` token counts
    pub fn progress(&self) -> (usize, usize) {
        let placed = self.tokens.iter().filter(|t| t.is_placed()).count();
        (placed, self.tokens.len())
    }

    /// Display names of the placed tokens, in token order.
    pub fn placed_names(&self) -> Vec<&'static str> {
        self.tokens
            .iter()
            .filter(|t| t.is_placed())
            .map(|t| t.display_name)
            .collect()
    }

    /// `(slot id, occupant id)` for every slot, in layout order.
    pub fn occupancy(&self) -> Vec<(&'static str, Option<&'static str>)> {
        self.slots.iter().map(|s| (s.id, s.occupant_id)).collect()
    }

    /// The token under `point`. The dragged token is on top of everything.
    pub fn token_at(&self, point: Point) -> Option<&PlacementToken> {
        if let Some(token) = self.dragging() {
            if token.rect().contains(point) {
                return Some(token);
            }
        }
        self.tokens
            .iter()
            .rev()
            .find(|t| t.state != TokenState::Dragging && t.rect().contains(point))
    }

    /// The slot the dragged token would land in if released now.
    pub fn hover_slot(&self) -> Option<&'static str> {
        let token = self.dragging()?;
        let slot = self.slot(token.target_slot_id)?;
        (!slot.is_occupied() && slot.rect.intersects(&token.rect())).then_some(slot.id)
    }

    // ─────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────

    /// Recompute slot and tray geometry for a new board area.
    ///
    /// Slots and tokens shrink until every one of them fits its region.
    /// Placed tokens follow their slot, tray tokens their tray position. A
    /// dragged token stays under the pointer.
    pub fn relayout(&mut self, area: Rect) {
        self.area = area;
        let (chassis, tray) = split_area(area);
        let (chassis, tray) = (chassis.inner(1), tray.inner(1));

        let cell = fit_cell(chassis, self.slots.len()).min(fit_cell(tray, self.tokens.len()));
        self.cell = cell;

        let slot_cells = grid(chassis, self.slots.len(), cell);
        for (slot, origin) in self.slots.iter_mut().zip(slot_cells) {
            slot.rect = Rect::new(origin.x, origin.y, cell.width, cell.height);
        }

        let tray_cells = grid(tray, self.tokens.len(), cell);
        for (token, home) in self.tokens.iter_mut().zip(tray_cells) {
            token.home = home;
            token.size = cell;
            match token.state {
                TokenState::InTray => token.position = home,
                TokenState::Placed(slot_id) => {
                    if let Some(slot) = self.slots.iter().find(|s| s.id == slot_id) {
                        token.position = slot.rect.origin();
                    }
                }
                TokenState::Dragging => {}
            }
        }
    }

    fn token_index(&self, component_id: &str) -> Result<usize, BoardError> {
        self.tokens
            .iter()
            .position(|t| t.component_id == component_id)
            .ok_or_else(|| BoardError::UnknownToken(component_id.to_string()))
    }

    fn release_slot(&mut self, slot_id: &str) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == slot_id) {
            slot.occupant_id = None;
        }
    }
}

/// Split the board into chassis (left) and tray (right).
fn split_area(area: Rect) -> (Rect, Rect) {
    let chassis_width = (u32::from(area.width) * u32::from(CHASSIS_PERCENT) / 100) as u16;
    let chassis = Rect::new(area.x, area.y, chassis_width, area.height);
    let tray = Rect::new(
        area.x + i32::from(chassis_width),
        area.y,
        area.width - chassis_width,
        area.height,
    );
    (chassis, tray)
}

/// The largest cell, at most full size, that fits `count` cells in `region`.
///
/// Rows get shorter first; extra, narrower columns are added only while even
/// one-line rows overflow the region.
fn fit_cell(region: Rect, count: usize) -> CellSize {
    let count = count.max(1) as u32;
    let width = u32::from(region.width) + u32::from(GAP_X);
    let height = u32::from(region.height).max(1);

    let mut columns = (width / u32::from(TOKEN_WIDTH + GAP_X)).clamp(1, count);
    while count.div_ceil(columns) > height && columns < count {
        columns += 1;
    }
    let rows = count.div_ceil(columns);

    CellSize {
        width: (width / columns)
            .saturating_sub(u32::from(GAP_X))
            .clamp(1, u32::from(TOKEN_WIDTH)) as u16,
        height: (height / rows).clamp(1, u32::from(TOKEN_HEIGHT)) as u16,
    }
}

/// Top-left corners of `count` cells of size `cell`, row-major inside `region`.
fn grid(region: Rect, count: usize, cell: CellSize) -> Vec<Point> {
    let stride = i32::from(cell.width + GAP_X);
    let columns = ((i32::from(region.width) + i32::from(GAP_X)) / stride).max(1);
    (0..count as i32)
        .map(|i| {
            Point::new(
                region.x + (i % columns) * stride,
                region.y + (i / columns) * i32::from(cell.height),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(0, 3, 120, 30);

    fn laptop_board(selected: &[&str]) -> PlacementBoard {
        PlacementBoard::new(
            &Catalog::standard(),
            ComputerType::Laptop,
            ComponentGroup::Internal,
            selected,
            AREA,
        )
    }

    /// Drag a token from its current position onto `slot_id`'s origin.
    fn drop_on(board: &mut PlacementBoard, component_id: &str, slot_id: &str) -> DropOutcome {
        let start = board.token(component_id).unwrap().position;
        let target = board.slot(slot_id).unwrap().rect.origin();
        board.begin_drag(component_id, start).unwrap();
        board.end_drag(target).unwrap()
    }

    fn assert_bijection(board: &PlacementBoard) {
        for slot in board.slots() {
            if let Some(occupant) = slot.occupant_id {
                let token = board.token(occupant).unwrap();
                assert_eq!(token.state, TokenState::Placed(slot.id));
            }
        }
        for token in board.tokens() {
            if let TokenState::Placed(slot_id) = token.state {
                assert_eq!(board.slot(slot_id).unwrap().occupant_id, Some(token.component_id));
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_new_creates_all_slots_and_selected_tokens() {
        let board = laptop_board(&["RAM DDR4 8GB", "Ryzen 7 5700X"]);
        assert_eq!(board.slots().len(), 5);
        assert_eq!(board.tokens().len(), 2);
        assert!(board.tokens().iter().all(|t| t.state == TokenState::InTray));
    }

    #[test]
    fn test_new_skips_unknown_and_foreign_names() {
        let board = laptop_board(&[
            "RAM DDR4 8GB",
            "Floppy Drive",
            "Mouse Razen",
            "NVIDIA RTX 3060",
            "RAM DDR4 8GB",
        ]);
        assert_eq!(board.tokens().len(), 1);
        assert_eq!(board.tokens()[0].component_id, "RAM_1");
    }

    #[test]
    fn test_tokens_start_in_tray() {
        let board = laptop_board(&["RAM DDR4 8GB", "Ryzen 7 5700X", "Kingston SSD 1TB"]);
        let tray = board.tray_area();
        for token in board.tokens() {
            assert!(tray.contains(token.position));
            assert_eq!(token.position, token.home);
        }
    }

    #[test]
    fn test_slots_do_not_overlap_tray_tokens() {
        let board = PlacementBoard::new(
            &Catalog::standard(),
            ComputerType::Desktop,
            ComponentGroup::Internal,
            &["RAM DDR4 8GB", "PSU 600W"],
            AREA,
        );
        for slot in board.slots() {
            for token in board.tokens() {
                assert!(!slot.rect.intersects(&token.rect()));
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Placement
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_drop_on_matching_slot_places_token() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        let outcome = drop_on(&mut board, "RAM_1", "SLOT_RAM");

        assert_eq!(outcome, DropOutcome::Placed { slot_id: "SLOT_RAM" });
        assert_eq!(board.token("RAM_1").unwrap().state, TokenState::Placed("SLOT_RAM"));
        assert_eq!(board.slot("SLOT_RAM").unwrap().occupant_id, Some("RAM_1"));
        assert_eq!(
            board.token("RAM_1").unwrap().position,
            board.slot("SLOT_RAM").unwrap().rect.origin()
        );
        assert_bijection(&board);
    }

    #[test]
    fn test_partial_overlap_is_enough() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        let start = board.token("RAM_1").unwrap().position;
        let slot = board.slot("SLOT_RAM").unwrap().rect;

        board.begin_drag("RAM_1", start).unwrap();
        let corner = Point::new(slot.right() - 1, slot.bottom() - 1);
        assert_eq!(
            board.end_drag(corner).unwrap(),
            DropOutcome::Placed { slot_id: "SLOT_RAM" }
        );
    }

    #[test]
    fn test_drop_on_wrong_slot_bounces_back() {
        let mut board = laptop_board(&["Kingston SSD 1TB", "Ryzen 7 5700X"]);
        let home = board.token("SSD_1").unwrap().home;
        let outcome = drop_on(&mut board, "SSD_1", "SLOT_CPU");

        assert_eq!(
            outcome,
            DropOutcome::Returned {
                reason: ReturnReason::NotOverTarget
            }
        );
        let token = board.token("SSD_1").unwrap();
        assert_eq!(token.state, TokenState::InTray);
        assert_eq!(token.position, home);
        assert!(!board.slot("SLOT_CPU").unwrap().is_occupied());
        assert!(!board.slot("SLOT_SSD").unwrap().is_occupied());
    }

    #[test]
    fn test_drop_on_empty_space_bounces_back() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        let start = board.token("RAM_1").unwrap().position;
        board.begin_drag("RAM_1", start).unwrap();
        let outcome = board.end_drag(Point::new(-50, -50)).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Returned {
                reason: ReturnReason::NotOverTarget
            }
        );
    }

    #[test]
    fn test_drop_on_occupied_slot_bounces_back() {
        // Two catalog entries share a slot so an occupied target can be hit.
        let ram = Catalog::standard().lookup_by_id("RAM_1").unwrap().clone();
        let mut spare = ram.clone();
        spare.id = "RAM_2";
        spare.display_name = "RAM DDR4 16GB";
        let catalog = Catalog::from_definitions([ram, spare]);

        let mut board = PlacementBoard::new(
            &catalog,
            ComputerType::Laptop,
            ComponentGroup::Internal,
            &["RAM DDR4 8GB", "RAM DDR4 16GB"],
            AREA,
        );
        assert_eq!(drop_on(&mut board, "RAM_1", "SLOT_RAM"), DropOutcome::Placed { slot_id: "SLOT_RAM" });
        assert_eq!(
            drop_on(&mut board, "RAM_2", "SLOT_RAM"),
            DropOutcome::Returned {
                reason: ReturnReason::Occupied
            }
        );
        assert_eq!(board.slot("SLOT_RAM").unwrap().occupant_id, Some("RAM_1"));
        assert_eq!(board.token("RAM_2").unwrap().state, TokenState::InTray);
        assert_bijection(&board);
    }

    #[test]
    fn test_dragging_placed_token_releases_slot() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        drop_on(&mut board, "RAM_1", "SLOT_RAM");

        let at = board.token("RAM_1").unwrap().position;
        board.begin_drag("RAM_1", at).unwrap();
        assert!(!board.slot("SLOT_RAM").unwrap().is_occupied());
        assert_eq!(board.token("RAM_1").unwrap().state, TokenState::Dragging);

        board.end_drag(Point::new(-40, -40)).unwrap();
        assert_eq!(board.token("RAM_1").unwrap().state, TokenState::InTray);
        assert_bijection(&board);
    }

    #[test]
    fn test_redrop_into_same_slot() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        drop_on(&mut board, "RAM_1", "SLOT_RAM");
        assert_eq!(drop_on(&mut board, "RAM_1", "SLOT_RAM"), DropOutcome::Placed { slot_id: "SLOT_RAM" });
        assert_bijection(&board);
    }

    #[test]
    fn test_remove_from_slot() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        assert_eq!(board.remove_from_slot("RAM_1"), Ok(false));

        drop_on(&mut board, "RAM_1", "SLOT_RAM");
        assert_eq!(board.remove_from_slot("RAM_1"), Ok(true));
        assert!(!board.slot("SLOT_RAM").unwrap().is_occupied());
        let token = board.token("RAM_1").unwrap();
        assert_eq!(token.position, token.home);
        assert_eq!(
            board.remove_from_slot("GPU_1"),
            Err(BoardError::UnknownToken("GPU_1".to_string()))
        );
    }

    #[test]
    fn test_grab_offset_is_kept() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        let start = board.token("RAM_1").unwrap().position;
        let grab = Point::new(start.x + 5, start.y + 1);

        board.begin_drag("RAM_1", grab).unwrap();
        board.update_drag(Point::new(grab.x + 10, grab.y + 2)).unwrap();
        assert_eq!(
            board.token("RAM_1").unwrap().position,
            Point::new(start.x + 10, start.y + 2)
        );
    }

    // ─────────────────────────────────────────────────────────
    // Contract violations
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_update_and_end_without_drag_fail() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        assert_eq!(board.update_drag(Point::new(1, 1)), Err(BoardError::NoActiveDrag));
        assert_eq!(board.end_drag(Point::new(1, 1)), Err(BoardError::NoActiveDrag));
    }

    #[test]
    fn test_begin_twice_fails() {
        let mut board = laptop_board(&["RAM DDR4 8GB", "Ryzen 7 5700X"]);
        board.begin_drag("RAM_1", Point::default()).unwrap();
        assert_eq!(
            board.begin_drag("CPU_1", Point::default()),
            Err(BoardError::AlreadyDragging)
        );
    }

    #[test]
    fn test_begin_unknown_token_fails() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        assert_eq!(
            board.begin_drag("GPU_1", Point::default()),
            Err(BoardError::UnknownToken("GPU_1".to_string()))
        );
        assert!(!board.is_dragging());
    }

    // ─────────────────────────────────────────────────────────
    // Completeness and queries
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_empty_board_is_complete() {
        let board = laptop_board(&[]);
        assert!(board.is_complete());
        assert_eq!(board.progress(), (0, 0));
    }

    #[test]
    fn test_complete_only_when_every_token_placed() {
        let mut board = laptop_board(&["RAM DDR4 8GB", "Ryzen 7 5700X"]);
        assert!(!board.is_complete());
        drop_on(&mut board, "RAM_1", "SLOT_RAM");
        assert!(!board.is_complete());
        assert_eq!(board.progress(), (1, 2));
        drop_on(&mut board, "CPU_1", "SLOT_CPU");
        assert!(board.is_complete());
        assert_eq!(board.placed_names(), vec!["RAM DDR4 8GB", "Ryzen 7 5700X"]);
    }

    #[test]
    fn test_dragging_token_is_not_complete() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        drop_on(&mut board, "RAM_1", "SLOT_RAM");
        board.begin_drag("RAM_1", Point::default()).unwrap();
        assert!(!board.is_complete());
    }

    #[test]
    fn test_token_at_and_hover_slot() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        let start = board.token("RAM_1").unwrap().position;
        assert_eq!(board.token_at(start).unwrap().component_id, "RAM_1");
        assert!(board.token_at(Point::new(-10, -10)).is_none());

        board.begin_drag("RAM_1", start).unwrap();
        assert_eq!(board.hover_slot(), None);
        let slot = board.slot("SLOT_RAM").unwrap().rect.origin();
        board.update_drag(slot).unwrap();
        assert_eq!(board.hover_slot(), Some("SLOT_RAM"));
        assert_eq!(board.token_at(slot).unwrap().component_id, "RAM_1");
    }

    #[test]
    fn test_relayout_moves_placed_tokens_with_slots() {
        let mut board = laptop_board(&["RAM DDR4 8GB", "Ryzen 7 5700X"]);
        drop_on(&mut board, "RAM_1", "SLOT_RAM");

        board.relayout(Rect::new(0, 3, 200, 50));
        let slot = board.slot("SLOT_RAM").unwrap().rect;
        assert_eq!(board.token("RAM_1").unwrap().position, slot.origin());
        let cpu = board.token("CPU_1").unwrap();
        assert_eq!(cpu.position, cpu.home);
        assert!(board.tray_area().contains(cpu.home));
        assert_bijection(&board);
    }

    #[test]
    fn test_occupancy_snapshot() {
        let mut board = laptop_board(&["RAM DDR4 8GB"]);
        drop_on(&mut board, "RAM_1", "SLOT_RAM");
        let occupancy = board.occupancy();
        assert_eq!(occupancy.len(), 5);
        assert!(occupancy.contains(&("SLOT_RAM", Some("RAM_1"))));
        assert!(occupancy.contains(&("SLOT_CPU", None)));
    }

    /// Every token cell, bottom-right corner included, lies inside the tray.
    fn assert_tray_holds_every_token(board: &PlacementBoard) {
        let tray = board.tray_area();
        for token in board.tokens() {
            let rect = token.rect();
            let corner = Point::new(rect.right() - 1, rect.bottom() - 1);
            assert!(tray.contains(token.home), "{} home outside tray", token.component_id);
            assert!(tray.contains(corner), "{} bottom edge outside tray", token.component_id);
        }
        let chassis = board.chassis_area();
        for slot in board.slots() {
            let corner = Point::new(slot.rect.right() - 1, slot.rect.bottom() - 1);
            assert!(chassis.contains(corner), "{} outside chassis", slot.id);
        }
    }

    fn names(definitions: &[pcsim_core::ComponentDefinition]) -> Vec<&'static str> {
        definitions.iter().map(|d| d.display_name).collect()
    }

    #[test]
    fn test_full_external_set_fits_default_terminal() {
        let area = crate::layout::board_area(Rect::new(0, 0, 80, 24));
        let board = PlacementBoard::new(
            &Catalog::standard(),
            ComputerType::Laptop,
            ComponentGroup::External,
            names(pcsim_core::catalog::EXTERNAL).as_slice(),
            area,
        );
        assert_eq!(board.tokens().len(), 8);
        assert!(board.cell_size().is_compact());
        assert_tray_holds_every_token(&board);
    }

    #[test]
    fn test_full_desktop_internal_set_fits_default_terminal() {
        let area = crate::layout::board_area(Rect::new(0, 0, 80, 24));
        let mut selected = names(pcsim_core::catalog::COMMON_INTERNAL);
        selected.extend(names(pcsim_core::catalog::DESKTOP_ONLY_INTERNAL));
        let mut board = PlacementBoard::new(
            &Catalog::standard(),
            ComputerType::Desktop,
            ComponentGroup::Internal,
            selected.as_slice(),
            area,
        );
        assert_eq!(board.tokens().len(), board.slots().len());
        assert_tray_holds_every_token(&board);

        // Every token can be grabbed at its centre and placed
        let ids: Vec<_> = board.tokens().iter().map(|t| t.component_id).collect();
        for id in ids {
            let token = board.token(id).unwrap();
            let grab = token.rect().center();
            let target = board.slot(token.target_slot_id).unwrap().rect.center();
            assert_eq!(board.token_at(grab).unwrap().component_id, id);
            board.begin_drag(id, grab).unwrap();
            assert!(matches!(board.end_drag(target).unwrap(), DropOutcome::Placed { .. }));
        }
        assert!(board.is_complete());
        assert_bijection(&board);
    }

    #[test]
    fn test_roomy_area_keeps_full_size_cells() {
        let board = laptop_board(&["RAM DDR4 8GB", "Ryzen 7 5700X"]);
        assert_eq!(board.cell_size(), CellSize::FULL);
        assert_eq!(board.token("RAM_1").unwrap().rect().height, TOKEN_HEIGHT);
    }

    #[test]
    fn test_external_board() {
        let mut board = PlacementBoard::new(
            &Catalog::standard(),
            ComputerType::Desktop,
            ComponentGroup::External,
            &["Mouse Razen", "RAM DDR4 8GB"],
            AREA,
        );
        assert_eq!(board.slots().len(), 8);
        assert_eq!(board.tokens().len(), 1);
        drop_on(&mut board, "MOU_1", "SLOT_MOU");
        assert!(board.is_complete());
    }
}
