//! Shelf screen state - multi-select of candidate components
//!
//! Two panes (internal and external) of toggleable cards. On a laptop the
//! desktop-only cards are shown but cannot be selected.

use pcsim_core::{
    normalize_name, Catalog, ComponentCategory, ComponentDefinition, ComponentGroup, ComputerType,
};

use crate::validator::{self, ValidationResult};

/// Which half of the shelf is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShelfPane {
    #[default]
    Internal,
    External,
}

impl ShelfPane {
    pub fn toggle(&self) -> Self {
        match self {
            ShelfPane::Internal => ShelfPane::External,
            ShelfPane::External => ShelfPane::Internal,
        }
    }

    pub fn group(&self) -> ComponentGroup {
        match self {
            ShelfPane::Internal => ComponentGroup::Internal,
            ShelfPane::External => ComponentGroup::External,
        }
    }

    pub fn label(&self) -> &'static str {
        self.group().label()
    }
}

/// The display names chosen on the shelf
///
/// Membership is compared on normalized names, insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            set.insert(name);
        }
        set
    }

    /// Add a name. Returns false if an equivalent name is already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = normalize_name(name);
        self.names.iter().any(|n| normalize_name(n) == key)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Split into `(internal, external)` by membership in the catalog's
    /// peripheral list.
    pub fn partition(&self, catalog: &Catalog) -> (Vec<String>, Vec<String>) {
        self.names
            .iter()
            .cloned()
            .partition(|name| !catalog.is_external(name))
    }
}

/// One toggleable card on the shelf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfCard {
    pub component_id: &'static str,
    pub display_name: &'static str,
    pub category: ComponentCategory,
    pub image_ref: &'static str,
    /// False for parts the chosen machine cannot take
    pub enabled: bool,
    pub selected: bool,
}

impl ShelfCard {
    fn new(def: &ComponentDefinition, computer_type: ComputerType) -> Self {
        Self {
            component_id: def.id,
            display_name: def.display_name,
            category: def.category,
            image_ref: def.image_ref,
            enabled: computer_type.accepts(def.category),
            selected: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShelfState {
    computer_type: ComputerType,
    pane: ShelfPane,
    internal: Vec<ShelfCard>,
    external: Vec<ShelfCard>,
}

impl ShelfState {
    /// Build the shelf for `computer_type`, pre-selecting `preselected`.
    pub fn new<S: AsRef<str>>(
        catalog: &Catalog,
        computer_type: ComputerType,
        preselected: &[S],
    ) -> Self {
        let cards = |group: ComponentGroup| -> Vec<ShelfCard> {
            catalog
                .all()
                .iter()
                .filter(|def| def.group() == group)
                .map(|def| ShelfCard::new(def, computer_type))
                .collect()
        };

        let mut shelf = Self {
            computer_type,
            pane: ShelfPane::Internal,
            internal: cards(ComponentGroup::Internal),
            external: cards(ComponentGroup::External),
        };

        let wanted = SelectionSet::from_names(preselected.iter().map(|s| s.as_ref()));
        for card in shelf.internal.iter_mut().chain(shelf.external.iter_mut()) {
            card.selected = card.enabled && wanted.contains(card.display_name);
        }
        shelf
    }

    pub fn computer_type(&self) -> ComputerType {
        self.computer_type
    }

    pub fn pane(&self) -> ShelfPane {
        self.pane
    }

    pub fn switch_pane(&mut self) {
        self.pane = self.pane.toggle();
    }

    pub fn cards(&self, pane: ShelfPane) -> &[ShelfCard] {
        match pane {
            ShelfPane::Internal => &self.internal,
            ShelfPane::External => &self.external,
        }
    }

    pub fn visible_cards(&self) -> &[ShelfCard] {
        self.cards(self.pane)
    }

    /// Flip a card's selection. Disabled or unknown cards are left alone.
    pub fn toggle(&mut self, component_id: &str) -> bool {
        let Some(card) = self
            .internal
            .iter_mut()
            .chain(self.external.iter_mut())
            .find(|c| c.component_id == component_id)
        else {
            return false;
        };
        if !card.enabled {
            return false;
        }
        card.selected = !card.selected;
        true
    }

    /// Selected display names of one pane.
    pub fn selected_in(&self, pane: ShelfPane) -> Vec<String> {
        self.cards(pane)
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.display_name.to_string())
            .collect()
    }

    /// Everything selected, internal first.
    pub fn selections(&self) -> SelectionSet {
        SelectionSet::from_names(
            self.selected_in(ShelfPane::Internal)
                .into_iter()
                .chain(self.selected_in(ShelfPane::External)),
        )
    }

    pub fn has_selections(&self) -> bool {
        validator::has_any_selection(&self.internal) || validator::has_any_selection(&self.external)
    }

    /// Run the validator against the current selections.
    pub fn validate(&self) -> ValidationResult {
        validator::validate_can_proceed(
            &self.selected_in(self.pane),
            &self.selected_in(ShelfPane::Internal),
            &self.selected_in(ShelfPane::External),
        )
    }

    pub fn clear(&mut self) {
        for card in self.internal.iter_mut().chain(self.external.iter_mut()) {
            card.selected = false;
        }
    }
}
