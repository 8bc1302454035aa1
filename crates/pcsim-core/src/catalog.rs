//! Static component catalog
//!
//! Every component the simulator knows about, which chassis accepts it, and
//! the slot it is dragged onto. The catalog is built once at startup and is
//! read-only afterwards.

use crate::normalize::normalize_name;
use crate::types::{ComponentCategory, ComponentGroup, ComputerType};

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefinition {
    /// Unique token, e.g. `RAM_1`
    pub id: &'static str,
    /// Name shown on cards and compared by the boot resolver
    pub display_name: &'static str,
    pub category: ComponentCategory,
    /// Opaque asset key for the presentation layer
    pub image_ref: &'static str,
    /// Slot this component is dragged onto, if it is board-placeable
    pub target_slot_id: Option<&'static str>,
    /// Text printed on the empty slot
    pub slot_label: &'static str,
}

impl ComponentDefinition {
    pub fn group(&self) -> ComponentGroup {
        self.category.group()
    }

    /// The slot this component fits, if any.
    pub fn slot(&self) -> Option<SlotDefinition> {
        self.target_slot_id.map(|slot_id| SlotDefinition {
            id: slot_id,
            label: self.slot_label,
            accepted_component_id: self.id,
        })
    }
}

/// A socket in a chassis schematic that accepts exactly one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub accepted_component_id: &'static str,
}

const fn internal(
    id: &'static str,
    display_name: &'static str,
    category: ComponentCategory,
    image_ref: &'static str,
    slot: &'static str,
    slot_label: &'static str,
) -> ComponentDefinition {
    ComponentDefinition {
        id,
        display_name,
        category,
        image_ref,
        target_slot_id: Some(slot),
        slot_label,
    }
}

const fn external(
    id: &'static str,
    display_name: &'static str,
    image_ref: &'static str,
    slot: &'static str,
    slot_label: &'static str,
) -> ComponentDefinition {
    ComponentDefinition {
        id,
        display_name,
        category: ComponentCategory::External,
        image_ref,
        target_slot_id: Some(slot),
        slot_label,
    }
}

use ComponentCategory::{Common, DesktopOnly};

/// Internal components that fit both laptops and desktops.
pub const COMMON_INTERNAL: &[ComponentDefinition] = &[
    internal("RAM_1", "RAM DDR4 8GB", Common, "internal/ram", "SLOT_RAM", "RAM"),
    internal("CPU_1", "Ryzen 7 5700X", Common, "internal/cpu", "SLOT_CPU", "CPU"),
    internal("SSD_1", "Kingston SSD 1TB", Common, "internal/ssd", "SLOT_SSD", "SSD"),
    internal("M2_1", "M.2 NVMe SSD", Common, "internal/m2", "SLOT_M2", "M.2"),
    internal("WIFI_1", "Modulo Wi-Fi/BT", Common, "internal/wifi-bt", "SLOT_WIFI", "Wi-Fi"),
];

/// Internal components only a desktop tower takes.
pub const DESKTOP_ONLY_INTERNAL: &[ComponentDefinition] = &[
    internal("GPU_1", "NVIDIA RTX 3060", DesktopOnly, "internal/gpu", "SLOT_GPU", "GPU"),
    internal("MOBO_1", "ASUS Prime B550M", DesktopOnly, "internal/motherboard", "SLOT_MOBO", "Motherboard"),
    internal("COOLER_1", "Cooler Master H212", DesktopOnly, "internal/cooler", "SLOT_COOLER", "Cooler"),
    internal("FAN_1", "Ventilador ARGB", DesktopOnly, "internal/fan", "SLOT_FAN", "Fan"),
    internal("HDD_1", "HDD Seagate 1TB", DesktopOnly, "internal/hdd", "SLOT_HDD", "HDD"),
    internal("PSU_1", "PSU 600W", DesktopOnly, "internal/psu", "SLOT_PSU", "PSU"),
    internal("DVD_1", "DVD SATA", DesktopOnly, "internal/dvd", "SLOT_DVD", "DVD"),
];

/// Peripherals, shared by both machine types.
pub const EXTERNAL: &[ComponentDefinition] = &[
    external("MON_1", "Monitor LED 24\"", "external/monitor", "SLOT_MON", "Monitor"),
    external("TEC_1", "Teclado Mecanico", "external/keyboard", "SLOT_TEC", "Keyboard"),
    external("MOU_1", "Mouse Razen", "external/mouse", "SLOT_MOU", "Mouse"),
    external("BOC_1", "Bocinas Estereo", "external/speakers", "SLOT_BOC", "Speakers"),
    external("WEB_1", "Webcam HD 1080p", "external/webcam", "SLOT_WEB", "Webcam"),
    external("MIC_1", "Microfono USB", "external/microphone", "SLOT_MIC", "Microphone"),
    external("UPS_1", "UPS", "external/ups", "SLOT_UPS", "UPS"),
    external("HUB_1", "HUB USB", "external/usb-hub", "SLOT_HUB", "USB Hub"),
];

/// Registry of component definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    components: Vec<ComponentDefinition>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The built-in catalog: common internals, desktop-only internals and
    /// peripherals, in shelf order.
    pub fn standard() -> Self {
        let components = COMMON_INTERNAL
            .iter()
            .chain(DESKTOP_ONLY_INTERNAL)
            .chain(EXTERNAL)
            .cloned()
            .collect();
        Self { components }
    }

    /// Build a catalog from arbitrary definitions (first definition wins on
    /// duplicate ids).
    pub fn from_definitions(definitions: impl IntoIterator<Item = ComponentDefinition>) -> Self {
        let mut components: Vec<ComponentDefinition> = Vec::new();
        for def in definitions {
            if components.iter().any(|c| c.id == def.id) {
                tracing::warn!("Duplicate catalog id {} ignored", def.id);
                continue;
            }
            components.push(def);
        }
        Self { components }
    }

    pub fn all(&self) -> &[ComponentDefinition] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Find a component by display name.
    ///
    /// Exact matches win; otherwise the normalized form is compared so
    /// `"ram ddr4 8gb"` still resolves.
    pub fn lookup_by_name(&self, display_name: &str) -> Option<&ComponentDefinition> {
        if let Some(def) = self
            .components
            .iter()
            .find(|c| c.display_name == display_name)
        {
            return Some(def);
        }
        let key = normalize_name(display_name);
        self.components
            .iter()
            .find(|c| normalize_name(c.display_name) == key)
    }

    pub fn lookup_by_id(&self, id: &str) -> Option<&ComponentDefinition> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Every component of `category`, regardless of machine type.
    pub fn by_category(&self, category: ComponentCategory) -> Vec<&ComponentDefinition> {
        self.components
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Components of `category` that `computer_type` can take.
    pub fn list_for(
        &self,
        computer_type: ComputerType,
        category: ComponentCategory,
    ) -> Vec<&ComponentDefinition> {
        if !computer_type.accepts(category) {
            return Vec::new();
        }
        self.by_category(category)
    }

    /// Board-placeable components of a group for a machine type.
    pub fn placeable(
        &self,
        computer_type: ComputerType,
        group: ComponentGroup,
    ) -> Vec<&ComponentDefinition> {
        self.components
            .iter()
            .filter(|c| c.group() == group)
            .filter(|c| computer_type.accepts(c.category))
            .filter(|c| c.target_slot_id.is_some())
            .collect()
    }

    /// The chassis slots for a machine type and component group.
    pub fn slots_for(&self, computer_type: ComputerType, group: ComponentGroup) -> Vec<SlotDefinition> {
        self.placeable(computer_type, group)
            .into_iter()
            .filter_map(ComponentDefinition::slot)
            .collect()
    }

    /// Whether `display_name` names a peripheral.
    pub fn is_external(&self, display_name: &str) -> bool {
        self.lookup_by_name(display_name)
            .map(|c| c.category == ComponentCategory::External)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_size() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.by_category(ComponentCategory::Common).len(), 5);
        assert_eq!(catalog.by_category(ComponentCategory::DesktopOnly).len(), 7);
        assert_eq!(catalog.by_category(ComponentCategory::External).len(), 8);
    }

    #[test]
    fn test_ids_and_slots_are_unique() {
        let catalog = Catalog::standard();
        let mut ids: Vec<_> = catalog.all().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());

        let mut slots: Vec<_> = catalog
            .all()
            .iter()
            .filter_map(|c| c.target_slot_id)
            .collect();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), catalog.len());
    }

    #[test]
    fn test_lookup_by_name_exact_and_normalized() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.lookup_by_name("RAM DDR4 8GB").unwrap().id, "RAM_1");
        assert_eq!(catalog.lookup_by_name("  ram ddr4 8gb ").unwrap().id, "RAM_1");
        assert_eq!(
            catalog.lookup_by_name("Monitor LED 24\u{201D}").unwrap().id,
            "MON_1"
        );
        assert!(catalog.lookup_by_name("Floppy Drive").is_none());
    }

    #[test]
    fn test_list_for_laptop_has_no_desktop_only_parts() {
        let catalog = Catalog::standard();
        assert!(catalog
            .list_for(ComputerType::Laptop, ComponentCategory::DesktopOnly)
            .is_empty());
        assert_eq!(
            catalog
                .list_for(ComputerType::Desktop, ComponentCategory::DesktopOnly)
                .len(),
            7
        );
    }

    #[test]
    fn test_slots_for_each_board() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog
                .slots_for(ComputerType::Laptop, ComponentGroup::Internal)
                .len(),
            5
        );
        assert_eq!(
            catalog
                .slots_for(ComputerType::Desktop, ComponentGroup::Internal)
                .len(),
            12
        );
        assert_eq!(
            catalog
                .slots_for(ComputerType::Laptop, ComponentGroup::External)
                .len(),
            8
        );
    }

    #[test]
    fn test_slot_accepts_its_own_component() {
        let catalog = Catalog::standard();
        for slot in catalog.slots_for(ComputerType::Desktop, ComponentGroup::Internal) {
            let def = catalog.lookup_by_id(slot.accepted_component_id).unwrap();
            assert_eq!(def.target_slot_id, Some(slot.id));
        }
    }

    #[test]
    fn test_is_external() {
        let catalog = Catalog::standard();
        assert!(catalog.is_external("Mouse Razen"));
        assert!(!catalog.is_external("Ryzen 7 5700X"));
        assert!(!catalog.is_external("Unknown"));
        assert!(catalog.is_external("monitor led 24\""));
    }

    #[test]
    fn test_from_definitions_drops_duplicate_ids() {
        let catalog = Catalog::from_definitions(
            COMMON_INTERNAL
                .iter()
                .cloned()
                .chain(COMMON_INTERNAL.iter().cloned()),
        );
        assert_eq!(catalog.len(), COMMON_INTERNAL.len());
    }
}
