//! The compiled item graph.
//!
//! One [`CompiledItem`] per template: a mandatory [`GearItem`] base module,
//! an exclusive [`ItemKind`], and one optional module per composable trait
//! that was present. The catalog owns every compiled item for the life of
//! the process; cross-references between items are validated names
//! ([`GearRef`] / [`ToolRef`]), resolved once at compile time and looked up
//! by the simulation when needed.

pub mod kinds;
pub mod modules;

use std::fmt;

pub use kinds::{
    Alcohol, Cleaning, ClothingItem, ClothingLayer, ClothingMovementSound, ClothingRegion,
    ColdBuff, ConditionBuff, CookingPotItem, FoodItem, FootwearType, LiquidItem, LiquidType,
    Opening, RestBuff, RifleItem, Smashable,
};
pub use modules::{
    Bed, Cookable, CookableType, Evolution, FirstAid, Fuel, GearStack, Harvest, Ignition, Repair,
    ScentProfile, Sharpening, Stack, Tool, ToolCategory,
};

/// Validated reference to a cataloged or built-in gear item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GearRef(String);

impl GearRef {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GearRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated reference into the tool namespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToolRef(String);

impl ToolRef {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inventory category of a compiled item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum GearCategory {
    Tool,
    Food,
    Clothing,
    Firestarting,
    Other,
}

/// Condition an item spawns with, runtime side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StartCondition {
    Random,
    Full,
    High,
    Medium,
    Low,
}

/// Which condition table the simulation consults for this item.
///
/// Inferred for food from its flags; everything else is `Unknown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ConditionTable {
    #[default]
    Unknown,
    CannedFood,
    Meat,
    DryFood,
}

/// The mandatory base module every compiled item carries.
#[derive(Clone, Debug, PartialEq)]
pub struct GearItem {
    pub category: GearCategory,
    pub weight_kg: f32,
    pub max_condition: f32,
    /// Condition lost per day, derived from the template's decay period.
    pub daily_decay: f32,
    pub start_condition: StartCondition,
    pub display_name_key: String,
    pub description_key: String,
    pub pickup_audio: Option<String>,
    /// Defaults to the pick-up cue.
    pub putback_audio: Option<String>,
    pub stow_audio: Option<String>,
    pub wornout_audio: Option<String>,
    pub condition_table: ConditionTable,
    /// Wildlife detection strength; 0 without a scent trait.
    pub scent_intensity: f32,
    pub console_name: String,
}

/// Exclusive kind of a compiled item, mirroring the template's kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemKind {
    Generic,
    Food(FoodItem),
    Clothing(ClothingItem),
    CookingPot(CookingPotItem),
    Liquid(LiquidItem),
    Rifle(RifleItem),
}

impl ItemKind {
    pub fn is_generic(&self) -> bool {
        matches!(self, ItemKind::Generic)
    }
}

/// Fully assembled output for one template.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledItem {
    pub name: String,
    pub base: GearItem,
    pub kind: ItemKind,

    pub harvest: Option<Harvest>,
    pub repair: Option<Repair>,
    pub ignition: Option<Ignition>,
    pub stack: Option<Stack>,
    pub fuel: Option<Fuel>,
    pub scent: Option<ScentProfile>,
    pub sharpening: Option<Sharpening>,
    pub evolution: Option<Evolution>,
    pub first_aid: Option<FirstAid>,
    pub tool: Option<Tool>,
    pub bed: Option<Bed>,
    pub cookable: Option<Cookable>,
}

impl CompiledItem {
    /// Tool-kind items live in the catalog's separate tool namespace.
    pub fn is_tool(&self) -> bool {
        self.tool.is_some()
    }

    pub fn as_food(&self) -> Option<&FoodItem> {
        match &self.kind {
            ItemKind::Food(food) => Some(food),
            _ => None,
        }
    }

    pub fn as_clothing(&self) -> Option<&ClothingItem> {
        match &self.kind {
            ItemKind::Clothing(clothing) => Some(clothing),
            _ => None,
        }
    }

    pub fn as_cooking_pot(&self) -> Option<&CookingPotItem> {
        match &self.kind {
            ItemKind::CookingPot(pot) => Some(pot),
            _ => None,
        }
    }

    pub fn as_liquid(&self) -> Option<&LiquidItem> {
        match &self.kind {
            ItemKind::Liquid(liquid) => Some(liquid),
            _ => None,
        }
    }

    pub fn as_rifle(&self) -> Option<&RifleItem> {
        match &self.kind {
            ItemKind::Rifle(rifle) => Some(rifle),
            _ => None,
        }
    }
}
