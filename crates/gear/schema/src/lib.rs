//! Author-facing item description types.
//!
//! `gear-schema` defines the declarative surface authors write against: a
//! [`Template`] per item, composable trait descriptors, one exclusive
//! [`TemplateKind`], plus blueprint and skill descriptors. Everything here is
//! plain data: names instead of references, durations instead of rates. All
//! of it is serde-derived so hosts can load it from data files. Resolution,
//! validation, and derivation all happen in the `gear-compiler` crate.

pub mod crafting;
pub mod enums;
pub mod kind;
pub mod template;
pub mod traits;

pub use crafting::{BlueprintSpec, SkillSpec};
pub use enums::{
    CookableKind, FirstAidKind, Footwear, InitialCondition, InventoryCategory, Layer, LiquidKind,
    MovementSound, RadialCategory, Region, ScentCategory, ToolKind,
};
pub use kind::{
    AlcoholSpec, ClothingSpec, ColdEffectSpec, ConditionEffectSpec, CookingPotSpec, FoodSpec,
    LiquidSpec, OpeningSpec, RestEffectSpec, RifleSpec, TemplateKind,
};
pub use template::Template;
pub use traits::{
    AccelerantSpec, BedSpec, BurnableSpec, CookableSpec, EvolveSpec, FireStarterSpec,
    FirstAidSpec, HarvestableSpec, RepairableSpec, ScentSpec, SharpenableSpec, StackableSpec,
    ToolSpec,
};
