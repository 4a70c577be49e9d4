//! Author-facing enumerations.
//!
//! These are the values authors write in data files. The compiler translates
//! each of them into its runtime counterpart; the translations are total, so
//! adding a variant here without extending the corresponding mapping is a
//! compile error on the compiler side.

/// Condition an item spawns with.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InitialCondition {
    /// Rolled by the simulation at spawn time.
    #[default]
    Random,
    Perfect,
    High,
    Medium,
    Low,
}

/// Explicit inventory category override.
///
/// Absence of an override means the compiler infers the category from the
/// attached traits.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InventoryCategory {
    Tool,
    Food,
    Clothing,
    Firestarting,
    Other,
}

/// Radial-menu section an item is surfaced under.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RadialCategory {
    Firestarting,
    Food,
    Medical,
    Tools,
    Clothing,
    Navigation,
}

/// Body region a clothing item covers.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Region {
    Head,
    #[default]
    Torso,
    Hands,
    Legs,
    Feet,
    Accessory,
}

/// Clothing layer slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Layer {
    #[default]
    Base,
    Middle,
    Outer,
    Shell,
}

/// Footwear classification for clothing worn on the feet.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Footwear {
    #[default]
    NotFootwear,
    Shoes,
    Boots,
}

/// Sound family played when moving while wearing the item.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MovementSound {
    #[default]
    None,
    Cloth,
    Leather,
    Synthetic,
}

/// What a liquid container holds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LiquidKind {
    #[default]
    Water,
    LampFuel,
}

/// First-aid effect family. Exactly one per first-aid trait.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FirstAidKind {
    Antibiotics,
    Bandage,
    Disinfectant,
    Painkiller,
}

/// Tool family, used by crafting and repair requirements.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ToolKind {
    #[default]
    General,
    Hacksaw,
    Hatchet,
    Hammer,
    Knife,
}

/// Scent strength class; drives how far away wildlife notices the carrier.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScentCategory {
    #[default]
    RawMeat,
    RawFish,
    CookedMeat,
    CookedFish,
    Guts,
    Quarter,
}

/// What kind of raw food a cookable item is.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CookableKind {
    Meat,
    Fish,
    Grub,
    Liquid,
}
