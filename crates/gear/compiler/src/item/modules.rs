//! Composable per-trait modules attached to a [`CompiledItem`].
//!
//! Each struct here is the resolved, runtime-facing output of exactly one
//! authoring trait. Fields are already in simulation units (hours, fractions,
//! degrees Celsius) and cross-references are validated [`GearRef`] /
//! [`ToolRef`] names.
//!
//! [`CompiledItem`]: super::CompiledItem

use super::{GearRef, ToolRef};

/// A counted reference to another gear item.
///
/// Used wherever the simulation consumes or produces items in bulk:
/// harvest yields, repair materials, crafting inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct GearStack {
    pub item: GearRef,
    pub units: u32,
}

// ===== breaking down and fixing up =====

/// Output of the harvestable trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Harvest {
    pub audio: Option<String>,
    pub duration_minutes: f32,
    pub yields: Vec<GearStack>,
}

/// Output of the repairable trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Repair {
    pub audio: Option<String>,
    pub duration_minutes: f32,
    /// Condition restored per repair, percent of max.
    pub condition_gain: f32,
    pub materials: Vec<GearStack>,
    pub tool_choices: Vec<ToolRef>,
    /// False when the repair needs no tool at all.
    pub requires_tool: bool,
}

/// Output of the sharpenable trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Sharpening {
    pub audio: Option<String>,
    pub duration_minutes_min: f32,
    pub duration_minutes_max: f32,
    pub condition_gain_min: f32,
    pub condition_gain_max: f32,
    pub tool_choices: Vec<ToolRef>,
    pub requires_tool: bool,
}

// ===== fire =====

/// Shared output of the fire-starter and accelerant traits.
///
/// Both traits write into one module. Single-owner fields are only ever
/// touched by their own trait; `skill_modifier` and `consume_on_use` are
/// owned by the accelerant when both traits are present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ignition {
    pub is_accelerant: bool,
    /// Fire-starter only.
    pub seconds_to_ignite_tinder: f32,
    /// Fire-starter only.
    pub seconds_to_ignite_torch: f32,
    /// Percentage points added to the fire-starting success roll.
    pub skill_modifier: f32,
    /// Accelerant only. Seconds added to or removed from the starting time.
    pub duration_modifier: f32,
    /// Fire-starter only. Condition lost per strike, percent of max.
    pub degrade_on_use: f32,
    pub consume_on_use: bool,
    /// Fire-starter only.
    pub requires_sunlight: bool,
    /// Fire-starter only.
    pub on_use_audio: Option<String>,
}

/// Output of the burnable trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Fuel {
    pub burn_duration_hours: f32,
    /// A fire younger than this refuses the fuel.
    pub fire_age_minutes_before_adding: f32,
    pub skill_modifier: f32,
    pub heat_increase_celsius: f32,
    pub heat_inner_radius: f32,
    pub heat_outer_radius: f32,
}

// ===== stacking and scent =====

/// Output of the stackable trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
    pub single_unit_text_key: String,
    pub multiple_unit_text_key: String,
    pub stack_sprite: String,
    pub units: u32,
    pub units_per_item: u32,
}

/// Output of the scent trait.
#[derive(Clone, Debug, PartialEq)]
pub struct ScentProfile {
    /// Wildlife detection strength, also mirrored on the base module.
    pub intensity: f32,
}

// ===== transformation =====

/// Output of the evolve trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Evolution {
    pub into: GearRef,
    /// Progress the item spawns with, fraction in `[0, 1]`.
    pub start_percent: f32,
    pub hours_to_evolve: f32,
    pub indoors_only: bool,
}

/// Output of the cookable trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Cookable {
    pub kind: CookableType,
    pub duration_minutes: f32,
    pub audio: Option<String>,
    /// None leaves the item unchanged by cooking (heating only).
    pub cooked_result: Option<GearRef>,
    pub water_required_liters: f32,
}

/// Runtime cookable classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CookableType {
    Meat,
    Fish,
    Grub,
    Liquid,
}

// ===== aid and utility =====

/// Output of the first-aid trait.
#[derive(Clone, Debug, PartialEq)]
pub struct FirstAid {
    pub provides_antibiotics: bool,
    pub applies_bandage: bool,
    pub cleans_wounds: bool,
    pub kills_pain: bool,
    pub hp_increase: f32,
    pub time_to_use_seconds: f32,
    pub use_audio: Option<String>,
    pub units_per_use: u32,
}

/// Output of the tool trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Tool {
    pub category: ToolCategory,
    /// Condition lost per use, percent of max.
    pub degrade_per_use: f32,
    /// Multiplier on crafting duration when this tool is used; 1 is neutral.
    pub crafting_time_multiplier: f32,
    pub degrade_per_hour_crafting: f32,
}

/// Runtime tool classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ToolCategory {
    General,
    Hacksaw,
    Hatchet,
    Hammer,
    Knife,
}

/// Output of the bed trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Bed {
    pub warmth_bonus_celsius: f32,
    pub condition_gain_per_hour: f32,
    pub degrade_per_use: f32,
}
