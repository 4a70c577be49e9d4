//! Composable trait descriptors.
//!
//! Any number of these may attach to one [`Template`](crate::Template); each
//! present descriptor makes the compiler synthesize the matching module on
//! the compiled item. All cross-references are by item name and are resolved
//! during compilation, not here.

use crate::enums::{CookableKind, FirstAidKind, ScentCategory, ToolKind};

/// Item can be broken down into other items.
///
/// `yield_names` and `yield_counts` are parallel arrays; the compiler rejects
/// the template if their lengths differ.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HarvestableSpec {
    pub audio: Option<String>,
    pub minutes: f32,
    pub yield_names: Vec<String>,
    pub yield_counts: Vec<u32>,
}

/// Item can be repaired with materials and, optionally, a tool.
///
/// `material_names` / `material_counts` are parallel arrays. `required_tools`
/// lists acceptable tools by name; leaving it empty means no tool is needed.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RepairableSpec {
    pub audio: Option<String>,
    pub minutes: f32,
    /// Condition percentage restored by one repair.
    pub condition_gain: f32,
    pub material_names: Vec<String>,
    pub material_counts: Vec<u32>,
    pub required_tools: Vec<String>,
}

/// Item can ignite tinder or a torch.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FireStarterSpec {
    pub seconds_to_ignite_tinder: f32,
    pub seconds_to_ignite_torch: f32,
    /// Additive fire-starting skill check modifier.
    pub success_modifier: f32,
    /// Total successful uses before the item is worn out; per-use
    /// degradation is derived from this and the template's max condition.
    pub uses_to_wear_out: f32,
    pub destroyed_on_use: bool,
    pub requires_sunlight: bool,
    pub on_use_audio: Option<String>,
}

/// Item improves a fire-starting attempt when added as an accelerant.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AccelerantSpec {
    /// Seconds added to (or removed from) the ignition attempt duration.
    pub duration_offset: f32,
    pub success_modifier: f32,
    pub destroyed_on_use: bool,
}

/// Multiple units of the item occupy one inventory entry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StackableSpec {
    /// Localization key shown for counts greater than one. The single-unit
    /// key defaults to the template's display name key.
    pub multiple_unit_text_key: String,
    pub stack_sprite: String,
}

/// Item can be fed to a fire.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BurnableSpec {
    pub burning_minutes: f32,
    /// Minimum fire age before the fire accepts this fuel.
    pub minutes_before_fire_accepts: f32,
    pub success_modifier: f32,
    pub temp_increase_celsius: f32,
}

/// Item gives off a scent wildlife can track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScentSpec {
    pub category: ScentCategory,
}

/// Item can be sharpened back into condition.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SharpenableSpec {
    pub audio: Option<String>,
    pub minutes_min: f32,
    pub minutes_max: f32,
    pub condition_gain_min: f32,
    pub condition_gain_max: f32,
    /// Acceptable sharpening tools by name; empty means bare hands work.
    pub tools: Vec<String>,
}

/// Item turns into another item after enough time.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EvolveSpec {
    /// Name of the item this one becomes.
    pub target_item: String,
    /// Progress percentage the item spawns with, 0..=100.
    pub start_percent: u32,
    pub days_to_evolve: f32,
    /// Progress only accumulates indoors.
    pub indoors_only: bool,
}

/// Item treats an affliction when used.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FirstAidSpec {
    pub kind: FirstAidKind,
    /// Condition restored immediately on use.
    pub instant_healing_hp: f32,
    pub time_to_use_seconds: f32,
    pub use_audio: Option<String>,
    pub units_per_use: u32,
}

/// Item is a tool usable for crafting, repair, and forced entry.
///
/// Presence of this trait also places the item in the catalog's tool
/// namespace, which is what blueprint/repair tool requirements resolve
/// against.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ToolSpec {
    pub kind: ToolKind,
    pub uses_to_wear_out: f32,
    /// Multiplier on crafting durations while this tool is employed.
    pub crafting_time_multiplier: f32,
    pub degrade_per_hour_crafting: f32,
}

/// Item can be slept in.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BedSpec {
    pub warmth_bonus_celsius: f32,
    pub condition_gain_per_hour: f32,
    pub uses_to_wear_out: f32,
}

/// Raw item that can be cooked.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CookableSpec {
    pub kind: CookableKind,
    pub minutes_to_cook: f32,
    #[serde(default)]
    pub audio: Option<String>,
    /// Item produced by cooking; omit when cooking only changes state.
    #[serde(default)]
    pub cooked_item: Option<String>,
    #[serde(default)]
    pub water_required_liters: f32,
}
