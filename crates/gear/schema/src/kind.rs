//! Exclusive-category descriptors.
//!
//! At most one of these attaches to a template, because each defines what the
//! item fundamentally is. They are a sum type rather than another set of
//! optional fields so that "two exclusive kinds on one template" is not
//! representable.

use crate::enums::{Footwear, Layer, LiquidKind, MovementSound, Region};

/// The exclusive kind of a template.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TemplateKind {
    /// No exclusive kind; the item is plain gear.
    #[default]
    Generic,
    Food(FoodSpec),
    Clothing(ClothingSpec),
    CookingPot(CookingPotSpec),
    Liquid(LiquidSpec),
    Rifle(RifleSpec),
}

impl TemplateKind {
    pub fn is_generic(&self) -> bool {
        matches!(self, TemplateKind::Generic)
    }
}

/// Edible item.
///
/// The optional effect sub-specs follow the conditional-synthesis rule:
/// leaving one out means the compiled item has no such module at all, not a
/// zeroed one.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FoodSpec {
    pub calories: f32,
    /// Thirst percentage restored (negative values add thirst).
    pub thirst_effect: f32,
    /// Food-poisoning chance in percent, 0..=100.
    pub food_poisoning_percent: f32,
    /// Poisoning chance in percent when eaten at low condition.
    pub food_poisoning_low_condition_percent: f32,
    pub days_to_decay_indoors: f32,
    pub days_to_decay_outdoors: f32,
    /// Seconds to eat; the compiler clamps this to 1..=10.
    pub eating_seconds: f32,
    pub eating_audio: Option<String>,
    /// Audio for unwrapping and eating. Its presence is what marks the food
    /// as packaged.
    pub packaged_eating_audio: Option<String>,
    pub drink: bool,
    pub fish: bool,
    pub meat: bool,
    pub raw: bool,
    pub natural: bool,
    /// Per-unit parasite risk increase in percent, one entry per unit eaten.
    pub parasite_risk_increments: Vec<f32>,
    pub opening: Option<OpeningSpec>,
    pub rest: Option<RestEffectSpec>,
    pub cold: Option<ColdEffectSpec>,
    pub condition: Option<ConditionEffectSpec>,
    pub alcohol: Option<AlcoholSpec>,
}

/// Container that must be opened before eating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpeningSpec {
    pub with_can_opener: bool,
    pub with_hatchet: bool,
    pub with_knife: bool,
    /// Can be smashed open at the cost of some of the contents.
    pub with_smashing: bool,
    /// Canned goods leave the host's recycled-can item behind after eating.
    pub canned: bool,
}

/// Eating this temporarily slows rest loss.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RestEffectSpec {
    /// Immediate fatigue reduction in percent.
    pub instant_rest_change: f32,
    /// Scale on the fatigue increase rate while active.
    pub rest_factor: f32,
    pub duration_minutes: f32,
}

/// Eating this temporarily slows freezing.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColdEffectSpec {
    pub instant_cold_change: f32,
    pub cold_factor: f32,
    pub duration_minutes: f32,
}

/// Eating this improves condition recovery while resting.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConditionEffectSpec {
    pub rest_bonus: f32,
    pub duration_minutes: f32,
}

/// The food contains alcohol.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlcoholSpec {
    /// Alcohol share of the item weight in percent.
    pub percentage: f32,
    pub uptake_minutes: f32,
}

/// Wearable item.
///
/// Authors give durations ("hours to dry", "days to decay"); the compiler
/// turns them into the per-hour and per-day rates the simulation wants.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClothingSpec {
    pub days_to_decay_worn_inside: f32,
    pub days_to_decay_worn_outside: f32,
    pub hours_to_dry_near_fire: f32,
    pub hours_to_dry_without_fire: f32,
    pub hours_to_freeze: f32,
    pub region: Region,
    pub min_layer: Layer,
    pub max_layer: Layer,
    pub footwear: Footwear,
    pub movement_sound: MovementSound,
    /// Paper-doll texture names; host-side lookups, never resolved here.
    pub main_texture: Option<String>,
    pub blend_texture: Option<String>,
    pub warmth_celsius: f32,
    pub warmth_when_wet_celsius: f32,
    /// 0..=100; the compiler stores the clamped 0..=1 fraction.
    pub waterproofness_percent: f32,
    pub windproof_celsius: f32,
    pub sprint_bar_reduction_percent: f32,
    pub toughness: f32,
}

/// Vessel for boiling water and cooking.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CookingPotSpec {
    pub capacity_liters: f32,
    #[serde(default)]
    pub can_cook_meat: bool,
    #[serde(default)]
    pub can_cook_liquid: bool,
    #[serde(default)]
    pub can_cook_grub: bool,
    /// Existing item whose simulation constants this pot inherits.
    pub reference_item: String,
}

/// Container holding a liquid.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LiquidSpec {
    pub capacity_liters: f32,
    pub kind: LiquidKind,
}

/// Long firearm.
///
/// Wield/unwield behavior is inherited from the host's reference rifle; only
/// ballistics are authored.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RifleSpec {
    pub range_meters: f32,
    pub clip_size: u32,
    pub damage_per_shot: f32,
    pub firing_delay_seconds: f32,
    pub muzzle_flash_delay_seconds: f32,
    pub muzzle_smoke_delay_seconds: f32,
    pub reload_seconds: f32,
    /// Aim sway added per second of holding aim.
    pub sway_increment_per_second: f32,
    /// Sway floor at zero fatigue.
    pub min_sway: f32,
    /// Sway ceiling at full fatigue.
    pub max_sway: f32,
}
