//! Exclusive kind payloads.
//!
//! At most one of these per item, selected by the template's kind. Each
//! carries the full runtime record for that family, including the nested
//! optional effects that only exist when their authoring block was present.

use super::{GearRef, ToolRef};

// ===== food =====

/// Runtime record for a food item.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodItem {
    pub calories_total: f32,
    pub calories_remaining: f32,
    /// Percentage points of thirst removed (negative adds thirst).
    pub thirst_reduction: f32,
    /// Probability as a fraction in `[0, 1]`.
    pub poisoning_chance: f32,
    /// Probability as a fraction in `[0, 1]`.
    pub poisoning_chance_low_condition: f32,
    pub daily_decay_indoors: f32,
    pub daily_decay_outdoors: f32,
    /// Clamped to `[1, 10]` seconds.
    pub eat_seconds: f32,
    pub eating_audio: Option<String>,
    pub open_and_eating_audio: Option<String>,
    /// True exactly when an open-and-eat cue was authored.
    pub packaged: bool,
    pub is_drink: bool,
    pub is_fish: bool,
    pub is_meat: bool,
    pub is_raw: bool,
    pub is_natural: bool,
    pub parasite_risk_increments: Vec<f32>,
    pub heat_loss_percent_per_minute_indoors: f32,
    pub heat_loss_percent_per_minute_outdoors: f32,
    pub opening: Option<Opening>,
    pub rest_buff: Option<RestBuff>,
    pub cold_buff: Option<ColdBuff>,
    pub condition_buff: Option<ConditionBuff>,
    pub alcohol: Option<Alcohol>,
}

/// How a sealed food item is opened.
#[derive(Clone, Debug, PartialEq)]
pub struct Opening {
    pub with_can_opener: bool,
    pub with_hatchet: bool,
    pub with_knife: bool,
    pub smashable: Option<Smashable>,
    /// Container left behind after eating, canned goods only.
    pub byproduct: Option<GearRef>,
}

/// Opening a container by force, losing part of the contents.
#[derive(Clone, Debug, PartialEq)]
pub struct Smashable {
    pub min_percent_loss: f32,
    pub max_percent_loss: f32,
    pub duration_seconds: f32,
    pub audio: String,
}

/// Temporary fatigue reduction granted on eating.
#[derive(Clone, Debug, PartialEq)]
pub struct RestBuff {
    pub initial_percent_decrease: f32,
    pub rate_of_increase_scale: f32,
    pub duration_hours: f32,
}

/// Temporary cold-meter reduction granted on eating.
#[derive(Clone, Debug, PartialEq)]
pub struct ColdBuff {
    pub initial_percent_decrease: f32,
    pub rate_of_increase_scale: f32,
    pub duration_hours: f32,
}

/// Accelerated condition recovery granted on eating.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionBuff {
    pub condition_bonus: f32,
    pub duration_hours: f32,
}

/// Alcohol content of a drink.
#[derive(Clone, Debug, PartialEq)]
pub struct Alcohol {
    pub total_kg: f32,
    pub remaining_kg: f32,
    pub uptake_seconds: f32,
}

// ===== clothing =====

/// Runtime record for a clothing item.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothingItem {
    pub daily_decay_worn_inside: f32,
    pub daily_decay_worn_outside: f32,
    /// Drying speed multiplier while not worn.
    pub dry_bonus_when_not_worn: f32,
    pub dry_percent_per_hour: f32,
    pub dry_percent_per_hour_no_fire: f32,
    pub freeze_percent_per_hour: f32,
    pub region: ClothingRegion,
    pub min_layer: ClothingLayer,
    pub max_layer: ClothingLayer,
    pub footwear: FootwearType,
    pub movement_sound: ClothingMovementSound,
    pub paperdoll_texture: Option<String>,
    pub paperdoll_blendmap: Option<String>,
    pub warmth_celsius: f32,
    pub warmth_when_wet_celsius: f32,
    /// Fraction in `[0, 1]`.
    pub waterproofness: f32,
    pub windproof_celsius: f32,
    pub sprint_bar_reduction_percent: f32,
    pub toughness: f32,
}

/// Body region a garment covers, runtime side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ClothingRegion {
    Head,
    Chest,
    Hands,
    Legs,
    Feet,
    Accessory,
}

/// Layering slot, runtime side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ClothingLayer {
    Base,
    Mid,
    Outer,
    Shell,
}

/// Footwear classification, runtime side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum FootwearType {
    None,
    Shoes,
    Boots,
}

/// Movement noise class, runtime side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ClothingMovementSound {
    None,
    Cloth,
    Leather,
    Synthetic,
}

// ===== cooking pot =====

/// Runtime record for a cooking vessel.
///
/// The multipliers default from a host-provided reference pot; a host
/// without one leaves them neutral.
#[derive(Clone, Debug, PartialEq)]
pub struct CookingPotItem {
    pub capacity_liters: f32,
    pub can_cook_meat: bool,
    pub can_cook_liquid: bool,
    pub can_cook_grub: bool,
    pub warm_up_only: bool,
    pub boiling_time_multiplier: f32,
    pub cooking_time_multiplier: f32,
    pub ready_time_multiplier: f32,
    pub near_fire_warm_up_cooking_multiplier: f32,
    pub near_fire_warm_up_ready_multiplier: f32,
    pub cooked_calorie_multiplier: f32,
    pub lamp_oil_multiplier: f32,
    pub boil_dry_damage_percent: f32,
    pub burn_food_damage_percent: f32,
    /// Placement slots on a fire this vessel occupies.
    pub placement_range: u32,
}

// ===== liquid =====

/// Runtime record for a liquid container.
#[derive(Clone, Debug, PartialEq)]
pub struct LiquidItem {
    pub capacity_liters: f32,
    pub kind: LiquidType,
    /// Containers always compile empty.
    pub current_liters: f32,
    pub randomize_quantity: bool,
    pub time_to_drink_seconds: f32,
    pub drink_audio: String,
}

/// Liquid classification, runtime side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum LiquidType {
    Water,
    Kerosene,
}

// ===== rifle =====

/// Runtime record for a rifle.
///
/// Wield audio and animation transitions come from the host's reference
/// rifle; ammunition and the cleaning kit are named by compiler
/// configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RifleItem {
    pub accuracy_range_meters: f32,
    pub clip_size: u32,
    pub damage_per_shot: f32,
    pub firing_delay_seconds: f32,
    pub muzzle_flash_delay_seconds: f32,
    pub muzzle_smoke_delay_seconds: f32,
    pub reload_seconds: f32,
    pub sway_increment_per_second: f32,
    pub sway_min: f32,
    pub sway_max: f32,
    pub ammo_item: GearRef,
    pub ammo_sprite: String,
    pub wield_audio: String,
    pub unwield_audio: String,
    pub dry_fire_audio: String,
    pub impact_audio: String,
    pub state_transitions: String,
    pub cleaning: Cleaning,
}

/// Rifle maintenance ranges the simulation rolls within per cleaning.
#[derive(Clone, Debug, PartialEq)]
pub struct Cleaning {
    pub condition_gain_min: f32,
    pub condition_gain_max: f32,
    pub duration_minutes_min: f32,
    pub duration_minutes_max: f32,
    pub audio: String,
    pub kit_item: ToolRef,
}
