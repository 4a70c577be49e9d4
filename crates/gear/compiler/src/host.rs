//! Seams between the compiler and its embedding host.
//!
//! The compiler never talks to the simulation directly. The host answers
//! reference-item queries through a [`ReferenceOracle`], receives flushed
//! crafting data through the sinks, and may attach [`FinalizeHook`]s that
//! patch each compiled item before it enters the catalog.

use gear_schema::RadialCategory;

use crate::blueprint::CompiledBlueprint;
use crate::item::CompiledItem;
use crate::skill::CompiledSkill;

/// Wield behavior cloned from the host's reference rifle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RifleDefaults {
    pub wield_audio: String,
    pub unwield_audio: String,
    pub state_transitions: String,
}

/// Simulation constants cloned from the host's reference cooking vessel.
#[derive(Clone, Debug, PartialEq)]
pub struct PotDefaults {
    pub boiling_time_multiplier: f32,
    pub cooking_time_multiplier: f32,
    pub ready_time_multiplier: f32,
    pub near_fire_warm_up_cooking_multiplier: f32,
    pub near_fire_warm_up_ready_multiplier: f32,
    pub cooked_calorie_multiplier: f32,
    pub lamp_oil_multiplier: f32,
    pub boil_dry_damage_percent: f32,
    pub burn_food_damage_percent: f32,
    pub placement_range: u32,
}

impl Default for PotDefaults {
    fn default() -> Self {
        Self {
            boiling_time_multiplier: 1.0,
            cooking_time_multiplier: 1.0,
            ready_time_multiplier: 1.0,
            near_fire_warm_up_cooking_multiplier: 1.0,
            near_fire_warm_up_ready_multiplier: 1.0,
            cooked_calorie_multiplier: 1.0,
            lamp_oil_multiplier: 1.0,
            boil_dry_damage_percent: 0.0,
            burn_food_damage_percent: 0.0,
            placement_range: 3,
        }
    }
}

/// Answers name-resolution queries against the host's built-in items.
///
/// The catalog is always consulted first; the oracle is the fallback for
/// items that ship with the host rather than with a mod.
pub trait ReferenceOracle {
    fn contains_gear(&self, name: &str) -> bool;

    fn contains_tool(&self, name: &str) -> bool;

    /// Wield behavior of the named built-in rifle, if the host knows it.
    fn rifle_defaults(&self, name: &str) -> Option<RifleDefaults> {
        let _ = name;
        None
    }

    /// Simulation constants of the named built-in cooking vessel.
    fn cooking_pot_defaults(&self, name: &str) -> Option<PotDefaults> {
        let _ = name;
        None
    }
}

/// Oracle that knows no built-in items at all.
///
/// Every reference must then resolve inside the catalog itself. Useful for
/// tests and for hosts that compile self-contained item packs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoReferenceItems;

impl ReferenceOracle for NoReferenceItems {
    fn contains_gear(&self, _name: &str) -> bool {
        false
    }

    fn contains_tool(&self, _name: &str) -> bool {
        false
    }
}

/// Host-installed pass over each item after trait compilation.
///
/// Hooks run once per item, in registration order. A failing hook is
/// logged and skipped; it never fails the item.
pub trait FinalizeHook {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    fn apply(&self, item: &mut CompiledItem) -> anyhow::Result<()>;
}

/// Receives every blueprint compiled during the deferred flush.
pub trait BlueprintSink {
    fn accept(&mut self, blueprint: &CompiledBlueprint);
}

/// Receives every skill compiled during the deferred flush.
pub trait SkillSink {
    fn accept(&mut self, skill: &CompiledSkill);
}

/// Places compiled items on the host's radial selection menu.
pub trait RadialRegistrar {
    fn register(&mut self, item_name: &str, category: RadialCategory);
}
