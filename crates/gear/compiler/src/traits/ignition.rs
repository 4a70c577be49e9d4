//! Fire: starting it and feeding it.
//!
//! The fire-starter and accelerant traits compile into one shared
//! [`Ignition`] module. Each writes only the fields it owns; the two
//! shared fields (`skill_modifier`, `consume_on_use`) belong to the
//! accelerant whenever both traits are present, because the accelerant
//! compiler runs second in the fixed trait order.

use gear_schema::{AccelerantSpec, BurnableSpec, FireStarterSpec, Template};

use crate::derive::{decay_per_step, hours_from_minutes};
use crate::item::{Fuel, Ignition};

/// Warmth radius written to every fuel item, meters.
const HEAT_INNER_RADIUS: f32 = 2.5;
const HEAT_OUTER_RADIUS: f32 = 6.0;

pub(crate) fn fire_starter(acc: &mut Option<Ignition>, template: &Template, spec: &FireStarterSpec) {
    let ignition = acc.get_or_insert_with(Ignition::default);
    ignition.seconds_to_ignite_tinder = spec.seconds_to_ignite_tinder;
    ignition.seconds_to_ignite_torch = spec.seconds_to_ignite_torch;
    ignition.skill_modifier = spec.success_modifier;
    ignition.degrade_on_use = decay_per_step(spec.uses_to_wear_out, template.max_condition);
    ignition.consume_on_use = spec.destroyed_on_use;
    ignition.requires_sunlight = spec.requires_sunlight;
    ignition.on_use_audio = spec.on_use_audio.clone();
}

pub(crate) fn accelerant(acc: &mut Option<Ignition>, spec: &AccelerantSpec) {
    let ignition = acc.get_or_insert_with(Ignition::default);
    ignition.is_accelerant = true;
    ignition.duration_modifier = spec.duration_offset;
    ignition.skill_modifier = spec.success_modifier;
    ignition.consume_on_use = spec.destroyed_on_use;
}

pub(crate) fn burnable(spec: &BurnableSpec) -> Fuel {
    Fuel {
        burn_duration_hours: hours_from_minutes(spec.burning_minutes),
        fire_age_minutes_before_adding: spec.minutes_before_fire_accepts,
        skill_modifier: spec.success_modifier,
        heat_increase_celsius: spec.temp_increase_celsius,
        heat_inner_radius: HEAT_INNER_RADIUS,
        heat_outer_radius: HEAT_OUTER_RADIUS,
    }
}
