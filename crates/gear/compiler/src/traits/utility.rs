//! Small single-module traits: stacking, scent, evolution, first aid,
//! tool use, and bedding.

use gear_schema::{
    BedSpec, EvolveSpec, FirstAidKind, FirstAidSpec, ScentSpec, StackableSpec, Template, ToolSpec,
};

use crate::catalog::Resolver;
use crate::derive::{clamp01_percent, decay_per_step, hours_from_days};
use crate::error::{CompileError, RefSource, TraitKind};
use crate::item::{Bed, Evolution, FirstAid, ScentProfile, Stack, Tool};
use crate::translate;

/// Stacks always count whole items.
const UNITS_PER_ITEM: u32 = 1;

pub(crate) fn stackable(template: &Template, spec: &StackableSpec) -> Stack {
    Stack {
        // A single unit reads as the item itself.
        single_unit_text_key: template.display_name_key.clone(),
        multiple_unit_text_key: spec.multiple_unit_text_key.clone(),
        stack_sprite: spec.stack_sprite.clone(),
        units: 1,
        units_per_item: UNITS_PER_ITEM,
    }
}

pub(crate) fn scent(spec: &ScentSpec) -> ScentProfile {
    ScentProfile {
        intensity: translate::scent_intensity(spec.category),
    }
}

pub(crate) fn evolve(
    owner: &str,
    spec: &EvolveSpec,
    resolver: &Resolver<'_>,
) -> Result<Evolution, CompileError> {
    let source = RefSource::new(owner, TraitKind::Evolve, "target_item");
    let into = resolver.resolve_gear(&spec.target_item, source)?;

    Ok(Evolution {
        into,
        start_percent: clamp01_percent(spec.start_percent as f32),
        hours_to_evolve: hours_from_days(spec.days_to_evolve),
        indoors_only: spec.indoors_only,
    })
}

pub(crate) fn first_aid(spec: &FirstAidSpec) -> FirstAid {
    let mut aid = FirstAid {
        provides_antibiotics: false,
        applies_bandage: false,
        cleans_wounds: false,
        kills_pain: false,
        hp_increase: spec.instant_healing_hp,
        time_to_use_seconds: spec.time_to_use_seconds,
        use_audio: spec.use_audio.clone(),
        units_per_use: spec.units_per_use,
    };
    match spec.kind {
        FirstAidKind::Antibiotics => aid.provides_antibiotics = true,
        FirstAidKind::Bandage => aid.applies_bandage = true,
        FirstAidKind::Disinfectant => aid.cleans_wounds = true,
        FirstAidKind::Painkiller => aid.kills_pain = true,
    }
    aid
}

pub(crate) fn tool(template: &Template, spec: &ToolSpec) -> Tool {
    Tool {
        category: translate::tool_category(spec.kind),
        degrade_per_use: decay_per_step(spec.uses_to_wear_out, template.max_condition),
        crafting_time_multiplier: spec.crafting_time_multiplier,
        degrade_per_hour_crafting: spec.degrade_per_hour_crafting,
    }
}

pub(crate) fn bed(template: &Template, spec: &BedSpec) -> Bed {
    Bed {
        warmth_bonus_celsius: spec.warmth_bonus_celsius,
        condition_gain_per_hour: spec.condition_gain_per_hour,
        degrade_per_use: decay_per_step(spec.uses_to_wear_out, template.max_condition),
    }
}
