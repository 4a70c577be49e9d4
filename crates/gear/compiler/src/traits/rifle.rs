//! Rifle compilation.
//!
//! Ballistics come from the author; wield behavior, ammunition, and the
//! cleaning kit come from host built-ins named in the configuration.

use gear_schema::{RifleSpec, Template};

use crate::catalog::Resolver;
use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::host::ReferenceOracle;
use crate::item::{Cleaning, RifleItem};

/// Cleaning restores this much condition, percent.
const CLEAN_GAIN_MIN: f32 = 2.0;
const CLEAN_GAIN_MAX: f32 = 5.0;

/// Cleaning takes this long, minutes.
const CLEAN_MINUTES_MIN: f32 = 5.0;
const CLEAN_MINUTES_MAX: f32 = 15.0;

/// Cues every rifle shares.
const DRY_FIRE_AUDIO: &str = "Play_RifleDryFire";
const IMPACT_AUDIO: &str = "Play_BulletImpacts";
const CLEAN_AUDIO: &str = "Play_RifleCleaning";

pub(crate) fn rifle(
    template: &Template,
    spec: &RifleSpec,
    config: &CompilerConfig,
    host: &dyn ReferenceOracle,
    resolver: &Resolver<'_>,
) -> Result<RifleItem, CompileError> {
    let defaults = host.rifle_defaults(&config.rifle_reference).ok_or_else(|| {
        CompileError::ReferenceNotFound {
            name: config.rifle_reference.clone(),
            template: template.name.clone(),
        }
    })?;
    let ammo_item = resolver.resolve_builtin(&config.rifle_ammo, &template.name)?;
    let kit_item = resolver.resolve_builtin_tool(&config.rifle_cleaning_kit, &template.name)?;

    Ok(RifleItem {
        accuracy_range_meters: spec.range_meters,
        clip_size: spec.clip_size,
        damage_per_shot: spec.damage_per_shot,
        firing_delay_seconds: spec.firing_delay_seconds,
        muzzle_flash_delay_seconds: spec.muzzle_flash_delay_seconds,
        muzzle_smoke_delay_seconds: spec.muzzle_smoke_delay_seconds,
        reload_seconds: spec.reload_seconds,
        sway_increment_per_second: spec.sway_increment_per_second,
        sway_min: spec.min_sway,
        sway_max: spec.max_sway,
        ammo_item,
        ammo_sprite: config.ammo_sprite.clone(),
        wield_audio: defaults.wield_audio,
        unwield_audio: defaults.unwield_audio,
        dry_fire_audio: DRY_FIRE_AUDIO.to_owned(),
        impact_audio: IMPACT_AUDIO.to_owned(),
        state_transitions: defaults.state_transitions,
        cleaning: Cleaning {
            condition_gain_min: CLEAN_GAIN_MIN,
            condition_gain_max: CLEAN_GAIN_MAX,
            duration_minutes_min: CLEAN_MINUTES_MIN,
            duration_minutes_max: CLEAN_MINUTES_MAX,
            audio: CLEAN_AUDIO.to_owned(),
            kit_item,
        },
    })
}
