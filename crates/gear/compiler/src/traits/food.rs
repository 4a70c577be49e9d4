//! Food compilation.

use gear_schema::{FoodSpec, OpeningSpec, Template};

use crate::catalog::Resolver;
use crate::config::CompilerConfig;
use crate::derive::{clamp01_percent, decay_per_step, hours_from_minutes, seconds_from_minutes};
use crate::error::CompileError;
use crate::item::{Alcohol, ColdBuff, ConditionBuff, FoodItem, Opening, RestBuff, Smashable};

/// Eating animations only exist for this duration window, seconds.
const EAT_SECONDS_MIN: f32 = 1.0;
const EAT_SECONDS_MAX: f32 = 10.0;

/// Contents lost when smashing a container open, percent.
const SMASH_MIN_PERCENT_LOSS: f32 = 10.0;
const SMASH_MAX_PERCENT_LOSS: f32 = 30.0;
const SMASH_SECONDS: f32 = 6.0;
const SMASH_AUDIO: &str = "Play_EatingSmashCan";

/// Cooked food cools at these rates, percent of heat per minute.
const HEAT_LOSS_PER_MINUTE_INDOORS: f32 = 1.0;
const HEAT_LOSS_PER_MINUTE_OUTDOORS: f32 = 2.0;

pub(crate) fn food(
    template: &Template,
    spec: &FoodSpec,
    config: &CompilerConfig,
    resolver: &Resolver<'_>,
) -> Result<FoodItem, CompileError> {
    let opening = spec
        .opening
        .as_ref()
        .map(|o| opening_of(&template.name, o, config, resolver))
        .transpose()?;

    Ok(FoodItem {
        calories_total: spec.calories,
        calories_remaining: spec.calories,
        thirst_reduction: spec.thirst_effect,
        poisoning_chance: clamp01_percent(spec.food_poisoning_percent),
        poisoning_chance_low_condition: clamp01_percent(spec.food_poisoning_low_condition_percent),
        daily_decay_indoors: decay_per_step(spec.days_to_decay_indoors, template.max_condition),
        daily_decay_outdoors: decay_per_step(spec.days_to_decay_outdoors, template.max_condition),
        eat_seconds: spec.eating_seconds.clamp(EAT_SECONDS_MIN, EAT_SECONDS_MAX),
        eating_audio: spec.eating_audio.clone(),
        open_and_eating_audio: spec.packaged_eating_audio.clone(),
        packaged: spec.packaged_eating_audio.is_some(),
        is_drink: spec.drink,
        is_fish: spec.fish,
        is_meat: spec.meat,
        is_raw: spec.raw,
        is_natural: spec.natural,
        parasite_risk_increments: spec.parasite_risk_increments.clone(),
        heat_loss_percent_per_minute_indoors: HEAT_LOSS_PER_MINUTE_INDOORS,
        heat_loss_percent_per_minute_outdoors: HEAT_LOSS_PER_MINUTE_OUTDOORS,
        opening,
        rest_buff: spec.rest.as_ref().map(|r| RestBuff {
            initial_percent_decrease: r.instant_rest_change,
            rate_of_increase_scale: r.rest_factor,
            duration_hours: hours_from_minutes(r.duration_minutes),
        }),
        cold_buff: spec.cold.as_ref().map(|c| ColdBuff {
            initial_percent_decrease: c.instant_cold_change,
            rate_of_increase_scale: c.cold_factor,
            duration_hours: hours_from_minutes(c.duration_minutes),
        }),
        condition_buff: spec.condition.as_ref().map(|c| ConditionBuff {
            condition_bonus: c.rest_bonus,
            duration_hours: hours_from_minutes(c.duration_minutes),
        }),
        alcohol: spec.alcohol.as_ref().map(|a| {
            let total_kg = template.weight_kg * a.percentage / 100.0;
            Alcohol {
                total_kg,
                remaining_kg: total_kg,
                uptake_seconds: seconds_from_minutes(a.uptake_minutes),
            }
        }),
    })
}

fn opening_of(
    owner: &str,
    spec: &OpeningSpec,
    config: &CompilerConfig,
    resolver: &Resolver<'_>,
) -> Result<Opening, CompileError> {
    // Canned goods leave the host's recycled-can item behind.
    let byproduct = spec
        .canned
        .then(|| resolver.resolve_builtin(&config.empty_can, owner))
        .transpose()?;

    Ok(Opening {
        with_can_opener: spec.with_can_opener,
        with_hatchet: spec.with_hatchet,
        with_knife: spec.with_knife,
        smashable: spec.with_smashing.then(|| Smashable {
            min_percent_loss: SMASH_MIN_PERCENT_LOSS,
            max_percent_loss: SMASH_MAX_PERCENT_LOSS,
            duration_seconds: SMASH_SECONDS,
            audio: SMASH_AUDIO.to_owned(),
        }),
        byproduct,
    })
}

#[cfg(test)]
mod tests {
    use gear_schema::RestEffectSpec;

    use super::*;
    use crate::catalog::Catalog;
    use crate::host::{NoReferenceItems, ReferenceOracle};

    struct StockHost;

    impl ReferenceOracle for StockHost {
        fn contains_gear(&self, name: &str) -> bool {
            name == "GEAR_RecycledCan"
        }
        fn contains_tool(&self, _name: &str) -> bool {
            false
        }
    }

    fn peaches() -> Template {
        Template::new("canned_peaches")
            .with_weight_kg(0.55)
            .with_max_condition(100.0)
    }

    #[test]
    fn rest_effect_absent_means_no_buff() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let spec = FoodSpec {
            calories: 350.0,
            ..FoodSpec::default()
        };

        let compiled = food(&peaches(), &spec, &CompilerConfig::default(), &resolver).unwrap();
        assert!(compiled.rest_buff.is_none());
        assert!(compiled.cold_buff.is_none());
        assert!(compiled.alcohol.is_none());
    }

    #[test]
    fn rest_effect_converts_duration_to_hours() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let spec = FoodSpec {
            calories: 120.0,
            rest: Some(RestEffectSpec {
                instant_rest_change: 5.0,
                rest_factor: 2.0,
                duration_minutes: 120.0,
            }),
            ..FoodSpec::default()
        };

        let compiled = food(&peaches(), &spec, &CompilerConfig::default(), &resolver).unwrap();
        let buff = compiled.rest_buff.unwrap();
        assert_eq!(buff.initial_percent_decrease, 5.0);
        assert_eq!(buff.rate_of_increase_scale, 2.0);
        assert_eq!(buff.duration_hours, 2.0);
    }

    #[test]
    fn eating_time_is_clamped_to_animation_window() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let config = CompilerConfig::default();

        for (authored, expected) in [(0.0, 1.0), (4.0, 4.0), (45.0, 10.0)] {
            let spec = FoodSpec {
                eating_seconds: authored,
                ..FoodSpec::default()
            };
            let compiled = food(&peaches(), &spec, &config, &resolver).unwrap();
            assert_eq!(compiled.eat_seconds, expected);
        }
    }

    #[test]
    fn poisoning_chances_become_unit_fractions() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let spec = FoodSpec {
            food_poisoning_percent: 30.0,
            food_poisoning_low_condition_percent: 250.0,
            ..FoodSpec::default()
        };

        let compiled = food(&peaches(), &spec, &CompilerConfig::default(), &resolver).unwrap();
        assert_eq!(compiled.poisoning_chance, 0.3);
        assert_eq!(compiled.poisoning_chance_low_condition, 1.0);
    }

    #[test]
    fn packaged_follows_the_open_and_eat_cue() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let config = CompilerConfig::default();

        let plain = food(&peaches(), &FoodSpec::default(), &config, &resolver).unwrap();
        assert!(!plain.packaged);

        let spec = FoodSpec {
            packaged_eating_audio: Some("Play_EatingPackage".into()),
            ..FoodSpec::default()
        };
        let packaged = food(&peaches(), &spec, &config, &resolver).unwrap();
        assert!(packaged.packaged);
    }

    #[test]
    fn canned_food_leaves_a_recycled_can() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &StockHost);
        let spec = FoodSpec {
            opening: Some(OpeningSpec {
                with_can_opener: true,
                with_knife: true,
                with_smashing: true,
                canned: true,
                ..OpeningSpec::default()
            }),
            ..FoodSpec::default()
        };

        let compiled = food(&peaches(), &spec, &CompilerConfig::default(), &resolver).unwrap();
        let opening = compiled.opening.unwrap();
        assert_eq!(opening.byproduct.unwrap().name(), "GEAR_RecycledCan");
        let smash = opening.smashable.unwrap();
        assert_eq!(smash.min_percent_loss, 10.0);
        assert_eq!(smash.max_percent_loss, 30.0);
        assert_eq!(smash.duration_seconds, 6.0);
        assert_eq!(smash.audio, "Play_EatingSmashCan");
    }

    #[test]
    fn canned_food_fails_without_the_host_can() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let spec = FoodSpec {
            opening: Some(OpeningSpec {
                canned: true,
                ..OpeningSpec::default()
            }),
            ..FoodSpec::default()
        };

        let err = food(&peaches(), &spec, &CompilerConfig::default(), &resolver).unwrap_err();
        assert_eq!(err.error_code(), "COMPILE_REFERENCE_NOT_FOUND");
        assert!(err.to_string().contains("canned_peaches"));
    }

    #[test]
    fn alcohol_mass_scales_with_item_weight() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let template = Template::new("cooking_wine").with_weight_kg(0.5);
        let spec = FoodSpec {
            drink: true,
            alcohol: Some(gear_schema::AlcoholSpec {
                percentage: 20.0,
                uptake_minutes: 2.0,
            }),
            ..FoodSpec::default()
        };

        let compiled = food(&template, &spec, &CompilerConfig::default(), &resolver).unwrap();
        let alcohol = compiled.alcohol.unwrap();
        assert_eq!(alcohol.total_kg, 0.1);
        assert_eq!(alcohol.remaining_kg, 0.1);
        assert_eq!(alcohol.uptake_seconds, 120.0);
    }
}
