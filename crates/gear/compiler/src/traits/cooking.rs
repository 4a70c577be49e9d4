//! Cooking: raw cookables, vessels, and liquid containers.

use gear_schema::{CookableSpec, CookingPotSpec, LiquidSpec};

use crate::catalog::Resolver;
use crate::error::{CompileError, RefSource, TraitKind};
use crate::host::ReferenceOracle;
use crate::item::{Cookable, CookingPotItem, LiquidItem};
use crate::translate;

/// Drinking straight from a container takes this long, seconds.
const DRINK_SECONDS: f32 = 4.0;
const DRINK_AUDIO: &str = "Play_DrinkWater";

pub(crate) fn cookable(
    owner: &str,
    spec: &CookableSpec,
    resolver: &Resolver<'_>,
) -> Result<Cookable, CompileError> {
    let cooked_result = spec
        .cooked_item
        .as_ref()
        .map(|name| {
            let source = RefSource::new(owner, TraitKind::Cookable, "cooked_item");
            resolver.resolve_gear(name, source)
        })
        .transpose()?;

    Ok(Cookable {
        kind: translate::cookable_type(spec.kind),
        duration_minutes: spec.minutes_to_cook,
        audio: spec.audio.clone(),
        cooked_result,
        water_required_liters: spec.water_required_liters,
    })
}

pub(crate) fn cooking_pot(
    owner: &str,
    spec: &CookingPotSpec,
    host: &dyn ReferenceOracle,
) -> Result<CookingPotItem, CompileError> {
    let defaults = host.cooking_pot_defaults(&spec.reference_item).ok_or_else(|| {
        CompileError::ReferenceNotFound {
            name: spec.reference_item.clone(),
            template: owner.to_owned(),
        }
    })?;

    Ok(CookingPotItem {
        capacity_liters: spec.capacity_liters,
        can_cook_meat: spec.can_cook_meat,
        can_cook_liquid: spec.can_cook_liquid,
        can_cook_grub: spec.can_cook_grub,
        warm_up_only: false,
        boiling_time_multiplier: defaults.boiling_time_multiplier,
        cooking_time_multiplier: defaults.cooking_time_multiplier,
        ready_time_multiplier: defaults.ready_time_multiplier,
        near_fire_warm_up_cooking_multiplier: defaults.near_fire_warm_up_cooking_multiplier,
        near_fire_warm_up_ready_multiplier: defaults.near_fire_warm_up_ready_multiplier,
        cooked_calorie_multiplier: defaults.cooked_calorie_multiplier,
        lamp_oil_multiplier: defaults.lamp_oil_multiplier,
        boil_dry_damage_percent: defaults.boil_dry_damage_percent,
        burn_food_damage_percent: defaults.burn_food_damage_percent,
        placement_range: defaults.placement_range,
    })
}

pub(crate) fn liquid(spec: &LiquidSpec) -> LiquidItem {
    LiquidItem {
        capacity_liters: spec.capacity_liters,
        kind: translate::liquid_type(spec.kind),
        // Containers spawn empty with a fixed fill, never randomized.
        current_liters: 0.0,
        randomize_quantity: false,
        time_to_drink_seconds: DRINK_SECONDS,
        drink_audio: DRINK_AUDIO.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use gear_schema::{CookableKind, LiquidKind};

    use super::*;
    use crate::catalog::Catalog;
    use crate::host::{NoReferenceItems, PotDefaults};
    use crate::item::{CookableType, LiquidType};
    use crate::test_support::generic_item;

    #[test]
    fn cookable_resolves_the_cooked_form() {
        let mut catalog = Catalog::new();
        catalog.insert(generic_item("cooked_rabbit")).unwrap();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let spec = CookableSpec {
            kind: CookableKind::Meat,
            minutes_to_cook: 25.0,
            audio: None,
            cooked_item: Some("cooked_rabbit".into()),
            water_required_liters: 0.0,
        };

        let cookable = cookable("raw_rabbit", &spec, &resolver).unwrap();
        assert_eq!(cookable.kind, CookableType::Meat);
        assert_eq!(cookable.cooked_result.unwrap().name(), "cooked_rabbit");
    }

    #[test]
    fn cookable_without_result_only_heats() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let spec = CookableSpec {
            kind: CookableKind::Liquid,
            minutes_to_cook: 10.0,
            audio: None,
            cooked_item: None,
            water_required_liters: 0.25,
        };

        let cookable = cookable("herbal_tea", &spec, &resolver).unwrap();
        assert!(cookable.cooked_result.is_none());
        assert_eq!(cookable.water_required_liters, 0.25);
    }

    #[test]
    fn pot_inherits_reference_constants() {
        struct PotHost;
        impl ReferenceOracle for PotHost {
            fn contains_gear(&self, _name: &str) -> bool {
                false
            }
            fn contains_tool(&self, _name: &str) -> bool {
                false
            }
            fn cooking_pot_defaults(&self, name: &str) -> Option<PotDefaults> {
                (name == "GEAR_CookingPot").then(|| PotDefaults {
                    boiling_time_multiplier: 0.9,
                    placement_range: 2,
                    ..PotDefaults::default()
                })
            }
        }

        let spec = CookingPotSpec {
            capacity_liters: 1.5,
            can_cook_meat: true,
            can_cook_liquid: true,
            can_cook_grub: false,
            reference_item: "GEAR_CookingPot".into(),
        };

        let pot = cooking_pot("enamel_pot", &spec, &PotHost).unwrap();
        assert_eq!(pot.boiling_time_multiplier, 0.9);
        assert_eq!(pot.placement_range, 2);
        assert!(!pot.warm_up_only);
        assert!(pot.can_cook_meat);
    }

    #[test]
    fn pot_fails_when_the_reference_is_unknown() {
        let spec = CookingPotSpec {
            capacity_liters: 1.5,
            can_cook_meat: true,
            can_cook_liquid: false,
            can_cook_grub: false,
            reference_item: "GEAR_CookingPot".into(),
        };

        let err = cooking_pot("enamel_pot", &spec, &NoReferenceItems).unwrap_err();
        assert_eq!(err.error_code(), "COMPILE_REFERENCE_NOT_FOUND");
        assert!(err.to_string().contains("enamel_pot"));
    }

    #[test]
    fn liquid_containers_compile_empty() {
        let liquid = liquid(&LiquidSpec {
            capacity_liters: 0.75,
            kind: LiquidKind::LampFuel,
        });

        assert_eq!(liquid.kind, LiquidType::Kerosene);
        assert_eq!(liquid.current_liters, 0.0);
        assert!(!liquid.randomize_quantity);
        assert_eq!(liquid.time_to_drink_seconds, 4.0);
        assert_eq!(liquid.drink_audio, "Play_DrinkWater");
    }
}
