//! Clothing compilation.

use gear_schema::{ClothingSpec, Template};

use crate::derive::{clamp01_percent, decay_per_step, percent_per_hour};
use crate::item::ClothingItem;
use crate::translate;

/// Garments dry faster when taken off and hung.
const DRY_BONUS_NOT_WORN: f32 = 1.5;

pub(crate) fn clothing(template: &Template, spec: &ClothingSpec) -> ClothingItem {
    ClothingItem {
        daily_decay_worn_inside: decay_per_step(
            spec.days_to_decay_worn_inside,
            template.max_condition,
        ),
        daily_decay_worn_outside: decay_per_step(
            spec.days_to_decay_worn_outside,
            template.max_condition,
        ),
        dry_bonus_when_not_worn: DRY_BONUS_NOT_WORN,
        dry_percent_per_hour: percent_per_hour(spec.hours_to_dry_near_fire),
        dry_percent_per_hour_no_fire: percent_per_hour(spec.hours_to_dry_without_fire),
        freeze_percent_per_hour: percent_per_hour(spec.hours_to_freeze),
        region: translate::clothing_region(spec.region),
        min_layer: translate::clothing_layer(spec.min_layer),
        max_layer: translate::clothing_layer(spec.max_layer),
        footwear: translate::footwear_type(spec.footwear),
        movement_sound: translate::movement_sound(spec.movement_sound),
        paperdoll_texture: spec.main_texture.clone(),
        paperdoll_blendmap: spec.blend_texture.clone(),
        warmth_celsius: spec.warmth_celsius,
        warmth_when_wet_celsius: spec.warmth_when_wet_celsius,
        waterproofness: clamp01_percent(spec.waterproofness_percent),
        windproof_celsius: spec.windproof_celsius,
        sprint_bar_reduction_percent: spec.sprint_bar_reduction_percent,
        toughness: spec.toughness,
    }
}

#[cfg(test)]
mod tests {
    use gear_schema::{Footwear, Layer, MovementSound, Region};

    use super::*;
    use crate::item::{ClothingLayer, ClothingRegion, FootwearType};

    fn wool_socks_spec() -> ClothingSpec {
        ClothingSpec {
            days_to_decay_worn_inside: 50.0,
            days_to_decay_worn_outside: 25.0,
            hours_to_dry_near_fire: 2.0,
            hours_to_dry_without_fire: 8.0,
            hours_to_freeze: 4.0,
            region: Region::Feet,
            min_layer: Layer::Base,
            max_layer: Layer::Middle,
            footwear: Footwear::NotFootwear,
            movement_sound: MovementSound::Cloth,
            main_texture: None,
            blend_texture: None,
            warmth_celsius: 1.5,
            warmth_when_wet_celsius: 0.5,
            waterproofness_percent: 120.0,
            windproof_celsius: 0.2,
            sprint_bar_reduction_percent: 0.0,
            toughness: 1.0,
        }
    }

    #[test]
    fn decay_and_dry_rates_follow_the_authored_periods() {
        let template = Template::new("wool_socks").with_max_condition(100.0);
        let clothing = clothing(&template, &wool_socks_spec());

        assert_eq!(clothing.daily_decay_worn_inside, 2.0);
        assert_eq!(clothing.daily_decay_worn_outside, 4.0);
        assert_eq!(clothing.dry_percent_per_hour, 50.0);
        assert_eq!(clothing.dry_percent_per_hour_no_fire, 12.5);
        assert_eq!(clothing.freeze_percent_per_hour, 25.0);
        assert_eq!(clothing.dry_bonus_when_not_worn, 1.5);
    }

    #[test]
    fn waterproofness_becomes_a_unit_fraction() {
        let template = Template::new("wool_socks");
        let clothing = clothing(&template, &wool_socks_spec());
        assert_eq!(clothing.waterproofness, 1.0);
    }

    #[test]
    fn wearable_slots_are_translated() {
        let template = Template::new("wool_socks");
        let clothing = clothing(&template, &wool_socks_spec());

        assert_eq!(clothing.region, ClothingRegion::Feet);
        assert_eq!(clothing.min_layer, ClothingLayer::Base);
        assert_eq!(clothing.max_layer, ClothingLayer::Mid);
        assert_eq!(clothing.footwear, FootwearType::None);
    }
}
