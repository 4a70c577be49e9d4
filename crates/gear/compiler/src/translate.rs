//! Authoring-enum to runtime-enum translation.
//!
//! Every function here is an exhaustive match, so adding a variant to an
//! authoring enum fails compilation until its runtime mapping is written.
//! Translation can therefore never fail at run time.

use gear_schema::{
    CookableKind, Footwear, InitialCondition, InventoryCategory, Layer, LiquidKind, MovementSound,
    Region, ScentCategory, ToolKind,
};

use crate::item::{
    ClothingLayer, ClothingMovementSound, ClothingRegion, CookableType, FootwearType, GearCategory,
    LiquidType, StartCondition, ToolCategory,
};

pub(crate) fn start_condition(value: InitialCondition) -> StartCondition {
    match value {
        InitialCondition::Random => StartCondition::Random,
        InitialCondition::Perfect => StartCondition::Full,
        InitialCondition::High => StartCondition::High,
        InitialCondition::Medium => StartCondition::Medium,
        InitialCondition::Low => StartCondition::Low,
    }
}

pub(crate) fn gear_category(value: InventoryCategory) -> GearCategory {
    match value {
        InventoryCategory::Tool => GearCategory::Tool,
        InventoryCategory::Food => GearCategory::Food,
        InventoryCategory::Clothing => GearCategory::Clothing,
        InventoryCategory::Firestarting => GearCategory::Firestarting,
        InventoryCategory::Other => GearCategory::Other,
    }
}

pub(crate) fn clothing_region(value: Region) -> ClothingRegion {
    match value {
        Region::Head => ClothingRegion::Head,
        Region::Torso => ClothingRegion::Chest,
        Region::Hands => ClothingRegion::Hands,
        Region::Legs => ClothingRegion::Legs,
        Region::Feet => ClothingRegion::Feet,
        Region::Accessory => ClothingRegion::Accessory,
    }
}

pub(crate) fn clothing_layer(value: Layer) -> ClothingLayer {
    match value {
        Layer::Base => ClothingLayer::Base,
        Layer::Middle => ClothingLayer::Mid,
        Layer::Outer => ClothingLayer::Outer,
        Layer::Shell => ClothingLayer::Shell,
    }
}

pub(crate) fn footwear_type(value: Footwear) -> FootwearType {
    match value {
        Footwear::NotFootwear => FootwearType::None,
        Footwear::Shoes => FootwearType::Shoes,
        Footwear::Boots => FootwearType::Boots,
    }
}

pub(crate) fn movement_sound(value: MovementSound) -> ClothingMovementSound {
    match value {
        MovementSound::None => ClothingMovementSound::None,
        MovementSound::Cloth => ClothingMovementSound::Cloth,
        MovementSound::Leather => ClothingMovementSound::Leather,
        MovementSound::Synthetic => ClothingMovementSound::Synthetic,
    }
}

pub(crate) fn liquid_type(value: LiquidKind) -> LiquidType {
    match value {
        LiquidKind::Water => LiquidType::Water,
        LiquidKind::LampFuel => LiquidType::Kerosene,
    }
}

pub(crate) fn tool_category(value: ToolKind) -> ToolCategory {
    match value {
        ToolKind::General => ToolCategory::General,
        ToolKind::Hacksaw => ToolCategory::Hacksaw,
        ToolKind::Hatchet => ToolCategory::Hatchet,
        ToolKind::Hammer => ToolCategory::Hammer,
        ToolKind::Knife => ToolCategory::Knife,
    }
}

pub(crate) fn cookable_type(value: CookableKind) -> CookableType {
    match value {
        CookableKind::Meat => CookableType::Meat,
        CookableKind::Fish => CookableType::Fish,
        CookableKind::Grub => CookableType::Grub,
        CookableKind::Liquid => CookableType::Liquid,
    }
}

/// Wildlife detection strength for each scent class.
pub(crate) fn scent_intensity(value: ScentCategory) -> f32 {
    match value {
        ScentCategory::RawMeat => 15.0,
        ScentCategory::RawFish => 15.0,
        ScentCategory::CookedMeat => 5.0,
        ScentCategory::CookedFish => 5.0,
        ScentCategory::Guts => 20.0,
        ScentCategory::Quarter => 50.0,
    }
}
