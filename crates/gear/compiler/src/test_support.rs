//! Shared fixtures for unit tests.

use crate::item::{
    CompiledItem, ConditionTable, GearCategory, GearItem, ItemKind, StartCondition, Tool,
    ToolCategory,
};

/// A minimal compiled item with no traits and a generic kind.
pub(crate) fn generic_item(name: &str) -> CompiledItem {
    CompiledItem {
        name: name.to_owned(),
        base: GearItem {
            category: GearCategory::Other,
            weight_kg: 0.1,
            max_condition: 100.0,
            daily_decay: 0.0,
            start_condition: StartCondition::Full,
            display_name_key: format!("GAMEPLAY_{name}"),
            description_key: String::new(),
            pickup_audio: None,
            putback_audio: None,
            stow_audio: None,
            wornout_audio: None,
            condition_table: ConditionTable::Unknown,
            scent_intensity: 0.0,
            console_name: name.to_owned(),
        },
        kind: ItemKind::Generic,
        harvest: None,
        repair: None,
        ignition: None,
        stack: None,
        fuel: None,
        scent: None,
        sharpening: None,
        evolution: None,
        first_aid: None,
        tool: None,
        bed: None,
        cookable: None,
    }
}

/// A generic item carrying a tool module, so it lands in the tool namespace.
pub(crate) fn tool_item(name: &str) -> CompiledItem {
    let mut item = generic_item(name);
    item.tool = Some(Tool {
        category: ToolCategory::General,
        degrade_per_use: 1.0,
        crafting_time_multiplier: 1.0,
        degrade_per_hour_crafting: 0.0,
    });
    item
}
