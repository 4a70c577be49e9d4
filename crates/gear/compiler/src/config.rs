//! Compiler configuration.

/// Names of the host built-ins the compiler clones defaults from.
///
/// Defaults match the stock survival host; embedders with renamed
/// built-ins deserialize their own table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Reference rifle whose wield behavior new rifles inherit.
    pub rifle_reference: String,
    /// Ammunition item every compiled rifle fires.
    pub rifle_ammo: String,
    /// Inventory sprite shown for that ammunition.
    pub ammo_sprite: String,
    /// Maintenance kit every compiled rifle is cleaned with.
    pub rifle_cleaning_kit: String,
    /// Container left behind after eating canned food.
    pub empty_can: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            rifle_reference: "GEAR_Rifle".to_owned(),
            rifle_ammo: "GEAR_RifleAmmoSingle".to_owned(),
            ammo_sprite: "ico_units_ammo".to_owned(),
            rifle_cleaning_kit: "GEAR_RifleCleaningKit".to_owned(),
            empty_can: "GEAR_RecycledCan".to_owned(),
        }
    }
}
