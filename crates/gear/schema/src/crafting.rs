//! Crafting and progression descriptors.
//!
//! Blueprints and skills may name items that are not compiled yet when they
//! are registered, so the compiler queues them and resolves them in its
//! second phase.

/// A crafting recipe.
///
/// `material_names` / `material_counts` are parallel arrays; tools resolve
/// against the catalog's tool namespace, everything else against gear.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlueprintSpec {
    pub name: String,
    pub duration_minutes: f32,
    pub crafting_audio: Option<String>,
    pub requires_forge: bool,
    pub requires_workbench: bool,
    pub requires_light: bool,
    /// Hidden until unlocked in-game.
    pub locked: bool,
    pub crafted_result: String,
    pub crafted_result_count: u32,
    /// Tool that must be employed, if any.
    pub required_tool: Option<String>,
    /// Tools that speed the craft up when available.
    pub optional_tools: Vec<String>,
    pub material_names: Vec<String>,
    pub material_counts: Vec<u32>,
}

impl Default for BlueprintSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration_minutes: 0.0,
            crafting_audio: None,
            requires_forge: false,
            requires_workbench: false,
            requires_light: false,
            locked: false,
            crafted_result: String::new(),
            crafted_result_count: 1,
            required_tool: None,
            optional_tools: Vec::new(),
            material_names: Vec::new(),
            material_counts: Vec::new(),
        }
    }
}

/// A five-tier progression skill.
///
/// Tier 1 is reached at zero points; tiers 2 through 5 need ascending point
/// totals. Benefit and description keys are per tier, so always five each.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SkillSpec {
    pub name: String,
    pub display_name_key: String,
    pub icon: String,
    pub image: String,
    pub points_tier2: i32,
    pub points_tier3: i32,
    pub points_tier4: i32,
    pub points_tier5: i32,
    pub tier_benefit_keys: [String; 5],
    pub tier_description_keys: [String; 5],
}
