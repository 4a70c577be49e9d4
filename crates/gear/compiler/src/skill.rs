//! Custom skills.
//!
//! Skills never reference items, but they are still flushed after the item
//! commit so their ordinals follow a stable registration order.

use gear_schema::SkillSpec;

/// Fully compiled skill, ready for the host's skill table.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledSkill {
    pub name: String,
    pub display_name_key: String,
    pub icon: String,
    pub image: String,
    /// Position in the host's skill table, assigned at flush.
    pub ordinal: u32,
    /// Cumulative points to reach each tier; tier one is free.
    pub tier_points: [i32; 5],
    pub tier_benefit_keys: [String; 5],
    pub tier_description_keys: [String; 5],
}

pub(crate) fn compile(spec: &SkillSpec, ordinal: u32) -> CompiledSkill {
    CompiledSkill {
        name: spec.name.clone(),
        display_name_key: spec.display_name_key.clone(),
        icon: spec.icon.clone(),
        image: spec.image.clone(),
        ordinal,
        tier_points: [
            0,
            spec.points_tier2,
            spec.points_tier3,
            spec.points_tier4,
            spec.points_tier5,
        ],
        tier_benefit_keys: spec.tier_benefit_keys.clone(),
        tier_description_keys: spec.tier_description_keys.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tier_costs_nothing() {
        let spec = SkillSpec {
            name: "skill_gunsmithing".into(),
            display_name_key: "GAMEPLAY_Gunsmithing".into(),
            points_tier2: 25,
            points_tier3: 75,
            points_tier4: 150,
            points_tier5: 300,
            ..SkillSpec::default()
        };

        let skill = compile(&spec, 3);
        assert_eq!(skill.ordinal, 3);
        assert_eq!(skill.tier_points, [0, 25, 75, 150, 300]);
    }
}
