//! Breaking items down and putting them back together.

use gear_schema::{HarvestableSpec, RepairableSpec, SharpenableSpec};

use crate::catalog::Resolver;
use crate::error::{CompileError, RefSource, TraitKind};
use crate::item::{Harvest, Repair, Sharpening};

pub(crate) fn harvestable(
    owner: &str,
    spec: &HarvestableSpec,
    resolver: &Resolver<'_>,
) -> Result<Harvest, CompileError> {
    let source = RefSource::new(owner, TraitKind::Harvestable, "yield_names");
    let yields = resolver.resolve_stacks(&spec.yield_names, &spec.yield_counts, &source, "yield_counts")?;

    Ok(Harvest {
        audio: spec.audio.clone(),
        duration_minutes: spec.minutes,
        yields,
    })
}

pub(crate) fn repairable(
    owner: &str,
    spec: &RepairableSpec,
    resolver: &Resolver<'_>,
) -> Result<Repair, CompileError> {
    let source = RefSource::new(owner, TraitKind::Repairable, "material_names");
    let materials =
        resolver.resolve_stacks(&spec.material_names, &spec.material_counts, &source, "material_counts")?;

    let tool_source = RefSource::new(owner, TraitKind::Repairable, "required_tools");
    let tool_choices = resolver.resolve_tool_choices(&spec.required_tools, &tool_source)?;

    Ok(Repair {
        audio: spec.audio.clone(),
        duration_minutes: spec.minutes,
        condition_gain: spec.condition_gain,
        requires_tool: !tool_choices.is_empty(),
        materials,
        tool_choices,
    })
}

pub(crate) fn sharpenable(
    owner: &str,
    spec: &SharpenableSpec,
    resolver: &Resolver<'_>,
) -> Result<Sharpening, CompileError> {
    let source = RefSource::new(owner, TraitKind::Sharpenable, "tools");
    let tool_choices = resolver.resolve_tool_choices(&spec.tools, &source)?;

    Ok(Sharpening {
        audio: spec.audio.clone(),
        duration_minutes_min: spec.minutes_min,
        duration_minutes_max: spec.minutes_max,
        condition_gain_min: spec.condition_gain_min,
        condition_gain_max: spec.condition_gain_max,
        requires_tool: !tool_choices.is_empty(),
        tool_choices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::host::{NoReferenceItems, ReferenceOracle};

    struct Workbench;

    impl ReferenceOracle for Workbench {
        fn contains_gear(&self, name: &str) -> bool {
            matches!(name, "GEAR_Cloth" | "GEAR_ScrapMetal")
        }
        fn contains_tool(&self, name: &str) -> bool {
            name == "GEAR_SewingKit"
        }
    }

    #[test]
    fn harvest_resolves_each_yield() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &Workbench);
        let spec = HarvestableSpec {
            audio: Some("Play_Harvesting".into()),
            minutes: 20.0,
            yield_names: vec!["GEAR_Cloth".into(), "GEAR_ScrapMetal".into()],
            yield_counts: vec![2, 1],
        };

        let harvest = harvestable("old_jacket", &spec, &resolver).unwrap();
        assert_eq!(harvest.yields.len(), 2);
        assert_eq!(harvest.yields[0].item.name(), "GEAR_Cloth");
        assert_eq!(harvest.yields[0].units, 2);
    }

    #[test]
    fn harvest_arity_mismatch_names_both_fields() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let spec = HarvestableSpec {
            minutes: 5.0,
            yield_names: vec!["GEAR_Cloth".into(), "GEAR_ScrapMetal".into()],
            yield_counts: vec![2],
            ..HarvestableSpec::default()
        };

        let err = harvestable("old_jacket", &spec, &resolver).unwrap_err();
        assert_eq!(err.error_code(), "COMPILE_ARITY_MISMATCH");
        let text = err.to_string();
        assert!(text.contains("yield_names"), "{text}");
        assert!(text.contains("yield_counts"), "{text}");
    }

    #[test]
    fn repair_without_tools_requires_none() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &Workbench);
        let spec = RepairableSpec {
            minutes: 15.0,
            condition_gain: 20.0,
            material_names: vec!["GEAR_Cloth".into()],
            material_counts: vec![1],
            ..RepairableSpec::default()
        };

        let repair = repairable("old_jacket", &spec, &resolver).unwrap();
        assert!(!repair.requires_tool);
        assert!(repair.tool_choices.is_empty());
    }

    #[test]
    fn repair_tool_must_be_in_tool_namespace() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &Workbench);
        let spec = RepairableSpec {
            minutes: 15.0,
            condition_gain: 20.0,
            material_names: vec!["GEAR_Cloth".into()],
            material_counts: vec![1],
            // Known gear, but not a tool.
            required_tools: vec!["GEAR_ScrapMetal".into()],
            ..RepairableSpec::default()
        };

        let err = repairable("old_jacket", &spec, &resolver).unwrap_err();
        assert!(err.to_string().contains("required_tools"));
    }

    #[test]
    fn sharpening_carries_the_authored_ranges() {
        let catalog = Catalog::new();
        let resolver = Resolver::new(&catalog, &Workbench);
        let spec = SharpenableSpec {
            audio: None,
            minutes_min: 5.0,
            minutes_max: 10.0,
            condition_gain_min: 10.0,
            condition_gain_max: 25.0,
            tools: vec!["GEAR_SewingKit".into()],
        };

        let sharpening = sharpenable("carving_knife", &spec, &resolver).unwrap();
        assert!(sharpening.requires_tool);
        assert_eq!(sharpening.duration_minutes_max, 10.0);
        assert_eq!(sharpening.condition_gain_min, 10.0);
    }
}
