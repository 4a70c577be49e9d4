//! Crafting blueprints.
//!
//! Blueprints may reference items that have not been compiled yet, so name
//! resolution is deferred to the post-commit flush. Structural problems
//! (mismatched material arrays) are caught at registration, attributed to
//! whoever provided the blueprint.

use gear_schema::BlueprintSpec;

use crate::catalog::Resolver;
use crate::error::{CompileError, RefSource, TraitKind};
use crate::item::{GearRef, GearStack, ToolRef};

/// A blueprint waiting for the deferred flush.
#[derive(Clone, Debug)]
pub(crate) struct QueuedBlueprint {
    pub(crate) spec: BlueprintSpec,
    /// Mod or host component that supplied the blueprint.
    pub(crate) provided_by: String,
}

/// Fully resolved crafting recipe.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledBlueprint {
    pub name: String,
    pub duration_minutes: f32,
    pub crafting_audio: Option<String>,
    pub requires_forge: bool,
    pub requires_workbench: bool,
    pub requires_light: bool,
    /// Locked blueprints must be discovered before they appear in the
    /// crafting menu.
    pub locked: bool,
    pub result: GearRef,
    pub result_count: u32,
    pub required_tool: Option<ToolRef>,
    pub optional_tools: Vec<ToolRef>,
    pub materials: Vec<GearStack>,
}

/// Registration-time structural check. Reference checks wait for the flush.
pub(crate) fn validate(spec: &BlueprintSpec) -> Result<(), CompileError> {
    if spec.material_names.len() != spec.material_counts.len() {
        return Err(CompileError::ArityMismatch {
            owner: spec.name.clone(),
            names_field: "material_names",
            counts_field: "material_counts",
            names_len: spec.material_names.len(),
            counts_len: spec.material_counts.len(),
        });
    }
    Ok(())
}

/// Names the blueprint mentions that do not resolve yet.
///
/// Used for a registration-time heads-up; the names may legitimately be
/// compiled later in the load.
pub(crate) fn unresolved_names(spec: &BlueprintSpec, resolver: &Resolver<'_>) -> Vec<String> {
    let mut missing = Vec::new();
    let source = RefSource::new(&spec.name, TraitKind::Blueprint, "crafted_result");

    if resolver.resolve_gear(&spec.crafted_result, source.clone()).is_err() {
        missing.push(spec.crafted_result.clone());
    }
    for name in &spec.material_names {
        if resolver.resolve_gear(name, source.clone()).is_err() {
            missing.push(name.clone());
        }
    }
    for name in spec.required_tool.iter().chain(&spec.optional_tools) {
        if resolver.resolve_tool(name, source.clone()).is_err() {
            missing.push(name.clone());
        }
    }
    missing
}

/// Flush-time compilation. Every reference must resolve now; failures are
/// wrapped with the provider for attribution.
pub(crate) fn compile(
    queued: &QueuedBlueprint,
    resolver: &Resolver<'_>,
) -> Result<CompiledBlueprint, CompileError> {
    let spec = &queued.spec;
    compile_resolved(spec, resolver)
        .map_err(|err| CompileError::for_blueprint(&spec.name, &queued.provided_by, err))
}

fn compile_resolved(
    spec: &BlueprintSpec,
    resolver: &Resolver<'_>,
) -> Result<CompiledBlueprint, CompileError> {
    validate(spec)?;

    let result_source = RefSource::new(&spec.name, TraitKind::Blueprint, "crafted_result");
    let result = resolver.resolve_gear(&spec.crafted_result, result_source)?;

    let material_source = RefSource::new(&spec.name, TraitKind::Blueprint, "material_names");
    let materials = resolver.resolve_stacks(
        &spec.material_names,
        &spec.material_counts,
        &material_source,
        "material_counts",
    )?;

    let required_tool = spec
        .required_tool
        .as_ref()
        .map(|name| {
            let source = RefSource::new(&spec.name, TraitKind::Blueprint, "required_tool");
            resolver.resolve_tool(name, source)
        })
        .transpose()?;

    let optional_source = RefSource::new(&spec.name, TraitKind::Blueprint, "optional_tools");
    let optional_tools = resolver.resolve_tool_choices(&spec.optional_tools, &optional_source)?;

    Ok(CompiledBlueprint {
        name: spec.name.clone(),
        duration_minutes: spec.duration_minutes,
        crafting_audio: spec.crafting_audio.clone(),
        requires_forge: spec.requires_forge,
        requires_workbench: spec.requires_workbench,
        requires_light: spec.requires_light,
        locked: spec.locked,
        result,
        result_count: spec.crafted_result_count,
        required_tool,
        optional_tools,
        materials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::host::NoReferenceItems;
    use crate::test_support::{generic_item, tool_item};

    fn arrow_blueprint() -> BlueprintSpec {
        BlueprintSpec {
            name: "blueprint_arrow".into(),
            duration_minutes: 30.0,
            crafted_result: "simple_arrow".into(),
            crafted_result_count: 1,
            required_tool: Some("carving_knife".into()),
            material_names: vec!["arrow_shaft".into(), "arrowhead".into()],
            material_counts: vec![1, 1],
            ..BlueprintSpec::default()
        }
    }

    fn stocked_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(generic_item("simple_arrow")).unwrap();
        catalog.insert(generic_item("arrow_shaft")).unwrap();
        catalog.insert(generic_item("arrowhead")).unwrap();
        catalog.insert(tool_item("carving_knife")).unwrap();
        catalog
    }

    #[test]
    fn arity_is_checked_before_any_resolution() {
        let mut spec = arrow_blueprint();
        spec.material_counts = vec![1];

        let err = validate(&spec).unwrap_err();
        assert_eq!(err.error_code(), "COMPILE_ARITY_MISMATCH");
    }

    #[test]
    fn unresolved_names_lists_only_the_missing() {
        let mut catalog = Catalog::new();
        catalog.insert(generic_item("arrow_shaft")).unwrap();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);

        let missing = unresolved_names(&arrow_blueprint(), &resolver);
        assert_eq!(missing, vec!["simple_arrow", "arrowhead", "carving_knife"]);
    }

    #[test]
    fn compile_resolves_result_tools_and_materials() {
        let catalog = stocked_catalog();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let queued = QueuedBlueprint {
            spec: arrow_blueprint(),
            provided_by: "mods/archery".into(),
        };

        let blueprint = compile(&queued, &resolver).unwrap();
        assert_eq!(blueprint.result.name(), "simple_arrow");
        assert_eq!(blueprint.required_tool.unwrap().name(), "carving_knife");
        assert_eq!(blueprint.materials.len(), 2);
        assert_eq!(blueprint.result_count, 1);
    }

    #[test]
    fn flush_failure_names_the_provider() {
        let mut catalog = Catalog::new();
        catalog.insert(generic_item("simple_arrow")).unwrap();
        let resolver = Resolver::new(&catalog, &NoReferenceItems);
        let queued = QueuedBlueprint {
            spec: arrow_blueprint(),
            provided_by: "mods/archery".into(),
        };

        let err = compile(&queued, &resolver).unwrap_err();
        assert_eq!(err.error_code(), "COMPILE_BLUEPRINT_INVALID");
        let text = err.to_string();
        assert!(text.contains("mods/archery"), "{text}");
        assert!(text.contains("out-of-date or installed incorrectly"), "{text}");
    }
}
