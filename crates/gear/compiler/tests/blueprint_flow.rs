use std::cell::RefCell;
use std::rc::Rc;

use gear_compiler::{
    BlueprintSink, CompiledBlueprint, CompiledSkill, Compiler, CompilerConfig, SkillSink,
};
use gear_schema::{BlueprintSpec, SkillSpec, Template, ToolSpec};

#[test]
fn blueprints_may_reference_items_compiled_after_them() {
    let delivered: Rc<RefCell<Vec<CompiledBlueprint>>> = Rc::default();
    let mut compiler = Compiler::new(CompilerConfig::default())
        .with_blueprint_sink(BlueprintLog(delivered.clone()));

    // Registered before any of its items exist.
    compiler
        .register_blueprint(arrow_blueprint(), "mods/archery")
        .expect("registration only checks structure");

    compiler.compile(&Template::new("simple_arrow")).unwrap();
    compiler.compile(&Template::new("arrow_shaft")).unwrap();
    compiler.compile(&Template::new("arrowhead")).unwrap();
    compiler
        .compile(&Template::new("carving_knife").with_tool(ToolSpec::default()))
        .unwrap();

    compiler.commit_items().unwrap();
    let flushed = compiler.flush_deferred().unwrap();

    assert_eq!(flushed.blueprints.len(), 1);
    let blueprint = &flushed.blueprints[0];
    assert_eq!(blueprint.result.name(), "simple_arrow");
    assert_eq!(blueprint.materials.len(), 2);
    assert_eq!(blueprint.required_tool.as_ref().unwrap().name(), "carving_knife");
    assert_eq!(*delivered.borrow(), flushed.blueprints);
}

#[test]
fn missing_item_at_flush_blames_the_provider() {
    let delivered: Rc<RefCell<Vec<CompiledBlueprint>>> = Rc::default();
    let mut compiler = Compiler::new(CompilerConfig::default())
        .with_blueprint_sink(BlueprintLog(delivered.clone()));
    compiler
        .register_blueprint(arrow_blueprint(), "mods/archery")
        .unwrap();

    // Only part of the referenced items ever compile.
    compiler.compile(&Template::new("simple_arrow")).unwrap();
    compiler.commit_items().unwrap();

    let err = compiler.flush_deferred().unwrap_err();
    assert_eq!(err.error_code(), "COMPILE_BLUEPRINT_INVALID");
    let text = err.to_string();
    assert!(text.contains("blueprint_arrow"), "{text}");
    assert!(text.contains("mods/archery"), "{text}");
    assert!(text.contains("out-of-date or installed incorrectly"), "{text}");
    // The failed blueprint stays queued for a corrected retry.
    assert_eq!(compiler.pending_blueprints(), 1);
}

#[test]
fn flush_without_a_registry_keeps_the_queue() {
    let mut compiler = Compiler::new(CompilerConfig::default());
    compiler
        .register_blueprint(arrow_blueprint(), "mods/archery")
        .unwrap();
    compiler.compile(&Template::new("simple_arrow")).unwrap();
    compiler.compile(&Template::new("arrow_shaft")).unwrap();
    compiler.compile(&Template::new("arrowhead")).unwrap();
    compiler
        .compile(&Template::new("carving_knife").with_tool(ToolSpec::default()))
        .unwrap();
    compiler.commit_items().unwrap();

    // No blueprint registry yet: nothing flushes, nothing is lost.
    let flushed = compiler.flush_deferred().unwrap();
    assert!(flushed.blueprints.is_empty());
    assert_eq!(compiler.pending_blueprints(), 1);

    let delivered: Rc<RefCell<Vec<CompiledBlueprint>>> = Rc::default();
    compiler.attach_blueprint_sink(BlueprintLog(delivered.clone()));

    let flushed = compiler.flush_deferred().unwrap();
    assert_eq!(flushed.blueprints.len(), 1);
    assert_eq!(compiler.pending_blueprints(), 0);
    assert_eq!(delivered.borrow().len(), 1);
}

#[test]
fn failed_flush_delivers_nothing_to_sinks() {
    let delivered: Rc<RefCell<Vec<CompiledBlueprint>>> = Rc::default();
    let mut compiler = Compiler::new(CompilerConfig::default())
        .with_blueprint_sink(BlueprintLog(delivered.clone()));

    compiler
        .register_blueprint(arrow_blueprint(), "mods/archery")
        .unwrap();
    compiler.commit_items().unwrap();

    compiler.flush_deferred().unwrap_err();
    assert!(delivered.borrow().is_empty());
}

#[test]
fn mismatched_material_arrays_fail_at_registration() {
    let mut compiler = Compiler::new(CompilerConfig::default());

    let mut spec = arrow_blueprint();
    spec.material_counts = vec![1];

    let err = compiler.register_blueprint(spec, "mods/archery").unwrap_err();
    assert_eq!(err.error_code(), "COMPILE_BLUEPRINT_INVALID");
    let text = err.to_string();
    assert!(text.contains("material_names"), "{text}");
    assert!(text.contains("mods/archery"), "{text}");
}

#[test]
fn skills_flush_in_registration_order() {
    let delivered: Rc<RefCell<Vec<CompiledSkill>>> = Rc::default();
    let mut compiler =
        Compiler::new(CompilerConfig::default()).with_skill_sink(SkillLog(delivered.clone()));

    compiler.register_skill(named_skill("skill_gunsmithing")).unwrap();
    compiler.register_skill(named_skill("skill_whittling")).unwrap();
    compiler.commit_items().unwrap();

    let flushed = compiler.flush_deferred().unwrap();
    assert_eq!(flushed.skills.len(), 2);
    assert_eq!(flushed.skills[0].name, "skill_gunsmithing");
    assert_eq!(flushed.skills[0].ordinal, 0);
    assert_eq!(flushed.skills[1].name, "skill_whittling");
    assert_eq!(flushed.skills[1].ordinal, 1);
    assert_eq!(*delivered.borrow(), flushed.skills);
}

#[test]
fn second_flush_has_nothing_left() {
    let delivered: Rc<RefCell<Vec<CompiledSkill>>> = Rc::default();
    let mut compiler =
        Compiler::new(CompilerConfig::default()).with_skill_sink(SkillLog(delivered.clone()));
    compiler.register_skill(named_skill("skill_whittling")).unwrap();
    compiler.commit_items().unwrap();

    assert_eq!(compiler.flush_deferred().unwrap().skills.len(), 1);
    let again = compiler.flush_deferred().unwrap();
    assert!(again.blueprints.is_empty());
    assert!(again.skills.is_empty());
    assert_eq!(delivered.borrow().len(), 1);
}

#[test]
fn registration_is_rejected_after_commit() {
    let mut compiler = Compiler::new(CompilerConfig::default());
    compiler.commit_items().unwrap();

    let err = compiler
        .register_blueprint(arrow_blueprint(), "mods/archery")
        .unwrap_err();
    assert_eq!(err.error_code(), "COMPILE_PHASE_VIOLATION");

    let err = compiler.register_skill(named_skill("skill_whittling")).unwrap_err();
    assert_eq!(err.error_code(), "COMPILE_PHASE_VIOLATION");
}

fn arrow_blueprint() -> BlueprintSpec {
    BlueprintSpec {
        name: "blueprint_arrow".into(),
        duration_minutes: 30.0,
        requires_workbench: true,
        crafted_result: "simple_arrow".into(),
        crafted_result_count: 1,
        required_tool: Some("carving_knife".into()),
        material_names: vec!["arrow_shaft".into(), "arrowhead".into()],
        material_counts: vec![1, 1],
        ..BlueprintSpec::default()
    }
}

fn named_skill(name: &str) -> SkillSpec {
    SkillSpec {
        name: name.into(),
        display_name_key: format!("GAMEPLAY_{name}"),
        points_tier2: 25,
        points_tier3: 75,
        points_tier4: 150,
        points_tier5: 300,
        ..SkillSpec::default()
    }
}

struct BlueprintLog(Rc<RefCell<Vec<CompiledBlueprint>>>);

impl BlueprintSink for BlueprintLog {
    fn accept(&mut self, blueprint: &CompiledBlueprint) {
        self.0.borrow_mut().push(blueprint.clone());
    }
}

struct SkillLog(Rc<RefCell<Vec<CompiledSkill>>>);

impl SkillSink for SkillLog {
    fn accept(&mut self, skill: &CompiledSkill) {
        self.0.borrow_mut().push(skill.clone());
    }
}
