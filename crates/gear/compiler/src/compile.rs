//! The compilation context and its two-phase driver.
//!
//! Phase one: templates compile into the catalog one by one, each seeing
//! every item compiled before it plus the host's built-ins. Blueprints and
//! skills only queue during this phase, because they may reference items
//! that have not been compiled yet.
//!
//! Phase two: after [`Compiler::commit_items`] freezes the catalog,
//! [`Compiler::flush_deferred`] resolves the queued descriptors against
//! the complete item set and hands them to the host's sinks.

use gear_schema::{BlueprintSpec, FoodSpec, LiquidKind, SkillSpec, Template, TemplateKind};
use tracing::{debug, info, warn};

use crate::blueprint::{self, CompiledBlueprint, QueuedBlueprint};
use crate::catalog::{Catalog, Resolver};
use crate::config::CompilerConfig;
use crate::derive::decay_per_step;
use crate::error::{CompileError, Phase};
use crate::host::{
    BlueprintSink, FinalizeHook, NoReferenceItems, RadialRegistrar, ReferenceOracle, SkillSink,
};
use crate::item::{CompiledItem, ConditionTable, GearCategory, GearItem, ItemKind};
use crate::skill::{self, CompiledSkill};
use crate::traits::{clothing, cooking, food, harvest, ignition, rifle, utility};
use crate::translate;

/// Everything resolved by a deferred flush.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlushOutcome {
    pub blueprints: Vec<CompiledBlueprint>,
    pub skills: Vec<CompiledSkill>,
}

/// Compilation context for one load session.
pub struct Compiler {
    config: CompilerConfig,
    catalog: Catalog,
    phase: Phase,
    reference: Box<dyn ReferenceOracle>,
    finalizers: Vec<Box<dyn FinalizeHook>>,
    radial: Option<Box<dyn RadialRegistrar>>,
    blueprint_sink: Option<Box<dyn BlueprintSink>>,
    skill_sink: Option<Box<dyn SkillSink>>,
    queued_blueprints: Vec<QueuedBlueprint>,
    queued_skills: Vec<SkillSpec>,
    skills_emitted: u32,
}

impl Compiler {
    /// Opens a load session with no host attachments.
    pub fn new(config: CompilerConfig) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            phase: Phase::Loading,
            reference: Box::new(NoReferenceItems),
            finalizers: Vec::new(),
            radial: None,
            blueprint_sink: None,
            skill_sink: None,
            queued_blueprints: Vec::new(),
            queued_skills: Vec::new(),
            skills_emitted: 0,
        }
    }

    // ===== host attachments =====

    pub fn with_reference_oracle(mut self, oracle: impl ReferenceOracle + 'static) -> Self {
        self.reference = Box::new(oracle);
        self
    }

    /// Hooks run per item in attachment order, after trait compilation and
    /// before the catalog insert.
    pub fn with_finalize_hook(mut self, hook: impl FinalizeHook + 'static) -> Self {
        self.finalizers.push(Box::new(hook));
        self
    }

    pub fn with_radial_registrar(mut self, registrar: impl RadialRegistrar + 'static) -> Self {
        self.radial = Some(Box::new(registrar));
        self
    }

    pub fn with_blueprint_sink(mut self, sink: impl BlueprintSink + 'static) -> Self {
        self.attach_blueprint_sink(sink);
        self
    }

    pub fn with_skill_sink(mut self, sink: impl SkillSink + 'static) -> Self {
        self.attach_skill_sink(sink);
        self
    }

    /// Registries may come up after loading has begun; attaching one later
    /// and flushing again picks up anything still queued.
    pub fn attach_blueprint_sink(&mut self, sink: impl BlueprintSink + 'static) {
        self.blueprint_sink = Some(Box::new(sink));
    }

    pub fn attach_skill_sink(&mut self, sink: impl SkillSink + 'static) {
        self.skill_sink = Some(Box::new(sink));
    }

    // ===== phase one: items =====

    /// Compiles one template into the catalog.
    ///
    /// A name already in the catalog is skipped without touching it, so
    /// re-sending a template is harmless and hooks run at most once per
    /// item. Any error leaves the catalog exactly as it was.
    pub fn compile(&mut self, template: &Template) -> Result<(), CompileError> {
        self.ensure_phase(Phase::Loading, "compile")?;
        if self.catalog.contains(&template.name) {
            debug!(item = %template.name, "already in catalog, skipping");
            return Ok(());
        }

        let mut item = self.compile_item(template)?;

        for hook in &self.finalizers {
            if let Err(err) = hook.apply(&mut item) {
                warn!(hook = hook.name(), item = %item.name, error = %err, "finalize hook failed, skipping");
            }
        }

        if let Some(radial) = &mut self.radial
            && let Some(category) = template.radial
        {
            radial.register(&item.name, category);
        }

        debug!(item = %item.name, category = %item.base.category, "compiled");
        self.catalog.insert(item)
    }

    /// Queues a blueprint for the post-commit flush.
    ///
    /// Structural problems fail here; names that do not resolve yet are
    /// only warned about, since the items may simply come later in the
    /// load. `provided_by` identifies the component that supplied the
    /// blueprint for error attribution.
    pub fn register_blueprint(
        &mut self,
        spec: BlueprintSpec,
        provided_by: impl Into<String>,
    ) -> Result<(), CompileError> {
        self.ensure_phase(Phase::Loading, "register_blueprint")?;
        let provided_by = provided_by.into();

        blueprint::validate(&spec)
            .map_err(|err| CompileError::for_blueprint(&spec.name, &provided_by, err))?;

        let resolver = Resolver::new(&self.catalog, self.reference.as_ref());
        let missing = blueprint::unresolved_names(&spec, &resolver);
        if !missing.is_empty() {
            warn!(
                blueprint = %spec.name,
                provider = %provided_by,
                ?missing,
                "blueprint references items that are not compiled yet, resolution deferred to flush"
            );
        }

        self.queued_blueprints.push(QueuedBlueprint { spec, provided_by });
        Ok(())
    }

    /// Queues a skill for the post-commit flush.
    pub fn register_skill(&mut self, spec: SkillSpec) -> Result<(), CompileError> {
        self.ensure_phase(Phase::Loading, "register_skill")?;
        self.queued_skills.push(spec);
        Ok(())
    }

    // ===== phase two: crafting data =====

    /// Freezes the item catalog and moves to the flush phase.
    pub fn commit_items(&mut self) -> Result<(), CompileError> {
        self.ensure_phase(Phase::Loading, "commit_items")?;
        self.phase = Phase::Committed;
        info!(items = self.catalog.len(), "item catalog committed");
        Ok(())
    }

    /// Resolves queued blueprints and skills against the committed catalog
    /// and delivers them to their registries.
    ///
    /// A family whose registry is not attached stays queued instead of
    /// failing; a later flush picks it up. All of a family's descriptors
    /// are compiled before its sink sees one, so a failing blueprint
    /// delivers nothing and leaves its queue untouched.
    pub fn flush_deferred(&mut self) -> Result<FlushOutcome, CompileError> {
        self.ensure_phase(Phase::Committed, "flush_deferred")?;

        let mut outcome = FlushOutcome::default();

        if let Some(sink) = &mut self.blueprint_sink {
            let resolver = Resolver::new(&self.catalog, self.reference.as_ref());
            let mut blueprints = Vec::with_capacity(self.queued_blueprints.len());
            for queued in &self.queued_blueprints {
                blueprints.push(blueprint::compile(queued, &resolver)?);
            }
            self.queued_blueprints.clear();
            for compiled in &blueprints {
                sink.accept(compiled);
            }
            outcome.blueprints = blueprints;
        } else if !self.queued_blueprints.is_empty() {
            debug!(
                queued = self.queued_blueprints.len(),
                "no blueprint registry attached, flush deferred"
            );
        }

        if let Some(sink) = &mut self.skill_sink {
            let mut skills = Vec::with_capacity(self.queued_skills.len());
            for spec in &self.queued_skills {
                skills.push(skill::compile(spec, self.skills_emitted));
                self.skills_emitted += 1;
            }
            self.queued_skills.clear();
            for compiled in &skills {
                sink.accept(compiled);
            }
            outcome.skills = skills;
        } else if !self.queued_skills.is_empty() {
            debug!(
                queued = self.queued_skills.len(),
                "no skill registry attached, flush deferred"
            );
        }

        info!(
            blueprints = outcome.blueprints.len(),
            skills = outcome.skills.len(),
            "deferred crafting data flushed"
        );
        Ok(outcome)
    }

    // ===== access =====

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Blueprints still waiting for a registry or a flush.
    pub fn pending_blueprints(&self) -> usize {
        self.queued_blueprints.len()
    }

    /// Skills still waiting for a registry or a flush.
    pub fn pending_skills(&self) -> usize {
        self.queued_skills.len()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    // ===== internals =====

    fn ensure_phase(&self, expected: Phase, operation: &'static str) -> Result<(), CompileError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(CompileError::PhaseViolation {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Runs every applicable trait compiler in the fixed order and
    /// assembles the item. The fire-starter compiler must run before the
    /// accelerant compiler; their shared module depends on it.
    fn compile_item(&self, template: &Template) -> Result<CompiledItem, CompileError> {
        let resolver = Resolver::new(&self.catalog, self.reference.as_ref());
        let owner = template.name.as_str();

        let harvest = template
            .harvestable
            .as_ref()
            .map(|spec| harvest::harvestable(owner, spec, &resolver))
            .transpose()?;
        let repair = template
            .repairable
            .as_ref()
            .map(|spec| harvest::repairable(owner, spec, &resolver))
            .transpose()?;

        let mut fire = None;
        if let Some(spec) = &template.fire_starter {
            ignition::fire_starter(&mut fire, template, spec);
        }
        if let Some(spec) = &template.accelerant {
            ignition::accelerant(&mut fire, spec);
        }

        let stack = template
            .stackable
            .as_ref()
            .map(|spec| utility::stackable(template, spec));
        let fuel = template.burnable.as_ref().map(ignition::burnable);
        let scent = template.scent.as_ref().map(utility::scent);
        let sharpening = template
            .sharpenable
            .as_ref()
            .map(|spec| harvest::sharpenable(owner, spec, &resolver))
            .transpose()?;
        let evolution = template
            .evolve
            .as_ref()
            .map(|spec| utility::evolve(owner, spec, &resolver))
            .transpose()?;
        let first_aid = template.first_aid.as_ref().map(utility::first_aid);
        let tool = template.tool.as_ref().map(|spec| utility::tool(template, spec));
        let bed = template.bed.as_ref().map(|spec| utility::bed(template, spec));
        let cookable = template
            .cookable
            .as_ref()
            .map(|spec| cooking::cookable(owner, spec, &resolver))
            .transpose()?;

        let kind = match &template.kind {
            TemplateKind::Generic => ItemKind::Generic,
            TemplateKind::Food(spec) => {
                ItemKind::Food(food::food(template, spec, &self.config, &resolver)?)
            }
            TemplateKind::Clothing(spec) => ItemKind::Clothing(clothing::clothing(template, spec)),
            TemplateKind::CookingPot(spec) => {
                ItemKind::CookingPot(cooking::cooking_pot(owner, spec, self.reference.as_ref())?)
            }
            TemplateKind::Liquid(spec) => ItemKind::Liquid(cooking::liquid(spec)),
            TemplateKind::Rifle(spec) => ItemKind::Rifle(rifle::rifle(
                template,
                spec,
                &self.config,
                self.reference.as_ref(),
                &resolver,
            )?),
        };

        let condition_table = match &template.kind {
            TemplateKind::Food(spec) => infer_condition_table(spec),
            _ => ConditionTable::Unknown,
        };

        let base = GearItem {
            category: infer_category(template),
            weight_kg: template.weight_kg,
            max_condition: template.max_condition,
            daily_decay: decay_per_step(template.days_to_decay, template.max_condition),
            start_condition: translate::start_condition(template.initial_condition),
            display_name_key: template.display_name_key.clone(),
            description_key: template.description_key.clone(),
            pickup_audio: template.pickup_audio.clone(),
            putback_audio: template.pickup_audio.clone(),
            stow_audio: template.stow_audio.clone(),
            wornout_audio: template.wornout_audio.clone(),
            condition_table,
            scent_intensity: scent.as_ref().map_or(0.0, |profile| profile.intensity),
            console_name: template.effective_console_name().to_owned(),
        };

        Ok(CompiledItem {
            name: template.name.clone(),
            base,
            kind,
            harvest,
            repair,
            ignition: fire,
            stack,
            fuel,
            scent,
            sharpening,
            evolution,
            first_aid,
            tool,
            bed,
            cookable,
        })
    }
}

/// Picks the inventory category when the author did not force one.
///
/// Priority: tool trait, then anything edible, then clothing, then
/// anything fire-related.
fn infer_category(template: &Template) -> GearCategory {
    if let Some(category) = template.category_override {
        return translate::gear_category(category);
    }
    if template.tool.is_some() {
        return GearCategory::Tool;
    }
    let edible = matches!(template.kind, TemplateKind::Food(_))
        || template.cookable.is_some()
        || matches!(&template.kind, TemplateKind::Liquid(spec) if spec.kind == LiquidKind::Water);
    if edible {
        return GearCategory::Food;
    }
    if matches!(template.kind, TemplateKind::Clothing(_)) {
        return GearCategory::Clothing;
    }
    if template.is_fire_starting() || template.burnable.is_some() {
        return GearCategory::Firestarting;
    }
    GearCategory::Other
}

fn infer_condition_table(spec: &FoodSpec) -> ConditionTable {
    let canned = spec.opening.as_ref().is_some_and(|opening| opening.canned);
    if canned {
        ConditionTable::CannedFood
    } else if spec.meat {
        ConditionTable::Meat
    } else if !spec.natural && !spec.drink {
        ConditionTable::DryFood
    } else {
        ConditionTable::Unknown
    }
}
