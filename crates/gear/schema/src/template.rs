//! The author-facing item template.

use crate::enums::{InitialCondition, InventoryCategory, RadialCategory};
use crate::kind::TemplateKind;
use crate::traits::{
    AccelerantSpec, BedSpec, BurnableSpec, CookableSpec, EvolveSpec, FireStarterSpec,
    FirstAidSpec, HarvestableSpec, RepairableSpec, ScentSpec, SharpenableSpec, StackableSpec,
    ToolSpec,
};

/// One declarative item description: a mandatory base record, an exclusive
/// [`TemplateKind`], and any number of composable trait descriptors.
///
/// Templates are read-only inputs to the compiler. They carry names, never
/// references; every name is resolved against the catalog (or the host's
/// built-in items) during compilation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Template {
    /// Unique item name, the key under which the compiled item is cataloged.
    pub name: String,
    pub display_name_key: String,
    pub description_key: String,
    pub weight_kg: f32,
    /// Maximum durability; every wear-out derivation is a share of this.
    pub max_condition: f32,
    /// Days until a full-condition item decays to zero; zero disables decay.
    pub days_to_decay: f32,
    pub initial_condition: InitialCondition,
    /// Skips category inference when set.
    pub category_override: Option<InventoryCategory>,
    /// Registers the item in a radial-menu section when set.
    pub radial: Option<RadialCategory>,
    /// Debug-console name; derived from `name` when omitted.
    pub console_name: Option<String>,
    pub pickup_audio: Option<String>,
    pub stow_audio: Option<String>,
    pub wornout_audio: Option<String>,

    pub kind: TemplateKind,

    pub harvestable: Option<HarvestableSpec>,
    pub repairable: Option<RepairableSpec>,
    pub fire_starter: Option<FireStarterSpec>,
    pub accelerant: Option<AccelerantSpec>,
    pub stackable: Option<StackableSpec>,
    pub burnable: Option<BurnableSpec>,
    pub scent: Option<ScentSpec>,
    pub sharpenable: Option<SharpenableSpec>,
    pub evolve: Option<EvolveSpec>,
    pub first_aid: Option<FirstAidSpec>,
    pub tool: Option<ToolSpec>,
    pub bed: Option<BedSpec>,
    pub cookable: Option<CookableSpec>,
}

impl Template {
    /// Creates a template with the given name and neutral base values
    /// (100 max condition, no decay, no traits).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name_key: String::new(),
            description_key: String::new(),
            weight_kg: 0.0,
            max_condition: 100.0,
            days_to_decay: 0.0,
            initial_condition: InitialCondition::Random,
            category_override: None,
            radial: None,
            console_name: None,
            pickup_audio: None,
            stow_audio: None,
            wornout_audio: None,
            kind: TemplateKind::Generic,
            harvestable: None,
            repairable: None,
            fire_starter: None,
            accelerant: None,
            stackable: None,
            burnable: None,
            scent: None,
            sharpenable: None,
            evolve: None,
            first_aid: None,
            tool: None,
            bed: None,
            cookable: None,
        }
    }

    /// True when either fire-starting trait is attached.
    pub fn is_fire_starting(&self) -> bool {
        self.fire_starter.is_some() || self.accelerant.is_some()
    }

    /// Console name to register: the explicit one, else the item name.
    pub fn effective_console_name(&self) -> &str {
        self.console_name.as_deref().unwrap_or(&self.name)
    }

    // ===== base record =====

    pub fn with_display(mut self, name_key: impl Into<String>, description_key: impl Into<String>) -> Self {
        self.display_name_key = name_key.into();
        self.description_key = description_key.into();
        self
    }

    pub fn with_weight_kg(mut self, weight_kg: f32) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    pub fn with_max_condition(mut self, max_condition: f32) -> Self {
        self.max_condition = max_condition;
        self
    }

    pub fn with_days_to_decay(mut self, days: f32) -> Self {
        self.days_to_decay = days;
        self
    }

    pub fn with_initial_condition(mut self, condition: InitialCondition) -> Self {
        self.initial_condition = condition;
        self
    }

    pub fn with_category_override(mut self, category: InventoryCategory) -> Self {
        self.category_override = Some(category);
        self
    }

    pub fn with_radial(mut self, radial: RadialCategory) -> Self {
        self.radial = Some(radial);
        self
    }

    pub fn with_console_name(mut self, console_name: impl Into<String>) -> Self {
        self.console_name = Some(console_name.into());
        self
    }

    pub fn with_pickup_audio(mut self, audio: impl Into<String>) -> Self {
        self.pickup_audio = Some(audio.into());
        self
    }

    pub fn with_stow_audio(mut self, audio: impl Into<String>) -> Self {
        self.stow_audio = Some(audio.into());
        self
    }

    pub fn with_wornout_audio(mut self, audio: impl Into<String>) -> Self {
        self.wornout_audio = Some(audio.into());
        self
    }

    // ===== exclusive kind =====

    pub fn with_kind(mut self, kind: TemplateKind) -> Self {
        self.kind = kind;
        self
    }

    // ===== composable traits =====

    pub fn with_harvestable(mut self, spec: HarvestableSpec) -> Self {
        self.harvestable = Some(spec);
        self
    }

    pub fn with_repairable(mut self, spec: RepairableSpec) -> Self {
        self.repairable = Some(spec);
        self
    }

    pub fn with_fire_starter(mut self, spec: FireStarterSpec) -> Self {
        self.fire_starter = Some(spec);
        self
    }

    pub fn with_accelerant(mut self, spec: AccelerantSpec) -> Self {
        self.accelerant = Some(spec);
        self
    }

    pub fn with_stackable(mut self, spec: StackableSpec) -> Self {
        self.stackable = Some(spec);
        self
    }

    pub fn with_burnable(mut self, spec: BurnableSpec) -> Self {
        self.burnable = Some(spec);
        self
    }

    pub fn with_scent(mut self, spec: ScentSpec) -> Self {
        self.scent = Some(spec);
        self
    }

    pub fn with_sharpenable(mut self, spec: SharpenableSpec) -> Self {
        self.sharpenable = Some(spec);
        self
    }

    pub fn with_evolve(mut self, spec: EvolveSpec) -> Self {
        self.evolve = Some(spec);
        self
    }

    pub fn with_first_aid(mut self, spec: FirstAidSpec) -> Self {
        self.first_aid = Some(spec);
        self
    }

    pub fn with_tool(mut self, spec: ToolSpec) -> Self {
        self.tool = Some(spec);
        self
    }

    pub fn with_bed(mut self, spec: BedSpec) -> Self {
        self.bed = Some(spec);
        self
    }

    pub fn with_cookable(mut self, spec: CookableSpec) -> Self {
        self.cookable = Some(spec);
        self
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new("")
    }
}
