//! Compilation errors.
//!
//! Every error is fatal to the one template, blueprint, or skill being
//! compiled and carries enough context (owner name, trait kind, field) to
//! point an author at the offending line of their data. Nothing is retried;
//! compilation is deterministic, so an error means the input must be fixed.
//!
//! One taxonomy entry has no variant here: an unmapped author-enum variant
//! cannot exist at runtime because every translation in
//! [`translate`](crate::translate) is an exhaustive `match`.

use std::fmt;

/// Which descriptor family a reference came from.
///
/// Used in diagnostics only; the compiler dispatches on the descriptors
/// themselves, never on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TraitKind {
    Harvestable,
    Repairable,
    FireStarter,
    Accelerant,
    Stackable,
    Burnable,
    Scent,
    Sharpenable,
    Evolve,
    FirstAid,
    Tool,
    Bed,
    Cookable,
    Food,
    Clothing,
    CookingPot,
    Liquid,
    Rifle,
    Blueprint,
    Skill,
}

/// Where a failed reference was written: owner descriptor, trait, and field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefSource {
    /// Template or blueprint name the reference belongs to.
    pub owner: String,
    pub trait_kind: TraitKind,
    pub field: &'static str,
}

impl RefSource {
    pub fn new(owner: impl Into<String>, trait_kind: TraitKind, field: &'static str) -> Self {
        Self {
            owner: owner.into(),
            trait_kind,
            field,
        }
    }
}

impl fmt::Display for RefSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} of '{}'", self.trait_kind, self.field, self.owner)
    }
}

/// Compilation phase of the [`Compiler`](crate::Compiler) context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Items are being compiled; blueprints/skills queue up.
    Loading,
    /// Item catalog is stable; queued descriptors may flush.
    Committed,
}

/// Errors raised while compiling templates, blueprints, or skills.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CompileError {
    /// A name did not resolve against the catalog or the host's built-ins.
    #[error("item '{name}' not found, referenced by {origin}")]
    UnresolvedReference { name: String, origin: RefSource },

    /// Parallel name/count arrays differ in length.
    #[error(
        "'{names_field}' and '{counts_field}' do not have the same length \
         ({names_len} vs {counts_len}) on '{owner}'"
    )]
    ArityMismatch {
        owner: String,
        names_field: &'static str,
        counts_field: &'static str,
        names_len: usize,
        counts_len: usize,
    },

    /// A built-in reference item the trait clones defaults from is unknown
    /// to the host.
    #[error("reference item '{name}' is unknown to the host (needed by '{template}')")]
    ReferenceNotFound { name: String, template: String },

    /// Catalog misuse: inserting a name that is already present. The
    /// orchestrator's idempotency guard makes this unreachable through
    /// normal compilation.
    #[error("catalog already contains an item named '{name}'")]
    DuplicateName { name: String },

    /// Blueprint validation or flush failure, attributed to whoever
    /// provided the blueprint.
    #[error(
        "validation of blueprint '{name}' failed: {source}\n\
         The blueprint was provided by '{provided_by}', which may be \
         out-of-date or installed incorrectly."
    )]
    Blueprint {
        name: String,
        provided_by: String,
        #[source]
        source: Box<CompileError>,
    },

    /// An operation was invoked in the wrong compilation phase.
    #[error("{operation} is not allowed in the {phase} phase")]
    PhaseViolation {
        operation: &'static str,
        phase: Phase,
    },
}

impl CompileError {
    /// Stable machine-readable code for host diagnostics.
    pub fn error_code(&self) -> &'static str {
        use CompileError::*;
        match self {
            UnresolvedReference { .. } => "COMPILE_UNRESOLVED_REFERENCE",
            ArityMismatch { .. } => "COMPILE_ARITY_MISMATCH",
            ReferenceNotFound { .. } => "COMPILE_REFERENCE_NOT_FOUND",
            DuplicateName { .. } => "COMPILE_DUPLICATE_NAME",
            Blueprint { .. } => "COMPILE_BLUEPRINT_INVALID",
            PhaseViolation { .. } => "COMPILE_PHASE_VIOLATION",
        }
    }

    /// Wraps an error raised while validating or flushing a blueprint.
    pub(crate) fn for_blueprint(
        name: impl Into<String>,
        provided_by: impl Into<String>,
        source: CompileError,
    ) -> Self {
        CompileError::Blueprint {
            name: name.into(),
            provided_by: provided_by.into(),
            source: Box::new(source),
        }
    }
}
