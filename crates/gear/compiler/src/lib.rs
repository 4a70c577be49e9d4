//! Trait-composition compiler for modded survival gear.
//!
//! Authors describe items as a [`gear_schema::Template`]: one base record,
//! an exclusive kind, and any mix of composable traits. This crate compiles
//! those descriptions into runtime [`CompiledItem`]s inside a [`Catalog`],
//! validating every cross-reference on the way.
//!
//! Loading is two-phased. Items compile first, in dependency-friendly
//! order but without any ordering requirement between unrelated items.
//! Blueprints and skills queue during that phase and flush only after the
//! catalog is committed, so they may freely reference items from any mod
//! regardless of load order.
//!
//! ```
//! use gear_compiler::{Compiler, CompilerConfig};
//! use gear_schema::Template;
//!
//! let mut compiler = Compiler::new(CompilerConfig::default());
//! compiler.compile(&Template::new("cedar_kindling"))?;
//! compiler.commit_items()?;
//! let flushed = compiler.flush_deferred()?;
//! assert!(flushed.blueprints.is_empty());
//! # Ok::<(), gear_compiler::CompileError>(())
//! ```

pub mod blueprint;
pub mod catalog;
pub mod compile;
pub mod config;
pub mod derive;
pub mod error;
pub mod host;
pub mod item;
pub mod skill;

mod traits;
mod translate;

#[cfg(test)]
mod test_support;

pub use blueprint::CompiledBlueprint;
pub use catalog::{Catalog, Resolver};
pub use compile::{Compiler, FlushOutcome};
pub use config::CompilerConfig;
pub use error::{CompileError, Phase, RefSource, TraitKind};
pub use host::{
    BlueprintSink, FinalizeHook, NoReferenceItems, PotDefaults, RadialRegistrar, ReferenceOracle,
    RifleDefaults, SkillSink,
};
pub use item::{
    CompiledItem, ConditionTable, GearCategory, GearItem, GearRef, ItemKind, StartCondition,
    ToolRef,
};
pub use skill::CompiledSkill;
