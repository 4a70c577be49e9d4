//! The compiled item catalog and the name resolver layered on top of it.

use std::collections::{HashMap, HashSet};

use crate::error::{CompileError, RefSource};
use crate::host::ReferenceOracle;
use crate::item::{CompiledItem, GearRef, GearStack, ToolRef};

/// Owns every compiled item, keyed by unique name.
///
/// A separate namespace tracks which of those names are tools, so tool
/// references can be checked without fetching the item.
#[derive(Debug, Default)]
pub struct Catalog {
    items: HashMap<String, CompiledItem>,
    tools: HashSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a compiled item under its unique name.
    ///
    /// Tool-trait items are also recorded in the tool namespace.
    pub fn insert(&mut self, item: CompiledItem) -> Result<(), CompileError> {
        if self.items.contains_key(&item.name) {
            return Err(CompileError::DuplicateName {
                name: item.name.clone(),
            });
        }
        if item.is_tool() {
            self.tools.insert(item.name.clone());
        }
        self.items.insert(item.name.clone(), item);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CompiledItem> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn contains_tool(&self, name: &str) -> bool {
        self.tools.contains(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledItem> {
        self.items.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

/// Checks names against the catalog first, then the host's built-ins.
///
/// Successful lookups come back as validated [`GearRef`] / [`ToolRef`]
/// values; failures carry the [`RefSource`] that named them.
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    host: &'a dyn ReferenceOracle,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(catalog: &'a Catalog, host: &'a dyn ReferenceOracle) -> Self {
        Self { catalog, host }
    }

    pub fn resolve_gear(&self, name: &str, origin: RefSource) -> Result<GearRef, CompileError> {
        if self.catalog.contains(name) || self.host.contains_gear(name) {
            Ok(GearRef::new(name))
        } else {
            Err(CompileError::UnresolvedReference {
                name: name.to_owned(),
                origin,
            })
        }
    }

    /// Resolves a built-in named by configuration rather than by an author.
    ///
    /// Misses report the template that needed the built-in, since the
    /// author has no field to fix.
    pub fn resolve_builtin(&self, name: &str, template: &str) -> Result<GearRef, CompileError> {
        if self.catalog.contains(name) || self.host.contains_gear(name) {
            Ok(GearRef::new(name))
        } else {
            Err(CompileError::ReferenceNotFound {
                name: name.to_owned(),
                template: template.to_owned(),
            })
        }
    }

    pub fn resolve_tool(&self, name: &str, origin: RefSource) -> Result<ToolRef, CompileError> {
        if self.catalog.contains_tool(name) || self.host.contains_tool(name) {
            Ok(ToolRef::new(name))
        } else {
            Err(CompileError::UnresolvedReference {
                name: name.to_owned(),
                origin,
            })
        }
    }

    /// Tool-namespace counterpart of [`resolve_builtin`](Self::resolve_builtin).
    pub fn resolve_builtin_tool(
        &self,
        name: &str,
        template: &str,
    ) -> Result<ToolRef, CompileError> {
        if self.catalog.contains_tool(name) || self.host.contains_tool(name) {
            Ok(ToolRef::new(name))
        } else {
            Err(CompileError::ReferenceNotFound {
                name: name.to_owned(),
                template: template.to_owned(),
            })
        }
    }

    /// Resolves parallel name/count arrays into counted stacks.
    ///
    /// The arrays must have equal length; `source.field` names the name
    /// array in diagnostics.
    pub fn resolve_stacks(
        &self,
        names: &[String],
        counts: &[u32],
        source: &RefSource,
        counts_field: &'static str,
    ) -> Result<Vec<GearStack>, CompileError> {
        if names.len() != counts.len() {
            return Err(CompileError::ArityMismatch {
                owner: source.owner.clone(),
                names_field: source.field,
                counts_field,
                names_len: names.len(),
                counts_len: counts.len(),
            });
        }
        names
            .iter()
            .zip(counts)
            .map(|(name, &units)| {
                let item = self.resolve_gear(name, source.clone())?;
                Ok(GearStack { item, units })
            })
            .collect()
    }

    /// Resolves a list of alternative tools, any one of which satisfies
    /// the requirement.
    pub fn resolve_tool_choices(
        &self,
        names: &[String],
        source: &RefSource,
    ) -> Result<Vec<ToolRef>, CompileError> {
        names
            .iter()
            .map(|name| self.resolve_tool(name, source.clone()))
            .collect()
    }
}
