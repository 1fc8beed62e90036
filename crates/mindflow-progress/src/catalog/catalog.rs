//! Module catalog: read-only lookup over the configured modules.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ProgressError, Result};

use super::builtin::builtin_modules;
use super::types::{Module, ModuleCode};

/// Immutable set of modules, iterated in display order.
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    modules: Vec<Module>,
    index: HashMap<ModuleCode, usize>,
}

impl ModuleCatalog {
    /// Build a catalog from a module list.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidCatalog` if two modules share a code or
    /// a module uses the reserved [`ModuleCode::MASTER`] code.
    pub fn from_modules(mut modules: Vec<Module>) -> Result<Self> {
        modules.sort_by_key(|m| m.display_order);

        let mut index = HashMap::with_capacity(modules.len());
        for (i, module) in modules.iter().enumerate() {
            if module.code.is_master() {
                return Err(ProgressError::InvalidCatalog(format!(
                    "module code {} is reserved",
                    module.code
                )));
            }
            if index.insert(module.code.clone(), i).is_some() {
                return Err(ProgressError::InvalidCatalog(format!(
                    "duplicate module code: {}",
                    module.code
                )));
            }
        }

        let catalog = Self { modules, index };
        catalog.warn_dangling_references();
        Ok(catalog)
    }

    /// The shipped catalog.
    pub fn builtin() -> Self {
        let modules = builtin_modules();
        let index = modules
            .iter()
            .enumerate()
            .map(|(i, m)| (m.code.clone(), i))
            .collect();
        Self { modules, index }
    }

    /// Parse a catalog from a JSON array of modules.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidFileFormat` if the JSON does not match
    /// the module schema, or `ProgressError::InvalidCatalog` on duplicates.
    pub fn from_json(json: &str) -> Result<Self> {
        let modules: Vec<Module> = serde_json::from_str(json)
            .map_err(|e| ProgressError::InvalidFileFormat(format!("catalog: {e}")))?;
        Self::from_modules(modules)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Look up a module by code.
    pub fn get(&self, code: &ModuleCode) -> Option<&Module> {
        self.index.get(code).map(|&i| &self.modules[i])
    }

    /// Look up a module by code, failing if absent.
    pub fn require(&self, code: &ModuleCode) -> Result<&Module> {
        self.get(code)
            .ok_or_else(|| ProgressError::UnknownModule(code.to_string()))
    }

    pub fn contains(&self, code: &ModuleCode) -> bool {
        self.index.contains_key(code)
    }

    /// Modules in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    fn warn_dangling_references(&self) {
        for module in &self.modules {
            for code in module
                .prerequisite_modules
                .iter()
                .chain(module.unlocks_modules.iter())
            {
                if !self.contains(code) {
                    log::warn!(
                        "catalog module {} references unknown module {}",
                        module.code,
                        code
                    );
                }
            }
        }
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
