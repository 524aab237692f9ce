use quack_error::{DbError, Result};
use tracing::trace;

use crate::functions::Signature;
use crate::functions::documentation::Documentation;
use crate::functions::scalar::ScalarFunction;

/// Something functions can be registered with, typically backed by a host
/// database.
pub trait FunctionRegistry {
    fn register_scalar<F: ScalarFunction>(&mut self, function: F) -> Result<()>;
}

pub trait Extension {
    /// The name of the extension.
    const NAME: &'static str;
    /// Version reported for the extension.
    const VERSION: &'static str;

    /// Register all functions provided by this extension.
    fn register<R: FunctionRegistry>(&self, registry: &mut R) -> Result<()>;
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub signature: Signature,
    pub doc: &'static Documentation,
}

/// Registry that only records what gets registered.
///
/// Rejects registering the same name (or alias) twice.
#[derive(Debug, Clone, Default)]
pub struct FunctionCatalog {
    entries: Vec<CatalogEntry>,
}

impl FunctionCatalog {
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|ent| ent.name == name || ent.aliases.iter().any(|alias| *alias == name))
    }
}

impl FunctionRegistry for FunctionCatalog {
    fn register_scalar<F: ScalarFunction>(&mut self, _function: F) -> Result<()> {
        for name in std::iter::once(F::NAME).chain(F::ALIASES.iter().copied()) {
            if self.get(name).is_some() {
                return Err(DbError::new("Duplicate function name").with_field("name", name));
            }
        }

        trace!(name = F::NAME, "adding function to catalog");

        self.entries.push(CatalogEntry {
            name: F::NAME,
            aliases: F::ALIASES,
            signature: F::SIGNATURE,
            doc: F::DOC,
        });

        Ok(())
    }
}
