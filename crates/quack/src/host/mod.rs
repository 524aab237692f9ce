//! Glue between the host-independent function definitions and DuckDB.
pub mod scalar;
pub mod types;
pub mod varchar;

use duckdb::Connection;
use quack_core::extension::{FunctionCatalog, FunctionRegistry};
use quack_core::functions::scalar::{ScalarFunction, usage};
use quack_error::{Result, ResultExt};
use scalar::HostScalar;
use tracing::debug;

/// Registers functions with the database behind a connection.
///
/// Everything registered is also tracked in a catalog so that duplicates are
/// caught before reaching DuckDB.
pub struct DuckDbRegistry<'a> {
    conn: &'a Connection,
    catalog: FunctionCatalog,
}

impl<'a> DuckDbRegistry<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        DuckDbRegistry {
            conn,
            catalog: FunctionCatalog::default(),
        }
    }

    pub fn catalog(&self) -> &FunctionCatalog {
        &self.catalog
    }
}

impl FunctionRegistry for DuckDbRegistry<'_> {
    fn register_scalar<F: ScalarFunction>(&mut self, function: F) -> Result<()> {
        self.catalog.register_scalar(function)?;

        for name in std::iter::once(F::NAME).chain(F::ALIASES.iter().copied()) {
            debug!(
                %name,
                usage = %usage::<F>(),
                category = F::DOC.category.as_str(),
                description = F::DOC.description(),
                "registering scalar function"
            );
            self.conn
                .register_scalar_function::<HostScalar<F>>(name)
                .context_fn(|| format!("Failed to register scalar function '{name}'"))?;
        }

        Ok(())
    }
}
