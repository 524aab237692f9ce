//! DuckDB extension registering a single `quack` scalar function.
//!
//! Built as a `cdylib`, the library exports `quack_init_c_api`, which DuckDB
//! calls when the extension is loaded.
extern crate duckdb;
extern crate duckdb_loadable_macros;
extern crate libduckdb_sys;

pub mod config;
pub mod extension;
pub mod functions;
pub mod host;

use std::error::Error;

use config::ExtensionConfig;
use duckdb::{ffi, Connection};
use duckdb_loadable_macros::duckdb_entrypoint_c_api;
use extension::QuackExtension;
use host::DuckDbRegistry;
use quack_core::extension::Extension;
use quack_error::Result;
use tracing::{debug, info};

/// Load the extension into the database the connection belongs to.
pub fn load(conn: &Connection) -> Result<()> {
    let config = ExtensionConfig::from_env()?;
    config.init_logging()?;

    debug!(
        name = QuackExtension::NAME,
        version = QuackExtension::VERSION,
        "loading extension"
    );

    let mut registry = DuckDbRegistry::new(conn);
    QuackExtension.register(&mut registry)?;

    info!(
        name = QuackExtension::NAME,
        functions = registry.catalog().entries().len(),
        "extension loaded"
    );

    Ok(())
}

/// Entrypoint called by DuckDB.
///
/// Errors are reported back to DuckDB, which fails the `LOAD` with the error
/// message.
///
/// # Safety
///
/// Must only be called by DuckDB through the generated `quack_init_c_api`.
#[duckdb_entrypoint_c_api(ext_name = "quack", min_duckdb_version = "v1.3.2")]
pub unsafe fn extension_entrypoint(conn: Connection) -> std::result::Result<(), Box<dyn Error>> {
    load(&conn)?;
    Ok(())
}
