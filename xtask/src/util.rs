use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use toml::Table;

/// Get the path to the root of the project.
pub fn project_root() -> PathBuf {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| env!("CARGO_MANIFEST_DIR").to_owned());
    let manifest_dir = PathBuf::from(manifest_dir);
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

/// Versions pulled from the workspace manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceVersions {
    /// Version of the workspace packages, used as the extension version.
    pub package: String,
    /// DuckDB version the extension is built against, e.g. "v1.3.2".
    pub duckdb: String,
}

impl WorkspaceVersions {
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Parse the root manifest.
    ///
    /// The duckdb dependency must be an exact pin, extensions built against a
    /// range could end up targeting some other DuckDB than the one in the
    /// metadata.
    pub fn parse(manifest: &str) -> Result<Self> {
        let manifest: Table = manifest.parse().context("invalid workspace manifest")?;
        let workspace = manifest
            .get("workspace")
            .and_then(|v| v.as_table())
            .ok_or_else(|| anyhow!("missing [workspace]"))?;

        let package = workspace
            .get("package")
            .and_then(|v| v.get("version"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow!("missing workspace.package.version"))?;

        let duckdb = workspace
            .get("dependencies")
            .and_then(|v| v.get("duckdb"))
            .and_then(|v| match v.as_str() {
                Some(s) => Some(s),
                None => v.get("version").and_then(|v| v.as_str()),
            })
            .ok_or_else(|| anyhow!("missing workspace.dependencies.duckdb version"))?;

        let duckdb = duckdb
            .trim()
            .strip_prefix('=')
            .ok_or_else(|| anyhow!("duckdb must be pinned with '=', found '{duckdb}'"))?;

        Ok(WorkspaceVersions {
            package: package.to_string(),
            duckdb: format!("v{}", duckdb.trim()),
        })
    }
}
