mod metadata;
mod target;
mod util;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use metadata::ExtensionMetadata;
use target::Target;
use util::{WorkspaceVersions, project_root};

const EXTENSION_NAME: &str = "quack";

#[derive(Parser)]
#[command(name = "xtask")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the extension and write a loadable `quack.duckdb_extension`.
    Build {
        /// Build with the release profile.
        #[arg(long)]
        release: bool,
    },
    /// Build the extension, then run the sqllogictests in `test/sql` against it.
    Test {
        #[arg(long)]
        release: bool,
        /// Python interpreter with `duckdb_sqllogictest` installed.
        #[arg(long, env = "PYTHON", default_value = "python3")]
        python: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Build { release } => {
            build(release)?;
        }
        Commands::Test { release, python } => {
            let extension = build(release)?;
            run_sqllogictest(&python, &extension)?;
        }
    }
    Ok(())
}

fn profile_dir(release: bool) -> &'static str {
    if release { "release" } else { "debug" }
}

/// Build the cdylib, copy it into `build/<profile>` and append the metadata
/// footer DuckDB checks on load. Returns the path of the extension file.
fn build(release: bool) -> Result<PathBuf> {
    let root = project_root();
    let versions = WorkspaceVersions::from_manifest(&root.join("Cargo.toml"))?;

    let mut cmd = Command::new(env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()));
    cmd.current_dir(&root).args(["build", "-p", EXTENSION_NAME]);
    if release {
        cmd.arg("--release");
    }
    run(&mut cmd)?;

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| root.join("target"));
    let library = target_dir.join(profile_dir(release)).join(format!(
        "{}{EXTENSION_NAME}{}",
        env::consts::DLL_PREFIX,
        env::consts::DLL_SUFFIX
    ));

    let out_dir = root.join("build").join(profile_dir(release));
    fs::create_dir_all(&out_dir)?;
    let extension = out_dir.join(format!("{EXTENSION_NAME}.duckdb_extension"));
    fs::copy(&library, &extension)
        .with_context(|| format!("failed to copy {}", library.display()))?;

    // duckdb-rs calls into the unstable part of the C API, so the extension
    // is tied to the exact DuckDB version.
    let metadata = ExtensionMetadata {
        platform: Target::from_cfg()?.duckdb_platform()?,
        duckdb_version: versions.duckdb,
        extension_version: format!("v{}", versions.package),
    };
    metadata.append_to(&extension)?;

    println!("Wrote {} ({metadata:?})", extension.display());
    Ok(extension)
}

fn run_sqllogictest(python: &str, extension: &Path) -> Result<()> {
    let root = project_root();
    let mut cmd = Command::new(python);
    cmd.current_dir(&root)
        .args(["-m", "duckdb_sqllogictest", "--test-dir", "test/sql"])
        .arg("--external-extension")
        .arg(extension);
    run(&mut cmd)
}

fn run(cmd: &mut Command) -> Result<()> {
    println!("Running {cmd:?}");
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !status.success() {
        return Err(anyhow!("command failed with {status}"));
    }
    Ok(())
}
