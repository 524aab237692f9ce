use std::env;

use anyhow::{Result, anyhow};

pub struct Target {
    arch: Arch,
    os: Os,
}

impl Target {
    pub fn from_cfg() -> Result<Target> {
        Ok(Target {
            arch: Arch::from_cfg()?,
            os: Os::from_cfg()?,
        })
    }

    /// Get the DuckDB platform string written into the extension metadata.
    ///
    /// This can be overridden by the `DUCKDB_PLATFORM` environment variable.
    pub fn duckdb_platform(&self) -> Result<String> {
        if let Ok(platform) = env::var("DUCKDB_PLATFORM") {
            println!("Using platform override: {platform}");
            return Ok(platform);
        }

        Ok(match (&self.arch, &self.os) {
            (Arch::X86_64, Os::Mac) => "osx_amd64",
            (Arch::Aarch64, Os::Mac) => "osx_arm64",
            (Arch::X86_64, Os::Linux) => "linux_amd64",
            (Arch::Aarch64, Os::Linux) => "linux_arm64",
            (Arch::X86_64, Os::Windows) => "windows_amd64",
            _ => return Err(anyhow!("unsupported target")),
        }
        .to_string())
    }
}

enum Arch {
    X86_64,
    Aarch64,
}

impl Arch {
    fn from_cfg() -> Result<Arch> {
        if cfg!(target_arch = "x86_64") {
            Ok(Arch::X86_64)
        } else if cfg!(target_arch = "aarch64") {
            Ok(Arch::Aarch64)
        } else {
            Err(anyhow!("unsupported arch"))
        }
    }
}

enum Os {
    Mac,
    Linux,
    Windows,
}

impl Os {
    fn from_cfg() -> Result<Os> {
        if cfg!(target_os = "macos") {
            Ok(Os::Mac)
        } else if cfg!(target_os = "linux") {
            Ok(Os::Linux)
        } else if cfg!(target_os = "windows") {
            Ok(Os::Windows)
        } else {
            Err(anyhow!("unsupported os"))
        }
    }
}
