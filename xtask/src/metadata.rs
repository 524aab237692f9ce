use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Result, anyhow};

/// Size of a single metadata field.
const FIELD_LEN: usize = 32;
/// Number of metadata fields written to the footer.
const NUM_FIELDS: usize = 8;
/// Space reserved for a signature. Unsigned extensions leave it zeroed.
const SIGNATURE_LEN: usize = 256;

/// Header of the footer, laid out as a wasm custom section named
/// "duckdb_signature" with a 512 byte payload.
const FOOTER_START: &[u8] = b"\x00\x93\x04\x10duckdb_signature\x80\x04";

/// Magic value DuckDB checks in the first field.
const MAGIC_VALUE: &str = "4";

/// ABI type for extensions using the unstable C API. DuckDB only loads these
/// when the version field matches its own version exactly.
const ABI_TYPE_UNSTABLE: &str = "C_STRUCT_UNSTABLE";

/// Total size of the footer appended to the library.
pub const FOOTER_LEN: usize = FOOTER_START.len() + FIELD_LEN * NUM_FIELDS + SIGNATURE_LEN;

/// Metadata DuckDB reads from the end of an extension file before loading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionMetadata {
    /// DuckDB platform string, e.g. "linux_amd64".
    pub platform: String,
    /// DuckDB version the extension targets, e.g. "v1.3.2".
    pub duckdb_version: String,
    pub extension_version: String,
}

impl ExtensionMetadata {
    /// Serialize the footer.
    ///
    /// Fields are written in reverse order, followed by the zeroed signature.
    pub fn footer(&self) -> Result<Vec<u8>> {
        let fields: [&str; NUM_FIELDS] = [
            MAGIC_VALUE,
            &self.platform,
            &self.duckdb_version,
            &self.extension_version,
            ABI_TYPE_UNSTABLE,
            "",
            "",
            "",
        ];

        let mut footer = Vec::with_capacity(FOOTER_LEN);
        footer.extend_from_slice(FOOTER_START);
        for field in fields.iter().rev() {
            footer.extend_from_slice(&padded_field(field)?);
        }
        footer.resize(FOOTER_LEN, 0);

        Ok(footer)
    }

    /// Append the footer to the file at `path`.
    pub fn append_to(&self, path: &Path) -> Result<()> {
        let footer = self.footer()?;
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(&footer)?;
        file.sync_all()?;
        Ok(())
    }
}

fn padded_field(value: &str) -> Result<[u8; FIELD_LEN]> {
    if !value.is_ascii() || value.len() > FIELD_LEN {
        return Err(anyhow!(
            "metadata field '{value}' must be ascii and at most {FIELD_LEN} bytes"
        ));
    }
    let mut field = [0; FIELD_LEN];
    field[..value.len()].copy_from_slice(value.as_bytes());
    Ok(field)
}
