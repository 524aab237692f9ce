use duckdb::core::{FlatVector, Inserter};
use duckdb::ffi::{duckdb_string_t, duckdb_string_t_data, duckdb_string_t_length};
use quack_core::arrays::batch::Utf8Column;
use quack_core::arrays::executor::OutBuffer;
use quack_error::{Result, ResultExt};

/// Read the first `num_rows` rows of a VARCHAR vector.
///
/// # Safety
///
/// `vector` must be a flat VARCHAR vector with at least `num_rows` rows.
pub unsafe fn read_column(vector: &FlatVector, num_rows: usize) -> Result<Utf8Column<'_>> {
    let values = vector.as_slice_with_len::<duckdb_string_t>(num_rows);

    values
        .iter()
        .enumerate()
        .map(|(row, value)| {
            if vector.row_is_null(row as u64) {
                return Ok(None);
            }
            decode(value).map(Some).map_err(|e| e.with_field("row", row))
        })
        .collect::<Result<Vec<_>>>()
        .map(Utf8Column::new)
}

/// Borrow the string stored in a `duckdb_string_t`.
///
/// Short strings are stored inline, so the returned str borrows from `value`
/// itself.
unsafe fn decode(value: &duckdb_string_t) -> Result<&str> {
    let len = duckdb_string_t_length(*value) as usize;
    // Only read through, the pointer type is just what the C API asks for.
    let data = duckdb_string_t_data(value as *const duckdb_string_t as *mut duckdb_string_t);
    let bytes = std::slice::from_raw_parts(data as *const u8, len);

    std::str::from_utf8(bytes).context("Failed to decode VARCHAR value")
}

/// Output buffer writing into a DuckDB VARCHAR vector.
pub struct VarcharOutput {
    vector: FlatVector,
}

impl VarcharOutput {
    pub fn new(vector: FlatVector) -> Self {
        VarcharOutput { vector }
    }
}

impl OutBuffer for VarcharOutput {
    fn put(&mut self, idx: usize, value: &str) {
        self.vector.insert(idx, value);
    }

    fn put_null(&mut self, idx: usize) {
        self.vector.set_null(idx);
    }
}
