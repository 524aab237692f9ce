use quack_error::{DbError, Result};

use super::datatype::DataTypeId;

/// A column of nullable strings borrowed from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utf8Column<'a> {
    values: Vec<Option<&'a str>>,
}

impl<'a> Utf8Column<'a> {
    pub fn new(values: Vec<Option<&'a str>>) -> Self {
        Utf8Column { values }
    }

    pub const fn datatype(&self) -> DataTypeId {
        DataTypeId::Utf8
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<&'a str>> + '_ {
        self.values.iter().copied()
    }
}

impl<'a> FromIterator<Option<&'a str>> for Utf8Column<'a> {
    fn from_iter<T: IntoIterator<Item = Option<&'a str>>>(iter: T) -> Self {
        Utf8Column::new(iter.into_iter().collect())
    }
}

/// A set of equal length columns passed to a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<'a> {
    arrays: Vec<Utf8Column<'a>>,
    num_rows: usize,
}

impl<'a> Batch<'a> {
    /// Create a new batch, erroring if any column doesn't have `num_rows`
    /// values.
    pub fn try_new(arrays: Vec<Utf8Column<'a>>, num_rows: usize) -> Result<Self> {
        for (idx, array) in arrays.iter().enumerate() {
            if array.len() != num_rows {
                return Err(DbError::new("Column length does not match batch row count")
                    .with_field("column", idx)
                    .with_field("column_len", array.len())
                    .with_field("num_rows", num_rows));
            }
        }

        Ok(Batch { arrays, num_rows })
    }

    pub fn arrays(&self) -> &[Utf8Column<'a>] {
        &self.arrays
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn datatypes(&self) -> Vec<DataTypeId> {
        self.arrays.iter().map(|a| a.datatype()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_column_length() {
        let col = Utf8Column::new(vec![Some("a"), None]);
        let err = Batch::try_new(vec![col], 3).unwrap_err();
        assert_eq!(Some("2"), err.get_field("column_len"));
    }

    #[test]
    fn collect_values() {
        let col: Utf8Column = [Some("a"), None, Some("")].into_iter().collect();
        let values: Vec<_> = col.iter().collect();
        assert_eq!(vec![Some("a"), None, Some("")], values);

        let batch = Batch::try_new(vec![col], 3).unwrap();
        assert_eq!(vec![DataTypeId::Utf8], batch.datatypes());
    }
}
