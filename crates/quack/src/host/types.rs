use duckdb::core::{LogicalTypeHandle, LogicalTypeId};
use duckdb::vscalar::ScalarFunctionSignature;
use quack_core::arrays::datatype::DataTypeId;
use quack_core::functions::Signature;

pub const fn logical_type_id(datatype: DataTypeId) -> LogicalTypeId {
    match datatype {
        DataTypeId::Utf8 => LogicalTypeId::Varchar,
    }
}

pub fn logical_type(datatype: DataTypeId) -> LogicalTypeHandle {
    LogicalTypeHandle::from(logical_type_id(datatype))
}

/// Convert a function signature into the signature DuckDB binds against.
pub fn scalar_signature(signature: &Signature) -> ScalarFunctionSignature {
    let params = signature
        .positional_args
        .iter()
        .map(|&datatype| logical_type(datatype))
        .collect();

    ScalarFunctionSignature::exact(params, logical_type(signature.return_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_varchar() {
        assert!(matches!(
            logical_type_id(DataTypeId::Utf8),
            LogicalTypeId::Varchar
        ));
    }
}
