use std::error::Error;
use std::marker::PhantomData;

use duckdb::core::{DataChunkHandle, FlatVector};
use duckdb::vscalar::{ScalarFunctionSignature, VScalar};
use duckdb::vtab::arrow::WritableVector;
use quack_core::arrays::batch::Batch;
use quack_core::functions::scalar::ScalarFunction;
use quack_error::Result;

use super::types::scalar_signature;
use super::varchar::{VarcharOutput, read_column};

/// Adapts a scalar function to DuckDB's vectorized scalar interface.
///
/// The function value itself is used as the per-registration state.
#[derive(Debug)]
pub struct HostScalar<F> {
    _function: PhantomData<F>,
}

impl<F: ScalarFunction> VScalar for HostScalar<F> {
    type State = F;

    unsafe fn invoke(
        state: &Self::State,
        input: &mut DataChunkHandle,
        output: &mut dyn WritableVector,
    ) -> std::result::Result<(), Box<dyn Error>> {
        let num_rows = input.len();
        // DuckDB only binds calls matching the registered signature.
        let vectors: Vec<FlatVector> = (0..F::SIGNATURE.positional_args.len())
            .map(|idx| input.flat_vector(idx))
            .collect();

        let columns = vectors
            .iter()
            .map(|vector| read_column(vector, num_rows))
            .collect::<Result<Vec<_>>>()?;
        let batch = Batch::try_new(columns, num_rows)?;

        let mut out = VarcharOutput::new(output.flat_vector());
        state.invoke(&batch, &mut out)?;

        Ok(())
    }

    fn signatures() -> Vec<ScalarFunctionSignature> {
        vec![scalar_signature(&F::SIGNATURE)]
    }
}
