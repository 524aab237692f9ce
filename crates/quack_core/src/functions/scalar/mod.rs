use std::fmt::Debug;

use quack_error::{DbError, Result};

use super::Signature;
use super::documentation::Documentation;
use crate::arrays::batch::Batch;
use crate::arrays::executor::OutBuffer;

/// A scalar function applied independently to each row of its inputs.
///
/// Implementations are stateless; anything a host needs to register the
/// function is available as associated constants.
pub trait ScalarFunction: Debug + Clone + Copy + Default + Sync + Send + 'static {
    /// Name the function is registered under.
    const NAME: &'static str;
    /// Additional names the function is registered under.
    const ALIASES: &'static [&'static str] = &[];
    const SIGNATURE: Signature;
    const DOC: &'static Documentation;

    /// Execute the function on the input batch, writing one output row per
    /// input row.
    ///
    /// The batch has been checked against the signature.
    fn execute(&self, input: &Batch, output: &mut dyn OutBuffer) -> Result<()>;

    /// Check the batch against the function signature, then execute.
    fn invoke(&self, input: &Batch, output: &mut dyn OutBuffer) -> Result<()> {
        let datatypes = input.datatypes();
        if !Self::SIGNATURE.exact_match(&datatypes) {
            return Err(DbError::new("Function inputs do not match signature")
                .with_field("function", Self::NAME)
                .with_field("signature", Self::SIGNATURE)
                .with_field("num_inputs", datatypes.len()));
        }

        self.execute(input, output)
    }
}

/// Render a short usage line for a function, e.g. `upper(string Utf8) -> Utf8`.
pub fn usage<F: ScalarFunction>() -> String {
    let num_args = F::SIGNATURE.positional_args.len();
    let args: Vec<_> = F::SIGNATURE
        .positional_args
        .iter()
        .enumerate()
        .map(|(idx, datatype)| format!("{} {datatype}", F::DOC.argument_name(idx, num_args)))
        .collect();

    format!("{}({}) -> {}", F::NAME, args.join(", "), F::SIGNATURE.return_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrays::batch::Utf8Column;
    use crate::arrays::datatype::DataTypeId;
    use crate::arrays::executor::{UnaryExecutor, VecOutBuffer};
    use crate::functions::documentation::Category;

    #[derive(Debug, Clone, Copy, Default)]
    struct Upper;

    impl ScalarFunction for Upper {
        const NAME: &'static str = "upper";
        const SIGNATURE: Signature = Signature::new(&[DataTypeId::Utf8], DataTypeId::Utf8);
        const DOC: &'static Documentation = &Documentation {
            category: Category::String,
            description: "Uppercase a string.",
            arguments: &["string"],
            example: None,
        };

        fn execute(&self, input: &Batch, output: &mut dyn OutBuffer) -> Result<()> {
            UnaryExecutor::execute(&input.arrays()[0], output, |v, buf| {
                buf.put(&v.to_uppercase())
            })
        }
    }

    #[test]
    fn invoke_checks_arity() {
        let batch = Batch::try_new(
            vec![Utf8Column::new(vec![Some("a")]), Utf8Column::new(vec![Some("b")])],
            1,
        )
        .unwrap();
        let mut out = VecOutBuffer::with_len(1);

        let err = Upper.invoke(&batch, &mut out).unwrap_err();
        assert_eq!(Some("upper"), err.get_field("function"));
        assert_eq!(Some("2"), err.get_field("num_inputs"));

        let empty = Batch::try_new(Vec::new(), 0).unwrap();
        assert!(Upper.invoke(&empty, &mut out).is_err());
    }

    #[test]
    fn invoke_executes() {
        let batch = Batch::try_new(vec![Utf8Column::new(vec![Some("a"), None])], 2).unwrap();
        let mut out = VecOutBuffer::with_len(2);
        Upper.invoke(&batch, &mut out).unwrap();
        assert_eq!(vec![Some("A".to_string()), None], out.values);
    }

    #[test]
    fn usage_line() {
        assert_eq!("upper(string Utf8) -> Utf8", usage::<Upper>());
    }
}
