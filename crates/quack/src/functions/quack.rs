use quack_core::arrays::batch::Batch;
use quack_core::arrays::datatype::DataTypeId;
use quack_core::arrays::executor::{OutBuffer, UnaryExecutor};
use quack_core::functions::Signature;
use quack_core::functions::documentation::{Category, Documentation, Example};
use quack_core::functions::scalar::ScalarFunction;
use quack_error::Result;
use tracing::trace;

const PREFIX: &str = "Quack ";
const SUFFIX: &str = " 🐥";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quack;

impl ScalarFunction for Quack {
    const NAME: &'static str = "quack";
    const SIGNATURE: Signature = Signature::new(&[DataTypeId::Utf8], DataTypeId::Utf8);
    const DOC: &'static Documentation = &Documentation {
        category: Category::String,
        description: "Quack at the given name.",
        arguments: &["name"],
        example: Some(Example {
            example: "quack('world')",
            output: "Quack world 🐥",
        }),
    };

    fn execute(&self, input: &Batch, output: &mut dyn OutBuffer) -> Result<()> {
        trace!(num_rows = input.num_rows(), "executing quack");

        let mut string_buf = String::new();
        UnaryExecutor::execute(&input.arrays()[0], output, |name, buf| {
            quack_into(name, &mut string_buf);
            buf.put(&string_buf);
        })
    }
}

/// Write the quacked name into `buf`, replacing its contents.
pub fn quack_into(name: &str, buf: &mut String) {
    buf.clear();
    buf.reserve(PREFIX.len() + name.len() + SUFFIX.len());
    buf.push_str(PREFIX);
    buf.push_str(name);
    buf.push_str(SUFFIX);
}

#[cfg(test)]
mod tests {
    use quack_core::arrays::batch::Utf8Column;
    use quack_core::arrays::executor::VecOutBuffer;
    use quack_core::functions::scalar::usage;

    use super::*;

    fn quack(name: &str) -> String {
        let mut buf = String::new();
        quack_into(name, &mut buf);
        buf
    }

    #[test]
    fn quack_cases() {
        let test_cases = [
            ("world", "Quack world 🐥"),
            ("", "Quack  🐥"),
            ("duck", "Quack duck 🐥"),
            ("  padded  ", "Quack   padded   🐥"),
            ("日本語", "Quack 日本語 🐥"),
            ("🐥", "Quack 🐥 🐥"),
            ("Quack x 🐥", "Quack Quack x 🐥 🐥"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(expected, quack(input), "input: {input:?}");
        }
    }

    #[test]
    fn reuses_buffer() {
        let mut buf = String::from("a much longer leftover value");
        quack_into("a", &mut buf);
        assert_eq!("Quack a 🐥", buf);
    }

    #[test]
    fn execute_batch_with_nulls() {
        let input = Utf8Column::new(vec![Some("world"), None, Some(""), Some("mallard")]);
        let batch = Batch::try_new(vec![input], 4).unwrap();
        let mut out = VecOutBuffer::with_len(4);

        Quack.invoke(&batch, &mut out).unwrap();

        let expected = vec![
            Some("Quack world 🐥".to_string()),
            None,
            Some("Quack  🐥".to_string()),
            Some("Quack mallard 🐥".to_string()),
        ];
        assert_eq!(expected, out.values);
    }

    #[test]
    fn execute_empty_batch() {
        let batch = Batch::try_new(vec![Utf8Column::default()], 0).unwrap();
        let mut out = VecOutBuffer::default();
        Quack.invoke(&batch, &mut out).unwrap();
        assert!(out.values.is_empty());
    }

    #[test]
    fn rejects_extra_arguments() {
        let batch = Batch::try_new(
            vec![
                Utf8Column::new(vec![Some("a")]),
                Utf8Column::new(vec![Some("b")]),
            ],
            1,
        )
        .unwrap();
        let mut out = VecOutBuffer::with_len(1);
        assert!(Quack.invoke(&batch, &mut out).is_err());
    }

    #[test]
    fn example_matches_output() {
        let example = Quack::DOC.example.unwrap();
        assert_eq!("quack('world')", example.example);
        assert_eq!(quack("world"), example.output);
        assert_eq!("quack(name Utf8) -> Utf8", usage::<Quack>());
        assert_eq!("Quack at the given name.", Quack::DOC.description());
    }
}
