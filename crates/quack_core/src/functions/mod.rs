pub mod documentation;
pub mod scalar;

use std::fmt;

use crate::arrays::datatype::DataTypeId;

/// Function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Expected positional input argument types for this signature.
    pub positional_args: &'static [DataTypeId],
    /// The return type.
    pub return_type: DataTypeId,
}

impl Signature {
    pub const fn new(inputs: &'static [DataTypeId], return_type: DataTypeId) -> Self {
        Signature {
            positional_args: inputs,
            return_type,
        }
    }

    /// Return if inputs given data types exactly satisfy the signature.
    pub fn exact_match(&self, inputs: &[DataTypeId]) -> bool {
        self.positional_args == inputs
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, arg) in self.positional_args.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        let sig = Signature::new(&[DataTypeId::Utf8], DataTypeId::Utf8);
        assert!(sig.exact_match(&[DataTypeId::Utf8]));
        assert!(!sig.exact_match(&[]));
        assert!(!sig.exact_match(&[DataTypeId::Utf8, DataTypeId::Utf8]));
    }

    #[test]
    fn display() {
        let sig = Signature::new(&[DataTypeId::Utf8, DataTypeId::Utf8], DataTypeId::Utf8);
        assert_eq!("(Utf8, Utf8) -> Utf8", sig.to_string());
    }
}
