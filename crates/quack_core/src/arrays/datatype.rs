use std::fmt;

/// Identifiers for the data types functions can be declared with.
///
/// Hosts map these onto their own logical types when registering functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTypeId {
    Utf8,
}

impl DataTypeId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "Utf8",
        }
    }
}

impl fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
