/// Function categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    String,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
        }
    }
}

/// Documentation for a single function.
#[derive(Debug, Clone, Copy)]
pub struct Documentation {
    /// Category this function belongs in.
    pub category: Category,
    /// Description of the function.
    ///
    /// Whitespace will be trimmed when rendered.
    pub description: &'static str,
    /// Argument names.
    ///
    /// If this doesn't match the length of the positional arguments in the
    /// signature, generic names will be used.
    pub arguments: &'static [&'static str],
    /// An optional example for the function.
    pub example: Option<Example>,
}

/// A simple example.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    /// Example usage of the function.
    ///
    /// This should just be the function call itself and not an entire query.
    pub example: &'static str,
    /// The output for the above example.
    pub output: &'static str,
}

impl Documentation {
    /// The description with surrounding whitespace trimmed.
    pub fn description(&self) -> &'static str {
        self.description.trim()
    }

    /// Argument name for the positional argument at `idx`.
    pub fn argument_name(&self, idx: usize, num_args: usize) -> String {
        if self.arguments.len() == num_args {
            self.arguments[idx].to_string()
        } else {
            format!("arg{idx}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: Documentation = Documentation {
        category: Category::String,
        description: r#"
Pad a string.
"#,
        arguments: &["string", "len"],
        example: None,
    };

    #[test]
    fn trimmed_description() {
        assert_eq!("Pad a string.", DOC.description());
        assert_eq!("string", DOC.category.as_str());
    }

    #[test]
    fn argument_names() {
        assert_eq!("len", DOC.argument_name(1, 2));
        assert_eq!("arg0", DOC.argument_name(0, 3));
    }
}
