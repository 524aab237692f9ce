use quack_core::extension::{Extension, FunctionRegistry};
use quack_error::Result;

use crate::functions::quack::Quack;

#[derive(Debug, Clone, Copy)]
pub struct QuackExtension;

impl Extension for QuackExtension {
    const NAME: &'static str = "quack";
    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    fn register<R: FunctionRegistry>(&self, registry: &mut R) -> Result<()> {
        registry.register_scalar(Quack)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quack_core::arrays::datatype::DataTypeId;
    use quack_core::extension::FunctionCatalog;
    use quack_core::functions::documentation::Category;

    use super::*;

    #[test]
    fn registers_quack() {
        let mut catalog = FunctionCatalog::default();
        QuackExtension.register(&mut catalog).unwrap();

        assert_eq!(1, catalog.entries().len());

        let ent = catalog.get("quack").unwrap();
        assert_eq!(&[DataTypeId::Utf8], ent.signature.positional_args);
        assert_eq!(DataTypeId::Utf8, ent.signature.return_type);
        assert_eq!(Category::String, ent.doc.category);
    }

    #[test]
    fn register_twice_fails() {
        let mut catalog = FunctionCatalog::default();
        QuackExtension.register(&mut catalog).unwrap();
        assert!(QuackExtension.register(&mut catalog).is_err());
    }

    #[test]
    fn identity() {
        assert_eq!("quack", QuackExtension::NAME);
        assert_eq!(env!("CARGO_PKG_VERSION"), QuackExtension::VERSION);
    }
}
