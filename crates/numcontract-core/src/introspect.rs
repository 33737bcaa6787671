//! Runtime introspection of primitive numeric types
//!
//! Every descriptor here is read off the running program itself
//! (`size_of`, `MIN`, `MAX`), never typed in by hand, so that a contract
//! compared against it is compared against what the runtime actually does.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::mem::size_of;

use crate::error::{CheckError, Result};
use crate::number::{Number, NumericKind};

/// Observed representation of one numeric type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: NumericKind,
    pub signed: bool,
    pub size_bytes: usize,
    pub min: Number,
    pub max: Number,
}

macro_rules! int_descriptor {
    ($t:ty) => {
        TypeDescriptor {
            name: stringify!($t).to_string(),
            kind: NumericKind::Integer,
            signed: <$t>::MIN != 0,
            size_bytes: size_of::<$t>(),
            min: Number::Int(i128::from(<$t>::MIN)),
            max: Number::Int(i128::from(<$t>::MAX)),
        }
    };
}

macro_rules! float_descriptor {
    ($t:ty) => {
        TypeDescriptor {
            name: stringify!($t).to_string(),
            kind: NumericKind::BinaryFloat,
            signed: <$t>::MIN < 0.0,
            size_bytes: size_of::<$t>(),
            min: Number::Float(f64::from(<$t>::MIN)),
            max: Number::Float(f64::from(<$t>::MAX)),
        }
    };
}

/// Common names accepted in contracts, mapped to the runtime type they mean
const ALIASES: &[(&str, &str)] = &[
    ("sbyte", "i8"),
    ("short", "i16"),
    ("int", "i32"),
    ("long", "i64"),
    ("byte", "u8"),
    ("ushort", "u16"),
    ("uint", "u32"),
    ("ulong", "u64"),
    ("float", "f32"),
    ("double", "f64"),
];

/// Lookup table from type names to their observed representation
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDescriptor>,
    aliases: BTreeMap<String, String>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::runtime()
    }
}

impl TypeRegistry {
    /// Registry with no types
    pub fn empty() -> Self {
        Self {
            types: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Registry describing this program's primitive numeric types
    pub fn runtime() -> Self {
        let mut registry = Self::empty();

        registry.register(int_descriptor!(i8));
        registry.register(int_descriptor!(i16));
        registry.register(int_descriptor!(i32));
        registry.register(int_descriptor!(i64));
        registry.register(int_descriptor!(u8));
        registry.register(int_descriptor!(u16));
        registry.register(int_descriptor!(u32));
        registry.register(int_descriptor!(u64));
        registry.register(float_descriptor!(f32));
        registry.register(float_descriptor!(f64));
        registry.register(TypeDescriptor {
            name: "decimal".to_string(),
            kind: NumericKind::Decimal,
            signed: Decimal::MIN.is_sign_negative(),
            size_bytes: size_of::<Decimal>(),
            min: Number::Decimal(Decimal::MIN),
            max: Number::Decimal(Decimal::MAX),
        });

        for (alias, target) in ALIASES {
            registry.alias(*alias, *target);
        }

        registry
    }

    /// Register (or replace) a descriptor under its own name
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    /// Make `alias` resolve to the type registered as `target`
    pub fn alias(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        self.aliases.insert(alias.into(), target.into());
    }

    /// Resolve a type name or alias
    pub fn resolve(&self, name: &str) -> Result<&TypeDescriptor> {
        let canonical = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.types
            .get(canonical)
            .ok_or_else(|| CheckError::unknown_type(name))
    }

    /// Whether a name or alias resolves
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// All registered descriptors, ordered by name
    pub fn descriptors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// All aliases as `(alias, target)` pairs
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_integer_types() {
        let registry = TypeRegistry::runtime();

        let int = registry.resolve("int").unwrap();
        assert_eq!(int.name, "i32");
        assert!(int.signed);
        assert_eq!(int.size_bytes, 4);
        assert_eq!(int.min, Number::Int(-2147483648));
        assert_eq!(int.max, Number::Int(2147483647));

        let ulong = registry.resolve("ulong").unwrap();
        assert!(!ulong.signed);
        assert_eq!(ulong.size_bytes, 8);
        assert_eq!(ulong.min, Number::Int(0));
        assert_eq!(ulong.max, Number::Int(18446744073709551615));
    }

    #[test]
    fn test_runtime_float_types() {
        let registry = TypeRegistry::runtime();
        let float = registry.resolve("float").unwrap();
        assert_eq!(float.kind, NumericKind::BinaryFloat);
        assert_eq!(float.size_bytes, 4);
        assert_eq!(float.max, Number::Float(3.4028234663852886e38));
        assert_eq!(registry.resolve("double").unwrap().size_bytes, 8);
    }

    #[test]
    fn test_runtime_decimal_type() {
        let registry = TypeRegistry::runtime();
        let decimal = registry.resolve("decimal").unwrap();
        assert_eq!(decimal.size_bytes, 16);
        assert_eq!(
            decimal.max.to_string(),
            "79228162514264337593543950335"
        );
        assert_eq!(
            decimal.min.to_string(),
            "-79228162514264337593543950335"
        );
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let registry = TypeRegistry::runtime();
        let err = registry.resolve("quad").unwrap_err();
        assert!(matches!(err, CheckError::UnknownType(name) if name == "quad"));
    }

    #[test]
    fn test_canonical_names_resolve() {
        let registry = TypeRegistry::runtime();
        for name in ["i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64", "decimal"] {
            assert!(registry.contains(name), "{} should resolve", name);
        }
        assert_eq!(registry.descriptors().count(), 11);
    }
}
