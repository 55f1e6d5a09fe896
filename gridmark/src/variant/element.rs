//! Conversions between matrix element types and boxed variants
//!
//! [`Variant::Empty`] converts to the element type's default value, so an
//! unset array slot imports as a default cell.

use super::Variant;
use crate::error::{BoundaryError, Result};

/// Element types that can be unboxed from a [`Variant`]
pub trait FromVariant: Sized {
    fn from_variant(value: &Variant) -> Result<Self>;
}

/// Element types that can be boxed into a [`Variant`]
pub trait ToVariant {
    fn to_variant(&self) -> Variant;
}

fn mismatch<T>(expected: &'static str, found: &Variant) -> Result<T> {
    Err(BoundaryError::TypeMismatch {
        expected,
        found: found.type_name(),
    })
}

impl FromVariant for Variant {
    fn from_variant(value: &Variant) -> Result<Self> {
        Ok(value.clone())
    }
}

impl ToVariant for Variant {
    fn to_variant(&self) -> Variant {
        self.clone()
    }
}

impl FromVariant for bool {
    fn from_variant(value: &Variant) -> Result<Self> {
        match value {
            Variant::Empty => Ok(false),
            Variant::Bool(b) => Ok(*b),
            Variant::I32(i) => Ok(*i != 0),
            Variant::I64(i) => Ok(*i != 0),
            other => mismatch("bool", other),
        }
    }
}

impl ToVariant for bool {
    fn to_variant(&self) -> Variant {
        Variant::Bool(*self)
    }
}

impl FromVariant for i32 {
    fn from_variant(value: &Variant) -> Result<Self> {
        match value {
            Variant::Empty => Ok(0),
            Variant::Bool(b) => Ok(i32::from(*b)),
            Variant::I32(i) => Ok(*i),
            Variant::I64(i) => i32::try_from(*i).map_err(|_| BoundaryError::OutOfRange {
                value: *i,
                target: "i32",
            }),
            other => mismatch("i32", other),
        }
    }
}

impl ToVariant for i32 {
    fn to_variant(&self) -> Variant {
        Variant::I32(*self)
    }
}

impl FromVariant for i64 {
    fn from_variant(value: &Variant) -> Result<Self> {
        match value {
            Variant::Empty => Ok(0),
            Variant::Bool(b) => Ok(i64::from(*b)),
            Variant::I32(i) => Ok(i64::from(*i)),
            Variant::I64(i) => Ok(*i),
            other => mismatch("i64", other),
        }
    }
}

impl ToVariant for i64 {
    fn to_variant(&self) -> Variant {
        Variant::I64(*self)
    }
}

impl FromVariant for f64 {
    fn from_variant(value: &Variant) -> Result<Self> {
        match value {
            Variant::Empty => Ok(0.0),
            Variant::I32(i) => Ok(f64::from(*i)),
            Variant::I64(i) => Ok(*i as f64),
            Variant::F64(f) => Ok(*f),
            other => mismatch("f64", other),
        }
    }
}

impl ToVariant for f64 {
    fn to_variant(&self) -> Variant {
        Variant::F64(*self)
    }
}

impl FromVariant for String {
    fn from_variant(value: &Variant) -> Result<Self> {
        match value {
            Variant::Empty => Ok(String::new()),
            Variant::String(s) => Ok(s.clone()),
            other => mismatch("string", other),
        }
    }
}

impl ToVariant for String {
    fn to_variant(&self) -> Variant {
        Variant::String(self.clone())
    }
}
