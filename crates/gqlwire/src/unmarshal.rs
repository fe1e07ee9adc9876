//! Decode contracts over already-parsed input values, and the built-in
//! scalar decoders.
//!
//! On failure the receiver's state is unspecified.

use crate::context::Context;
use crate::marshal::Id;
use crate::value::{Number, Value};
use crate::{Error, Result};

/// Populates `self` from an input value.
pub trait Unmarshaler {
    fn unmarshal(&mut self, v: &Value) -> Result<()>;
}

/// Populates `self` from an input value, with access to the request context.
pub trait ContextUnmarshaler {
    fn unmarshal_with_context(&mut self, ctx: &Context, v: &Value) -> Result<()>;
}

/// Decode a fresh `T` from `v`.
pub fn unmarshal<T: Unmarshaler + Default>(v: &Value) -> Result<T> {
    let mut out = T::default();
    out.unmarshal(v)?;
    Ok(out)
}

/// Decode a fresh `T` from `v` through the context contract.
pub fn unmarshal_with_context<T: ContextUnmarshaler + Default>(ctx: &Context, v: &Value) -> Result<T> {
    let mut out = T::default();
    out.unmarshal_with_context(ctx, v)?;
    Ok(out)
}

impl Unmarshaler for String {
    fn unmarshal(&mut self, v: &Value) -> Result<()> {
        match v {
            Value::String(s) => {
                self.clone_from(s);
                Ok(())
            }
            other => Err(Error::conversion(other, "String")),
        }
    }
}

impl Unmarshaler for bool {
    fn unmarshal(&mut self, v: &Value) -> Result<()> {
        *self = match v {
            Value::Bool(b) => *b,
            Value::String(s) => match s.to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(Error::Parse {
                        input: s.clone(),
                        expected: "Boolean",
                    });
                }
            },
            other => return Err(Error::conversion(other, "Boolean")),
        };
        Ok(())
    }
}

fn int_from(v: &Value, expected: &'static str) -> Result<i64> {
    match v {
        Value::Number(Number::I64(i)) => Ok(*i),
        Value::Number(Number::U64(u)) => i64::try_from(*u).map_err(|_| Error::Overflow {
            value: u.to_string(),
            target: expected,
        }),
        // Integral floats arrive from JSON parsers that do not keep the distinction.
        Value::Number(Number::F64(f)) if f.fract() == 0.0 && f.is_finite() => {
            if *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                Ok(*f as i64)
            } else {
                Err(Error::Overflow {
                    value: Number::F64(*f).to_string(),
                    target: expected,
                })
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| Error::Parse {
            input: s.clone(),
            expected,
        }),
        other => Err(Error::conversion(other, expected)),
    }
}

impl Unmarshaler for i64 {
    fn unmarshal(&mut self, v: &Value) -> Result<()> {
        *self = int_from(v, "Int64")?;
        Ok(())
    }
}

impl Unmarshaler for i32 {
    fn unmarshal(&mut self, v: &Value) -> Result<()> {
        let n = int_from(v, "Int")?;
        *self = i32::try_from(n).map_err(|_| Error::Overflow {
            value: n.to_string(),
            target: "Int",
        })?;
        Ok(())
    }
}

impl Unmarshaler for f64 {
    fn unmarshal(&mut self, v: &Value) -> Result<()> {
        *self = match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().map_err(|_| Error::Parse {
                input: s.clone(),
                expected: "Float",
            })?,
            other => return Err(Error::conversion(other, "Float")),
        };
        Ok(())
    }
}

impl Unmarshaler for Id {
    fn unmarshal(&mut self, v: &Value) -> Result<()> {
        self.0 = match v {
            Value::String(s) => s.clone(),
            Value::Number(n) if n.is_integer() => n.to_string(),
            other => return Err(Error::conversion(other, "ID")),
        };
        Ok(())
    }
}

impl<T: Unmarshaler + Default> Unmarshaler for Option<T> {
    fn unmarshal(&mut self, v: &Value) -> Result<()> {
        *self = match v {
            Value::Null => None,
            other => Some(unmarshal(other)?),
        };
        Ok(())
    }
}

/// Lists follow GraphQL input coercion: `null` is an empty list and a
/// single non-list value becomes a one-element list.
impl<T: Unmarshaler + Default> Unmarshaler for Vec<T> {
    fn unmarshal(&mut self, v: &Value) -> Result<()> {
        self.clear();
        match v {
            Value::Null => {}
            Value::Array(items) => {
                self.reserve(items.len());
                for item in items {
                    self.push(unmarshal(item)?);
                }
            }
            single => self.push(unmarshal(single)?),
        }
        Ok(())
    }
}
