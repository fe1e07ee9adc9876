//! Built-in scalar encoders: String, Int, Float, Boolean and ID, plus the
//! dynamic input [`Value`].

use std::fmt;

use super::{
    CLOSE_BRACE, CLOSE_BRACKET, COLON, COMMA, ContextMarshaler, Literal, Marshaler, NULL,
    OPEN_BRACE, OPEN_BRACKET,
};
use crate::context::Context;
use crate::number::format_float;
use crate::sink::Sink;
use crate::value::{Number, Value};
use crate::{Error, Result};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Write `s` as a quoted JSON string.
pub fn write_quoted(s: &str, w: &mut dyn Sink) {
    w.write_bytes(b"\"");
    let bytes = s.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let short: &[u8] = match b {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            0x08 => b"\\b",
            0x0C => b"\\f",
            0x00..=0x1F => &[],
            _ => continue,
        };
        if start < i {
            w.write_bytes(&bytes[start..i]);
        }
        if short.is_empty() {
            let esc = [
                b'\\',
                b'u',
                b'0',
                b'0',
                HEX[(b >> 4) as usize],
                HEX[(b & 0x0F) as usize],
            ];
            w.write_bytes(&esc);
        } else {
            w.write_bytes(short);
        }
        start = i + 1;
    }
    if start < bytes.len() {
        w.write_bytes(&bytes[start..]);
    }
    w.write_bytes(b"\"");
}

impl Marshaler for str {
    fn marshal(&self, w: &mut dyn Sink) {
        write_quoted(self, w);
    }
}

impl Marshaler for String {
    fn marshal(&self, w: &mut dyn Sink) {
        write_quoted(self, w);
    }
}

impl Marshaler for bool {
    fn marshal(&self, w: &mut dyn Sink) {
        Literal::from_bool(*self).marshal(w);
    }
}

macro_rules! int_marshaler {
    ($($ty:ty),*) => {
        $(
            impl Marshaler for $ty {
                fn marshal(&self, w: &mut dyn Sink) {
                    w.write_str(&self.to_string());
                }
            }
        )*
    };
}

int_marshaler!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A GraphQL `Float`.
///
/// JSON has no spelling for NaN or the infinities. The simple contract
/// writes `null` for them; the context contract fails with
/// [`Error::NonFiniteFloat`], so a wrapped float gets its error reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float(pub f64);

impl Marshaler for Float {
    fn marshal(&self, w: &mut dyn Sink) {
        match format_float(self.0) {
            Some(s) => w.write_str(&s),
            None => NULL.marshal(w),
        }
    }
}

impl ContextMarshaler for Float {
    fn marshal_with_context(&self, _ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        let s = format_float(self.0).ok_or(Error::NonFiniteFloat)?;
        w.write_str(&s);
        Ok(())
    }
}

impl Marshaler for f64 {
    fn marshal(&self, w: &mut dyn Sink) {
        Float(*self).marshal(w);
    }
}

impl ContextMarshaler for f64 {
    fn marshal_with_context(&self, ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        Float(*self).marshal_with_context(ctx, w)
    }
}

/// A GraphQL `ID`. Always written as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Id(pub String);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id(s)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id(s.to_owned())
    }
}

impl From<i64> for Id {
    fn from(i: i64) -> Self {
        Id(i.to_string())
    }
}

impl Marshaler for Id {
    fn marshal(&self, w: &mut dyn Sink) {
        write_quoted(&self.0, w);
    }
}

impl Marshaler for Value {
    fn marshal(&self, w: &mut dyn Sink) {
        match self {
            Value::Null => NULL.marshal(w),
            Value::Bool(b) => b.marshal(w),
            Value::Number(Number::F64(f)) => Float(*f).marshal(w),
            Value::Number(n) => w.write_str(&n.to_string()),
            Value::String(s) => write_quoted(s, w),
            Value::Array(items) => {
                w.write_bytes(OPEN_BRACKET);
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        w.write_bytes(COMMA);
                    }
                    item.marshal(w);
                }
                w.write_bytes(CLOSE_BRACKET);
            }
            Value::Object(fields) => {
                w.write_bytes(OPEN_BRACE);
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        w.write_bytes(COMMA);
                    }
                    write_quoted(key, w);
                    w.write_bytes(COLON);
                    value.marshal(w);
                }
                w.write_bytes(CLOSE_BRACE);
            }
        }
    }
}

impl ContextMarshaler for Value {
    // Fails on the first non-finite float anywhere in the tree.
    fn marshal_with_context(&self, ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        match self {
            Value::Number(Number::F64(f)) => Float(*f).marshal_with_context(ctx, w),
            Value::Array(items) => {
                w.write_bytes(OPEN_BRACKET);
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        w.write_bytes(COMMA);
                    }
                    item.marshal_with_context(ctx, w)?;
                }
                w.write_bytes(CLOSE_BRACKET);
                Ok(())
            }
            Value::Object(fields) => {
                w.write_bytes(OPEN_BRACE);
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        w.write_bytes(COMMA);
                    }
                    write_quoted(key, w);
                    w.write_bytes(COLON);
                    value.marshal_with_context(ctx, w)?;
                }
                w.write_bytes(CLOSE_BRACE);
                Ok(())
            }
            other => {
                other.marshal(w);
                Ok(())
            }
        }
    }
}
