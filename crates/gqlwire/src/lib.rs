#![doc = include_str!("../README.md")]

pub mod context;
pub mod error;
pub mod marshal;
mod number;
pub mod sink;
pub mod unmarshal;
pub mod value;

#[cfg(feature = "json")]
pub mod response;

pub use crate::context::{Context, FieldError, PathSegment};
pub use crate::error::{Error, Result};
pub use crate::marshal::{
    Array, ContextMarshaler, ContextMarshalerAdapter, ContextWriterFn, Element, Empty, FALSE,
    Float, Id, Literal, Marshaler, NULL, Object, TRUE, WriterFn, wrap_context_marshaler,
};
pub use crate::sink::{IoSink, Sink};
pub use crate::unmarshal::{ContextUnmarshaler, Unmarshaler};
pub use crate::value::{Number, Value};

use std::io::Write;

pub fn encode_to_vec<M: Marshaler + ?Sized>(m: &M) -> Vec<u8> {
    let mut buf = Vec::new();
    m.marshal(&mut buf);
    buf
}

/// Encode into a `String`. Invalid UTF-8 written by a custom marshaler is
/// replaced rather than rejected.
pub fn encode_to_string<M: Marshaler + ?Sized>(m: &M) -> String {
    match String::from_utf8(encode_to_vec(m)) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

pub fn encode_to_writer<W: Write, M: Marshaler + ?Sized>(writer: W, m: &M) -> Result<()> {
    let mut sink = IoSink::new(writer);
    m.marshal(&mut sink);
    sink.finish()?;
    Ok(())
}
