use std::borrow::Cow;

use super::{
    CLOSE_BRACE, COLON, COMMA, ContextMarshaler, Element, Marshaler, OPEN_BRACE, write_quoted,
};
use crate::context::Context;
use crate::sink::Sink;
use crate::Result;

/// An ordered field set encoded as `{"key":value,...}`.
///
/// Fields are written in insertion order. A field whose value is empty (see
/// [`Element::is_empty`]) is left out together with its key.
#[derive(Debug, Default)]
pub struct Object<'a> {
    fields: Vec<(Cow<'a, str>, Element<'a>)>,
}

impl<'a> Object<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: impl Into<Cow<'a, str>>, value: impl Into<Element<'a>>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn field(mut self, key: impl Into<Cow<'a, str>>, value: impl Into<Element<'a>>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_ref())
    }
}

impl Marshaler for Object<'_> {
    fn marshal(&self, w: &mut dyn Sink) {
        w.write_bytes(OPEN_BRACE);
        let mut wrote_any = false;
        for (key, value) in &self.fields {
            if value.is_empty() {
                continue;
            }
            if wrote_any {
                w.write_bytes(COMMA);
            }
            write_quoted(key, w);
            w.write_bytes(COLON);
            value.marshal(w);
            wrote_any = true;
        }
        w.write_bytes(CLOSE_BRACE);
    }
}

impl ContextMarshaler for Object<'_> {
    fn marshal_with_context(&self, _ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        self.marshal(w);
        Ok(())
    }
}
