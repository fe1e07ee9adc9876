use std::fmt;

use super::{
    CLOSE_BRACKET, COMMA, ContextMarshaler, ContextMarshalerAdapter, Empty, Float, Id, Literal,
    Marshaler, OPEN_BRACKET, Object, WriterFn,
};
use crate::context::Context;
use crate::sink::Sink;
use crate::value::Value;
use crate::Result;

/// One position in an [`Array`] or one field value in an [`Object`].
///
/// `Empty` is distinct from a shorter sequence and from a `null` value: the
/// position is dropped from the output along with its separator.
pub enum Element<'a> {
    Empty,
    Value(Box<dyn Marshaler + 'a>),
}

impl<'a> Element<'a> {
    pub fn value<M: Marshaler + 'a>(m: M) -> Self {
        Element::Value(Box::new(m))
    }

    /// True for [`Element::Empty`] and for a value that is [`Empty`] behind
    /// a box, reference, `Some` or adapter.
    pub fn is_empty(&self) -> bool {
        match self {
            Element::Empty => true,
            Element::Value(m) => m.is_empty_marker(),
        }
    }
}

impl Marshaler for Element<'_> {
    fn marshal(&self, w: &mut dyn Sink) {
        if let Element::Value(m) = self {
            m.marshal(w);
        }
    }

    fn is_empty_marker(&self) -> bool {
        self.is_empty()
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Empty => f.write_str("Empty"),
            Element::Value(_) => f.write_str("Value(..)"),
        }
    }
}

impl From<Empty> for Element<'_> {
    fn from(_: Empty) -> Self {
        Element::Empty
    }
}

impl<'a> From<Box<dyn Marshaler + 'a>> for Element<'a> {
    fn from(m: Box<dyn Marshaler + 'a>) -> Self {
        Element::Value(m)
    }
}

macro_rules! element_from_owned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Element<'_> {
                fn from(m: $ty) -> Self {
                    Element::value(m)
                }
            }
        )*
    };
}

element_from_owned!(Literal, bool, i32, i64, u32, u64, f64, String, Float, Id, Value);

impl<'a> From<&'a str> for Element<'a> {
    fn from(s: &'a str) -> Self {
        Element::value(s)
    }
}

impl<'a> From<Array<'a>> for Element<'a> {
    fn from(a: Array<'a>) -> Self {
        Element::value(a)
    }
}

impl<'a> From<Object<'a>> for Element<'a> {
    fn from(o: Object<'a>) -> Self {
        Element::value(o)
    }
}

impl<'a, M: ContextMarshaler + ?Sized + 'a> From<ContextMarshalerAdapter<'a, M>> for Element<'a> {
    fn from(a: ContextMarshalerAdapter<'a, M>) -> Self {
        Element::value(a)
    }
}

impl<'a, F: Fn(&mut dyn Sink) + 'a> From<WriterFn<F>> for Element<'a> {
    fn from(f: WriterFn<F>) -> Self {
        Element::value(f)
    }
}

impl<'a, T: Marshaler + 'a> From<Option<T>> for Element<'a> {
    fn from(v: Option<T>) -> Self {
        Element::value(v)
    }
}

/// A list of values encoded as `[a,b,c]`.
///
/// Empty positions are skipped entirely: no bytes and no comma.
#[derive(Debug, Default)]
pub struct Array<'a> {
    elements: Vec<Element<'a>>,
}

impl<'a> Array<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, element: impl Into<Element<'a>>) {
        self.elements.push(element.into());
    }

    /// Number of positions, Empty ones included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element<'a>> {
        self.elements.iter()
    }
}

impl Marshaler for Array<'_> {
    fn marshal(&self, w: &mut dyn Sink) {
        w.write_bytes(OPEN_BRACKET);
        let mut wrote_any = false;
        for element in &self.elements {
            if element.is_empty() {
                continue;
            }
            if wrote_any {
                w.write_bytes(COMMA);
            }
            element.marshal(w);
            wrote_any = true;
        }
        w.write_bytes(CLOSE_BRACKET);
    }
}

impl ContextMarshaler for Array<'_> {
    fn marshal_with_context(&self, _ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        self.marshal(w);
        Ok(())
    }
}

impl<'a> FromIterator<Element<'a>> for Array<'a> {
    fn from_iter<I: IntoIterator<Item = Element<'a>>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<Element<'a>> for Array<'a> {
    fn extend<I: IntoIterator<Item = Element<'a>>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a> From<Vec<Element<'a>>> for Array<'a> {
    fn from(elements: Vec<Element<'a>>) -> Self {
        Self { elements }
    }
}
