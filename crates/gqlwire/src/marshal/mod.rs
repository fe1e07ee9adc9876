//! Write-time encoding contracts and the building blocks composed from them.
//!
//! Two independent capabilities exist. [`Marshaler`] writes a complete JSON
//! fragment and cannot fail. [`ContextMarshaler`] may consult the request
//! [`Context`] and may fail. [`wrap_context_marshaler`] bridges the second
//! into the first by reporting the error and writing `null` instead.

mod array;
mod object;
mod scalars;

pub use array::{Array, Element};
pub use object::Object;
pub use scalars::{Float, Id, write_quoted};

use crate::context::{Context, DisplayPath};
use crate::sink::Sink;
use crate::Result;

pub const OPEN_BRACE: &[u8] = b"{";
pub const CLOSE_BRACE: &[u8] = b"}";
pub const OPEN_BRACKET: &[u8] = b"[";
pub const CLOSE_BRACKET: &[u8] = b"]";
pub const COLON: &[u8] = b":";
pub const COMMA: &[u8] = b",";

/// Writes a complete value fragment to the sink.
///
/// There is no way to signal failure: implementations that can fail must
/// fall back to a substitute value such as [`NULL`].
pub trait Marshaler {
    fn marshal(&self, w: &mut dyn Sink);

    /// True only for [`Empty`], however it is wrapped. Containers use it to
    /// drop the position along with its separator.
    #[doc(hidden)]
    fn is_empty_marker(&self) -> bool {
        false
    }
}

/// Writes a value fragment, with access to the request context, and may fail.
pub trait ContextMarshaler {
    fn marshal_with_context(&self, ctx: &Context, w: &mut dyn Sink) -> Result<()>;

    #[doc(hidden)]
    fn is_empty_marker(&self) -> bool {
        false
    }
}

/// A pre-encoded constant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal(&'static [u8]);

pub const NULL: Literal = Literal(b"null");
pub const TRUE: Literal = Literal(b"true");
pub const FALSE: Literal = Literal(b"false");

impl Literal {
    pub const fn from_bool(b: bool) -> Literal {
        if b { TRUE } else { FALSE }
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.0
    }
}

impl Marshaler for Literal {
    fn marshal(&self, w: &mut dyn Sink) {
        w.write_bytes(self.0);
    }
}

impl ContextMarshaler for Literal {
    fn marshal_with_context(&self, _ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        w.write_bytes(self.0);
        Ok(())
    }
}

/// Marker for "omit this element". Writes nothing under either contract.
///
/// Inside [`Array`] and [`Object`] the position is skipped with no separator,
/// whether it arrives bare, boxed, as `Some(Empty)` or behind an adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Marshaler for Empty {
    fn marshal(&self, _w: &mut dyn Sink) {}

    fn is_empty_marker(&self) -> bool {
        true
    }
}

impl ContextMarshaler for Empty {
    fn marshal_with_context(&self, _ctx: &Context, _w: &mut dyn Sink) -> Result<()> {
        Ok(())
    }

    fn is_empty_marker(&self) -> bool {
        true
    }
}

/// A [`ContextMarshaler`] bound to a context, usable as a [`Marshaler`].
///
/// Built by [`wrap_context_marshaler`].
pub struct ContextMarshalerAdapter<'a, M: ?Sized> {
    ctx: &'a Context,
    inner: &'a M,
}

/// Bind `m` to `ctx` so it can be used where a [`Marshaler`] is expected.
///
/// When `m` fails, the error is added to `ctx`'s error list, anything `m`
/// wrote is discarded and `null` is written in its place.
///
/// Each call encodes into its own scratch buffer before copying to the sink,
/// so adapters nested field inside field copy every subtree once per level.
/// Keep adapters at the fields that can actually fail.
pub fn wrap_context_marshaler<'a, M>(ctx: &'a Context, m: &'a M) -> ContextMarshalerAdapter<'a, M>
where
    M: ContextMarshaler + ?Sized,
{
    ContextMarshalerAdapter { ctx, inner: m }
}

impl<M: ContextMarshaler + ?Sized> Marshaler for ContextMarshalerAdapter<'_, M> {
    fn marshal(&self, w: &mut dyn Sink) {
        let mut buf = Vec::new();
        match self.inner.marshal_with_context(self.ctx, &mut buf) {
            Ok(()) => w.write_bytes(&buf),
            Err(err) => {
                tracing::debug!(
                    path = %DisplayPath(self.ctx.path()),
                    error = %err,
                    "field marshaling failed, writing null"
                );
                self.ctx.add_error(err);
                NULL.marshal(w);
            }
        }
    }

    fn is_empty_marker(&self) -> bool {
        self.inner.is_empty_marker()
    }
}

/// Lets a closure act as a [`Marshaler`].
pub struct WriterFn<F>(pub F);

impl<F: Fn(&mut dyn Sink)> WriterFn<F> {
    pub fn new(f: F) -> Self {
        WriterFn(f)
    }
}

impl<F: Fn(&mut dyn Sink)> Marshaler for WriterFn<F> {
    fn marshal(&self, w: &mut dyn Sink) {
        (self.0)(w)
    }
}

/// Lets a closure act as a [`ContextMarshaler`].
pub struct ContextWriterFn<F>(pub F);

impl<F> ContextWriterFn<F>
where
    F: Fn(&Context, &mut dyn Sink) -> Result<()>,
{
    pub fn new(f: F) -> Self {
        ContextWriterFn(f)
    }
}

impl<F> ContextMarshaler for ContextWriterFn<F>
where
    F: Fn(&Context, &mut dyn Sink) -> Result<()>,
{
    fn marshal_with_context(&self, ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        (self.0)(ctx, w)
    }
}

impl<T: Marshaler + ?Sized> Marshaler for &T {
    fn marshal(&self, w: &mut dyn Sink) {
        (**self).marshal(w)
    }

    fn is_empty_marker(&self) -> bool {
        (**self).is_empty_marker()
    }
}

impl<T: Marshaler + ?Sized> Marshaler for Box<T> {
    fn marshal(&self, w: &mut dyn Sink) {
        (**self).marshal(w)
    }

    fn is_empty_marker(&self) -> bool {
        (**self).is_empty_marker()
    }
}

impl<T: ContextMarshaler + ?Sized> ContextMarshaler for &T {
    fn marshal_with_context(&self, ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        (**self).marshal_with_context(ctx, w)
    }

    fn is_empty_marker(&self) -> bool {
        (**self).is_empty_marker()
    }
}

impl<T: ContextMarshaler + ?Sized> ContextMarshaler for Box<T> {
    fn marshal_with_context(&self, ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        (**self).marshal_with_context(ctx, w)
    }

    fn is_empty_marker(&self) -> bool {
        (**self).is_empty_marker()
    }
}

impl<T: Marshaler> Marshaler for Option<T> {
    fn marshal(&self, w: &mut dyn Sink) {
        match self {
            Some(v) => v.marshal(w),
            None => NULL.marshal(w),
        }
    }

    fn is_empty_marker(&self) -> bool {
        self.as_ref().is_some_and(T::is_empty_marker)
    }
}

impl<T: ContextMarshaler> ContextMarshaler for Option<T> {
    fn marshal_with_context(&self, ctx: &Context, w: &mut dyn Sink) -> Result<()> {
        match self {
            Some(v) => v.marshal_with_context(ctx, w),
            None => NULL.marshal_with_context(ctx, w),
        }
    }

    fn is_empty_marker(&self) -> bool {
        self.as_ref().is_some_and(T::is_empty_marker)
    }
}
