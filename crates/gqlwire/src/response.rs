//! The top-level response envelope: `{"data":...,"errors":[...]}`.

use crate::context::Context;
use crate::marshal::{CLOSE_BRACE, Marshaler};
use crate::sink::Sink;
use crate::Result;

/// Write `data` inside a response envelope.
///
/// `data` is encoded first; any errors its fields reported into `ctx` are
/// then drained and appended as the `errors` list. The key is left out when
/// nothing was reported.
pub fn write_response<M>(ctx: &Context, data: &M, w: &mut dyn Sink) -> Result<()>
where
    M: Marshaler + ?Sized,
{
    w.write_bytes(b"{\"data\":");
    data.marshal(w);
    let errors = ctx.take_errors();
    if !errors.is_empty() {
        let encoded = serde_json::to_vec(&errors)?;
        w.write_bytes(b",\"errors\":");
        w.write_bytes(&encoded);
    }
    w.write_bytes(CLOSE_BRACE);
    tracing::debug!(errors = errors.len(), "response encoded");
    Ok(())
}

/// [`write_response`] into a fresh buffer.
pub fn response_to_vec<M>(ctx: &Context, data: &M) -> Result<Vec<u8>>
where
    M: Marshaler + ?Sized,
{
    let mut buf = Vec::new();
    write_response(ctx, data, &mut buf)?;
    Ok(buf)
}
