//! Encoding of components behind a 2-byte reference.
//!
//! A sequence field of list or sequence type is never inlined into the
//! parent's static region; it is written through [`Ref`] as an offset to
//! the component's full encoding in the dynamic region. This keeps every
//! static size a schema-time constant and makes recursive and mutually
//! referential schemas representable.

use crate::{
    buffer::WriteBuf,
    decode::{Buf, Decode},
    encode::Encode,
    error::{OutOfSpace, ReadError},
};

/// Writes the wrapped component into the dynamic region and a 2-byte
/// offset to it into the static slot.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Ref<'a, W: ?Sized>(pub &'a W);

impl<W> Encode for Ref<'_, W>
where
    W: Encode + ?Sized,
{
    #[inline(always)]
    fn static_size(&self) -> usize {
        2
    }

    fn encode_component(
        &self,
        buf: &mut WriteBuf<'_>,
        slot: usize,
        cursor: usize,
    ) -> Result<usize, OutOfSpace> {
        let inner = buf.reserve(cursor, self.0.static_size())?;
        buf.put_offset(slot, cursor)?;
        self.0.encode_component(buf, cursor, inner)
    }
}

/// Decodes a component stored behind a 2-byte reference at `slot`.
///
/// Resolves the offset against the slot's own address and decodes the
/// referenced component in place.
///
/// # Errors
///
/// Returns [`ReadError::MalformedOffset`] if the reference resolves
/// outside the buffer, or any error from decoding the component.
#[inline(always)]
pub fn decode_ref<'de, R>(buf: Buf<'de>, slot: usize) -> Result<R, ReadError>
where
    R: Decode<'de>,
{
    let at = buf.offset_at(slot)?;
    R::decode(buf, at)
}
