//! Oneof (tagged union) descriptors.
//!
//! The static region of a oneof is 3 bytes: a tag byte selecting the
//! active variant and a 2-byte offset to the variant payload, anchored
//! right after the tag. The payload is the variant's full encoding, its
//! own static region followed by its dynamic data, both inside the
//! caller's dynamic region. Tags are schema-assigned and need not be
//! contiguous.
//!
//! Writer enums generated for oneof types dispatch each variant to
//! [`write_variant`]; reader enums decode the tag via
//! [`Buf::variant_at`](crate::Buf::variant_at) and construct the matching
//! variant reader lazily.

use crate::{buffer::WriteBuf, encode::Encode, error::OutOfSpace};

/// Writes a oneof descriptor at `slot` and the selected variant's
/// payload at `cursor`, returning the updated cursor.
///
/// # Errors
///
/// Returns [`OutOfSpace`] if the variant payload does not fit.
pub fn write_variant<W>(
    buf: &mut WriteBuf<'_>,
    slot: usize,
    cursor: usize,
    tag: u8,
    value: &W,
) -> Result<usize, OutOfSpace>
where
    W: Encode + ?Sized,
{
    let inner = buf.reserve(cursor, value.static_size())?;
    buf.put(slot, &[tag]);
    buf.put_offset(slot + 1, cursor)?;
    value.encode_component(buf, cursor, inner)
}
