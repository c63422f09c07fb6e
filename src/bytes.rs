use crate::{
    buffer::WriteBuf,
    decode::{Buf, Decode},
    encode::Encode,
    error::{OutOfSpace, ReadError},
};

/// Raw byte string written with the string convention: a 2-byte offset
/// in the static slot and the bytes plus a trailing terminator in the
/// dynamic region.
///
/// Bytes containing an embedded zero decode back shorter; use a list of
/// `u8` for arbitrary binary payloads.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Bytes<'a>(pub &'a [u8]);

impl Encode for Bytes<'_> {
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
        buf.reserve(cursor, self.0.len() + 1)?;
        buf.put_offset(slot, cursor)?;
        let cursor = buf.append(cursor, self.0)?;
        buf.append(cursor, &[0])
    }
}

impl<'de> Decode<'de> for &'de [u8] {
    const STATIC_SIZE: usize = 2;

    #[inline(always)]
    fn decode(buf: Buf<'de>, slot: usize) -> Result<Self, ReadError> {
        let at = buf.offset_at(slot)?;
        buf.str_bytes_at(at)
    }
}
