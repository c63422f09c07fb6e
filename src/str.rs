use crate::{
    buffer::WriteBuf,
    bytes::Bytes,
    decode::{Buf, Decode},
    encode::Encode,
    error::{OutOfSpace, ReadError},
};

impl Encode for str {
    #[inline(always)]
    fn static_size(&self) -> usize {
        2
    }

    #[inline(always)]
    fn encode_component(
        &self,
        buf: &mut WriteBuf<'_>,
        slot: usize,
        cursor: usize,
    ) -> Result<usize, OutOfSpace> {
        Bytes(self.as_bytes()).encode_component(buf, slot, cursor)
    }
}

impl<'de> Decode<'de> for &'de str {
    const STATIC_SIZE: usize = 2;

    #[inline(always)]
    fn decode(buf: Buf<'de>, slot: usize) -> Result<Self, ReadError> {
        let bytes = <&[u8]>::decode(buf, slot)?;
        core::str::from_utf8(bytes).map_err(|_| ReadError::InvalidUtf8)
    }
}
