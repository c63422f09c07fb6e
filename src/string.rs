use alloc::{borrow::ToOwned, string::String};

use crate::{
    buffer::WriteBuf,
    decode::{Buf, Decode},
    encode::Encode,
    error::{OutOfSpace, ReadError},
};

impl Encode for String {
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
        self.as_str().encode_component(buf, slot, cursor)
    }
}

impl<'de> Decode<'de> for String {
    const STATIC_SIZE: usize = 2;

    #[inline(always)]
    fn decode(buf: Buf<'de>, slot: usize) -> Result<Self, ReadError> {
        <&str>::decode(buf, slot).map(ToOwned::to_owned)
    }
}
