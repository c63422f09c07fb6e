use alloc::vec::Vec;

use crate::{
    buffer::WriteBuf,
    decode::{Buf, Decode},
    encode::Encode,
    error::{OutOfSpace, ReadError},
    list::{List, ListWriter},
};

impl<T> Encode for Vec<T>
where
    T: Encode,
{
    #[inline(always)]
    fn static_size(&self) -> usize {
        4
    }

    #[inline(always)]
    fn encode_component(
        &self,
        buf: &mut WriteBuf<'_>,
        slot: usize,
        cursor: usize,
    ) -> Result<usize, OutOfSpace> {
        ListWriter(self).encode_component(buf, slot, cursor)
    }
}

impl<'de, T> Decode<'de> for Vec<T>
where
    T: Decode<'de>,
{
    const STATIC_SIZE: usize = 4;

    #[inline(always)]
    fn decode(buf: Buf<'de>, slot: usize) -> Result<Self, ReadError> {
        List::<T>::decode(buf, slot)?.iter().collect()
    }
}
