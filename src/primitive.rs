use core::mem::size_of;

use crate::{
    buffer::WriteBuf,
    decode::{Buf, Decode},
    encode::Encode,
    error::{OutOfSpace, ReadError},
};

macro_rules! impl_primitive {
    ($($ty:ty => $get:ident,)*) => {$(
        impl Encode for $ty {
            #[inline(always)]
            fn static_size(&self) -> usize {
                size_of::<$ty>()
            }

            #[inline(always)]
            fn encode_component(
                &self,
                buf: &mut WriteBuf<'_>,
                slot: usize,
                cursor: usize,
            ) -> Result<usize, OutOfSpace> {
                buf.put(slot, &self.to_be_bytes());
                Ok(cursor)
            }
        }

        impl<'de> Decode<'de> for $ty {
            const STATIC_SIZE: usize = size_of::<$ty>();

            #[inline(always)]
            fn decode(buf: Buf<'de>, slot: usize) -> Result<Self, ReadError> {
                buf.$get(slot)
            }
        }
    )*};
}

impl_primitive! {
    u8 => u8_at,
    i8 => i8_at,
    u16 => u16_at,
    i16 => i16_at,
    u32 => u32_at,
    i32 => i32_at,
    u64 => u64_at,
    i64 => i64_at,
    f32 => f32_at,
    f64 => f64_at,
}

impl Encode for bool {
    #[inline(always)]
    fn static_size(&self) -> usize {
        1
    }

    #[inline(always)]
    fn encode_component(
        &self,
        buf: &mut WriteBuf<'_>,
        slot: usize,
        cursor: usize,
    ) -> Result<usize, OutOfSpace> {
        buf.put(slot, &[*self as u8]);
        Ok(cursor)
    }
}

impl<'de> Decode<'de> for bool {
    const STATIC_SIZE: usize = 1;

    #[inline(always)]
    fn decode(buf: Buf<'de>, slot: usize) -> Result<Self, ReadError> {
        buf.bool_at(slot)
    }
}
