//!
//! Lamina packs heterogeneous message structures into a single flat
//! buffer and decodes them lazily, field by field, without copying.
//!
//! Every component occupies a fixed-size static region; variable-length
//! data lives in a shared dynamic region addressed by 16-bit offsets,
//! each relative to the slot that stores it. Writers cooperate through a
//! threaded dynamic cursor, so sibling payloads never overlap; readers
//! recompute addresses on demand and validate every offset against the
//! buffer bounds.
//!
#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod buffer;
mod bytes;
mod decode;
mod encode;
mod error;
mod list;
mod oneof;
mod primitive;
mod reference;
mod str;

#[cfg(feature = "alloc")]
mod string;
#[cfg(feature = "alloc")]
mod vec;


pub use self::{
    buffer::WriteBuf,
    bytes::Bytes,
    decode::{Buf, Decode},
    encode::Encode,
    error::{OutOfSpace, ReadError},
    list::{ByteListWriter, List, ListIter, ListWriter},
    oneof::write_variant,
    reference::{decode_ref, Ref},
};

/// Encodes `value` into `dest` as a whole message.
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`OutOfSpace`] if the destination is too small for the static
/// or dynamic data.
#[inline(always)]
pub fn write<W>(value: &W, dest: &mut [u8]) -> Result<usize, OutOfSpace>
where
    W: Encode + ?Sized,
{
    value.encode(dest)
}

/// Decodes a value of type `R` from the start of `bytes`.
///
/// # Errors
///
/// Returns a [`ReadError`] if the buffer is shorter than the static
/// region or any descriptor in it is malformed.
#[inline(always)]
pub fn read<'de, R>(bytes: &'de [u8]) -> Result<R, ReadError>
where
    R: Decode<'de>,
{
    if R::STATIC_SIZE > bytes.len() {
        return Err(ReadError::TruncatedBuffer);
    }
    R::decode(Buf::new(bytes), 0)
}
