use core::mem::size_of;

use crate::error::ReadError;

macro_rules! impl_scalar_at {
    ($($name:ident => $ty:ty,)*) => {$(
        /// Reads a big-endian value at `at`.
        ///
        /// # Errors
        ///
        /// Returns [`ReadError::TruncatedBuffer`] if the value extends
        /// past the end of the buffer.
        #[inline(always)]
        pub fn $name(&self, at: usize) -> Result<$ty, ReadError> {
            let bytes = self.get(at, size_of::<$ty>())?;
            let mut raw = [0; size_of::<$ty>()];
            raw.copy_from_slice(bytes);
            Ok(<$ty>::from_be_bytes(raw))
        }
    )*};
}

/// Immutable view of an encoded message.
///
/// A `Buf` is freely copyable and carries the declared buffer end, so
/// every read is bounds-checked against it. Composite readers hold a
/// `Buf` plus the address of their own static region and recompute
/// referenced addresses on demand; nothing is materialized eagerly.
#[derive(Clone, Copy, Debug)]
pub struct Buf<'de> {
    bytes: &'de [u8],
}

impl<'de> Buf<'de> {
    /// Wraps an encoded buffer.
    #[inline(always)]
    pub fn new(bytes: &'de [u8]) -> Self {
        Buf { bytes }
    }

    /// Declared length of the buffer.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline(always)]
    pub(crate) fn get(&self, at: usize, len: usize) -> Result<&'de [u8], ReadError> {
        self.bytes
            .get(at..)
            .and_then(|tail| tail.get(..len))
            .ok_or(ReadError::TruncatedBuffer)
    }

    // Invariant: caller has already validated `at..at + len`.
    #[inline(always)]
    pub(crate) fn subslice(&self, at: usize, len: usize) -> &'de [u8] {
        &self.bytes[at..at + len]
    }

    impl_scalar_at! {
        u8_at => u8,
        i8_at => i8,
        u16_at => u16,
        i16_at => i16,
        u32_at => u32,
        i32_at => i32,
        u64_at => u64,
        i64_at => i64,
        f32_at => f32,
        f64_at => f64,
    }

    /// Reads a boolean at `at`. Any nonzero byte is `true`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::TruncatedBuffer`] past the end of the buffer.
    #[inline(always)]
    pub fn bool_at(&self, at: usize) -> Result<bool, ReadError> {
        Ok(self.u8_at(at)? != 0)
    }

    /// Resolves the offset stored at `slot` against the slot's own
    /// address.
    ///
    /// A stored offset is at least the width of its own 2-byte slot;
    /// anything smaller would alias the slot and cannot come from a
    /// writer.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::MalformedOffset`] if the target lands past
    /// the end of the buffer or inside the slot itself.
    #[inline(always)]
    pub fn offset_at(&self, slot: usize) -> Result<usize, ReadError> {
        let offset = self.u16_at(slot)? as usize;
        if offset < 2 {
            return Err(ReadError::MalformedOffset);
        }
        let target = slot + offset;
        if target > self.bytes.len() {
            return Err(ReadError::MalformedOffset);
        }
        Ok(target)
    }

    /// Bytes of the terminated string starting at `at`, terminator
    /// excluded. The scan never passes the declared buffer end.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::UnterminatedString`] if the terminator is
    /// missing, or [`ReadError::MalformedOffset`] if `at` is out of
    /// bounds.
    pub fn str_bytes_at(&self, at: usize) -> Result<&'de [u8], ReadError> {
        let tail = self.bytes.get(at..).ok_or(ReadError::MalformedOffset)?;
        match tail.iter().position(|&b| b == 0) {
            Some(end) => Ok(&tail[..end]),
            None => Err(ReadError::UnterminatedString),
        }
    }

    /// Decodes the oneof descriptor at `slot`: the tag byte and the
    /// resolved address of the variant payload. The payload offset is
    /// anchored right after the tag.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::TruncatedBuffer`] or
    /// [`ReadError::MalformedOffset`] if the descriptor or its target is
    /// out of bounds.
    #[inline(always)]
    pub fn variant_at(&self, slot: usize) -> Result<(u8, usize), ReadError> {
        let tag = self.u8_at(slot)?;
        let payload = self.offset_at(slot + 1)?;
        Ok((tag, payload))
    }
}

/// Reader side of a message component.
///
/// Decoding computes addresses from the component's static slot and
/// constructs a view; scalars decode to themselves, composites to lazy
/// readers over the same buffer.
pub trait Decode<'de>: Sized {
    /// Size of this component's static region in bytes.
    ///
    /// Must match the writer's [`static_size`] and is used as the
    /// element stride when the type appears inside a list.
    ///
    /// [`static_size`]: crate::Encode::static_size
    const STATIC_SIZE: usize;

    /// Decodes the component whose static region starts at `slot`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReadError`] if the static region or any descriptor it
    /// contains does not resolve within the buffer.
    fn decode(buf: Buf<'de>, slot: usize) -> Result<Self, ReadError>;
}
