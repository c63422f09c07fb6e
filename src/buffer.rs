use crate::error::OutOfSpace;

/// Destination buffer for encoding.
///
/// Wraps the caller's byte slice so that every write into the dynamic
/// region is a checked operation. The buffer is never grown; running out
/// of room is reported as [`OutOfSpace`].
///
/// Positions are plain indices into the slice. Static slots are
/// pre-reserved by the caller before a component is asked to fill them,
/// either by the top-level static-size check or by [`reserve`], so slot
/// stores are not re-checked here.
///
/// [`reserve`]: WriteBuf::reserve
pub struct WriteBuf<'a> {
    buf: &'a mut [u8],
}

impl<'a> WriteBuf<'a> {
    /// Wraps a destination slice.
    #[inline(always)]
    pub fn new(buf: &'a mut [u8]) -> Self {
        WriteBuf { buf }
    }

    /// Total capacity of the destination.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the destination is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Stores bytes into a pre-reserved static slot.
    ///
    /// The slot must have been reserved beforehand; this is the
    /// cursor-threading contract, not a runtime check.
    #[inline(always)]
    pub fn put(&mut self, slot: usize, bytes: &[u8]) {
        self.buf[slot..slot + bytes.len()].copy_from_slice(bytes);
    }

    /// Stores the offset from `slot` to `target` into the 2-byte slot.
    ///
    /// Offsets are always relative to the address of the slot that
    /// stores them. `target` must not precede `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfSpace`] if the distance does not fit in 16 bits.
    #[inline(always)]
    pub fn put_offset(&mut self, slot: usize, target: usize) -> Result<(), OutOfSpace> {
        let offset = u16::try_from(target - slot).map_err(|_| OutOfSpace)?;
        self.put(slot, &offset.to_be_bytes());
        Ok(())
    }

    /// Appends bytes at the dynamic cursor, returning the advanced cursor.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfSpace`] if the bytes do not fit before the end of
    /// the destination.
    #[inline(always)]
    pub fn append(&mut self, cursor: usize, bytes: &[u8]) -> Result<usize, OutOfSpace> {
        let end = self.reserve(cursor, bytes.len())?;
        self.buf[cursor..end].copy_from_slice(bytes);
        Ok(end)
    }

    /// Reserves `len` bytes at the dynamic cursor without writing them,
    /// returning the cursor past the reservation.
    ///
    /// Used to claim room for a nested component's static region before
    /// handing it the slot.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfSpace`] if the reservation passes the end of the
    /// destination.
    #[inline(always)]
    pub fn reserve(&self, cursor: usize, len: usize) -> Result<usize, OutOfSpace> {
        let end = cursor.checked_add(len).ok_or(OutOfSpace)?;
        if end > self.buf.len() {
            return Err(OutOfSpace);
        }
        Ok(end)
    }
}
