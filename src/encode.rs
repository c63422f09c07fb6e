use crate::{buffer::WriteBuf, error::OutOfSpace};

/// Writer side of a message component.
///
/// A component owns a fixed-size *static region* and appends any
/// variable-length payload to the shared *dynamic region*. Sequence and
/// oneof writer types produced by a schema compiler implement this trait;
/// the crate provides implementations for scalars, strings, lists and
/// references.
///
/// Implementations must keep `static_size` value-independent for a given
/// type: it is used as the element stride when the type appears inside a
/// list, and must match the reader's [`STATIC_SIZE`].
///
/// [`STATIC_SIZE`]: crate::Decode::STATIC_SIZE
pub trait Encode {
    /// Size of this component's static region in bytes.
    ///
    /// Dynamic data is not included, but the fixed-size descriptors that
    /// point to it are.
    fn static_size(&self) -> usize;

    /// Writes this component as part of a larger message.
    ///
    /// Static data goes into the pre-reserved slot at `slot`; dynamic
    /// data is appended at `cursor`, the first free byte of the shared
    /// dynamic region. Returns the updated cursor, which the caller
    /// passes unchanged to the next field writer.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfSpace`] if the dynamic data does not fit. The
    /// buffer contents are unspecified after a failure; the whole
    /// top-level [`encode`](Encode::encode) call is considered failed.
    fn encode_component(
        &self,
        buf: &mut WriteBuf<'_>,
        slot: usize,
        cursor: usize,
    ) -> Result<usize, OutOfSpace>;

    /// Encodes this component as a whole message, returning the number
    /// of bytes written.
    ///
    /// The static region is validated against the destination length
    /// before anything is written; the dynamic cursor starts right after
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfSpace`] if the destination is too small for the
    /// static or dynamic data.
    fn encode(&self, dest: &mut [u8]) -> Result<usize, OutOfSpace> {
        let static_size = self.static_size();
        if static_size > dest.len() {
            return Err(OutOfSpace);
        }
        let mut buf = WriteBuf::new(dest);
        self.encode_component(&mut buf, 0, static_size)
    }
}

impl<W> Encode for &W
where
    W: Encode + ?Sized,
{
    #[inline(always)]
    fn static_size(&self) -> usize {
        (**self).static_size()
    }

    #[inline(always)]
    fn encode_component(
        &self,
        buf: &mut WriteBuf<'_>,
        slot: usize,
        cursor: usize,
    ) -> Result<usize, OutOfSpace> {
        (**self).encode_component(buf, slot, cursor)
    }
}
