use core::{fmt, marker::PhantomData};

use crate::{
    buffer::WriteBuf,
    decode::{Buf, Decode},
    encode::Encode,
    error::{OutOfSpace, ReadError},
};

/// Writer for a homogeneous list.
///
/// The static region is a 4-byte descriptor: the element count and the
/// offset of the content area. Elements are stored inline in the content
/// area with a stride of the element type's own static size; element
/// dynamic data follows the last element slot, threaded element to
/// element.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct ListWriter<'a, T>(pub &'a [T]);

impl<T> Encode for ListWriter<'_, T>
where
    T: Encode,
{
    #[inline(always)]
    fn static_size(&self) -> usize {
        4
    }

    fn encode_component(
        &self,
        buf: &mut WriteBuf<'_>,
        slot: usize,
        cursor: usize,
    ) -> Result<usize, OutOfSpace> {
        let len = u16::try_from(self.0.len()).map_err(|_| OutOfSpace)?;
        let element_static = self.0.first().map_or(0, Encode::static_size);

        let mut dyn_cursor = buf.reserve(cursor, element_static * self.0.len())?;
        buf.put(slot, &len.to_be_bytes());
        buf.put_offset(slot + 2, cursor)?;

        let mut elem_slot = cursor;
        for value in self.0 {
            dyn_cursor = value.encode_component(buf, elem_slot, dyn_cursor)?;
            elem_slot += element_static;
        }
        Ok(dyn_cursor)
    }
}

/// Writer for a list of raw bytes.
///
/// Wire-compatible with `ListWriter<u8>`; the content degenerates to a
/// single flat copy.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct ByteListWriter<'a>(pub &'a [u8]);

impl Encode for ByteListWriter<'_> {
    #[inline(always)]
    fn static_size(&self) -> usize {
        4
    }

    fn encode_component(
        &self,
        buf: &mut WriteBuf<'_>,
        slot: usize,
        cursor: usize,
    ) -> Result<usize, OutOfSpace> {
        let len = u16::try_from(self.0.len()).map_err(|_| OutOfSpace)?;
        buf.put(slot, &len.to_be_bytes());
        buf.put_offset(slot + 2, cursor)?;
        buf.append(cursor, self.0)
    }
}

/// Lazy view of an encoded list.
///
/// Holds the content address and length; elements are decoded on demand
/// at `content + index * T::STATIC_SIZE`. The descriptor and the whole
/// content area are validated against the buffer bounds on construction.
pub struct List<'de, T> {
    buf: Buf<'de>,
    content: usize,
    len: usize,
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for List<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for List<'_, T> {}

impl<T> fmt::Debug for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("content", &self.content)
            .field("len", &self.len)
            .finish()
    }
}

impl<'de, T> Decode<'de> for List<'de, T>
where
    T: Decode<'de>,
{
    const STATIC_SIZE: usize = 4;

    fn decode(buf: Buf<'de>, slot: usize) -> Result<Self, ReadError> {
        let len = buf.u16_at(slot)? as usize;
        let content = buf.offset_at(slot + 2)?;
        let end = len
            .checked_mul(T::STATIC_SIZE)
            .and_then(|size| size.checked_add(content))
            .ok_or(ReadError::MalformedOffset)?;
        if end > buf.len() {
            return Err(ReadError::TruncatedBuffer);
        }
        Ok(List {
            buf,
            content,
            len,
            marker: PhantomData,
        })
    }
}

impl<'de, T> List<'de, T>
where
    T: Decode<'de>,
{
    /// Number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Decodes the element at `idx`, or `None` past the end.
    #[inline(always)]
    pub fn get(&self, idx: usize) -> Option<Result<T, ReadError>> {
        if idx >= self.len {
            return None;
        }
        Some(T::decode(self.buf, self.content + idx * T::STATIC_SIZE))
    }

    /// Iterator over the elements.
    #[inline(always)]
    pub fn iter(&self) -> ListIter<'de, T> {
        ListIter {
            list: *self,
            idx: 0,
        }
    }
}

impl<'de> List<'de, u8> {
    /// Flat content of a byte list.
    #[inline(always)]
    pub fn bytes(&self) -> &'de [u8] {
        // Content bounds were validated when the list was decoded.
        self.buf.subslice(self.content, self.len)
    }
}

impl<'de, T> IntoIterator for List<'de, T>
where
    T: Decode<'de>,
{
    type Item = Result<T, ReadError>;
    type IntoIter = ListIter<'de, T>;

    #[inline(always)]
    fn into_iter(self) -> ListIter<'de, T> {
        self.iter()
    }
}

impl<'de, T> IntoIterator for &List<'de, T>
where
    T: Decode<'de>,
{
    type Item = Result<T, ReadError>;
    type IntoIter = ListIter<'de, T>;

    #[inline(always)]
    fn into_iter(self) -> ListIter<'de, T> {
        self.iter()
    }
}

/// Iterator over a [`List`], decoding one element per step.
pub struct ListIter<'de, T> {
    list: List<'de, T>,
    idx: usize,
}

impl<'de, T> Iterator for ListIter<'de, T>
where
    T: Decode<'de>,
{
    type Item = Result<T, ReadError>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.idx)?;
        self.idx += 1;
        Some(item)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.list.len - self.idx;
        (left, Some(left))
    }
}

impl<'de, T> ExactSizeIterator for ListIter<'de, T> where T: Decode<'de> {}
