use core::fmt;

/// Error returned by writers when the destination buffer
/// cannot fit the encoded data.
///
/// This is the only way encoding can fail.
/// The caller decides whether to retry with a larger buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfSpace;

impl fmt::Display for OutOfSpace {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not enough space in the destination buffer")
    }
}

/// Error that may occur while decoding an encoded buffer.
///
/// Readers validate offsets and lengths against the buffer bounds
/// before dereferencing, so malformed input surfaces as one of these
/// variants instead of an out-of-bounds read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadError {
    /// Static or element data extends past the end of the buffer.
    TruncatedBuffer,

    /// A stored offset resolves outside the buffer.
    MalformedOffset,

    /// A string reached the end of the buffer without its terminator.
    UnterminatedString,

    /// String bytes are not valid UTF-8.
    InvalidUtf8,

    /// A decoded discriminant does not name any declared variant.
    InvalidTag(u8),

    /// A oneof accessor was invoked for a variant that is not active.
    TagMismatch {
        /// Tag of the variant the accessor belongs to.
        expected: u8,
        /// Tag stored in the buffer.
        actual: u8,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ReadError::TruncatedBuffer => write!(f, "data extends past the end of the buffer"),
            ReadError::MalformedOffset => write!(f, "stored offset points outside the buffer"),
            ReadError::UnterminatedString => write!(f, "string is missing its terminator"),
            ReadError::InvalidUtf8 => write!(f, "string bytes are not valid UTF-8"),
            ReadError::InvalidTag(tag) => write!(f, "unknown variant tag {}", tag),
            ReadError::TagMismatch { expected, actual } => write!(
                f,
                "accessed variant with tag {} while tag {} is active",
                expected, actual
            ),
        }
    }
}
