//! Fatal error taxonomy. Soft per-chunk failures never reach this type; see
//! [`crate::parsers`] for how they are absorbed at the parser boundary.

use thiserror::Error;

/// A fatal error that aborts decoding outright.
///
/// Ancillary-chunk defects never produce one of these: a malformed `tEXt`
/// payload, a disallowed keyword, or a failed deflate on an `iCCP` profile
/// simply leaves the corresponding [`crate::ImageMetadata`] field `None`.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The first 8 bytes of the stream are not the PNG signature.
    #[error("not a PNG datastream: bad signature")]
    BadSignature,

    /// A chunk's declared CRC does not match the CRC computed over its type and payload.
    #[error("chunk {chunk_type:?} at offset {offset}: CRC mismatch (declared {declared:#010x}, computed {computed:#010x})")]
    BadChunkIntegrity {
        chunk_type: [u8; 4],
        offset: u64,
        declared: u32,
        computed: u32,
    },

    /// End of input was reached before an `IEND` chunk was seen.
    #[error("truncated stream: reached end of input before IEND")]
    TruncatedStream,

    /// A critical chunk appeared in an illegal position (e.g. `PLTE` after
    /// `IDAT`, a duplicated `IHDR`, or `IDAT` before `IHDR`).
    #[error("chunk {chunk_type:?} is out of order: {reason}")]
    OrderingViolation {
        chunk_type: [u8; 4],
        reason: &'static str,
    },

    /// `IHDR` or `PLTE` payload failed to parse or violated a structural rule.
    #[error("malformed {chunk_type:?} chunk: {reason}")]
    MalformedCriticalChunk {
        chunk_type: [u8; 4],
        reason: &'static str,
    },

    /// The byte source ran out of data where an exact-length read was required.
    #[error("unexpected end of input: needed {needed} bytes, {available} available")]
    UnexpectedEndOfInput { needed: usize, available: usize },

    /// Wraps an I/O error surfaced by a [`crate::source::ByteSource`] adapter.
    #[error("I/O error while reading PNG stream")]
    Io(#[from] std::io::Error),
}

pub type DecodeResult<T> = Result<T, DecodeError>;
