//! A lenient, metadata-oriented PNG chunk decoder.
//!
//! Given a byte source that purports to be a PNG datastream, [`decode_slice`],
//! [`decode_reader`], and [`decode_file`] validate the file signature, walk
//! the sequence of length-prefixed chunks, verify each chunk's CRC, and
//! dispatch to per-chunk parsers that populate an [`ImageMetadata`] record
//! with the image's header, palette, and ancillary metadata.
//!
//! Pixel reconstruction (decompressing, unfiltering, and de-interlacing
//! `IDAT`) is out of scope: `IDAT` payloads are collected verbatim and
//! handed back to the caller still deflate-compressed.
//!
//! The decoder is deliberately lenient about ancillary chunks: a malformed
//! `tEXt`, a garbled `iCCP` profile, or a `hIST` whose length disagrees with
//! the palette never aborts decoding — the affected field is simply left
//! `None`. Only framing/integrity problems and malformed critical chunks
//! (`IHDR`, `PLTE`) are fatal; see [`DecodeError`] for the full taxonomy.

mod chunk;
mod color;
mod crc;
mod decoder;
mod error;
mod framer;
mod metadata;
mod ordering;
mod parsers;
mod source;

pub use chunk::ChunkType;
pub use color::ColorType;
pub use decoder::{decode, decode_file, decode_reader, decode_slice};
pub use error::{DecodeError, DecodeResult};
pub use metadata::{
    Background, Chromaticities, DimensionUnit, IccProfile, ImageMetadata, InternationalText,
    LastModified, PhysicalPixelDimensions, SignificantBits, SuggestedPalette,
    SuggestedPaletteEntry, Transparency,
};
pub use source::{ByteSource, ReaderSource, SliceSource};
