//! Wires the framer, ordering guard, and chunk parsers into the single
//! public `decode` operation, in its three input-shape flavors.

use std::io::Read;
use std::path::Path;

use crate::chunk::{ChunkType, RawChunk};
use crate::error::DecodeResult;
use crate::framer::ChunkFramer;
use crate::metadata::ImageMetadata;
use crate::ordering::{Action, OrderingGuard};
use crate::parsers::{bkgd, chrm, gama, hist, iccp, idat, ihdr, phys, plte, sbit, splt, srgb, text, time, trns};
use crate::source::{open_file_source, ByteSource, ReaderSource, SliceSource};

/// Decodes an in-memory PNG byte buffer.
pub fn decode_slice(data: &[u8]) -> DecodeResult<ImageMetadata> {
    decode(SliceSource::new(data))
}

/// Decodes an already-open readable byte stream.
pub fn decode_reader<R: Read>(reader: R) -> DecodeResult<ImageMetadata> {
    decode(ReaderSource::new(reader))
}

/// Opens `path` and decodes it.
pub fn decode_file(path: impl AsRef<Path>) -> DecodeResult<ImageMetadata> {
    decode(open_file_source(path)?)
}

/// The core decode loop: any [`ByteSource`] in, a populated
/// [`ImageMetadata`] or a fatal [`crate::error::DecodeError`] out.
pub fn decode<S: ByteSource>(source: S) -> DecodeResult<ImageMetadata> {
    let mut framer = ChunkFramer::new(source);
    framer.check_signature()?;

    let mut guard = OrderingGuard::new();
    let mut metadata = ImageMetadata::default();

    loop {
        let chunk = framer.read_chunk()?;
        match guard.observe(chunk.chunk_type, &metadata)? {
            Action::Terminate => break,
            Action::SoftDrop => {
                log::debug!("skipping {:?} chunk: ordering precondition not met", chunk.chunk_type);
                continue;
            }
            Action::Parse => dispatch(chunk, &mut metadata)?,
        }
    }

    Ok(metadata)
}

fn dispatch(chunk: RawChunk, metadata: &mut ImageMetadata) -> DecodeResult<()> {
    match chunk.chunk_type {
        ChunkType::IHDR => ihdr::apply(metadata, ihdr::parse(&chunk.payload)?),
        ChunkType::PLTE => plte::apply(metadata, plte::parse(&chunk.payload)?),
        ChunkType::IDAT => idat::apply(metadata, chunk.payload),
        ChunkType::IEND => {}
        ChunkType::cHRM => chrm::apply(metadata, &chunk.payload),
        ChunkType::gAMA => gama::apply(metadata, &chunk.payload),
        ChunkType::iCCP => iccp::apply(metadata, &chunk.payload),
        ChunkType::sBIT => sbit::apply(metadata, &chunk.payload),
        ChunkType::sRGB => srgb::apply(metadata, &chunk.payload),
        ChunkType::bKGD => bkgd::apply(metadata, &chunk.payload),
        ChunkType::hIST => hist::apply(metadata, &chunk.payload),
        ChunkType::tRNS => trns::apply(metadata, &chunk.payload),
        ChunkType::pHYs => phys::apply(metadata, &chunk.payload),
        ChunkType::sPLT => splt::apply(metadata, &chunk.payload),
        ChunkType::tIME => time::apply(metadata, &chunk.payload),
        ChunkType::tEXt => text::apply_text(metadata, &chunk.payload),
        ChunkType::zTXt => text::apply_ztxt(metadata, &chunk.payload),
        ChunkType::iTXt => text::apply_itxt(metadata, &chunk.payload),
        ChunkType::Unknown(tag) => {
            unreachable!("unknown chunk {:?} should have been soft-dropped by the guard", tag)
        }
    }
    Ok(())
}
