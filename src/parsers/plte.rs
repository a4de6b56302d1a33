use crate::error::DecodeError;
use crate::metadata::ImageMetadata;

/// Parses a `PLTE` payload into an ordered sequence of RGB triples. Fatal if
/// the length isn't a multiple of 3 or the palette would exceed 256 entries.
pub fn parse(payload: &[u8]) -> Result<Vec<(u8, u8, u8)>, DecodeError> {
    if payload.len() % 3 != 0 {
        return Err(DecodeError::MalformedCriticalChunk {
            chunk_type: *b"PLTE",
            reason: "payload length must be a multiple of 3",
        });
    }
    let entries = payload.len() / 3;
    if entries == 0 || entries > 256 {
        return Err(DecodeError::MalformedCriticalChunk {
            chunk_type: *b"PLTE",
            reason: "palette must have between 1 and 256 entries",
        });
    }
    Ok(payload
        .chunks_exact(3)
        .map(|c| (c[0], c[1], c[2]))
        .collect())
}

pub fn apply(metadata: &mut ImageMetadata, palette: Vec<(u8, u8, u8)>) {
    metadata.palette = Some(palette);
}
