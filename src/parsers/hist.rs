use nom::multi::count;
use nom::number::complete::be_u16;

use crate::metadata::ImageMetadata;

/// Parses a `hIST` payload into a histogram of per-palette-entry
/// frequencies. Soft: the declared length must be exactly twice the palette
/// length, or `None` is returned.
pub fn parse(payload: &[u8], palette_len: usize) -> Option<Vec<u16>> {
    if payload.len() != palette_len * 2 {
        return None;
    }
    let (_, histogram) =
        count(be_u16::<_, (&[u8], nom::error::ErrorKind)>, palette_len)(payload).ok()?;
    Some(histogram)
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    let Some(palette) = metadata.palette.as_ref() else {
        metadata.histogram = None;
        return;
    };
    metadata.histogram = parse(payload, palette.len());
    if metadata.histogram.is_none() {
        log::warn!("hIST: length does not match palette length, dropping");
    }
}
