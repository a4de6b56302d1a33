use nom::number::complete::be_u32;

use crate::metadata::ImageMetadata;

/// Parses a `gAMA` payload. Soft: any length other than 4 yields `None`.
pub fn parse(payload: &[u8]) -> Option<f64> {
    if payload.len() != 4 {
        return None;
    }
    let (_, raw) = be_u32::<_, (&[u8], nom::error::ErrorKind)>(payload).ok()?;
    Some(raw as f64 / 100_000.0)
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    metadata.gama = parse(payload);
    if metadata.gama.is_none() {
        log::warn!("gAMA: malformed payload ({} bytes), dropping", payload.len());
    }
}
