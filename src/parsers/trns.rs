use nom::number::complete::be_u16;

use crate::color::ColorType;
use crate::metadata::{ImageMetadata, Transparency};

/// Parses a `tRNS` payload. Never present for color types 4 and 6 (which
/// already carry a full alpha channel). Soft on any shape mismatch; numeric
/// samples must not exceed `2^bit_depth - 1`.
pub fn parse(
    payload: &[u8],
    color_type: ColorType,
    bit_depth: u8,
    palette_len: Option<usize>,
) -> Option<Transparency> {
    let max_sample = (1u32 << bit_depth) - 1;
    match color_type {
        ColorType::GrayAlpha | ColorType::RGBA => None,
        ColorType::Gray => {
            if payload.len() != 2 {
                return None;
            }
            let (_, v) = be_u16::<_, (&[u8], nom::error::ErrorKind)>(payload).ok()?;
            if v as u32 > max_sample {
                return None;
            }
            Some(Transparency::Gray(v))
        }
        ColorType::RGB => {
            if payload.len() != 6 {
                return None;
            }
            let (rest, r) = be_u16::<_, (&[u8], nom::error::ErrorKind)>(payload).ok()?;
            let (rest, g) = be_u16::<_, (&[u8], nom::error::ErrorKind)>(rest).ok()?;
            let (_, b) = be_u16::<_, (&[u8], nom::error::ErrorKind)>(rest).ok()?;
            if [r, g, b].iter().any(|&s| s as u32 > max_sample) {
                return None;
            }
            Some(Transparency::Rgb(r, g, b))
        }
        ColorType::PLTE => {
            let palette_len = palette_len?;
            if payload.len() > palette_len {
                return None;
            }
            Some(Transparency::Palette(payload.to_vec()))
        }
    }
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    let (Some(color_type), Some(bit_depth)) = (metadata.color_type, metadata.bit_depth) else {
        metadata.trns = None;
        return;
    };
    let palette_len = metadata.palette.as_ref().map(Vec::len);
    metadata.trns = parse(payload, color_type, bit_depth, palette_len);
    if metadata.trns.is_none() {
        log::warn!("tRNS: malformed payload for this color type, dropping");
    }
}
