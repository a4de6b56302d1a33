use nom::number::complete::be_u16;

use crate::color::ColorType;
use crate::metadata::{Background, ImageMetadata};

/// Parses a `bKGD` payload. Arity depends on `color_type`; numeric samples
/// must not exceed `2^bit_depth - 1`, and a palette index must be in range
/// for `palette` (using the corrected `>=` bound, not the off-by-one `>`
/// bound from an earlier source revision — see `SPEC_FULL.md` §9).
pub fn parse(
    payload: &[u8],
    color_type: ColorType,
    bit_depth: u8,
    palette_len: Option<usize>,
) -> Option<Background> {
    let max_sample = (1u32 << bit_depth) - 1;
    match color_type {
        ColorType::Gray | ColorType::GrayAlpha => {
            if payload.len() != 2 {
                return None;
            }
            let (_, v) = be_u16::<_, (&[u8], nom::error::ErrorKind)>(payload).ok()?;
            if v as u32 > max_sample {
                return None;
            }
            Some(Background::Gray(v))
        }
        ColorType::RGB | ColorType::RGBA => {
            if payload.len() != 6 {
                return None;
            }
            let (rest, r) = be_u16::<_, (&[u8], nom::error::ErrorKind)>(payload).ok()?;
            let (rest, g) = be_u16::<_, (&[u8], nom::error::ErrorKind)>(rest).ok()?;
            let (_, b) = be_u16::<_, (&[u8], nom::error::ErrorKind)>(rest).ok()?;
            if [r, g, b].iter().any(|&s| s as u32 > max_sample) {
                return None;
            }
            Some(Background::Rgb(r, g, b))
        }
        ColorType::PLTE => {
            if payload.len() != 1 {
                return None;
            }
            let index = payload[0];
            let palette_len = palette_len?;
            if index as usize >= palette_len {
                return None;
            }
            Some(Background::Palette(index))
        }
    }
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    let (Some(color_type), Some(bit_depth)) = (metadata.color_type, metadata.bit_depth) else {
        metadata.bkgd = None;
        return;
    };
    let palette_len = metadata.palette.as_ref().map(Vec::len);
    metadata.bkgd = parse(payload, color_type, bit_depth, palette_len);
    if metadata.bkgd.is_none() {
        log::warn!("bKGD: malformed payload for this color type, dropping");
    }
}
