use miniz_oxide::inflate::decompress_to_vec_zlib;

use crate::metadata::{IccProfile, ImageMetadata};
use crate::parsers::split_on_nul;

/// Parses an `iCCP` payload: NUL-terminated profile name, a 1-byte
/// compression method (must be 0), then a zlib-wrapped deflate stream.
/// Soft: any structural problem, or a failed inflate, yields `None`.
pub fn parse(payload: &[u8]) -> Option<IccProfile> {
    let (name_bytes, rest) = split_on_nul(payload)?;
    if name_bytes.is_empty() || name_bytes.len() > 79 {
        return None;
    }
    if !name_bytes.iter().all(|&b| (0x20..=0x7e).contains(&b) || (0xa1..=0xff).contains(&b)) {
        return None;
    }
    let profile_name = name_bytes.iter().map(|&b| b as char).collect::<String>();

    let (&compression_method, compressed) = rest.split_first()?;
    if compression_method != 0 {
        return None;
    }

    let profile_info = decompress_to_vec_zlib(compressed).ok()?;
    Some(IccProfile {
        profile_name,
        profile_info,
    })
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    metadata.iccp = parse(payload);
    if metadata.iccp.is_none() {
        log::warn!("iCCP: malformed or undecodable payload, dropping");
    } else if metadata.srgb.is_some() {
        // iCCP and sRGB are mutually exclusive; the later chunk wins, the
        // earlier one's field is cleared.
        log::warn!("iCCP present alongside sRGB, clearing sRGB");
        metadata.srgb = None;
    }
}
