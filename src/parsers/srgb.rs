use crate::metadata::ImageMetadata;

/// Parses an `sRGB` payload: a single byte, the rendering intent, which must
/// be in `0..=3`. Soft: any other shape yields `None`.
pub fn parse(payload: &[u8]) -> Option<u8> {
    match payload {
        [intent] if *intent <= 3 => Some(*intent),
        _ => None,
    }
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    if metadata.iccp.is_some() {
        // iCCP and sRGB are mutually exclusive; iCCP arrived first, so this
        // chunk is dropped rather than overwriting it.
        log::warn!("sRGB present alongside iCCP, dropping sRGB");
        return;
    }
    if metadata.srgb.is_some() {
        // A second sRGB chunk clears the first rather than keeping either.
        log::warn!("sRGB chunk appeared more than once, clearing");
        metadata.srgb = None;
        return;
    }
    metadata.srgb = parse(payload);
    if metadata.srgb.is_none() {
        log::warn!("sRGB: malformed payload, dropping");
    }
}
