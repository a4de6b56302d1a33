use crate::color::ColorType;
use crate::metadata::{ImageMetadata, SignificantBits};

fn in_range(value: u8, bit_depth: u8, color_type: ColorType) -> bool {
    let max = if color_type == ColorType::PLTE { 8 } else { bit_depth };
    value >= 1 && value <= max
}

/// Parses an `sBIT` payload. Arity and valid range depend on `color_type` and
/// `bit_depth`; any mismatch is soft, yielding `None`.
pub fn parse(payload: &[u8], color_type: ColorType, bit_depth: u8) -> Option<SignificantBits> {
    let check = |v: u8| in_range(v, bit_depth, color_type);
    match (color_type, payload) {
        (ColorType::Gray, &[g]) if check(g) => Some(SignificantBits::Gray(g)),
        (ColorType::RGB, &[r, g, b]) | (ColorType::PLTE, &[r, g, b])
            if check(r) && check(g) && check(b) =>
        {
            Some(SignificantBits::Rgb(r, g, b))
        }
        (ColorType::GrayAlpha, &[g, a]) if check(g) && check(a) => {
            Some(SignificantBits::GrayAlpha(g, a))
        }
        (ColorType::RGBA, &[r, g, b, a]) if check(r) && check(g) && check(b) && check(a) => {
            Some(SignificantBits::RgbAlpha(r, g, b, a))
        }
        _ => None,
    }
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    let (Some(color_type), Some(bit_depth)) = (metadata.color_type, metadata.bit_depth) else {
        metadata.sbit = None;
        return;
    };
    metadata.sbit = parse(payload, color_type, bit_depth);
    if metadata.sbit.is_none() {
        log::warn!("sBIT: malformed payload for this color type, dropping");
    }
}
