use nom::number::complete::{be_u32, be_u8};
use nom::IResult;

use crate::metadata::{DimensionUnit, ImageMetadata, PhysicalPixelDimensions};

fn parse_fields(input: &[u8]) -> IResult<&[u8], (u32, u32, u8)> {
    let (input, x) = be_u32(input)?;
    let (input, y) = be_u32(input)?;
    let (input, unit_spec) = be_u8(input)?;
    Ok((input, (x, y, unit_spec)))
}

/// Parses a `pHYs` payload: 9 bytes, `x`, `y`, and a unit specifier.
///
/// A wrong-length payload leaves the field entirely unset (see
/// `SPEC_FULL.md` §9 for why this crate doesn't reproduce the
/// partially-populated-default behavior of an earlier source revision).
pub fn parse(payload: &[u8]) -> Option<PhysicalPixelDimensions> {
    if payload.len() != 9 {
        return None;
    }
    let (_, (x, y, unit_spec)) = parse_fields(payload).ok()?;
    let unit = if unit_spec == 1 {
        DimensionUnit::Meters
    } else {
        DimensionUnit::AspectRatio
    };
    Some(PhysicalPixelDimensions {
        x,
        y,
        unit_spec,
        unit,
    })
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    metadata.phys = parse(payload);
    if metadata.phys.is_none() {
        log::warn!("pHYs: malformed payload ({} bytes), dropping", payload.len());
    }
}
