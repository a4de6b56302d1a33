use nom::number::complete::be_u32;
use nom::IResult;

use crate::metadata::{Chromaticities, ImageMetadata};

fn parse_fields(input: &[u8]) -> IResult<&[u8], [u32; 8]> {
    let (input, white_x) = be_u32(input)?;
    let (input, white_y) = be_u32(input)?;
    let (input, red_x) = be_u32(input)?;
    let (input, red_y) = be_u32(input)?;
    let (input, green_x) = be_u32(input)?;
    let (input, green_y) = be_u32(input)?;
    let (input, blue_x) = be_u32(input)?;
    let (input, blue_y) = be_u32(input)?;
    Ok((
        input,
        [white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y],
    ))
}

/// Parses a `cHRM` payload. Soft: any length other than 32 yields `None`.
pub fn parse(payload: &[u8]) -> Option<Chromaticities> {
    if payload.len() != 32 {
        return None;
    }
    let (_, v) = parse_fields(payload).ok()?;
    Some(Chromaticities {
        white_x: v[0] as f64 / 100_000.0,
        white_y: v[1] as f64 / 100_000.0,
        red_x: v[2] as f64 / 100_000.0,
        red_y: v[3] as f64 / 100_000.0,
        green_x: v[4] as f64 / 100_000.0,
        green_y: v[5] as f64 / 100_000.0,
        blue_x: v[6] as f64 / 100_000.0,
        blue_y: v[7] as f64 / 100_000.0,
    })
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    metadata.chrm = parse(payload);
    if metadata.chrm.is_none() {
        log::warn!("cHRM: malformed payload ({} bytes), dropping", payload.len());
    }
}
