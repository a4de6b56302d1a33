use std::convert::TryFrom;

use nom::number::complete::{be_u32, be_u8};
use nom::IResult;

use crate::color::ColorType;
use crate::error::DecodeError;
use crate::metadata::ImageMetadata;

pub struct IhdrData {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: ColorType,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}

fn parse_fields(input: &[u8]) -> IResult<&[u8], (u32, u32, u8, u8, u8, u8, u8)> {
    let (input, width) = be_u32(input)?;
    let (input, height) = be_u32(input)?;
    let (input, bit_depth) = be_u8(input)?;
    let (input, color_type) = be_u8(input)?;
    let (input, compression_method) = be_u8(input)?;
    let (input, filter_method) = be_u8(input)?;
    let (input, interlace_method) = be_u8(input)?;
    Ok((
        input,
        (
            width,
            height,
            bit_depth,
            color_type,
            compression_method,
            filter_method,
            interlace_method,
        ),
    ))
}

/// Parses and validates an `IHDR` payload. Fatal on any structural problem:
/// wrong length, zero dimensions, or an illegal (color_type, bit_depth) pair.
pub fn parse(payload: &[u8]) -> Result<IhdrData, DecodeError> {
    if payload.len() != 13 {
        return Err(malformed("IHDR payload must be exactly 13 bytes"));
    }
    let (_, (width, height, bit_depth, color_type_byte, compression_method, filter_method, interlace_method)) =
        parse_fields(payload).map_err(|_| malformed("IHDR payload failed to parse"))?;

    if width == 0 || height == 0 {
        return Err(malformed("width and height must both be nonzero"));
    }

    let color_type =
        ColorType::try_from(color_type_byte).map_err(|_| malformed("unrecognized color type"))?;

    if !color_type.allows_bit_depth(bit_depth) {
        return Err(malformed("bit depth is not legal for this color type"));
    }

    Ok(IhdrData {
        width,
        height,
        bit_depth,
        color_type,
        compression_method,
        filter_method,
        interlace_method,
    })
}

pub fn apply(metadata: &mut ImageMetadata, data: IhdrData) {
    metadata.width = Some(data.width);
    metadata.height = Some(data.height);
    metadata.bit_depth = Some(data.bit_depth);
    metadata.color_type = Some(data.color_type);
    metadata.compression_method = Some(data.compression_method);
    metadata.filter_method = Some(data.filter_method);
    metadata.interlace_method = Some(data.interlace_method);
}

fn malformed(reason: &'static str) -> DecodeError {
    DecodeError::MalformedCriticalChunk {
        chunk_type: *b"IHDR",
        reason,
    }
}
