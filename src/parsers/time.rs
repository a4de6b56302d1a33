use nom::number::complete::{be_u16, be_u8};
use nom::IResult;

use crate::metadata::{ImageMetadata, LastModified};

fn parse_fields(input: &[u8]) -> IResult<&[u8], (u16, u8, u8, u8, u8, u8)> {
    let (input, year) = be_u16(input)?;
    let (input, month) = be_u8(input)?;
    let (input, day) = be_u8(input)?;
    let (input, hour) = be_u8(input)?;
    let (input, minute) = be_u8(input)?;
    let (input, second) = be_u8(input)?;
    Ok((input, (year, month, day, hour, minute, second)))
}

/// Parses a `tIME` payload. A `second` of 60 or 61 (leap second) is clamped
/// to 59; any other out-of-range field is a soft drop.
pub fn parse(payload: &[u8]) -> Option<LastModified> {
    if payload.len() != 7 {
        return None;
    }
    let (_, (year, month, day, hour, minute, second)) = parse_fields(payload).ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    if hour > 23 || minute > 59 {
        return None;
    }
    let second = if second >= 60 { 59 } else { second };

    Some(LastModified {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

pub fn apply(metadata: &mut ImageMetadata, payload: &[u8]) {
    metadata.last_modified = parse(payload);
    if metadata.last_modified.is_none() {
        log::warn!("tIME: malformed payload, dropping");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(&year.to_be_bytes());
        v.extend_from_slice(&[month, day, hour, minute, second]);
        v
    }

    #[test]
    fn clamps_leap_second_to_59() {
        let lm = parse(&payload(2024, 1, 2, 3, 4, 60)).unwrap();
        assert_eq!(lm.second, 59);
        assert_eq!((lm.year, lm.month, lm.day, lm.hour, lm.minute), (2024, 1, 2, 3, 4));
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(parse(&payload(2024, 13, 2, 3, 4, 5)).is_none());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse(&[0u8; 6]).is_none());
    }
}
