use std::convert::TryFrom;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorType {
    Gray,
    RGB,
    PLTE,
    GrayAlpha,
    RGBA,
}

impl ColorType {
    /// Whether `bit_depth` is one of the PNG-legal depths for this color type.
    pub fn allows_bit_depth(self, bit_depth: u8) -> bool {
        match self {
            ColorType::Gray => matches!(bit_depth, 1 | 2 | 4 | 8 | 16),
            ColorType::RGB | ColorType::GrayAlpha | ColorType::RGBA => {
                matches!(bit_depth, 8 | 16)
            }
            ColorType::PLTE => matches!(bit_depth, 1 | 2 | 4 | 8),
        }
    }

    /// The raw `color_type` byte as it appears in `IHDR`.
    pub fn code(self) -> u8 {
        match self {
            ColorType::Gray => 0,
            ColorType::RGB => 2,
            ColorType::PLTE => 3,
            ColorType::GrayAlpha => 4,
            ColorType::RGBA => 6,
        }
    }
}

impl TryFrom<u8> for ColorType {
    type Error = String;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColorType::Gray),
            2 => Ok(ColorType::RGB),
            3 => Ok(ColorType::PLTE),
            4 => Ok(ColorType::GrayAlpha),
            6 => Ok(ColorType::RGBA),
            _ => Err(format!("color type {} is not valid", value)),
        }
    }
}
