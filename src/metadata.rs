//! The accumulating decode target: a closed record of nullable fields, one
//! per chunk kind this crate understands. Never an open string map — the key
//! set is fixed and known at compile time.

use std::collections::HashMap;

use crate::color::ColorType;

/// Accumulated, possibly-partial description of a PNG datastream's metadata.
///
/// Every field is `None` until the corresponding chunk is both encountered
/// and successfully parsed. A field staying `None` after a successful
/// [`crate::decode_slice`] call means either the chunk was absent or its
/// payload failed a soft validity check (see `SPEC_FULL.md` §7) — the two
/// cases are indistinguishable by design.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImageMetadata {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub bit_depth: Option<u8>,
    pub color_type: Option<ColorType>,
    pub compression_method: Option<u8>,
    pub filter_method: Option<u8>,
    pub interlace_method: Option<u8>,

    pub palette: Option<Vec<(u8, u8, u8)>>,
    pub idat: Option<Vec<Vec<u8>>>,

    pub chrm: Option<Chromaticities>,
    pub gama: Option<f64>,
    pub iccp: Option<IccProfile>,
    pub sbit: Option<SignificantBits>,
    pub srgb: Option<u8>,
    pub bkgd: Option<Background>,
    pub histogram: Option<Vec<u16>>,
    pub trns: Option<Transparency>,
    pub phys: Option<PhysicalPixelDimensions>,
    pub splt: Option<Vec<SuggestedPalette>>,
    pub last_modified: Option<LastModified>,

    pub text_data: HashMap<String, String>,
    pub ztxt_data: HashMap<String, String>,
    pub itxt_data: Vec<InternationalText>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticities {
    pub white_x: f64,
    pub white_y: f64,
    pub red_x: f64,
    pub red_y: f64,
    pub green_x: f64,
    pub green_y: f64,
    pub blue_x: f64,
    pub blue_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IccProfile {
    pub profile_name: String,
    pub profile_info: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificantBits {
    Gray(u8),
    GrayAlpha(u8, u8),
    Rgb(u8, u8, u8),
    RgbAlpha(u8, u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Palette(u8),
    Gray(u16),
    Rgb(u16, u16, u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transparency {
    Gray(u16),
    Rgb(u16, u16, u16),
    Palette(Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionUnit {
    AspectRatio,
    Meters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalPixelDimensions {
    pub x: u32,
    pub y: u32,
    pub unit_spec: u8,
    pub unit: DimensionUnit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedPaletteEntry {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    pub alpha: u16,
    pub frequency: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedPalette {
    pub name: String,
    pub sample_depth: u8,
    pub entries: Vec<SuggestedPaletteEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastModified {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternationalText {
    pub keyword: String,
    pub translated_keyword: String,
    pub compression_flag: u8,
    pub language_tag: String,
    pub text: String,
}
