//! One parser per recognized chunk type. Critical-chunk parsers return
//! [`crate::error::DecodeResult`] and abort decoding on failure; ancillary
//! parsers return `Option<T>` and simply yield `None` on any soft failure —
//! the field stays unset, decoding continues.

pub mod bkgd;
pub mod chrm;
pub mod gama;
pub mod hist;
pub mod iccp;
pub mod idat;
pub mod ihdr;
pub mod phys;
pub mod plte;
pub mod sbit;
pub mod splt;
pub mod srgb;
pub mod text;
pub mod time;
pub mod trns;

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Keywords `tEXt`/`zTXt`/`iTXt` are allowed to carry; anything else is a
    /// soft skip of that single entry. Matches the PNG spec's registered
    /// keyword list plus the Adobe XMP convention.
    pub static ref ALLOWED_KEYWORDS: HashSet<&'static str> = [
        "Title",
        "Author",
        "Description",
        "Copyright",
        "Creation Time",
        "Software",
        "Disclaimer",
        "Warning",
        "Source",
        "Comment",
        "XML:com.adobe.xmp",
    ]
    .iter()
    .cloned()
    .collect();
}

/// Parses a NUL-terminated byte run, returning the bytes before the NUL and
/// the remainder of `input` after it. Fails if no NUL is found.
pub(crate) fn split_on_nul(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let pos = input.iter().position(|&b| b == 0)?;
    Some((&input[..pos], &input[pos + 1..]))
}
