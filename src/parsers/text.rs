use miniz_oxide::inflate::decompress_to_vec_zlib;

use crate::metadata::{ImageMetadata, InternationalText};
use crate::parsers::{split_on_nul, ALLOWED_KEYWORDS};

/// Parses a `tEXt` payload: NUL-terminated keyword, then Latin-1 text to the
/// end of the payload. Soft: a disallowed keyword is a skip of this single
/// entry, not a decode failure.
pub fn parse_text(payload: &[u8]) -> Option<(String, String)> {
    let (keyword_bytes, text_bytes) = split_on_nul(payload)?;
    let keyword = latin1_to_string(keyword_bytes);
    if !ALLOWED_KEYWORDS.contains(keyword.as_str()) {
        return None;
    }
    Some((keyword, latin1_to_string(text_bytes)))
}

/// Parses a `zTXt` payload: NUL-terminated keyword, 1-byte compression
/// method (must be 0), then a zlib-wrapped deflate stream decoded as Latin-1.
pub fn parse_ztxt(payload: &[u8]) -> Option<(String, String)> {
    let (keyword_bytes, rest) = split_on_nul(payload)?;
    let keyword = latin1_to_string(keyword_bytes);
    if !ALLOWED_KEYWORDS.contains(keyword.as_str()) {
        return None;
    }
    let (&compression_method, compressed) = rest.split_first()?;
    if compression_method != 0 {
        return None;
    }
    let text = decompress_to_vec_zlib(compressed).ok()?;
    Some((keyword, latin1_to_string(&text)))
}

/// Parses an `iTXt` payload: NUL-terminated keyword; compression flag (0 or
/// 1); compression method; NUL-terminated ASCII language tag; NUL-terminated
/// UTF-8 translated keyword; then text, verbatim or deflate-compressed UTF-8
/// depending on the compression flag.
pub fn parse_itxt(payload: &[u8]) -> Option<InternationalText> {
    let (keyword_bytes, rest) = split_on_nul(payload)?;
    let keyword = latin1_to_string(keyword_bytes);
    if !ALLOWED_KEYWORDS.contains(keyword.as_str()) {
        return None;
    }

    let (&compression_flag, rest) = rest.split_first()?;
    if compression_flag != 0 && compression_flag != 1 {
        return None;
    }
    let (&_compression_method, rest) = rest.split_first()?;

    let (language_tag_bytes, rest) = split_on_nul(rest)?;
    if !language_tag_bytes.is_ascii() {
        return None;
    }
    let language_tag = String::from_utf8(language_tag_bytes.to_vec()).ok()?;

    let (translated_keyword_bytes, text_bytes) = split_on_nul(rest)?;
    let translated_keyword = String::from_utf8(translated_keyword_bytes.to_vec()).ok()?;

    let text = if compression_flag == 0 {
        String::from_utf8(text_bytes.to_vec()).ok()?
    } else {
        let decompressed = decompress_to_vec_zlib(text_bytes).ok()?;
        String::from_utf8(decompressed).ok()?
    };

    Some(InternationalText {
        keyword,
        translated_keyword,
        compression_flag,
        language_tag,
        text,
    })
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

pub fn apply_text(metadata: &mut ImageMetadata, payload: &[u8]) {
    match parse_text(payload) {
        Some((keyword, value)) => {
            metadata.text_data.insert(keyword, value);
        }
        None => log::debug!("tEXt: disallowed keyword or malformed payload, skipping"),
    }
}

pub fn apply_ztxt(metadata: &mut ImageMetadata, payload: &[u8]) {
    match parse_ztxt(payload) {
        Some((keyword, value)) => {
            metadata.ztxt_data.insert(keyword, value);
        }
        None => log::warn!("zTXt: disallowed keyword or undecodable payload, skipping"),
    }
}

pub fn apply_itxt(metadata: &mut ImageMetadata, payload: &[u8]) {
    match parse_itxt(payload) {
        Some(entry) => metadata.itxt_data.push(entry),
        None => log::warn!("iTXt: disallowed keyword or malformed payload, skipping"),
    }
}
