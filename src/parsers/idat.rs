use crate::metadata::ImageMetadata;

/// Appends one `IDAT` payload to the accumulated (still-compressed) image
/// data. Decompression, unfiltering, and de-interlacing are out of scope for
/// this crate; the bytes are preserved verbatim, in arrival order.
pub fn apply(metadata: &mut ImageMetadata, payload: Vec<u8>) {
    metadata.idat.get_or_insert_with(Vec::new).push(payload);
}
