//! Shared byte-fixture builders for the integration tests.

pub fn chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(payload);
    let crc = crc32_for_test(chunk_type, payload);
    out.extend_from_slice(&crc.to_be_bytes());
    out
}

/// A standalone CRC-32 implementation, kept independent of the crate's own
/// `crc` module so these fixtures don't trivially agree with it by
/// construction.
fn crc32_for_test(chunk_type: &[u8; 4], payload: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB8_8320;
    let mut c = 0xFFFF_FFFFu32;
    for &byte in chunk_type.iter().chain(payload.iter()) {
        c ^= byte as u32;
        for _ in 0..8 {
            c = if c & 1 != 0 { (c >> 1) ^ POLY } else { c >> 1 };
        }
    }
    c ^ 0xFFFF_FFFF
}

pub fn ihdr_payload(width: u32, height: u32, bit_depth: u8, color_type: u8) -> Vec<u8> {
    let mut v = Vec::new();
    v.extend_from_slice(&width.to_be_bytes());
    v.extend_from_slice(&height.to_be_bytes());
    v.extend_from_slice(&[bit_depth, color_type, 0, 0, 0]);
    v
}

pub struct PngBuilder {
    chunks: Vec<Vec<u8>>,
}

impl PngBuilder {
    pub fn new(width: u32, height: u32, bit_depth: u8, color_type: u8) -> Self {
        let mut builder = PngBuilder { chunks: Vec::new() };
        builder.chunks.push(chunk(
            b"IHDR",
            &ihdr_payload(width, height, bit_depth, color_type),
        ));
        builder
    }

    pub fn chunk(mut self, chunk_type: &[u8; 4], payload: &[u8]) -> Self {
        self.chunks.push(chunk(chunk_type, payload));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut bytes = vec![137, 80, 78, 71, 13, 10, 26, 10];
        for c in self.chunks {
            bytes.extend(c);
        }
        bytes.extend(chunk(b"IEND", &[]));
        bytes
    }
}
