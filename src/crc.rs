//! CRC-32 (IEEE 802.3 / zlib) checksum used to verify chunk integrity.

use lazy_static::lazy_static;

const POLYNOMIAL: u32 = 0xEDB8_8320;

lazy_static! {
    static ref TABLE: [u32; 256] = build_table();
}

fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    for (n, entry) in table.iter_mut().enumerate() {
        let mut c = n as u32;
        for _ in 0..8 {
            c = if c & 1 != 0 {
                POLYNOMIAL ^ (c >> 1)
            } else {
                c >> 1
            };
        }
        *entry = c;
    }
    table
}

/// Computes the CRC-32 of `data`, matching zlib's `crc32` (init/xorout 0xFFFFFFFF).
pub fn checksum(data: &[u8]) -> u32 {
    let mut c = 0xFFFF_FFFFu32;
    for &byte in data {
        c = TABLE[((c ^ byte as u32) & 0xFF) as usize] ^ (c >> 8);
    }
    c ^ 0xFFFF_FFFF
}

/// Computes the CRC-32 over two concatenated slices without allocating.
pub fn checksum_parts(a: &[u8], b: &[u8]) -> u32 {
    let mut c = 0xFFFF_FFFFu32;
    for &byte in a.iter().chain(b.iter()) {
        c = TABLE[((c ^ byte as u32) & 0xFF) as usize] ^ (c >> 8);
    }
    c ^ 0xFFFF_FFFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_of_empty_is_zero() {
        assert_eq!(checksum(b""), 0);
    }

    #[test]
    fn checksum_matches_known_vector() {
        // "IEND" with an empty payload; checksum taken from a real PNG encoder.
        assert_eq!(checksum(b"IEND"), 0xAE42_6082);
    }

    #[test]
    fn checksum_parts_matches_concatenated() {
        let a = b"IHDR";
        let b = [0u8, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];
        let mut combined = a.to_vec();
        combined.extend_from_slice(&b);
        assert_eq!(checksum_parts(a, &b), checksum(&combined));
    }

    #[test]
    fn single_bit_flip_changes_checksum() {
        let original = b"IDATabc";
        let mut flipped = *original;
        flipped[3] ^= 0x01;
        assert_ne!(checksum(original), checksum(&flipped));
    }
}
