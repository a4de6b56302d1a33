mod common;

use common::PngBuilder;
use png_meta::{decode_file, decode_reader, decode_slice, ColorType, DecodeError, DimensionUnit};

#[test]
fn plte_before_idat_populates_palette() {
    let bytes = PngBuilder::new(2, 2, 8, 3)
        .chunk(b"PLTE", &[255, 0, 0, 0, 255, 0])
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    assert_eq!(metadata.palette, Some(vec![(255, 0, 0), (0, 255, 0)]));
    assert_eq!(metadata.color_type, Some(ColorType::PLTE));
}

#[test]
fn chrm_with_wrong_length_is_dropped_but_decode_continues() {
    let bytes = PngBuilder::new(1, 1, 8, 2)
        .chunk(b"cHRM", &[0u8; 31])
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    assert!(metadata.chrm.is_none());
    assert_eq!(metadata.width, Some(1));
}

#[test]
fn time_with_leap_second_clamps_to_59() {
    let mut time_payload = Vec::new();
    time_payload.extend_from_slice(&2024u16.to_be_bytes());
    time_payload.extend_from_slice(&[1, 2, 3, 4, 60]);
    let bytes = PngBuilder::new(1, 1, 8, 0)
        .chunk(b"tIME", &time_payload)
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    let lm = metadata.last_modified.unwrap();
    assert_eq!((lm.year, lm.month, lm.day, lm.hour, lm.minute, lm.second), (2024, 1, 2, 3, 4, 59));
}

#[test]
fn phys_aspect_ratio_is_recorded() {
    let mut phys_payload = Vec::new();
    phys_payload.extend_from_slice(&1u32.to_be_bytes());
    phys_payload.extend_from_slice(&2u32.to_be_bytes());
    phys_payload.push(0);
    let bytes = PngBuilder::new(1, 1, 8, 0)
        .chunk(b"pHYs", &phys_payload)
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    let phys = metadata.phys.unwrap();
    assert_eq!(phys.x, 1);
    assert_eq!(phys.y, 2);
    assert_eq!(phys.unit_spec, 0);
    assert_eq!(phys.unit, DimensionUnit::AspectRatio);
}

#[test]
fn phys_with_wrong_length_leaves_field_unset() {
    let bytes = PngBuilder::new(1, 1, 8, 0)
        .chunk(b"pHYs", &[0u8; 8])
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    assert!(metadata.phys.is_none());
}

#[test]
fn text_with_disallowed_keyword_is_omitted() {
    let mut payload = b"SecretKey\0".to_vec();
    payload.extend_from_slice(b"value");
    let bytes = PngBuilder::new(1, 1, 8, 0)
        .chunk(b"tEXt", &payload)
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    assert!(!metadata.text_data.contains_key("SecretKey"));
    assert!(metadata.text_data.is_empty());
}

#[test]
fn ztxt_with_deflate_garbage_is_dropped() {
    let mut payload = b"Comment\0".to_vec();
    payload.push(0);
    payload.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    let bytes = PngBuilder::new(1, 1, 8, 0)
        .chunk(b"zTXt", &payload)
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    assert!(metadata.ztxt_data.is_empty());
}

#[test]
fn hist_length_disagreeing_with_palette_is_dropped() {
    let bytes = PngBuilder::new(1, 1, 8, 3)
        .chunk(b"PLTE", &[1, 2, 3, 4, 5, 6])
        .chunk(b"hIST", &[0, 1, 0, 2, 0, 3]) // 3 entries, palette has 2
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    assert!(metadata.histogram.is_none());
}

#[test]
fn iccp_and_srgb_are_mutually_exclusive_iccp_wins_if_first() {
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(b"icc data", 6);
    let mut iccp_payload = b"My Profile\0".to_vec();
    iccp_payload.push(0);
    iccp_payload.extend_from_slice(&compressed);

    let bytes = PngBuilder::new(1, 1, 8, 2)
        .chunk(b"iCCP", &iccp_payload)
        .chunk(b"sRGB", &[1])
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    assert!(metadata.iccp.is_some());
    assert!(metadata.srgb.is_none());
}

#[test]
fn corrupted_crc_in_any_ancillary_chunk_is_fatal() {
    let mut bytes = PngBuilder::new(1, 1, 8, 0)
        .chunk(b"gAMA", &45455u32.to_be_bytes())
        .chunk(b"IDAT", &[0x78])
        .build();
    // Flip a bit inside the gAMA payload without touching its declared CRC.
    let gama_payload_start = 8 + 8 + 8; // signature + IHDR header + gAMA header
    bytes[gama_payload_start] ^= 0x01;
    assert!(matches!(
        decode_slice(&bytes),
        Err(DecodeError::BadChunkIntegrity { .. })
    ));
}

#[test]
fn decode_file_reader_and_slice_agree_on_the_same_bytes() {
    let bytes = PngBuilder::new(4, 4, 8, 6)
        .chunk(b"pHYs", &{
            let mut p = Vec::new();
            p.extend_from_slice(&2835u32.to_be_bytes());
            p.extend_from_slice(&2835u32.to_be_bytes());
            p.push(1);
            p
        })
        .chunk(b"IDAT", &[0x78, 0x9c])
        .build();

    let mut path = std::env::temp_dir();
    path.push(format!("png-meta-test-{}.png", std::process::id()));
    std::fs::write(&path, &bytes).unwrap();

    let from_slice = decode_slice(&bytes).unwrap();
    let from_reader = decode_reader(std::io::Cursor::new(bytes.clone())).unwrap();
    let from_file = decode_file(&path).unwrap();

    std::fs::remove_file(&path).ok();

    assert_eq!(from_slice, from_reader);
    assert_eq!(from_slice, from_file);
}

#[test]
fn bkgd_palette_index_equal_to_palette_length_is_rejected() {
    let bytes = PngBuilder::new(1, 1, 8, 3)
        .chunk(b"PLTE", &[1, 2, 3, 4, 5, 6]) // 2 entries
        .chunk(b"bKGD", &[2]) // index 2 is out of range for a 2-entry palette
        .chunk(b"IDAT", &[0x78])
        .build();
    let metadata = decode_slice(&bytes).unwrap();
    assert!(metadata.bkgd.is_none());
}

#[test]
fn non_contiguous_idat_is_an_ordering_violation() {
    let bytes = PngBuilder::new(1, 1, 8, 0)
        .chunk(b"IDAT", &[0x78])
        .chunk(b"tEXt", b"Title\0hi")
        .chunk(b"IDAT", &[0x9c])
        .build();
    assert!(matches!(
        decode_slice(&bytes),
        Err(DecodeError::OrderingViolation { .. })
    ));
}
