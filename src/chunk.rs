//! Chunk type identification. Chunk *framing* (the length/crc dance) lives in
//! [`crate::framer`]; this module only knows how to name a 4-byte chunk tag.

#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum ChunkType {
    // Critical chunks
    IHDR,
    PLTE,
    IDAT,
    IEND,
    // Ancillary chunks
    tRNS,
    gAMA,
    cHRM,
    sRGB,
    iCCP,
    tEXt,
    zTXt,
    iTXt,
    bKGD,
    pHYs,
    sBIT,
    sPLT,
    hIST,
    tIME,
    // Unrecognized 4-byte tag; dispatched nowhere and silently skipped.
    Unknown([u8; 4]),
}

impl From<[u8; 4]> for ChunkType {
    fn from(tag: [u8; 4]) -> Self {
        match &tag {
            b"IHDR" => ChunkType::IHDR,
            b"PLTE" => ChunkType::PLTE,
            b"IDAT" => ChunkType::IDAT,
            b"IEND" => ChunkType::IEND,
            b"tRNS" => ChunkType::tRNS,
            b"gAMA" => ChunkType::gAMA,
            b"cHRM" => ChunkType::cHRM,
            b"sRGB" => ChunkType::sRGB,
            b"iCCP" => ChunkType::iCCP,
            b"tEXt" => ChunkType::tEXt,
            b"zTXt" => ChunkType::zTXt,
            b"iTXt" => ChunkType::iTXt,
            b"bKGD" => ChunkType::bKGD,
            b"pHYs" => ChunkType::pHYs,
            b"sBIT" => ChunkType::sBIT,
            b"sPLT" => ChunkType::sPLT,
            b"hIST" => ChunkType::hIST,
            b"tIME" => ChunkType::tIME,
            _ => ChunkType::Unknown(tag),
        }
    }
}

impl ChunkType {
    /// True for the four chunks whose malformation or misordering is fatal.
    pub fn is_critical(self) -> bool {
        matches!(
            self,
            ChunkType::IHDR | ChunkType::PLTE | ChunkType::IDAT | ChunkType::IEND
        )
    }
}

/// One framed chunk: its type, its raw payload, and the declared length
/// (redundant with `payload.len()` but kept for parity with the wire format).
#[derive(Debug)]
pub struct RawChunk {
    pub chunk_type: ChunkType,
    pub type_bytes: [u8; 4],
    pub payload: Vec<u8>,
    pub length: u32,
}
