//! The streaming chunk framer: signature check, length/type/payload/crc
//! framing, and CRC-32 verification. Everything here is fatal on failure —
//! by the time a payload reaches a [`crate::parsers`] function, its bytes are
//! guaranteed to be exactly what the producer wrote.

use nom::number::complete::be_u32;

use crate::chunk::{ChunkType, RawChunk};
use crate::crc;
use crate::error::{DecodeError, DecodeResult};
use crate::source::ByteSource;

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

pub struct ChunkFramer<S: ByteSource> {
    source: S,
    offset: u64,
}

impl<S: ByteSource> ChunkFramer<S> {
    pub fn new(source: S) -> Self {
        ChunkFramer { source, offset: 0 }
    }

    fn read(&mut self, n: usize) -> DecodeResult<Vec<u8>> {
        let bytes = self.source.read_exact(n)?;
        self.offset += bytes.len() as u64;
        Ok(bytes)
    }

    /// Validates the 8-byte PNG signature. Must be called exactly once before
    /// any call to [`Self::read_chunk`].
    pub fn check_signature(&mut self) -> DecodeResult<()> {
        let bytes = match self.read(8) {
            Ok(b) => b,
            Err(DecodeError::UnexpectedEndOfInput { .. }) => return Err(DecodeError::BadSignature),
            Err(e) => return Err(e),
        };
        if bytes[..] != SIGNATURE {
            return Err(DecodeError::BadSignature);
        }
        Ok(())
    }

    /// Reads `n` bytes for a chunk field, translating end-of-input into
    /// [`DecodeError::TruncatedStream`] — since by this point the signature
    /// has already been accepted and running out of bytes means the
    /// datastream was cut off before `IEND`. Any other [`DecodeError`] (e.g.
    /// a genuine I/O error from the underlying [`ByteSource`]) propagates
    /// unchanged, matching [`Self::check_signature`].
    fn read_chunk_field(&mut self, n: usize) -> DecodeResult<Vec<u8>> {
        match self.read(n) {
            Ok(bytes) => Ok(bytes),
            Err(DecodeError::UnexpectedEndOfInput { .. }) => Err(DecodeError::TruncatedStream),
            Err(e) => Err(e),
        }
    }

    /// Reads one framed, CRC-verified chunk: `length | type | payload | crc`.
    pub fn read_chunk(&mut self) -> DecodeResult<RawChunk> {
        let length_bytes = self.read_chunk_field(4)?;
        let (_, length) = be_u32::<_, (&[u8], nom::error::ErrorKind)>(&length_bytes[..])
            .map_err(|_| DecodeError::TruncatedStream)?;

        let type_bytes_vec = self.read_chunk_field(4)?;
        let mut type_bytes = [0u8; 4];
        type_bytes.copy_from_slice(&type_bytes_vec);

        let payload = self.read_chunk_field(length as usize)?;

        let crc_bytes = self.read_chunk_field(4)?;
        let (_, declared_crc) = be_u32::<_, (&[u8], nom::error::ErrorKind)>(&crc_bytes[..])
            .map_err(|_| DecodeError::TruncatedStream)?;

        let computed_crc = crc::checksum_parts(&type_bytes, &payload);
        if computed_crc != declared_crc {
            return Err(DecodeError::BadChunkIntegrity {
                chunk_type: type_bytes,
                offset: self.offset,
                declared: declared_crc,
                computed: computed_crc,
            });
        }

        let chunk_type = ChunkType::from(type_bytes);
        Ok(RawChunk {
            chunk_type,
            type_bytes,
            payload,
            length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SliceSource;

    fn chunk_bytes(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(chunk_type);
        out.extend_from_slice(payload);
        let crc = crc::checksum_parts(chunk_type, payload);
        out.extend_from_slice(&crc.to_be_bytes());
        out
    }

    #[test]
    fn accepts_valid_signature() {
        let mut framer = ChunkFramer::new(SliceSource::new(&SIGNATURE));
        assert!(framer.check_signature().is_ok());
    }

    #[test]
    fn rejects_empty_input() {
        let mut framer = ChunkFramer::new(SliceSource::new(&[]));
        assert!(matches!(
            framer.check_signature(),
            Err(DecodeError::BadSignature)
        ));
    }

    #[test]
    fn rejects_truncated_signature() {
        let mut framer = ChunkFramer::new(SliceSource::new(&SIGNATURE[..4]));
        assert!(matches!(
            framer.check_signature(),
            Err(DecodeError::BadSignature)
        ));
    }

    #[test]
    fn rejects_mismatched_signature() {
        let mut framer = ChunkFramer::new(SliceSource::new(&[0u8; 8]));
        assert!(matches!(
            framer.check_signature(),
            Err(DecodeError::BadSignature)
        ));
    }

    #[test]
    fn reads_a_well_formed_chunk() {
        let bytes = chunk_bytes(b"IEND", &[]);
        let mut framer = ChunkFramer::new(SliceSource::new(&bytes));
        let chunk = framer.read_chunk().unwrap();
        assert_eq!(chunk.chunk_type, ChunkType::IEND);
        assert_eq!(chunk.length, 0);
    }

    #[test]
    fn detects_single_bit_crc_corruption() {
        let mut bytes = chunk_bytes(b"IDAT", &[1, 2, 3]);
        let crc_start = bytes.len() - 4;
        bytes[crc_start] ^= 0x01;
        let mut framer = ChunkFramer::new(SliceSource::new(&bytes));
        assert!(matches!(
            framer.read_chunk(),
            Err(DecodeError::BadChunkIntegrity { .. })
        ));
    }

    #[test]
    fn detects_single_bit_payload_corruption() {
        let mut bytes = chunk_bytes(b"tEXt", b"Title\0hi");
        // flip a bit in the payload without touching the declared CRC
        let payload_start = 8;
        bytes[payload_start] ^= 0x01;
        let mut framer = ChunkFramer::new(SliceSource::new(&bytes));
        assert!(matches!(
            framer.read_chunk(),
            Err(DecodeError::BadChunkIntegrity { .. })
        ));
    }

    /// A `ByteSource` that fails every read with a genuine I/O error, to
    /// distinguish that case from running out of bytes.
    struct FailingSource;

    impl ByteSource for FailingSource {
        fn read_exact(&mut self, _n: usize) -> Result<Vec<u8>, DecodeError> {
            Err(DecodeError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk on fire",
            )))
        }
    }

    #[test]
    fn io_error_mid_chunk_propagates_unchanged() {
        let mut framer = ChunkFramer::new(FailingSource);
        assert!(matches!(framer.read_chunk(), Err(DecodeError::Io(_))));
    }
}
