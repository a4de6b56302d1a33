//! The ordering/precondition state machine: decides, for each incoming
//! chunk, whether its parser should run, whether it should be silently
//! skipped (a soft ordering violation), or whether the chunk is fatally out
//! of place.
//!
//! This generalizes the set-difference state machine in the upstream
//! `validate_chunk_constraints` (tracking a `present` set and an `authorized`
//! set per chunk), but splits outcomes into fatal-vs-soft per `SPEC_FULL.md`
//! §4.3 instead of rejecting every violation uniformly.

use crate::chunk::ChunkType;
use crate::error::{DecodeError, DecodeResult};
use crate::metadata::ImageMetadata;

/// What the dispatcher should do with a chunk once the guard has ruled on it.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Hand the payload to its parser.
    Parse,
    /// Leave the chunk unparsed; its field(s) stay `None`.
    SoftDrop,
    /// This was `IEND`; the decode loop should stop after handling it.
    Terminate,
}

#[derive(Default)]
pub struct OrderingGuard {
    seen_ihdr: bool,
    seen_plte: bool,
    idat_started: bool,
    /// Set once a non-IDAT chunk has been seen after the first IDAT. Any
    /// further IDAT at that point means the IDAT run was not contiguous.
    idat_closed: bool,
}

const BEFORE_PLTE_AND_IDAT: &[ChunkType] = &[
    ChunkType::cHRM,
    ChunkType::gAMA,
    ChunkType::iCCP,
    ChunkType::sBIT,
    ChunkType::sRGB,
];

const BEFORE_IDAT_AFTER_PLTE: &[ChunkType] = &[ChunkType::bKGD, ChunkType::hIST, ChunkType::tRNS];

impl OrderingGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules on `chunk_type` given the metadata accumulated so far. Does not
    /// mutate `metadata`; the caller applies the parser's own effects after
    /// this returns [`Action::Parse`].
    pub fn observe(
        &mut self,
        chunk_type: ChunkType,
        metadata: &ImageMetadata,
    ) -> DecodeResult<Action> {
        match chunk_type {
            ChunkType::IHDR => {
                if self.seen_ihdr {
                    return Err(ordering_violation(b"IHDR", "IHDR must appear exactly once"));
                }
                self.seen_ihdr = true;
                Ok(Action::Parse)
            }
            ChunkType::PLTE => {
                if !self.seen_ihdr {
                    return Err(ordering_violation(b"PLTE", "PLTE before IHDR"));
                }
                if self.seen_plte {
                    return Err(ordering_violation(b"PLTE", "PLTE must appear at most once"));
                }
                if self.idat_started {
                    return Err(ordering_violation(b"PLTE", "PLTE must precede IDAT"));
                }
                self.seen_plte = true;
                Ok(Action::Parse)
            }
            ChunkType::IDAT => {
                if !self.seen_ihdr {
                    return Err(ordering_violation(b"IDAT", "IDAT before IHDR"));
                }
                if self.idat_closed {
                    return Err(ordering_violation(
                        b"IDAT",
                        "IDAT chunks must be consecutive",
                    ));
                }
                self.idat_started = true;
                Ok(Action::Parse)
            }
            ChunkType::IEND => {
                if !self.seen_ihdr {
                    return Err(ordering_violation(b"IEND", "IEND before IHDR"));
                }
                Ok(Action::Terminate)
            }
            other if BEFORE_PLTE_AND_IDAT.contains(&other) => {
                if !self.seen_ihdr || self.seen_plte || self.idat_started {
                    self.close_idat_run_if_needed();
                    return Ok(Action::SoftDrop);
                }
                Ok(Action::Parse)
            }
            other if BEFORE_IDAT_AFTER_PLTE.contains(&other) => {
                if !self.seen_ihdr || self.idat_started {
                    self.close_idat_run_if_needed();
                    return Ok(Action::SoftDrop);
                }
                if metadata.color_type == Some(crate::color::ColorType::PLTE) && !self.seen_plte {
                    return Ok(Action::SoftDrop);
                }
                Ok(Action::Parse)
            }
            ChunkType::sPLT | ChunkType::pHYs => {
                self.close_idat_run_if_needed();
                if !self.seen_ihdr || self.idat_started {
                    return Ok(Action::SoftDrop);
                }
                Ok(Action::Parse)
            }
            ChunkType::tIME | ChunkType::tEXt | ChunkType::zTXt | ChunkType::iTXt => {
                self.close_idat_run_if_needed();
                if !self.seen_ihdr {
                    return Ok(Action::SoftDrop);
                }
                Ok(Action::Parse)
            }
            ChunkType::Unknown(_) => Ok(Action::SoftDrop),
        }
    }

    /// Marks the current IDAT run as closed once a non-IDAT chunk is observed
    /// after at least one IDAT chunk, so a later IDAT is caught as
    /// non-contiguous.
    fn close_idat_run_if_needed(&mut self) {
        if self.idat_started {
            self.idat_closed = true;
        }
    }
}

fn ordering_violation(chunk_type: &[u8; 4], reason: &'static str) -> DecodeError {
    DecodeError::OrderingViolation {
        chunk_type: *chunk_type,
        reason,
    }
}
