//! Core types for framelet frames

use crate::constants::{frame_size, MAX_PAYLOAD_SIZE};
use crate::error::FrameError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Frame header metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameHeader {
    /// Sequence number assigned by the encoder, wraps modulo 65536
    pub frame_counter: u16,

    /// Length of the payload in bytes
    pub payload_size: u16,
}

impl FrameHeader {
    /// Create a new frame header
    pub fn new(frame_counter: u16, payload_size: u16) -> Self {
        Self {
            frame_counter,
            payload_size,
        }
    }

    /// Validate the header against format limits
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.payload_size as usize > MAX_PAYLOAD_SIZE {
            return Err(FrameError::PayloadTooLarge {
                size: self.payload_size as usize,
                max: MAX_PAYLOAD_SIZE,
            });
        }
        Ok(())
    }

    /// Total wire size of a frame with this header
    pub fn frame_size(&self) -> usize {
        frame_size(self.payload_size as usize)
    }
}

/// A decoded frame borrowing its payload from the source window.
///
/// The payload slice is only valid while the underlying storage is
/// unchanged; callers that need the bytes past that point copy them out
/// with [`FrameView::to_frame`]. When decoding out of a ring buffer, whose
/// storage is overwritten by subsequent appends, the draining API hands out
/// owned [`Frame`]s instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView<'a> {
    /// Decoded header fields
    pub header: FrameHeader,

    /// Payload bytes, borrowed from the source window
    pub payload: &'a [u8],

    /// CRC carried after the payload on the wire
    pub payload_crc: u16,
}

impl<'a> FrameView<'a> {
    /// Total wire size of this frame
    pub fn total_size(&self) -> usize {
        frame_size(self.payload.len())
    }

    /// Copy the payload out into an owned [`Frame`]
    pub fn to_frame(&self) -> Frame {
        Frame {
            header: self.header,
            payload: Bytes::copy_from_slice(self.payload),
            payload_crc: self.payload_crc,
        }
    }
}

/// A decoded frame owning its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Decoded header fields
    pub header: FrameHeader,

    /// Payload bytes
    pub payload: Bytes,

    /// CRC carried after the payload on the wire
    pub payload_crc: u16,
}

impl Frame {
    /// Total wire size of this frame
    pub fn total_size(&self) -> usize {
        frame_size(self.payload.len())
    }

    /// Sequence number assigned by the encoder
    pub fn frame_counter(&self) -> u16 {
        self.header.frame_counter
    }
}
