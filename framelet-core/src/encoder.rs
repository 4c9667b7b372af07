//! Frame encoding

use crate::constants::{frame_size, HEADER_SIZE, MAX_PAYLOAD_SIZE, PREAMBLE};
use crate::crc::crc16;
use crate::error::FrameError;
use bytes::{BufMut, Bytes, BytesMut};

/// Stateful frame serializer.
///
/// Holds the next frame counter to assign; the counter increments after
/// every successful encode and wraps modulo 65536, so repeated calls
/// produce consecutive counter values regardless of payload content.
///
/// The counter is plain mutable state: concurrent encodes on a shared
/// encoder need external locking or counter values are lost or duplicated.
#[derive(Debug)]
pub struct FrameEncoder {
    frame_counter: u16,
}

impl FrameEncoder {
    /// Create an encoder whose first frame carries counter 0
    pub fn new() -> Self {
        Self { frame_counter: 0 }
    }

    /// Create an encoder resuming a sequence at `frame_counter`
    pub fn starting_at(frame_counter: u16) -> Self {
        Self { frame_counter }
    }

    /// The counter the next encoded frame will carry
    pub fn counter(&self) -> u16 {
        self.frame_counter
    }

    /// Pre-set the counter, e.g. to resume an interrupted sequence
    pub fn set_counter(&mut self, frame_counter: u16) {
        self.frame_counter = frame_counter;
    }

    /// Encode one frame into the start of `dst`, returning bytes written.
    ///
    /// The frame is laid out as:
    /// 1. Preamble (2 bytes): `55 AA`
    /// 2. Frame counter (2 bytes, little-endian)
    /// 3. Payload size (2 bytes, little-endian)
    /// 4. Header CRC (2 bytes, little-endian, over bytes 0-5)
    /// 5. Payload (verbatim)
    /// 6. Payload CRC (2 bytes, little-endian, over the payload only)
    ///
    /// Fails with [`FrameError::PayloadTooLarge`] when the payload exceeds
    /// [`MAX_PAYLOAD_SIZE`] and [`FrameError::BufferTooSmall`] when `dst`
    /// cannot hold the whole frame; the counter is untouched on failure.
    pub fn encode_into(&mut self, payload: &[u8], dst: &mut [u8]) -> Result<usize, FrameError> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(FrameError::PayloadTooLarge {
                size: payload.len(),
                max: MAX_PAYLOAD_SIZE,
            });
        }

        let total = frame_size(payload.len());
        if dst.len() < total {
            return Err(FrameError::BufferTooSmall {
                required: total,
                capacity: dst.len(),
            });
        }

        dst[0..2].copy_from_slice(&PREAMBLE);
        dst[2..4].copy_from_slice(&self.frame_counter.to_le_bytes());
        dst[4..6].copy_from_slice(&(payload.len() as u16).to_le_bytes());

        let header_crc = crc16(&dst[0..6]);
        dst[6..8].copy_from_slice(&header_crc.to_le_bytes());

        dst[HEADER_SIZE..HEADER_SIZE + payload.len()].copy_from_slice(payload);

        let payload_crc = crc16(payload);
        dst[HEADER_SIZE + payload.len()..total].copy_from_slice(&payload_crc.to_le_bytes());

        self.frame_counter = self.frame_counter.wrapping_add(1);
        Ok(total)
    }

    /// Encode one frame into a freshly allocated buffer
    pub fn encode(&mut self, payload: &[u8]) -> Result<Bytes, FrameError> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(FrameError::PayloadTooLarge {
                size: payload.len(),
                max: MAX_PAYLOAD_SIZE,
            });
        }

        let mut buf = BytesMut::with_capacity(frame_size(payload.len()));
        buf.put_slice(&PREAMBLE);
        buf.put_u16_le(self.frame_counter);
        buf.put_u16_le(payload.len() as u16);
        // The buffer holds exactly the 6 header bytes the CRC covers.
        buf.put_u16_le(crc16(&buf));
        buf.put_slice(payload);
        buf.put_u16_le(crc16(payload));

        self.frame_counter = self.frame_counter.wrapping_add(1);
        Ok(buf.freeze())
    }
}

impl Default for FrameEncoder {
    fn default() -> Self {
        Self::new()
    }
}
