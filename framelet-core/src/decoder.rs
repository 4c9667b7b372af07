//! Single-frame decoding (strict mode)

use crate::constants::{HEADER_SIZE, MIN_FRAME_SIZE, PREAMBLE};
use crate::crc::crc16;
use crate::error::FrameError;
use crate::types::{FrameHeader, FrameView};

/// Validate and unpack one candidate frame from the start of `window`.
///
/// On success returns the decoded frame and the exact number of bytes it
/// occupies on the wire, so the caller can advance its read position
/// precisely. The returned view borrows the payload from `window`.
///
/// Validation order, with the error reported for each failure:
/// 1. `window` shorter than the minimum frame: [`FrameError::IncompleteFrame`]
/// 2. preamble mismatch: [`FrameError::InvalidPreamble`]
/// 3. header CRC recomputed over the 6 raw header bytes differs from the
///    stored one: [`FrameError::InvalidHeaderCrc`]
/// 4. payload size above the format maximum: [`FrameError::PayloadTooLarge`]
/// 5. `window` shorter than the full frame: [`FrameError::IncompleteFrame`]
///    (the header was valid; the caller must supply more data before this
///    offset can be retried)
/// 6. payload CRC mismatch: [`FrameError::InvalidPayloadCrc`]
///
/// A payload size of zero is legal: the frame carries an empty payload and
/// the payload CRC is the checksum of zero bytes.
pub fn decode_frame(window: &[u8]) -> Result<(FrameView<'_>, usize), FrameError> {
    if window.len() < MIN_FRAME_SIZE {
        return Err(FrameError::IncompleteFrame {
            expected: MIN_FRAME_SIZE,
            actual: window.len(),
        });
    }

    let preamble = [window[0], window[1]];
    if preamble != PREAMBLE {
        return Err(FrameError::InvalidPreamble(preamble));
    }

    let frame_counter = u16::from_le_bytes([window[2], window[3]]);
    let payload_size = u16::from_le_bytes([window[4], window[5]]);
    let stored_header_crc = u16::from_le_bytes([window[6], window[7]]);

    let computed = crc16(&window[0..6]);
    if computed != stored_header_crc {
        return Err(FrameError::InvalidHeaderCrc {
            expected: stored_header_crc,
            actual: computed,
        });
    }

    let header = FrameHeader::new(frame_counter, payload_size);
    header.validate()?;

    let total = header.frame_size();
    if window.len() < total {
        return Err(FrameError::IncompleteFrame {
            expected: total,
            actual: window.len(),
        });
    }

    let payload = &window[HEADER_SIZE..HEADER_SIZE + payload_size as usize];
    let stored_payload_crc = u16::from_le_bytes([window[total - 2], window[total - 1]]);

    let computed = crc16(payload);
    if computed != stored_payload_crc {
        return Err(FrameError::InvalidPayloadCrc {
            expected: stored_payload_crc,
            actual: computed,
        });
    }

    Ok((
        FrameView {
            header,
            payload,
            payload_crc: stored_payload_crc,
        },
        total,
    ))
}
