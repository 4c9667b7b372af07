//! Error types for framelet operations

/// Errors that can occur during framelet frame operations
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Destination or backing capacity below what the operation needs
    #[cfg_attr(
        feature = "std",
        error("Buffer too small: {required} bytes required, capacity is {capacity}")
    )]
    BufferTooSmall {
        /// Bytes the operation needs.
        required: usize,
        /// Bytes the buffer can hold.
        capacity: usize,
    },

    /// Ring buffer operation would exceed free space or occupied bytes
    #[cfg_attr(
        feature = "std",
        error("Insufficient space: requested {requested} bytes, {available} available")
    )]
    InsufficientSpace {
        /// Bytes the caller asked to move.
        requested: usize,
        /// Bytes currently available for the operation.
        available: usize,
    },

    /// Payload size exceeds the maximum allowed
    #[cfg_attr(feature = "std", error("Payload size {size} exceeds maximum {max}"))]
    PayloadTooLarge {
        /// Requested payload size.
        size: usize,
        /// Maximum payload size the format allows.
        max: usize,
    },

    /// Incomplete frame - not enough data
    #[cfg_attr(
        feature = "std",
        error("Incomplete frame: expected {expected} bytes, got {actual}")
    )]
    IncompleteFrame {
        /// The number of bytes expected.
        expected: usize,
        /// The number of bytes actually found.
        actual: usize,
    },

    /// Preamble bytes do not match the frame marker
    #[cfg_attr(
        feature = "std",
        error("Invalid preamble: expected 55 AA, got {0:02X?}")
    )]
    InvalidPreamble([u8; 2]),

    /// Header checksum mismatch
    #[cfg_attr(
        feature = "std",
        error("Header CRC mismatch: expected {expected:#06x}, got {actual:#06x}")
    )]
    InvalidHeaderCrc {
        /// The CRC carried in the header.
        expected: u16,
        /// The CRC recomputed over the header bytes.
        actual: u16,
    },

    /// Payload checksum mismatch
    #[cfg_attr(
        feature = "std",
        error("Payload CRC mismatch: expected {expected:#06x}, got {actual:#06x}")
    )]
    InvalidPayloadCrc {
        /// The CRC carried after the payload.
        expected: u16,
        /// The CRC recomputed over the payload bytes.
        actual: u16,
    },
}

impl FrameError {
    /// Whether this error indicates wire corruption rather than a caller
    /// mistake or short read.
    ///
    /// The scanner already resynchronizes past these; embedders should
    /// surface them as telemetry, not treat them as fatal.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            FrameError::InvalidPreamble(_)
                | FrameError::InvalidHeaderCrc { .. }
                | FrameError::InvalidPayloadCrc { .. }
        )
    }
}
