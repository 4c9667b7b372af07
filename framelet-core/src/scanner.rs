//! Stream scanner for damaged or noisy input

use crate::constants::{MIN_FRAME_SIZE, PREAMBLE, PREAMBLE_SIZE};
use crate::decoder::decode_frame;
use crate::error::FrameError;
use crate::ring::RingBuffer;
use crate::types::{Frame, FrameView};
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// A frame found at a specific offset in the stream
#[derive(Debug, Clone, Copy)]
pub struct LocatedFrame<'a> {
    /// Byte offset where the frame starts
    pub offset: usize,

    /// The decoded frame, borrowing its payload from the stream
    pub frame: FrameView<'a>,

    /// Total size of the frame in bytes
    pub size: usize,
}

/// Lazy scanner yielding valid frames from a byte stream.
///
/// Each pull searches forward for the next preamble, attempts a decode
/// there, and resynchronizes byte-by-byte past anything invalid:
///
/// - a decoded frame is yielded and the cursor jumps past it;
/// - an incomplete frame ends the scan entirely - there is not yet enough
///   trailing data to know whether the candidate is valid, so no later
///   candidate is attempted either;
/// - any other decode failure advances the cursor by exactly one byte and
///   the search resumes.
///
/// One corrupted frame therefore cannot hide subsequent valid frames whose
/// preambles are intact, and a run of preamble look-alikes is skipped one
/// byte at a time. Worst-case cost is a linear rescan of the stream.
#[derive(Debug)]
pub struct FrameScanner<'a> {
    data: &'a [u8],
    pos: usize,
    done: bool,
    candidates: usize,
    failures: usize,
}

impl<'a> FrameScanner<'a> {
    /// Scan `data` from the beginning
    pub fn new(data: &'a [u8]) -> Self {
        Self::from_offset(data, 0)
    }

    /// Scan `data` starting at `offset`, e.g. to resume an earlier scan
    pub fn from_offset(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            pos: offset.min(data.len()),
            done: false,
            candidates: 0,
            failures: 0,
        }
    }

    /// The cursor where scanning stopped or will continue.
    ///
    /// After the iterator is exhausted this is the settled boundary:
    /// everything before it was decoded or is unrecoverable, everything
    /// from it on may still grow into a valid frame once more bytes arrive
    /// (an incomplete candidate, or a trailing first preamble byte whose
    /// partner has not arrived yet).
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Preamble candidates examined so far
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// Candidates that failed to decode so far
    pub fn failures(&self) -> usize {
        self.failures
    }

    fn finish_at(&mut self, pos: usize) {
        self.pos = pos;
        self.done = true;
    }
}

impl<'a> Iterator for FrameScanner<'a> {
    type Item = LocatedFrame<'a>;

    fn next(&mut self) -> Option<LocatedFrame<'a>> {
        if self.done {
            return None;
        }

        loop {
            let Some(found) = find_preamble(&self.data[self.pos..]) else {
                // No further marker fits before the end. A lone first
                // preamble byte at the very end may still pair with the
                // next chunk in streaming use, so it stays unsettled.
                let end = match self.data.last() {
                    Some(&b) if b == PREAMBLE[0] && self.pos < self.data.len() => {
                        self.data.len() - 1
                    }
                    _ => self.data.len(),
                };
                self.finish_at(end);
                return None;
            };

            let at = self.pos + found;
            self.candidates += 1;

            if self.data.len() - at < MIN_FRAME_SIZE {
                // Too little trailing data to attempt a decode; the
                // candidate may still extend into a valid frame.
                self.finish_at(at);
                return None;
            }

            match decode_frame(&self.data[at..]) {
                Ok((frame, size)) => {
                    #[cfg(feature = "logging")]
                    debug!(
                        offset = at,
                        counter = frame.header.frame_counter,
                        size,
                        "decoded frame"
                    );

                    self.pos = at + size;
                    return Some(LocatedFrame {
                        offset: at,
                        frame,
                        size,
                    });
                }
                Err(FrameError::IncompleteFrame { .. }) => {
                    #[cfg(feature = "logging")]
                    debug!(offset = at, "incomplete frame, scan stops");

                    self.finish_at(at);
                    return None;
                }
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    warn!(offset = at, error = ?_err, "invalid frame, resyncing");

                    self.failures += 1;
                    self.pos = at + 1;
                }
            }
        }
    }
}

// memmem dispatches to optimized backends (SSE2/AVX2/NEON).
fn find_preamble(data: &[u8]) -> Option<usize> {
    if data.len() < PREAMBLE_SIZE {
        return None;
    }
    memchr::memmem::find(data, &PREAMBLE)
}

/// Scan `stream` and invoke `callback` once per decoded frame, in stream
/// order. Returns the number of frames decoded.
///
/// The frame passed to the callback borrows from `stream` and is only
/// guaranteed valid for the duration of the call.
pub fn scan_frames<F>(stream: &[u8], mut callback: F) -> usize
where
    F: FnMut(&FrameView<'_>),
{
    let mut count = 0;
    for located in FrameScanner::new(stream) {
        callback(&located.frame);
        count += 1;
    }
    count
}

/// Scan `stream` and collect every decoded frame with its offset
pub fn scan_stream(stream: &[u8]) -> Vec<LocatedFrame<'_>> {
    FrameScanner::new(stream).collect()
}

/// Scan statistics
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Total bytes scanned
    pub bytes_scanned: usize,

    /// Number of preamble candidates examined
    pub candidates_found: usize,

    /// Number of valid frames found
    pub frames_found: usize,

    /// Number of decode failures
    pub decode_failures: usize,

    /// Total bytes recovered (sum of all valid frame sizes)
    pub bytes_recovered: usize,
}

impl ScanStats {
    /// Calculate recovery rate as a percentage
    pub fn recovery_rate(&self) -> f64 {
        if self.bytes_scanned == 0 {
            0.0
        } else {
            (self.bytes_recovered as f64 / self.bytes_scanned as f64) * 100.0
        }
    }
}

/// Scan `stream` with statistics
pub fn scan_stream_with_stats(stream: &[u8]) -> (Vec<LocatedFrame<'_>>, ScanStats) {
    let mut scanner = FrameScanner::new(stream);
    let mut results = Vec::new();
    for located in scanner.by_ref() {
        results.push(located);
    }

    let stats = ScanStats {
        bytes_scanned: stream.len(),
        candidates_found: scanner.candidates(),
        frames_found: results.len(),
        decode_failures: scanner.failures(),
        bytes_recovered: results.iter().map(|f| f.size).sum(),
    };

    (results, stats)
}

/// Decode and consume every complete frame queued in `ring`.
///
/// The occupied bytes are staged, scanned, and each decoded frame handed
/// to `sink` as an owned [`Frame`] - ring storage is overwritten by later
/// appends, so the payload must not alias it. Afterwards the settled
/// prefix is dropped from the ring: decoded frames and unrecoverable
/// bytes, but not a trailing partial frame, which stays buffered until
/// more data arrives. Feeding a stream through the ring in arbitrary
/// chunk sizes therefore yields every frame exactly once.
///
/// Returns the number of frames decoded.
pub fn drain_ring<F>(ring: &mut RingBuffer, mut sink: F) -> Result<usize, FrameError>
where
    F: FnMut(Frame),
{
    let mut staged = vec![0u8; ring.occupied()];
    ring.peek_into(&mut staged)?;

    let mut scanner = FrameScanner::new(&staged);
    let mut count = 0;
    for located in scanner.by_ref() {
        sink(located.frame.to_frame());
        count += 1;
    }

    ring.skip(scanner.position())?;
    Ok(count)
}
