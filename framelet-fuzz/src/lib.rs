//! Fuzzing entry points for framelet-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decoder

pub fn fuzz_decode(data: &[u8]) {
    use framelet_core::decoder::decode_frame;

    // Try to decode - should never panic
    let _ = decode_frame(data);
}

pub fn fuzz_scan(data: &[u8]) {
    use framelet_core::scanner::scan_stream;

    // Try to scan - should never panic
    let _ = scan_stream(data);
}

pub fn fuzz_ring(data: &[u8]) {
    use framelet_core::ring::RingBuffer;

    // Interpret the input as a script of append/consume/skip sizes and
    // replay it - should never panic and never break the invariant.
    let Ok(mut ring) = RingBuffer::with_capacity(64) else {
        return;
    };
    let scratch = [0u8; 64];
    let mut out = [0u8; 64];

    for chunk in data.chunks(2) {
        let op = chunk[0] % 3;
        let n = chunk.get(1).copied().unwrap_or(1) as usize % 64;
        match op {
            0 => {
                let _ = ring.append(&scratch[..n]);
            }
            1 => {
                let _ = ring.consume_into(&mut out[..n]);
            }
            _ => {
                let _ = ring.skip(n);
            }
        }
        assert_eq!(ring.free_space() + ring.occupied(), ring.capacity());
    }
}
