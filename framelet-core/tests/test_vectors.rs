//! Wire-format test vectors
//!
//! Byte-exact frames, the published CRC vectors, counter wraparound, and
//! the corruption/truncation ladders the scanner must survive.

use framelet_core::{
    constants::{frame_size, CRC_INIT, MIN_FRAME_SIZE},
    crc::crc16,
    decoder::decode_frame,
    encoder::FrameEncoder,
    scanner::{scan_frames, scan_stream},
};

#[test]
fn crc_matches_published_ccitt_false_vector() {
    assert_eq!(crc16(b"123456789"), 0x29B1);
}

#[test]
fn crc_of_empty_input_is_the_initial_register() {
    assert_eq!(crc16(&[]), CRC_INIT);
    assert_eq!(CRC_INIT, 0xFFFF);
}

#[test]
fn golden_minimal_frame_bytes() {
    let mut encoder = FrameEncoder::new();
    let frame = encoder.encode(&[]).unwrap();

    // preamble | counter 0 | size 0 | header CRC | payload CRC (empty)
    let expected = [
        0x55, 0xAA, 0x00, 0x00, 0x00, 0x00, 0x4F, 0x51, 0xFF, 0xFF,
    ];
    assert_eq!(frame.as_ref(), &expected, "frame was {}", hex::encode(&frame));
}

#[test]
fn golden_text_frame_bytes() {
    let mut encoder = FrameEncoder::new();
    let frame = encoder.encode(b"123456789").unwrap();

    let expected = [
        0x55, 0xAA, // preamble
        0x00, 0x00, // frame_counter = 0
        0x09, 0x00, // payload_size = 9
        0xD7, 0xEB, // header CRC
        0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, // "123456789"
        0xB1, 0x29, // payload CRC = 0x29B1
    ];
    assert_eq!(frame.as_ref(), &expected, "frame was {}", hex::encode(&frame));
}

#[test]
fn header_crc_field_covers_the_first_six_bytes() {
    let mut encoder = FrameEncoder::starting_at(0xABCD);
    let frame = encoder.encode(b"check").unwrap();

    let stored = u16::from_le_bytes([frame[6], frame[7]]);
    assert_eq!(stored, crc16(&frame[0..6]));
}

#[test]
fn counter_wraparound_vector() {
    let mut encoder = FrameEncoder::starting_at(65534);

    let counters: Vec<u16> = (0..3)
        .map(|_| {
            let frame = encoder.encode(b"wrap").unwrap();
            decode_frame(&frame).unwrap().0.header.frame_counter
        })
        .collect();

    assert_eq!(counters, [65534, 65535, 0]);
}

/// Payload set mirroring the varied shapes real producers emit: empty,
/// short text, raw binary, long text, structured text, embedded NULs,
/// runs of a single byte, digits.
fn fixture_payloads() -> Vec<Vec<u8>> {
    let binary: Vec<u8> = (0u8..=255).map(|b| b.wrapping_mul(2)).collect();
    let large_text: Vec<u8> = b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(600)
        .collect();

    vec![
        Vec::new(),
        b"Hello, World!".to_vec(),
        binary,
        large_text,
        br#"{"id":42,"name":"sensor-7","value":3.14}"#.to_vec(),
        b"before\x00after\x00\x00end".to_vec(),
        vec![b' '; 64],
        b"0123456789".to_vec(),
    ]
}

fn fixture_stream() -> Vec<u8> {
    let mut encoder = FrameEncoder::new();
    let mut stream = Vec::new();
    for payload in fixture_payloads() {
        stream.extend_from_slice(&encoder.encode(&payload).unwrap());
    }
    stream
}

#[test]
fn combined_stream_parses_with_sequential_counters() {
    let payloads = fixture_payloads();
    let stream = fixture_stream();

    let located = scan_stream(&stream);
    assert_eq!(located.len(), payloads.len());

    for (i, (lf, payload)) in located.iter().zip(&payloads).enumerate() {
        assert_eq!(lf.frame.header.frame_counter, i as u16);
        assert_eq!(lf.frame.payload, payload.as_slice());
    }
}

#[test]
fn truncation_ladder_yields_no_frames() {
    // Fewer bytes than one complete frame must scan to zero frames, for
    // every truncation length.
    let frame = FrameEncoder::new().encode(b"truncation target").unwrap();

    for cut in 0..frame.len() {
        let count = scan_frames(&frame[..cut], |_| {});
        assert_eq!(count, 0, "truncation at {} bytes decoded a frame", cut);
    }

    assert_eq!(scan_frames(&frame, |_| {}), 1);
}

#[test]
fn corruption_ladder_drops_exactly_one_frame_per_position() {
    // Flip all bits of one byte at every position in the stream: exactly
    // the frame containing that byte is lost, every other frame is
    // recovered.
    let payloads = fixture_payloads();
    let mut stream = fixture_stream();

    for position in 0..stream.len() {
        stream[position] ^= 0xFF;

        let count = scan_frames(&stream, |_| {});
        assert_eq!(
            count,
            payloads.len() - 1,
            "corruption at byte {} decoded {} of {} frames",
            position,
            count,
            payloads.len()
        );

        stream[position] ^= 0xFF;
    }
}

#[test]
fn minimum_frame_size_is_ten_bytes() {
    assert_eq!(MIN_FRAME_SIZE, 10);
    assert_eq!(frame_size(0), 10);

    let frame = FrameEncoder::new().encode(&[]).unwrap();
    assert_eq!(frame.len(), MIN_FRAME_SIZE);
}
