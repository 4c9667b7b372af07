//! Example demonstrating recovery from damaged data

use framelet_core::encoder::FrameEncoder;
use framelet_core::scanner::scan_stream_with_stats;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Framelet Damaged Stream Recovery Example\n");

    // Step 1: Create a clean stream with 10 frames
    println!("Step 1: Creating 10 frames...");
    let mut encoder = FrameEncoder::new();
    let mut stream = Vec::new();

    for i in 0..10 {
        let payload = format!("Important data from sensor {}", i);
        let encoded = encoder.encode(payload.as_bytes())?;
        stream.extend_from_slice(&encoded);
    }

    let original_size = stream.len();
    println!("Created clean stream: {} bytes\n", original_size);

    // Step 2: Simulate damage
    println!("Step 2: Simulating damage...");

    // Corrupt a stretch in the middle
    let mid = stream.len() / 2;
    stream[mid..mid + 20].fill(0xFF);
    println!("Corrupted bytes {}-{}", mid, mid + 20);

    // Delete a chunk near the start, cutting one frame in half
    stream.drain(30..45);
    println!("Deleted bytes 30-45");

    println!("Damaged stream: {} bytes\n", stream.len());

    // Step 3: Scan and recover
    println!("Step 3: Scanning damaged stream...");
    let (located_frames, stats) = scan_stream_with_stats(&stream);

    println!("Scan Results:");
    println!("  Bytes scanned:     {}", stats.bytes_scanned);
    println!("  Candidates found:  {}", stats.candidates_found);
    println!("  Valid frames:      {}", stats.frames_found);
    println!("  Decode failures:   {}", stats.decode_failures);
    println!("  Recovery rate:     {:.1}%\n", stats.recovery_rate());

    println!("Recovered frames:");
    for lf in &located_frames {
        println!(
            "  Frame {:>2} @ offset {:>4}: {}",
            lf.frame.header.frame_counter,
            lf.offset,
            String::from_utf8_lossy(lf.frame.payload)
        );
    }

    println!(
        "\nRecovered {} of 10 frames despite the damage",
        located_frames.len()
    );

    Ok(())
}
