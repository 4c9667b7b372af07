//! Basic encoding example

use framelet_core::encoder::FrameEncoder;
use framelet_core::ring::RingBuffer;
use framelet_core::scanner::drain_ring;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Framelet Basic Encoding Example\n");

    // Build a few frames with consecutive counters
    let messages = ["Hello, World!", "Framelet frame 2", "Final message"];

    let mut encoder = FrameEncoder::new();
    let mut stream = Vec::new();

    for message in &messages {
        let frame = encoder.encode(message.as_bytes())?;
        println!(
            "Built frame {} ({} bytes): \"{}\"",
            encoder.counter() - 1,
            frame.len(),
            message
        );
        stream.extend_from_slice(&frame);
    }

    println!("\nTotal stream size: {} bytes\n", stream.len());

    // Parse the frames back out through a ring buffer, the way a receiver
    // staging a serial link would
    println!("Parsing frames:");

    let mut ring = RingBuffer::with_capacity(1024)?;
    ring.append(&stream)?;

    let parsed = drain_ring(&mut ring, |frame| {
        println!(
            "Received frame {} with {} byte payload: {}",
            frame.header.frame_counter,
            frame.payload.len(),
            String::from_utf8_lossy(&frame.payload)
        );
    })?;

    println!("\nParsed {} frames from stream", parsed);

    std::fs::write("example_output.bin", &stream)?;
    println!("Wrote {} bytes to example_output.bin", stream.len());
    println!("Use 'framelet scan --input example_output.bin' to read it back");

    Ok(())
}
