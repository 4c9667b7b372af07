use anyhow::{Context, Result};
use bytes::Bytes;
use framelet_core::encoder::FrameEncoder;
use std::fs;
use tracing::info;

pub fn execute(input: &str, output: &str, start_counter: u16) -> Result<()> {
    info!("Packing payloads from {} to {}", input, output);

    // Read input JSON
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let payloads: Vec<String> = serde_json::from_str(&content)
        .with_context(|| "Failed to parse JSON input (expected an array of strings)")?;

    info!("Found {} payloads to pack", payloads.len());

    let mut encoder = FrameEncoder::starting_at(start_counter);
    let mut frames: Vec<Bytes> = Vec::with_capacity(payloads.len());

    for payload in &payloads {
        let counter = encoder.counter();
        let frame = encoder
            .encode(payload.as_bytes())
            .with_context(|| format!("Failed to encode frame {}", counter))?;

        info!("Packed frame {} ({} bytes)", counter, frame.len());
        frames.push(frame);
    }

    let mut output_data = Vec::new();
    for frame in &frames {
        output_data.extend_from_slice(frame);
    }

    // Write output file
    fs::write(output, &output_data)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Successfully packed {} frames ({} bytes total)",
        frames.len(),
        output_data.len()
    );

    Ok(())
}
