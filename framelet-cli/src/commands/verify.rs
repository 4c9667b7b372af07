use anyhow::{bail, Context, Result};
use colored::*;
use framelet_core::decoder::decode_frame;
use std::fs;
use std::io::{self, Read};
use tracing::info;

pub fn execute(input: &str) -> Result<()> {
    info!("Verifying file: {}", input);

    // Read input file or stdin
    let data = if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?
    };

    match decode_frame(&data) {
        Ok((frame, consumed)) => {
            println!("\n=== Frame ===");
            println!("Frame counter:  {}", frame.header.frame_counter);
            println!("Payload size:   {} bytes", frame.header.payload_size);
            println!("Wire size:      {} bytes", consumed);
            println!("Payload CRC:    {:#06x}", frame.payload_crc);
            if frame.payload.len() <= 64 {
                println!("Payload:        {}", hex::encode(frame.payload));
            } else {
                println!(
                    "Payload:        {}... ({} bytes)",
                    hex::encode(&frame.payload[..64]),
                    frame.payload.len()
                );
            }

            if consumed < data.len() {
                println!(
                    "{} {} trailing bytes after the frame",
                    "!".yellow(),
                    data.len() - consumed
                );
            }

            println!("\n{} Frame is valid", "✓".green());
            Ok(())
        }
        Err(err) => {
            println!("\n{} Decode failed: {}", "✗".red(), err);
            if err.is_corruption() {
                println!("The input is damaged; a stream scan may still recover other frames");
            }
            bail!("invalid frame: {}", err)
        }
    }
}
