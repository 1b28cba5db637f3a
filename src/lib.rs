use std::time::Instant;

pub mod config;
pub mod error;
pub mod image_io;
pub mod planar;
pub mod processing;

#[cfg(test)]
mod tests;

use config::RunConfig;
use error::Result;
use planar::PixelCube;
use processing::{Strategy, TransformContext};

/// Drives one full pass over a single image: decode, flatten to packed
/// ARGB, unpack into a planar cube, run the named strategy, encode the
/// result. Per-phase wall time is reported on stdout.
pub fn run(config: &RunConfig) -> Result {
    let start = Instant::now();
    let image = image_io::read_image(&config.input)?;
    report_phase("Original image reading", start);

    let start = Instant::now();
    let (packed, columns, rows) = image_io::image_to_packed(&image);
    let pixels = PixelCube::from_packed(&packed, columns, rows)?;
    report_phase("Pixel conversion", start);

    let strategy = Strategy::from_name(&config.strategy)?;
    let ctx = TransformContext {
        output: config.output.clone(),
        backup: config.backup.clone(),
    };

    let start = Instant::now();
    let processed = strategy.apply(&pixels, &ctx)?;
    report_phase("Image processing", start);

    let start = Instant::now();
    image_io::write_image(&processed, &config.output)?;
    report_phase("Result writing", start);

    Ok(())
}

fn report_phase(label: &str, start: Instant) {
    println!("{}: {} seconds", label, start.elapsed().as_secs_f64());
}
