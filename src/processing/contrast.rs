use crate::{
    error::Result,
    image_io,
    planar::PixelCube,
    processing::{ImageTransform, TransformContext},
};

/// Contrast applied when the strategy is built with [`Default`].
pub const DEFAULT_CONTRAST_DELTA: f32 = 30.0;

/// Midpoint contrast adjustment.
///
/// Each channel is scaled away from (or toward) 128 by a factor derived
/// from `delta` in [-255, 255], then clamped back into byte range. Positive
/// deltas spread the histogram, negative ones flatten it.
#[derive(Debug, Clone, Copy)]
pub struct ContrastMod {
    pub delta: f32,
}

impl Default for ContrastMod {
    fn default() -> Self {
        ContrastMod {
            delta: DEFAULT_CONTRAST_DELTA,
        }
    }
}

impl ContrastMod {
    pub fn new(delta: f32) -> Self {
        ContrastMod { delta }
    }

    fn factor(&self) -> f32 {
        (259.0 * (self.delta + 255.0)) / (255.0 * (259.0 - self.delta))
    }
}

impl ImageTransform for ContrastMod {
    fn apply(&self, pixels: &PixelCube, ctx: &TransformContext) -> Result<PixelCube> {
        // Snapshot the untouched input before any modification.
        image_io::write_image(pixels, &ctx.backup)?;

        let factor = self.factor();
        Ok(pixels.map(|px| px.map(|v| adjust(v, factor))))
    }
}

#[inline]
fn adjust(value: u8, factor: f32) -> u8 {
    (factor * (value as f32 - 128.0) + 128.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_is_identity() {
        let factor = ContrastMod::new(0.0).factor();
        for value in 0..=255u8 {
            assert_eq!(adjust(value, factor), value);
        }
    }

    #[test]
    fn midpoint_is_a_fixed_point() {
        let factor = ContrastMod::default().factor();
        assert_eq!(adjust(128, factor), 128);
    }

    #[test]
    fn positive_delta_spreads_values_from_midpoint() {
        let factor = ContrastMod::new(60.0).factor();
        assert!(adjust(100, factor) < 100);
        assert!(adjust(160, factor) > 160);
    }

    #[test]
    fn extremes_stay_in_byte_range() {
        let factor = ContrastMod::new(255.0 * 0.9).factor();
        assert_eq!(adjust(0, factor), 0);
        assert_eq!(adjust(255, factor), 255);
    }
}
