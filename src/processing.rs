use std::path::PathBuf;

use crate::{
    error::{PixelplaneError, Result},
    planar::PixelCube,
};

pub mod contrast;

pub use contrast::ContrastMod;

/// File-system collaborators handed to a strategy alongside the pixel data.
#[derive(Debug, Clone)]
pub struct TransformContext {
    /// Where the orchestration layer will write the processed result.
    pub output: PathBuf,
    /// Where a strategy may snapshot the unmodified source image.
    pub backup: PathBuf,
}

/// Capability implemented by every processing strategy.
///
/// A strategy consumes a pixel cube by reference and returns a new
/// independently owned cube of the same shape; it must not assume the
/// caller tolerates mutation of the input. Writing a backup copy of the
/// untouched input to `ctx.backup` is the one permitted side effect.
pub trait ImageTransform {
    fn apply(&self, pixels: &PixelCube, ctx: &TransformContext) -> Result<PixelCube>;
}

/// Name-dispatched processing strategies.
///
/// New strategies register here: add a variant, match it in [`from_name`]
/// and [`apply`]. The orchestration layer never names a concrete type.
///
/// [`from_name`]: Strategy::from_name
/// [`apply`]: Strategy::apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    ContrastMod,
}

impl Strategy {
    /// Resolves a command-line identifier. Unknown names fail with
    /// [`PixelplaneError::UnknownStrategy`] rather than falling back to a
    /// default.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "ContrastMod" => Ok(Strategy::ContrastMod),
            _ => Err(PixelplaneError::UnknownStrategy(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::ContrastMod => "ContrastMod",
        }
    }

    /// Runs the selected strategy. Any failure inside it surfaces as
    /// [`PixelplaneError::ProcessingFailed`] so the caller cannot proceed
    /// on stale data.
    pub fn apply(&self, pixels: &PixelCube, ctx: &TransformContext) -> Result<PixelCube> {
        let result = match self {
            Strategy::ContrastMod => ContrastMod::default().apply(pixels, ctx),
        };

        result.map_err(|e| PixelplaneError::ProcessingFailed {
            strategy: self.name().to_string(),
            message: e.to_string(),
        })
    }
}
