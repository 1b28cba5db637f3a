use std::path::PathBuf;

use crate::error::{PixelplaneError, Result};

/// Strategy used when none is named on the command line.
pub const DEFAULT_STRATEGY: &str = "ContrastMod";

/// Image file looked up in the working directory when no input is named.
pub const DEFAULT_INPUT: &str = "tiger.bmp";

/// Destination written when no output is named.
pub const DEFAULT_OUTPUT: &str = "out/backupCopy.bmp";

/// Where strategies snapshot the unmodified source image. Fixed, not
/// configurable from the command line.
pub const BACKUP_PATH: &str = "out/backupCopy.bmp";

/// One run's worth of configuration, threaded explicitly through calls
/// instead of living in process-wide state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub strategy: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub backup: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            strategy: DEFAULT_STRATEGY.to_string(),
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            backup: PathBuf::from(BACKUP_PATH),
        }
    }
}

impl RunConfig {
    /// Parses the positional arguments after the program name:
    /// `[strategy] [input] [output]`. Anything beyond three arguments fails
    /// with [`PixelplaneError::InvalidArgs`].
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = RunConfig::default();

        match args {
            [] => {}
            [strategy] => {
                config.strategy = strategy.clone();
            }
            [strategy, input] => {
                config.strategy = strategy.clone();
                config.input = PathBuf::from(input);
            }
            [strategy, input, output] => {
                config.strategy = strategy.clone();
                config.input = PathBuf::from(input);
                config.output = PathBuf::from(output);
            }
            _ => return Err(PixelplaneError::InvalidArgs),
        }

        Ok(config)
    }
}
