use std::fmt;

/// The main error type for the pixelplane crate
#[derive(Debug)]
pub enum PixelplaneError {
    /// Error occurred while reading or decoding an image
    ImageDecode(image::ImageError),

    /// Error occurred while writing or encoding an image
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),

    /// Packed buffer length does not match the requested rows x columns shape
    InvalidDimensions {
        rows: usize,
        columns: usize,
        len: usize,
    },

    /// No processing strategy is registered under the requested name
    UnknownStrategy(String),

    /// A strategy failed mid-run; the caller holds no valid result
    ProcessingFailed { strategy: String, message: String },

    /// Command line did not match `pixelplane [strategy] [input] [output]`
    InvalidArgs,
}

impl fmt::Display for PixelplaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelplaneError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            PixelplaneError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            PixelplaneError::Io(e) => write!(f, "I/O error: {}", e),
            PixelplaneError::InvalidDimensions { rows, columns, len } => write!(
                f,
                "Invalid dimensions: {} packed pixels cannot fill {} rows x {} columns",
                len, rows, columns
            ),
            PixelplaneError::UnknownStrategy(name) => {
                write!(f, "Unknown processing strategy: {}", name)
            }
            PixelplaneError::ProcessingFailed { strategy, message } => {
                write!(f, "Processing strategy {} failed: {}", strategy, message)
            }
            PixelplaneError::InvalidArgs => write!(f, "Invalid args"),
        }
    }
}

impl std::error::Error for PixelplaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PixelplaneError::ImageDecode(e) | PixelplaneError::ImageEncode(e) => Some(e),
            PixelplaneError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for PixelplaneError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match &err {
            image::ImageError::Encoding(_) => PixelplaneError::ImageEncode(err),
            _ => PixelplaneError::ImageDecode(err),
        }
    }
}

impl From<std::io::Error> for PixelplaneError {
    fn from(err: std::io::Error) -> Self {
        PixelplaneError::Io(err)
    }
}

// Convenience type alias for Results using PixelplaneError
pub type Result<T = ()> = std::result::Result<T, PixelplaneError>;
