//! Error handling logic

use std::fmt;

/// Error types raised by fallible constructors and conversions.
///
/// The per-frame path never returns these: a missing drawing surface keeps the
/// animation loop from starting instead of surfacing an error to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlitchError {
    /// No drawing surface could be obtained from the host.
    SurfaceUnavailable {
        /// SurfaceUnavailable failure message
        message: String,
    },

    /// A surface or lattice was requested with a zero-sized dimension.
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Configuration could not be parsed or holds out-of-range values.
    InvalidConfig {
        /// InvalidConfig failure message
        message: String,
    },

    /// A notification payload could not be rendered for an external bridge.
    Serialization {
        /// Serialization failure message
        message: String,
    },
}

impl fmt::Display for GlitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlitchError::SurfaceUnavailable { message } => write!(f, "Surface Unavailable: {}", message),
            GlitchError::InvalidDimensions { width, height } => {
                write!(f, "Invalid Dimensions: {}x{} (both sides must be non-zero)", width, height)
            }
            GlitchError::InvalidConfig { message } => write!(f, "Invalid Configuration: {}", message),
            GlitchError::Serialization { message } => write!(f, "Serialization Error: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for GlitchError {}
