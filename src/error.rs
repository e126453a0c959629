//! Error types.

use thiserror::Error;

/// Result type alias for ring operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by argument validation or image output.
#[derive(Error, Debug)]
pub enum Error {
    /// A command line token is not a valid unsigned 32-bit integer.
    #[error("could not parse `{token}` as uint")]
    Parse {
        /// The offending token.
        token: String,
    },

    /// The requested output size exceeds the ring order.
    #[error("size {size} must not be greater than order {order}")]
    SizeExceedsOrder {
        /// Order of the ring.
        order: u32,
        /// Requested output size.
        size: u32,
    },

    /// The ring order is zero, leaving the modulus undefined.
    #[error("order must be positive")]
    ZeroOrder,

    /// The output size is zero.
    #[error("size must be positive")]
    ZeroSize,

    /// The rendered image could not be written to disk.
    #[error("could not save image: {0}")]
    Save(#[from] image::ImageError),
}
