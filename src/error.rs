use std::path::PathBuf;

/// Custom Result type for bedmatrix operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bedmatrix library, encompassing all possible
/// error cases that can occur while mapping and decoding .bed files.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors related to the file mapping lifecycle
    MapError(#[from] MapError),
    /// Errors related to .bed file structure and decode queries
    BedError(#[from] BedError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
    /// Generic errors that can occur in any part of the system
    AnyhowError(#[from] anyhow::Error),
}

/// Errors that can occur while establishing or releasing a file mapping
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    /// The path could not be opened for reading
    #[error("Could not open file: {path}")]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The path resolves to something other than a regular file
    /// (e.g., a directory, device, or pipe)
    #[error("Not a regular file: {0}")]
    NotRegularFile(PathBuf),

    /// The underlying memory-mapping call failed
    /// (e.g., permissions, resource exhaustion)
    #[error("Could not map file: {path}")]
    MapFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The mapping has already been released
    #[error("Mapping has already been released")]
    AlreadyUnmapped,
}

/// Errors that can occur while validating or querying a .bed file
#[derive(thiserror::Error, Debug)]
pub enum BedError {
    /// The file is too short to hold the fixed-size header
    ///
    /// # Arguments
    /// * `usize` - The actual number of bytes in the file
    #[error("File too short for a .bed header: {0} bytes")]
    TruncatedHeader(usize),

    /// The magic bytes do not match the .bed signature
    ///
    /// # Arguments
    /// * `[u8; 2]` - The invalid magic bytes that were found
    #[error("Invalid magic bytes: expected [0x6C, 0x1B], found {0:#04X?}")]
    InvalidFormat([u8; 2]),

    /// The storage mode byte declares the legacy sample-major layout,
    /// which is not supported
    ///
    /// # Arguments
    /// * `u8` - The mode byte that was found
    #[error("Unsupported storage mode: {0:#04X} (only variant-major 0x01 is supported)")]
    UnsupportedMode(u8),

    /// The declared dimensions are inconsistent with the file length
    ///
    /// # Fields
    /// * `num_samples` - The declared number of samples
    /// * `num_variants` - The declared number of variants
    /// * `length` - The mapped file length in bytes
    #[error(
        "Dimensions ({num_samples} samples x {num_variants} variants) do not match the file length ({length} bytes)"
    )]
    DimensionMismatch {
        num_samples: usize,
        num_variants: usize,
        length: usize,
    },

    /// A query was issued after the reader was closed
    #[error("Reader has been closed")]
    Closed,

    /// A requested index is outside the valid range for its axis
    ///
    /// # Fields
    /// * `index` - The requested index
    /// * `extent` - The extent of the axis being indexed
    #[error("Requested index ({index}) is out of range for axis of extent {extent}")]
    OutOfBounds { index: u64, extent: u64 },
}
