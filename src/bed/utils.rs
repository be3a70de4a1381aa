//! Utility functions for .bed file operations
//!
//! This module provides helper functions for sizing .bed files: how many
//! bytes one variant block occupies and how large a file with given
//! dimensions must be.

use super::header::SIZE_HEADER;

/// Number of genotypes packed into a single byte (2 bits each)
pub const GENOTYPES_PER_BYTE: usize = 4;

/// Returns the number of bytes occupied by one variant block
///
/// Each variant stores one 2-bit genotype per sample, four samples to a byte,
/// with the final byte padded when the sample count is not a multiple of four.
#[must_use]
pub fn bytes_per_variant(num_samples: usize) -> usize {
    num_samples.div_ceil(GENOTYPES_PER_BYTE)
}

/// Calculates the expected size in bytes of a .bed file
///
/// This is the quantity the reader validates declared dimensions against at
/// open time: a 3-byte header followed by one block of
/// [`bytes_per_variant`] bytes per variant.
///
/// # Examples
///
/// ```
/// use bedmatrix::bed::expected_file_size;
///
/// // 6 samples pack into 2 bytes per variant
/// assert_eq!(expected_file_size(6, 10), 3 + 2 * 10);
/// ```
#[must_use]
pub fn expected_file_size(num_samples: usize, num_variants: usize) -> usize {
    SIZE_HEADER + num_variants * bytes_per_variant(num_samples)
}
