//! Header validation for .bed files
//!
//! The .bed header is three fixed bytes: a two-byte magic signature followed
//! by a storage mode byte. There is no version field and no variable content;
//! validating the header is a matter of matching the signature and rejecting
//! the legacy sample-major mode.

use crate::error::{BedError, Result};

/// Magic bytes identifying a PLINK .bed file
pub const MAGIC: [u8; 2] = [0x6C, 0x1B];

/// Mode byte for the variant-major layout (all samples for the first variant,
/// then all samples for the second variant, and so on)
pub const MODE_VARIANT_MAJOR: u8 = 0x01;

/// Mode byte for the legacy sample-major layout, which is not supported
pub const MODE_SAMPLE_MAJOR: u8 = 0x00;

/// Size of the header in bytes
pub const SIZE_HEADER: usize = 3;

/// Validated header of a .bed file
///
/// The header carries no dynamic content beyond the storage mode; holding a
/// `BedHeader` is proof that the magic bytes matched and the mode is the
/// supported variant-major layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BedHeader {
    /// Magic bytes, always [`MAGIC`] after validation
    pub magic: [u8; 2],
    /// Storage mode, always [`MODE_VARIANT_MAJOR`] after validation
    pub mode: u8,
}

impl BedHeader {
    /// Validates the header at the start of `buffer`
    ///
    /// # Arguments
    ///
    /// * `buffer` - The mapped file contents, starting at byte zero
    ///
    /// # Errors
    ///
    /// * [`BedError::TruncatedHeader`] - if the buffer is shorter than the header
    /// * [`BedError::InvalidFormat`] - if the magic bytes do not match
    /// * [`BedError::UnsupportedMode`] - if the mode byte is not variant-major
    pub fn from_buffer(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < SIZE_HEADER {
            return Err(BedError::TruncatedHeader(buffer.len()).into());
        }
        let magic = [buffer[0], buffer[1]];
        if magic != MAGIC {
            return Err(BedError::InvalidFormat(magic).into());
        }
        let mode = buffer[2];
        if mode != MODE_VARIANT_MAJOR {
            return Err(BedError::UnsupportedMode(mode).into());
        }
        Ok(Self { magic, mode })
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_valid_header() {
        let header = BedHeader::from_buffer(&[0x6C, 0x1B, 0x01, 0xFF]).unwrap();
        assert_eq!(header.magic, MAGIC);
        assert_eq!(header.mode, MODE_VARIANT_MAJOR);
    }

    #[test]
    fn test_invalid_magic() {
        let err = BedHeader::from_buffer(&[0x6C, 0x1C, 0x01]).unwrap_err();
        assert!(matches!(
            err,
            Error::BedError(BedError::InvalidFormat([0x6C, 0x1C]))
        ));
    }

    #[test]
    fn test_sample_major_rejected() {
        let err = BedHeader::from_buffer(&[0x6C, 0x1B, MODE_SAMPLE_MAJOR]).unwrap_err();
        assert!(matches!(
            err,
            Error::BedError(BedError::UnsupportedMode(0x00))
        ));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = BedHeader::from_buffer(&[0x6C, 0x1B, 0x02]).unwrap_err();
        assert!(matches!(
            err,
            Error::BedError(BedError::UnsupportedMode(0x02))
        ));
    }

    #[test]
    fn test_truncated_header() {
        let err = BedHeader::from_buffer(&[0x6C, 0x1B]).unwrap_err();
        assert!(matches!(err, Error::BedError(BedError::TruncatedHeader(2))));
    }
}
