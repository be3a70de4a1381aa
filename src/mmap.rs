//! File mapping module
//!
//! This module provides read-only, zero-copy access to a file's bytes through
//! a memory mapping. A [`MappedFile`] owns its mapping for the lifetime of the
//! reader that created it and releases it either explicitly through
//! [`MappedFile::unmap`] or implicitly when dropped.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{MapError, Result};

/// A read-only memory mapping of an entire file
///
/// While mapped, the exposed byte span covers the file's full on-disk size.
/// Once released the handle stays around in an unmapped state: the span is
/// gone, the length reads as zero, and a second release attempt fails with
/// [`MapError::AlreadyUnmapped`] instead of touching freed memory.
///
/// # Examples
///
/// ```
/// use bedmatrix::MappedFile;
/// use bedmatrix::Result;
///
/// fn main() -> Result<()> {
///     let path = std::env::temp_dir().join("mapped_file_doc.bin");
///     std::fs::write(&path, [1, 2, 3])?;
///
///     let mut mapped = MappedFile::map(&path)?;
///     assert_eq!(mapped.len(), 3);
///     mapped.unmap()?;
///
///     std::fs::remove_file(&path)?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MappedFile {
    /// The mapping; `None` once released
    mmap: Option<Mmap>,
}

impl MappedFile {
    /// Opens a file and establishes a read-only mapping of its full contents
    ///
    /// # Arguments
    ///
    /// * `path` - Path to an existing, readable, regular file
    ///
    /// # Errors
    ///
    /// * [`MapError::NotFound`] - if the path cannot be opened
    /// * [`MapError::NotRegularFile`] - if the path resolves to a directory,
    ///   device, or other non-regular file
    /// * [`MapError::MapFailed`] - if the underlying mapping call fails
    pub fn map<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                MapError::NotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                MapError::MapFailed {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        // Verify input file is a regular file before attempting to map
        let metadata = file.metadata().map_err(|source| MapError::MapFailed {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(MapError::NotRegularFile(path.to_path_buf()).into());
        }

        // Safety: the file is open read-only and won't be modified while mapped
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| MapError::MapFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { mmap: Some(mmap) })
    }

    /// Releases the mapping
    ///
    /// The mapping is released at most once; the handle also releases itself
    /// when dropped, so calling this is only required when the caller wants
    /// the failure surfaced.
    ///
    /// # Errors
    ///
    /// * [`MapError::AlreadyUnmapped`] - if the mapping was already released
    pub fn unmap(&mut self) -> Result<()> {
        if self.mmap.take().is_none() {
            return Err(MapError::AlreadyUnmapped.into());
        }
        Ok(())
    }

    /// Returns the mapped byte span, or `None` once the mapping is released
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.mmap.as_deref()
    }

    /// Returns true while the mapping is live
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        self.mmap.is_some()
    }

    /// Returns the mapped length in bytes (zero once released)
    #[must_use]
    pub fn len(&self) -> usize {
        self.mmap.as_ref().map_or(0, |mmap| mmap.len())
    }

    /// Returns true if no bytes are addressable through this handle
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
