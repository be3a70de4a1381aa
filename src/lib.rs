//! # bedmatrix
//!
//! Memory-mapped random access to PLINK .bed genotype matrices.
//!
//! The crate maps a .bed file read-only, validates its header and the
//! caller-declared dimensions once, and then decodes arbitrary cells,
//! vectors, or submatrices of recoded genotype dosages straight from the
//! mapped bytes. See the [`bed`] module for the format description.
//!
//! ## Usage
//!
//! ```rust
//! use bedmatrix::{BedReader, GenotypeSource, Result};
//!
//! fn main() -> Result<()> {
//!     let path = std::env::temp_dir().join("bedmatrix_crate_doc.bed");
//!     // 3 samples x 2 variants
//!     std::fs::write(&path, [0x6C, 0x1B, 0x01, 0b0011_1000, 0b0010_0001])?;
//!
//!     let mut reader = BedReader::new(&path, 3, 2)?;
//!
//!     // Submatrix query: 1-based indices, output order follows input order
//!     let matrix = reader.extract_matrix(&[Some(3), Some(1)], &[Some(1), Some(2)], -1)?;
//!     assert_eq!(matrix.values(), &[0, 1, 2, -1]);
//!
//!     // The reader can be consumed through the trait boundary as well
//!     let source: &dyn GenotypeSource = &reader;
//!     assert_eq!(source.dimensions(), (3, 2));
//!
//!     reader.close()?;
//!     std::fs::remove_file(&path)?;
//!     Ok(())
//! }
//! ```

mod error;
mod mmap;

pub mod bed;

pub use bed::{BedHeader, BedReader, GenotypeMatrix, GenotypeSource};
pub use error::{BedError, Error, MapError, Result};
pub use mmap::MappedFile;
