//! # bed
//!
//! Random access to PLINK .bed genotype files.
//!
//! A .bed file stores an N x P genotype matrix (N samples by P variants) as
//! packed 2-bit codes in variant-major order. The file itself carries no
//! dimensions; callers declare N and P at open time and the reader validates
//! them against the mapped file length.
//!
//! ## Usage
//!
//! ```rust
//! use bedmatrix::bed::BedReader;
//! use bedmatrix::Result;
//!
//! fn main() -> Result<()> {
//!     let path = std::env::temp_dir().join("bed_mod_doc.bed");
//!     // 3 samples x 2 variants
//!     std::fs::write(&path, [0x6C, 0x1B, 0x01, 0b0011_1000, 0b0010_0001])?;
//!
//!     let reader = BedReader::new(&path, 3, 2)?;
//!
//!     // Random access to any cell, with a caller-supplied missing sentinel
//!     let dosage = reader.get_cartesian(1, 0, -1)?;
//!     assert_eq!(dosage, 1);
//!
//!     // Batch queries take 1-based indices; out-of-range entries are masked
//!     let values = reader.extract_vector(&[Some(1), Some(99)], -1)?;
//!     assert_eq!(values, vec![2, -1]);
//!
//!     std::fs::remove_file(&path)?;
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! A .bed file consists of two sections:
//!
//! 1. Fixed-size header (3 bytes)
//! 2. Genotype data section
//!
//! ### Header format (3 bytes total)
//!
//! | Offset | Size (bytes) | Name  | Description                             | Type  |
//! | ------ | ------------ | ----- | --------------------------------------- | ----- |
//! | 0      | 1            | magic | First magic byte (0x6C)                 | uint8 |
//! | 1      | 1            | magic | Second magic byte (0x1B)                | uint8 |
//! | 2      | 1            | mode  | 0x01 variant-major, 0x00 sample-major   | uint8 |
//!
//! The legacy sample-major mode is rejected at open time.
//!
//! ### Data section
//!
//! One block of ceil(N / 4) bytes per variant, P blocks in total. Within a
//! block each byte packs four samples' 2-bit genotype codes, sample index
//! increasing from the least-significant bit pair upward. The final byte of
//! a block is zero-padded when N is not a multiple of four.
//!
//! Total file size = 3 + ceil(N / 4) * P bytes.
//!
//! ### Genotype coding
//!
//! Raw codes are recoded to allelic dosages on every query; see
//! [`recode_genotype`] for the fixed table, including the missing code at
//! raw `0b01`.

mod header;
mod read;
mod reader;
mod utils;

pub use header::{BedHeader, MAGIC, MODE_SAMPLE_MAJOR, MODE_VARIANT_MAJOR, SIZE_HEADER};
pub use read::GenotypeSource;
pub use reader::{recode_genotype, BedReader, GenotypeMatrix};
pub use utils::{bytes_per_variant, expected_file_size, GENOTYPES_PER_BYTE};
