//! Memory-mapped .bed reader module
//!
//! This module provides random access to the genotype matrix stored in a
//! .bed file. The reader validates the file once at construction (header,
//! storage mode, and declared dimensions against the mapped length) and then
//! serves point, vector, and submatrix queries directly from the mapped
//! bytes without any intermediate copy.

use std::path::Path;

use crate::{
    error::{BedError, Result},
    mmap::MappedFile,
};

use super::{
    header::{BedHeader, SIZE_HEADER},
    read::GenotypeSource,
    utils::{self, GENOTYPES_PER_BYTE},
};

/// Recodes a raw 2-bit genotype code into an allelic dosage
///
/// The result counts copies of the first allele (A1), in the same coding as
/// PLINK's additive recoding: 0, 1, or 2, with `na_value` standing in for a
/// missing call. The raw on-disk coding is scrambled relative to the dosage
/// count and the missing code sits at `0b01`, not `0b10`:
///
/// | raw  | meaning               | dosage     |
/// |------|-----------------------|------------|
/// | `00` | homozygous A1         | 2          |
/// | `10` | heterozygous          | 1          |
/// | `11` | homozygous A2         | 0          |
/// | `01` | missing               | `na_value` |
///
/// Only the low two bits of `genotype` are inspected.
#[must_use]
pub fn recode_genotype(genotype: u8, na_value: i32) -> i32 {
    match genotype & 0b11 {
        0b00 => 2,
        0b10 => 1,
        0b11 => 0,
        _ => na_value,
    }
}

/// A dense grid of recoded genotypes returned by submatrix queries
///
/// Values are stored row-major; the row and column ordering matches the
/// index sequences that produced the grid, including any repetition or
/// permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeMatrix {
    /// Row-major cell values
    values: Vec<i32>,
    /// Number of rows in the grid
    nrows: usize,
    /// Number of columns in the grid
    ncols: usize,
}

impl GenotypeMatrix {
    /// Returns the number of rows in the grid
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns in the grid
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the value at `row`/`col`, or `None` outside the grid shape
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        Some(self.values[row * self.ncols + col])
    }

    /// Returns the backing row-major value slice
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Consumes the grid and returns the row-major values
    #[must_use]
    pub fn into_values(self) -> Vec<i32> {
        self.values
    }
}

/// A memory-mapped reader for .bed genotype files
///
/// The reader maps the file once, validates it, and is immutable for its
/// entire query lifetime: dimensions never change and the mapped bytes are
/// never written through. Shared references to one reader can therefore be
/// used from multiple threads without locking; the only mutating operation
/// is [`BedReader::close`], which takes `&mut self` and so cannot race an
/// in-flight query.
///
/// Dimensions are caller-declared rather than read from the file (the .bed
/// header stores no counts); construction fails unless they are consistent
/// with the mapped length.
///
/// # Examples
///
/// ```
/// use bedmatrix::bed::BedReader;
/// use bedmatrix::Result;
///
/// fn main() -> Result<()> {
///     let path = std::env::temp_dir().join("bed_reader_doc.bed");
///     // 3 samples x 1 variant: genotypes 2, 1, 0 from the low bit pair up
///     std::fs::write(&path, [0x6C, 0x1B, 0x01, 0b0011_1000])?;
///
///     let reader = BedReader::new(&path, 3, 1)?;
///     assert_eq!(reader.dimensions(), (3, 1));
///     assert_eq!(reader.get_cartesian(0, 0, -1)?, 2);
///     assert_eq!(reader.get_cartesian(2, 0, -1)?, 0);
///
///     std::fs::remove_file(&path)?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct BedReader {
    /// Memory mapped file contents, owned for the reader's lifetime
    mapped: MappedFile,

    /// Validated .bed header
    header: BedHeader,

    /// Number of samples (rows), as declared by the caller
    num_samples: usize,

    /// Number of variants (columns), as declared by the caller
    num_variants: usize,

    /// Number of bytes occupied by one variant block: ceil(num_samples / 4)
    bytes_per_variant: usize,
}

impl BedReader {
    /// Opens a .bed file and validates it against the declared dimensions
    ///
    /// Validation happens in a fixed order: the file is mapped, the magic
    /// bytes and storage mode are checked, and the declared dimensions are
    /// checked against the mapped length. Any failure releases the mapping
    /// before returning; a partially validated reader is never handed out.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the .bed file
    /// * `num_samples` - Declared number of samples (rows), positive
    /// * `num_variants` - Declared number of variants (columns), positive
    ///
    /// # Errors
    ///
    /// * [`crate::MapError`] variants - if the file cannot be mapped
    /// * [`BedError::TruncatedHeader`] - if the file is shorter than the header
    /// * [`BedError::InvalidFormat`] - if the magic bytes do not match
    /// * [`BedError::UnsupportedMode`] - if the file is sample-major
    /// * [`BedError::DimensionMismatch`] - if
    ///   `num_variants * ceil(num_samples / 4) != file length - 3`, or either
    ///   dimension is zero
    pub fn new<P: AsRef<Path>>(path: P, num_samples: usize, num_variants: usize) -> Result<Self> {
        let mapped = MappedFile::map(path)?;
        let length = mapped.len();
        let Some(bytes) = mapped.as_bytes() else {
            return Err(BedError::Closed.into());
        };
        let header = BedHeader::from_buffer(bytes)?;

        if num_samples == 0 || num_variants == 0 {
            return Err(BedError::DimensionMismatch {
                num_samples,
                num_variants,
                length,
            }
            .into());
        }

        // File is a sequence of P blocks of ceil(N / 4) bytes each, after
        // the 3-byte header
        let bytes_per_variant = utils::bytes_per_variant(num_samples);
        let expected = num_variants as u64 * bytes_per_variant as u64;
        let actual = (length - SIZE_HEADER) as u64;
        if expected != actual {
            return Err(BedError::DimensionMismatch {
                num_samples,
                num_variants,
                length,
            }
            .into());
        }

        Ok(Self {
            mapped,
            header,
            num_samples,
            num_variants,
            bytes_per_variant,
        })
    }

    /// Returns the validated header
    #[must_use]
    pub fn header(&self) -> BedHeader {
        self.header
    }

    /// Returns the number of samples (rows)
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Returns the number of variants (columns)
    #[must_use]
    pub fn num_variants(&self) -> usize {
        self.num_variants
    }

    /// Returns the matrix dimensions as `(num_samples, num_variants)`
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_samples, self.num_variants)
    }

    /// Returns the number of bytes occupied by one variant block
    #[must_use]
    pub fn bytes_per_variant(&self) -> usize {
        self.bytes_per_variant
    }

    /// Returns the total number of genotypes in the matrix
    #[must_use]
    pub fn num_genotypes(&self) -> u64 {
        self.num_samples as u64 * self.num_variants as u64
    }

    /// Releases the mapping
    ///
    /// Any query issued afterwards fails with [`BedError::Closed`]. The
    /// reader also releases its mapping when dropped, so closing explicitly
    /// is only required when the caller wants the failure surfaced.
    ///
    /// # Errors
    ///
    /// * [`crate::MapError::AlreadyUnmapped`] - if the reader was already closed
    pub fn close(&mut self) -> Result<()> {
        self.mapped.unmap()
    }

    /// Returns the mapped bytes, or fails once the reader is closed
    fn data(&self) -> Result<&[u8]> {
        match self.mapped.as_bytes() {
            Some(bytes) => Ok(bytes),
            None => Err(BedError::Closed.into()),
        }
    }

    /// Extracts the raw 2-bit genotype code at `row`/`col`
    ///
    /// Caller must have checked `row < num_samples` and `col < num_variants`;
    /// the open-time dimension invariant then puts the addressed byte
    /// strictly inside the mapped region.
    fn genotype_cartesian(&self, bed: &[u8], row: usize, col: usize) -> u8 {
        // Each byte packs 4 genotypes; locate the byte and the bit pair
        let which_byte = row / GENOTYPES_PER_BYTE;
        let which_genotype = row % GENOTYPES_PER_BYTE;
        let genotypes = bed[SIZE_HEADER + col * self.bytes_per_variant + which_byte];
        // Shift the bit pair of interest down, then mask with 11
        (genotypes >> (2 * which_genotype)) & 0b11
    }

    /// Returns the recoded genotype of sample `row` at variant `col`
    ///
    /// Coordinates are 0-based. Bounds are checked here, at the public
    /// boundary; layers that already validate or mask their indices reach
    /// the unchecked decode path through the batch queries instead.
    ///
    /// # Errors
    ///
    /// * [`BedError::Closed`] - if the reader has been closed
    /// * [`BedError::OutOfBounds`] - if either coordinate is out of range
    pub fn get_cartesian(&self, row: usize, col: usize, na_value: i32) -> Result<i32> {
        let bed = self.data()?;
        if row >= self.num_samples {
            return Err(BedError::OutOfBounds {
                index: row as u64,
                extent: self.num_samples as u64,
            }
            .into());
        }
        if col >= self.num_variants {
            return Err(BedError::OutOfBounds {
                index: col as u64,
                extent: self.num_variants as u64,
            }
            .into());
        }
        Ok(recode_genotype(
            self.genotype_cartesian(bed, row, col),
            na_value,
        ))
    }

    /// Returns the recoded genotype at a 0-based column-major linear index
    ///
    /// The index flattens the matrix column by column: `k = row + col * N`.
    ///
    /// # Errors
    ///
    /// * [`BedError::Closed`] - if the reader has been closed
    /// * [`BedError::OutOfBounds`] - if `k >= num_samples * num_variants`
    pub fn get_linear(&self, k: u64, na_value: i32) -> Result<i32> {
        let num_genotypes = self.num_genotypes();
        if k >= num_genotypes {
            return Err(BedError::OutOfBounds {
                index: k,
                extent: num_genotypes,
            }
            .into());
        }
        let row = (k % self.num_samples as u64) as usize;
        let col = (k / self.num_samples as u64) as usize;
        self.get_cartesian(row, col, na_value)
    }

    /// Extracts recoded genotypes for a sequence of 1-based linear indices
    ///
    /// Indices flatten the matrix column by column, starting at 1. The output
    /// has the same length and order as the input. Entries that are `None`
    /// (a missing index propagated from the caller) or outside
    /// `[1, num_samples * num_variants]` are masked with `na_value`; masking
    /// is the domain's convention for missing calls, not an error.
    ///
    /// # Errors
    ///
    /// * [`BedError::Closed`] - if the reader has been closed
    pub fn extract_vector(&self, indices: &[Option<u64>], na_value: i32) -> Result<Vec<i32>> {
        let bed = self.data()?;
        let num_genotypes = self.num_genotypes();
        let num_samples = self.num_samples as u64;
        let mut out = Vec::with_capacity(indices.len());
        for index in indices {
            let value = match index {
                Some(k) if (1..=num_genotypes).contains(k) => {
                    let k = k - 1;
                    let row = (k % num_samples) as usize;
                    let col = (k / num_samples) as usize;
                    recode_genotype(self.genotype_cartesian(bed, row, col), na_value)
                }
                _ => na_value,
            };
            out.push(value);
        }
        Ok(out)
    }

    /// Extracts a submatrix of recoded genotypes
    ///
    /// Row and column indices are 1-based and may repeat, permute, or subset
    /// the matrix; the output grid is `row_indices.len()` by
    /// `col_indices.len()` with cell ordering exactly following the input
    /// sequences. `None` entries (missing indices propagated from the
    /// caller) are masked with `na_value`.
    ///
    /// Unlike [`BedReader::extract_vector`], out-of-range indices reject the
    /// whole call: any present index outside `[1, extent]` for its axis
    /// fails with [`BedError::OutOfBounds`] before anything is decoded.
    ///
    /// # Errors
    ///
    /// * [`BedError::Closed`] - if the reader has been closed
    /// * [`BedError::OutOfBounds`] - if any present index is out of range
    ///   for its axis
    pub fn extract_matrix(
        &self,
        row_indices: &[Option<u64>],
        col_indices: &[Option<u64>],
        na_value: i32,
    ) -> Result<GenotypeMatrix> {
        let bed = self.data()?;
        check_axis(row_indices, self.num_samples as u64)?;
        check_axis(col_indices, self.num_variants as u64)?;

        let mut values = Vec::with_capacity(row_indices.len() * col_indices.len());
        for row in row_indices {
            for col in col_indices {
                let value = match (row, col) {
                    (Some(i), Some(j)) => {
                        let row = (i - 1) as usize;
                        let col = (j - 1) as usize;
                        recode_genotype(self.genotype_cartesian(bed, row, col), na_value)
                    }
                    _ => na_value,
                };
                values.push(value);
            }
        }
        Ok(GenotypeMatrix {
            values,
            nrows: row_indices.len(),
            ncols: col_indices.len(),
        })
    }
}

impl GenotypeSource for BedReader {
    fn num_samples(&self) -> usize {
        self.num_samples
    }

    fn num_variants(&self) -> usize {
        self.num_variants
    }

    fn extract_vector(&self, indices: &[Option<u64>], na_value: i32) -> Result<Vec<i32>> {
        BedReader::extract_vector(self, indices, na_value)
    }

    fn extract_matrix(
        &self,
        row_indices: &[Option<u64>],
        col_indices: &[Option<u64>],
        na_value: i32,
    ) -> Result<GenotypeMatrix> {
        BedReader::extract_matrix(self, row_indices, col_indices, na_value)
    }
}

/// Rejects any present 1-based index outside `[1, extent]`
fn check_axis(indices: &[Option<u64>], extent: u64) -> Result<()> {
    for index in indices.iter().flatten() {
        if !(1..=extent).contains(index) {
            return Err(BedError::OutOfBounds {
                index: *index,
                extent,
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::bed::expected_file_size;
    use crate::error::Error;
    use anyhow::Result;
    use rand::{rngs::SmallRng, Rng, SeedableRng};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const NA: i32 = i32::MIN;

    /// Writes a variant-major .bed file with the given data section
    fn write_bed(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut bytes = vec![0x6C, 0x1B, 0x01];
        bytes.extend_from_slice(data);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    /// 3 samples x 2 variants.
    ///
    /// Variant 1 packs genotypes (2, 1, 0) from the low bit pair up;
    /// variant 2 packs (missing, 2, 1).
    fn small_fixture(dir: &TempDir) -> BedReader {
        let path = write_bed(dir, "small.bed", &[0b0011_1000, 0b0010_0001]);
        BedReader::new(path, 3, 2).unwrap()
    }

    #[test]
    fn test_open_and_dimensions() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        assert_eq!(reader.dimensions(), (3, 2));
        assert_eq!(reader.num_samples(), 3);
        assert_eq!(reader.num_variants(), 2);
        assert_eq!(reader.bytes_per_variant(), 1);
        assert_eq!(reader.num_genotypes(), 6);
        Ok(())
    }

    #[test]
    fn test_get_cartesian() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        assert_eq!(reader.get_cartesian(0, 0, NA)?, 2);
        assert_eq!(reader.get_cartesian(1, 0, NA)?, 1);
        assert_eq!(reader.get_cartesian(2, 0, NA)?, 0);
        assert_eq!(reader.get_cartesian(0, 1, NA)?, NA);
        assert_eq!(reader.get_cartesian(1, 1, NA)?, 2);
        assert_eq!(reader.get_cartesian(2, 1, NA)?, 1);
        Ok(())
    }

    #[test]
    fn test_get_cartesian_out_of_bounds() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        let err = reader.get_cartesian(3, 0, NA).unwrap_err();
        assert!(matches!(
            err,
            Error::BedError(BedError::OutOfBounds {
                index: 3,
                extent: 3
            })
        ));
        let err = reader.get_cartesian(0, 2, NA).unwrap_err();
        assert!(matches!(
            err,
            Error::BedError(BedError::OutOfBounds {
                index: 2,
                extent: 2
            })
        ));
        Ok(())
    }

    #[test]
    fn test_linear_agrees_with_cartesian() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        for col in 0..2usize {
            for row in 0..3usize {
                let k = row as u64 + col as u64 * 3;
                assert_eq!(
                    reader.get_linear(k, NA)?,
                    reader.get_cartesian(row, col, NA)?
                );
            }
        }
        let err = reader.get_linear(6, NA).unwrap_err();
        assert!(matches!(
            err,
            Error::BedError(BedError::OutOfBounds {
                index: 6,
                extent: 6
            })
        ));
        Ok(())
    }

    #[test]
    fn test_recoding_table() -> Result<()> {
        // 1 sample x 1 variant: the data byte carries the genotype in its
        // low bit pair
        let cases = [(0b00u8, 2), (0b11, 0), (0b10, 1), (0b01, NA)];
        for (raw, expected) in cases {
            let dir = tempfile::tempdir()?;
            let path = write_bed(&dir, "single.bed", &[raw]);
            let reader = BedReader::new(path, 1, 1)?;
            assert_eq!(reader.get_cartesian(0, 0, NA)?, expected);
        }
        Ok(())
    }

    #[test]
    fn test_recode_genotype_total() {
        assert_eq!(recode_genotype(0b00, NA), 2);
        assert_eq!(recode_genotype(0b10, NA), 1);
        assert_eq!(recode_genotype(0b11, NA), 0);
        assert_eq!(recode_genotype(0b01, NA), NA);
        // only the low bit pair is inspected
        assert_eq!(recode_genotype(0b1100, NA), 2);
    }

    #[test]
    fn test_extract_vector_masks_out_of_range() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        // 0 and N*P + 1 are outside the 1-based range; N*P is the maximum
        // valid index
        let values = reader.extract_vector(
            &[Some(0), Some(1), Some(6), Some(7)],
            NA,
        )?;
        assert_eq!(values, vec![NA, 2, 1, NA]);
        Ok(())
    }

    #[test]
    fn test_extract_vector_propagates_missing_markers() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        let values = reader.extract_vector(&[None, Some(2), None], NA)?;
        assert_eq!(values, vec![NA, 1, NA]);
        Ok(())
    }

    #[test]
    fn test_extract_vector_preserves_order_and_repetition() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        let values = reader.extract_vector(&[Some(6), Some(1), Some(1)], NA)?;
        assert_eq!(values, vec![1, 2, 2]);
        Ok(())
    }

    #[test]
    fn test_extract_matrix_follows_input_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        // Rows in descending order: the output must follow the input, not
        // ascending order
        let matrix = reader.extract_matrix(&[Some(2), Some(1)], &[Some(1)], NA)?;
        assert_eq!((matrix.nrows(), matrix.ncols()), (2, 1));
        assert_eq!(matrix.get(0, 0), Some(1));
        assert_eq!(matrix.get(1, 0), Some(2));
        assert_eq!(matrix.values(), &[1, 2]);
        Ok(())
    }

    #[test]
    fn test_extract_matrix_repetition_and_masking() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        let matrix = reader.extract_matrix(
            &[Some(1), Some(1), None],
            &[Some(2), Some(1)],
            NA,
        )?;
        assert_eq!((matrix.nrows(), matrix.ncols()), (3, 2));
        assert_eq!(matrix.values(), &[NA, 2, NA, 2, NA, NA]);
        assert_eq!(matrix.get(3, 0), None);
        Ok(())
    }

    #[test]
    fn test_extract_matrix_rejects_out_of_range() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let reader = small_fixture(&dir);
        let err = reader
            .extract_matrix(&[Some(4)], &[Some(1)], NA)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::BedError(BedError::OutOfBounds {
                index: 4,
                extent: 3
            })
        ));
        let err = reader
            .extract_matrix(&[Some(1)], &[Some(3)], NA)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::BedError(BedError::OutOfBounds {
                index: 3,
                extent: 2
            })
        ));
        // 1-based indexing: zero is out of range, not a missing marker
        let err = reader
            .extract_matrix(&[Some(0)], &[Some(1)], NA)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::BedError(BedError::OutOfBounds {
                index: 0,
                extent: 3
            })
        ));
        Ok(())
    }

    #[test]
    fn test_close_then_query() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut reader = small_fixture(&dir);
        reader.close()?;

        let err = reader.get_cartesian(0, 0, NA).unwrap_err();
        assert!(matches!(err, Error::BedError(BedError::Closed)));
        let err = reader.extract_vector(&[Some(1)], NA).unwrap_err();
        assert!(matches!(err, Error::BedError(BedError::Closed)));
        let err = reader
            .extract_matrix(&[Some(1)], &[Some(1)], NA)
            .unwrap_err();
        assert!(matches!(err, Error::BedError(BedError::Closed)));

        let err = reader.close().unwrap_err();
        assert!(matches!(
            err,
            Error::MapError(crate::error::MapError::AlreadyUnmapped)
        ));
        Ok(())
    }

    #[test]
    fn test_dimension_validation() -> Result<()> {
        let dir = tempfile::tempdir()?;
        // 5-byte file: header plus 2 data bytes
        let path = write_bed(&dir, "dims.bed", &[0x00, 0x00]);

        for num_samples in 1..=6 {
            for num_variants in 1..=4 {
                let result = BedReader::new(&path, num_samples, num_variants);
                if expected_file_size(num_samples, num_variants) == 5 {
                    assert!(result.is_ok());
                } else {
                    assert!(matches!(
                        result.unwrap_err(),
                        Error::BedError(BedError::DimensionMismatch { .. })
                    ));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_zero_dimensions_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_bed(&dir, "zero.bed", &[]);
        for (num_samples, num_variants) in [(0, 0), (0, 2), (3, 0)] {
            let err = BedReader::new(&path, num_samples, num_variants).unwrap_err();
            assert!(matches!(
                err,
                Error::BedError(BedError::DimensionMismatch { .. })
            ));
        }
        Ok(())
    }

    #[test]
    fn test_sample_major_mode_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample_major.bed");
        std::fs::write(&path, [0x6C, 0x1B, 0x00, 0x00, 0x00])?;
        // rejected regardless of whether the dimensions would fit
        for (num_samples, num_variants) in [(3, 2), (1, 1), (8, 1)] {
            let err = BedReader::new(&path, num_samples, num_variants).unwrap_err();
            assert!(matches!(
                err,
                Error::BedError(BedError::UnsupportedMode(0x00))
            ));
        }
        Ok(())
    }

    #[test]
    fn test_random_matrix_agreement() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut rng = SmallRng::seed_from_u64(0xBED);
        let (num_samples, num_variants) = (10usize, 7usize);
        let data: Vec<u8> = (0..num_variants * 3).map(|_| rng.random()).collect();
        let path = write_bed(&dir, "random.bed", &data);
        let reader = BedReader::new(path, num_samples, num_variants)?;

        let all_rows: Vec<Option<u64>> = (1..=num_samples as u64).map(Some).collect();
        let all_cols: Vec<Option<u64>> = (1..=num_variants as u64).map(Some).collect();
        let matrix = reader.extract_matrix(&all_rows, &all_cols, NA)?;

        for col in 0..num_variants {
            for row in 0..num_samples {
                let expected = reader.get_cartesian(row, col, NA)?;
                let k = row as u64 + col as u64 * num_samples as u64;
                assert_eq!(reader.get_linear(k, NA)?, expected);
                assert_eq!(
                    reader.extract_vector(&[Some(k + 1)], NA)?,
                    vec![expected]
                );
                assert_eq!(matrix.get(row, col), Some(expected));
            }
        }
        Ok(())
    }
}
