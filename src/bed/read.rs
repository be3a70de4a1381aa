use auto_impl::auto_impl;

use super::reader::GenotypeMatrix;
use crate::error::Result;

/// Core trait for genotype matrix sources
///
/// This is the seam consumed by host-integration layers: callers can hold a
/// source behind `&dyn GenotypeSource` or `Box<dyn GenotypeSource>` without
/// static knowledge of the concrete reader. Lifecycle management stays on the
/// concrete type; dynamic callers release resources by dropping the box.
///
/// Batch queries take 1-based indices, with `None` standing in for a missing
/// index propagated from the caller. The `na_value` argument is the sentinel
/// emitted for missing genotype calls and masked entries.
#[auto_impl(&, Box)]
pub trait GenotypeSource {
    /// Returns the number of samples (rows)
    fn num_samples(&self) -> usize;

    /// Returns the number of variants (columns)
    fn num_variants(&self) -> usize;

    /// Returns the matrix dimensions as `(num_samples, num_variants)`
    fn dimensions(&self) -> (usize, usize) {
        (self.num_samples(), self.num_variants())
    }

    /// Extracts recoded genotypes for a sequence of 1-based linear indices
    fn extract_vector(&self, indices: &[Option<u64>], na_value: i32) -> Result<Vec<i32>>;

    /// Extracts a submatrix of recoded genotypes for 1-based row and column indices
    fn extract_matrix(
        &self,
        row_indices: &[Option<u64>],
        col_indices: &[Option<u64>],
        na_value: i32,
    ) -> Result<GenotypeMatrix>;
}
