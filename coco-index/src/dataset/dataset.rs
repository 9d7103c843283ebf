use super::*;
use crate::common::*;

/// The generic dataset trait.
pub trait GenericDataset
where
    Self: Debug + Send + Sync,
{
    /// The number of color channels of the dataset.
    fn input_channels(&self) -> usize;

    /// The list of class names of the dataset, ordered by class index.
    fn classes(&self) -> &[String];
}

/// The dataset that can be random accessed.
pub trait RandomAccessDataset
where
    Self: GenericDataset,
{
    /// Get number of records in the dataset.
    fn num_records(&self) -> Result<usize>;

    /// Get the nth record in the dataset.
    fn nth(&self, index: usize) -> Result<DataRecord>;
}
