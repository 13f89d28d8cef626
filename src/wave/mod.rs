//! Labelled n-dimensional waves.
//!
//! A [`Wave`] pairs an owned `ndarray` payload with [`DimensionLabels`]: an
//! optional string label for every index position along every axis. Labels
//! are metadata; they never affect the numeric content.
//!
//! ## Construction
//! - [`Wave::try_from_shape_vec`] validates the element count against the shape.
//! - [`Wave::from_ndarray`] adopts an existing owned `ndarray` of any dimensionality.
//!
//! Labels are attached while the wave is built, either one at a time with
//! [`Wave::set_dimension_label`] or per axis with [`Wave::with_axis_labels`].
//! Both check the axis and index against the shape.
//!
//! ## Text waves
//! [`TextWave`] is a wave of [`CompactString`]. Label extraction produces a
//! one-dimensional text wave with no labels of its own.
//!
//! ```rust
//! use wave_labels::wave::Wave;
//!
//! let wave = Wave::try_from_shape_vec(&[3, 2], vec![0.0f64; 6])
//!     .unwrap()
//!     .with_axis_labels(0, ["alpha", "", "gamma"])
//!     .unwrap();
//! assert_eq!(wave.dimension_label(0, 0).unwrap(), "alpha");
//! assert_eq!(wave.dimension_label(0, 1).unwrap(), "");
//! ```

use compact_str::CompactString;

use crate::{
    dtype::DataType,
    wave::{element::WaveElement, error::WaveError, labels::DimensionLabels, util::num_elements},
};

pub mod element;
pub mod error;
pub mod labels;
pub mod util;

/// A one-dimensional wave of strings.
pub type TextWave = Wave<CompactString>;

#[derive(Debug, Clone, PartialEq)]
pub struct Wave<T> {
    data: ndarray::ArrayD<T>,
    labels: DimensionLabels,
}

impl<T> Wave<T> {
    /// Build a wave from row-major elements.
    ///
    /// # Errors
    /// Returns [`WaveError`] if:
    /// - the element count implied by `shape` overflows
    /// - `data.len()` does not match that element count
    pub fn try_from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self, WaveError> {
        let expected = num_elements(shape)?;
        let actual = data.len();
        if actual != expected {
            return Err(WaveError::WrongElementCount { expected, actual });
        }

        let data = ndarray::ArrayD::from_shape_vec(ndarray::IxDyn(shape), data)
            .map_err(|_| WaveError::WrongElementCount { expected, actual })?;
        Ok(Self::from_ndarray(data))
    }

    /// Adopt an owned `ndarray`; every position starts unlabelled.
    pub fn from_ndarray<D: ndarray::Dimension>(array: ndarray::Array<T, D>) -> Self {
        let data = array.into_dyn();
        let labels = DimensionLabels::new(data.ndim());
        Self { data, labels }
    }

    /// Label consecutive positions of `axis`, starting at index 0.
    ///
    /// Empty labels leave the position unset.
    ///
    /// # Errors
    /// Returns [`WaveError::AxisOutOfBounds`] for a missing axis and
    /// [`WaveError::TooManyLabels`] when `labels` is longer than the axis.
    pub fn with_axis_labels<I, S>(mut self, axis: usize, labels: I) -> Result<Self, WaveError>
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        let len = self.axis_len(axis)?;
        for (index, label) in labels.into_iter().enumerate() {
            if index >= len {
                return Err(WaveError::TooManyLabels { axis, len });
            }
            self.labels.insert(axis, index, label.into());
        }
        Ok(self)
    }

    /// Set the label at `(axis, index)`. An empty label clears it.
    pub fn set_dimension_label(
        &mut self,
        axis: usize,
        index: usize,
        label: impl Into<CompactString>,
    ) -> Result<(), WaveError> {
        self.check_position(axis, index)?;
        self.labels.insert(axis, index, label.into());
        Ok(())
    }

    /// Return the label at `(axis, index)`, `""` when unset.
    pub fn dimension_label(&self, axis: usize, index: usize) -> Result<&str, WaveError> {
        self.check_position(axis, index)?;
        Ok(self.labels.get(axis, index))
    }

    /// Size of the wave along `axis`.
    pub fn axis_len(&self, axis: usize) -> Result<usize, WaveError> {
        self.data
            .shape()
            .get(axis)
            .copied()
            .ok_or(WaveError::AxisOutOfBounds {
                axis,
                ndim: self.data.ndim(),
            })
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn labels(&self) -> &DimensionLabels {
        &self.labels
    }

    pub fn as_ndarray(&self) -> ndarray::ArrayViewD<'_, T> {
        self.data.view()
    }

    /// Iterate over the elements in logical (row-major) order.
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, ndarray::IxDyn> {
        self.data.iter()
    }

    /// Drop the labels and return the payload.
    pub fn into_ndarray(self) -> ndarray::ArrayD<T> {
        self.data
    }

    fn check_position(&self, axis: usize, index: usize) -> Result<(), WaveError> {
        let len = self.axis_len(axis)?;
        if index >= len {
            return Err(WaveError::IndexOutOfBounds { axis, index, len });
        }
        Ok(())
    }
}

impl<T: WaveElement> Wave<T> {
    /// Return the logical datatype of this wave.
    pub const fn data_type(&self) -> DataType {
        T::TYPE
    }
}
