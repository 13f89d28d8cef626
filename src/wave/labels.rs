//! Per-axis dimension label metadata.
//!
//! Labels are stored sparsely: each axis owns a map from index to label, and
//! any index without an entry reads back as the empty string. Bounds are not
//! checked here; [`crate::wave::Wave`] validates positions against its shape
//! before inserting.

use std::collections::BTreeMap;

use compact_str::CompactString;
use smallvec::SmallVec;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DimensionLabels {
    axes: SmallVec<[BTreeMap<usize, CompactString>; 4]>,
}

impl DimensionLabels {
    /// Create an empty label table for `ndim` axes.
    pub fn new(ndim: usize) -> Self {
        Self {
            axes: (0..ndim).map(|_| BTreeMap::new()).collect(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Return the label at `index` along `axis`, or `""` when none is set.
    pub fn get(&self, axis: usize, index: usize) -> &str {
        self.axes
            .get(axis)
            .and_then(|labels| labels.get(&index))
            .map_or("", CompactString::as_str)
    }

    /// Iterate over the labelled positions of `axis` in ascending index order.
    pub fn axis(&self, axis: usize) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.axes
            .get(axis)
            .into_iter()
            .flat_map(|labels| labels.iter().map(|(&i, l)| (i, l.as_str())))
    }

    /// `true` when no axis carries a label.
    pub fn is_empty(&self) -> bool {
        self.axes.iter().all(BTreeMap::is_empty)
    }

    /// Set or clear (on an empty label) the entry at `(axis, index)`.
    pub(crate) fn insert(&mut self, axis: usize, index: usize, label: CompactString) {
        let Some(labels) = self.axes.get_mut(axis) else {
            return;
        };
        if label.is_empty() {
            labels.remove(&index);
        } else {
            labels.insert(index, label);
        }
    }
}
