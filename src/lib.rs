//! # wave-labels
//!
//! Labelled n-dimensional waves and leading-axis dimension label extraction.
//!
//! A [`Wave`] is an `ndarray` payload with an optional string label on every
//! index of every axis. [`extract_labels`] copies the axis-0 labels into a new
//! one-dimensional [`TextWave`], writing `"nan"` wherever a label is empty.
//!
//! ```rust
//! use wave_labels::{extract_labels, Wave};
//!
//! let wave = Wave::try_from_shape_vec(&[4], vec![0i32; 4]).unwrap();
//! let labels = extract_labels(&wave).unwrap();
//! assert!(labels.iter().all(|l| l.as_str() == "nan"));
//! ```

pub mod config;
pub mod consts;
pub mod dtype;
pub mod error;
pub mod extract;
pub mod label_list;
pub mod wave;

pub use config::{Diagnostics, ExtractConfig};
pub use dtype::DataType;
pub use error::LabelError;
pub use extract::{
    LabelSource, extract_labels, extract_labels_into, extract_labels_with_config,
    sink::LabelSink,
};
pub use wave::{TextWave, Wave, error::WaveError, labels::DimensionLabels};
