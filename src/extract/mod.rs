//! Leading-axis label extraction.
//!
//! [`extract_labels`] scans axis 0 of a [`LabelSource`] in ascending index
//! order and copies each dimension label into a fresh [`TextWave`]. Empty
//! labels come out as [`NAN_LABEL`]. Each resolved label is also handed to a
//! [`LabelSink`] as it is produced.
//!
//! ```rust
//! use wave_labels::{extract::extract_labels_into, wave::Wave};
//!
//! let wave = Wave::try_from_shape_vec(&[3], vec![1.0f32, 2.0, 3.0])
//!     .unwrap()
//!     .with_axis_labels(0, ["alpha", "", "gamma"])
//!     .unwrap();
//!
//! let mut emitted: Vec<compact_str::CompactString> = Vec::new();
//! let labels = extract_labels_into(&wave, &mut emitted).unwrap();
//! let labels: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
//! assert_eq!(labels, ["alpha", "nan", "gamma"]);
//! assert_eq!(emitted.len(), 3);
//! ```

use compact_str::CompactString;

use crate::{
    config::ExtractConfig,
    consts::{LEADING_AXIS, NAN_LABEL},
    error::LabelError,
    wave::{TextWave, Wave},
};

pub mod sink;

use sink::{LabelSink, TracingSink};

/// Anything that can report its axis sizes and per-index dimension labels.
pub trait LabelSource {
    /// Size along `axis`.
    fn axis_len(&self, axis: usize) -> Result<usize, LabelError>;

    /// Label at `index` along `axis`; `""` when unset.
    fn label_at(&self, axis: usize, index: usize) -> Result<&str, LabelError>;
}

impl<T> LabelSource for Wave<T> {
    fn axis_len(&self, axis: usize) -> Result<usize, LabelError> {
        Wave::axis_len(self, axis)
            .map_err(|e| LabelError::unreadable_wave("wave cannot report its axis size", e))
    }

    fn label_at(&self, axis: usize, index: usize) -> Result<&str, LabelError> {
        self.dimension_label(axis, index)
            .map_err(|e| LabelError::unreadable_wave("wave cannot report a dimension label", e))
    }
}

impl<S: LabelSource + ?Sized> LabelSource for &S {
    fn axis_len(&self, axis: usize) -> Result<usize, LabelError> {
        (**self).axis_len(axis)
    }

    fn label_at(&self, axis: usize, index: usize) -> Result<&str, LabelError> {
        (**self).label_at(axis, index)
    }
}

/// Extract the leading-axis labels, emitting each one as a `tracing` event.
pub fn extract_labels<S: LabelSource + ?Sized>(source: &S) -> Result<TextWave, LabelError> {
    extract_labels_into(source, &mut TracingSink)
}

/// Extract the leading-axis labels, emitting each one through the sink chosen by `config`.
pub fn extract_labels_with_config<S: LabelSource + ?Sized>(
    source: &S,
    config: &ExtractConfig,
) -> Result<TextWave, LabelError> {
    let mut sink = config.diagnostics.sink();
    extract_labels_into(source, &mut sink)
}

/// Extract the leading-axis labels, emitting each one to `sink`.
///
/// # Errors
/// Returns [`LabelError::InvalidInput`] if `source` cannot report its size along
/// axis 0 or any label on it. No text wave is produced in that case; labels
/// already handed to `sink` stay emitted.
pub fn extract_labels_into<S, K>(source: &S, sink: &mut K) -> Result<TextWave, LabelError>
where
    S: LabelSource + ?Sized,
    K: LabelSink + ?Sized,
{
    let len = source.axis_len(LEADING_AXIS)?;
    tracing::debug!(len, "extracting leading-axis dimension labels");

    let mut labels = Vec::with_capacity(len);
    for index in 0..len {
        let label = match source.label_at(LEADING_AXIS, index)? {
            "" => NAN_LABEL,
            label => label,
        };
        sink.emit(index, label);
        labels.push(CompactString::from(label));
    }

    Ok(Wave::from_ndarray(ndarray::Array1::from(labels)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Diagnostics, wave::error::WaveError};

    fn as_strs(wave: &TextWave) -> Vec<&str> {
        wave.iter().map(CompactString::as_str).collect()
    }

    /// A source that fails on one index.
    struct Flaky {
        len: usize,
        broken_at: usize,
    }

    impl LabelSource for Flaky {
        fn axis_len(&self, _axis: usize) -> Result<usize, LabelError> {
            Ok(self.len)
        }

        fn label_at(&self, _axis: usize, index: usize) -> Result<&str, LabelError> {
            if index == self.broken_at {
                Err(LabelError::invalid_input("label storage unreadable"))
            } else {
                Ok("ok")
            }
        }
    }

    #[test]
    fn empty_labels_become_nan() {
        let wave = Wave::try_from_shape_vec(&[3], vec![0i32; 3])
            .unwrap()
            .with_axis_labels(0, ["alpha", "", "gamma"])
            .unwrap();
        let out = extract_labels_into(&wave, &mut sink::SilentSink).unwrap();
        assert_eq!(as_strs(&out), vec!["alpha", "nan", "gamma"]);
        assert_eq!(out.shape(), &[3]);
        assert!(out.labels().is_empty());
    }

    #[test]
    fn sink_receives_resolved_labels_in_order() {
        let wave = Wave::try_from_shape_vec(&[3], vec![0u8; 3])
            .unwrap()
            .with_axis_labels(0, ["", "b"])
            .unwrap();
        let mut seen = Vec::new();
        extract_labels_into(&wave, &mut sink::FnSink(|i: usize, l: &str| {
            seen.push((i, l.to_string()))
        }))
        .unwrap();
        assert_eq!(
            seen,
            vec![
                (0, "nan".to_string()),
                (1, "b".to_string()),
                (2, "nan".to_string())
            ]
        );
    }

    #[test]
    fn only_leading_axis_is_read() {
        let wave = Wave::try_from_shape_vec(&[2, 3], vec![0.0f64; 6])
            .unwrap()
            .with_axis_labels(1, ["x", "y", "z"])
            .unwrap();
        let out = extract_labels_into(&wave, &mut sink::SilentSink).unwrap();
        assert_eq!(as_strs(&out), vec!["nan", "nan"]);
    }

    #[test]
    fn literal_nan_label_is_kept_verbatim() {
        let wave = Wave::try_from_shape_vec(&[1], vec![0i64])
            .unwrap()
            .with_axis_labels(0, ["nan"])
            .unwrap();
        let out = extract_labels(&wave).unwrap();
        assert_eq!(as_strs(&out), vec!["nan"]);
    }

    #[test]
    fn scalar_wave_is_invalid_input() {
        let wave = Wave::from_ndarray(ndarray::arr0(7u32));
        let mut emitted: Vec<CompactString> = Vec::new();
        let err = match extract_labels_into(&wave, &mut emitted) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        match err {
            LabelError::InvalidInput { source, .. } => {
                assert_eq!(source, Some(WaveError::AxisOutOfBounds { axis: 0, ndim: 0 }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(emitted.is_empty());
    }

    #[test]
    fn unreadable_label_fails_after_earlier_emissions() {
        let source = Flaky {
            len: 4,
            broken_at: 2,
        };
        let mut emitted: Vec<CompactString> = Vec::new();
        let err = extract_labels_into(&source, &mut emitted).unwrap_err();
        assert!(matches!(err, LabelError::InvalidInput { source: None, .. }));
        assert_eq!(emitted, vec![CompactString::from("ok"), CompactString::from("ok")]);
    }

    #[test]
    fn config_selects_sink() {
        let wave = Wave::try_from_shape_vec(&[2], vec![false, true]).unwrap();
        let config = ExtractConfig {
            diagnostics: Diagnostics::Silent,
        };
        let out = extract_labels_with_config(&wave, &config).unwrap();
        assert_eq!(as_strs(&out), vec!["nan", "nan"]);
    }

    #[test]
    fn borrowed_sources_extract_the_same() {
        let wave = Wave::try_from_shape_vec(&[1], vec![1.5f32])
            .unwrap()
            .with_axis_labels(0, ["only"])
            .unwrap();
        let by_ref = &wave;
        let out = extract_labels_into(&by_ref, &mut sink::SilentSink).unwrap();
        assert_eq!(as_strs(&out), vec!["only"]);
    }
}
