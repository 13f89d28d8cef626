use crate::wave::error::WaveError;

pub fn num_elements(shape: &[usize]) -> Result<usize, WaveError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or(WaveError::ShapeOverflow)
}
