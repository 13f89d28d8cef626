//! Element types a [`crate::wave::Wave`] can hold.

use compact_str::CompactString;

use crate::dtype::DataType;

pub trait WaveElement: Clone {
    /// The logical datatype reported for waves of this element.
    const TYPE: DataType;
}

macro_rules! impl_wave_element {
    ($ty:ty, $dtype:ident) => {
        impl WaveElement for $ty {
            const TYPE: DataType = DataType::$dtype;
        }
    };
}

impl_wave_element!(i8, I8);
impl_wave_element!(i16, I16);
impl_wave_element!(i32, I32);
impl_wave_element!(i64, I64);
impl_wave_element!(u8, U8);
impl_wave_element!(u16, U16);
impl_wave_element!(u32, U32);
impl_wave_element!(u64, U64);
impl_wave_element!(f32, F32);
impl_wave_element!(f64, F64);
impl_wave_element!(bool, Bool);
impl_wave_element!(String, Utf8);
impl_wave_element!(CompactString, Utf8);
