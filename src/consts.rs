/// Placeholder written in place of an empty dimension label.
pub const NAN_LABEL: &str = "nan";

/// The only axis whose labels are extracted.
pub const LEADING_AXIS: usize = 0;

/// Label list token that stands for an unset label.
pub const LABEL_LIST_UNSET_TOKEN: &str = NAN_LABEL;
