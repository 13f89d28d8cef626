//! Plain-text label lists.
//!
//! A label list holds one label per whitespace-separated token, usually one
//! per line. The token `nan` marks an unset position, which is exactly what
//! extraction writes for empty labels, so a list produced from extracted
//! labels reads back into the same wave labelling. Text after `#` is ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use compact_str::CompactString;

use crate::{consts::LABEL_LIST_UNSET_TOKEN, error::LabelError};

/// Read a label list, mapping `nan` tokens to empty labels.
pub fn read_label_list<R: BufRead>(reader: R) -> Result<Vec<CompactString>, LabelError> {
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let content = line.split_once('#').map_or(line.as_str(), |(head, _)| head);
        labels.extend(content.split_whitespace().map(|token| {
            if token == LABEL_LIST_UNSET_TOKEN {
                CompactString::default()
            } else {
                CompactString::from(token)
            }
        }));
    }
    tracing::debug!(count = labels.len(), "read label list");
    Ok(labels)
}

pub fn read_label_list_path(path: impl AsRef<Path>) -> Result<Vec<CompactString>, LabelError> {
    let file = File::open(path)?;
    read_label_list(BufReader::new(file))
}
