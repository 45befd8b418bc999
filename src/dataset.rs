//! Loading the dataset and partitioning it by class.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::DatasetError;
use crate::gamma::DerivedRecord;
use crate::record::{ClassLabel, WineRecord};

/// The in-memory dataset, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<WineRecord>,
}

impl Dataset {
    /// Wraps records that are already in memory.
    pub fn new(records: Vec<WineRecord>) -> Self {
        Self { records }
    }

    /// Parses a JSON array of objects.
    ///
    /// # Errors
    /// [`DatasetError::Parse`] for malformed JSON, [`DatasetError::Empty`]
    /// for an empty array.
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let records: Vec<WineRecord> = serde_json::from_str(text)?;
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        info!(records = records.len(), "dataset loaded");
        Ok(Self { records })
    }

    /// Reads and parses the dataset at `path`.
    ///
    /// # Errors
    /// [`DatasetError::NotFound`] if the file does not exist, otherwise as
    /// [`Dataset::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading dataset");
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DatasetError::NotFound(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_json_str(&text)
    }

    /// All records, in source order.
    pub fn records(&self) -> &[WineRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Groups records by the class label stored in `class_field`.
    ///
    /// # Errors
    /// See [`group_by_class`].
    pub fn group_by_class(
        &self,
        class_field: &str,
    ) -> Result<BTreeMap<ClassLabel, Vec<&WineRecord>>, DatasetError> {
        group_by_class(&self.records, class_field)
    }

    /// Every record with its Gamma attached, in source order.
    pub fn with_gamma(&self) -> Vec<DerivedRecord> {
        self.records
            .iter()
            .cloned()
            .map(DerivedRecord::from_record)
            .collect()
    }
}

/// Partitions `items` by the class label in `class_field`.
///
/// Groups are ordered by ascending label; within a group, items keep
/// their input order. Every group is non-empty.
///
/// # Errors
/// [`DatasetError::InvalidClass`] for the first item whose class field is
/// missing or not a whole number.
pub fn group_by_class<'a, T: AsRef<WineRecord>>(
    items: &'a [T],
    class_field: &str,
) -> Result<BTreeMap<ClassLabel, Vec<&'a T>>, DatasetError> {
    let mut groups: BTreeMap<ClassLabel, Vec<&'a T>> = BTreeMap::new();
    for (index, item) in items.iter().enumerate() {
        let label = item
            .as_ref()
            .class_label(class_field)
            .ok_or_else(|| DatasetError::InvalidClass {
                index,
                field: class_field.to_string(),
            })?;
        groups.entry(label).or_default().push(item);
    }
    debug!(classes = groups.len(), "grouped records by class");
    Ok(groups)
}
