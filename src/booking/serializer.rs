//! Canonical JSON rendering of a timetable.

use crate::booking::models::{AvailableSlot, Timetable};
use crate::error::AppError;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Timetable entries in the exact order they are written.
struct OrderedTimetable<'a>(Vec<(&'a str, &'a [AvailableSlot])>);

impl Serialize for OrderedTimetable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, slots) in &self.0 {
            map.serialize_entry(name, slots)?;
        }
        map.end()
    }
}

/// Serializes a timetable as compact JSON with keys in byte order.
///
/// Slots keep their order within each key. The output depends only on the
/// timetable's contents, never on map iteration order.
pub fn serialize_timetable(timetable: &Timetable) -> Result<String, AppError> {
    let mut entries: Vec<(&str, &[AvailableSlot])> = timetable
        .iter()
        .map(|(name, slots)| (name.as_str(), slots.as_slice()))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    serde_json::to_string(&OrderedTimetable(entries)).map_err(AppError::OutputSerialize)
}
