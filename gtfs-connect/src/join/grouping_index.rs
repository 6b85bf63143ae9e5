use std::collections::HashMap;

use itertools::{Either, Itertools};

use crate::model::{GroupField, GtfsRecord};

/// multi-map from a field value to every record holding that value, in input order.
pub type GroupingIndex<'a, T> = HashMap<&'a str, Vec<&'a T>>;

/// groups records by the value of `field`. records within a group keep their
/// relative input order. records that do not expose `field` are left out of
/// the index and reported with a warning.
pub fn group_by<T: GtfsRecord>(field: GroupField, records: &[T]) -> GroupingIndex<'_, T> {
    let (present, missing): (Vec<(&str, &T)>, Vec<&T>) =
        records
            .iter()
            .partition_map(|record| match record.field(field) {
                Some(value) => Either::Left((value, record)),
                None => Either::Right(record),
            });
    if !missing.is_empty() {
        log::warn!(
            "field '{field}' not found in {} of {} records from {}, excluding them from grouping",
            missing.len(),
            records.len(),
            T::FILE
        );
    }
    present.into_iter().into_group_map()
}
