use std::iter::Sum;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::prelude::*;

pub type Point<V> = (DateTime<Tz>, V);

/// Time series with strictly increasing timestamps.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series<V>(Vec<Point<V>>);

impl<V> Default for Series<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> Series<V> {
    /// Wrap the points which are already sorted by strictly increasing timestamps.
    pub(crate) fn from_sorted(points: Vec<Point<V>>) -> Self {
        debug_assert!(points.is_sorted_by(|(lhs, _), (rhs, _)| lhs < rhs));
        Self(points)
    }

    /// Append the point, which must be strictly later than the last one.
    pub fn push(&mut self, timestamp: DateTime<Tz>, value: V) -> Result {
        if let Some((last, _)) = self.0.last() {
            ensure!(timestamp > *last, "`{timestamp}` does not follow `{last}`");
        }
        self.0.push((timestamp, value));
        Ok(())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point<V>> {
        self.0.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point<V>> {
        self.0.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point<V>> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &DateTime<Tz>> {
        self.0.iter().map(|(timestamp, _)| timestamp)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, value)| value)
    }

    /// Get the value stored exactly at the timestamp.
    #[must_use]
    pub fn get(&self, timestamp: &DateTime<Tz>) -> Option<&V> {
        self.0
            .binary_search_by(|(key, _)| key.cmp(timestamp))
            .ok()
            .map(|index| &self.0[index].1)
    }

    /// Zero-order hold lookup.
    ///
    /// Returns the value of the latest point at or before `at`.
    /// Before the first point, the first value is held backwards.
    /// After the last point, the last value is held forever.
    #[must_use]
    pub fn value_at(&self, at: &DateTime<Tz>) -> Option<&V> {
        let n_preceding = self.0.partition_point(|(timestamp, _)| timestamp <= at);
        self.0.get(n_preceding.saturating_sub(1)).map(|(_, value)| value)
    }

    /// Sum the values with timestamps in `(start, end]`.
    #[must_use]
    pub fn sum_between(&self, start: &DateTime<Tz>, end: &DateTime<Tz>) -> V
    where
        V: Copy + Sum,
    {
        let from = self.0.partition_point(|(timestamp, _)| timestamp <= start);
        let to = self.0.partition_point(|(timestamp, _)| timestamp <= end);
        self.0.get(from..to).unwrap_or_default().iter().map(|(_, value)| *value).sum()
    }
}

impl<'a, V> IntoIterator for &'a Series<V> {
    type Item = &'a Point<V>;
    type IntoIter = std::slice::Iter<'a, Point<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Serialized as an ordered map of RFC 3339 timestamps to values.
impl<V: Serialize> Serialize for Series<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut serialize_map = serializer.serialize_map(Some(self.0.len()))?;
        for (timestamp, value) in &self.0 {
            serialize_map.serialize_entry(&timestamp.to_rfc3339(), value)?;
        }
        serialize_map.end()
    }
}
