//! Sparse horizontal occupancy bookkeeping.

use std::collections::HashMap;

/// Bucketed coverage counter over the unbounded horizontal axis.
///
/// Buckets are `floor(x / step)`. Counts only ever increase, and absent
/// buckets read as zero, so memory tracks covered buckets only.
#[derive(Clone, Debug)]
pub struct OccupancyRecord {
    step: f64,
    counts: HashMap<i64, u32>,
}

impl OccupancyRecord {
    pub fn new(step: f64) -> Self {
        Self {
            step,
            counts: HashMap::new(),
        }
    }

    /// Bucket index containing x
    pub fn bucket(&self, x: f64) -> i64 {
        (x / self.step).floor() as i64
    }

    /// Coverage count of a bucket
    pub fn count(&self, bucket: i64) -> u32 {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Coverage count of the bucket containing x
    pub fn count_at(&self, x: f64) -> u32 {
        self.count(self.bucket(x))
    }

    /// Increment every bucket from `floor((center - radius) / step)` up to,
    /// but excluding, `(center + radius) / step`.
    ///
    /// Returns the number of buckets touched.
    pub fn cover(&mut self, center: f64, radius: f64) -> usize {
        let first = ((center - radius) / self.step).floor() as i64;
        let end = (center + radius) / self.step;
        let mut touched = 0;
        let mut k = first;
        while (k as f64) < end {
            *self.counts.entry(k).or_insert(0) += 1;
            touched += 1;
            k += 1;
        }
        touched
    }

    /// Number of buckets with a non-zero count
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_bucket_is_zero() {
        let record = OccupancyRecord::new(5.0);
        assert_eq!(record.count(42), 0);
        assert_eq!(record.count_at(-1234.5), 0);
        assert!(record.is_empty());
    }

    #[test]
    fn test_bucket_floors_negative() {
        let record = OccupancyRecord::new(5.0);
        assert_eq!(record.bucket(0.0), 0);
        assert_eq!(record.bucket(4.9), 0);
        assert_eq!(record.bucket(-0.1), -1);
        assert_eq!(record.bucket(-5.0), -1);
        assert_eq!(record.bucket(-5.1), -2);
    }

    #[test]
    fn test_cover_footprint() {
        let mut record = OccupancyRecord::new(5.0);
        let touched = record.cover(100.0, 200.0);
        // buckets -20 ..= 59
        assert_eq!(touched, 80);
        assert_eq!(record.count(-20), 1);
        assert_eq!(record.count(59), 1);
        assert_eq!(record.count(60), 0);
        assert_eq!(record.count(-21), 0);
    }

    #[test]
    fn test_cover_accumulates() {
        let mut record = OccupancyRecord::new(5.0);
        record.cover(0.0, 20.0);
        record.cover(10.0, 20.0);
        assert_eq!(record.count_at(0.0), 2);
        assert_eq!(record.count_at(-20.0), 1);
        assert_eq!(record.count_at(25.0), 1);
    }

    #[test]
    fn test_memory_tracks_visited_buckets_only() {
        let mut record = OccupancyRecord::new(5.0);
        record.cover(1.0e9, 10.0);
        record.cover(-1.0e9, 10.0);
        assert!(record.len() <= 10);
    }
}
