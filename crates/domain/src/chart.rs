//! Bounded rolling buffer behind the resource chart.

use std::collections::VecDeque;

use crate::error::ValidationError;
use crate::stats::TimeSeriesPoint;

/// Number of points the resource chart keeps by default.
pub const DEFAULT_CHART_CAPACITY: usize = 20;

/// Fixed-capacity, ordered sequence of time-series points.
///
/// Pushing past capacity evicts the oldest point first. The buffer exposes
/// the chart's two-series, labeled-axis shape through [`labels`](Self::labels),
/// [`cpu`](Self::cpu) and [`memory`](Self::memory).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBuffer {
    capacity: usize,
    points: VecDeque<TimeSeriesPoint>,
}

impl ChartBuffer {
    /// Create an empty buffer holding at most `capacity` points.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ValidationError> {
        if capacity == 0 {
            return Err(ValidationError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
        })
    }

    /// Append a point, returning the evicted oldest point if the buffer was full.
    pub fn push(&mut self, point: TimeSeriesPoint) -> Option<TimeSeriesPoint> {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front()
        } else {
            None
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points from oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = &TimeSeriesPoint> {
        self.points.iter()
    }

    /// X-axis labels, oldest first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.time.as_str())
    }

    /// CPU series, oldest first.
    pub fn cpu(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.cpu)
    }

    /// Memory series, oldest first.
    pub fn memory(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.memory)
    }
}

impl Default for ChartBuffer {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CHART_CAPACITY,
            points: VecDeque::with_capacity(DEFAULT_CHART_CAPACITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(i: usize) -> TimeSeriesPoint {
        TimeSeriesPoint {
            time: format!("12:00:{i:02}"),
            cpu: i as f64,
            memory: (i * 2) as f64,
        }
    }

    #[test]
    fn should_reject_zero_capacity() {
        assert_eq!(ChartBuffer::new(0), Err(ValidationError::ZeroCapacity));
    }

    #[test]
    fn should_keep_points_in_insertion_order() {
        let mut buffer = ChartBuffer::new(5).unwrap();
        for i in 0..3 {
            assert!(buffer.push(point(i)).is_none());
        }
        assert_eq!(buffer.labels().collect::<Vec<_>>(), ["12:00:00", "12:00:01", "12:00:02"]);
        assert_eq!(buffer.cpu().collect::<Vec<_>>(), [0.0, 1.0, 2.0]);
        assert_eq!(buffer.memory().collect::<Vec<_>>(), [0.0, 2.0, 4.0]);
    }

    #[test]
    fn should_cap_at_twenty_after_twenty_one_pushes() {
        let mut buffer = ChartBuffer::default();
        let mut evicted = Vec::new();
        for i in 0..21 {
            if let Some(old) = buffer.push(point(i)) {
                evicted.push(old);
            }
        }
        assert_eq!(buffer.len(), 20);
        assert_eq!(evicted, vec![point(0)]);
        assert_eq!(buffer.points().next(), Some(&point(1)));
        assert_eq!(buffer.points().last(), Some(&point(20)));
    }

    #[test]
    fn should_evict_oldest_on_every_push_past_capacity() {
        let mut buffer = ChartBuffer::new(2).unwrap();
        buffer.push(point(0));
        buffer.push(point(1));
        assert_eq!(buffer.push(point(2)), Some(point(0)));
        assert_eq!(buffer.push(point(3)), Some(point(1)));
        assert_eq!(buffer.len(), 2);
    }
}
