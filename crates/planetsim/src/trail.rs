//! Position history used for drawing orbit paths.

use nalgebra::Point2;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Chronological record of a body's positions, one entry per step.
///
/// Unbounded unless built with a capacity, in which case the oldest
/// positions are dropped once the buffer is full. Physics never reads it.
///
/// # Examples
///
/// ```
/// use nalgebra::Point2;
/// use planetsim::trail::Trail;
/// use std::num::NonZeroUsize;
///
/// let mut trail = Trail::with_capacity(NonZeroUsize::new(2).unwrap());
/// trail.push(Point2::new(0.0, 0.0));
/// trail.push(Point2::new(1.0, 0.0));
/// trail.push(Point2::new(2.0, 0.0));
///
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail.total_recorded(), 3);
/// assert_eq!(trail.iter().next(), Some(&Point2::new(1.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Point2<f64>>,
    capacity: Option<usize>,
    total_recorded: u64,
}

impl Trail {
    /// A trail that keeps every position.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A ring buffer holding at most `capacity` positions.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.get()),
            capacity: Some(capacity.get()),
            total_recorded: 0,
        }
    }

    pub fn push(&mut self, point: Point2<f64>) {
        self.total_recorded += 1;
        if self.capacity == Some(self.points.len()) {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Positions ever pushed, including ones the ring buffer dropped.
    pub fn total_recorded(&self) -> u64 {
        self.total_recorded
    }

    pub fn last(&self) -> Option<&Point2<f64>> {
        self.points.back()
    }

    /// Oldest first. Each call starts over from the beginning.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Point2<f64>> + '_ {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Point2<f64>;
    type IntoIter = std::collections::vec_deque::Iter<'a, Point2<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
