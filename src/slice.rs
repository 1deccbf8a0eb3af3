//! Stepped slices over grid indices.
//!
//! Grids can be read a slot at a time with signed indices, or several slots
//! at once with a [`Slice`]: optional `start` and `stop` bounds (negative
//! bounds count from the end) and a non-zero `step` (negative steps walk
//! backwards). Out-of-range bounds are clamped rather than rejected.
//!
//! ```
//! use pdf_grid::Slice;
//!
//! let every_other: Vec<isize> = Slice::new(Some(1), None, Some(2)).indices(6).unwrap().collect();
//! assert_eq!(every_other, vec![1, 3, 5]);
//!
//! let reversed: Vec<isize> = Slice::reversed().indices(3).unwrap().collect();
//! assert_eq!(reversed, vec![2, 1, 0]);
//! ```

use crate::GridError;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl Slice {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Slice {
        Slice { start, stop, step }
    }

    /// Every index, first to last
    pub fn full() -> Slice {
        Slice::default()
    }

    /// Every index, last to first
    pub fn reversed() -> Slice {
        Slice::new(None, None, Some(-1))
    }

    /// Resolve the slice against a sequence of `len` items
    pub fn indices(&self, len: usize) -> Result<SliceIndices, GridError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(GridError::ZeroSliceStep);
        }

        let len = len as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(b) if b < 0 => (b + len).max(lower),
            Some(b) => b.min(upper),
        };

        let (start, stop) = if step < 0 {
            (clamp(self.start, upper), clamp(self.stop, lower))
        } else {
            (clamp(self.start, lower), clamp(self.stop, upper))
        };

        Ok(SliceIndices {
            next: start,
            stop,
            step,
        })
    }
}

/// The indices selected by a [`Slice`], in slice order
#[derive(Debug, Clone)]
pub struct SliceIndices {
    next: isize,
    stop: isize,
    step: isize,
}

impl Iterator for SliceIndices {
    type Item = isize;

    fn next(&mut self) -> Option<isize> {
        let done = if self.step > 0 {
            self.next >= self.stop
        } else {
            self.next <= self.stop
        };
        if done {
            return None;
        }

        let current = self.next;
        self.next += self.step;
        Some(current)
    }
}

impl From<Range<isize>> for Slice {
    fn from(r: Range<isize>) -> Self {
        Slice::new(Some(r.start), Some(r.end), None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(r: RangeFrom<isize>) -> Self {
        Slice::new(Some(r.start), None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(r: RangeTo<isize>) -> Self {
        Slice::new(None, Some(r.end), None)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Slice::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve<S: Into<Slice>>(slice: S, len: usize) -> Vec<isize> {
        slice.into().indices(len).expect("non-zero step").collect()
    }

    #[test]
    fn ranges_clamp_and_step() {
        assert_eq!(resolve(1..3, 4), vec![1, 2]);
        assert_eq!(resolve(1.., 4), vec![1, 2, 3]);
        assert_eq!(resolve(..2, 4), vec![0, 1]);
        assert_eq!(resolve(.., 3), vec![0, 1, 2]);
    }

    #[test]
    fn negative_bounds_count_from_the_end() {
        assert_eq!(resolve(-2.., 5), vec![3, 4]);
        assert_eq!(resolve(..-1, 4), vec![0, 1, 2]);
        assert_eq!(resolve(-10..2, 4), vec![0, 1]);
    }

    #[test]
    fn out_of_range_bounds_clamp() {
        assert_eq!(resolve(2..100, 4), vec![2, 3]);
        assert!(resolve(5.., 4).is_empty());
    }

    #[test]
    fn negative_step_walks_backwards() {
        assert_eq!(resolve(Slice::reversed(), 4), vec![3, 2, 1, 0]);
        assert_eq!(resolve(Slice::new(Some(2), Some(0), Some(-1)), 4), vec![2, 1]);
        assert_eq!(resolve(Slice::new(None, None, Some(-2)), 5), vec![4, 2, 0]);
    }

    #[test]
    fn zero_step_is_rejected() {
        let err = Slice::new(None, None, Some(0)).indices(3).unwrap_err();
        assert!(matches!(err, GridError::ZeroSliceStep));
    }
}
