//! Slice specifications and index-range resolution
//!
//! A [`SliceSpec`] describes a start/stop/step selection over a logical
//! dimension, with optional and possibly negative bounds. Resolution turns
//! it into the concrete arithmetic progression of absolute indices.

use crate::error::{Error, Result};
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// A slice specification: optional start, stop and step
///
/// Bounds follow the usual sequence-slicing conventions: a missing start is
/// 0, a missing stop is the dimension, a missing step is 1, and negative
/// bounds count back from the dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    /// First index of the selection (negative counts from the end)
    pub start: Option<isize>,
    /// One past the last index of the selection (negative counts from the end)
    pub stop: Option<isize>,
    /// Stride between selected indices, defaults to 1
    pub step: Option<isize>,
}

impl SliceSpec {
    /// Create a spec from explicit optional bounds
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// The full-dimension selection `[:]`
    pub const fn full() -> Self {
        Self {
            start: None,
            stop: None,
            step: None,
        }
    }

    /// Replace the step of this spec
    pub const fn with_step(self, step: isize) -> Self {
        Self {
            start: self.start,
            stop: self.stop,
            step: Some(step),
        }
    }

    /// Resolve this spec against a dimension into absolute indices
    ///
    /// Negative start/stop resolve as `dim + bound`. No clamping is applied
    /// beyond that arithmetic: resolved indices may still be negative or
    /// reach past `dim`, and the consumer decides what those mean (read
    /// paths treat negatives as absent entries, out-of-dimension indices
    /// are bounds faults).
    ///
    /// # Errors
    ///
    /// A zero step is an [`Error::InvalidArgument`] fault.
    pub fn resolve(&self, dim: usize) -> Result<Vec<isize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::invalid_argument("step", "slice step cannot be zero"));
        }

        let dim = dim as isize;
        let start = match self.start {
            None => 0,
            Some(s) if s < 0 => dim + s,
            Some(s) => s,
        };
        let stop = match self.stop {
            None => dim,
            Some(s) if s < 0 => dim + s,
            Some(s) => s,
        };

        let mut indices = Vec::new();
        let mut i = start;
        if step > 0 {
            while i < stop {
                indices.push(i);
                i += step;
            }
        } else {
            while i > stop {
                indices.push(i);
                i += step;
            }
        }
        Ok(indices)
    }
}

impl From<Range<isize>> for SliceSpec {
    fn from(r: Range<isize>) -> Self {
        Self::new(Some(r.start), Some(r.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceSpec {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceSpec {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end), None)
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}
