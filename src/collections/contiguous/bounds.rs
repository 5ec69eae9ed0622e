//! Index and range validation shared by all contiguous types.
//!
//! Ranges are taken as any [`RangeBounds<usize>`], so `1..3`, `..2`, `1..` and `..` all work, and
//! resolve to a half-open `[start, end)` interval.

use std::ops::{Bound, Range, RangeBounds};

use crate::panic::{IndexOutOfBounds, InvalidRange, Panic};

/// Checks that `index` is within a collection of length `len`.
pub(crate) const fn check_index(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
    if index < len {
        Ok(())
    } else {
        Err(IndexOutOfBounds { index, len })
    }
}

/// Resolves `range` against a collection of length `len`.
pub(crate) fn try_resolve<R: RangeBounds<usize>>(
    range: R,
    len: usize,
) -> Result<Range<usize>, InvalidRange> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        // Saturating is fine, usize::MAX can never be a valid start anyway.
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end || end > len {
        Err(InvalidRange { start, end, len })
    } else {
        Ok(start..end)
    }
}

/// Resolves `range` against a collection of length `len`.
///
/// # Panics
/// Panics if the range ends before it starts or ends after `len`.
#[track_caller]
pub(crate) fn resolve<R: RangeBounds<usize>>(range: R, len: usize) -> Range<usize> {
    match try_resolve(range, len) {
        Ok(range) => range,
        Err(err) => err.panic(),
    }
}
