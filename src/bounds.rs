//! Argument validation shared by every structure.
//!
//! Resolved ranges are inclusive `(lo, hi)` pairs; `None` is the empty range.

use crate::error::TreeError as Error;
use std::ops::{Bound, RangeBounds};

type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
  if len == 0 {
    return Err(Error::EmptyStructure)
  }
  if index >= len {
    return Err(Error::InvalidIndex{index, len})
  }
  Ok(())
}

/// `lo == hi + 1` is the empty range, allowed for any `lo <= len`.
pub(crate) fn check_inclusive(lo: usize, hi: usize, len: usize) -> Result<Option<(usize, usize)>> {
  if lo > hi {
    if lo - hi > 1 {
      return Err(Error::InvalidRange{lo, hi})
    }
    if lo > len {
      return Err(Error::InvalidIndex{index: lo, len})
    }
    return Ok(None)
  }
  if hi >= len {
    return Err(Error::InvalidIndex{index: hi, len})
  }
  Ok(Some((lo, hi)))
}

pub(crate) fn resolve(range: impl RangeBounds<usize>, len: usize) -> Result<Option<(usize, usize)>> {
  let start = match range.start_bound() {
    Bound::Included(&s) => s,
    Bound::Excluded(&s) => s.checked_add(1).ok_or(Error::InvalidIndex{index: s, len})?,
    Bound::Unbounded => 0,
  };
  let end = match range.end_bound() {
    Bound::Included(&e) => e.checked_add(1).ok_or(Error::InvalidIndex{index: e, len})?,
    Bound::Excluded(&e) => e,
    Bound::Unbounded => len,
  };
  if start > end {
    return Err(Error::InvalidRange{lo: start, hi: end})
  }
  if end > len {
    return Err(Error::InvalidIndex{index: end-1, len})
  }
  if start == end {
    return Ok(None)
  }
  Ok(Some((start, end-1)))
}
