use {
  log::{debug, trace},
  serde::{Deserialize, Serialize},
  crate::{
    element::Element,
    error::TreeError as Error,
    fenwick::FenwickTree,
  },
};

type Result<T> = std::result::Result<T, Error>;

/// A fixed number of most recent readings, summed with a [`FenwickTree`].
///
/// Slots are written round-robin: each [`record`](SlidingWindow::record)
/// overwrites the oldest slot, so [`total`](SlidingWindow::total) is always
/// the sum of the last `capacity` readings.
///
/// ```
/// fn main() -> Result<(), range_sum_trees::error::TreeError> {
///   use range_sum_trees::SlidingWindow;
///   let mut window = SlidingWindow::new(3);
///   for reading in &[20, 25, 30, 150] {
///     window.record(*reading)?;
///   }
///   assert_eq!(205, window.total());
///   assert_eq!(180, window.last(2)?);
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlidingWindow<T> {
  slots: FenwickTree<T>,
  /// Slot the next reading is written to.
  cursor: usize,
  /// Number of slots written at least once.
  filled: usize,
}

impl<T: Element> SlidingWindow<T> {
  /// Returns a window holding up to `capacity` readings, all zero.
  pub fn new(capacity: usize) -> Self {
    debug!("sliding window: {} slots", capacity);
    SlidingWindow {
      slots: FenwickTree::new(capacity),
      cursor: 0,
      filled: 0,
    }
  }
  /// Number of readings the window holds once full.
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }
  /// Number of readings recorded so far, up to `capacity`.
  pub fn len(&self) -> usize {
    self.filled
  }
  /// True until the first reading is recorded.
  pub fn is_empty(&self) -> bool {
    self.filled == 0
  }
  /// Writes `value` over the oldest slot, returning the reading it evicted
  /// (zero while the window is filling up).
  pub fn record(&mut self, value: T) -> Result<T> {
    let evicted = self.slots.set(self.cursor, value)?;
    trace!("sliding window: slot {} = {:?}, evicted {:?}", self.cursor, value, evicted);
    self.cursor = (self.cursor + 1) % self.capacity();
    self.filled = (self.filled + 1).min(self.capacity());
    Ok(evicted)
  }
  /// Sum of every reading in the window.
  pub fn total(&self) -> T {
    self.slots.total()
  }
  /// Sum of the `n` most recent readings.
  ///
  /// `n` larger than the capacity is clamped to it, giving the total.
  pub fn last(&self, n: usize) -> Result<T> {
    let capacity = self.capacity();
    let n = n.min(capacity);
    if n == 0 {
      return Ok(T::zero())
    }
    let start = (self.cursor + capacity - n) % capacity;
    let end = (self.cursor + capacity - 1) % capacity;
    if start <= end {
      self.slots.range_sum(start, end)
    }
    else {
      /* Wrapped around the end of the buffer */
      let mut sum = self.slots.range_sum(start, capacity - 1)?;
      sum += self.slots.range_sum(0, end)?;
      Ok(sum)
    }
  }
  /// The recorded readings, oldest first.
  pub fn readings(&self) -> Vec<T> {
    let values = self.slots.to_vec();
    let capacity = self.capacity();
    (0..self.filled)
      .map(|age| values[(self.cursor + capacity - self.filled + age) % capacity])
      .collect()
  }
}
