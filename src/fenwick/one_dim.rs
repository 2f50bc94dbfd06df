use {
  log::{debug, trace},
  serde::{Deserialize, Serialize},
  std::{iter::FromIterator, ops::RangeBounds},
  crate::{
    bounds,
    element::Element,
    error::TreeError as Error,
    fenwick::*,
  },
};

type Result<T> = std::result::Result<T, Error>;

/// A binary-indexed tree over a fixed number of values.
///
/// `update` adds a *delta* to one value; `prefix_sum` and `range_sum` read
/// sums back. All three are O(log n). Use [`set`](FenwickTree::set) to
/// overwrite a value instead.
///
/// ```
/// fn main() -> Result<(), range_sum_trees::error::TreeError> {
///   use range_sum_trees::FenwickTree;
///   let mut tree = FenwickTree::from(vec![1, 3, 5, 7, 9, 11]);
///   assert_eq!(36, tree.prefix_sum(5)?);
///   assert_eq!(15, tree.range_sum(1, 3)?);
///   tree.update(2, 5)?;
///   assert_eq!(41, tree.prefix_sum(5)?);
///   assert_eq!(20, tree.range_sum(1, 3)?);
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenwickTree<T> {
  /// Slot `p` (1-based) holds the sum of the `lowest_bit(p)` values ending
  /// at position `p`. Slot 0 is unused and always zero.
  tree: Vec<T>,
}

/* Public */
impl<T: Element> FenwickTree<T> {
  /// Returns a tree over `len` values, all zero.
  /// ```
  /// use range_sum_trees::FenwickTree;
  /// let tree: FenwickTree<i64> = FenwickTree::new(100);
  /// assert_eq!(100, tree.len());
  /// assert_eq!(0, tree.total());
  /// ```
  pub fn new(len: usize) -> Self {
    debug!("fenwick tree: {} zeroed slots", len);
    FenwickTree {
      tree: vec![T::zero(); len+1],
    }
  }
  /// Builds a tree holding `values` in O(n).
  ///
  /// The result is identical to calling `update(i, values[i])` on a zeroed
  /// tree for every `i` in order.
  pub fn from_slice(values: &[T]) -> Self {
    let len = values.len();
    let mut tree = Vec::with_capacity(len+1);
    tree.push(T::zero());
    tree.extend_from_slice(values);
    for pos in 1..=len {
      let up = parent(pos);
      if up <= len {
        let partial = tree[pos];
        tree[up] += partial;
      }
    }
    debug!("fenwick tree: built from {} values", len);
    FenwickTree { tree }
  }
  /// Number of values the tree indexes over.
  pub fn len(&self) -> usize {
    self.tree.len().saturating_sub(1)
  }
  /// True if the tree indexes over no values.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
  /// Adds `delta` to the value at `index`.
  pub fn update(&mut self, index: usize, delta: T) -> Result<()> {
    bounds::check_index(index, self.len())?;
    trace!("fenwick update: index {} += {:?}", index, delta);
    self.propagate(index, |slot| *slot += delta);
    Ok(())
  }
  /// Overwrites the value at `index`, returning the value it replaced.
  pub fn set(&mut self, index: usize, value: T) -> Result<T> {
    let old = self.get(index)?;
    trace!("fenwick set: index {} = {:?}", index, value);
    if value >= old {
      let delta = value - old;
      self.propagate(index, |slot| *slot += delta);
    }
    else {
      let delta = old - value;
      self.propagate(index, |slot| *slot -= delta);
    }
    Ok(old)
  }
  /// Returns the current value at `index`.
  pub fn get(&self, index: usize) -> Result<T> {
    bounds::check_index(index, self.len())?;
    Ok(self.accumulate(index+1) - self.accumulate(index))
  }
  /// Sum of the values at positions `0..=index`.
  pub fn prefix_sum(&self, index: usize) -> Result<T> {
    bounds::check_index(index, self.len())?;
    trace!("fenwick prefix sum: ..={}", index);
    Ok(self.accumulate(index+1))
  }
  /// Sum of the values at positions `lo..=hi`.
  ///
  /// `lo == hi + 1` is the empty range and sums to zero.
  pub fn range_sum(&self, lo: usize, hi: usize) -> Result<T> {
    let range = bounds::check_inclusive(lo, hi, self.len())?;
    trace!("fenwick range sum: [{}, {}]", lo, hi);
    Ok(self.span_sum(range))
  }
  /// Sum of the values in `range`.
  /// ```
  /// fn main() -> Result<(), range_sum_trees::error::TreeError> {
  ///   use range_sum_trees::FenwickTree;
  ///   let tree = FenwickTree::from(vec![1, 3, 5, 7, 9, 11]);
  ///   assert_eq!(15, tree.sum(1..4)?);
  ///   assert_eq!(4, tree.sum(..2)?);
  ///   assert_eq!(0, tree.sum(0..0)?);
  ///   Ok(())
  /// }
  /// ```
  pub fn sum(&self, range: impl RangeBounds<usize>) -> Result<T> {
    let range = bounds::resolve(range, self.len())?;
    Ok(self.span_sum(range))
  }
  /// Sum of every value in the tree.
  pub fn total(&self) -> T {
    self.accumulate(self.len())
  }
  /// Returns the current values, in index order.
  pub fn to_vec(&self) -> Vec<T> {
    (0..self.len())
      .map(|i| self.accumulate(i+1) - self.accumulate(i))
      .collect()
  }
  /// Returns the smallest index whose prefix sum is at least `target`, or
  /// `None` if even the total falls short.
  ///
  /// Only meaningful when every value is non-negative, so that prefix sums
  /// never decrease.
  /// ```
  /// use range_sum_trees::FenwickTree;
  /// // Resting volume per price level.
  /// let mut book: FenwickTree<u32> = FenwickTree::new(100);
  /// book.update(10, 50).unwrap();
  /// book.update(12, 100).unwrap();
  /// book.update(15, 75).unwrap();
  /// assert_eq!(Some(12), book.lower_bound(120));
  /// assert_eq!(None, book.lower_bound(1000));
  /// ```
  pub fn lower_bound(&self, target: T) -> Option<usize> {
    let len = self.len();
    let mut pos = 0;
    let mut remaining = target;
    let mut step = highest_bit(len);
    while step > 0 {
      let next = pos + step;
      if next <= len && self.tree[next] < remaining {
        pos = next;
        remaining -= self.tree[next];
      }
      step >>= 1;
    }
    if pos < len { Some(pos) } else { None }
  }
}

/* Private */
impl<T: Element> FenwickTree<T> {
  fn propagate(&mut self, index: usize, mut apply: impl FnMut(&mut T)) {
    let len = self.len();
    let mut pos = index + 1;
    while pos <= len {
      apply(&mut self.tree[pos]);
      pos = parent(pos);
    }
  }
  /// Sum of the first `count` values.
  fn accumulate(&self, count: usize) -> T {
    let mut sum = T::zero();
    let mut pos = count;
    while pos > 0 {
      sum += self.tree[pos];
      pos = predecessor(pos);
    }
    sum
  }
  fn span_sum(&self, range: Option<(usize, usize)>) -> T {
    match range {
      Some((lo, hi)) => self.accumulate(hi+1) - self.accumulate(lo),
      None => T::zero(),
    }
  }
}

impl<T: Element> From<Vec<T>> for FenwickTree<T> {
  fn from(values: Vec<T>) -> Self {
    FenwickTree::from_slice(&values)
  }
}
impl<T: Element> From<&[T]> for FenwickTree<T> {
  fn from(values: &[T]) -> Self {
    FenwickTree::from_slice(values)
  }
}
impl<T: Element> FromIterator<T> for FenwickTree<T> {
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
    let values: Vec<T> = iter.into_iter().collect();
    FenwickTree::from_slice(&values)
  }
}
impl<T: Element> Default for FenwickTree<T> {
  fn default() -> Self {
    FenwickTree::new(0)
  }
}

/* Public Interface Tests */
