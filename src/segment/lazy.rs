use {
  log::{debug, trace},
  serde::{Deserialize, Serialize},
  std::{convert::TryFrom, iter::FromIterator, ops::RangeBounds},
  crate::{
    bounds,
    element::Element,
    error::TreeError as Error,
    segment::*,
  },
};

type Result<T> = std::result::Result<T, Error>;

/// A segment tree supporting range-add updates and range-sum queries, both
/// in O(log n), via lazy propagation.
///
/// A range update stops at the highest nodes fully inside the range and
/// leaves a pending add there for their children. Every traversal pushes a
/// node's pending add down before trusting its sum or visiting its
/// children, which is why queries take `&mut self`.
///
/// ```
/// fn main() -> Result<(), range_sum_trees::error::TreeError> {
///   use range_sum_trees::LazySegmentTree;
///   let mut sales = LazySegmentTree::from(vec![100, 120, 90, 200, 300, 80, 150]);
///   assert_eq!(1040, sales.query(0, 6)?);
///   sales.range_update(2, 5, -10)?;
///   assert_eq!(1000, sales.query(0, 6)?);
///   assert_eq!(630, sales.query(2, 5)?);
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LazySnapshot<T>")]
pub struct LazySegmentTree<T> {
  len: usize,
  /// `tree[i]` is the sum of node `i`'s span, excluding `lazy[i]` and any
  /// pending add recorded on an ancestor.
  tree: Vec<T>,
  /// Pending add for every index of node `i`'s span, not yet applied to
  /// `tree[i]` or forwarded to its children.
  lazy: Vec<T>,
}

/* Public */
impl<T: Element> LazySegmentTree<T> {
  /// Builds a tree over `values` in O(n) with nothing pending.
  pub fn from_slice(values: &[T]) -> Self {
    let len = values.len();
    let mut tree = LazySegmentTree {
      len,
      tree: vec![T::zero(); capacity(len)],
      lazy: vec![T::zero(); capacity(len)],
    };
    if len > 0 {
      tree.build(values, ROOT, Span::root(len));
    }
    debug!("lazy segment tree: built over {} values", len);
    tree
  }
  /// Number of values the tree indexes over.
  pub fn len(&self) -> usize {
    self.len
  }
  /// True if the tree indexes over no values.
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
  /// Adds `delta` to every value at positions `lo..=hi`.
  ///
  /// `lo == hi + 1` is the empty range and leaves the tree untouched, as
  /// does a `delta` of zero.
  pub fn range_update(&mut self, lo: usize, hi: usize, delta: T) -> Result<()> {
    let range = bounds::check_inclusive(lo, hi, self.len)?;
    trace!("lazy segment tree update: [{}, {}] += {:?}", lo, hi, delta);
    self.add_span(range, delta)
  }
  /// Adds `delta` to every value in `range`.
  /// ```
  /// fn main() -> Result<(), range_sum_trees::error::TreeError> {
  ///   use range_sum_trees::LazySegmentTree;
  ///   let mut tree = LazySegmentTree::from(vec![0i64; 8]);
  ///   tree.add(2..6, 3)?;
  ///   tree.add(..4, 1)?;
  ///   assert_eq!(vec![1, 1, 4, 4, 3, 3, 0, 0], tree.to_vec()?);
  ///   Ok(())
  /// }
  /// ```
  pub fn add(&mut self, range: impl RangeBounds<usize>, delta: T) -> Result<()> {
    let range = bounds::resolve(range, self.len)?;
    self.add_span(range, delta)
  }
  /// Sum of the values at positions `lo..=hi`.
  ///
  /// `lo == hi + 1` is the empty range and sums to zero.
  pub fn query(&mut self, lo: usize, hi: usize) -> Result<T> {
    let range = bounds::check_inclusive(lo, hi, self.len)?;
    trace!("lazy segment tree query: [{}, {}]", lo, hi);
    self.span_sum(range)
  }
  /// Sum of the values in `range`.
  pub fn sum(&mut self, range: impl RangeBounds<usize>) -> Result<T> {
    let range = bounds::resolve(range, self.len)?;
    self.span_sum(range)
  }
  /// Returns the current value at `index`.
  pub fn get(&mut self, index: usize) -> Result<T> {
    bounds::check_index(index, self.len)?;
    self.span_sum(Some((index, index)))
  }
  /// Overwrites the value at `index`, returning the value it replaced.
  pub fn set(&mut self, index: usize, value: T) -> Result<T> {
    bounds::check_index(index, self.len)?;
    self.check_span()?;
    trace!("lazy segment tree set: index {} = {:?}", index, value);
    self.assign(ROOT, Span::root(self.len), index, value)
  }
  /// Sum of every value in the tree.
  ///
  /// The root never keeps a pending add past the end of an operation, so
  /// this needs no push-down.
  pub fn total(&self) -> T {
    self.tree.first().copied().unwrap_or_else(T::zero)
  }
  /// Returns the current values, in index order, pushing every pending add
  /// down to the leaves.
  pub fn to_vec(&mut self) -> Result<Vec<T>> {
    let mut values = Vec::with_capacity(self.len);
    if self.len > 0 {
      self.check_span()?;
      self.collect_leaves(ROOT, Span::root(self.len), &mut values)?;
    }
    Ok(values)
  }
}

/* Private */
impl<T: Element> LazySegmentTree<T> {
  fn build(&mut self, values: &[T], node: usize, span: Span) {
    if span.is_leaf() {
      self.tree[node] = values[span.lo];
      return
    }
    let (l, r) = span.split();
    self.build(values, left(node), l);
    self.build(values, right(node), r);
    self.pull(node);
  }
  /// Fails unless every span length fits in `T`. Checked before any
  /// traversal so that push-downs cannot fail halfway through.
  fn check_span(&self) -> Result<()> {
    match T::zero().repeated(self.len) {
      Some(_) => Ok(()),
      None => Err(Error::SpanOverflow{len: self.len}),
    }
  }
  /// Applies the pending add of `node` to its own sum and forwards it to
  /// both children. A no-op once nothing is pending.
  fn push_down(&mut self, node: usize, span: Span) -> Result<()> {
    let pending = self.lazy[node];
    if pending.is_zero() {
      return Ok(())
    }
    let whole = pending.repeated(span.len()).ok_or(Error::SpanOverflow{len: span.len()})?;
    self.tree[node] += whole;
    if !span.is_leaf() {
      self.lazy[left(node)] += pending;
      self.lazy[right(node)] += pending;
    }
    self.lazy[node] = T::zero();
    Ok(())
  }
  fn add_span(&mut self, range: Option<(usize, usize)>, delta: T) -> Result<()> {
    match range {
      Some((lo, hi)) => {
        self.check_span()?;
        self.descend_add(ROOT, Span::root(self.len), lo, hi, delta)
      },
      None => Ok(()),
    }
  }
  fn descend_add(&mut self, node: usize, span: Span, lo: usize, hi: usize, delta: T) -> Result<()> {
    self.push_down(node, span)?;
    match span.overlap(lo, hi) {
      Overlap::Disjoint => Ok(()),
      Overlap::Contained => {
        self.lazy[node] += delta;
        self.push_down(node, span)
      },
      Overlap::Partial => {
        let (l, r) = span.split();
        self.descend_add(left(node), l, lo, hi, delta)?;
        self.descend_add(right(node), r, lo, hi, delta)?;
        self.pull(node);
        Ok(())
      },
    }
  }
  fn descend_sum(&mut self, node: usize, span: Span, lo: usize, hi: usize) -> Result<T> {
    self.push_down(node, span)?;
    match span.overlap(lo, hi) {
      Overlap::Disjoint => Ok(T::zero()),
      Overlap::Contained => Ok(self.tree[node]),
      Overlap::Partial => {
        let (l, r) = span.split();
        let p1 = self.descend_sum(left(node), l, lo, hi)?;
        let p2 = self.descend_sum(right(node), r, lo, hi)?;
        Ok(p1 + p2)
      },
    }
  }
  fn span_sum(&mut self, range: Option<(usize, usize)>) -> Result<T> {
    match range {
      Some((lo, hi)) => {
        self.check_span()?;
        self.descend_sum(ROOT, Span::root(self.len), lo, hi)
      },
      None => Ok(T::zero()),
    }
  }
  fn assign(&mut self, node: usize, span: Span, index: usize, value: T) -> Result<T> {
    self.push_down(node, span)?;
    if span.is_leaf() {
      let old = self.tree[node];
      self.tree[node] = value;
      return Ok(old)
    }
    let (l, r) = span.split();
    /* The sibling is pushed too, so that pull reads an up-to-date sum */
    self.push_down(left(node), l)?;
    self.push_down(right(node), r)?;
    let old = if index <= l.hi {
      self.assign(left(node), l, index, value)?
    }
    else {
      self.assign(right(node), r, index, value)?
    };
    self.pull(node);
    Ok(old)
  }
  /// Recomputes `node` from its children. Both children must have nothing
  /// pending.
  fn pull(&mut self, node: usize) {
    self.tree[node] = self.tree[left(node)] + self.tree[right(node)];
  }
  fn collect_leaves(&mut self, node: usize, span: Span, values: &mut Vec<T>) -> Result<()> {
    self.push_down(node, span)?;
    if span.is_leaf() {
      values.push(self.tree[node]);
      return Ok(())
    }
    let (l, r) = span.split();
    self.collect_leaves(left(node), l, values)?;
    self.collect_leaves(right(node), r, values)
  }
}

/// Serialized form of a [`LazySegmentTree`], checked before it is trusted.
#[derive(Deserialize)]
pub struct LazySnapshot<T> {
  len: usize,
  tree: Vec<T>,
  lazy: Vec<T>,
}
impl<T> TryFrom<LazySnapshot<T>> for LazySegmentTree<T> {
  type Error = Error;
  fn try_from(snapshot: LazySnapshot<T>) -> Result<Self> {
    let LazySnapshot{len, tree, lazy} = snapshot;
    for slots in &[tree.len(), lazy.len()] {
      if *slots != capacity(len) {
        return Err(Error::InvalidSnapshot {
          expected: capacity(len),
          found: *slots,
        })
      }
    }
    Ok(LazySegmentTree{len, tree, lazy})
  }
}

impl<T: Element> From<Vec<T>> for LazySegmentTree<T> {
  fn from(values: Vec<T>) -> Self {
    LazySegmentTree::from_slice(&values)
  }
}
impl<T: Element> From<&[T]> for LazySegmentTree<T> {
  fn from(values: &[T]) -> Self {
    LazySegmentTree::from_slice(values)
  }
}
impl<T: Element> FromIterator<T> for LazySegmentTree<T> {
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
    let values: Vec<T> = iter.into_iter().collect();
    LazySegmentTree::from_slice(&values)
  }
}
impl<T: Element> Default for LazySegmentTree<T> {
  fn default() -> Self {
    LazySegmentTree::from_slice(&[])
  }
}

/* Private funcs used in testing */
#[cfg(test)]
impl<T: Element> LazySegmentTree<T> {
  fn pending(&self) -> usize {
    self.lazy.iter().filter(|v| !v.is_zero()).count()
  }
}

/* Public Interface Tests */
