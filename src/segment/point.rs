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

/// A segment tree answering range sums under point assignment.
///
/// Unlike [`FenwickTree::update`](crate::FenwickTree::update), which adds a
/// delta, [`update`](SegmentTree::update) here *overwrites* the value at an
/// index. Use [`add`](SegmentTree::add) for delta semantics.
///
/// ```
/// fn main() -> Result<(), range_sum_trees::error::TreeError> {
///   use range_sum_trees::SegmentTree;
///   let mut tree = SegmentTree::from(vec![1, 3, 5, 7, 9, 11]);
///   assert_eq!(36, tree.query(0, 5)?);
///   assert_eq!(15, tree.query(1, 3)?);
///   tree.update(2, 10)?;
///   assert_eq!(41, tree.query(0, 5)?);
///   assert_eq!(20, tree.query(1, 3)?);
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointSnapshot<T>")]
pub struct SegmentTree<T> {
  len: usize,
  /// Implicit binary tree; every internal node holds the sum of its
  /// children and every leaf holds one value.
  tree: Vec<T>,
}

/* Public */
impl<T: Element> SegmentTree<T> {
  /// Builds a tree over `values` in O(n).
  ///
  /// An empty slice gives an empty tree: every range query over it is the
  /// empty range and point operations fail with `EmptyStructure`.
  pub fn from_slice(values: &[T]) -> Self {
    let len = values.len();
    let mut tree = SegmentTree {
      len,
      tree: vec![T::zero(); capacity(len)],
    };
    if len > 0 {
      tree.build(values, ROOT, Span::root(len));
    }
    debug!("segment tree: built over {} values", len);
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
  /// Overwrites the value at `index` with `value`, then recomputes every
  /// ancestor on the way back up.
  pub fn update(&mut self, index: usize, value: T) -> Result<()> {
    bounds::check_index(index, self.len)?;
    trace!("segment tree update: index {} = {:?}", index, value);
    self.assign(ROOT, Span::root(self.len), index, value);
    Ok(())
  }
  /// Adds `delta` to the value at `index`.
  pub fn add(&mut self, index: usize, delta: T) -> Result<()> {
    let mut value = self.get(index)?;
    value += delta;
    self.update(index, value)
  }
  /// Returns the current value at `index`.
  pub fn get(&self, index: usize) -> Result<T> {
    bounds::check_index(index, self.len)?;
    let mut node = ROOT;
    let mut span = Span::root(self.len);
    while !span.is_leaf() {
      let (l, r) = span.split();
      if index <= l.hi {
        node = left(node);
        span = l;
      }
      else {
        node = right(node);
        span = r;
      }
    }
    Ok(self.tree[node])
  }
  /// Sum of the values at positions `lo..=hi`.
  ///
  /// `lo == hi + 1` is the empty range and sums to zero.
  pub fn query(&self, lo: usize, hi: usize) -> Result<T> {
    let range = bounds::check_inclusive(lo, hi, self.len)?;
    trace!("segment tree query: [{}, {}]", lo, hi);
    Ok(self.span_sum(range))
  }
  /// Sum of the values in `range`.
  pub fn sum(&self, range: impl RangeBounds<usize>) -> Result<T> {
    let range = bounds::resolve(range, self.len)?;
    Ok(self.span_sum(range))
  }
  /// Sum of every value in the tree.
  pub fn total(&self) -> T {
    self.tree.first().copied().unwrap_or_else(T::zero)
  }
  /// Returns the current values, in index order.
  pub fn to_vec(&self) -> Vec<T> {
    let mut values = Vec::with_capacity(self.len);
    if self.len > 0 {
      self.collect_leaves(ROOT, Span::root(self.len), &mut values);
    }
    values
  }
}

/* Private */
impl<T: Element> SegmentTree<T> {
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
  fn assign(&mut self, node: usize, span: Span, index: usize, value: T) {
    if span.is_leaf() {
      self.tree[node] = value;
      return
    }
    let (l, r) = span.split();
    if index <= l.hi {
      self.assign(left(node), l, index, value);
    }
    else {
      self.assign(right(node), r, index, value);
    }
    self.pull(node);
  }
  fn descend(&self, node: usize, span: Span, lo: usize, hi: usize) -> T {
    match span.overlap(lo, hi) {
      Overlap::Disjoint => T::zero(),
      Overlap::Contained => self.tree[node],
      Overlap::Partial => {
        let (l, r) = span.split();
        self.descend(left(node), l, lo, hi) + self.descend(right(node), r, lo, hi)
      },
    }
  }
  fn span_sum(&self, range: Option<(usize, usize)>) -> T {
    match range {
      Some((lo, hi)) => self.descend(ROOT, Span::root(self.len), lo, hi),
      None => T::zero(),
    }
  }
  /// Recomputes `node` from its children.
  fn pull(&mut self, node: usize) {
    self.tree[node] = self.tree[left(node)] + self.tree[right(node)];
  }
  fn collect_leaves(&self, node: usize, span: Span, values: &mut Vec<T>) {
    if span.is_leaf() {
      values.push(self.tree[node]);
      return
    }
    let (l, r) = span.split();
    self.collect_leaves(left(node), l, values);
    self.collect_leaves(right(node), r, values);
  }
}

/// Serialized form of a [`SegmentTree`], checked before it is trusted.
#[derive(Deserialize)]
pub struct PointSnapshot<T> {
  len: usize,
  tree: Vec<T>,
}
impl<T> TryFrom<PointSnapshot<T>> for SegmentTree<T> {
  type Error = Error;
  fn try_from(snapshot: PointSnapshot<T>) -> Result<Self> {
    let PointSnapshot{len, tree} = snapshot;
    if tree.len() != capacity(len) {
      return Err(Error::InvalidSnapshot {
        expected: capacity(len),
        found: tree.len(),
      })
    }
    Ok(SegmentTree{len, tree})
  }
}

impl<T: Element> From<Vec<T>> for SegmentTree<T> {
  fn from(values: Vec<T>) -> Self {
    SegmentTree::from_slice(&values)
  }
}
impl<T: Element> From<&[T]> for SegmentTree<T> {
  fn from(values: &[T]) -> Self {
    SegmentTree::from_slice(values)
  }
}
impl<T: Element> FromIterator<T> for SegmentTree<T> {
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
    let values: Vec<T> = iter.into_iter().collect();
    SegmentTree::from_slice(&values)
  }
}
impl<T: Element> Default for SegmentTree<T> {
  fn default() -> Self {
    SegmentTree::from_slice(&[])
  }
}

/* Public Interface Tests */
