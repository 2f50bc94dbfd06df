mod lazy;
mod point;

pub use lazy::LazySegmentTree;
pub use point::SegmentTree;

/* Common */
/// Root of the implicit tree. Node `i` has children `2i + 1` and `2i + 2`.
const ROOT: usize = 0;

fn left(node: usize) -> usize {
  2*node + 1
}
fn right(node: usize) -> usize {
  2*node + 2
}
/// Slots needed for an implicit tree over `len` leaves.
fn capacity(len: usize) -> usize {
  4*len
}

/* Spans */
/// The inclusive index range `[lo, hi]` a node is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
  lo: usize,
  hi: usize,
}
/// How a node's span relates to the queried range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlap {
  /// No index in common; the node contributes the additive identity.
  Disjoint,
  /// Every index of the span is queried; the node's stored sum is used as is.
  Contained,
  /// Some but not all; both children must be visited.
  Partial,
}
impl Span {
  fn new(lo: usize, hi: usize) -> Self {
    Span { lo, hi }
  }
  /// Span of the root for a tree over `len > 0` leaves.
  fn root(len: usize) -> Self {
    Span::new(0, len - 1)
  }
  fn len(&self) -> usize {
    self.hi - self.lo + 1 // +1 because span is inclusive
  }
  fn is_leaf(&self) -> bool {
    self.lo == self.hi
  }
  fn mid(&self) -> usize {
    self.lo + (self.hi - self.lo) / 2
  }
  /// Spans of the left and right child.
  fn split(&self) -> (Span, Span) {
    let mid = self.mid();
    (Span::new(self.lo, mid), Span::new(mid + 1, self.hi))
  }
  fn overlap(&self, lo: usize, hi: usize) -> Overlap {
    if hi < self.lo || self.hi < lo {
      Overlap::Disjoint
    }
    else if lo <= self.lo && self.hi <= hi {
      Overlap::Contained
    }
    else {
      Overlap::Partial
    }
  }
}

/* Tests */
#[cfg(test)]
mod span_tests {
  use super::*;
  #[test]
  fn children() {
    assert_eq!((1, 2), (left(ROOT), right(ROOT)));
    assert_eq!((7, 8), (left(3), right(3)));
    assert_eq!(24, capacity(6));
  }
  #[test]
  fn split() {
    assert_eq!((Span::new(0, 2), Span::new(3, 5)), Span::root(6).split());
    assert_eq!((Span::new(0, 3), Span::new(4, 6)), Span::root(7).split());
    assert_eq!((Span::new(4, 4), Span::new(5, 5)), Span::new(4, 5).split());
  }
  #[test]
  fn len_and_leaf() {
    assert_eq!(7, Span::root(7).len());
    assert!(Span::new(3, 3).is_leaf());
    assert!(!Span::new(3, 4).is_leaf());
  }
  #[test]
  fn overlap() {
    let span = Span::new(2, 5);
    assert_eq!(Overlap::Disjoint, span.overlap(0, 1));
    assert_eq!(Overlap::Disjoint, span.overlap(6, 9));
    assert_eq!(Overlap::Contained, span.overlap(2, 5));
    assert_eq!(Overlap::Contained, span.overlap(0, 9));
    assert_eq!(Overlap::Partial, span.overlap(3, 9));
    assert_eq!(Overlap::Partial, span.overlap(0, 2));
    assert_eq!(Overlap::Partial, span.overlap(3, 4));
  }
}
