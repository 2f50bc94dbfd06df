
/* Public Interface Tests */

use crate::{
  FenwickTree,
  FenwickTree2D,
  Grid,
  LazySegmentTree,
  Rect,
  SegmentTree,
  SlidingWindow,
  error::TreeError,
};
use super::init_logging;

type Result<T> = std::result::Result<T, TreeError>;

/* Private funcs used in testing */
fn test_values() -> Vec<i64> {
  vec![1, 3, 5, 7, 9, 11]
}
fn inventory() -> Vec<i64> {
  vec![100, 120, 90, 200, 300, 80, 150]
}

#[test]
fn segment_tree_point_assignment() -> Result<()> {
  init_logging();
  let mut tree = SegmentTree::from(test_values());
  assert_eq!(36, tree.query(0, 5)?);
  assert_eq!(15, tree.query(1, 3)?);
  tree.update(2, 10)?;
  assert_eq!(41, tree.query(0, 5)?);
  assert_eq!(20, tree.query(1, 3)?);
  Ok(())
}
#[test]
fn fenwick_tree_point_delta() -> Result<()> {
  init_logging();
  let mut tree = FenwickTree::from(test_values());
  assert_eq!(36, tree.prefix_sum(5)?);
  assert_eq!(36, tree.range_sum(0, 5)?);
  assert_eq!(15, tree.range_sum(1, 3)?);
  tree.update(2, 5)?;
  assert_eq!(41, tree.prefix_sum(5)?);
  assert_eq!(41, tree.range_sum(0, 5)?);
  assert_eq!(20, tree.range_sum(1, 3)?);
  Ok(())
}
#[test]
fn same_change_both_trees() -> Result<()> {
  let mut values = test_values();
  let mut segment = SegmentTree::from_slice(&values);
  let mut fenwick = FenwickTree::from_slice(&values);
  let (index, new_value) = (2, 10);
  let change = new_value - values[index];
  values[index] = new_value;
  segment.update(index, new_value)?;
  fenwick.update(index, change)?;
  for lo in 0..values.len() {
    for hi in lo..values.len() {
      assert_eq!(segment.query(lo, hi)?, fenwick.range_sum(lo, hi)?);
    }
  }
  assert_eq!(values, segment.to_vec());
  assert_eq!(values, fenwick.to_vec());
  Ok(())
}
#[test]
fn lazy_tree_discount() -> Result<()> {
  init_logging();
  let mut tree = LazySegmentTree::from(inventory());
  assert_eq!(1040, tree.query(0, 6)?);
  tree.range_update(2, 5, -10)?;
  assert_eq!(1000, tree.query(0, 6)?);
  assert_eq!(630, tree.query(2, 5)?);
  Ok(())
}
#[test]
fn fenwick_2d_regions() -> Result<()> {
  init_logging();
  let mut engagement = FenwickTree2D::new(4, 4);
  engagement.update(0, 0, 150)?;
  engagement.update(0, 1, 100)?;
  engagement.update(1, 0, 120)?;
  engagement.update(1, 1, 200)?;
  engagement.update(3, 3, 50)?;
  assert_eq!(570, engagement.range_sum(0, 0, 1, 1)?);
  engagement.update(1, 2, 1000)?;
  assert_eq!(570, engagement.range_sum(0, 0, 1, 1)?);
  assert_eq!(1620, engagement.range_sum(0, 0, 3, 3)?);
  Ok(())
}
#[test]
fn fenwick_2d_matches_grid() -> Result<()> {
  let mut grid: Grid<i64> = Grid::with_dimensions(4, 4);
  for &(r, c, v) in &[(0, 0, 150), (0, 1, 100), (1, 0, 120), (1, 1, 200), (3, 3, 50), (1, 2, 1000)] {
    grid.add(r, c, v)?;
  }
  let tree = FenwickTree2D::from_grid(&grid);
  let west = Rect::from_corners([0, 0], [1, 1]);
  assert_eq!(grid.sum_rect(west)?, tree.sum_rect(west)?);
  assert_eq!(1620, tree.total());
  Ok(())
}
#[test]
fn order_book_volume() -> Result<()> {
  init_logging();
  let mut book: FenwickTree<i64> = FenwickTree::new(100);
  book.update(10, 50)?;
  book.update(12, 100)?;
  book.update(15, 75)?;
  assert_eq!(150, book.prefix_sum(12)?);
  book.update(11, 200)?;
  assert_eq!(350, book.prefix_sum(12)?);
  book.update(10, -50)?;
  assert_eq!(300, book.prefix_sum(12)?);
  assert_eq!(Some(11), book.lower_bound(150));
  assert_eq!(Some(15), book.lower_bound(301));
  Ok(())
}
#[test]
fn traffic_window() -> Result<()> {
  init_logging();
  let mut window = SlidingWindow::new(10);
  let views: Vec<i64> = (0..20).map(|s| 50 + 7*s).collect();
  for &v in &views {
    window.record(v)?;
  }
  assert_eq!(views[10..].iter().sum::<i64>(), window.total());
  assert_eq!(views[17..].iter().sum::<i64>(), window.last(3)?);
  assert_eq!(views[10..].to_vec(), window.readings());
  window.record(300)?;
  assert_eq!(views[11..].iter().sum::<i64>() + 300, window.total());
  Ok(())
}
#[test]
fn errors_leave_structures_untouched() {
  let mut fenwick = FenwickTree::from(test_values());
  let mut segment = SegmentTree::from(test_values());
  let mut lazy = LazySegmentTree::from(test_values());
  assert_eq!(Err(TreeError::InvalidIndex{index: 6, len: 6}), fenwick.update(6, 1));
  assert_eq!(Err(TreeError::InvalidIndex{index: 6, len: 6}), segment.update(6, 1));
  assert_eq!(Err(TreeError::InvalidIndex{index: 6, len: 6}), lazy.range_update(0, 6, 1));
  assert_eq!(Err(TreeError::InvalidRange{lo: 4, hi: 2}), fenwick.range_sum(4, 2));
  assert_eq!(Err(TreeError::InvalidRange{lo: 4, hi: 2}), segment.query(4, 2));
  assert_eq!(Err(TreeError::InvalidRange{lo: 4, hi: 2}), lazy.query(4, 2));
  assert_eq!(FenwickTree::from(test_values()), fenwick);
  assert_eq!(SegmentTree::from(test_values()), segment);
  assert_eq!(LazySegmentTree::from(test_values()), lazy);
}
#[test]
fn empty_structures() {
  let fenwick: FenwickTree<i64> = FenwickTree::new(0);
  let segment: SegmentTree<i64> = SegmentTree::from_slice(&[]);
  let mut lazy: LazySegmentTree<i64> = LazySegmentTree::from_slice(&[]);
  let grid: FenwickTree2D<i64> = FenwickTree2D::new(0, 0);
  assert_eq!(Ok(0), fenwick.sum(..));
  assert_eq!(Ok(0), segment.sum(..));
  assert_eq!(Ok(0), lazy.sum(..));
  assert_eq!(0, grid.total());
  assert_eq!(Err(TreeError::EmptyStructure), fenwick.get(0));
  assert_eq!(Err(TreeError::EmptyStructure), segment.get(0));
  assert_eq!(Err(TreeError::EmptyStructure), lazy.get(0));
  assert_eq!(Err(TreeError::EmptyStructure), grid.get(0, 0));
}
