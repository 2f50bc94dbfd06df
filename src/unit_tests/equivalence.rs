
/* Randomised agreement between the trees and brute force */

use rand::Rng;
use crate::{
  FenwickTree,
  FenwickTree2D,
  Grid,
  LazySegmentTree,
  Rect,
  SegmentTree,
  error::TreeError,
};
use super::init_logging;

type Result<T> = std::result::Result<T, TreeError>;

const LEN: usize = 97;
const ROUNDS: usize = 400;

fn random_values(rng: &mut impl Rng, len: usize) -> Vec<i64> {
  (0..len).map(|_| rng.gen_range(-50, 50)).collect()
}
/// A random inclusive range, occasionally the empty one.
fn random_range(rng: &mut impl Rng, len: usize) -> (usize, usize) {
  let lo = rng.gen_range(0, len);
  if rng.gen_range(0, 10) == 0 {
    return (lo + 1, lo)
  }
  (lo, rng.gen_range(lo, len))
}
fn brute_sum(values: &[i64], lo: usize, hi: usize) -> i64 {
  if lo > hi { 0 } else { values[lo..=hi].iter().sum() }
}

#[test]
fn fenwick_deltas_match_segment_assignments() -> Result<()> {
  init_logging();
  let mut rng = rand::thread_rng();
  let mut values = random_values(&mut rng, LEN);
  let mut fenwick = FenwickTree::from_slice(&values);
  let mut segment = SegmentTree::from_slice(&values);
  for _ in 0..ROUNDS {
    let index = rng.gen_range(0, LEN);
    let new_value = rng.gen_range(-50, 50);
    fenwick.update(index, new_value - values[index])?;
    segment.update(index, new_value)?;
    values[index] = new_value;
    let (lo, hi) = random_range(&mut rng, LEN);
    let expected = brute_sum(&values, lo, hi);
    assert_eq!(expected, fenwick.range_sum(lo, hi)?);
    assert_eq!(expected, segment.query(lo, hi)?);
  }
  assert_eq!(fenwick.to_vec(), segment.to_vec());
  assert_eq!(fenwick.total(), segment.total());
  Ok(())
}
#[test]
fn set_and_add_swap_semantics() -> Result<()> {
  let mut rng = rand::thread_rng();
  let values = random_values(&mut rng, LEN);
  let mut fenwick = FenwickTree::from_slice(&values);
  let mut segment = SegmentTree::from_slice(&values);
  for _ in 0..ROUNDS {
    let index = rng.gen_range(0, LEN);
    let amount = rng.gen_range(-50, 50);
    if rng.gen() {
      fenwick.set(index, amount)?;
      segment.update(index, amount)?;
    }
    else {
      fenwick.update(index, amount)?;
      segment.add(index, amount)?;
    }
    assert_eq!(segment.get(index)?, fenwick.get(index)?);
  }
  assert_eq!(fenwick.to_vec(), segment.to_vec());
  Ok(())
}
#[test]
fn lazy_ranges_match_point_adds() -> Result<()> {
  init_logging();
  let mut rng = rand::thread_rng();
  let mut values = random_values(&mut rng, LEN);
  let mut lazy = LazySegmentTree::from_slice(&values);
  let mut segment = SegmentTree::from_slice(&values);
  for _ in 0..ROUNDS {
    let (lo, hi) = random_range(&mut rng, LEN);
    let delta = rng.gen_range(-20, 20);
    lazy.range_update(lo, hi, delta)?;
    for i in lo..=hi {
      segment.add(i, delta)?;
      values[i] += delta;
    }
    let (lo, hi) = random_range(&mut rng, LEN);
    let expected = brute_sum(&values, lo, hi);
    assert_eq!(expected, lazy.query(lo, hi)?);
    assert_eq!(expected, segment.query(lo, hi)?);
    assert_eq!(lazy.total(), segment.total());
  }
  assert_eq!(values, lazy.to_vec()?);
  Ok(())
}
#[test]
fn lazy_set_between_range_updates() -> Result<()> {
  let mut rng = rand::thread_rng();
  let mut values = random_values(&mut rng, LEN);
  let mut lazy = LazySegmentTree::from_slice(&values);
  for _ in 0..ROUNDS {
    if rng.gen() {
      let (lo, hi) = random_range(&mut rng, LEN);
      let delta = rng.gen_range(-20, 20);
      lazy.range_update(lo, hi, delta)?;
      for v in values.iter_mut().take(hi + 1).skip(lo) {
        *v += delta;
      }
    }
    else {
      let index = rng.gen_range(0, LEN);
      let value = rng.gen_range(-50, 50);
      assert_eq!(values[index], lazy.set(index, value)?);
      values[index] = value;
    }
    let index = rng.gen_range(0, LEN);
    assert_eq!(values[index], lazy.get(index)?);
  }
  assert_eq!(values.iter().sum::<i64>(), lazy.total());
  Ok(())
}
#[test]
fn fenwick_2d_matches_every_rectangle() -> Result<()> {
  init_logging();
  let mut rng = rand::thread_rng();
  let (rows, cols) = (7, 5);
  let mut grid: Grid<i64> = Grid::with_dimensions(rows, cols);
  let mut tree = FenwickTree2D::new(rows, cols);
  for _ in 0..60 {
    let (r, c) = (rng.gen_range(0, rows), rng.gen_range(0, cols));
    let delta = rng.gen_range(-30, 30);
    grid.add(r, c, delta)?;
    tree.update(r, c, delta)?;
  }
  for r1 in 0..=rows {
    for r2 in r1.saturating_sub(1)..rows {
      for c1 in 0..=cols {
        for c2 in c1.saturating_sub(1)..cols {
          let rect = Rect::new(r1, r2, c1, c2);
          assert_eq!(grid.sum_rect(rect)?, tree.range_sum(r1, c1, r2, c2)?);
        }
      }
    }
  }
  assert_eq!(FenwickTree2D::from_grid(&grid), tree);
  assert_eq!(grid, tree.to_grid());
  Ok(())
}
