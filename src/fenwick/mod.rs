mod one_dim;
mod two_dim;

pub use one_dim::FenwickTree;
pub use two_dim::FenwickTree2D;

use serde::{Deserialize, Serialize};

/* Common */
fn lowest_bit(pos: usize) -> usize {
  pos & pos.wrapping_neg()
}
/// Largest power of two that is `<= n`, or 0 when `n == 0`.
fn highest_bit(n: usize) -> usize {
  let mut result = n;
  result |= result >> 1;
  result |= result >> 2;
  result |= result >> 4;
  result |= result >> 8;
  result |= result >> 16;
  #[cfg(target_pointer_width = "64")]
  { result |= result >> 32; }
  result - (result >> 1)
}
/// Next slot whose dyadic range also covers `pos`.
fn parent(pos: usize) -> usize {
  pos + lowest_bit(pos)
}
/// Slot ending just before the dyadic range of `pos`.
fn predecessor(pos: usize) -> usize {
  pos - lowest_bit(pos)
}

/* Ranges */
/// An inclusive rectangle of cells in a 2D structure.
///
/// A rectangle is empty when either axis has `min == max + 1`, which is how
/// `FenwickTree2D::range_sum` expresses "the rows above row 0".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
  ///
  pub min_row: usize,
  ///
  pub max_row: usize,
  ///
  pub min_col: usize,
  ///
  pub max_col: usize,
}
impl Rect {
  /// Creates a rectangle spanning rows `min_row..=max_row` and columns
  /// `min_col..=max_col`.
  pub fn new(min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> Self {
    Rect {
      min_row,
      max_row,
      min_col,
      max_col
    }
  }
  /// Creates the rectangle between two opposite corners, both inclusive.
  pub fn from_corners(top_left: [usize; 2], bottom_right: [usize; 2]) -> Self {
    Rect::new(top_left[0], bottom_right[0], top_left[1], bottom_right[1])
  }
  /// Number of rows covered, saturating at `usize::MAX`.
  pub fn height(&self) -> usize {
    axis_len(self.min_row, self.max_row)
  }
  /// Number of columns covered, saturating at `usize::MAX`.
  pub fn width(&self) -> usize {
    axis_len(self.min_col, self.max_col)
  }
  /// True when the rectangle covers no cells.
  pub fn is_empty(&self) -> bool {
    self.min_row > self.max_row || self.min_col > self.max_col
  }
  ///
  pub fn contains(&self, row: usize, col: usize) -> bool {
    row >= self.min_row && row <= self.max_row
    && col >= self.min_col && col <= self.max_col
  }
}

fn axis_len(min: usize, max: usize) -> usize {
  if min > max { 0 } else { (max - min).saturating_add(1) }
}

/* Tests */
