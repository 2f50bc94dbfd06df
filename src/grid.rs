
use serde::{Deserialize, Serialize};
use crate::{
  element::Element,
  error::GridError,
  fenwick::Rect,
};

type Result<T> = std::result::Result<T, GridError>;

/// A dense 2-d matrix of values, stored row by row.
///
/// `Grid` is the plain representation that a [`FenwickTree2D`](crate::FenwickTree2D)
/// indexes over: it can seed a tree in one pass and answers the same
/// rectangle sums by brute force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
  /// Number of rows.
  pub rows: usize,
  /// Number of columns.
  pub cols: usize,
  values: Vec<T>,
}
impl<T: Element> Grid<T> {
  /// Creates an empty Grid with zero rows and columns.
  pub fn new() -> Self {
    Grid {
      rows: 0,
      cols: 0,
      values: Vec::new(),
    }
  }
  /// Creates a Grid of zeroes with predefined dimensions.
  pub fn with_dimensions(rows: usize, cols: usize) -> Self {
    Grid {
      rows,
      cols,
      values: vec![T::zero(); rows*cols],
    }
  }
  /// Builds a Grid from exactly `rows * cols` values given row by row.
  /// ```
  /// fn main() -> Result<(), range_sum_trees::error::GridError> {
  ///   use range_sum_trees::Grid;
  ///   let grid = Grid::from_values(2, 3, vec![1, 2, 3, 4, 5, 6])?;
  ///   assert_eq!(6, grid.get(1, 2)?);
  ///   Ok(())
  /// }
  /// ```
  pub fn from_values(rows: usize, cols: usize, data: impl IntoIterator<Item=T>) -> Result<Self> {
    let values: Vec<T> = data.into_iter().collect();
    if values.len() != rows*cols {
      return Err(GridError::ShapeMismatch {
        expected: rows*cols,
        found: values.len(),
      })
    }
    Ok(Grid {
      rows,
      cols,
      values,
    })
  }
  /// Builds a Grid from a vec of equally long rows.
  ///
  /// Every row must be as long as the first, otherwise `ShapeMismatch`
  /// reports the first row that differs.
  pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    if let Some(row) = rows.iter().find(|row| row.len() != width) {
      return Err(GridError::ShapeMismatch {
        expected: width,
        found: row.len(),
      })
    }
    let values: Vec<T> = rows.into_iter().flatten().collect();
    Self::from_values(height, width, values)
  }
  /// Wraps values already laid out row by row; `values.len()` must be
  /// `rows * cols`.
  pub(crate) fn from_parts(rows: usize, cols: usize, values: Vec<T>) -> Self {
    debug_assert_eq!(rows*cols, values.len());
    Grid {
      rows,
      cols,
      values,
    }
  }
  /// Returns the value at a specific cell.
  pub fn get(&self, row: usize, col: usize) -> Result<T> {
    let index = self.offset(row, col)?;
    Ok(self.values[index])
  }
  /// Overwrites the value at a specific cell.
  pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
    let index = self.offset(row, col)?;
    self.values[index] = value;
    Ok(())
  }
  /// Adds `delta` to the value at a specific cell.
  pub fn add(&mut self, row: usize, col: usize, delta: T) -> Result<()> {
    let index = self.offset(row, col)?;
    self.values[index] += delta;
    Ok(())
  }
  /// Returns all the values in a specific row, ordered by column.
  pub fn get_row(&self, row: usize) -> Result<Vec<T>> {
    if row >= self.rows {
      return Err(self.out_of_bounds(row, 0))
    }
    Ok(self.values[row*self.cols..(row+1)*self.cols].to_vec())
  }
  /// Returns all the values in a specific column, ordered by row.
  pub fn get_column(&self, col: usize) -> Result<Vec<T>> {
    if col >= self.cols {
      return Err(self.out_of_bounds(0, col))
    }
    Ok((0..self.rows).map(|row| self.values[row*self.cols + col]).collect())
  }
  /// Produces the contents of the grid as a vec of its rows.
  pub fn to_rows(&self) -> Vec<Vec<T>> {
    if self.cols == 0 {
      return vec![Vec::new(); self.rows]
    }
    self.values.chunks(self.cols).map(|row| row.to_vec()).collect()
  }
  /// Iterates over every cell as `(row, col, value)`, row by row.
  pub fn cells(&self) -> impl Iterator<Item=(usize, usize, T)> + '_ {
    let cols = self.cols;
    self.values.iter().enumerate().map(move |(i, &v)| (i / cols, i % cols, v))
  }
  /// Sums every cell in `rect` by visiting each one.
  ///
  /// Each axis follows the same convention as the trees: `min == max + 1`
  /// is empty and sums to zero, `min > max + 1` is `InvalidRange`, and a
  /// non-empty axis must end inside the grid.
  pub fn sum_rect(&self, rect: Rect) -> Result<T> {
    let rows = self.check_axis(rect.min_row, rect.max_row, self.rows, |row| [row, rect.max_col])?;
    let cols = self.check_axis(rect.min_col, rect.max_col, self.cols, |col| [rect.max_row, col])?;
    let mut total = T::zero();
    if rows && cols {
      for row in rect.min_row..=rect.max_row {
        for col in rect.min_col..=rect.max_col {
          total += self.values[row*self.cols + col];
        }
      }
    }
    Ok(total)
  }
}
impl<T> Grid<T> {
  fn offset(&self, row: usize, col: usize) -> Result<usize> {
    if row >= self.rows || col >= self.cols {
      return Err(self.out_of_bounds(row, col))
    }
    Ok(row*self.cols + col)
  }
  /// Validates the inclusive range `lo..=hi` over `len` positions of one
  /// axis, returning false for the empty range.
  fn check_axis(&self, lo: usize, hi: usize, len: usize, cell: impl Fn(usize) -> [usize; 2]) -> Result<bool> {
    if lo > hi {
      if lo - hi > 1 {
        return Err(GridError::InvalidRange{lo, hi})
      }
      if lo > len {
        let [row, col] = cell(lo);
        return Err(self.out_of_bounds(row, col))
      }
      return Ok(false)
    }
    if hi >= len {
      let [row, col] = cell(hi);
      return Err(self.out_of_bounds(row, col))
    }
    Ok(true)
  }
  fn out_of_bounds(&self, row: usize, col: usize) -> GridError {
    GridError::OutOfBounds {
      row_col: [row, col],
      rows_cols: [self.rows, self.cols],
    }
  }
}
impl<T: Element> Default for Grid<T> {
  fn default() -> Self {
    Grid::new()
  }
}
