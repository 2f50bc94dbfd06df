use {
  log::{debug, trace},
  serde::{Deserialize, Serialize},
  std::convert::TryFrom,
  crate::{
    bounds,
    element::Element,
    error::TreeError as Error,
    fenwick::*,
    grid::Grid,
  },
};

type Result<T> = std::result::Result<T, Error>;

/// A binary-indexed tree over a `rows` x `cols` grid of values.
///
/// Both axes use the same lowest-set-bit walk as [`FenwickTree`], nested,
/// so every operation costs O(log rows * log cols).
///
/// ```
/// fn main() -> Result<(), range_sum_trees::error::TreeError> {
///   use range_sum_trees::FenwickTree2D;
///   let mut engagement = FenwickTree2D::new(4, 4);
///   engagement.update(0, 0, 150)?;
///   engagement.update(0, 1, 100)?;
///   engagement.update(1, 0, 120)?;
///   engagement.update(1, 1, 200)?;
///   engagement.update(3, 3, 50)?;
///   assert_eq!(570, engagement.range_sum(0, 0, 1, 1)?);
///   engagement.update(1, 2, 1000)?;
///   assert_eq!(570, engagement.range_sum(0, 0, 1, 1)?);
///   assert_eq!(1620, engagement.range_sum(0, 0, 3, 3)?);
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridSnapshot<T>")]
pub struct FenwickTree2D<T> {
  rows: usize,
  cols: usize,
  /// `(rows + 1) x (cols + 1)` slots, 1-based on both axes. Row 0 and
  /// column 0 are unused.
  tree: Vec<Vec<T>>,
}

/* Public */
impl<T: Element> FenwickTree2D<T> {
  /// Returns a tree over a `rows` x `cols` grid of zeroes.
  pub fn new(rows: usize, cols: usize) -> Self {
    debug!("2d fenwick tree: {}x{} zeroed slots", rows, cols);
    FenwickTree2D {
      rows,
      cols,
      tree: vec![vec![T::zero(); cols+1]; rows+1],
    }
  }
  /// Builds a tree holding the contents of `grid` in O(rows * cols).
  pub fn from_grid(grid: &Grid<T>) -> Self {
    let (rows, cols) = (grid.rows, grid.cols);
    let mut tree = vec![vec![T::zero(); cols+1]; rows+1];
    for (row, col, value) in grid.cells() {
      tree[row+1][col+1] = value;
    }
    /* Each axis is independent: fold along the columns, then the rows */
    for slots in tree.iter_mut().skip(1) {
      for col in 1..=cols {
        let up = parent(col);
        if up <= cols {
          let partial = slots[col];
          slots[up] += partial;
        }
      }
    }
    for row in 1..=rows {
      let up = parent(row);
      if up <= rows {
        for col in 1..=cols {
          let partial = tree[row][col];
          tree[up][col] += partial;
        }
      }
    }
    debug!("2d fenwick tree: built from a {}x{} grid", rows, cols);
    FenwickTree2D {
      rows,
      cols,
      tree,
    }
  }
  /// Number of rows.
  pub fn rows(&self) -> usize {
    self.rows
  }
  /// Number of columns.
  pub fn cols(&self) -> usize {
    self.cols
  }
  /// True if the grid has no cells.
  pub fn is_empty(&self) -> bool {
    self.rows == 0 || self.cols == 0
  }
  /// Adds `delta` to the value at `(row, col)`.
  pub fn update(&mut self, row: usize, col: usize, delta: T) -> Result<()> {
    self.check_cell(row, col)?;
    trace!("2d fenwick update: ({}, {}) += {:?}", row, col, delta);
    self.propagate(row, col, |slot| *slot += delta);
    Ok(())
  }
  /// Overwrites the value at `(row, col)`, returning the value it replaced.
  pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<T> {
    let old = self.get(row, col)?;
    if value >= old {
      let delta = value - old;
      self.propagate(row, col, |slot| *slot += delta);
    }
    else {
      let delta = old - value;
      self.propagate(row, col, |slot| *slot -= delta);
    }
    Ok(old)
  }
  /// Returns the current value at `(row, col)`.
  pub fn get(&self, row: usize, col: usize) -> Result<T> {
    self.check_cell(row, col)?;
    Ok(self.rect_sum(Rect::new(row, row, col, col)))
  }
  /// Sum over the rectangle `[0, row] x [0, col]`.
  pub fn prefix_sum(&self, row: usize, col: usize) -> Result<T> {
    self.check_cell(row, col)?;
    trace!("2d fenwick prefix sum: ..=({}, {})", row, col);
    Ok(self.accumulate(row+1, col+1))
  }
  /// Sum over the rectangle `[r1, r2] x [c1, c2]`.
  ///
  /// Either axis may be the empty range (`r1 == r2 + 1` or
  /// `c1 == c2 + 1`), in which case the sum is zero.
  pub fn range_sum(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> Result<T> {
    self.sum_rect(Rect::new(r1, r2, c1, c2))
  }
  /// Sum over every cell of `rect`.
  pub fn sum_rect(&self, rect: Rect) -> Result<T> {
    let rows = bounds::check_inclusive(rect.min_row, rect.max_row, self.rows)
      .map_err(|e| self.axis_error(e, |index| [index, rect.max_col]))?;
    let cols = bounds::check_inclusive(rect.min_col, rect.max_col, self.cols)
      .map_err(|e| self.axis_error(e, |index| [rect.max_row, index]))?;
    trace!("2d fenwick range sum: {:?}", rect);
    match (rows, cols) {
      (Some(_), Some(_)) => Ok(self.rect_sum(rect)),
      _ => Ok(T::zero()),
    }
  }
  /// Sum of every value in the grid.
  pub fn total(&self) -> T {
    self.accumulate(self.rows, self.cols)
  }
  /// Reconstructs the grid of current values.
  pub fn to_grid(&self) -> Grid<T> {
    let cols = self.cols;
    let values = (0..self.rows)
      .flat_map(|row| (0..cols).map(move |col| Rect::new(row, row, col, col)))
      .map(|cell| self.rect_sum(cell))
      .collect();
    Grid::from_parts(self.rows, self.cols, values)
  }
}

/* Private */
impl<T: Element> FenwickTree2D<T> {
  fn check_cell(&self, row: usize, col: usize) -> Result<()> {
    if self.is_empty() {
      return Err(Error::EmptyStructure)
    }
    if row >= self.rows || col >= self.cols {
      return Err(Error::InvalidCell {
        row_col: [row, col],
        rows_cols: [self.rows, self.cols],
      })
    }
    Ok(())
  }
  /// Turns a one-axis index error into a cell error for this grid.
  fn axis_error(&self, error: Error, cell: impl Fn(usize) -> [usize; 2]) -> Error {
    match error {
      Error::InvalidIndex{index, ..} => Error::InvalidCell {
        row_col: cell(index),
        rows_cols: [self.rows, self.cols],
      },
      other => other,
    }
  }
  fn propagate(&mut self, row: usize, col: usize, mut apply: impl FnMut(&mut T)) {
    let mut i = row + 1;
    while i <= self.rows {
      let mut j = col + 1;
      while j <= self.cols {
        apply(&mut self.tree[i][j]);
        j = parent(j);
      }
      i = parent(i);
    }
  }
  /// Sum over the first `row_count` rows and `col_count` columns.
  fn accumulate(&self, row_count: usize, col_count: usize) -> T {
    let mut sum = T::zero();
    let mut i = row_count;
    while i > 0 {
      let mut j = col_count;
      while j > 0 {
        sum += self.tree[i][j];
        j = predecessor(j);
      }
      i = predecessor(i);
    }
    sum
  }
  /// Inclusion-exclusion over four prefix rectangles. `rect` must be
  /// non-empty and in bounds.
  fn rect_sum(&self, rect: Rect) -> T {
    let (r1, r2) = (rect.min_row, rect.max_row + 1);
    let (c1, c2) = (rect.min_col, rect.max_col + 1);
    let mut sum = self.accumulate(r2, c2);
    sum += self.accumulate(r1, c1);
    sum -= self.accumulate(r1, c2);
    sum -= self.accumulate(r2, c1);
    sum
  }
}

/// Serialized form of a [`FenwickTree2D`], checked before it is trusted.
#[derive(Deserialize)]
pub struct GridSnapshot<T> {
  rows: usize,
  cols: usize,
  tree: Vec<Vec<T>>,
}
impl<T> TryFrom<GridSnapshot<T>> for FenwickTree2D<T> {
  type Error = Error;
  fn try_from(snapshot: GridSnapshot<T>) -> Result<Self> {
    let GridSnapshot{rows, cols, tree} = snapshot;
    if tree.len() != rows + 1 {
      return Err(Error::InvalidSnapshot{expected: rows + 1, found: tree.len()})
    }
    if let Some(slots) = tree.iter().find(|slots| slots.len() != cols + 1) {
      return Err(Error::InvalidSnapshot{expected: cols + 1, found: slots.len()})
    }
    Ok(FenwickTree2D{rows, cols, tree})
  }
}

impl<T: Element> From<&Grid<T>> for FenwickTree2D<T> {
  fn from(grid: &Grid<T>) -> Self {
    FenwickTree2D::from_grid(grid)
  }
}

/* Public Interface Tests */
