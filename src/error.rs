/*!
These are all the custom errors that this library could return.

Every operation validates its arguments before touching a structure, so
an error always means the structure is exactly as it was before the call:
- InvalidIndex / InvalidCell:
  - A point or range endpoint lies outside the structure's fixed bounds.
- InvalidRange:
  - An inclusive range `(lo, hi)` with `lo > hi + 1`. The range `lo == hi + 1`
    is the empty range and is never an error.
- EmptyStructure:
  - A point operation was attempted on a structure of length zero.
- InvalidSnapshot:
  - A deserialized tree whose backing arrays do not fit its length.
*/

/// Errors produced as a result of interactions with the range-sum trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
  /// Produced when an index is outside `0..len`.
  InvalidIndex {
    /// The index that was passed in.
    index: usize,
    /// The number of elements the structure indexes over.
    len: usize,
  },
  /// Produced when a `(row, col)` coordinate lies outside a 2D structure.
  InvalidCell {
    ///
    row_col: [usize; 2],
    /// Number of rows and columns of the structure.
    rows_cols: [usize; 2],
  },
  /// Produced when an inclusive range has `lo > hi + 1`.
  InvalidRange {
    ///
    lo: usize,
    ///
    hi: usize,
  },
  /// Produced when a point operation is attempted on a structure with no elements.
  EmptyStructure,
  /// Produced when the length of a node's span cannot be represented by the
  /// element type, so a pending add cannot be scaled to the whole span.
  SpanOverflow {
    ///
    len: usize,
  },
  /// Produced when a deserialized tree has backing arrays of the wrong size
  /// for the number of values it claims to hold.
  InvalidSnapshot {
    /// Slots a tree of the stored length needs.
    expected: usize,
    /// Slots the snapshot holds.
    found: usize,
  },
  /// Propogation of a GridError.
  GridError {
    ///
    source: Box<GridError>,
  },
}
impl std::error::Error for TreeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use TreeError::*;
    match self {
      GridError{source} => Some(source),
      _ => None,
    }
  }
}
impl std::fmt::Display for TreeError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use TreeError::*;
    match self {
      InvalidIndex{index, len} => write!(f, "Attempt to access index {} of a structure holding {} elements", index, len),
      InvalidCell {
        row_col: [row, col],
        rows_cols: [rows, cols],
      } => write!(f, "Attempt to access cell ({}, {}) of a {}x{} structure", row, col, rows, cols),
      InvalidRange{lo, hi} => write!(f, "The range [{}, {}] is inverted", lo, hi),
      EmptyStructure => write!(f, "Attempt to access an element of an empty structure"),
      SpanOverflow{len} => write!(f, "A span of {} elements cannot be represented by the element type", len),
      InvalidSnapshot{expected, found} => write!(f, "Snapshot holds {} slots but its length needs {}", found, expected),
      GridError{source} => write!(f, "{}", source),
    }
  }
}
impl From<GridError> for TreeError {
  fn from(error: GridError) -> Self {
    TreeError::GridError {
      source: Box::new(error)
    }
  }
}

/// Errors produced as a result of interactions with the Grid object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
  /// Produced when a user attempts to read or write a cell outside of the grid.
  OutOfBounds {
    ///
    row_col: [usize; 2],
    ///
    rows_cols: [usize; 2],
  },
  /// Produced when the values passed in do not fill the grid exactly, or
  /// when one row is longer or shorter than the first.
  ShapeMismatch {
    /// Number of values needed: `rows * cols`, or the width of a row.
    expected: usize,
    /// Number of values that were supplied.
    found: usize,
  },
  /// Produced when a rectangle has `min > max + 1` on either axis.
  InvalidRange {
    ///
    lo: usize,
    ///
    hi: usize,
  },
}
impl std::error::Error for GridError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    None
  }
}
impl std::fmt::Display for GridError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use GridError::*;
    match self {
      OutOfBounds {
        row_col: [row, col],
        rows_cols: [rows, cols],
      } => write!(f, "Attempt to access cell ({}, {}) which is not in the range of a {}x{} grid", row, col, rows, cols),
      ShapeMismatch{expected, found} => write!(f, "Expected {} values to fill the grid but found {}", expected, found),
      InvalidRange{lo, hi} => write!(f, "The range [{}, {}] is inverted", lo, hi),
    }
  }
}
