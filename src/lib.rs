#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

/*!
Indexed trees answering range-sum queries over an array that keeps changing.

Four independent structures share one contract, "an array supporting fast
range sums under updates", and differ in which updates are fast:

| Structure           | Update                      | Query                 |
|---------------------|-----------------------------|-----------------------|
| `FenwickTree`       | add a delta to one index    | prefix sum, range sum |
| `FenwickTree2D`     | add a delta to one cell     | rectangle sum         |
| `SegmentTree`       | overwrite one index         | range sum             |
| `LazySegmentTree`   | add a delta to a whole range| range sum             |

Every update and query is O(log n) (O(log rows * log cols) in 2D).

**Note:** `FenwickTree::update` *adds* while `SegmentTree::update`
*overwrites*. Both sides offer the other flavour under a different name
(`FenwickTree::set`, `SegmentTree::add`) so the two can be swapped.
*/

/*!
# How it Works:

## Segment Tree

The values `[1, 3, 5, 7, 9, 11]` are split in half recursively, and every
node stores the sum of its half:

```ignore
                  36 [0,5]
           _______/    \_______
      9 [0,2]                27 [3,5]
       /    \                 /    \
  4 [0,1]  5 [2,2]      16 [3,4]  11 [5,5]
   /   \                 /   \
 1     3                7     9
```

The tree lives in a flat vec where node `i` has children `2i+1` and `2i+2`.
A query for `[1, 3]` sums only the nodes whose range is fully inside it
(`3`, `5` and `7`), skips disjoint nodes, and splits the rest.

## Lazy Propagation

A range update stops at the highest nodes fully inside the range, fixes
their sums and leaves a *pending add* on their children. The next traversal
to pass through a child pushes the pending add one level further down
before reading anything.

## Fenwick Tree

Slot `p` (1-based) stores the sum of the `p & -p` values ending at `p`:

```ignore
values: 1   3   5   7   9   11
slot:   1   2   3   4   5   6
holds:  1   4   5   16  9   20
        [1] [1,2] [3] [1..4] [5] [5,6]
```

A prefix sum walks down by clearing the lowest set bit (`6 -> 4 -> 0`,
`20 + 16 = 36`); an update walks up by adding it (`3 -> 4 -> 8`). The 2D
tree nests the same walk on rows and columns.
*/

/*!
# Errors

Every operation validates its arguments before changing anything and
reports problems as a [`TreeError`](error::TreeError). Inclusive ranges
`(lo, hi)` with `lo == hi + 1` are the empty range: queries over it return
zero and updates over it do nothing.
*/

pub use fenwick::{FenwickTree, FenwickTree2D, Rect};
pub use segment::{LazySegmentTree, SegmentTree};
pub use element::Element;
pub use grid::Grid;
pub use window::SlidingWindow;

/// Library error types.
pub mod error;

/// The numeric contract shared by every tree.
pub mod element;

/// `Grid` struct.
pub mod grid;

/// `FenwickTree` and `FenwickTree2D`.
pub mod fenwick;

/// `SegmentTree` and `LazySegmentTree`.
pub mod segment;

/// `SlidingWindow` struct.
pub mod window;

mod bounds;

#[cfg(test)]
mod unit_tests;
