use num_traits::{NumCast, Zero};
use std::fmt::Debug;
use std::ops::{AddAssign, Mul, Sub, SubAssign};

/// The values a tree can aggregate.
///
/// Implemented for every ordered type with an additive identity that can be
/// added, subtracted and scaled by a count, which covers all primitive
/// integers and floats. Unsigned types work everywhere a delta is never
/// negative; overwriting a value with a smaller one goes through `-=`
/// rather than a negative delta.
///
/// Arithmetic follows the element type: integer overflow panics in debug
/// builds and wraps in release builds, exactly as a plain `+` would.
pub trait Element:
  Copy + Debug + PartialOrd + Zero + Sub<Output = Self> + Mul<Output = Self> + AddAssign + SubAssign + NumCast
{
  /// `self` added to itself `times` times, or `None` if `times` is not
  /// representable in `Self`.
  fn repeated(self, times: usize) -> Option<Self> {
    let times: Self = NumCast::from(times)?;
    Some(self * times)
  }
}
impl<T> Element for T where
  T: Copy + Debug + PartialOrd + Zero + Sub<Output = T> + Mul<Output = T> + AddAssign + SubAssign + NumCast
{}
