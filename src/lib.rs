//! Binary gap: the longest run of zero bits enclosed by ones in a number's
//! binary representation.

mod gap;
pub mod util;

pub use gap::{GapError, GapScanner, binary_gap, gaps, solution};
