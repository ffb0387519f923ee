use itertools::Itertools as _;
use thiserror::Error;

use crate::util::bit_iter;

/// Longest run of zero bits enclosed by ones on both sides.
///
/// Zeros below the lowest set bit are not enclosed and never count.
/// Returns 0 for numbers with fewer than two set bits.
pub fn binary_gap(n: u32) -> u32 {
    scan_with(n, |_| {}).largest_gap()
}

/// Signed entry point, rejects negative input.
pub fn solution(n: i32) -> Result<u32, GapError> {
    let n = u32::try_from(n).map_err(|_| GapError::Negative(n))?;
    Ok(binary_gap(n))
}

/// Lengths of all enclosed zero runs, lowest first.
///
/// Adjacent set bits produce a zero-length run.
pub fn gaps(n: u32) -> impl Iterator<Item = u32> {
    bit_iter(n).tuple_windows().map(|(a, b)| b - a - 1)
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GapError {
    #[error("Binary gap is undefined for negative input {0}")]
    Negative(i32),
}

/// Bit-by-bit gap tracking, fed from the least significant bit up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GapScanner {
    largest_gap: u32,
    current_gap: u32,
    seen_one: bool,
}

impl GapScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bit(&mut self, bit: bool) {
        if !bit {
            if self.seen_one {
                self.current_gap += 1;
            }
            return;
        }

        if self.seen_one {
            self.largest_gap = self.largest_gap.max(self.current_gap);
            self.current_gap = 0;
        }
        self.seen_one = true;
    }

    pub fn largest_gap(&self) -> u32 {
        self.largest_gap
    }

    /// Zeros counted since the last set bit, not yet known to be enclosed.
    pub fn current_gap(&self) -> u32 {
        self.current_gap
    }

    pub fn seen_one(&self) -> bool {
        self.seen_one
    }
}

/// Scanner state right after a single bit was applied.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitStep {
    pub bit: bool,
    pub state: GapScanner,
}

/// Runs the scanner over every significant bit of `n`, reporting each step.
pub(crate) fn scan_with(mut n: u32, mut trace: impl FnMut(BitStep)) -> GapScanner {
    let mut scanner = GapScanner::new();
    while n != 0 {
        let bit = n & 1 == 1;
        scanner.push_bit(bit);
        trace(BitStep {
            bit,
            state: scanner,
        });
        n >>= 1;
    }
    scanner
}
