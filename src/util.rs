pub fn bit_iter(bits: u32) -> BitIter {
    BitIter { bits }
}

/// Iterates over indices of set bits, lowest first.
#[derive(Copy, Clone, Debug)]
pub struct BitIter {
    bits: u32,
}

impl Iterator for BitIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.bits == 0 {
            return None;
        }
        let tz = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(tz)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitIter {}

/// Number of significant bits, 0 for 0.
pub fn bit_length(n: u32) -> u32 {
    u32::BITS - n.leading_zeros()
}
