use super::*;
use crate::MAX_CODE_LENGTH;

/// Lazily enumerates every length-k sequence of distinct palette symbols,
/// lexicographically by palette position.
///
/// State is the current tuple of palette indices plus a bitmask of which
/// indices it uses. Advancing finds the rightmost slot that can move to a
/// larger unused index, then refills every slot after it with the smallest
/// unused indices. It is deterministic, restartable by constructing a new
/// iterator, and never materializes the space.
pub struct CodeIterator<'a> {
    palette: &'a Palette,
    length: usize,
    index: [usize; MAX_CODE_LENGTH],
    used: u64,
    done: bool,
}

impl<'a> CodeIterator<'a> {
    /// Starts at the lexicographically first code. The caller guarantees
    /// `length <= palette.len()` and `length <= MAX_CODE_LENGTH`.
    pub fn new(palette: &'a Palette, length: usize) -> Self {
        debug_assert!(length <= palette.len());
        debug_assert!(length <= MAX_CODE_LENGTH);
        let mut index = [0; MAX_CODE_LENGTH];
        (0..length).for_each(|i| index[i] = i);
        Self {
            palette,
            length,
            index,
            used: (0..length).fold(0, |mask, i| mask | 1 << i),
            done: false,
        }
    }
    /// k-permutations of n: n · (n−1) · … · (n−k+1)
    pub fn permutations(&self) -> usize {
        let n = self.palette.len();
        (0..self.length).map(|i| n - i).product()
    }

    fn current(&self) -> Code {
        let symbols = self.index[..self.length]
            .iter()
            .map(|&i| self.palette.symbols()[i])
            .collect::<Vec<Symbol>>();
        Code::try_from(symbols.as_slice()).expect("palette indices are distinct")
    }
    fn free(&self, from: usize) -> Option<usize> {
        (from..self.palette.len()).find(|&j| self.used & (1 << j) == 0)
    }
    fn advance(&mut self) {
        for slot in (0..self.length).rev() {
            self.used &= !(1 << self.index[slot]);
            if let Some(next) = self.free(self.index[slot] + 1) {
                self.index[slot] = next;
                self.used |= 1 << next;
                for tail in slot + 1..self.length {
                    let least = self.free(0).expect("palette is at least as long as code");
                    self.index[tail] = least;
                    self.used |= 1 << least;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for CodeIterator<'_> {
    type Item = Code;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else {
            let code = self.current();
            self.advance();
            Some(code)
        }
    }
}
