use super::*;
use crate::Error;
use crate::MAX_CODE_LENGTH;

/// Every valid code for a palette and length, in enumeration order.
///
/// Enumeration order is the tie-break order for every strategy, so it is
/// fixed once here and preserved by every filter downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeSpace {
    palette: Palette,
    length: usize,
    codes: Vec<Code>,
}

impl CodeSpace {
    /// Rejects configurations that cannot form a single distinct-symbol code.
    pub fn new(palette: &Palette, length: usize) -> Result<Self, Error> {
        if length == 0 || length > palette.len() || length > MAX_CODE_LENGTH {
            return Err(Error::Length {
                palette: palette.len(),
                length,
            });
        }
        let codes = CodeIterator::new(palette, length).collect::<Vec<Code>>();
        log::trace!("{:<32}{:<32}", "enumerated code space", codes.len());
        Ok(Self {
            palette: palette.clone(),
            length,
            codes,
        })
    }
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    pub fn length(&self) -> usize {
        self.length
    }
    pub fn len(&self) -> usize {
        self.codes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }
    /// Whether a code could occur in this game: right length and every
    /// symbol drawn from the palette. Distinctness holds for any `Code`.
    pub fn contains(&self, code: &Code) -> bool {
        code.len() == self.length && code.symbols().iter().all(|s| self.palette.contains(s))
    }
    /// Uniformly random code, drawn from an explicit source of randomness.
    pub fn random<R>(&self, rng: &mut R) -> Code
    where
        R: rand::Rng + ?Sized,
    {
        use rand::prelude::IndexedRandom;
        self.codes
            .choose(rng)
            .copied()
            .expect("code space is never empty")
    }
}

impl Default for CodeSpace {
    fn default() -> Self {
        Self::new(&Palette::default(), crate::CODE_LENGTH).expect("default rules are valid")
    }
}

impl<'a> IntoIterator for &'a CodeSpace {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;
    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
