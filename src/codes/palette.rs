use super::*;
use crate::Error;
use crate::MAX_PALETTE;
use crate::PALETTE;

/// The ordered, repetition-free set of symbols codes are drawn from.
///
/// Palette order is enumeration order: the code space lists codes
/// lexicographically by each symbol's position here, not by character value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Symbol>);

impl Palette {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }
    /// Position of a symbol in enumeration order.
    pub fn index(&self, symbol: &Symbol) -> Option<usize> {
        self.0.iter().position(|s| s == symbol)
    }
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.index(symbol).is_some()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::try_from(PALETTE).expect("default palette is well formed")
    }
}

impl TryFrom<Vec<Symbol>> for Palette {
    type Error = Error;
    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        if symbols.is_empty() {
            return Err(Error::Empty);
        }
        if symbols.len() > MAX_PALETTE {
            return Err(Error::Wide(symbols.len()));
        }
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(Error::Duplicate(*symbol));
            }
        }
        Ok(Self(symbols))
    }
}

/// str isomorphism, one symbol per character
impl TryFrom<&str> for Palette {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let symbols = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Symbol::try_from)
            .collect::<Result<Vec<Symbol>, _>>()?;
        Ok(Self::try_from(symbols)?)
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{}", s))
    }
}
