use super::*;
use crate::MAX_CODE_LENGTH;

/// An ordered sequence of distinct symbols: a secret or a guess.
///
/// Stored inline with blank padding so that `Code` is `Copy` and cheap to
/// hash, compare, and bucket. The derived `Ord` is a storage order used only
/// for set membership; enumeration order is defined by the [`CodeSpace`].
///
/// Codes carry no palette. Whether a code belongs to a particular game is a
/// question for [`CodeSpace::contains`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Code {
    symbols: [Symbol; MAX_CODE_LENGTH],
    length: u8,
}

impl Code {
    pub fn len(&self) -> usize {
        self.length as usize
    }
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols[..self.len()]
    }
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols().contains(symbol)
    }
    pub fn get(&self, i: usize) -> Option<Symbol> {
        self.symbols().get(i).copied()
    }
}

/// distinct-symbol sequence isomorphism
impl TryFrom<&[Symbol]> for Code {
    type Error = anyhow::Error;
    fn try_from(symbols: &[Symbol]) -> Result<Self, Self::Error> {
        if symbols.len() > MAX_CODE_LENGTH {
            return Err(anyhow::anyhow!(
                "code of length {} exceeds {}",
                symbols.len(),
                MAX_CODE_LENGTH
            ));
        }
        if let Some(i) = (1..symbols.len()).find(|&i| symbols[..i].contains(&symbols[i])) {
            return Err(anyhow::anyhow!("code repeats symbol {}", symbols[i]));
        }
        let mut inline = [Symbol::BLANK; MAX_CODE_LENGTH];
        inline[..symbols.len()].copy_from_slice(symbols);
        Ok(Self {
            symbols: inline,
            length: symbols.len() as u8,
        })
    }
}

/// str isomorphism, one symbol per character
impl TryFrom<&str> for Code {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let symbols = s
            .trim()
            .chars()
            .map(Symbol::try_from)
            .collect::<Result<Vec<Symbol>, _>>()?;
        Self::try_from(symbols.as_slice())
    }
}
impl TryFrom<String> for Code {
    type Error = anyhow::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.symbols().iter().try_for_each(|s| write!(f, "{}", s))
    }
}
