/// A single peg colour, written as one printable character.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Symbol(char);

impl Symbol {
    /// Padding for unused slots of an inline `Code`. Never a palette member.
    pub const BLANK: Self = Self('\0');
}

impl TryFrom<char> for Symbol {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            c if c.is_whitespace() || c.is_control() => {
                Err(anyhow::anyhow!("symbol must be printable, got {:?}", c))
            }
            c => Ok(Self(c)),
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_only() {
        assert!(Symbol::try_from('b').is_ok());
        assert!(Symbol::try_from(' ').is_err());
        assert!(Symbol::try_from('\0').is_err());
    }
}
