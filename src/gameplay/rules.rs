use crate::Epoch;
use crate::Error;
use crate::codes::CodeSpace;
use crate::codes::Palette;

/// Immutable game configuration, threaded through every constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub palette: Palette,
    pub length: usize,
    /// Round cap before the game is a draw.
    pub rounds: Epoch,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            length: crate::CODE_LENGTH,
            rounds: crate::MAX_ROUNDS,
        }
    }
}

impl TryFrom<&Rules> for CodeSpace {
    type Error = Error;
    fn try_from(rules: &Rules) -> Result<Self, Self::Error> {
        CodeSpace::new(&rules.palette, rules.length)
    }
}
