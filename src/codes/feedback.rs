use super::*;
use crate::Error;

/// Score of a guess against a code: `exact` symbols in the right position,
/// `partial` symbols present elsewhere.
///
/// Because codes never repeat a symbol, the number of shared symbols is just
/// the size of the intersection of their symbol sets, and the partial count
/// is that size minus the exact count. No pairing pass is needed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Feedback {
    pub exact: u8,
    pub partial: u8,
}

impl Feedback {
    /// Positions where guess and code agree.
    pub fn exact(guess: &Code, code: &Code) -> u8 {
        guess
            .symbols()
            .iter()
            .zip(code.symbols())
            .filter(|(g, c)| g == c)
            .count() as u8
    }
    /// Shared symbols that sit in different positions.
    pub fn partial(guess: &Code, code: &Code) -> u8 {
        Self::shared(guess, code) - Self::exact(guess, code)
    }
    /// Size of the intersection of the two symbol sets.
    fn shared(guess: &Code, code: &Code) -> u8 {
        guess
            .symbols()
            .iter()
            .filter(|s| code.contains(s))
            .count() as u8
    }
    /// The score of any code against itself.
    pub fn solved(length: usize) -> Self {
        Self {
            exact: length as u8,
            partial: 0,
        }
    }
    pub fn is_solved(&self, length: usize) -> bool {
        *self == Self::solved(length)
    }
    /// Rejects tuples no pair of length-`length` codes could produce
    /// under the `exact + partial <= length` bound.
    pub fn validate(self, length: usize) -> Result<Self, Error> {
        match self.exact as usize + self.partial as usize <= length {
            true => Ok(self),
            false => Err(Error::Feedback {
                feedback: self,
                length,
            }),
        }
    }
}

/// the oracle: score a guess against a code
impl From<(&Code, &Code)> for Feedback {
    fn from((guess, code): (&Code, &Code)) -> Self {
        debug_assert!(guess.len() == code.len());
        Self {
            exact: Self::exact(guess, code),
            partial: Self::partial(guess, code),
        }
    }
}

impl From<(u8, u8)> for Feedback {
    fn from((exact, partial): (u8, u8)) -> Self {
        Self { exact, partial }
    }
}
impl From<Feedback> for (u8, u8) {
    fn from(feedback: Feedback) -> Self {
        (feedback.exact, feedback.partial)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.exact, self.partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::try_from(s).unwrap()
    }

    #[test]
    fn swapped_pair() {
        let feedback = Feedback::from((&code("bgr"), &code("brg")));
        assert!(feedback == Feedback::from((1, 2)));
    }

    #[test]
    fn disjoint_codes() {
        let feedback = Feedback::from((&code("brg"), &code("ypo")));
        assert!(feedback == Feedback::from((0, 0)));
    }

    #[test]
    fn self_feedback_is_solved() {
        let space = CodeSpace::new(&Palette::default(), 3).unwrap();
        for c in space.iter() {
            assert!(Feedback::from((c, c)).is_solved(3));
        }
    }

    #[test]
    fn bounded_by_length() {
        let space = CodeSpace::new(&Palette::default(), 3).unwrap();
        for g in space.iter() {
            for c in space.iter() {
                let feedback = Feedback::from((g, c));
                assert!(feedback.exact <= 3);
                assert!(feedback.exact + feedback.partial <= 3);
                assert!(feedback.validate(3).is_ok());
            }
        }
    }

    #[test]
    fn swapping_roles_preserves_counts() {
        let (g, c) = (code("bry"), code("ybg"));
        let forward = Feedback::from((&g, &c));
        let reverse = Feedback::from((&c, &g));
        assert!(forward == Feedback::from((0, 2)));
        assert!(forward == reverse);
    }

    #[test]
    fn validate_rejects_overflow() {
        let error = Feedback::from((2, 2)).validate(3).unwrap_err();
        assert!(error.is_misuse());
        assert!(Feedback::from((0, 3)).validate(3).is_ok());
    }
}
