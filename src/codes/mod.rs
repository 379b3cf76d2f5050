//! Codes of distinct symbols and the feedback oracle that scores them.
//!
//! - [`Symbol`] — one colour peg, a printable character
//! - [`Palette`] — the ordered set of symbols codes are drawn from
//! - [`Code`] — a fixed-length sequence of distinct symbols, stored inline
//! - [`CodeSpace`] — every valid code, in lexicographic palette order
//! - [`Feedback`] — `(exact, partial)` score of a guess against a code
mod code;
mod feedback;
mod iterator;
mod palette;
mod space;
mod symbol;

pub use code::*;
pub use feedback::*;
pub use iterator::*;
pub use palette::*;
pub use space::*;
pub use symbol::*;
