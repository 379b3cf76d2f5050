//! Per-agent beliefs and the information measures strategies optimize.
//!
//! Every surviving candidate is treated as equally likely, so entropy is
//! Hartley entropy `log2 |S|` and information is measured as the expected
//! drop in it.
mod belief;
mod entropy;
mod partition;
mod score;

pub use belief::*;
pub use entropy::*;
pub use partition::*;
pub use score::*;
