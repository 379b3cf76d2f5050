//! Adversarial two-agent Mastermind with epistemic belief tracking.
//!
//! Two agents each hold a secret code of distinct symbols and take turns
//! guessing. Every guess is scored against *both* secrets: the score against
//! the opponent is what the guesser wants to learn, the score against the
//! guesser's own code is what it unavoidably gives away.
//!
//! ## Modules
//!
//! - [`codes`] — symbols, codes, the enumerated code space, and feedback scoring
//! - [`belief`] — per-agent candidate sets with information gain and leak scores
//! - [`strategy`] — guess selection policies over a belief
//! - [`worlds`] — possible-worlds model used to cross-check belief updates
//! - [`gameplay`] — rules, players, and the alternating game loop

pub mod belief;
pub mod codes;
pub mod error;
pub mod gameplay;
pub mod strategy;
pub mod worlds;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Hartley entropies, information gains, and information leaks in bits.
pub type Entropy = f32;
/// Round counter for the alternating game loop.
pub type Epoch = usize;

// ============================================================================
// CODE SPACE
// ============================================================================
/// Default palette of symbols (blue, red, green, yellow, purple).
pub const PALETTE: &str = "brgyp";
/// Default code length. With `PALETTE` this yields 5·4·3 = 60 codes.
pub const CODE_LENGTH: usize = 3;
/// Upper bound on palette size, one bit per symbol in a `u64` mask.
pub const MAX_PALETTE: usize = 64;
/// Upper bound on code length so that `Code` stays `Copy` and inline.
pub const MAX_CODE_LENGTH: usize = 8;

// ============================================================================
// GAME LOOP
// ============================================================================
/// Default round cap before a game is declared a draw.
pub const MAX_ROUNDS: Epoch = 60;
/// Seed used by `Game::default()` for reproducible demonstration games.
pub const DEFAULT_SEED: u64 = 0x5EC12E7;

// ============================================================================
// STRATEGY POOL
// Weights spanning the extremes and middle of the gain/leak trade-off.
// ============================================================================
/// Balanced-strategy weights λ in U(g) = IG(g) − λ·IL(g).
pub const BALANCED_LAMBDAS: [Entropy; 5] = [0.5, 1.0, 2.0, 5.0, 10.0];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// The core never installs a logger on its own; drivers call this once.
#[cfg(feature = "server")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
