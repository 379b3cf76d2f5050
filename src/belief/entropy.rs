use crate::Entropy;

/// Hartley entropy of a uniform belief over `n` candidates, in bits.
/// Zero for a settled (or empty) belief.
pub fn hartley(n: usize) -> Entropy {
    match n {
        0 | 1 => 0.0,
        n => (n as Entropy).log2(),
    }
}
