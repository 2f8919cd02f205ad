//! # Game Mathematics
//!
//! The deterministic bucket function behind every "random" outcome.

/// Multiplier applied to the seed before taking the sine.
const SEED_SCALE: f64 = 12.9898;

/// Amplifier applied to the sine before keeping the fractional part.
const SINE_SCALE: f64 = 43758.5453;

/// Maps `seed` to a bucket in `[0, modulus)`.
///
/// Computes `floor(frac(sin(seed * 12.9898) * 43758.5453) * modulus)`. The
/// result is a pure function of its arguments, so the same step counter
/// always yields the same outcome. A zero modulus yields zero.
///
/// # Examples
///
/// ```
/// use labyrinth::pseudo_random;
///
/// assert_eq!(pseudo_random(1, 10), 9);
/// assert_eq!(pseudo_random(1, 10), pseudo_random(1, 10));
/// assert!(pseudo_random(42, 3) < 3);
/// ```
pub fn pseudo_random(seed: u64, modulus: usize) -> usize {
    debug_assert!(modulus > 0, "pseudo_random called with zero modulus");
    if modulus == 0 {
        return 0;
    }

    let value = (seed as f64 * SEED_SCALE).sin() * SINE_SCALE;
    let fractional = value - value.floor();
    let bucket = (fractional * modulus as f64) as usize;

    // frac is < 1.0, but the product can round up to `modulus` itself
    bucket.min(modulus - 1)
}
