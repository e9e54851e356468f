//! Dice and unit-interval draws over the run's ChaCha stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Sum of `count` independent uniform draws over `1..=sides`.
pub(super) fn roll_dice(rng: &mut ChaCha8Rng, count: u32, sides: u32) -> u32 {
    (0..count).map(|_| rng.next_u32() % sides + 1).sum()
}

/// Uniform draw over `[0, 1)` with 53 bits of precision.
pub(super) fn unit_interval(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform index into a non-empty collection.
pub(super) fn pick_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    rng.next_u64() as usize % len
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn three_d6_stays_inside_3_to_18() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let roll = roll_dice(&mut rng, 3, 6);
            assert!((3..=18).contains(&roll), "3d6 rolled {roll}");
        }
    }

    #[test]
    fn unit_interval_stays_inside_half_open_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let value = unit_interval(&mut rng);
            assert!((0.0..1.0).contains(&value), "unit draw was {value}");
        }
    }

    #[test]
    fn pick_index_stays_inside_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert!(pick_index(&mut rng, 6) < 6);
        }
    }
}
