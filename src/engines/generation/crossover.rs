use crate::engines::generation::genome::Genome;
use rand::Rng;

/// Default probability that a mating pair recombines
pub const CROSSOVER_RATE: f64 = 0.7;

/// Smallest and largest bit offset a channel can be split at
pub const MIN_SPLIT: u32 = 1;
pub const MAX_SPLIT: u32 = 7;

/// Split two channel bytes at bit offset `k`.
///
/// The mask `0xFF << k` selects the high `8 - k` bits. The first child takes
/// the high bits of `a` and the low bits of `b`; the second child takes the
/// complementary halves. Every bit of the pair comes from one of the parents,
/// so `c ^ d == a ^ b`.
pub fn split_channel(a: u8, b: u8, k: u32) -> (u8, u8) {
    debug_assert!((MIN_SPLIT..=MAX_SPLIT).contains(&k));
    let mask = 0xFFu8 << k;
    let c = (mask & a) | (!mask & b);
    let d = (!mask & a) | (mask & b);
    (c, d)
}

/// Bit-split recombination of every channel of every pixel, each with its own
/// uniformly drawn split offset.
///
/// Panics if the parents differ in dimensions.
pub fn recombine<R: Rng>(a: &Genome, b: &Genome, rng: &mut R) -> (Genome, Genome) {
    assert_eq!(
        a.dimensions(),
        b.dimensions(),
        "parents must share dimensions"
    );

    let mut c = a.clone();
    let mut d = b.clone();

    for (cc, dc) in c.channels_mut().iter_mut().zip(d.channels_mut().iter_mut()) {
        // `cc` still holds parent A's byte and `dc` parent B's
        let k = rng.gen_range(MIN_SPLIT..=MAX_SPLIT);
        let (x, y) = split_channel(*cc, *dc, k);
        *cc = x;
        *dc = y;
    }

    (c, d)
}

/// Mate two parents: recombine with probability `crossover_rate`, otherwise
/// return copies of the parents unchanged.
pub fn mate<R: Rng>(
    a: &Genome,
    b: &Genome,
    crossover_rate: f64,
    rng: &mut R,
) -> (Genome, Genome) {
    if rng.gen::<f64>() < crossover_rate {
        recombine(a, b, rng)
    } else {
        (a.clone(), b.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_split_channel_known_values() {
        // k = 4: high nibble from a, low nibble from b
        assert_eq!(split_channel(0xAB, 0xCD, 4), (0xAD, 0xCB));
        // k = 1: only the lowest bit is swapped
        assert_eq!(split_channel(0b1111_1110, 0b0000_0001, 1), (0xFF, 0x00));
        // k = 7: only the highest bit stays
        assert_eq!(split_channel(0x80, 0x7F, 7), (0xFF, 0x00));
    }

    #[test]
    fn test_split_channel_preserves_xor_for_all_inputs() {
        for k in MIN_SPLIT..=MAX_SPLIT {
            let mask = 0xFFu8 << k;
            for a in 0..=255u8 {
                for b in (0..=255u8).step_by(17) {
                    let (c, d) = split_channel(a, b, k);
                    assert_eq!(c ^ d, a ^ b);
                    // Bits above the split come from the same parent positionally
                    assert_eq!(c & mask, a & mask);
                    assert_eq!(d & mask, b & mask);
                    assert_eq!(c & !mask, b & !mask);
                    assert_eq!(d & !mask, a & !mask);
                }
            }
        }
    }

    #[test]
    fn test_recombine_invents_no_bits() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = Genome::random(5, 5, &mut rng);
        let b = Genome::random(5, 5, &mut rng);
        let (c, d) = recombine(&a, &b, &mut rng);

        assert_eq!(c.dimensions(), a.dimensions());
        for i in 0..a.channels().len() {
            let (pa, pb) = (a.channels()[i], b.channels()[i]);
            let (cc, dc) = (c.channels()[i], d.channels()[i]);
            assert_eq!(cc ^ dc, pa ^ pb);
            // Where the parents agree, both children carry the same bit
            let agree = !(pa ^ pb);
            assert_eq!(cc & agree, pa & agree);
            assert_eq!(dc & agree, pa & agree);
        }
    }

    #[test]
    fn test_identical_parents_produce_clones() {
        let mut rng = StdRng::seed_from_u64(12);
        let a = Genome::random(3, 3, &mut rng);
        let (c, d) = recombine(&a, &a, &mut rng);
        assert_eq!(c, a);
        assert_eq!(d, a);
    }

    #[test]
    fn test_zero_rate_passes_parents_through() {
        let mut rng = StdRng::seed_from_u64(13);
        let a = Genome::random(4, 2, &mut rng);
        let b = Genome::random(4, 2, &mut rng);
        for _ in 0..20 {
            let (c, d) = mate(&a, &b, 0.0, &mut rng);
            assert_eq!(c, a);
            assert_eq!(d, b);
        }
    }

    #[test]
    fn test_full_rate_always_recombines() {
        let mut rng = StdRng::seed_from_u64(14);
        let a = Genome::filled(8, 8, crate::types::Rgb::new(0xFF, 0xFF, 0xFF));
        let b = Genome::new(8, 8);
        let (c, _) = mate(&a, &b, 1.0, &mut rng);
        // Every split keeps at least one high bit of a and one low bit of b
        assert!(c.channels().iter().all(|&ch| ch != 0xFF && ch != 0x00));
    }

    #[test]
    #[should_panic(expected = "share dimensions")]
    fn test_mismatched_parents_panic() {
        let mut rng = StdRng::seed_from_u64(15);
        recombine(&Genome::new(1, 2), &Genome::new(2, 1), &mut rng);
    }
}
