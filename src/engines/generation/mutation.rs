use crate::engines::generation::genome::{Genome, CHANNELS_PER_PIXEL};
use crate::types::Channel;
use rand::Rng;

/// One applied mutation, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitFlip {
    pub individual: usize,
    pub pixel: usize,
    pub channel: Channel,
    pub bit: u8,
}

/// Invert one bit of one channel of one pixel.
pub fn flip_bit(genome: &mut Genome, pixel: usize, channel: Channel, bit: u8) {
    assert!(bit < 8, "bit index {} out of range", bit);
    assert!(pixel < genome.pixel_count(), "pixel {} out of range", pixel);
    let idx = pixel * CHANNELS_PER_PIXEL + channel.offset();
    genome.channels_mut()[idx] ^= 1 << bit;
}

/// Pick a random individual, pixel, channel and bit and flip it.
pub fn random_bit_flip<R: Rng>(population: &mut [Genome], rng: &mut R) -> BitFlip {
    let individual = rng.gen_range(0..population.len());
    let genome = &mut population[individual];
    let flip = BitFlip {
        individual,
        pixel: rng.gen_range(0..genome.pixel_count()),
        channel: Channel::ALL[rng.gen_range(0..Channel::ALL.len())],
        bit: rng.gen_range(0..8),
    };
    flip_bit(genome, flip.pixel, flip.channel, flip.bit);
    flip
}

/// Geometric mutation loop over a whole population.
///
/// Flips a coin with success probability `chance`; every success applies one
/// [`random_bit_flip`]. Stops at the first failure, so the number of flips is
/// geometric. Returns the number of flips applied.
///
/// `chance == 0` returns immediately. Panics if `chance >= 1`.
pub fn mutate_population<R: Rng>(population: &mut [Genome], chance: f64, rng: &mut R) -> usize {
    if chance <= 0.0 || population.is_empty() {
        return 0;
    }
    assert!(chance < 1.0, "mutation chance must be below 1, got {}", chance);

    let mut flips = 0;
    while rng.gen::<f64>() < chance {
        let flip = random_bit_flip(population, rng);
        log::trace!("mutation {:?}", flip);
        flips += 1;
    }
    flips
}
