use crate::engines::generation::genome::Genome;

/// Maximum L1 difference of a single channel
const CHANNEL_RANGE: u64 = 255;

/// Scores genomes by summed per-channel absolute difference against a fixed target.
///
/// `score = worst - difference`, where `worst = 255 * 3 * pixels`. The score is
/// raw (not normalized): `0` means every channel is maximally wrong, `worst`
/// is a pixel-perfect match.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    target: &'a Genome,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(target: &'a Genome) -> Self {
        Self { target }
    }

    /// Largest possible total difference for an image of `pixels` pixels
    pub fn worst(pixels: usize) -> f64 {
        (CHANNEL_RANGE * 3 * pixels as u64) as f64
    }

    /// Total L1 distance between `genome` and the target.
    ///
    /// Panics if the dimensions differ.
    pub fn difference(&self, genome: &Genome) -> u64 {
        assert_eq!(
            genome.dimensions(),
            self.target.dimensions(),
            "genome and target dimensions must match"
        );
        genome
            .channels()
            .iter()
            .zip(self.target.channels())
            .map(|(&a, &b)| a.abs_diff(b) as u64)
            .sum()
    }

    pub fn score(&self, genome: &Genome) -> f64 {
        Self::worst(self.target.pixel_count()) - self.difference(genome) as f64
    }
}

/// Free-function form of [`FitnessEvaluator::score`]
pub fn score(genome: &Genome, target: &Genome) -> f64 {
    FitnessEvaluator::new(target).score(genome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_self_score_is_worst() {
        let mut rng = StdRng::seed_from_u64(7);
        let genome = Genome::random(6, 4, &mut rng);
        assert_eq!(score(&genome, &genome), FitnessEvaluator::worst(24));
        assert_eq!(score(&genome, &genome), 255.0 * 3.0 * 24.0);
    }

    #[test]
    fn test_complement_of_extremes_scores_zero() {
        let target = Genome::filled(3, 3, Rgb::new(0, 255, 0));
        let genome = Genome::filled(3, 3, Rgb::new(255, 0, 255));
        assert_eq!(score(&genome, &target), 0.0);
    }

    #[test]
    fn test_l1_difference() {
        let target = Genome::filled(1, 1, Rgb::new(200, 100, 50));
        let genome = Genome::filled(1, 1, Rgb::new(190, 120, 50));
        let evaluator = FitnessEvaluator::new(&target);
        assert_eq!(evaluator.difference(&genome), 30);
        assert_eq!(evaluator.score(&genome), 765.0 - 30.0);
    }

    #[test]
    fn test_black_against_single_pixel_target() {
        let target = Genome::filled(1, 1, Rgb::new(200, 100, 50));
        let genome = Genome::new(1, 1);
        assert_eq!(score(&genome, &target), 415.0);
    }

    #[test]
    #[should_panic(expected = "dimensions must match")]
    fn test_dimension_mismatch_panics() {
        let target = Genome::new(2, 2);
        let genome = Genome::new(2, 3);
        score(&genome, &target);
    }
}
