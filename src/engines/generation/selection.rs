use crate::engines::generation::genome::Genome;
use rand::Rng;

/// Roulette wheel selection: probability proportional to fitness
///
/// Entry `i` of the wheel covers `[cumulative[i-1], cumulative[i])`. Negative
/// and non-finite scores are clamped to zero weight. If every weight is zero
/// the wheel draws uniformly.
///
/// The wheel is built once per generation and only read afterwards, so it can
/// be shared across mating tasks behind a plain `&`.
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    population: &'a [Genome],
    cumulative: Vec<f64>,
    total: f64,
    /// Last entry with positive weight; rounding overflow lands here
    last_positive: usize,
}

impl<'a> Selector<'a> {
    /// Panics if `population` and `scores` differ in length or are empty.
    pub fn new(population: &'a [Genome], scores: &[f64]) -> Self {
        assert_eq!(
            population.len(),
            scores.len(),
            "every genome needs exactly one score"
        );
        assert!(!population.is_empty(), "cannot select from an empty population");

        let mut total = 0.0;
        let mut last_positive = population.len() - 1;
        let cumulative = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                if score.is_finite() && score > 0.0 {
                    total += score;
                    last_positive = i;
                }
                total
            })
            .collect();

        if total <= 0.0 {
            log::warn!(
                "All {} fitness weights are zero, falling back to uniform selection",
                population.len()
            );
        }

        Self {
            population,
            cumulative,
            total,
            last_positive,
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn is_uniform(&self) -> bool {
        self.total <= 0.0
    }

    /// Index of the interval containing `u`, for `u` in `[0, total_weight)`:
    /// the first entry whose upper bound exceeds `u`.
    pub fn index_for(&self, u: f64) -> usize {
        let idx = self.cumulative.partition_point(|&upper| upper <= u);
        // Float rounding can leave `u` at or past the last bound
        idx.min(self.last_positive)
    }

    pub fn draw_index<R: Rng>(&self, rng: &mut R) -> usize {
        if self.is_uniform() {
            return rng.gen_range(0..self.population.len());
        }
        let u = rng.gen::<f64>() * self.total;
        self.index_for(u)
    }

    /// Independent draw with replacement
    pub fn draw<R: Rng>(&self, rng: &mut R) -> &'a Genome {
        &self.population[self.draw_index(rng)]
    }

    pub fn draw_pair<R: Rng>(&self, rng: &mut R) -> (&'a Genome, &'a Genome) {
        (self.draw(rng), self.draw(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population(n: usize) -> Vec<Genome> {
        (0..n).map(|_| Genome::new(1, 1)).collect()
    }

    #[test]
    fn test_index_for_interval_bounds() {
        let pop = population(3);
        let selector = Selector::new(&pop, &[1.0, 2.0, 3.0]);

        assert_eq!(selector.total_weight(), 6.0);
        assert_eq!(selector.index_for(2.5), 1);
        assert_eq!(selector.index_for(0.0), 0);
        assert_eq!(selector.index_for(0.999), 0);
        assert_eq!(selector.index_for(1.0), 1);
        assert_eq!(selector.index_for(3.0), 2);
        assert_eq!(selector.index_for(5.999), 2);
    }

    #[test]
    fn test_zero_weight_entries_never_chosen() {
        let pop = population(4);
        let selector = Selector::new(&pop, &[0.0, 5.0, 0.0, 5.0]);

        assert_eq!(selector.index_for(0.0), 1);
        assert_eq!(selector.index_for(5.0), 3);

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let idx = selector.draw_index(&mut rng);
            assert!(idx == 1 || idx == 3);
        }
    }

    #[test]
    fn test_overflow_skips_trailing_zero_weights() {
        let pop = population(4);
        let selector = Selector::new(&pop, &[5.0, 2.0, 0.0, 0.0]);

        assert_eq!(selector.index_for(7.0), 1);
        assert_eq!(selector.index_for(100.0), 1);

        let pop = population(2);
        let selector = Selector::new(&pop, &[5.0, 0.0]);
        assert_eq!(selector.index_for(5.0), 0);
    }

    #[test]
    fn test_negative_scores_clamped() {
        let pop = population(3);
        let selector = Selector::new(&pop, &[-10.0, 4.0, f64::NAN]);
        assert_eq!(selector.total_weight(), 4.0);

        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            assert_eq!(selector.draw_index(&mut rng), 1);
        }
    }

    #[test]
    fn test_all_zero_falls_back_to_uniform() {
        let pop = population(4);
        let selector = Selector::new(&pop, &[0.0; 4]);
        assert!(selector.is_uniform());

        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [0usize; 4];
        for _ in 0..4000 {
            seen[selector.draw_index(&mut rng)] += 1;
        }
        assert!(seen.iter().all(|&count| count > 800), "{:?}", seen);
    }

    #[test]
    fn test_draws_are_proportional() {
        let pop = population(2);
        let selector = Selector::new(&pop, &[1.0, 3.0]);

        let mut rng = StdRng::seed_from_u64(4);
        let hits = (0..20_000)
            .filter(|_| selector.draw_index(&mut rng) == 1)
            .count();
        let ratio = hits as f64 / 20_000.0;
        assert!((ratio - 0.75).abs() < 0.02, "ratio was {}", ratio);
    }

    #[test]
    fn test_draw_returns_population_member() {
        let pop: Vec<Genome> = (0..3u8)
            .map(|v| Genome::filled(1, 1, crate::types::Rgb::new(v, v, v)))
            .collect();
        let selector = Selector::new(&pop, &[0.0, 0.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(5);
        let (a, b) = selector.draw_pair(&mut rng);
        assert_eq!(a, &pop[2]);
        assert_eq!(b, &pop[2]);
    }
}
