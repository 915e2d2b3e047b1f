use crate::config::OutcomeConfig;
use rand::Rng;

/// Goal count drawn from Poisson(`expected`) by inverse-CDF walk.
///
/// Lambda is clamped to `[min_lambda, max_lambda]` (non-finite input maps to
/// `min_lambda`) and the walk stops at `max_goals`.
pub fn sample_goals(expected: f64, config: &OutcomeConfig, rng: &mut impl Rng) -> u32 {
    let lambda = if expected.is_finite() {
        expected.max(config.min_lambda).min(config.max_lambda)
    } else {
        config.min_lambda
    };

    let target: f64 = rng.gen_range(0.0..1.0);
    let mut goals = 0u32;
    let mut probability = (-lambda).exp();
    let mut cumulative = probability;
    while cumulative < target && goals < config.max_goals {
        goals += 1;
        probability *= lambda / goals as f64;
        cumulative += probability;
    }
    goals
}
