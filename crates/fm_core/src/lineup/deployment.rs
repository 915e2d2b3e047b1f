//! Deployment weights: share of game time per forward line / defense pair.

pub const FORWARD_LINE_WEIGHTS: [f64; 4] = [0.30, 0.25, 0.25, 0.20];
pub const DEFENSE_PAIR_WEIGHTS: [f64; 3] = [0.40, 0.35, 0.25];

const FALLBACK_LINE_WEIGHT: f64 = 0.20;
const FALLBACK_PAIR_WEIGHT: f64 = 0.25;

pub fn forward_line_weight(line_index: usize) -> f64 {
    FORWARD_LINE_WEIGHTS
        .get(line_index)
        .copied()
        .unwrap_or(FALLBACK_LINE_WEIGHT)
}

pub fn defense_pair_weight(pair_index: usize) -> f64 {
    DEFENSE_PAIR_WEIGHTS
        .get(pair_index)
        .copied()
        .unwrap_or(FALLBACK_PAIR_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_full_game() {
        assert!((FORWARD_LINE_WEIGHTS.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((DEFENSE_PAIR_WEIGHTS.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert_eq!(forward_line_weight(0), 0.30);
        assert_eq!(forward_line_weight(7), 0.20);
        assert_eq!(defense_pair_weight(2), 0.25);
        assert_eq!(defense_pair_weight(9), 0.25);
    }
}
