use super::super::domain::{RawScores, TraitDimension, TraitProfile};
use super::config::{NegativeScoreStrategy, RemainderStrategy, ScoringConfig};

/// Converts raw totals into integer percentages that always sum to 100.
pub(crate) fn normalize(raw: &RawScores, config: &ScoringConfig) -> TraitProfile {
    let values = non_negative(raw, config.negative_scores);
    let total: f64 = values.iter().sum();

    if total <= 0.0 || !total.is_finite() {
        return TraitProfile::BALANCED;
    }

    let shares = values.map(|value| value / total * 100.0);
    let percentages = match config.remainder {
        RemainderStrategy::HighestDimension => correct_highest(shares),
        RemainderStrategy::LargestRemainder => apportion_largest_remainder(shares),
    };

    let [dominance, influence, steadiness, conscientiousness] =
        percentages.map(|value| value.clamp(0, 100) as u8);
    TraitProfile::new(dominance, influence, steadiness, conscientiousness)
}

fn non_negative(raw: &RawScores, strategy: NegativeScoreStrategy) -> [f64; 4] {
    let values = TraitDimension::ALL.map(|dimension| raw.get(dimension));
    match strategy {
        NegativeScoreStrategy::Clamp => values.map(|value| value.max(0.0)),
        NegativeScoreStrategy::ShiftByMinimum => {
            let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
            if minimum < 0.0 {
                values.map(|value| value - minimum)
            } else {
                values
            }
        }
    }
}

// Rounding drift is at most two points, so the leader can absorb it without going negative.
fn correct_highest(shares: [f64; 4]) -> [i32; 4] {
    let mut percentages = shares.map(|share| share.round() as i32);
    let drift = 100 - percentages.iter().sum::<i32>();
    if drift != 0 {
        let leader = index_of_max(&percentages);
        percentages[leader] += drift;
    }
    percentages
}

fn apportion_largest_remainder(shares: [f64; 4]) -> [i32; 4] {
    let mut percentages = shares.map(|share| share.floor() as i32);
    let leftover = 100 - percentages.iter().sum::<i32>();

    let mut order = [0usize, 1, 2, 3];
    order.sort_by(|&left, &right| {
        let left_remainder = shares[left] - shares[left].floor();
        let right_remainder = shares[right] - shares[right].floor();
        right_remainder.total_cmp(&left_remainder)
    });

    for &index in order.iter().take(leftover.max(0) as usize) {
        percentages[index] += 1;
    }
    percentages
}

fn index_of_max(values: &[i32; 4]) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate() {
        if *value > values[best] {
            best = index;
        }
    }
    best
}
