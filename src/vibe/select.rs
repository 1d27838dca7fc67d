//! Winner selection with a confidence floor.

use super::category::{ScoreTable, Vibe};

/// The leading score must be strictly greater than this to be accepted
pub const CONFIDENCE_FLOOR: i32 = 15;

/// Pick the highest-scoring vibe.
///
/// Ties resolve to whichever vibe comes first in [`Vibe::SCORED`]. If the
/// leading score does not clear [`CONFIDENCE_FLOOR`], the result is
/// [`Vibe::Neutral`]. Returns the chosen vibe and the leading score.
pub fn select_winner(scores: &ScoreTable) -> (Vibe, i32) {
    let mut leader = Vibe::SCORED[0];
    let mut best = scores.get(leader);

    for (vibe, score) in scores.iter().skip(1) {
        if score > best {
            best = score;
            leader = vibe;
        }
    }

    if best > CONFIDENCE_FLOOR {
        (leader, best)
    } else {
        (Vibe::Neutral, best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_score_wins() {
        let mut scores = ScoreTable::new();
        scores.add(Vibe::Cozy, 20);
        scores.add(Vibe::Dreamy, 31);
        scores.add(Vibe::Halloween, 30);

        assert_eq!(select_winner(&scores), (Vibe::Dreamy, 31));
    }

    #[test]
    fn test_ties_resolve_in_enumeration_order() {
        let mut scores = ScoreTable::new();
        // Insert the later vibe first; insertion order must not matter
        scores.add(Vibe::Melancholic, 25);
        scores.add(Vibe::Moody, 25);

        for _ in 0..10 {
            assert_eq!(select_winner(&scores), (Vibe::Moody, 25));
        }
    }

    #[test]
    fn test_floor_is_exclusive() {
        let mut scores = ScoreTable::new();
        scores.add(Vibe::Chill, CONFIDENCE_FLOOR);
        assert_eq!(select_winner(&scores), (Vibe::Neutral, CONFIDENCE_FLOOR));

        scores.add(Vibe::Chill, 1);
        assert_eq!(select_winner(&scores), (Vibe::Chill, CONFIDENCE_FLOOR + 1));
    }

    #[test]
    fn test_all_zero_is_neutral() {
        assert_eq!(select_winner(&ScoreTable::new()), (Vibe::Neutral, 0));
    }

    #[test]
    fn test_all_negative_is_neutral() {
        let mut scores = ScoreTable::new();
        for vibe in Vibe::SCORED {
            scores.add(vibe, -5);
        }
        assert_eq!(select_winner(&scores), (Vibe::Neutral, -5));
    }
}
