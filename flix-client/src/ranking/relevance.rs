//! The relevance formula.

/// Bonus for cities served by the operator itself.
const FLIXBUS_CITY_BONUS: f64 = 0.2;

/// Bonus per listed station.
const STATION_BONUS: f64 = 0.1;

/// Upper bound on the combined station bonus.
const MAX_STATION_BONUS: f64 = 0.3;

/// Bonus for cities with a train station.
const TRAIN_STATION_BONUS: f64 = 0.1;

/// Inputs to [`relevance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceFeatures {
    /// API match score, nominally 0-100.
    pub score: f64,
    pub is_flixbus_city: bool,
    pub station_count: usize,
    pub has_train_station: bool,
}

/// Composite relevance of a search result, in `[0.0, 1.0]`.
///
/// The API score is normalised to `[0, 1]` and the bonuses are added on
/// top. The sum is clamped at both ends, so scores outside 0-100 (and NaN)
/// still produce a value in range.
///
/// # Examples
///
/// ```
/// use flix_client::ranking::{RelevanceFeatures, relevance};
///
/// let plain = RelevanceFeatures {
///     score: 50.0,
///     is_flixbus_city: false,
///     station_count: 0,
///     has_train_station: false,
/// };
/// assert_eq!(relevance(&plain), 0.5);
///
/// let popular = RelevanceFeatures {
///     score: 80.0,
///     is_flixbus_city: true,
///     station_count: 2,
///     has_train_station: true,
/// };
/// assert_eq!(relevance(&popular), 1.0);
/// ```
pub fn relevance(features: &RelevanceFeatures) -> f64 {
    let base = features.score / 100.0;

    let flixbus_bonus = if features.is_flixbus_city {
        FLIXBUS_CITY_BONUS
    } else {
        0.0
    };

    let station_bonus = (features.station_count as f64 * STATION_BONUS).min(MAX_STATION_BONUS);

    let train_bonus = if features.has_train_station {
        TRAIN_STATION_BONUS
    } else {
        0.0
    };

    let total = base + flixbus_bonus + station_bonus + train_bonus;
    if total.is_nan() {
        return 0.0;
    }
    total.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn features(score: f64) -> RelevanceFeatures {
        RelevanceFeatures {
            score,
            is_flixbus_city: false,
            station_count: 0,
            has_train_station: false,
        }
    }

    #[test]
    fn plain_score_is_normalised() {
        assert_eq!(relevance(&features(50.0)), 0.5);
        assert_eq!(relevance(&features(0.0)), 0.0);
        assert_eq!(relevance(&features(100.0)), 1.0);
    }

    #[test]
    fn all_bonuses_saturate() {
        let f = RelevanceFeatures {
            score: 80.0,
            is_flixbus_city: true,
            station_count: 2,
            has_train_station: true,
        };
        assert_eq!(relevance(&f), 1.0);
    }

    #[test]
    fn station_bonus_is_capped() {
        let f = RelevanceFeatures {
            station_count: 5,
            ..features(95.0)
        };
        assert_eq!(relevance(&f), 1.0);

        let f = RelevanceFeatures {
            station_count: 5,
            ..features(10.0)
        };
        assert!((relevance(&f) - 0.4).abs() < EPS);
    }

    #[test]
    fn each_station_adds_a_tenth() {
        for (count, expected) in [(0, 0.2), (1, 0.3), (2, 0.4), (3, 0.5), (4, 0.5)] {
            let f = RelevanceFeatures {
                station_count: count,
                ..features(20.0)
            };
            assert!(
                (relevance(&f) - expected).abs() < EPS,
                "{count} stations: got {}",
                relevance(&f)
            );
        }
    }

    #[test]
    fn flixbus_and_train_bonuses() {
        let f = RelevanceFeatures {
            is_flixbus_city: true,
            ..features(30.0)
        };
        assert!((relevance(&f) - 0.5).abs() < EPS);

        let f = RelevanceFeatures {
            has_train_station: true,
            ..features(30.0)
        };
        assert!((relevance(&f) - 0.4).abs() < EPS);
    }

    #[test]
    fn negative_score_clamps_to_zero() {
        assert_eq!(relevance(&features(-500.0)), 0.0);
    }

    #[test]
    fn nan_score_is_zero() {
        assert_eq!(relevance(&features(f64::NAN)), 0.0);
    }

    #[test]
    fn oversized_score_clamps_to_one() {
        assert_eq!(relevance(&features(1e9)), 1.0);
    }
}
