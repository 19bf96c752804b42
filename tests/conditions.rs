//! End-to-end checks of the public scoring API.

use skyscore::core::factors::{bortle_score, moon_score, weather_score};
use skyscore::{
    FactorScore, Quality, RawSignals, Scorer, SignalError, Thresholds, Total, WeightTable, score,
};
use std::sync::Arc;
use std::thread;

fn signals(moon: Option<f64>, bortle: Option<i64>, cloud: Option<f64>) -> RawSignals {
    RawSignals {
        moon_illumination: moon,
        light_pollution_class: bortle,
        cloud_cover: cloud,
    }
}

#[test]
fn transforms_cover_their_domains() {
    for step in 0..=200 {
        let pct = f64::from(step) / 2.0;
        assert_eq!(moon_score(pct), Ok(100.0 - pct));
        assert_eq!(weather_score(pct), Ok(100.0 - pct));
    }
    let mut previous = f64::MAX;
    for class in 1..=9 {
        let current = bortle_score(class).unwrap();
        assert!(current <= previous);
        previous = current;
    }
}

#[test]
fn perfect_night_scores_100_excellent() {
    let result = score(&signals(Some(0.0), Some(1), Some(0.0))).unwrap();
    assert_eq!(result.total, Total::Score(100));
    assert_eq!(result.quality, Some(Quality::Excellent));
    assert_eq!(result.factors.light_pollution, FactorScore::Available(100.0));
}

#[test]
fn single_factor_is_not_diluted() {
    let result = score(&signals(None, None, Some(0.0))).unwrap();
    assert_eq!(result.total, Total::Score(100));
    assert_eq!(result.quality, Some(Quality::Excellent));
}

#[test]
fn two_factors_renormalize_over_present_weights() {
    let result = score(&signals(Some(50.0), None, Some(20.0))).unwrap();
    assert_eq!(result.total, Total::Score(63));
    assert_eq!(result.quality, Some(Quality::Good));
    assert_eq!(result.factors.moon, FactorScore::Available(50.0));
    assert_eq!(result.factors.light_pollution, FactorScore::Unavailable);
    assert_eq!(result.factors.weather, FactorScore::Available(80.0));
}

#[test]
fn no_data_is_unavailable_not_poor() {
    let result = score(&RawSignals::default()).unwrap();
    assert_eq!(result.total, Total::Unavailable);
    assert_eq!(result.quality, None);

    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["total"], "unavailable");
    assert!(json["quality"].is_null());
    assert_eq!(json["factors"]["moon"], "unavailable");
}

#[test]
fn rounding_happens_once_at_the_end() {
    // moon 79.5 and weather 79.4: exact blend 79.457 rounds to 79, while
    // pre-rounding the sub-scores (80, 79) would give 79.57 and round to 80.
    let result = score(&signals(Some(20.5), None, Some(20.6))).unwrap();
    assert_eq!(result.total, Total::Score(79));
    assert_eq!(result.quality, Some(Quality::Good));
    assert_eq!(result.factors.moon, FactorScore::Available(79.5));
}

#[test]
fn values_just_below_a_half_round_down() {
    // moon sub-score 50.4999999995
    let result = score(&signals(Some(49.500_000_000_5), None, None)).unwrap();
    assert_eq!(result.total, Total::Score(50));
}

#[test]
fn classification_boundaries() {
    let thresholds = Thresholds::default();
    let classify = |value| skyscore::core::score::classify(value, &thresholds);
    assert_eq!(classify(80), Quality::Excellent);
    assert_eq!(classify(79), Quality::Good);
    assert_eq!(classify(60), Quality::Good);
    assert_eq!(classify(59), Quality::Fair);
    assert_eq!(classify(40), Quality::Fair);
    assert_eq!(classify(39), Quality::Poor);
}

#[test]
fn out_of_domain_inputs_are_rejected() {
    assert_eq!(
        score(&signals(None, None, Some(150.0))),
        Err(SignalError::CloudCover(150.0))
    );
    assert_eq!(
        score(&signals(None, Some(12), None)),
        Err(SignalError::LightPollutionClass(12))
    );
    assert_eq!(
        score(&signals(Some(-1.0), None, None)),
        Err(SignalError::MoonIllumination(-1.0))
    );
}

#[test]
fn repeated_calls_are_identical() {
    let input = signals(Some(33.3), Some(5), Some(12.0));
    let first = serde_json::to_string(&score(&input).unwrap()).unwrap();
    let second = serde_json::to_string(&score(&input).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn concurrent_scoring_with_weight_swaps() {
    let scorer = Arc::new(Scorer::default());
    let input = signals(Some(0.0), None, Some(100.0));
    let handle = scorer.weights();

    let swapper = thread::spawn(move || {
        for _ in 0..200 {
            handle.replace(WeightTable::new(0.8, 0.1, 0.1).unwrap());
            handle.replace(WeightTable::default());
        }
    });

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let scorer = Arc::clone(&scorer);
            thread::spawn(move || {
                for _ in 0..200 {
                    let total = scorer.score(&input).unwrap().total;
                    // 100*0.4/0.7 under the default table, 100*0.8/0.9 under the other.
                    assert!(total == Total::Score(57) || total == Total::Score(89));
                }
            })
        })
        .collect();

    swapper.join().unwrap();
    for worker in workers {
        worker.join().unwrap();
    }
}
