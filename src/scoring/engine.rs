use serde::Serialize;

use super::config::ScoringPolicy;
use super::factors::{Correction, SCORED_METRICS};
use crate::catalog::Metric;
use crate::impact::Candidate;

/// Scores closer than this are treated as equal when picking the best overall.
pub const SCORE_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub metric: Metric,
    pub label: &'static str, // e.g. "Revenue Lift", "CAC Change"
    pub raw: Option<f64>,    // None when the candidate had no data
    pub component: f64,      // raw value after direction correction
    pub weight: f64,
    pub weighted: f64, // component * weight
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub id: String,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Composite score under the default policy.
pub fn compute_score(candidate: &Candidate) -> f64 {
    calculate_score(candidate, &ScoringPolicy::DEFAULT).score
}

/// Weighted composite score with a per-metric breakdown.
///
/// Missing metrics contribute exactly 0.0. Higher is always better.
pub fn calculate_score(candidate: &Candidate, policy: &ScoringPolicy) -> ScoreResult {
    let mut score = 0.0;
    let mut factors = Vec::with_capacity(SCORED_METRICS.len());

    for metric in SCORED_METRICS {
        let raw = candidate.value(metric);
        let component = raw
            .map(|v| Correction::for_metric(metric, policy).apply(v))
            .unwrap_or(0.0);
        let weight = policy.weight(metric);
        let weighted = component * weight;
        score += weighted;

        factors.push(FactorContribution {
            metric,
            label: metric.label(),
            raw,
            component,
            weight,
            weighted,
        });
    }

    tracing::trace!(id = %candidate.id, score, "scored candidate");

    ScoreResult {
        score,
        breakdown: ScoreBreakdown { factors },
    }
}

/// Score every candidate and sort by score, best first.
///
/// The sort is stable, so equal scores keep their input order. The first row
/// is always the [`find_best_overall_id`] pick, even when a later candidate
/// edges it out by less than [`SCORE_TOLERANCE`].
pub fn rank_candidates(candidates: &[Candidate], policy: &ScoringPolicy) -> Vec<RankedCandidate> {
    let mut ranked: Vec<(usize, RankedCandidate)> = candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let result = calculate_score(candidate, policy);
            let ranked = RankedCandidate {
                id: candidate.id.clone(),
                score: result.score,
                breakdown: result.breakdown,
            };
            (idx, ranked)
        })
        .collect();

    let scores: Vec<f64> = ranked.iter().map(|(_, r)| r.score).collect();
    let best = best_index(&scores);

    ranked.sort_by(|a, b| b.1.score.partial_cmp(&a.1.score).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(pos) = best.and_then(|best| ranked.iter().position(|(idx, _)| *idx == best)) {
        ranked[..=pos].rotate_right(1);
    }

    ranked.into_iter().map(|(_, r)| r).collect()
}

/// Id of the highest-scoring candidate, or `None` for no candidates.
///
/// A later candidate only takes over if it beats the current best by more
/// than [`SCORE_TOLERANCE`], so near-ties go to the earlier one.
pub fn find_best_overall_id(candidates: &[Candidate], policy: &ScoringPolicy) -> Option<String> {
    let scores: Vec<f64> = candidates
        .iter()
        .map(|candidate| calculate_score(candidate, policy).score)
        .collect();

    best_index(&scores).map(|idx| candidates[idx].id.clone())
}

fn best_index(scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, &score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score + SCORE_TOLERANCE => {}
            _ => best = Some((idx, score)),
        }
    }

    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Direction;
    use crate::impact::ImpactBundle;
    use crate::scoring::ScoringConfig;
    use proptest::prelude::*;

    fn full(id: &str, revenue: f64, leads: f64, cac: f64, time: f64) -> Candidate {
        Candidate::new(
            id,
            ImpactBundle::default()
                .with(Metric::RevenueLift, revenue)
                .with(Metric::LeadDelta, leads)
                .with(Metric::CacChange, cac)
                .with(Metric::TimeToFirstLead, time),
        )
    }

    #[test]
    fn test_known_score() {
        // 10*1.5 + 20*1.2 + 5*1.1 + (20-6)*0.8 = 15 + 24 + 5.5 + 11.2
        let score = compute_score(&full("a", 10.0, 20.0, -5.0, 6.0));
        assert!((score - 55.7).abs() < 1e-9);
    }

    #[test]
    fn test_empty_bundle_scores_zero() {
        let candidate = Candidate::new("a", ImpactBundle::default());
        assert_eq!(compute_score(&candidate), 0.0);
    }

    #[test]
    fn test_missing_metric_is_neutral() {
        let only_revenue =
            Candidate::new("a", ImpactBundle::default().with(Metric::RevenueLift, 10.0));
        assert_eq!(compute_score(&only_revenue), 15.0);

        let result = calculate_score(&only_revenue, &ScoringPolicy::DEFAULT);
        let time = &result.breakdown.factors[3];
        assert_eq!(time.metric, Metric::TimeToFirstLead);
        assert_eq!(time.raw, None);
        assert_eq!(time.weighted, 0.0);
    }

    #[test]
    fn test_non_numeric_values_are_neutral() {
        let json = r#"{"id": "a", "businessImpact": {"revenueLiftPct": true, "cacChangePct": "-5"}}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(compute_score(&candidate), 0.0);
    }

    #[test]
    fn test_slow_time_goes_negative() {
        let slow = Candidate::new("a", ImpactBundle::default().with(Metric::TimeToFirstLead, 30.0));
        assert!((compute_score(&slow) - (-8.0)).abs() < 1e-9);
    }

    #[test]
    fn test_better_option_scores_higher() {
        let base = full("base", 10.0, 20.0, -5.0, 6.0);
        let better = full("better", 12.0, 25.0, -7.0, 4.0);
        let copy = full("copy", 10.0, 20.0, -5.0, 6.0);

        assert!(compute_score(&better) > compute_score(&base));
        assert!((compute_score(&base) - compute_score(&copy)).abs() < 1e-5);
    }

    #[test]
    fn test_breakdown_sums_to_score() {
        let result = calculate_score(&full("a", 3.0, 9.0, 2.0, 11.0), &ScoringPolicy::DEFAULT);
        let total: f64 = result.breakdown.factors.iter().map(|f| f.weighted).sum();
        assert!((total - result.score).abs() < 1e-9);
        assert_eq!(result.breakdown.factors.len(), 4);
    }

    #[test]
    fn test_custom_policy() {
        let config = ScoringConfig {
            revenue_weight: Some(1.0),
            leads_weight: Some(1.0),
            cac_weight: Some(1.0),
            time_weight: Some(1.0),
            time_baseline: Some(10.0),
        };
        let policy = ScoringPolicy::try_from(&config).unwrap();
        let result = calculate_score(&full("a", 1.0, 2.0, -3.0, 4.0), &policy);
        // 1 + 2 + 3 + (10 - 4)
        assert!((result.score - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_candidates_best_first_and_stable() {
        let candidates = vec![
            full("low", 1.0, 1.0, 0.0, 10.0),
            full("tie-a", 10.0, 20.0, -5.0, 6.0),
            full("tie-b", 10.0, 20.0, -5.0, 6.0),
        ];
        let ranked = rank_candidates(&candidates, &ScoringPolicy::DEFAULT);
        let order: Vec<_> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["tie-a", "tie-b", "low"]);
    }

    #[test]
    fn test_rank_leader_matches_best_overall_on_near_tie() {
        // Scores 12.0 and 12.00006: inside the tolerance, so the earlier one leads
        let candidates = vec![
            Candidate::new("first", ImpactBundle::default().with(Metric::LeadDelta, 10.0)),
            Candidate::new("second", ImpactBundle::default().with(Metric::LeadDelta, 10.00005)),
            Candidate::new("third", ImpactBundle::default().with(Metric::LeadDelta, 2.0)),
        ];
        let policy = ScoringPolicy::DEFAULT;
        let ranked = rank_candidates(&candidates, &policy);
        let order: Vec<_> = ranked.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(order, vec!["first", "second", "third"]);
        assert_eq!(
            find_best_overall_id(&candidates, &policy).as_deref(),
            Some(order[0])
        );
    }

    #[test]
    fn test_rank_leader_clear_winner_unchanged() {
        let candidates = vec![
            Candidate::new("low", ImpactBundle::default().with(Metric::LeadDelta, 1.0)),
            Candidate::new("mid", ImpactBundle::default().with(Metric::LeadDelta, 5.0)),
            Candidate::new("high", ImpactBundle::default().with(Metric::LeadDelta, 9.0)),
        ];
        let ranked = rank_candidates(&candidates, &ScoringPolicy::DEFAULT);
        let order: Vec<_> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_candidates(&[], &ScoringPolicy::DEFAULT).is_empty());
    }

    #[test]
    fn test_best_overall() {
        let candidates = vec![
            full("a", 10.0, 20.0, -5.0, 6.0),
            full("b", 12.0, 25.0, -7.0, 4.0),
            full("c", 1.0, 1.0, 1.0, 19.0),
        ];
        assert_eq!(
            find_best_overall_id(&candidates, &ScoringPolicy::DEFAULT),
            Some("b".to_string())
        );
    }

    #[test]
    fn test_best_overall_near_tie_keeps_earliest() {
        let candidates = vec![
            Candidate::new("first", ImpactBundle::default().with(Metric::LeadDelta, 10.0)),
            Candidate::new("second", ImpactBundle::default().with(Metric::LeadDelta, 10.00005)),
        ];
        assert_eq!(
            find_best_overall_id(&candidates, &ScoringPolicy::DEFAULT),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_best_overall_empty() {
        assert_eq!(find_best_overall_id(&[], &ScoringPolicy::DEFAULT), None);
    }

    #[test]
    fn test_best_overall_single_negative_score() {
        let candidates =
            vec![Candidate::new("only", ImpactBundle::default().with(Metric::CacChange, 40.0))];
        assert_eq!(
            find_best_overall_id(&candidates, &ScoringPolicy::DEFAULT),
            Some("only".to_string())
        );
    }

    fn maybe_value() -> impl Strategy<Value = Option<f64>> {
        proptest::option::of(-100.0f64..100.0)
    }

    fn bundle_from(values: [Option<f64>; 4]) -> ImpactBundle {
        let mut bundle = ImpactBundle::default();
        for (metric, value) in SCORED_METRICS.into_iter().zip(values) {
            if let Some(v) = value {
                bundle = bundle.with(metric, v);
            }
        }
        bundle
    }

    proptest! {
        #[test]
        fn score_is_monotonic(
            base in [maybe_value(), maybe_value(), maybe_value(), maybe_value()],
            idx in 0usize..4,
            delta in 0.01f64..50.0,
        ) {
            let worse = bundle_from(base);
            let metric = SCORED_METRICS[idx];
            let start = worse.value(metric).unwrap_or(0.0);
            let improved = match metric.direction() {
                Direction::HigherIsBetter => start + delta,
                Direction::LowerIsBetter => start - delta,
            };
            // Keep the improved metric present on both sides
            let worse = worse.with(metric, start);
            let better = worse.clone().with(metric, improved);

            let a = compute_score(&Candidate::new("a", worse));
            let b = compute_score(&Candidate::new("b", better));
            prop_assert!(b > a, "score {} should beat {}", b, a);
        }

        #[test]
        fn score_is_monotonic_when_metrics_improve_together(
            base in prop::array::uniform4(-100.0f64..100.0),
            deltas in prop::array::uniform4(0.0f64..20.0),
            strict in 0usize..4,
            bump in 0.01f64..5.0,
        ) {
            let mut deltas = deltas;
            deltas[strict] += bump;

            let mut worse = ImpactBundle::default();
            let mut better = ImpactBundle::default();
            for (i, metric) in SCORED_METRICS.into_iter().enumerate() {
                let improved = match metric.direction() {
                    Direction::HigherIsBetter => base[i] + deltas[i],
                    Direction::LowerIsBetter => base[i] - deltas[i],
                };
                worse = worse.with(metric, base[i]);
                better = better.with(metric, improved);
            }

            let a = compute_score(&Candidate::new("a", worse));
            let b = compute_score(&Candidate::new("b", better));
            prop_assert!(b > a, "score {} should beat {}", b, a);
        }

        #[test]
        fn score_is_deterministic(values in [maybe_value(), maybe_value(), maybe_value(), maybe_value()]) {
            let a = Candidate::new("a", bundle_from(values));
            let b = Candidate::new("b", bundle_from(values));
            prop_assert!((compute_score(&a) - compute_score(&b)).abs() < 1e-5);
        }
    }
}
