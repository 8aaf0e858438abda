use super::config::ScoringPolicy;
use crate::catalog::Metric;

/// Metrics that feed the composite score, in summation order.
pub const SCORED_METRICS: [Metric; 4] = [
    Metric::RevenueLift,
    Metric::LeadDelta,
    Metric::CacChange,
    Metric::TimeToFirstLead,
];

/// Maps a raw metric value onto a "higher is better" scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correction {
    Raw,
    Negate,
    /// `baseline - value`
    Baseline(f64),
}

impl Correction {
    pub fn for_metric(metric: Metric, policy: &ScoringPolicy) -> Self {
        match metric {
            Metric::RevenueLift | Metric::LeadDelta => Correction::Raw,
            Metric::CacChange => Correction::Negate,
            Metric::TimeToFirstLead => Correction::Baseline(policy.time_baseline()),
        }
    }

    pub fn apply(self, raw: f64) -> f64 {
        match self {
            Correction::Raw => raw,
            Correction::Negate => -raw,
            Correction::Baseline(baseline) => baseline - raw,
        }
    }

    /// Short human description, e.g. "-x" or "20 - x"
    pub fn describe(self) -> String {
        match self {
            Correction::Raw => "x".to_string(),
            Correction::Negate => "-x".to_string(),
            Correction::Baseline(baseline) => format!("{} - x", baseline),
        }
    }
}
