use serde::{Deserialize, Serialize};

use super::validation::validate_scoring;
use crate::catalog::Metric;

pub const DEFAULT_REVENUE_WEIGHT: f64 = 1.5;
pub const DEFAULT_LEADS_WEIGHT: f64 = 1.2;
pub const DEFAULT_CAC_WEIGHT: f64 = 1.1;
/// Factor weight applied to the time-to-first-lead component
pub const DEFAULT_TIME_FACTOR_WEIGHT: f64 = 0.8;
/// Baseline weeks that time-to-first-lead is subtracted from
pub const DEFAULT_TIME_WEIGHT: f64 = 20.0;

/// Scoring configuration as written in the config file.
///
/// Every field is optional; omitted fields fall back to the default policy.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   revenue_weight: 1.5
///   leads_weight: 1.2
///   cac_weight: 1.1
///   time_weight: 0.8
///   time_baseline: 20
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight applied to revenue lift (%)
    #[serde(default)]
    pub revenue_weight: Option<f64>,

    /// Weight applied to new leads per month
    #[serde(default)]
    pub leads_weight: Option<f64>,

    /// Weight applied to the negated CAC change (%)
    #[serde(default)]
    pub cac_weight: Option<f64>,

    /// Weight applied to `time_baseline - weeks to first lead`
    #[serde(default)]
    pub time_weight: Option<f64>,

    /// Weeks baseline; slower than this contributes negatively
    #[serde(default)]
    pub time_baseline: Option<f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            revenue_weight: Some(DEFAULT_REVENUE_WEIGHT),
            leads_weight: Some(DEFAULT_LEADS_WEIGHT),
            cac_weight: Some(DEFAULT_CAC_WEIGHT),
            time_weight: Some(DEFAULT_TIME_FACTOR_WEIGHT),
            time_baseline: Some(DEFAULT_TIME_WEIGHT),
        }
    }
}

/// Resolved scoring constants.
///
/// Only obtainable as [`ScoringPolicy::DEFAULT`] or from a config that passes
/// [`validate_scoring`], so every policy keeps the score monotonic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    revenue_weight: f64,
    leads_weight: f64,
    cac_weight: f64,
    time_weight: f64,
    time_baseline: f64,
}

impl ScoringPolicy {
    pub const DEFAULT: ScoringPolicy = ScoringPolicy {
        revenue_weight: DEFAULT_REVENUE_WEIGHT,
        leads_weight: DEFAULT_LEADS_WEIGHT,
        cac_weight: DEFAULT_CAC_WEIGHT,
        time_weight: DEFAULT_TIME_FACTOR_WEIGHT,
        time_baseline: DEFAULT_TIME_WEIGHT,
    };

    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::RevenueLift => self.revenue_weight,
            Metric::LeadDelta => self.leads_weight,
            Metric::CacChange => self.cac_weight,
            Metric::TimeToFirstLead => self.time_weight,
        }
    }

    pub fn time_baseline(&self) -> f64 {
        self.time_baseline
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<&ScoringConfig> for ScoringPolicy {
    /// Every validation error, as reported by [`validate_scoring`]
    type Error = Vec<String>;

    fn try_from(config: &ScoringConfig) -> Result<Self, Self::Error> {
        validate_scoring(config)?;
        let d = ScoringPolicy::DEFAULT;
        Ok(Self {
            revenue_weight: config.revenue_weight.unwrap_or(d.revenue_weight),
            leads_weight: config.leads_weight.unwrap_or(d.leads_weight),
            cac_weight: config.cac_weight.unwrap_or(d.cac_weight),
            time_weight: config.time_weight.unwrap_or(d.time_weight),
            time_baseline: config.time_baseline.unwrap_or(d.time_baseline),
        })
    }
}
