use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::numeric::numeric_value;
use crate::catalog::Metric;

/// Business-impact values for one candidate.
///
/// Each field is `None` when the source had no usable number for that metric:
/// absent, null, boolean, string, or anything else non-numeric. Keys outside
/// the catalog are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactBundle {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub revenue_lift_pct: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub lead_delta_per_month: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cac_change_pct: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub time_to_first_lead_weeks: Option<f64>,
}

impl ImpactBundle {
    /// Usable value for a metric. Non-finite numbers count as missing.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        let raw = match metric {
            Metric::RevenueLift => self.revenue_lift_pct,
            Metric::LeadDelta => self.lead_delta_per_month,
            Metric::CacChange => self.cac_change_pct,
            Metric::TimeToFirstLead => self.time_to_first_lead_weeks,
        };
        raw.filter(|v| v.is_finite())
    }

    /// Builder-style setter, mostly for constructing fixtures
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        let slot = match metric {
            Metric::RevenueLift => &mut self.revenue_lift_pct,
            Metric::LeadDelta => &mut self.lead_delta_per_month,
            Metric::CacChange => &mut self.cac_change_pct,
            Metric::TimeToFirstLead => &mut self.time_to_first_lead_weeks,
        };
        *slot = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        Metric::all().all(|metric| self.value(metric).is_none())
    }
}

/// One option under comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Opaque identifier, compared by equality only. JSON ids must be strings.
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub business_impact: ImpactBundle,
}

impl Candidate {
    pub fn new(id: impl Into<String>, business_impact: ImpactBundle) -> Self {
        Self {
            id: id.into(),
            business_impact,
        }
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.business_impact.value(metric)
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(numeric_value(&value))
}

fn null_as_default<'de, D>(deserializer: D) -> Result<ImpactBundle, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ImpactBundle>::deserialize(deserializer)?.unwrap_or_default())
}
