use serde::{Deserialize, Serialize};

/// Which way a metric is optimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    /// Pick the better of two values under this direction.
    pub fn best_of(self, a: f64, b: f64) -> f64 {
        match self {
            Direction::HigherIsBetter => a.max(b),
            Direction::LowerIsBetter => a.min(b),
        }
    }
}

/// The closed set of business-impact metrics an option can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    RevenueLift,
    LeadDelta,
    CacChange,
    TimeToFirstLead,
}

/// Immutable catalog entry for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDefinition {
    pub metric: Metric,
    pub label: &'static str, // unique, used as report key
    pub key: &'static str,   // field name inside businessImpact
    pub direction: Direction,
}

/// Fixed metric catalog. Order drives report ordering.
pub static CATALOG: [MetricDefinition; 4] = [
    MetricDefinition {
        metric: Metric::RevenueLift,
        label: "Revenue Lift",
        key: "revenueLiftPct",
        direction: Direction::HigherIsBetter,
    },
    MetricDefinition {
        metric: Metric::LeadDelta,
        label: "New Leads / mo",
        key: "leadDeltaPerMonth",
        direction: Direction::HigherIsBetter,
    },
    MetricDefinition {
        metric: Metric::CacChange,
        label: "CAC Change",
        key: "cacChangePct",
        direction: Direction::LowerIsBetter,
    },
    MetricDefinition {
        metric: Metric::TimeToFirstLead,
        label: "Time to First Lead",
        key: "timeToFirstLeadWeeks",
        direction: Direction::LowerIsBetter,
    },
];

impl Metric {
    /// All metrics in catalog order
    pub fn all() -> impl Iterator<Item = Metric> {
        CATALOG.iter().map(|def| def.metric)
    }

    pub fn definition(self) -> &'static MetricDefinition {
        match self {
            Metric::RevenueLift => &CATALOG[0],
            Metric::LeadDelta => &CATALOG[1],
            Metric::CacChange => &CATALOG[2],
            Metric::TimeToFirstLead => &CATALOG[3],
        }
    }

    pub fn label(self) -> &'static str {
        self.definition().label
    }

    pub fn key(self) -> &'static str {
        self.definition().key
    }

    pub fn direction(self) -> Direction {
        self.definition().direction
    }

    /// Look up a metric by its impact-bundle key (e.g. "cacChangePct")
    pub fn from_key(key: &str) -> Option<Metric> {
        CATALOG.iter().find(|def| def.key == key).map(|def| def.metric)
    }

    /// Look up a metric by its display label (e.g. "CAC Change")
    pub fn from_label(label: &str) -> Option<Metric> {
        CATALOG
            .iter()
            .find(|def| def.label == label)
            .map(|def| def.metric)
    }
}
