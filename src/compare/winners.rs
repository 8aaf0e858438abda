use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::catalog::{Metric, MetricDefinition, CATALOG};
use crate::impact::Candidate;

/// Values within this distance of the best value tie for the win.
pub const WINNER_TOLERANCE: f64 = 1e-4;

/// Winners for a single metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricWinner {
    #[serde(skip)]
    pub metric: Metric,
    pub label: &'static str,
    pub best_value: f64,
    /// First-seen order; duplicate ids from the input are kept
    pub winner_ids: Vec<String>,
}

/// Per-metric winners, keyed by label, in catalog order.
///
/// Metrics that no candidate had data for are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WinnersReport {
    results: Vec<MetricWinner>,
}

impl WinnersReport {
    pub fn get(&self, label: &str) -> Option<&MetricWinner> {
        self.results.iter().find(|r| r.label == label)
    }

    pub fn for_metric(&self, metric: Metric) -> Option<&MetricWinner> {
        self.results.iter().find(|r| r.metric == metric)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricWinner> {
        self.results.iter()
    }

    /// Labels of every metric the given candidate wins (including ties)
    pub fn winning_metrics(&self, id: &str) -> Vec<&'static str> {
        self.results
            .iter()
            .filter(|r| r.winner_ids.iter().any(|w| w == id))
            .map(|r| r.label)
            .collect()
    }
}

impl<'a> IntoIterator for &'a WinnersReport {
    type Item = &'a MetricWinner;
    type IntoIter = std::slice::Iter<'a, MetricWinner>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl Serialize for WinnersReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for result in &self.results {
            map.serialize_entry(result.label, result)?;
        }
        map.end()
    }
}

/// Find the best candidate(s) for every catalog metric.
///
/// With fewer than two candidates there is nothing to compare and the report
/// is empty. Missing or non-numeric values are left out of the comparison.
pub fn compute_winners(candidates: &[Candidate]) -> WinnersReport {
    if candidates.len() <= 1 {
        return WinnersReport::default();
    }

    let results = CATALOG
        .iter()
        .filter_map(|def| metric_winner(def, candidates))
        .collect::<Vec<_>>();

    tracing::debug!(
        candidates = candidates.len(),
        metrics = results.len(),
        "computed metric winners"
    );

    WinnersReport { results }
}

fn metric_winner(def: &MetricDefinition, candidates: &[Candidate]) -> Option<MetricWinner> {
    let entries: Vec<(&str, f64)> = candidates
        .iter()
        .filter_map(|c| c.value(def.metric).map(|v| (c.id.as_str(), v)))
        .collect();

    let Some(&(_, first)) = entries.first() else {
        tracing::trace!(metric = def.label, "no usable data, skipping");
        return None;
    };

    let best_value = entries
        .iter()
        .fold(first, |best, &(_, v)| def.direction.best_of(best, v));

    let winner_ids = entries
        .iter()
        .filter(|(_, v)| (v - best_value).abs() <= WINNER_TOLERANCE)
        .map(|(id, _)| id.to_string())
        .collect::<Vec<_>>();

    tracing::trace!(metric = def.label, best_value, winners = ?winner_ids, "metric winner");

    Some(MetricWinner {
        metric: def.metric,
        label: def.label,
        best_value,
        winner_ids,
    })
}
