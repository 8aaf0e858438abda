//! Compare candidate options by business impact.
//!
//! Two independent, pure computations over the same inputs:
//! [`compute_winners`] picks the best candidate(s) per catalog metric, and
//! [`compute_score`] collapses a candidate into one weighted score where
//! higher is always better.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod impact;
pub mod logging;
pub mod output;
pub mod scoring;

pub use catalog::{Direction, Metric, MetricDefinition, CATALOG};
pub use compare::{compute_winners, MetricWinner, WinnersReport, WINNER_TOLERANCE};
pub use impact::{is_numeric, Candidate, ImpactBundle};
pub use scoring::{
    calculate_score, compute_score, find_best_overall_id, rank_candidates, ScoringPolicy,
};
