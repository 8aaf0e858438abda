pub mod config;
pub mod factors;
pub mod engine;
pub mod validation;

pub use config::*;
pub use factors::{Correction, SCORED_METRICS};
pub use engine::{
    calculate_score, compute_score, find_best_overall_id, rank_candidates, FactorContribution,
    RankedCandidate, ScoreBreakdown, ScoreResult, SCORE_TOLERANCE,
};
pub use validation::validate_scoring;
