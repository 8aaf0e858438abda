pub mod winners;

pub use winners::{compute_winners, MetricWinner, WinnersReport, WINNER_TOLERANCE};
