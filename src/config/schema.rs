use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides for the composite score weights; defaults when absent
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
