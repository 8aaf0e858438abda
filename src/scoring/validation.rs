use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Weights must stay positive or the score stops being monotonic
    let weights = [
        ("revenue_weight", config.revenue_weight),
        ("leads_weight", config.leads_weight),
        ("cac_weight", config.cac_weight),
        ("time_weight", config.time_weight),
    ];
    for (name, weight) in weights {
        if let Some(w) = weight {
            if !w.is_finite() {
                errors.push(format!("scoring.{}: must be a finite number", name));
            } else if w <= 0.0 {
                errors.push(format!("scoring.{}: must be greater than zero, got {}", name, w));
            }
        }
    }

    if let Some(baseline) = config.time_baseline {
        if !baseline.is_finite() {
            errors.push("scoring.time_baseline: must be a finite number".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
