//! Best-effort diagnostics for game configurations.
//!
//! The engine runs any configuration it is given, clamping where needed.
//! Validation exists so catalog loaders and the CLI can tell a user that a
//! profile will behave in a degraded or surprising way.

use gacha_core::{GameConfig, PickupPolicy, SoftPityCurve};

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The config cannot behave as written; the engine will degrade.
    Error,
    /// The config runs, but probably not as intended.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A problem found in a game configuration.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// The config field the issue is about.
    pub field: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Error or warning.
    pub severity: Severity,
}

impl ValidationIssue {
    fn error(field: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            message,
            severity: Severity::Error,
        }
    }

    fn warning(field: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            message,
            severity: Severity::Warning,
        }
    }

    /// Returns true for error-level issues.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.field, self.message)
    }
}

/// Validate a game configuration. An empty list means no issues.
pub fn validate_config(config: &GameConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_rate(&mut issues, "base_ssr_rate", config.base_ssr_rate);
    check_rate(&mut issues, "sr_rate", config.sr_rate);

    if config.r_rate() < 0.0 {
        issues.push(ValidationIssue::warning(
            "sr_rate",
            format!(
                "SSR and SR rates sum to {:.4}; R has no probability mass left",
                config.base_ssr_rate + config.sr_rate
            ),
        ));
    }

    if let Some(soft) = &config.soft_pity {
        if soft.curve == SoftPityCurve::Linear && config.hard_pity_threshold <= soft.start_count {
            issues.push(ValidationIssue::error(
                "soft_pity",
                format!(
                    "linear soft pity starts at {} but hard pity is {}; the curve is ignored",
                    soft.start_count, config.hard_pity_threshold
                ),
            ));
        }
        if soft.curve == SoftPityCurve::Additive && soft.increment <= 0.0 {
            issues.push(ValidationIssue::warning(
                "soft_pity",
                format!("additive increment {} never raises the rate", soft.increment),
            ));
        }
    }

    for (i, step) in config.rate_steps.iter().enumerate() {
        check_rate(&mut issues, &format!("rate_steps[{i}].ssr_rate"), step.ssr_rate);
    }
    if config
        .rate_steps
        .windows(2)
        .any(|w| w[1].after_count < w[0].after_count)
    {
        issues.push(ValidationIssue::warning(
            "rate_steps",
            "steps are not in ascending after_count order; the last listed match wins".to_string(),
        ));
    }

    match config.pickup_policy {
        PickupPolicy::AbsoluteRate(p) => {
            check_rate(&mut issues, "pickup_policy", p);
            if p > config.base_ssr_rate {
                issues.push(ValidationIssue::warning(
                    "pickup_policy",
                    format!(
                        "absolute pickup rate {p} exceeds the base SSR rate {}",
                        config.base_ssr_rate
                    ),
                ));
            }
        }
        PickupPolicy::RelativeRate(p) => check_rate(&mut issues, "pickup_policy", p),
        PickupPolicy::Always | PickupPolicy::FiftyFifty => {}
    }

    if !config.pity_reset_on_any_ssr
        && !config.has_hard_pity()
        && !config.tracks_exchange_points
        && config.soft_pity.is_none()
        && config.rate_steps.is_empty()
    {
        issues.push(ValidationIssue::warning(
            "pity_reset_on_any_ssr",
            "pity never resets and drives no rate change".to_string(),
        ));
    }

    issues
}

fn check_rate(issues: &mut Vec<ValidationIssue>, field: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        issues.push(ValidationIssue::error(
            field,
            format!("{value} is not a probability in [0, 1]"),
        ));
    }
}
