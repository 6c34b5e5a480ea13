use serde::{Deserialize, Serialize};

/// Threshold table driving the detection rules.
///
/// The defaults are the production rule set; individual thresholds can be
/// overridden through [`crate::config::AppConfig`] or directly in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub runway_warning_months: f64,
    pub runway_critical_months: f64,
    pub burn_multiple_warning: f64,
    pub burn_multiple_high: f64,
    pub staleness_warning_days: i64,
    pub staleness_high_days: i64,
    pub stalled_raise_days: i64,
    pub stalled_raise_coverage: f64,
    pub missing_lead_days: i64,
    pub goal_deadline_window_days: i64,
    pub goal_progress_critical: f64,
    pub goal_progress_warning: f64,
    pub goal_stalled_days: i64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            runway_warning_months: 6.0,
            runway_critical_months: 3.0,
            burn_multiple_warning: 3.0,
            burn_multiple_high: 5.0,
            staleness_warning_days: 14,
            staleness_high_days: 30,
            stalled_raise_days: 45,
            stalled_raise_coverage: 0.3,
            missing_lead_days: 30,
            goal_deadline_window_days: 30,
            goal_progress_critical: 0.3,
            goal_progress_warning: 0.7,
            goal_stalled_days: 21,
        }
    }
}
