//! Individual detection rules for companies, rounds, and goals.
//!
//! Each check is a pure function from a raw record plus its derived metrics to
//! zero or more candidate findings. Candidates carry everything an [`Issue`]
//! needs except the pass-local id, which the engine assigns after suppression.
//!
//! [`Issue`]: super::super::issue::Issue

use super::super::domain::{Company, Goal, Round};
use super::super::issue::{IssueCategory, Severity};
use super::super::metrics::{CompanyMetrics, GoalMetrics, RoundMetrics};
use super::config::DetectionConfig;

#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub category: IssueCategory,
    pub severity: Severity,
    pub urgency_score: i64,
    pub title: String,
    pub suggested_action: String,
    pub trigger_condition: String,
    pub trigger_value: f64,
}

pub(crate) fn company_checks(
    company: &Company,
    metrics: &CompanyMetrics,
    config: &DetectionConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    if let Some(runway) = metrics.runway {
        if runway < config.runway_warning_months {
            let critical = runway < config.runway_critical_months;
            candidates.push(Candidate {
                category: IssueCategory::CapitalSufficiency,
                severity: if critical {
                    Severity::Critical
                } else {
                    Severity::High
                },
                urgency_score: (100.0 - runway * 10.0).round() as i64,
                title: format!("Runway at {runway:.1} months"),
                suggested_action: if critical {
                    "Line up bridge financing or a runway extension within 30 days".to_string()
                } else {
                    "Start fundraise preparation and tighten discretionary spend".to_string()
                },
                trigger_condition: format!(
                    "runway {runway:.2} < {:.1} months",
                    config.runway_warning_months
                ),
                trigger_value: runway,
            });
        }
    }

    if let Some(burn_multiple) = metrics.burn_multiple {
        if burn_multiple > config.burn_multiple_warning {
            let high = burn_multiple > config.burn_multiple_high;
            candidates.push(Candidate {
                category: IssueCategory::RevenueViability,
                severity: if high { Severity::High } else { Severity::Medium },
                urgency_score: (burn_multiple * 15.0).min(90.0).round() as i64,
                title: format!("Burn multiple at {burn_multiple:.1}x"),
                suggested_action: if high {
                    "Rework the cost base; burn is far ahead of revenue".to_string()
                } else {
                    "Review spend efficiency against revenue growth".to_string()
                },
                trigger_condition: format!(
                    "burn_multiple {burn_multiple:.2} > {:.1}",
                    config.burn_multiple_warning
                ),
                trigger_value: burn_multiple,
            });
        }
    }

    if let Some(days) = metrics.days_since_update {
        if days > config.staleness_warning_days {
            let high = days > config.staleness_high_days;
            candidates.push(Candidate {
                category: IssueCategory::AttentionMisallocation,
                severity: if high { Severity::High } else { Severity::Medium },
                urgency_score: (days as f64 * 2.0).min(80.0).round() as i64,
                title: format!("No update in {days} days"),
                suggested_action: if high {
                    format!("Schedule a call with the {} founders this week", company.name)
                } else {
                    format!("Request a written update from {}", company.name)
                },
                trigger_condition: format!(
                    "days_since_update {days} > {}",
                    config.staleness_warning_days
                ),
                trigger_value: days as f64,
            });
        }
    }

    candidates
}

pub(crate) fn round_checks(
    round: &Round,
    metrics: &RoundMetrics,
    config: &DetectionConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let days_open = metrics.days_open;

    if days_open > config.stalled_raise_days && metrics.coverage < config.stalled_raise_coverage {
        candidates.push(Candidate {
            category: IssueCategory::MarketAccess,
            severity: Severity::High,
            urgency_score: (60.0 + days_open as f64 * 0.5).round() as i64,
            title: format!(
                "{} raise stalled at {:.0}% coverage after {days_open} days",
                round.round_type,
                metrics.coverage * 100.0
            ),
            suggested_action: "Revisit round strategy: target, valuation, or timeline".to_string(),
            trigger_condition: format!(
                "days_open {days_open} > {} && coverage {:.2} < {:.2}",
                config.stalled_raise_days, metrics.coverage, config.stalled_raise_coverage
            ),
            trigger_value: metrics.coverage,
        });
    }

    if round.lead_investor_id.is_none() && days_open > config.missing_lead_days {
        candidates.push(Candidate {
            category: IssueCategory::MarketAccess,
            severity: Severity::Medium,
            urgency_score: (40.0 + days_open as f64 * 0.3).round() as i64,
            title: format!("{} round needs lead after {days_open} days", round.round_type),
            suggested_action: "Introduce candidate lead investors from the network".to_string(),
            trigger_condition: format!(
                "lead_investor_id absent && days_open {days_open} > {}",
                config.missing_lead_days
            ),
            trigger_value: days_open as f64,
        });
    }

    candidates
}

pub(crate) fn goal_checks(
    goal: &Goal,
    metrics: &GoalMetrics,
    config: &DetectionConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if metrics.is_completed {
        return candidates;
    }

    let progress = metrics.progress;
    let days_to_deadline = metrics.days_to_deadline;
    let overdue = days_to_deadline < 0;
    let within_window = days_to_deadline < config.goal_deadline_window_days;
    let at_risk = overdue || (within_window && progress < config.goal_progress_critical);

    if at_risk || (within_window && progress < config.goal_progress_warning) {
        let severe = overdue || progress < config.goal_progress_critical;
        let urgency = 50.0
            + (1.0 - progress) * 30.0
            + (config.goal_deadline_window_days - days_to_deadline).max(0) as f64;
        candidates.push(Candidate {
            category: IssueCategory::GoalRisk,
            severity: if severe { Severity::High } else { Severity::Medium },
            urgency_score: urgency.round() as i64,
            title: if overdue {
                format!(
                    "{}: overdue by {} days at {:.0}% progress",
                    goal.title,
                    -days_to_deadline,
                    progress * 100.0
                )
            } else {
                format!(
                    "{}: {:.0}% progress with {days_to_deadline} days left",
                    goal.title,
                    progress * 100.0
                )
            },
            suggested_action: if severe {
                "Escalate with the founders and re-plan the goal".to_string()
            } else {
                "Check in on goal progress ahead of the deadline".to_string()
            },
            trigger_condition: format!(
                "days_to_deadline {days_to_deadline} < {} && progress {progress:.2} < {:.2}",
                config.goal_deadline_window_days,
                if at_risk {
                    config.goal_progress_critical
                } else {
                    config.goal_progress_warning
                }
            ),
            trigger_value: progress,
        });
    }

    let days_since_update = metrics.days_since_update;
    if days_since_update > config.goal_stalled_days {
        candidates.push(Candidate {
            category: IssueCategory::GoalRisk,
            severity: Severity::Medium,
            urgency_score: 40 + days_since_update,
            title: format!("{}: no update in {days_since_update} days", goal.title),
            suggested_action: "Ask the company for a status update on this goal".to_string(),
            trigger_condition: format!(
                "days_since_update {days_since_update} > {}",
                config.goal_stalled_days
            ),
            trigger_value: days_since_update as f64,
        });
    }

    candidates
}
