//! Pure metric derivation over raw records.
//!
//! Every function copies its derivations into a fresh struct and never touches
//! the input. Degenerate denominators yield `None` (or the documented sentinel)
//! rather than `NaN`/`Infinity`, so downstream rules can skip what they cannot
//! evaluate.

use chrono::{DateTime, Utc};

use super::domain::{Company, Goal, Round};

/// Days a goal counts as unattended when it has never been updated.
pub const NEVER_UPDATED_DAYS: i64 = 999;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompanyMetrics {
    pub arr: f64,
    pub runway: Option<f64>,
    pub burn_multiple: Option<f64>,
    pub days_since_update: Option<i64>,
}

pub fn derive_company_metrics(company: &Company, now: DateTime<Utc>) -> CompanyMetrics {
    let runway = if company.monthly_burn > 0.0 {
        Some(company.cash_on_hand / company.monthly_burn)
    } else {
        None
    };

    let burn_multiple = if company.mrr > 0.0 {
        Some(company.monthly_burn / company.mrr)
    } else {
        None
    };

    let days_since_update = company
        .last_material_update_at
        .map(|updated| (now - updated).num_days());

    CompanyMetrics {
        arr: company.mrr * 12.0,
        runway,
        burn_multiple,
        days_since_update,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundMetrics {
    pub coverage: f64,
    pub days_open: i64,
    pub days_to_close: Option<i64>,
}

pub fn derive_round_metrics(round: &Round, now: DateTime<Utc>) -> RoundMetrics {
    let coverage = if round.target_amount > 0.0 {
        round.raised_amount / round.target_amount
    } else {
        0.0
    };

    RoundMetrics {
        coverage,
        days_open: (now - round.started_at).num_days(),
        days_to_close: round
            .target_close_date
            .map(|close| (close - now).num_days()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalMetrics {
    pub progress: f64,
    pub is_completed: bool,
    pub days_to_deadline: i64,
    pub days_since_update: i64,
}

pub fn derive_goal_metrics(goal: &Goal, now: DateTime<Utc>) -> GoalMetrics {
    let progress = if goal.target_value > 0.0 {
        goal.current_value / goal.target_value
    } else {
        0.0
    };

    let days_since_update = goal
        .last_updated_at
        .map(|updated| (now - updated).num_days())
        .unwrap_or(NEVER_UPDATED_DAYS);

    GoalMetrics {
        progress,
        is_completed: progress >= 1.0,
        days_to_deadline: (goal.target_date - now).num_days(),
        days_since_update,
    }
}
