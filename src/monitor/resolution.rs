//! Simulated remediation of detected findings.
//!
//! Resolving a finding never persists anything: the caller receives a new
//! dataset snapshot with shallow-copied collections and at most one replaced
//! record, plus a flag saying whether anything changed. Intent is derived once
//! from the finding's category and title into a [`ResolutionAction`], which
//! both the mutation and the summary rendering consume.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::domain::{PersonRole, PortfolioDataset};
use super::issue::{Issue, IssueCategory};

/// The remediation a finding implies, resolved from its category and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionAction {
    /// Top cash up to six additional months of runway.
    ExtendRunway,
    /// Reset MRR so the burn multiple lands at the 2.0x target.
    ResetBurnMultiple,
    /// Record a fresh material update from the company.
    RefreshUpdate,
    /// Assign the first available investor as lead on the open round.
    AssignLead,
    /// Advance the goal by 30% of its target, capped at completion.
    AdvanceGoal,
}

impl ResolutionAction {
    /// Map a finding to its remediation. Findings whose title matches no known
    /// pattern for their category (for example a stalled raise) map to `None`
    /// and resolve as a no-op.
    pub fn for_issue(issue: &Issue) -> Option<Self> {
        match issue.category {
            IssueCategory::CapitalSufficiency if issue.title.contains("Runway") => {
                Some(Self::ExtendRunway)
            }
            IssueCategory::RevenueViability if issue.title.contains("Burn multiple") => {
                Some(Self::ResetBurnMultiple)
            }
            IssueCategory::AttentionMisallocation if issue.title.contains("No update") => {
                Some(Self::RefreshUpdate)
            }
            IssueCategory::MarketAccess if issue.title.contains("needs lead") => {
                Some(Self::AssignLead)
            }
            IssueCategory::GoalRisk => Some(Self::AdvanceGoal),
            _ => None,
        }
    }
}

/// Result of applying a remediation to a dataset snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionOutcome {
    pub dataset: PortfolioDataset,
    /// False when the finding mapped to no action or its target record is
    /// gone; the caller should surface this as "nothing changed".
    pub changed: bool,
}

/// Apply the remediation a finding implies to a copy of the dataset.
pub fn apply_resolution(
    issue: &Issue,
    dataset: &PortfolioDataset,
    now: DateTime<Utc>,
) -> ResolutionOutcome {
    let mut next = dataset.clone();
    let changed = match ResolutionAction::for_issue(issue) {
        Some(ResolutionAction::ExtendRunway) => extend_runway(issue, &mut next, now),
        Some(ResolutionAction::ResetBurnMultiple) => reset_burn_multiple(issue, &mut next, now),
        Some(ResolutionAction::RefreshUpdate) => refresh_update(issue, &mut next, now),
        Some(ResolutionAction::AssignLead) => assign_lead(issue, &mut next),
        Some(ResolutionAction::AdvanceGoal) => advance_goal(issue, &mut next, now),
        None => false,
    };

    if changed {
        info!(
            company = %issue.company_id.0,
            category = issue.category.label(),
            "applied simulated remediation"
        );
    } else {
        debug!(
            company = %issue.company_id.0,
            category = issue.category.label(),
            "remediation was a no-op"
        );
    }

    ResolutionOutcome { dataset: next, changed }
}

/// Human-readable description of what resolving the finding would simulate,
/// independent of whether [`apply_resolution`] is invoked.
pub fn resolution_summary(issue: &Issue) -> String {
    match ResolutionAction::for_issue(issue) {
        Some(ResolutionAction::ExtendRunway) => {
            "Tops cash up to six additional months of runway and records a material update"
                .to_string()
        }
        Some(ResolutionAction::ResetBurnMultiple) => {
            "Resets MRR to bring the burn multiple back to the 2.0x target and records a material update"
                .to_string()
        }
        Some(ResolutionAction::RefreshUpdate) => {
            "Records a fresh material update from the company".to_string()
        }
        Some(ResolutionAction::AssignLead) => {
            "Assigns the first available investor as lead on the company's open round".to_string()
        }
        Some(ResolutionAction::AdvanceGoal) => {
            "Records +30% advancement toward the goal target, capped at completion".to_string()
        }
        None => "No automatic remediation applies to this finding; the dataset is left unchanged"
            .to_string(),
    }
}

fn extend_runway(issue: &Issue, next: &mut PortfolioDataset, now: DateTime<Utc>) -> bool {
    let Some(company) = next
        .companies
        .iter_mut()
        .find(|company| company.id == issue.company_id)
    else {
        return false;
    };
    if company.monthly_burn <= 0.0 {
        return false;
    }
    let runway = company.cash_on_hand / company.monthly_burn;
    company.cash_on_hand = company.monthly_burn * (runway + 6.0);
    company.last_material_update_at = Some(now);
    true
}

fn reset_burn_multiple(issue: &Issue, next: &mut PortfolioDataset, now: DateTime<Utc>) -> bool {
    let Some(company) = next
        .companies
        .iter_mut()
        .find(|company| company.id == issue.company_id)
    else {
        return false;
    };
    if company.monthly_burn <= 0.0 {
        return false;
    }
    company.mrr = company.monthly_burn / 2.0;
    company.last_material_update_at = Some(now);
    true
}

fn refresh_update(issue: &Issue, next: &mut PortfolioDataset, now: DateTime<Utc>) -> bool {
    let Some(company) = next
        .companies
        .iter_mut()
        .find(|company| company.id == issue.company_id)
    else {
        return false;
    };
    company.last_material_update_at = Some(now);
    true
}

fn assign_lead(issue: &Issue, next: &mut PortfolioDataset) -> bool {
    let Some(lead_id) = next
        .people
        .iter()
        .find(|person| person.role == PersonRole::Investor)
        .map(|person| person.id.clone())
    else {
        return false;
    };
    let Some(round) = next.rounds.iter_mut().find(|round| {
        round.company_id == issue.company_id
            && round.status.is_open()
            && round.lead_investor_id.is_none()
    }) else {
        return false;
    };
    round.lead_investor_id = Some(lead_id);
    true
}

fn advance_goal(issue: &Issue, next: &mut PortfolioDataset, now: DateTime<Utc>) -> bool {
    let Some(prefix) = issue.title.split(':').next().map(str::trim) else {
        return false;
    };
    let Some(goal) = next
        .goals
        .iter_mut()
        .find(|goal| goal.company_id == issue.company_id && goal.title == prefix)
    else {
        return false;
    };
    goal.current_value = (goal.current_value + 0.3 * goal.target_value).min(goal.target_value);
    goal.last_updated_at = Some(now);
    true
}
