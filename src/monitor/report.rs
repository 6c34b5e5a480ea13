//! Serializable portfolio-level views over a detection pass, for display by an
//! embedding UI layer.

use serde::Serialize;

use super::domain::{CompanyId, PortfolioDataset};
use super::health::calculate_health;
use super::issue::{Issue, Severity};

const TOP_PRIORITY_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct CompanyHealthEntry {
    pub company_id: CompanyId,
    pub name: String,
    pub health: u8,
    pub open_issues: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_severity: Option<Severity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeverityCountEntry {
    pub severity: Severity,
    pub severity_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrioritySnapshot {
    pub company_id: CompanyId,
    pub company_name: String,
    pub severity: Severity,
    pub urgency_score: i64,
    pub title: String,
    pub suggested_action: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub company_health: Vec<CompanyHealthEntry>,
    pub severity_counts: Vec<SeverityCountEntry>,
    pub top_priorities: Vec<PrioritySnapshot>,
    pub observations: Vec<String>,
}

/// Build the portfolio summary from a dataset snapshot and the ranked findings
/// of one detection pass. Pure; companies keep their input order.
pub fn summarize(dataset: &PortfolioDataset, issues: &[Issue]) -> PortfolioSummary {
    let company_health: Vec<CompanyHealthEntry> = dataset
        .companies
        .iter()
        .filter(|company| company.is_portfolio)
        .map(|company| {
            let matching: Vec<&Issue> = issues
                .iter()
                .filter(|issue| issue.company_id == company.id)
                .collect();
            let worst_severity = matching
                .iter()
                .map(|issue| issue.severity)
                .min_by_key(|severity| severity.rank());
            CompanyHealthEntry {
                company_id: company.id.clone(),
                name: company.name.clone(),
                health: calculate_health(company, issues),
                open_issues: matching.len(),
                worst_severity,
            }
        })
        .collect();

    let severity_counts = Severity::ordered()
        .into_iter()
        .map(|severity| SeverityCountEntry {
            severity,
            severity_label: severity.label(),
            count: issues
                .iter()
                .filter(|issue| issue.severity == severity)
                .count(),
        })
        .collect();

    let top_priorities = issues
        .iter()
        .take(TOP_PRIORITY_LIMIT)
        .map(|issue| PrioritySnapshot {
            company_id: issue.company_id.clone(),
            company_name: dataset
                .company(&issue.company_id)
                .map(|company| company.name.clone())
                .unwrap_or_default(),
            severity: issue.severity,
            urgency_score: issue.urgency_score,
            title: issue.title.clone(),
            suggested_action: issue.suggested_action.clone(),
        })
        .collect();

    let observations = build_observations(&company_health, issues);

    PortfolioSummary {
        company_health,
        severity_counts,
        top_priorities,
        observations,
    }
}

fn build_observations(company_health: &[CompanyHealthEntry], issues: &[Issue]) -> Vec<String> {
    let mut observations = Vec::new();

    if issues.is_empty() {
        observations.push("No active findings; portfolio is tracking clean".to_string());
        return observations;
    }

    observations.push(format!(
        "{} active finding(s) across {} portfolio company(ies)",
        issues.len(),
        company_health
            .iter()
            .filter(|entry| entry.open_issues > 0)
            .count()
    ));

    let critical = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Critical)
        .count();
    if critical > 0 {
        observations.push(format!(
            "{critical} critical finding(s) demand immediate attention"
        ));
    }

    if let Some(weakest) = company_health.iter().min_by_key(|entry| entry.health) {
        observations.push(format!(
            "{} is the weakest holding at {} health",
            weakest.name, weakest.health
        ));
    }

    if !company_health.is_empty() {
        let total: u32 = company_health.iter().map(|entry| entry.health as u32).sum();
        observations.push(format!(
            "Average portfolio health is {}",
            total / company_health.len() as u32
        ));
    }

    observations
}
