mod config;
mod rules;

pub use config::DetectionConfig;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::domain::{CompanyId, PortfolioDataset};
use super::issue::{Issue, IssueCategory, ResolvedPriority};
use super::metrics::{derive_company_metrics, derive_goal_metrics, derive_round_metrics};

/// Stateless scanner that applies the threshold configuration to a dataset
/// snapshot and returns the ranked list of active findings.
pub struct DetectionEngine {
    config: DetectionConfig,
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

impl DetectionEngine {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Scan the dataset as of `now`.
    ///
    /// Ids are assigned in processing order (companies, then rounds, then
    /// goals, each in input order) before the final severity/urgency sort, so
    /// identical inputs always produce an identical list. Findings whose
    /// `(company, category, title)` tuple appears in `resolved` are dropped
    /// on the same path as findings that never triggered.
    pub fn detect(
        &self,
        dataset: &PortfolioDataset,
        resolved: &[ResolvedPriority],
        now: DateTime<Utc>,
    ) -> Vec<Issue> {
        let resolved_keys: HashSet<(&CompanyId, IssueCategory, &str)> = resolved
            .iter()
            .map(|entry| (&entry.company_id, entry.category, entry.title.as_str()))
            .collect();

        let mut issues: Vec<Issue> = Vec::new();
        let mut suppressed = 0usize;
        let mut next_id = 1u32;
        let mut emit = |company_id: &CompanyId, candidates: Vec<rules::Candidate>| {
            for candidate in candidates {
                let key = (company_id, candidate.category, candidate.title.as_str());
                if resolved_keys.contains(&key) {
                    suppressed += 1;
                    continue;
                }
                issues.push(Issue {
                    id: next_id,
                    company_id: company_id.clone(),
                    category: candidate.category,
                    severity: candidate.severity,
                    urgency_score: candidate.urgency_score,
                    title: candidate.title,
                    suggested_action: candidate.suggested_action,
                    trigger_condition: candidate.trigger_condition,
                    trigger_value: candidate.trigger_value,
                });
                next_id += 1;
            }
        };

        for company in dataset.companies.iter().filter(|c| c.is_portfolio) {
            let metrics = derive_company_metrics(company, now);
            emit(
                &company.id,
                rules::company_checks(company, &metrics, &self.config),
            );
        }

        for round in dataset.rounds.iter().filter(|r| r.status.is_open()) {
            let portfolio = dataset
                .company(&round.company_id)
                .is_some_and(|company| company.is_portfolio);
            if !portfolio {
                continue;
            }
            let metrics = derive_round_metrics(round, now);
            emit(
                &round.company_id,
                rules::round_checks(round, &metrics, &self.config),
            );
        }

        for goal in &dataset.goals {
            let portfolio = dataset
                .company(&goal.company_id)
                .is_some_and(|company| company.is_portfolio);
            if !portfolio {
                continue;
            }
            let metrics = derive_goal_metrics(goal, now);
            emit(
                &goal.company_id,
                rules::goal_checks(goal, &metrics, &self.config),
            );
        }

        issues.sort_by(|a, b| {
            a.severity
                .rank()
                .cmp(&b.severity.rank())
                .then(b.urgency_score.cmp(&a.urgency_score))
        });

        debug!(
            emitted = issues.len(),
            suppressed, "portfolio detection pass complete"
        );

        issues
    }
}
