use serde::{Deserialize, Serialize};

use super::domain::CompanyId;

/// Severity tiers, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const fn ordered() -> [Self; 4] {
        [Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    /// Sort rank; lower sorts earlier in a priority list.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Health-score deduction per active issue of this severity.
    pub const fn penalty(self) -> u32 {
        match self {
            Self::Critical => 25,
            Self::High => 15,
            Self::Medium => 8,
            Self::Low => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Risk categories a finding can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    CapitalSufficiency,
    RevenueViability,
    AttentionMisallocation,
    MarketAccess,
    GoalRisk,
}

impl IssueCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CapitalSufficiency => "capital_sufficiency",
            Self::RevenueViability => "revenue_viability",
            Self::AttentionMisallocation => "attention_misallocation",
            Self::MarketAccess => "market_access",
            Self::GoalRisk => "goal_risk",
        }
    }
}

/// A single detected risk finding.
///
/// `id` is sequential within one detection pass and carries no meaning across
/// passes. `title` embeds the rounded trigger values and doubles as part of the
/// resolution identity; `trigger_value` exposes the raw metric for callers that
/// want a value-independent key instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u32,
    pub company_id: CompanyId,
    pub category: IssueCategory,
    pub severity: Severity,
    pub urgency_score: i64,
    pub title: String,
    pub suggested_action: String,
    pub trigger_condition: String,
    pub trigger_value: f64,
}

impl Issue {
    /// The tuple a [`ResolvedPriority`] must match to suppress this finding.
    pub fn resolution_key(&self) -> (&CompanyId, IssueCategory, &str) {
        (&self.company_id, self.category, self.title.as_str())
    }
}

/// Externally persisted marker that a specific finding was addressed.
///
/// The title embeds the value observed at detection time, so a metric drifting
/// to a new rounding produces a fresh title and the finding resurfaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedPriority {
    pub company_id: CompanyId,
    pub category: IssueCategory,
    pub title: String,
}

impl ResolvedPriority {
    pub fn for_issue(issue: &Issue) -> Self {
        Self {
            company_id: issue.company_id.clone(),
            category: issue.category,
            title: issue.title.clone(),
        }
    }
}
