use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for portfolio companies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub String);

/// Identifier wrapper for funding rounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundId(pub String);

/// Identifier wrapper for company goals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalId(pub String);

/// Identifier wrapper for people (founders, investors, operators).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub String);

/// Identifier wrapper for pipeline deals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealId(pub String);

/// Raw company record as persisted by the external storage layer.
///
/// Financial derivations (ARR, runway, burn multiple) are never stored; see
/// [`super::metrics::derive_company_metrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub is_portfolio: bool,
    pub cash_on_hand: f64,
    pub monthly_burn: f64,
    pub mrr: f64,
    pub last_material_update_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Active,
    Closing,
    Closed,
    Abandoned,
}

impl RoundStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closing => "closing",
            Self::Closed => "closed",
            Self::Abandoned => "abandoned",
        }
    }

    /// Rounds still gathering commitments and therefore subject to risk checks.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Active | Self::Closing)
    }
}

/// Raw funding-round record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub company_id: CompanyId,
    pub round_type: String,
    pub target_amount: f64,
    pub raised_amount: f64,
    pub status: RoundStatus,
    pub started_at: DateTime<Utc>,
    pub target_close_date: Option<DateTime<Utc>>,
    pub lead_investor_id: Option<PersonId>,
}

/// Raw goal record tracked against a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub company_id: CompanyId,
    pub title: String,
    pub target_value: f64,
    pub current_value: f64,
    pub target_date: DateTime<Utc>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonRole {
    Investor,
    Founder,
    Operator,
}

impl PersonRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Investor => "Investor",
            Self::Founder => "Founder",
            Self::Operator => "Operator",
        }
    }
}

/// Person record; investor-role people are candidates for lead assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub role: PersonRole,
}

/// Pipeline deal record. No detection rule reads deals, but they travel with the
/// dataset so remediation snapshots cover the full raw state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub company_id: CompanyId,
    pub stage: String,
    pub amount: f64,
}

/// A fully materialized snapshot of the raw dataset the engine operates on.
///
/// The engine never mutates a dataset it is handed; remediation returns a new
/// snapshot with shallow-copied collections and at most one replaced record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDataset {
    pub companies: Vec<Company>,
    pub people: Vec<Person>,
    pub rounds: Vec<Round>,
    pub goals: Vec<Goal>,
    pub deals: Vec<Deal>,
}

impl PortfolioDataset {
    pub fn company(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| &company.id == id)
    }
}
