use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::monitor::domain::{
    Company, CompanyId, Goal, GoalId, Person, PersonId, PersonRole, PortfolioDataset, Round,
    RoundId, RoundStatus,
};
use crate::monitor::DetectionEngine;

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid evaluation instant")
}

pub(super) fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

pub(super) fn days_ahead(days: i64) -> DateTime<Utc> {
    now() + Duration::days(days)
}

pub(super) fn engine() -> DetectionEngine {
    DetectionEngine::default()
}

pub(super) fn company(id: &str, cash_on_hand: f64, monthly_burn: f64, mrr: f64) -> Company {
    Company {
        id: CompanyId(id.to_string()),
        name: format!("{id} Inc"),
        is_portfolio: true,
        cash_on_hand,
        monthly_burn,
        mrr,
        last_material_update_at: Some(days_ago(3)),
    }
}

/// Long runway, efficient burn, recently updated. Triggers nothing.
pub(super) fn healthy_company(id: &str) -> Company {
    company(id, 2_400_000.0, 100_000.0, 200_000.0)
}

pub(super) fn round(id: &str, company_id: &str, days_open: i64, coverage: f64) -> Round {
    Round {
        id: RoundId(id.to_string()),
        company_id: CompanyId(company_id.to_string()),
        round_type: "Seed".to_string(),
        target_amount: 2_000_000.0,
        raised_amount: 2_000_000.0 * coverage,
        status: RoundStatus::Active,
        started_at: days_ago(days_open),
        target_close_date: Some(days_ahead(30)),
        lead_investor_id: Some(PersonId("lead-0".to_string())),
    }
}

pub(super) fn goal(
    id: &str,
    company_id: &str,
    title: &str,
    current_value: f64,
    days_to_deadline: i64,
    updated_days_ago: Option<i64>,
) -> Goal {
    Goal {
        id: GoalId(id.to_string()),
        company_id: CompanyId(company_id.to_string()),
        title: title.to_string(),
        target_value: 100.0,
        current_value,
        target_date: days_ahead(days_to_deadline),
        last_updated_at: updated_days_ago.map(days_ago),
    }
}

pub(super) fn investor(id: &str, name: &str) -> Person {
    Person {
        id: PersonId(id.to_string()),
        name: name.to_string(),
        role: PersonRole::Investor,
    }
}

pub(super) fn dataset_with_companies(companies: Vec<Company>) -> PortfolioDataset {
    PortfolioDataset {
        companies,
        ..PortfolioDataset::default()
    }
}
