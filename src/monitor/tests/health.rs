use super::common::*;
use crate::monitor::domain::CompanyId;
use crate::monitor::{calculate_health, Issue, IssueCategory, Severity};

fn issue_for(company_id: &str, severity: Severity) -> Issue {
    Issue {
        id: 1,
        company_id: CompanyId(company_id.to_string()),
        category: IssueCategory::CapitalSufficiency,
        severity,
        urgency_score: 50,
        title: "Runway at 4.0 months".to_string(),
        suggested_action: "Start fundraise preparation".to_string(),
        trigger_condition: "runway 4.00 < 6.0 months".to_string(),
        trigger_value: 4.0,
    }
}

#[test]
fn company_without_findings_scores_full_health() {
    let acme = healthy_company("acme");
    assert_eq!(calculate_health(&acme, &[]), 100);
}

#[test]
fn penalties_stack_linearly_by_severity() {
    let acme = healthy_company("acme");
    let issues = vec![
        issue_for("acme", Severity::Critical),
        issue_for("acme", Severity::High),
        issue_for("acme", Severity::Medium),
        issue_for("acme", Severity::Low),
    ];

    // 100 - 25 - 15 - 8 - 3
    assert_eq!(calculate_health(&acme, &issues), 49);
}

#[test]
fn other_companies_findings_are_ignored() {
    let acme = healthy_company("acme");
    let issues = vec![
        issue_for("beta", Severity::Critical),
        issue_for("acme", Severity::Medium),
    ];

    assert_eq!(calculate_health(&acme, &issues), 92);
}

#[test]
fn score_clamps_to_zero_under_an_adversarial_pile() {
    let acme = healthy_company("acme");
    let issues: Vec<_> = (0..40).map(|_| issue_for("acme", Severity::Critical)).collect();

    assert_eq!(calculate_health(&acme, &issues), 0);
}

#[test]
fn detection_output_feeds_scoring_directly() {
    let tight = company("tight", 250_000.0, 100_000.0, 50_000.0);
    let dataset = dataset_with_companies(vec![tight.clone()]);
    let issues = engine().detect(&dataset, &[], now());

    // One critical finding: 100 - 25.
    assert_eq!(calculate_health(&tight, &issues), 75);
}
