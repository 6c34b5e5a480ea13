use super::domain::Company;
use super::issue::Issue;

/// Aggregate a company's active findings into a 0–100 health score.
///
/// Starts at 100 and subtracts a fixed penalty per matching issue, by severity
/// (critical 25, high 15, medium 8, low 3). Penalties stack linearly and the
/// result is clamped to the [0, 100] range. Non-portfolio companies never
/// accumulate findings, so they always score 100.
pub fn calculate_health(company: &Company, issues: &[Issue]) -> u8 {
    let penalty: u32 = issues
        .iter()
        .filter(|issue| issue.company_id == company.id)
        .map(|issue| issue.severity.penalty())
        .sum();

    100u32.saturating_sub(penalty).min(100) as u8
}
