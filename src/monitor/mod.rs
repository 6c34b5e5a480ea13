pub mod domain;
pub mod metrics;

mod detection;
mod health;
mod issue;
mod report;
mod resolution;

#[cfg(test)]
mod tests;

pub use detection::{DetectionConfig, DetectionEngine};
pub use health::calculate_health;
pub use issue::{Issue, IssueCategory, ResolvedPriority, Severity};
pub use report::{
    CompanyHealthEntry, PortfolioSummary, PrioritySnapshot, SeverityCountEntry, summarize,
};
pub use resolution::{apply_resolution, resolution_summary, ResolutionAction, ResolutionOutcome};
