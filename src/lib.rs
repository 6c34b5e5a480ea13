//! Deterministic portfolio-monitoring engine for venture investors.
//!
//! The crate derives financial metrics from raw company, round, and goal records,
//! scans them against a fixed rule set to produce ranked risk findings, aggregates
//! per-company health scores, and simulates remediations without persisting anything.
//! All entry points are pure: callers supply fully materialized collections and an
//! explicit evaluation instant, and receive freshly allocated output.

pub mod config;
pub mod monitor;
pub mod telemetry;
