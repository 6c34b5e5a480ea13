use super::common::*;
use crate::monitor::metrics::{
    derive_company_metrics, derive_goal_metrics, derive_round_metrics, NEVER_UPDATED_DAYS,
};

#[test]
fn company_derivations_cover_the_basic_ratios() {
    let acme = company("acme", 1_200_000.0, 100_000.0, 50_000.0);

    let metrics = derive_company_metrics(&acme, now());

    assert_eq!(metrics.arr, 600_000.0);
    assert_eq!(metrics.runway, Some(12.0));
    assert_eq!(metrics.burn_multiple, Some(2.0));
    assert_eq!(metrics.days_since_update, Some(3));
}

#[test]
fn zero_denominators_derive_to_none_not_infinity() {
    let mut acme = company("acme", 1_200_000.0, 0.0, 0.0);
    acme.last_material_update_at = None;

    let metrics = derive_company_metrics(&acme, now());

    assert_eq!(metrics.runway, None);
    assert_eq!(metrics.burn_multiple, None);
    assert_eq!(metrics.days_since_update, None);
}

#[test]
fn round_coverage_defaults_to_zero_for_degenerate_targets() {
    let mut seed = round("r1", "acme", 10, 0.5);
    seed.target_amount = 0.0;

    let metrics = derive_round_metrics(&seed, now());

    assert_eq!(metrics.coverage, 0.0);
    assert_eq!(metrics.days_open, 10);
    assert_eq!(metrics.days_to_close, Some(30));
}

#[test]
fn round_without_close_date_has_no_days_to_close() {
    let mut seed = round("r1", "acme", 10, 0.5);
    seed.target_close_date = None;

    assert_eq!(derive_round_metrics(&seed, now()).days_to_close, None);
}

#[test]
fn goal_progress_and_deadline_derivations() {
    let g = goal("g1", "acme", "Hit 1M ARR", 40.0, 12, Some(5));

    let metrics = derive_goal_metrics(&g, now());

    assert_eq!(metrics.progress, 0.4);
    assert!(!metrics.is_completed);
    assert_eq!(metrics.days_to_deadline, 12);
    assert_eq!(metrics.days_since_update, 5);
}

#[test]
fn never_updated_goal_falls_back_to_the_sentinel() {
    let g = goal("g1", "acme", "Hit 1M ARR", 40.0, 12, None);

    assert_eq!(derive_goal_metrics(&g, now()).days_since_update, NEVER_UPDATED_DAYS);
}

#[test]
fn zero_target_goal_reads_as_no_progress() {
    let mut g = goal("g1", "acme", "Hit 1M ARR", 40.0, 12, Some(5));
    g.target_value = 0.0;

    let metrics = derive_goal_metrics(&g, now());

    assert_eq!(metrics.progress, 0.0);
    assert!(!metrics.is_completed);
}
