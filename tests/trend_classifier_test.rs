// ABOUTME: Integration tests for trend classification over realistic progression series
// ABOUTME: Covers direction detection, noise override, and threshold boundary behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Engine Contributors

use progression_engine::config::TrendClassifierConfig;
use progression_engine::{ProgressionTrend, TrendClassifier};

fn classifier() -> TrendClassifier {
    TrendClassifier::with_config(TrendClassifierConfig::default())
}

#[test]
fn test_linear_progress_is_increasing() {
    let series = [100.0, 102.0, 104.0, 106.0, 108.0];
    assert_eq!(classifier().classify(&series), ProgressionTrend::Increasing);
}

#[test]
fn test_plateau_is_stable() {
    let series = [100.0, 100.0, 102.5, 100.0, 100.0, 102.5];
    assert_eq!(classifier().classify(&series), ProgressionTrend::Stable);
}

#[test]
fn test_regression_is_decreasing() {
    let series = [100.0, 97.5, 95.0, 92.5, 90.0];
    assert_eq!(classifier().classify(&series), ProgressionTrend::Decreasing);
}

#[test]
fn test_wild_oscillation_is_inconsistent() {
    let series = [100.0, 140.0, 95.0, 145.0, 90.0];
    assert_eq!(
        classifier().classify(&series),
        ProgressionTrend::Inconsistent
    );
}

#[test]
fn test_single_outlier_does_not_flip_to_increasing() {
    // A raw last-vs-first comparison would call this Increasing; the noise
    // override refuses to claim a direction instead.
    let series = [100.0, 100.0, 100.0, 100.0, 100.0, 180.0];
    let label = classifier().classify(&series);
    assert_ne!(label, ProgressionTrend::Increasing);
}

#[test]
fn test_middle_point_of_odd_series_is_excluded() {
    // The middle value is absurd but belongs to neither half, so it cannot
    // affect the halved averages.
    let series = [100.0, 102.0, 100_000.0, 106.0, 108.0];
    assert_eq!(classifier().classify(&series), ProgressionTrend::Increasing);
}

#[test]
fn test_below_minimum_points_is_stable() {
    assert_eq!(classifier().classify(&[100.0]), ProgressionTrend::Stable);
    assert_eq!(classifier().classify(&[]), ProgressionTrend::Stable);
}

#[test]
fn test_change_just_under_threshold_is_stable() {
    // Delta of +4% sits below the 5% improvement threshold.
    let series = [100.0, 100.0, 104.0, 104.0];
    assert_eq!(classifier().classify(&series), ProgressionTrend::Stable);
}

#[test]
fn test_change_at_threshold_is_increasing() {
    // Delta of exactly +5% meets the inclusive improvement threshold.
    let series = [100.0, 100.0, 105.0, 105.0];
    assert_eq!(classifier().classify(&series), ProgressionTrend::Increasing);
}

#[test]
fn test_custom_thresholds_are_honored() {
    let config = TrendClassifierConfig {
        improvement_threshold: 0.10,
        decline_threshold: -0.10,
        ..TrendClassifierConfig::default()
    };
    let series = [100.0, 100.0, 107.0, 107.0];
    assert_eq!(
        TrendClassifier::with_config(config).classify(&series),
        ProgressionTrend::Stable
    );
}

#[test]
fn test_relabeling_is_pure() {
    let series = [100.0, 103.0, 106.0, 109.0, 112.0, 115.0];
    let c = classifier();
    let first = c.classify(&series);
    for _ in 0..10 {
        assert_eq!(c.classify(&series), first);
    }
}
