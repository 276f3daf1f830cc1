//! Threshold resolution and auto-calibration.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use tickbars_types::{BarType, Result, Threshold, Tick, TickbarsError};

/// Resolves a threshold specification into a concrete positive value.
///
/// Fixed thresholds pass through unchanged after validation. Auto thresholds
/// are calibrated as `ratio` times the mean daily total of the chosen
/// activity measure, rounded to the configured power-of-ten magnitude;
/// tick-count thresholds are additionally rounded to a whole number.
/// Resolution happens once, before grouping, and the resolved value is
/// emitted as a log event for operator visibility.
///
/// # Errors
///
/// Returns [`TickbarsError::InvalidThreshold`] if the fixed or resolved value
/// is not a positive, finite number, and [`TickbarsError::EmptyInput`] if an
/// auto threshold is requested for an empty tick slice.
pub fn resolve_threshold(
    ticks: &[Tick],
    bar_type: BarType,
    threshold: &Threshold,
) -> Result<f64> {
    match *threshold {
        Threshold::Fixed(value) => {
            if !value.is_finite() || value <= 0.0 {
                return Err(TickbarsError::InvalidThreshold(value));
            }
            Ok(value)
        }
        Threshold::Auto(params) => {
            if ticks.is_empty() {
                return Err(TickbarsError::EmptyInput);
            }

            let mean = mean_daily_activity(ticks, bar_type);
            let mut resolved = round_to_magnitude(mean * params.ratio, params.rounding);
            if bar_type == BarType::Tick {
                // Tick thresholds count whole trades.
                resolved = resolved.round();
            }

            if !resolved.is_finite() || resolved <= 0.0 {
                return Err(TickbarsError::InvalidThreshold(resolved));
            }

            tracing::info!(
                threshold = resolved,
                bar_type = %bar_type,
                ratio = params.ratio,
                rounding = params.rounding,
                "resolved auto threshold"
            );
            Ok(resolved)
        }
    }
}

/// Mean per-business-day total of the chosen activity measure.
///
/// Weekend ticks fold into the preceding Friday's bucket, and business days
/// without any activity between the first and last bucket count as zero,
/// matching a left-closed business-day resample of the input.
fn mean_daily_activity(ticks: &[Tick], bar_type: BarType) -> f64 {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for tick in ticks {
        let day = business_day(tick.timestamp.date_naive());
        *totals.entry(day).or_insert(0.0) += bar_type.measure(tick.price, tick.volume);
    }

    // Keys are business days by construction, so first and last anchor the
    // span of days the mean is taken over.
    let first = *totals.keys().next().expect("non-empty tick slice");
    let last = *totals.keys().next_back().expect("non-empty tick slice");

    let mut day = first;
    let mut day_count = 0u32;
    while day <= last {
        if !is_weekend(day) {
            day_count += 1;
        }
        day = day.succ_opt().expect("date within calendar range");
    }

    let total: f64 = totals.values().sum();
    total / f64::from(day_count)
}

/// Folds weekend dates into the preceding Friday.
fn business_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - TimeDelta::days(1),
        Weekday::Sun => date - TimeDelta::days(2),
        _ => date,
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Rounds to the power-of-ten magnitude given by `rounding`.
///
/// `rounding = -2` rounds to the nearest hundred, `rounding = 1` to the
/// nearest tenth.
fn round_to_magnitude(value: f64, rounding: i32) -> f64 {
    let factor = 10f64.powi(rounding);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};
    use tickbars_types::AutoThreshold;

    /// `count` unit-volume ticks spread over one day.
    fn day_of_ticks(year: i32, month: u32, day: u32, count: usize) -> Vec<Tick> {
        (0..count)
            .map(|i| {
                let timestamp = Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
                    + TimeDelta::seconds(i as i64);
                Tick::new(timestamp, 100.0, 1.0)
            })
            .collect()
    }

    #[test]
    fn test_fixed_passthrough() {
        let resolved = resolve_threshold(&[], BarType::Tick, &Threshold::Fixed(250.0)).unwrap();
        assert_relative_eq!(resolved, 250.0);
    }

    #[test]
    fn test_fixed_rejects_non_positive() {
        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = resolve_threshold(&[], BarType::Volume, &Threshold::Fixed(bad)).unwrap_err();
            assert!(matches!(err, TickbarsError::InvalidThreshold(_)));
        }
    }

    #[test]
    fn test_auto_rejects_empty_input() {
        let err = resolve_threshold(&[], BarType::Tick, &Threshold::auto()).unwrap_err();
        assert!(matches!(err, TickbarsError::EmptyInput));
    }

    #[test]
    fn test_auto_tick_threshold() {
        // 100 ticks on Monday + 100 on Tuesday: mean 100/day, 1/50 of that
        // is 2.
        let mut ticks = day_of_ticks(2024, 1, 1, 100);
        ticks.extend(day_of_ticks(2024, 1, 2, 100));

        let spec = Threshold::Auto(AutoThreshold::new(0, 0.02));
        let resolved = resolve_threshold(&ticks, BarType::Tick, &spec).unwrap();
        assert_relative_eq!(resolved, 2.0);
    }

    #[test]
    fn test_auto_rounding_magnitude() {
        // Mean daily volume 5000, ratio 0.05 -> 250, rounded to the nearest
        // hundred.
        let ticks = day_of_ticks(2024, 1, 1, 5000);
        let spec = Threshold::Auto(AutoThreshold::new(-2, 0.05));
        let resolved = resolve_threshold(&ticks, BarType::Volume, &spec).unwrap();
        assert_relative_eq!(resolved, 300.0);
    }

    #[test]
    fn test_auto_tick_threshold_is_whole() {
        // Mean 125 ticks/day * 0.02 = 2.5; tick thresholds round to whole
        // trades even when the magnitude rounding keeps the fraction.
        let ticks = day_of_ticks(2024, 1, 1, 125);
        let spec = Threshold::Auto(AutoThreshold::new(2, 0.02));
        let resolved = resolve_threshold(&ticks, BarType::Tick, &spec).unwrap();
        assert_relative_eq!(resolved, 3.0);
    }

    #[test]
    fn test_auto_ratio_doubling() {
        let mut ticks = day_of_ticks(2024, 1, 1, 300);
        ticks.extend(day_of_ticks(2024, 1, 2, 500));

        // Fine-grained rounding so the pre-rounding value passes through.
        let base = resolve_threshold(
            &ticks,
            BarType::Volume,
            &Threshold::Auto(AutoThreshold::new(6, 0.01)),
        )
        .unwrap();
        let doubled = resolve_threshold(
            &ticks,
            BarType::Volume,
            &Threshold::Auto(AutoThreshold::new(6, 0.02)),
        )
        .unwrap();
        assert_relative_eq!(doubled, base * 2.0);
        assert!(doubled > base);
    }

    #[test]
    fn test_weekend_folds_into_friday() {
        // Saturday and Sunday activity lands in Friday's bucket: one
        // business day in total.
        let mut ticks = day_of_ticks(2024, 1, 6, 40);
        ticks.extend(day_of_ticks(2024, 1, 7, 60));

        let spec = Threshold::Auto(AutoThreshold::new(0, 0.5));
        let resolved = resolve_threshold(&ticks, BarType::Tick, &spec).unwrap();
        assert_relative_eq!(resolved, 50.0);
    }

    #[test]
    fn test_empty_business_days_count_as_zero() {
        // Monday and Thursday with nothing in between: the mean spans four
        // business days.
        let mut ticks = day_of_ticks(2024, 1, 1, 200);
        ticks.extend(day_of_ticks(2024, 1, 4, 200));

        let spec = Threshold::Auto(AutoThreshold::new(0, 1.0));
        let resolved = resolve_threshold(&ticks, BarType::Tick, &spec).unwrap();
        assert_relative_eq!(resolved, 100.0);
    }

    #[test]
    fn test_auto_resolving_to_zero_fails() {
        let ticks = day_of_ticks(2024, 1, 1, 10);
        let spec = Threshold::Auto(AutoThreshold::new(-2, 1e-9));
        let err = resolve_threshold(&ticks, BarType::Tick, &spec).unwrap_err();
        assert!(matches!(err, TickbarsError::InvalidThreshold(_)));
    }

    #[test]
    fn test_zero_activity_fails() {
        // Zero-volume ticks give a zero mean daily volume.
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let ticks = vec![Tick::new(timestamp, 100.0, 0.0); 10];
        let err = resolve_threshold(&ticks, BarType::Volume, &Threshold::auto()).unwrap_err();
        assert!(matches!(err, TickbarsError::InvalidThreshold(_)));
    }

    #[test]
    fn test_round_to_magnitude() {
        assert_relative_eq!(round_to_magnitude(1249.0, -2), 1200.0);
        assert_relative_eq!(round_to_magnitude(1250.0, -2), 1300.0);
        assert_relative_eq!(round_to_magnitude(0.125, 2), 0.13);
        assert_relative_eq!(round_to_magnitude(7.4, 0), 7.0);
    }
}
