//! Numerology integration tests.
//!
//! Covers the worked examples, the master-number rule and the meaning
//! fallback, plus property checks over arbitrary dates.

use arcana::numerology::{
    compute_destiny, compute_life_path, compute_personality, lookup_meaning, reduce, BirthDate,
    NumerologyEngine, MASTER_NUMBERS,
};
use arcana::ArcanaError;
use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

fn engine() -> NumerologyEngine {
    NumerologyEngine::new().with_today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
}

/// Days from 0001-01-01 through 9999-12-31.
const CALENDAR_DAYS: u64 = 3_652_059;

fn date_from_offset(offset: u64) -> BirthDate {
    let first = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
    let date = first.checked_add_days(Days::new(offset)).unwrap();
    BirthDate::new(date.year().unsigned_abs(), date.month(), date.day()).unwrap()
}

fn in_range(n: u32) -> bool {
    (1..=9).contains(&n) || MASTER_NUMBERS.contains(&n)
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_1990_05_15() {
    let result = engine().analyze_str("1990-05-15").unwrap();

    assert_eq!(result.life_path, 3);
    assert_eq!(result.destiny, 3);
    assert_eq!(result.personality, 6);
}

#[test]
fn test_1988_11_29_keeps_master_personality() {
    let result = engine().analyze_str("1988-11-29").unwrap();

    assert_eq!(result.life_path, 3);
    assert_eq!(result.destiny, 3);
    assert_eq!(result.personality, 11, "29 reduces to 11 and stops");
    assert_eq!(result.personality_meaning, lookup_meaning(11).personality);
}

#[test]
fn test_master_life_path() {
    // 1+9+7+3 + 0+3 + 0+6 = 29 -> 11
    let date = BirthDate::new(1973, 3, 6).unwrap();
    assert_eq!(compute_life_path(&date), 11);
}

#[test]
fn test_fallback_applied_per_number() {
    let engine = engine();
    // Life path 11 has its own entry; nothing here falls back.
    let result = engine.analyze(&BirthDate::new(1973, 3, 6).unwrap());
    assert_eq!(result.life_path_meaning, lookup_meaning(11).life);

    // Unmapped numbers share entry 9 for every field.
    for n in [0, 10, 12, 33, 100] {
        assert_eq!(lookup_meaning(n), lookup_meaning(9));
    }
}

// =============================================================================
// Rejected Input
// =============================================================================

#[test]
fn test_rejected_inputs() {
    let engine = engine();
    for input in ["", "   ", "15.05.1990", "1990-5", "0000-01-01", "1990-13-01", "1990-02-30", "2030-01-01"] {
        let err = engine.analyze_str(input).unwrap_err();
        assert!(matches!(err, ArcanaError::InvalidInput(_)), "{input:?} gave {err:?}");
    }
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_calendar_bounds() {
    assert_eq!(date_from_offset(0).to_string(), "0001-01-01");
    assert_eq!(date_from_offset(CALENDAR_DAYS - 1).to_string(), "9999-12-31");
}

#[test]
fn test_month_end_days_in_range() {
    for (year, month, day) in [(1988, 11, 29), (1999, 12, 31), (2000, 1, 30), (1977, 7, 29)] {
        let date = BirthDate::new(year, month, day).unwrap();
        assert!(in_range(compute_life_path(&date)));
        assert!(in_range(compute_destiny(&date)));
        assert!(in_range(compute_personality(&date)));
    }
}

#[test]
fn test_reduce_idempotent_on_masters() {
    for n in MASTER_NUMBERS {
        assert_eq!(reduce(n), n);
        assert_eq!(reduce(reduce(n)), n);
    }
}

proptest! {
    #[test]
    fn prop_numbers_in_range(offset in 0..CALENDAR_DAYS) {
        let date = date_from_offset(offset);
        prop_assert!(in_range(compute_life_path(&date)));
        prop_assert!(in_range(compute_destiny(&date)));
        prop_assert!(in_range(compute_personality(&date)));
    }

    #[test]
    fn prop_reduce_is_fixed_point(n in 1u32..) {
        let once = reduce(n);
        prop_assert!(in_range(once));
        prop_assert_eq!(reduce(once), once);
    }

    #[test]
    fn prop_unmapped_falls_back_to_nine(n in any::<u32>()) {
        let known = (1..=9).contains(&n) || n == 11 || n == 22;
        if !known {
            prop_assert_eq!(lookup_meaning(n), lookup_meaning(9));
        }
    }

    #[test]
    fn prop_analyze_matches_parts(year in 1900u32..=2020, month in 1u32..=12, day in 1u32..=28) {
        let date = BirthDate::new(year, month, day).unwrap();
        let result = engine().analyze(&date);
        prop_assert_eq!(result.life_path, compute_life_path(&date));
        prop_assert_eq!(result.destiny, compute_destiny(&date));
        prop_assert_eq!(result.personality, compute_personality(&date));
        prop_assert_eq!(result.destiny_meaning.as_str(), lookup_meaning(result.destiny).destiny);
    }
}
