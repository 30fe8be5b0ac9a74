use chrono::{Datelike, NaiveDate};
use label_sheet::content::{add_years, format_date, parse_date};
use label_sheet::*;

fn inputs(mode: LabelMode, mfd: &str) -> LabelInputs {
    LabelInputs {
        mode,
        mfd: mfd.to_string(),
        ..Default::default()
    }
}

fn rows(content: &LabelContent) -> Vec<String> {
    match content {
        LabelContent::FieldRows(rows) => rows.iter().map(|row| row.to_string()).collect(),
        LabelContent::CustomLines(_) => panic!("Expected field rows"),
    }
}

#[test]
fn test_mfd_only_scenario() {
    let content = build_content(&inputs(LabelMode::MfdOnly, "2026-02-03"));
    assert!(!content.is_custom());
    assert_eq!(rows(&content), vec!["MFD=03.02.26"]);
}

#[test]
fn test_mfd_exp_scenario() {
    let mut input = inputs(LabelMode::MfdExp, "2026-02-03");
    input.expiry_years = 3;
    let content = build_content(&input);
    assert_eq!(rows(&content), vec!["MFD=03.02.26", "EXP=03.02.29"]);
}

#[test]
fn test_mfd_exp_lot_clamps_lot() {
    let mut input = inputs(LabelMode::MfdExpLot, "2026-02-03");
    input.expiry_years = 3;
    input.lot = "150".to_string();
    let content = build_content(&input);
    assert_eq!(
        rows(&content),
        vec!["MFD=03.02.26", "EXP=03.02.29", "LOT=2602-99"]
    );
}

#[test]
fn test_lot_defaults_to_one_when_blank() {
    let mut input = inputs(LabelMode::MfdExpLot, "2026-02-03");
    input.lot = String::new();
    let content = build_content(&input);
    assert_eq!(rows(&content)[2], "LOT=2602-01");
}

#[test]
fn test_custom_drops_empty_lines() {
    let mut input = inputs(LabelMode::Custom, "");
    input.custom_lines = ["BATCH A".to_string(), String::new(), "X".to_string()];
    let content = build_content(&input);
    assert!(content.is_custom());
    assert_eq!(
        content,
        LabelContent::CustomLines(vec!["BATCH A".to_string(), "X".to_string()])
    );
}

#[test]
fn test_custom_keeps_whitespace_lines() {
    let mut input = inputs(LabelMode::Custom, "");
    input.custom_lines = [" ".to_string(), String::new(), String::new()];
    let content = build_content(&input);
    assert_eq!(content.len(), 1);
}

#[test]
fn test_custom_all_empty_is_empty_custom() {
    let content = build_content(&inputs(LabelMode::Custom, ""));
    assert!(content.is_custom());
    assert!(content.is_empty());
}

#[test]
fn test_missing_or_invalid_date_yields_empty() {
    for mode in [LabelMode::MfdOnly, LabelMode::MfdExp, LabelMode::MfdExpLot] {
        for mfd in ["", "not a date", "2026-13-01", "2026-02-30"] {
            let content = build_content(&inputs(mode, mfd));
            assert!(content.is_empty(), "{mode:?} with {mfd:?}");
            assert!(!content.is_custom());
        }
    }
}

#[test]
fn test_no_mode_produces_lot_without_exp_and_mfd() {
    for mode in LabelMode::ALL {
        let mut input = inputs(mode, "2026-02-03");
        input.custom_lines = ["LOT".to_string(), "EXP".to_string(), String::new()];
        let content = build_content(&input);
        let LabelContent::FieldRows(rows) = content else {
            assert!(mode.is_custom());
            continue;
        };
        let keys: Vec<FieldKey> = rows.iter().map(|row| row.key).collect();
        if keys.contains(&FieldKey::Lot) {
            assert!(keys.contains(&FieldKey::Exp), "{mode:?}");
        }
        if keys.contains(&FieldKey::Exp) {
            assert!(keys.contains(&FieldKey::Mfd), "{mode:?}");
        }
        // Fixed order: MFD, EXP, LOT
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "{mode:?}");
    }
}

#[test]
fn test_visible_text() {
    let mut input = inputs(LabelMode::MfdExp, "2026-02-03");
    input.expiry_years = 3;
    assert_eq!(
        build_content(&input).visible_text(),
        "MFD 03.02.26\nEXP 03.02.29"
    );
}

#[test]
fn test_add_years_is_calendar_correct() {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2029, 1, 1).unwrap();

    for date in start.iter_days().take_while(|d| *d < end) {
        for years in 0..=50u32 {
            let result = add_years(date, years).unwrap();
            assert_eq!(result.year(), date.year() + years as i32);
            assert_eq!(result.month(), date.month());

            match NaiveDate::from_ymd_opt(result.year(), date.month(), date.day()) {
                Some(same_day) => assert_eq!(result, same_day),
                None => {
                    // Only Feb 29 can be missing; it lands on Feb 28
                    assert_eq!((date.month(), date.day()), (2, 29));
                    assert_eq!(result.day(), 28);
                }
            }
        }
    }
}

#[test]
fn test_leap_day_expiry_label() {
    let mut input = inputs(LabelMode::MfdExp, "2024-02-29");
    input.expiry_years = 1;
    assert_eq!(rows(&build_content(&input))[1], "EXP=28.02.25");
}

#[test]
fn test_clamp_lot_range_and_idempotence() {
    for n in (-1_000i64..=1_000).chain([i64::MIN, i64::MAX, 0, 1, 99, 100]) {
        let clamped = clamp_lot(n);
        assert!((1..=99).contains(&clamped), "{n} -> {clamped}");
        assert_eq!(clamp_lot(clamped as i64), clamped);
    }
}

#[test]
fn test_date_helpers_round_trip_form_value() {
    let date = parse_date("2026-02-03").unwrap();
    assert_eq!(format_date(date), "03.02.26");
}
