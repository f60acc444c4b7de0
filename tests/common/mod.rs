// Shared test helpers

#![allow(dead_code)]


use chrono::{NaiveDate, NaiveDateTime};
use efficacy::{Oscillator, OscillatorReading};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0).unwrap()
}

pub fn oscillator(id: i64, calendar_system_id: Option<i64>, is_control: bool) -> Oscillator {
    Oscillator {
        id,
        calendar_system_id,
        is_control,
    }
}

pub fn reading(
    oscillator_id: i64,
    hora_start: NaiveDateTime,
    prediction_matched: bool,
    signal_strength: f64,
) -> OscillatorReading {
    OscillatorReading {
        oscillator_id,
        hora_start,
        prediction_matched,
        signal_strength: Some(signal_strength),
    }
}

/// Splits a generated script into its statements, each from `INSERT INTO` up to (excluding) `;`.
pub fn statements(script: &str) -> Vec<&str> {
    script
        .split(';')
        .filter_map(|s| s.find("INSERT INTO").map(|i| &s[i..]))
        .collect()
}

/// The `YYYY-MM-DD` a rendered statement targets (taken from its SELECT clause).
pub fn target_date(statement: &str) -> &str {
    let start = statement.find("DATE('").unwrap() + "DATE('".len();
    &statement[start..start + 10]
}
