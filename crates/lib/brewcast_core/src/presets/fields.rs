//! Field-level text coercion — parses form input into a draft config.
//!
//! Values are parsed by field type only. The advisory UI ranges are not
//! clamped here; the backend is the authority for rejecting out-of-range
//! values.

use std::collections::BTreeSet;

use crate::models::preset::{Growth, Holiday, PresetConfig, SeasonalityMode};

use super::PresetError;

/// Apply one text input to the given config. On any parse failure the
/// config is left untouched.
pub fn apply_field(config: &mut PresetConfig, field: &str, raw: &str) -> Result<(), PresetError> {
    match field {
        "growth" => config.growth = parse_growth(raw)?,
        "changepoint_prior_scale" => config.changepoint_prior_scale = parse_float(field, raw)?,
        "seasonality_prior_scale" => config.seasonality_prior_scale = parse_float(field, raw)?,
        "seasonality_mode" => config.seasonality_mode = parse_seasonality_mode(raw)?,
        "daily_seasonality" => config.daily_seasonality = parse_bool(field, raw)?,
        "weekly_seasonality" => config.weekly_seasonality = parse_bool(field, raw)?,
        "yearly_seasonality" => config.yearly_seasonality = parse_bool(field, raw)?,
        "forecast_periods" => config.forecast_periods = parse_int(field, raw)?,
        "floor_multiplier" => config.floor_multiplier = parse_float(field, raw)?,
        "cap_multiplier" => config.cap_multiplier = parse_float(field, raw)?,
        "n_changepoints" => config.n_changepoints = parse_int(field, raw)?,
        "changepoint_range" => config.changepoint_range = parse_float(field, raw)?,
        "interval_width" => config.interval_width = parse_float(field, raw)?,
        "holidays_prior_scale" => config.holidays_prior_scale = parse_float(field, raw)?,
        "holidays" => config.holidays = parse_holidays(raw)?,
        "custom_seasonality_enabled" => config.custom_seasonality_enabled = parse_bool(field, raw)?,
        "custom_seasonality_name" => config.custom_seasonality_name = raw.to_string(),
        "custom_seasonality_period" => config.custom_seasonality_period = parse_float(field, raw)?,
        "custom_seasonality_fourier_order" => {
            config.custom_seasonality_fourier_order = parse_int(field, raw)?;
        }
        other => {
            return Err(PresetError::Validation(format!("Unknown field: {other}")));
        }
    }
    Ok(())
}

fn parse_float(field: &str, raw: &str) -> Result<f64, PresetError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| PresetError::Validation(format!("Invalid number for {field}: '{raw}'")))?;
    // f64::parse accepts "NaN" and "inf"; neither is a usable parameter.
    if !value.is_finite() {
        return Err(PresetError::Validation(format!(
            "Invalid number for {field}: '{raw}'"
        )));
    }
    Ok(value)
}

fn parse_int(field: &str, raw: &str) -> Result<i64, PresetError> {
    raw.trim()
        .parse()
        .map_err(|_| PresetError::Validation(format!("Invalid integer for {field}: '{raw}'")))
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, PresetError> {
    match raw.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(PresetError::Validation(format!(
            "Invalid boolean for {field}: '{raw}'"
        ))),
    }
}

fn parse_growth(raw: &str) -> Result<Growth, PresetError> {
    Growth::from_wire(raw.trim())
        .ok_or_else(|| PresetError::Validation(format!("Invalid growth: '{raw}'")))
}

fn parse_seasonality_mode(raw: &str) -> Result<SeasonalityMode, PresetError> {
    SeasonalityMode::from_wire(raw.trim())
        .ok_or_else(|| PresetError::Validation(format!("Invalid seasonality mode: '{raw}'")))
}

/// Comma-separated holiday names; an empty input clears the set.
fn parse_holidays(raw: &str) -> Result<BTreeSet<Holiday>, PresetError> {
    let mut holidays = BTreeSet::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let holiday = Holiday::from_wire(name)
            .ok_or_else(|| PresetError::Validation(format!("Unknown holiday: '{name}'")))?;
        holidays.insert(holiday);
    }
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_field_type() {
        let mut config = PresetConfig::default();
        apply_field(&mut config, "growth", "logistic").expect("growth");
        apply_field(&mut config, "forecast_periods", "90").expect("int");
        apply_field(&mut config, "interval_width", "0.9").expect("float");
        apply_field(&mut config, "daily_seasonality", "true").expect("bool");
        apply_field(&mut config, "holidays", "christmas_day, boxing_day").expect("holidays");
        apply_field(&mut config, "custom_seasonality_name", "monthly").expect("string");

        assert_eq!(config.growth, Growth::Logistic);
        assert_eq!(config.forecast_periods, 90);
        assert_eq!(config.interval_width, 0.9);
        assert!(config.daily_seasonality);
        assert_eq!(config.holidays.len(), 2);
        assert_eq!(config.custom_seasonality_name, "monthly");
    }

    #[test]
    fn garbage_numeric_input_is_a_validation_error() {
        let mut config = PresetConfig::default();
        let before = config.clone();

        let err = apply_field(&mut config, "changepoint_prior_scale", "abc").unwrap_err();
        assert!(matches!(err, PresetError::Validation(_)));
        assert_eq!(config, before, "draft must be untouched on parse failure");
    }

    #[test]
    fn nan_is_rejected_not_stored() {
        let mut config = PresetConfig::default();
        let before = config.clone();

        let err = apply_field(&mut config, "seasonality_prior_scale", "NaN").unwrap_err();
        assert!(matches!(err, PresetError::Validation(_)));
        assert_eq!(config, before);
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        // Range enforcement is the backend's job.
        let mut config = PresetConfig::default();
        apply_field(&mut config, "forecast_periods", "9000").expect("parse");
        assert_eq!(config.forecast_periods, 9000);
    }

    #[test]
    fn unknown_field_and_unknown_holiday_are_rejected() {
        let mut config = PresetConfig::default();
        assert!(matches!(
            apply_field(&mut config, "fourier_disorder", "3"),
            Err(PresetError::Validation(_))
        ));
        assert!(matches!(
            apply_field(&mut config, "holidays", "christmas_day,festivus"),
            Err(PresetError::Validation(_))
        ));
    }

    #[test]
    fn empty_holidays_input_clears_the_set() {
        let mut config = PresetConfig::default();
        apply_field(&mut config, "holidays", "good_friday").expect("set");
        apply_field(&mut config, "holidays", "").expect("clear");
        assert!(config.holidays.is_empty());
    }
}
