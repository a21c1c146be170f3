//! Wire-format ingestion.
//!
//! The backend keeps booleans as 0/1 integers and the holiday list as a
//! text column holding a JSON array, so rows may arrive with either
//! encoding. Rows are deserialized into the partial [`PresetRecord`] and
//! then passed through [`normalize`], the single point where missing
//! fields are filled from the canonical defaults.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::models::preset::{Growth, Holiday, PresetConfig, SeasonalityMode};

/// A preset row as the backend returns it. Every parameter is optional;
/// row metadata (`id`, `is_active`, timestamps) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetRecord {
    #[serde(default)]
    pub preset_name: Option<String>,
    #[serde(default)]
    pub growth: Option<Growth>,
    #[serde(default)]
    pub changepoint_prior_scale: Option<f64>,
    #[serde(default)]
    pub seasonality_prior_scale: Option<f64>,
    #[serde(default)]
    pub seasonality_mode: Option<SeasonalityMode>,
    #[serde(default, deserialize_with = "opt_loose_bool")]
    pub daily_seasonality: Option<bool>,
    #[serde(default, deserialize_with = "opt_loose_bool")]
    pub weekly_seasonality: Option<bool>,
    #[serde(default, deserialize_with = "opt_loose_bool")]
    pub yearly_seasonality: Option<bool>,
    #[serde(default)]
    pub forecast_periods: Option<i64>,
    #[serde(default)]
    pub floor_multiplier: Option<f64>,
    #[serde(default)]
    pub cap_multiplier: Option<f64>,
    #[serde(default)]
    pub n_changepoints: Option<i64>,
    #[serde(default)]
    pub changepoint_range: Option<f64>,
    #[serde(default)]
    pub interval_width: Option<f64>,
    #[serde(default)]
    pub holidays_prior_scale: Option<f64>,
    #[serde(default, deserialize_with = "opt_holiday_set")]
    pub holidays: Option<BTreeSet<Holiday>>,
    #[serde(default, deserialize_with = "opt_loose_bool")]
    pub custom_seasonality_enabled: Option<bool>,
    #[serde(default)]
    pub custom_seasonality_name: Option<String>,
    #[serde(default)]
    pub custom_seasonality_period: Option<f64>,
    #[serde(default)]
    pub custom_seasonality_fourier_order: Option<i64>,
}

/// Fill any missing fields from the canonical defaults.
///
/// Applied uniformly at every ingestion point (list and get responses).
pub fn normalize(record: PresetRecord, defaults: &PresetConfig) -> PresetConfig {
    PresetConfig {
        growth: record.growth.unwrap_or(defaults.growth),
        changepoint_prior_scale: record
            .changepoint_prior_scale
            .unwrap_or(defaults.changepoint_prior_scale),
        seasonality_prior_scale: record
            .seasonality_prior_scale
            .unwrap_or(defaults.seasonality_prior_scale),
        seasonality_mode: record.seasonality_mode.unwrap_or(defaults.seasonality_mode),
        daily_seasonality: record.daily_seasonality.unwrap_or(defaults.daily_seasonality),
        weekly_seasonality: record
            .weekly_seasonality
            .unwrap_or(defaults.weekly_seasonality),
        yearly_seasonality: record
            .yearly_seasonality
            .unwrap_or(defaults.yearly_seasonality),
        forecast_periods: record.forecast_periods.unwrap_or(defaults.forecast_periods),
        floor_multiplier: record.floor_multiplier.unwrap_or(defaults.floor_multiplier),
        cap_multiplier: record.cap_multiplier.unwrap_or(defaults.cap_multiplier),
        n_changepoints: record.n_changepoints.unwrap_or(defaults.n_changepoints),
        changepoint_range: record.changepoint_range.unwrap_or(defaults.changepoint_range),
        interval_width: record.interval_width.unwrap_or(defaults.interval_width),
        holidays_prior_scale: record
            .holidays_prior_scale
            .unwrap_or(defaults.holidays_prior_scale),
        holidays: record.holidays.unwrap_or_else(|| defaults.holidays.clone()),
        custom_seasonality_enabled: record
            .custom_seasonality_enabled
            .unwrap_or(defaults.custom_seasonality_enabled),
        custom_seasonality_name: record
            .custom_seasonality_name
            .unwrap_or_else(|| defaults.custom_seasonality_name.clone()),
        custom_seasonality_period: record
            .custom_seasonality_period
            .unwrap_or(defaults.custom_seasonality_period),
        custom_seasonality_fourier_order: record
            .custom_seasonality_fourier_order
            .unwrap_or(defaults.custom_seasonality_fourier_order),
    }
}

// ---------------------------------------------------------------------------
// Loose deserializers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseBool {
    Bool(bool),
    Int(i64),
}

/// Accept `true`/`false` as well as 0/1 integers.
fn opt_loose_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseBool>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        LooseBool::Bool(b) => b,
        LooseBool::Int(i) => i != 0,
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseHolidays {
    List(Vec<String>),
    Text(String),
}

/// Accept a JSON array of holiday names or a string containing one.
/// Names outside the catalog are dropped with a warning.
fn opt_holiday_set<'de, D>(deserializer: D) -> Result<Option<BTreeSet<Holiday>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<LooseHolidays>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(v) => v,
    };
    let names = match value {
        LooseHolidays::List(names) => names,
        LooseHolidays::Text(text) => serde_json::from_str::<Vec<String>>(&text)
            .map_err(|e| serde::de::Error::custom(format!("invalid holidays text: {e}")))?,
    };
    let mut holidays = BTreeSet::new();
    for name in names {
        match Holiday::from_wire(&name) {
            Some(h) => {
                holidays.insert(h);
            }
            None => warn!(holiday = %name, "dropping holiday outside the catalog"),
        }
    }
    Ok(Some(holidays))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> PresetRecord {
        serde_json::from_value(value).expect("deserialize record")
    }

    #[test]
    fn integer_booleans_normalize_to_bool() {
        let r = record(json!({
            "preset_name": "Default",
            "daily_seasonality": 1,
            "weekly_seasonality": 0,
            "yearly_seasonality": true,
        }));
        assert_eq!(r.daily_seasonality, Some(true));
        assert_eq!(r.weekly_seasonality, Some(false));
        assert_eq!(r.yearly_seasonality, Some(true));
    }

    #[test]
    fn holidays_accept_array_and_encoded_text() {
        let r = record(json!({ "holidays": ["christmas_day", "boxing_day"] }));
        let set = r.holidays.expect("holidays");
        assert!(set.contains(&Holiday::ChristmasDay));
        assert!(set.contains(&Holiday::BoxingDay));

        let r = record(json!({ "holidays": "[\"good_friday\"]" }));
        let set = r.holidays.expect("holidays");
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Holiday::GoodFriday));
    }

    #[test]
    fn unknown_holidays_are_dropped() {
        let r = record(json!({ "holidays": ["christmas_day", "festivus"] }));
        let set = r.holidays.expect("holidays");
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Holiday::ChristmasDay));
    }

    #[test]
    fn row_metadata_is_ignored() {
        let r = record(json!({
            "id": 7,
            "preset_name": "Winter",
            "is_active": 1,
            "created_at": "2025-11-02 10:00:00",
            "updated_at": "2025-11-02 10:00:00",
            "growth": "logistic",
        }));
        assert_eq!(r.preset_name.as_deref(), Some("Winter"));
        assert_eq!(r.growth, Some(Growth::Logistic));
    }

    #[test]
    fn normalize_fills_missing_fields_from_defaults() {
        let defaults = PresetConfig::default();
        let r = record(json!({
            "preset_name": "Sparse",
            "forecast_periods": 90,
            "growth": "logistic",
        }));
        let config = normalize(r, &defaults);
        assert_eq!(config.forecast_periods, 90);
        assert_eq!(config.growth, Growth::Logistic);
        assert_eq!(config.changepoint_prior_scale, defaults.changepoint_prior_scale);
        assert_eq!(config.n_changepoints, defaults.n_changepoints);
        assert_eq!(config.custom_seasonality_period, defaults.custom_seasonality_period);
    }

    #[test]
    fn full_row_survives_normalization_unchanged() {
        let r = record(json!({
            "preset_name": "Full",
            "growth": "logistic",
            "changepoint_prior_scale": 0.2,
            "seasonality_prior_scale": 5.0,
            "seasonality_mode": "additive",
            "daily_seasonality": 1,
            "weekly_seasonality": 0,
            "yearly_seasonality": 1,
            "forecast_periods": 120,
            "floor_multiplier": 0.25,
            "cap_multiplier": 2.0,
            "n_changepoints": 30,
            "changepoint_range": 0.9,
            "interval_width": 0.95,
            "holidays_prior_scale": 1.0,
            "holidays": ["summer_bank_holiday"],
            "custom_seasonality_enabled": 1,
            "custom_seasonality_name": "monthly",
            "custom_seasonality_period": 30.5,
            "custom_seasonality_fourier_order": 5,
        }));
        let config = normalize(r, &PresetConfig::default());
        assert_eq!(config.growth, Growth::Logistic);
        assert_eq!(config.seasonality_mode, SeasonalityMode::Additive);
        assert!(config.daily_seasonality);
        assert!(!config.weekly_seasonality);
        assert_eq!(config.forecast_periods, 120);
        assert_eq!(config.cap_multiplier, 2.0);
        assert!(config.holidays.contains(&Holiday::SummerBankHoliday));
        assert!(config.custom_seasonality_enabled);
        assert_eq!(config.custom_seasonality_name, "monthly");
        assert_eq!(config.custom_seasonality_fourier_order, 5);
    }
}
