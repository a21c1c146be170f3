//! Preset domain models.
//!
//! A preset is a named bundle of forecasting-model parameters stored by the
//! backend. The struct below is the structurally complete form: every field
//! is always present, with [`PresetConfig::default`] as the canonical
//! instance used to fill gaps in backend responses.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Reserved preset name that always exists and cannot be deleted.
pub const DEFAULT_PRESET: &str = "Default";

/// Trend growth mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Growth {
    Linear,
    /// Saturating growth; floor/cap multipliers apply in this mode.
    Logistic,
}

impl Growth {
    /// Wire text representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Growth::Linear => "linear",
            Growth::Logistic => "logistic",
        }
    }

    /// Parse the wire text representation.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "linear" => Some(Growth::Linear),
            "logistic" => Some(Growth::Logistic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Growth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How seasonal components combine with the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalityMode {
    Multiplicative,
    Additive,
}

impl SeasonalityMode {
    /// Wire text representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonalityMode::Multiplicative => "multiplicative",
            SeasonalityMode::Additive => "additive",
        }
    }

    /// Parse the wire text representation.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "multiplicative" => Some(SeasonalityMode::Multiplicative),
            "additive" => Some(SeasonalityMode::Additive),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeasonalityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed holiday catalog — UK bank holidays.
///
/// Presets reference holidays by these names only; anything else coming
/// from the backend is dropped at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    NewYearsDay,
    GoodFriday,
    EasterMonday,
    EarlyMayBankHoliday,
    SpringBankHoliday,
    SummerBankHoliday,
    ChristmasDay,
    BoxingDay,
}

impl Holiday {
    /// Every holiday in the catalog, in calendar order.
    pub const ALL: [Holiday; 8] = [
        Holiday::NewYearsDay,
        Holiday::GoodFriday,
        Holiday::EasterMonday,
        Holiday::EarlyMayBankHoliday,
        Holiday::SpringBankHoliday,
        Holiday::SummerBankHoliday,
        Holiday::ChristmasDay,
        Holiday::BoxingDay,
    ];

    /// Wire text representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "new_years_day",
            Holiday::GoodFriday => "good_friday",
            Holiday::EasterMonday => "easter_monday",
            Holiday::EarlyMayBankHoliday => "early_may_bank_holiday",
            Holiday::SpringBankHoliday => "spring_bank_holiday",
            Holiday::SummerBankHoliday => "summer_bank_holiday",
            Holiday::ChristmasDay => "christmas_day",
            Holiday::BoxingDay => "boxing_day",
        }
    }

    /// Parse the wire text representation.
    pub fn from_wire(s: &str) -> Option<Self> {
        Holiday::ALL.iter().copied().find(|h| h.as_str() == s)
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete set of forecasting-model parameters.
///
/// The numeric ranges in the field docs are advisory UI bounds. They are
/// not enforced here; the backend is the authority for rejecting values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetConfig {
    pub growth: Growth,
    /// Trend flexibility, 0.001–0.5. Lower = smoother.
    pub changepoint_prior_scale: f64,
    /// Seasonality strength, 0.1–100.
    pub seasonality_prior_scale: f64,
    pub seasonality_mode: SeasonalityMode,
    pub daily_seasonality: bool,
    pub weekly_seasonality: bool,
    pub yearly_seasonality: bool,
    /// Days to forecast, 1–730.
    pub forecast_periods: i64,
    /// Minimum-constraint multiplier, 0–0.95. Meaningful for logistic growth.
    pub floor_multiplier: f64,
    /// Maximum-constraint multiplier, 1.1–5.0. Meaningful for logistic growth.
    pub cap_multiplier: f64,
    /// Candidate trend changepoints, 5–50.
    pub n_changepoints: i64,
    /// Fraction of history in which changepoints are placed, 0.6–0.95.
    pub changepoint_range: f64,
    /// Width of the uncertainty interval, 0.50–0.99.
    pub interval_width: f64,
    /// Holiday effect strength, 0.1–100.
    pub holidays_prior_scale: f64,
    pub holidays: BTreeSet<Holiday>,
    pub custom_seasonality_enabled: bool,
    /// Required non-empty when custom seasonality is enabled.
    pub custom_seasonality_name: String,
    /// Period in days, 7–365.
    pub custom_seasonality_period: f64,
    /// Fourier order, 1–20.
    pub custom_seasonality_fourier_order: i64,
}

impl Default for PresetConfig {
    /// The canonical default instance — the values the backend seeds its
    /// `"Default"` preset with.
    fn default() -> Self {
        Self {
            growth: Growth::Linear,
            changepoint_prior_scale: 0.05,
            seasonality_prior_scale: 10.0,
            seasonality_mode: SeasonalityMode::Multiplicative,
            daily_seasonality: false,
            weekly_seasonality: true,
            yearly_seasonality: true,
            forecast_periods: 365,
            floor_multiplier: 0.5,
            cap_multiplier: 1.5,
            n_changepoints: 25,
            changepoint_range: 0.8,
            interval_width: 0.80,
            holidays_prior_scale: 10.0,
            holidays: BTreeSet::new(),
            custom_seasonality_enabled: false,
            custom_seasonality_name: String::new(),
            custom_seasonality_period: 30.5,
            custom_seasonality_fourier_order: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_seed() {
        let d = PresetConfig::default();
        assert_eq!(d.growth, Growth::Linear);
        assert_eq!(d.seasonality_mode, SeasonalityMode::Multiplicative);
        assert!(!d.daily_seasonality);
        assert!(d.weekly_seasonality);
        assert!(d.yearly_seasonality);
        assert_eq!(d.forecast_periods, 365);
        assert_eq!(d.n_changepoints, 25);
        assert!(d.holidays.is_empty());
        assert!(!d.custom_seasonality_enabled);
    }

    #[test]
    fn enums_round_trip_through_wire_names() {
        assert_eq!(Growth::from_wire("logistic"), Some(Growth::Logistic));
        assert_eq!(Growth::from_wire("exponential"), None);
        assert_eq!(
            SeasonalityMode::from_wire("additive"),
            Some(SeasonalityMode::Additive)
        );
        for h in Holiday::ALL {
            assert_eq!(Holiday::from_wire(h.as_str()), Some(h));
        }
        assert_eq!(Holiday::from_wire("talk_like_a_pirate_day"), None);
    }

    #[test]
    fn config_serializes_with_lowercase_enums() {
        let mut config = PresetConfig::default();
        config.growth = Growth::Logistic;
        config.holidays.insert(Holiday::ChristmasDay);
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["growth"], "logistic");
        assert_eq!(json["seasonality_mode"], "multiplicative");
        assert_eq!(json["holidays"][0], "christmas_day");
        assert_eq!(json["daily_seasonality"], false);
    }
}
