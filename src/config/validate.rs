//! Build configuration validation.
//!
//! A pure predicate over the resolved selections: every mandatory axis must
//! hold exactly one legal value, ordinals must sit inside their ranges,
//! conditionally required axes must be present when their trigger fires, and
//! the battery threshold ladder must be strictly ordered.
//!
//! Validation of independent axes is independent - all failures are
//! collected into a bounded list so one broken axis never hides another.
//! The validator never substitutes a default: a missing required axis is an
//! error, full stop. Defaults belong to the earlier resolution step in
//! [`settings`](crate::config::settings).

use heapless::Vec;

use crate::config::axes::{
    AccentColor,
    DistanceUnit,
    EpdDriver,
    EpdPanel,
    Font,
    HttpMode,
    Locale,
    PrecipUnit,
    PressureUnit,
    Sensor,
    TemperatureUnit,
    WeatherApi,
    WindArrowPrecision,
    WindDirectionLabel,
    WindSpeedUnit,
};
use crate::config::settings::{BuildConfig, DAILY_PRECIP_DISPLAY_MAX, DEBUG_LEVEL_MAX, HOUR_MAX};

// =============================================================================
// Axis Names
// =============================================================================

/// Human-readable axis names used in validation failures.
pub mod axis {
    pub const PANEL: &str = "display panel";
    pub const DRIVER: &str = "driver board";
    pub const SENSOR: &str = "indoor sensor";
    pub const LOCALE: &str = "locale";
    pub const WEATHER_API: &str = "weather API";
    pub const UNITS_TEMP: &str = "temperature unit";
    pub const UNITS_SPEED: &str = "wind speed unit";
    pub const UNITS_PRESSURE: &str = "pressure unit";
    pub const UNITS_DISTANCE: &str = "distance unit";
    pub const UNITS_HOURLY_PRECIP: &str = "hourly precipitation unit";
    pub const UNITS_DAILY_PRECIP: &str = "daily precipitation unit";
    pub const HTTP_MODE: &str = "HTTP mode";
    pub const WIND_LABEL: &str = "wind direction label";
    pub const WIND_ARROW: &str = "wind arrow precision";
    pub const ACCENT_COLOR: &str = "accent color";
    pub const FONT: &str = "font";
    pub const DAILY_PRECIP_DISPLAY: &str = "daily precipitation display";
    pub const HOURLY_ICONS: &str = "hourly icons toggle";
    pub const ALERTS: &str = "alerts toggle";
    pub const BATTERY_MONITORING: &str = "battery monitoring toggle";
    pub const DEBUG_LEVEL: &str = "debug level";
    pub const BED_HOUR: &str = "bed hour";
    pub const WAKE_HOUR: &str = "wake hour";
    pub const MIN_VOLTAGE: &str = "minimum battery voltage";
    pub const CRIT_LOW_VOLTAGE: &str = "critical low battery voltage";
    pub const VERY_LOW_VOLTAGE: &str = "very low battery voltage";
    pub const LOW_VOLTAGE: &str = "low battery voltage";
    pub const WARN_VOLTAGE: &str = "warn battery voltage";
    pub const MAX_VOLTAGE: &str = "maximum battery voltage";
}

// =============================================================================
// Errors
// =============================================================================

/// A single failed validation check, naming the offending axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ConfigError {
    /// Zero (or, defensively, more than one) domain values match the
    /// selection.
    #[error("illegal selection of {axis}")]
    InvalidSelection { axis: &'static str },

    /// A required axis was left unset and has no default.
    #[error("{axis} not selected")]
    Missing { axis: &'static str },

    /// A bounded ordinal sits outside its range.
    #[error("{axis} out of range: {value} (maximum {max})")]
    OutOfRange {
        axis: &'static str,
        value: u8,
        max: u8,
    },

    /// A multi-color panel is selected but no accent color is.
    #[error("accent color required for multi-color panel")]
    AccentColorRequired,

    /// OpenWeatherMap is selected but no API key is configured.
    #[error("weather API key required for OpenWeatherMap")]
    ApiKeyRequired,

    /// Two battery thresholds are out of order.
    #[error("battery thresholds unordered: {lower} must stay below {upper}")]
    ThresholdOrder {
        lower: &'static str,
        upper: &'static str,
    },
}

/// Upper bound on reportable failures; one slot per checkable axis.
pub const MAX_CONFIG_ERRORS: usize = 24;

/// Every validation failure found in one pass.
pub type ConfigErrors = Vec<ConfigError, MAX_CONFIG_ERRORS>;

// =============================================================================
// Checks
// =============================================================================

/// Count how many domain values equal the selection.
///
/// With disjoint enum domains the count is 0 or 1; more than one would mean
/// the domain itself lists a value twice, which is checked anyway.
fn selection_count<T: Copy + PartialEq>(
    domain: &[T],
    selected: T,
) -> usize {
    domain.iter().filter(|value| **value == selected).count()
}

fn check_exactly_one<T: Copy + PartialEq>(
    errors: &mut ConfigErrors,
    domain: &[T],
    selected: T,
    axis: &'static str,
) {
    if selection_count(domain, selected) != 1 {
        let _ = errors.push(ConfigError::InvalidSelection { axis });
    }
}

fn check_required<T: Copy + PartialEq>(
    errors: &mut ConfigErrors,
    domain: &[T],
    selected: Option<T>,
    axis: &'static str,
) {
    match selected {
        Some(value) => check_exactly_one(errors, domain, value, axis),
        None => {
            let _ = errors.push(ConfigError::Missing { axis });
        }
    }
}

fn check_range(
    errors: &mut ConfigErrors,
    value: u8,
    max: u8,
    axis: &'static str,
) {
    if value > max {
        let _ = errors.push(ConfigError::OutOfRange { axis, value, max });
    }
}

fn check_present(
    errors: &mut ConfigErrors,
    value: Option<bool>,
    axis: &'static str,
) {
    if value.is_none() {
        let _ = errors.push(ConfigError::Missing { axis });
    }
}

impl BuildConfig {
    /// Validate every axis, returning all failures at once.
    ///
    /// A configuration that fails here must never reach a wake cycle; the
    /// caller aborts before any runtime work.
    pub fn validate(&self) -> Result<(), ConfigErrors> {
        let mut errors = ConfigErrors::new();

        // Mandatory symbolic axes: exactly one legal value each
        check_exactly_one(&mut errors, &EpdPanel::ALL, self.panel, axis::PANEL);
        check_exactly_one(&mut errors, &EpdDriver::ALL, self.driver, axis::DRIVER);
        check_exactly_one(&mut errors, &Sensor::ALL, self.sensor, axis::SENSOR);
        check_exactly_one(&mut errors, &WeatherApi::ALL, self.weather_api, axis::WEATHER_API);
        check_exactly_one(&mut errors, &TemperatureUnit::ALL, self.units.temperature, axis::UNITS_TEMP);
        check_exactly_one(&mut errors, &WindSpeedUnit::ALL, self.units.wind_speed, axis::UNITS_SPEED);
        check_exactly_one(&mut errors, &PressureUnit::ALL, self.units.pressure, axis::UNITS_PRESSURE);
        check_exactly_one(&mut errors, &DistanceUnit::ALL, self.units.distance, axis::UNITS_DISTANCE);
        check_exactly_one(
            &mut errors,
            &PrecipUnit::ALL,
            self.units.hourly_precip,
            axis::UNITS_HOURLY_PRECIP,
        );
        check_exactly_one(
            &mut errors,
            &PrecipUnit::ALL,
            self.units.daily_precip,
            axis::UNITS_DAILY_PRECIP,
        );
        check_exactly_one(&mut errors, &HttpMode::ALL, self.http_mode, axis::HTTP_MODE);

        // Optional axes with a disabled sentinel inside the domain
        check_exactly_one(&mut errors, &WindDirectionLabel::ALL, self.wind_label, axis::WIND_LABEL);
        check_exactly_one(&mut errors, &WindArrowPrecision::ALL, self.wind_arrow, axis::WIND_ARROW);

        // Axes with no default: absence is an error
        check_required(&mut errors, &Locale::ALL, self.locale, axis::LOCALE);
        check_required(&mut errors, &Font::ALL, self.font, axis::FONT);
        check_present(&mut errors, self.display_hourly_icons, axis::HOURLY_ICONS);
        check_present(&mut errors, self.display_alerts, axis::ALERTS);
        check_present(&mut errors, self.battery_monitoring, axis::BATTERY_MONITORING);

        // Conditional: accent color only matters on multi-color panels
        if self.panel.is_multi_color() {
            match self.accent_color {
                Some(color) => check_exactly_one(&mut errors, &AccentColor::ALL, color, axis::ACCENT_COLOR),
                None => {
                    let _ = errors.push(ConfigError::AccentColorRequired);
                }
            }
        }

        // Conditional: OpenWeatherMap needs a credential
        if self.weather_api.requires_api_key() && self.api_key.is_none() {
            let _ = errors.push(ConfigError::ApiKeyRequired);
        }

        // Bounded ordinals
        check_range(
            &mut errors,
            self.display_daily_precip,
            DAILY_PRECIP_DISPLAY_MAX,
            axis::DAILY_PRECIP_DISPLAY,
        );
        check_range(&mut errors, self.debug_level, DEBUG_LEVEL_MAX, axis::DEBUG_LEVEL);
        check_range(&mut errors, self.sleep.bed_hour, HOUR_MAX, axis::BED_HOUR);
        check_range(&mut errors, self.sleep.wake_hour, HOUR_MAX, axis::WAKE_HOUR);

        // Battery threshold ladder
        if let Err(error) = self.battery.check_order() {
            let _ = errors.push(error);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::axes::AccentColor;
    use crate::config::battery::BatteryConfig;

    /// A fully specified configuration that passes validation.
    fn valid_config() -> BuildConfig {
        BuildConfig {
            locale: Some(Locale::EnUs),
            api_key: Some("0123456789abcdef"),
            font: Some(Font::FreeSans),
            display_hourly_icons: Some(true),
            display_alerts: Some(true),
            battery_monitoring: Some(true),
            ..BuildConfig::new()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_missing_locale_fails() {
        let mut config = valid_config();
        config.locale = None;
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], ConfigError::Missing { axis: axis::LOCALE });
    }

    #[test]
    fn test_missing_font_fails() {
        let mut config = valid_config();
        config.font = None;
        let errors = config.validate().unwrap_err();
        assert!(errors.contains(&ConfigError::Missing { axis: axis::FONT }));
    }

    #[test]
    fn test_missing_toggles_fail() {
        let mut config = valid_config();
        config.display_hourly_icons = None;
        config.display_alerts = None;
        config.battery_monitoring = None;
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ConfigError::Missing { axis: axis::HOURLY_ICONS }));
        assert!(errors.contains(&ConfigError::Missing { axis: axis::ALERTS }));
        assert!(errors.contains(&ConfigError::Missing {
            axis: axis::BATTERY_MONITORING
        }));
    }

    #[test]
    fn test_multi_color_panel_requires_accent() {
        for panel in [EpdPanel::ThreeColorB, EpdPanel::SevenColorF] {
            let mut config = valid_config();
            config.panel = panel;
            config.accent_color = None;
            let errors = config.validate().unwrap_err();
            assert!(errors.contains(&ConfigError::AccentColorRequired));

            config.accent_color = Some(AccentColor::Red);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_two_color_panel_never_requires_accent() {
        for panel in [EpdPanel::BwV1, EpdPanel::BwV2] {
            // Without an accent color
            let mut config = valid_config();
            config.panel = panel;
            config.accent_color = None;
            assert!(config.validate().is_ok());

            // A supplied accent color on a 2-color panel is not an error
            config.accent_color = Some(AccentColor::Yellow);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_openweathermap_requires_api_key() {
        let mut config = valid_config();
        config.weather_api = WeatherApi::OpenWeatherMap;
        config.api_key = None;
        let errors = config.validate().unwrap_err();
        assert!(errors.contains(&ConfigError::ApiKeyRequired));
    }

    #[test]
    fn test_open_meteo_needs_no_api_key() {
        let mut config = valid_config();
        config.weather_api = WeatherApi::OpenMeteo;
        config.api_key = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_daily_precip_display_range() {
        for value in 0..=DAILY_PRECIP_DISPLAY_MAX {
            let mut config = valid_config();
            config.display_daily_precip = value;
            assert!(config.validate().is_ok());
        }
        let mut config = valid_config();
        config.display_daily_precip = 3;
        let errors = config.validate().unwrap_err();
        assert_eq!(
            errors[0],
            ConfigError::OutOfRange {
                axis: axis::DAILY_PRECIP_DISPLAY,
                value: 3,
                max: 2,
            }
        );
    }

    #[test]
    fn test_debug_level_range() {
        for value in 0..=DEBUG_LEVEL_MAX {
            let mut config = valid_config();
            config.debug_level = value;
            assert!(config.validate().is_ok());
        }
        let mut config = valid_config();
        config.debug_level = 9;
        let errors = config.validate().unwrap_err();
        assert!(errors.contains(&ConfigError::OutOfRange {
            axis: axis::DEBUG_LEVEL,
            value: 9,
            max: 2,
        }));
    }

    #[test]
    fn test_schedule_hours_range() {
        let mut config = valid_config();
        config.sleep.bed_hour = 24;
        config.sleep.wake_hour = 99;
        let errors = config.validate().unwrap_err();
        assert!(errors.contains(&ConfigError::OutOfRange {
            axis: axis::BED_HOUR,
            value: 24,
            max: HOUR_MAX,
        }));
        assert!(errors.contains(&ConfigError::OutOfRange {
            axis: axis::WAKE_HOUR,
            value: 99,
            max: HOUR_MAX,
        }));
    }

    #[test]
    fn test_unordered_thresholds_fail() {
        let mut config = valid_config();
        config.battery = BatteryConfig {
            low_mv: 3535,
            warn_mv: 3462, // swapped with low_mv
            ..BatteryConfig::new()
        };
        let errors = config.validate().unwrap_err();
        assert!(matches!(errors[0], ConfigError::ThresholdOrder { .. }));
    }

    #[test]
    fn test_independent_failures_all_reported() {
        // Three unrelated axes broken at once: none hides another
        let mut config = valid_config();
        config.locale = None;
        config.debug_level = 7;
        config.panel = EpdPanel::SevenColorF;
        config.accent_color = None;
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ConfigError::Missing { axis: axis::LOCALE }));
        assert!(errors.contains(&ConfigError::OutOfRange {
            axis: axis::DEBUG_LEVEL,
            value: 7,
            max: 2,
        }));
        assert!(errors.contains(&ConfigError::AccentColorRequired));
    }

    #[test]
    fn test_validation_is_pure() {
        let config = valid_config();
        let first = config.validate();
        let second = config.validate();
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_messages_name_the_axis() {
        let message = format!("{}", ConfigError::Missing { axis: axis::LOCALE });
        assert!(message.contains("locale"), "got: {message}");

        let message = format!(
            "{}",
            ConfigError::OutOfRange {
                axis: axis::DEBUG_LEVEL,
                value: 9,
                max: 2,
            }
        );
        assert!(message.contains("debug level"), "got: {message}");

        let message = format!(
            "{}",
            ConfigError::ThresholdOrder {
                lower: axis::LOW_VOLTAGE,
                upper: axis::WARN_VOLTAGE,
            }
        );
        assert!(message.contains("low battery voltage"), "got: {message}");
    }

    #[test]
    fn test_selection_count_on_disjoint_domain() {
        assert_eq!(selection_count(&EpdPanel::ALL, EpdPanel::BwV2), 1);
        assert_eq!(selection_count(&Font::ALL, Font::UbuntuMono), 1);
    }
}
