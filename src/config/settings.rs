//! Resolved build-time selections.
//!
//! [`BuildConfig`] is the single immutable configuration value for one
//! firmware image. It is constructed once (in `main.rs`, the analog of the
//! user-edited configuration header) and passed explicitly into the validator
//! and the power policy; nothing reads it as ambient global state.
//!
//! Defaulting is a separate, earlier step than validation:
//! [`BuildConfig::new`] carries the documented defaults for the optional
//! axes, while axes with no default (locale, font, the three feature
//! toggles) stay `None` until the image author sets them. The validator
//! treats a remaining `None` as an error; it never substitutes a default.

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
use crate::config::battery::BatteryConfig;

// =============================================================================
// Ordinal Ranges
// =============================================================================

/// Daily precipitation readout under Hi|Lo: 0 hide, 1 show, 2 smart
/// (show only when precipitation is forecast).
pub const DAILY_PRECIP_DISPLAY_MAX: u8 = 2;

/// Serial verbosity: 0 status only, 1 debug, 2 full API responses.
pub const DEBUG_LEVEL_MAX: u8 = 2;

/// Hours are 0-23.
pub const HOUR_MAX: u8 = 23;

// =============================================================================
// Unit Selections
// =============================================================================

/// The six measurement unit axes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Units {
    pub temperature: TemperatureUnit,
    pub wind_speed: WindSpeedUnit,
    pub pressure: PressureUnit,
    pub distance: DistanceUnit,
    pub hourly_precip: PrecipUnit,
    pub daily_precip: PrecipUnit,
}

impl Units {
    /// Metric preset: Celsius, km/h, millibars, kilometers, PoP, millimeters.
    pub const fn metric() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            wind_speed: WindSpeedUnit::KilometersPerHour,
            pressure: PressureUnit::Millibars,
            distance: DistanceUnit::Kilometers,
            hourly_precip: PrecipUnit::Pop,
            daily_precip: PrecipUnit::Millimeters,
        }
    }

    /// Imperial preset: Fahrenheit, mph, inches of mercury, miles, PoP,
    /// inches.
    pub const fn imperial() -> Self {
        Self {
            temperature: TemperatureUnit::Fahrenheit,
            wind_speed: WindSpeedUnit::MilesPerHour,
            pressure: PressureUnit::InchesOfMercury,
            distance: DistanceUnit::Miles,
            hourly_precip: PrecipUnit::Pop,
            daily_precip: PrecipUnit::Inches,
        }
    }
}

// =============================================================================
// Sleep Schedule
// =============================================================================

/// Refresh cadence and the overnight quiet window.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct SleepSchedule {
    /// Standard refresh interval (minutes).
    pub sleep_minutes: u32,
    /// Hour (0-23) after which refreshes pause overnight.
    pub bed_hour: u8,
    /// Hour (0-23) at which refreshes resume.
    pub wake_hour: u8,
}

impl SleepSchedule {
    /// Default cadence: refresh every 30 minutes, quiet from midnight to 6.
    pub const fn new() -> Self {
        Self {
            sleep_minutes: 30,
            bed_hour: 0,
            wake_hour: 6,
        }
    }
}

impl Default for SleepSchedule {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Build Configuration
// =============================================================================

/// Every axis selection for one firmware image.
///
/// `Option` fields are the axes with no documented default; they must be set
/// before [`validate`](crate::config::validate) will accept the
/// configuration. `accent_color` is required only when `panel` selects a
/// multi-color display, and `api_key` only when `weather_api` selects
/// OpenWeatherMap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BuildConfig {
    pub panel: EpdPanel,
    pub driver: EpdDriver,
    pub sensor: Sensor,
    pub locale: Option<Locale>,
    pub weather_api: WeatherApi,
    /// Weather provider credential; presence is validated, content is opaque.
    pub api_key: Option<&'static str>,
    /// Third display color; required for multi-color panels.
    pub accent_color: Option<AccentColor>,
    pub units: Units,
    pub http_mode: HttpMode,
    pub wind_label: WindDirectionLabel,
    pub wind_arrow: WindArrowPrecision,
    pub font: Option<Font>,
    /// 0 hide, 1 show, 2 smart.
    pub display_daily_precip: u8,
    pub display_hourly_icons: Option<bool>,
    pub display_alerts: Option<bool>,
    /// When false the power policy is bypassed entirely (mains-powered
    /// builds).
    pub battery_monitoring: Option<bool>,
    /// 0-2, see [`DEBUG_LEVEL_MAX`].
    pub debug_level: u8,
    pub battery: BatteryConfig,
    pub sleep: SleepSchedule,
}

impl BuildConfig {
    /// Documented defaults for the optional axes; axes with no default stay
    /// unset.
    pub const fn new() -> Self {
        Self {
            panel: EpdPanel::BwV2,
            driver: EpdDriver::DespiC02,
            sensor: Sensor::Bme280,
            locale: None,
            weather_api: WeatherApi::OpenWeatherMap,
            api_key: None,
            accent_color: None,
            units: Units::metric(),
            http_mode: HttpMode::HttpsWithCertVerif,
            wind_label: WindDirectionLabel::Hidden,
            wind_arrow: WindArrowPrecision::SecondaryIntercardinal,
            font: None,
            display_daily_precip: 2,
            display_hourly_icons: None,
            display_alerts: None,
            battery_monitoring: None,
            debug_level: 0,
            battery: BatteryConfig::new(),
            sleep: SleepSchedule::new(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_and_imperial_presets_differ() {
        let metric = Units::metric();
        let imperial = Units::imperial();
        assert_ne!(metric.temperature, imperial.temperature);
        assert_ne!(metric.wind_speed, imperial.wind_speed);
        assert_ne!(metric.pressure, imperial.pressure);
        assert_ne!(metric.distance, imperial.distance);
        assert_ne!(metric.daily_precip, imperial.daily_precip);
        // Hourly precipitation defaults to PoP in both presets
        assert_eq!(metric.hourly_precip, PrecipUnit::Pop);
        assert_eq!(imperial.hourly_precip, PrecipUnit::Pop);
    }

    #[test]
    fn test_defaults_leave_required_axes_unset() {
        let config = BuildConfig::new();
        assert!(config.locale.is_none());
        assert!(config.font.is_none());
        assert!(config.display_hourly_icons.is_none());
        assert!(config.display_alerts.is_none());
        assert!(config.battery_monitoring.is_none());
    }

    #[test]
    fn test_defaults_never_pick_an_accent_color() {
        // A multi-color panel without an explicit accent must fail
        // validation, so the defaulting step must not fill one in.
        assert!(BuildConfig::new().accent_color.is_none());
    }

    #[test]
    fn test_default_ordinals_in_range() {
        let config = BuildConfig::new();
        assert!(config.display_daily_precip <= DAILY_PRECIP_DISPLAY_MAX);
        assert!(config.debug_level <= DEBUG_LEVEL_MAX);
        assert!(config.sleep.bed_hour <= HOUR_MAX);
        assert!(config.sleep.wake_hour <= HOUR_MAX);
    }
}
