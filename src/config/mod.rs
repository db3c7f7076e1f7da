//! Build-time configuration.
//!
//! - `axes`: Axis enums with their legal value domains
//! - `settings`: Resolved selections (`BuildConfig`) and the default presets
//! - `battery`: Voltage thresholds, sleep intervals, fault fallback
//! - `validate`: The configuration validator and its error type

pub mod axes;
pub mod battery;
pub mod settings;
pub mod validate;

// Re-export the axis enums at config level for convenience
pub use axes::{
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
// Re-export battery constants and types at config level for convenience
pub use battery::{
    BatteryConfig,
    CRIT_LOW_BATTERY_VOLTAGE,
    FaultFallback,
    LOW_BATTERY_SLEEP_INTERVAL,
    LOW_BATTERY_VOLTAGE,
    MAX_BATTERY_VOLTAGE,
    MIN_BATTERY_VOLTAGE,
    VERY_LOW_BATTERY_SLEEP_INTERVAL,
    VERY_LOW_BATTERY_VOLTAGE,
    WARN_BATTERY_VOLTAGE,
};
pub use settings::{BuildConfig, SleepSchedule, Units};
pub use validate::{ConfigError, ConfigErrors, MAX_CONFIG_ERRORS};
