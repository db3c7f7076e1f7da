//! Battery voltage thresholds and low-power sleep intervals.
//!
//! All defaults are compile-time constants with validation assertions.
//! This ensures consistency between the tier classifier, the wake-cycle
//! controller, and the battery gauge.
//!
//! # Compile-Time Validation
//!
//! The default threshold ladder includes `const` assertions that verify
//! ordering at compile time. If the defaults are edited incorrectly
//! (e.g., `CRIT_LOW > VERY_LOW`), compilation will fail with a clear error.
//! Runtime-supplied values go through [`BatteryConfig::check_order`] instead,
//! which the configuration validator runs before any wake cycle.

use crate::config::validate::{ConfigError, axis};

// =============================================================================
// Voltage Thresholds (millivolts, typical 3.7 V LiPo)
// =============================================================================

/// Below this the display shows a low-battery indicator (~20% charge).
pub const WARN_BATTERY_VOLTAGE: u32 = 3535;

/// Below this the device stretches its refresh interval (~10% charge).
pub const LOW_BATTERY_VOLTAGE: u32 = 3462;

/// Below this the device stops refreshing and wakes only to re-check the
/// voltage (~8% charge).
pub const VERY_LOW_BATTERY_VOLTAGE: u32 = 3442;

/// Below this the device hibernates until the reset button is pressed
/// (~5% charge).
pub const CRIT_LOW_BATTERY_VOLTAGE: u32 = 3404;

/// Fully charged cell voltage.
pub const MAX_BATTERY_VOLTAGE: u32 = 4200;

/// Fully discharged cell voltage.
pub const MIN_BATTERY_VOLTAGE: u32 = 3000;

// Compile-time validation: thresholds must form a strictly ordered ladder
const _: () = assert!(MIN_BATTERY_VOLTAGE <= CRIT_LOW_BATTERY_VOLTAGE);
const _: () = assert!(CRIT_LOW_BATTERY_VOLTAGE < VERY_LOW_BATTERY_VOLTAGE);
const _: () = assert!(VERY_LOW_BATTERY_VOLTAGE < LOW_BATTERY_VOLTAGE);
const _: () = assert!(LOW_BATTERY_VOLTAGE < WARN_BATTERY_VOLTAGE);
const _: () = assert!(WARN_BATTERY_VOLTAGE < MAX_BATTERY_VOLTAGE);

// =============================================================================
// Sleep Intervals (minutes)
// =============================================================================

/// Re-check interval once the battery has fallen below [`LOW_BATTERY_VOLTAGE`].
pub const LOW_BATTERY_SLEEP_INTERVAL: u32 = 30;

/// Re-check interval once the battery has fallen below
/// [`VERY_LOW_BATTERY_VOLTAGE`].
pub const VERY_LOW_BATTERY_SLEEP_INTERVAL: u32 = 120;

const _: () = assert!(LOW_BATTERY_SLEEP_INTERVAL < VERY_LOW_BATTERY_SLEEP_INTERVAL);

// =============================================================================
// Fault Fallback
// =============================================================================

/// Action taken when every voltage sample in a wake cycle is implausible.
///
/// The device cannot tell a dying cell from a broken divider, so the choice
/// between protecting the battery and staying alive is configuration, not
/// guesswork.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum FaultFallback {
    /// Act as if the Warn tier had been measured: keep operating, surface the
    /// low-battery indicator, keep the standard interval.
    #[default]
    TreatAsWarn,
    /// Hibernate until manual reset.
    Hibernate,
}

// =============================================================================
// Battery Configuration
// =============================================================================

/// Battery thresholds and intervals, constructed once and passed explicitly
/// into the power policy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct BatteryConfig {
    /// Low-battery indicator threshold (mV).
    pub warn_mv: u32,
    /// Long-interval threshold (mV).
    pub low_mv: u32,
    /// Skip-refresh threshold (mV).
    pub very_low_mv: u32,
    /// Hibernate threshold (mV).
    pub crit_low_mv: u32,
    /// Fully charged voltage (mV).
    pub max_mv: u32,
    /// Fully discharged voltage (mV).
    pub min_mv: u32,
    /// Sleep interval below `low_mv` (minutes).
    pub low_sleep_minutes: u32,
    /// Sleep interval below `very_low_mv` (minutes).
    pub very_low_sleep_minutes: u32,
    /// Action when a whole cycle's samples are implausible.
    pub fault_fallback: FaultFallback,
}

impl BatteryConfig {
    /// Create a battery configuration with the default threshold ladder.
    pub const fn new() -> Self {
        Self {
            warn_mv: WARN_BATTERY_VOLTAGE,
            low_mv: LOW_BATTERY_VOLTAGE,
            very_low_mv: VERY_LOW_BATTERY_VOLTAGE,
            crit_low_mv: CRIT_LOW_BATTERY_VOLTAGE,
            max_mv: MAX_BATTERY_VOLTAGE,
            min_mv: MIN_BATTERY_VOLTAGE,
            low_sleep_minutes: LOW_BATTERY_SLEEP_INTERVAL,
            very_low_sleep_minutes: VERY_LOW_BATTERY_SLEEP_INTERVAL,
            fault_fallback: FaultFallback::TreatAsWarn,
        }
    }

    /// Check that the threshold ladder is strictly ordered:
    /// `min ≤ crit_low < very_low < low < warn < max`.
    ///
    /// An inversion is a configuration error, fatal before the first wake
    /// cycle; it is never discovered at classification time.
    pub fn check_order(&self) -> Result<(), ConfigError> {
        let ladder = [
            (self.crit_low_mv, self.very_low_mv, axis::CRIT_LOW_VOLTAGE, axis::VERY_LOW_VOLTAGE),
            (self.very_low_mv, self.low_mv, axis::VERY_LOW_VOLTAGE, axis::LOW_VOLTAGE),
            (self.low_mv, self.warn_mv, axis::LOW_VOLTAGE, axis::WARN_VOLTAGE),
            (self.warn_mv, self.max_mv, axis::WARN_VOLTAGE, axis::MAX_VOLTAGE),
        ];
        for (lower_value, upper_value, lower, upper) in ladder {
            if lower_value >= upper_value {
                return Err(ConfigError::ThresholdOrder { lower, upper });
            }
        }
        if self.min_mv > self.crit_low_mv {
            return Err(ConfigError::ThresholdOrder {
                lower: axis::MIN_VOLTAGE,
                upper: axis::CRIT_LOW_VOLTAGE,
            });
        }
        Ok(())
    }
}

impl Default for BatteryConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_ordering() {
        assert!(MIN_BATTERY_VOLTAGE <= CRIT_LOW_BATTERY_VOLTAGE);
        assert!(CRIT_LOW_BATTERY_VOLTAGE < VERY_LOW_BATTERY_VOLTAGE);
        assert!(VERY_LOW_BATTERY_VOLTAGE < LOW_BATTERY_VOLTAGE);
        assert!(LOW_BATTERY_VOLTAGE < WARN_BATTERY_VOLTAGE);
        assert!(WARN_BATTERY_VOLTAGE < MAX_BATTERY_VOLTAGE);
    }

    #[test]
    fn test_default_config_passes_order_check() {
        assert!(BatteryConfig::new().check_order().is_ok());
    }

    #[test]
    fn test_adjacent_swaps_fail_order_check() {
        let base = BatteryConfig::new();

        // crit_low / very_low swapped
        let mut config = base;
        config.crit_low_mv = base.very_low_mv;
        config.very_low_mv = base.crit_low_mv;
        assert!(config.check_order().is_err());

        // very_low / low swapped
        let mut config = base;
        config.very_low_mv = base.low_mv;
        config.low_mv = base.very_low_mv;
        assert!(config.check_order().is_err());

        // low / warn swapped
        let mut config = base;
        config.low_mv = base.warn_mv;
        config.warn_mv = base.low_mv;
        assert!(config.check_order().is_err());

        // warn / max swapped
        let mut config = base;
        config.warn_mv = base.max_mv;
        config.max_mv = base.warn_mv;
        assert!(config.check_order().is_err());
    }

    #[test]
    fn test_equal_thresholds_fail_order_check() {
        let mut config = BatteryConfig::new();
        config.very_low_mv = config.low_mv;
        assert!(config.check_order().is_err());
    }

    #[test]
    fn test_min_above_crit_low_fails() {
        let mut config = BatteryConfig::new();
        config.min_mv = config.crit_low_mv + 1;
        assert_eq!(
            config.check_order(),
            Err(ConfigError::ThresholdOrder {
                lower: axis::MIN_VOLTAGE,
                upper: axis::CRIT_LOW_VOLTAGE,
            })
        );
    }

    #[test]
    fn test_order_error_names_the_swapped_pair() {
        let mut config = BatteryConfig::new();
        config.low_mv = config.warn_mv + 10;
        assert_eq!(
            config.check_order(),
            Err(ConfigError::ThresholdOrder {
                lower: axis::LOW_VOLTAGE,
                upper: axis::WARN_VOLTAGE,
            })
        );
    }

    #[test]
    fn test_fault_fallback_default_is_lenient() {
        assert_eq!(FaultFallback::default(), FaultFallback::TreatAsWarn);
        assert_eq!(BatteryConfig::new().fault_fallback, FaultFallback::TreatAsWarn);
    }
}
