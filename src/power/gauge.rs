//! Battery charge estimation from voltage.
//!
//! A LiPo cell's voltage does not fall linearly with charge; a sigmoidal
//! curve fitted to the typical 3.7 V discharge profile gives a much closer
//! percentage readout for the status line.

#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::BatteryConfig;

/// Estimate remaining charge (0-100 %) from one plausible voltage sample.
///
/// Clamps to 0 below the fully-discharged voltage and 100 above the
/// fully-charged voltage.
pub fn battery_percent(
    millivolts: u32,
    battery: &BatteryConfig,
) -> u8 {
    if millivolts <= battery.min_mv {
        return 0;
    }
    if millivolts >= battery.max_mv {
        return 100;
    }
    let range = (battery.max_mv - battery.min_mv) as f32;
    let ratio = (millivolts - battery.min_mv) as f32 / range;
    // Sigmoidal approximation of the LiPo discharge curve
    let x = 1.724 * ratio;
    let percent: f32 = 105.0 - 105.0 / (1.0 + x.powf(5.5)).powf(3.0);
    percent.clamp(0.0, 100.0) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn battery() -> BatteryConfig { BatteryConfig::new() }

    #[test]
    fn test_empty_and_full() {
        let battery = battery();
        assert_eq!(battery_percent(battery.min_mv, &battery), 0);
        assert_eq!(battery_percent(battery.max_mv, &battery), 100);
    }

    #[test]
    fn test_clamped_outside_range() {
        let battery = battery();
        assert_eq!(battery_percent(0, &battery), 0);
        assert_eq!(battery_percent(battery.min_mv - 100, &battery), 0);
        assert_eq!(battery_percent(battery.max_mv + 500, &battery), 100);
    }

    #[test]
    fn test_monotonic_in_voltage() {
        let battery = battery();
        let mut previous = 0;
        for millivolts in (battery.min_mv..=battery.max_mv).step_by(10) {
            let percent = battery_percent(millivolts, &battery);
            assert!(
                percent >= previous,
                "gauge regressed at {millivolts} mV: {previous} -> {percent}"
            );
            previous = percent;
        }
    }

    #[test]
    fn test_midrange_is_partial() {
        let battery = battery();
        let mid = (battery.min_mv + battery.max_mv) / 2;
        let percent = battery_percent(mid, &battery);
        assert!(percent > 0 && percent < 100, "got {percent}%");
    }

    #[test]
    fn test_warn_threshold_reads_low() {
        // The warn threshold is calibrated near 20% charge; the curve should
        // put it well below half
        let battery = battery();
        let percent = battery_percent(battery.warn_mv, &battery);
        assert!(percent < 50, "got {percent}%");
    }
}
