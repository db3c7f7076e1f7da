//! Battery voltage tier classification.
//!
//! Five ordered health tiers drive the wake-cycle decision. Classification is
//! a total function of one millivolt sample: every value maps to exactly one
//! tier, with boundaries closed on the lower side (a sample exactly at a
//! threshold belongs to the healthier-adjacent tier).
//!
//! A classification is computed fresh every wake cycle from a newly sampled
//! voltage and never carried across sleep - the voltage can recover between
//! cycles, e.g. under solar charging.

use crate::config::BatteryConfig;

/// Battery health, ordered from healthiest to most severe.
///
/// The derived `Ord` follows declaration order, so a lower voltage never
/// compares as a healthier tier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum BatteryTier {
    /// Above the warn threshold. Operate normally.
    Normal,
    /// At or below warn. Operate normally, surface the low-battery indicator.
    Warn,
    /// At or below low. Operate, but stretch the refresh interval.
    Low,
    /// At or below very-low. Skip the refresh, wake only to re-check voltage.
    VeryLow,
    /// At or below critical-low. Hibernate until manual reset.
    Critical,
}

impl BatteryTier {
    /// Classify one voltage sample against the threshold ladder.
    ///
    /// Total over all of `u32`; plausibility of the sample is the policy's
    /// concern, not the classifier's.
    pub const fn classify(
        millivolts: u32,
        battery: &BatteryConfig,
    ) -> Self {
        if millivolts > battery.warn_mv {
            Self::Normal
        } else if millivolts > battery.low_mv {
            Self::Warn
        } else if millivolts > battery.very_low_mv {
            Self::Low
        } else if millivolts > battery.crit_low_mv {
            Self::VeryLow
        } else {
            Self::Critical
        }
    }

    /// Lowercase label for log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warn => "warn",
            Self::Low => "low",
            Self::VeryLow => "very low",
            Self::Critical => "critical",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn battery() -> BatteryConfig { BatteryConfig::new() }

    #[test]
    fn test_classification_table() {
        let battery = battery();
        assert_eq!(BatteryTier::classify(4200, &battery), BatteryTier::Normal);
        assert_eq!(BatteryTier::classify(3450, &battery), BatteryTier::Low);
        assert_eq!(BatteryTier::classify(3420, &battery), BatteryTier::VeryLow);
        assert_eq!(BatteryTier::classify(3400, &battery), BatteryTier::Critical);
        assert_eq!(BatteryTier::classify(3000, &battery), BatteryTier::Critical);
    }

    #[test]
    fn test_boundaries_closed_on_lower_side() {
        let battery = battery();
        // A sample exactly at a threshold belongs to the healthier-adjacent tier
        assert_eq!(BatteryTier::classify(battery.warn_mv, &battery), BatteryTier::Warn);
        assert_eq!(BatteryTier::classify(battery.low_mv, &battery), BatteryTier::Low);
        assert_eq!(
            BatteryTier::classify(battery.very_low_mv, &battery),
            BatteryTier::VeryLow
        );
        assert_eq!(
            BatteryTier::classify(battery.crit_low_mv, &battery),
            BatteryTier::Critical
        );
        // One millivolt above each threshold crosses into the healthier tier
        assert_eq!(
            BatteryTier::classify(battery.warn_mv + 1, &battery),
            BatteryTier::Normal
        );
        assert_eq!(BatteryTier::classify(battery.low_mv + 1, &battery), BatteryTier::Warn);
        assert_eq!(
            BatteryTier::classify(battery.very_low_mv + 1, &battery),
            BatteryTier::Low
        );
        assert_eq!(
            BatteryTier::classify(battery.crit_low_mv + 1, &battery),
            BatteryTier::VeryLow
        );
    }

    #[test]
    fn test_warn_threshold_boundary() {
        // 3535 mV sits exactly on the warn threshold and reads as Warn
        assert_eq!(BatteryTier::classify(3535, &battery()), BatteryTier::Warn);
    }

    #[test]
    fn test_classification_is_total() {
        let battery = battery();
        for millivolts in (0..=5000).step_by(7) {
            // No sample is unclassifiable; classify never panics
            let _ = BatteryTier::classify(millivolts, &battery);
        }
    }

    #[test]
    fn test_monotonic_severity() {
        let battery = battery();
        let mut previous = BatteryTier::classify(5000, &battery);
        for millivolts in (0..=5000).rev() {
            let tier = BatteryTier::classify(millivolts, &battery);
            assert!(
                tier >= previous,
                "severity regressed at {millivolts} mV: {previous:?} -> {tier:?}"
            );
            previous = tier;
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(BatteryTier::Normal < BatteryTier::Warn);
        assert!(BatteryTier::Warn < BatteryTier::Low);
        assert!(BatteryTier::Low < BatteryTier::VeryLow);
        assert!(BatteryTier::VeryLow < BatteryTier::Critical);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let battery = battery();
        for millivolts in [3000, 3404, 3442, 3462, 3535, 4200] {
            assert_eq!(
                BatteryTier::classify(millivolts, &battery),
                BatteryTier::classify(millivolts, &battery)
            );
        }
    }
}
