//! Battery-aware power policy.
//!
//! Runs once per wake cycle, strictly before any sensor, network, or display
//! work, so a dying battery short-circuits everything else the cycle would
//! do. One voltage sample in, one directive out; no state survives between
//! invocations.
//!
//! An implausible sample is a [`SensorFault`], reported distinctly rather
//! than coerced into a tier: a faulty-high reading must not keep a dying
//! cell awake, and a faulty-low reading must not hibernate a healthy one.
//! Within a cycle the sample is retried a bounded number of times; if every
//! attempt is implausible the cycle falls back to the action configured in
//! [`FaultFallback`](crate::config::FaultFallback).

use crate::config::{BatteryConfig, FaultFallback};
use crate::power::tier::BatteryTier;

// =============================================================================
// Sampling Limits
// =============================================================================

/// Maximum voltage samples taken per wake cycle before the fault fallback
/// applies.
pub const SAMPLE_RETRY_LIMIT: u8 = 3;

/// Implausible voltage sample, outside the physical range of the battery
/// and its sense divider.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[error("implausible battery sample: {millivolts} mV")]
pub struct SensorFault {
    /// The rejected reading.
    pub millivolts: i32,
}

// =============================================================================
// Directives
// =============================================================================

/// What the wake-cycle controller should do this cycle.
///
/// Derived from the tier by a fixed lookup; the only terminal directive is
/// [`Hibernate`](Self::Hibernate), exited solely by a manual reset that the
/// policy itself cannot initiate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum PowerDirective {
    /// Run the full refresh cycle, then sleep the standard interval.
    ContinueNormally,
    /// Run the full refresh cycle with the low-battery indicator shown,
    /// then sleep the standard interval.
    ContinueWithWarning,
    /// Run the full refresh cycle, then sleep `minutes` instead of the
    /// standard interval.
    SleepFor { minutes: u32 },
    /// Skip the refresh entirely and sleep `minutes`; the next wake only
    /// re-checks the voltage.
    SkipAndSleep { minutes: u32 },
    /// Stop autonomous wake cycles until the reset button is pressed.
    Hibernate,
}

/// Outcome of one wake-cycle evaluation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct CycleDecision {
    /// The accepted voltage sample, absent on an inconclusive cycle.
    pub millivolts: Option<u32>,
    /// The measured tier, or `None` when the cycle was inconclusive and the
    /// fault fallback applied.
    pub tier: Option<BatteryTier>,
    /// The action to take this cycle.
    pub directive: PowerDirective,
    /// The last rejected sample, present when any attempt was implausible.
    pub fault: Option<SensorFault>,
}

// =============================================================================
// Policy
// =============================================================================

/// The per-cycle decision function over a validated [`BatteryConfig`].
pub struct PowerPolicy<'a> {
    battery: &'a BatteryConfig,
}

impl<'a> PowerPolicy<'a> {
    /// Wrap a battery configuration whose threshold ladder has already been
    /// validated.
    pub const fn new(battery: &'a BatteryConfig) -> Self { Self { battery } }

    /// Highest reading the sense hardware can plausibly produce: full-charge
    /// voltage plus a 25% margin for divider and reference tolerance.
    #[inline]
    const fn plausible_max_mv(&self) -> i32 { (self.battery.max_mv + self.battery.max_mv / 4) as i32 }

    /// Gate a raw sample on physical plausibility.
    ///
    /// Out-of-range readings indicate a sense fault and are never clamped
    /// into a tier.
    pub fn check_sample(
        &self,
        sample_mv: i32,
    ) -> Result<u32, SensorFault> {
        if sample_mv < 0 || sample_mv > self.plausible_max_mv() {
            return Err(SensorFault { millivolts: sample_mv });
        }
        Ok(sample_mv as u32)
    }

    /// Fixed tier-to-directive lookup.
    pub const fn directive_for(
        &self,
        tier: BatteryTier,
    ) -> PowerDirective {
        match tier {
            BatteryTier::Normal => PowerDirective::ContinueNormally,
            BatteryTier::Warn => PowerDirective::ContinueWithWarning,
            BatteryTier::Low => PowerDirective::SleepFor {
                minutes: self.battery.low_sleep_minutes,
            },
            BatteryTier::VeryLow => PowerDirective::SkipAndSleep {
                minutes: self.battery.very_low_sleep_minutes,
            },
            BatteryTier::Critical => PowerDirective::Hibernate,
        }
    }

    /// Evaluate one sample: plausibility gate, tier classification, directive
    /// lookup. Idempotent; no hidden state.
    pub fn evaluate(
        &self,
        sample_mv: i32,
    ) -> Result<(BatteryTier, PowerDirective), SensorFault> {
        let millivolts = self.check_sample(sample_mv)?;
        let tier = BatteryTier::classify(millivolts, self.battery);
        Ok((tier, self.directive_for(tier)))
    }

    /// Directive applied when a whole cycle's samples are implausible.
    pub const fn fault_directive(&self) -> PowerDirective {
        match self.battery.fault_fallback {
            FaultFallback::TreatAsWarn => PowerDirective::ContinueWithWarning,
            FaultFallback::Hibernate => PowerDirective::Hibernate,
        }
    }

    /// Run one wake cycle's decision: sample up to [`SAMPLE_RETRY_LIMIT`]
    /// times, first plausible reading wins. An all-faulty cycle is
    /// inconclusive and takes the configured fallback directive instead of a
    /// measured tier.
    pub fn evaluate_cycle<F>(
        &self,
        mut sample: F,
    ) -> CycleDecision
    where
        F: FnMut() -> i32,
    {
        let mut last_fault = None;
        for _ in 0..SAMPLE_RETRY_LIMIT {
            let sample_mv = sample();
            match self.evaluate(sample_mv) {
                Ok((tier, directive)) => {
                    return CycleDecision {
                        millivolts: Some(sample_mv as u32),
                        tier: Some(tier),
                        directive,
                        fault: None,
                    };
                }
                Err(fault) => last_fault = Some(fault),
            }
        }
        CycleDecision {
            millivolts: None,
            tier: None,
            directive: self.fault_directive(),
            fault: last_fault,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
