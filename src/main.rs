//! E-Paper Weather Station Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Wakes on a fixed cadence, decides what the cycle may do based on the
//! measured battery voltage, and goes back to sleep. The display, sensor,
//! and network collaborators hang off the refresh window; everything that
//! can drain a dying cell is gated behind the power policy.
//!
//! # Wake Cycle
//!
//! 1. Validate the build configuration (first boot only; a misconfigured
//!    image never reaches a cycle)
//! 2. Sample the battery voltage through the ADC divider, with bounded
//!    retries on implausible readings
//! 3. Classify the voltage into a tier and dispatch its directive:
//!    refresh + standard sleep, refresh + long sleep, skip + very long
//!    sleep, or hibernate until the reset button
//!
//! # Status LED
//!
//! The onboard LED blinks the current tier once per period: one blink when
//! healthy through five at critical. The headless device has no other local
//! indicator.

#![cfg_attr(target_arch = "arm", no_std, no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[cfg(target_arch = "arm")]
mod station {
    use defmt::{error, info, warn};
    use embassy_executor::Spawner;
    use embassy_rp::adc::{self, Adc, Channel};
    use embassy_rp::gpio::{Level, Output, Pull};
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::watch::Watch;
    use embassy_time::{Duration, Timer};
    use {defmt_rtt as _, panic_probe as _};

    use epd_weather_station::config::{BuildConfig, Font, Locale};
    use epd_weather_station::power::{
        BatteryTier,
        PowerDirective,
        PowerPolicy,
        SAMPLE_RETRY_LIMIT,
        battery_percent,
    };

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"weather-station"),
        embassy_rp::binary_info::rp_program_description!(c"Battery-powered e-paper weather station"),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    // =========================================================================
    // Build Configuration
    // =========================================================================

    /// Selections for this image. Edit, rebuild, reflash.
    ///
    /// Axes without a documented default (locale, font, the feature toggles,
    /// the API credential) must be filled in here; the validator rejects the
    /// image otherwise.
    static BUILD_CONFIG: BuildConfig = BuildConfig {
        locale: Some(Locale::EnUs),
        api_key: Some("REPLACE-WITH-YOUR-OWM-KEY"),
        font: Some(Font::FreeSans),
        display_hourly_icons: Some(true),
        display_alerts: Some(true),
        battery_monitoring: Some(true),
        ..BuildConfig::new()
    };

    // =========================================================================
    // Battery Sensing
    // =========================================================================

    /// ADC reference voltage in millivolts.
    const ADC_REF_MV: u32 = 3300;

    /// Full-scale reading of the 12-bit converter.
    const ADC_FULL_SCALE: u32 = 4095;

    /// The battery reaches the ADC through a 2:1 resistor divider.
    const DIVIDER_RATIO: u32 = 2;

    /// Convert a raw conversion to battery millivolts.
    const fn raw_to_millivolts(raw: u16) -> i32 { (raw as u32 * ADC_REF_MV * DIVIDER_RATIO / ADC_FULL_SCALE) as i32 }

    /// One battery sample. A failed conversion yields an implausible value
    /// that takes the policy's sensor-fault path.
    fn read_battery_millivolts(
        adc: &mut Adc<'static, adc::Blocking>,
        channel: &mut Channel<'static>,
    ) -> i32 {
        match adc.blocking_read(channel) {
            Ok(raw) => raw_to_millivolts(raw),
            Err(_) => -1,
        }
    }

    // =========================================================================
    // Status LED
    // =========================================================================

    /// Latest measured tier, published by the wake loop for the LED task.
    static TIER_WATCH: Watch<CriticalSectionRawMutex, BatteryTier, 2> = Watch::new();

    /// Blink the current battery tier on the onboard LED: one blink when
    /// healthy, up to five at critical.
    #[embassy_executor::task]
    async fn status_led_task(mut led: Output<'static>) {
        info!("Status LED task started");

        let mut receiver = TIER_WATCH.dyn_receiver().unwrap();
        let mut tier = BatteryTier::Normal;

        loop {
            if let Some(current) = receiver.try_get() {
                tier = current;
            }
            let blinks = match tier {
                BatteryTier::Normal => 1,
                BatteryTier::Warn => 2,
                BatteryTier::Low => 3,
                BatteryTier::VeryLow => 4,
                BatteryTier::Critical => 5,
            };
            for _ in 0..blinks {
                led.set_high();
                Timer::after_millis(60).await;
                led.set_low();
                Timer::after_millis(240).await;
            }
            Timer::after_secs(4).await;
        }
    }

    // =========================================================================
    // Wake Cycle
    // =========================================================================

    /// One refresh window: indoor sensor read, weather fetch, render, panel
    /// update. The sensor, network, and panel drivers are separate
    /// collaborators consuming the validated configuration.
    // TODO: drive the EPD panel and weather client here once those driver
    // crates are wired up
    async fn refresh_cycle(show_battery_warning: bool) {
        if show_battery_warning {
            info!("refresh window open, low-battery indicator shown");
        } else {
            info!("refresh window open");
        }
        Timer::after_millis(50).await;
        info!("refresh window closed");
    }

    /// Timed deep sleep between cycles. The executor timer stands in for
    /// dormant-mode entry until the low-power support is wired up.
    async fn sleep_minutes(minutes: u32) {
        info!("sleeping {} min", minutes);
        Timer::after(Duration::from_secs(minutes as u64 * 60)).await;
    }

    /// Terminal low-power state. Only the RUN pin (reset button) leaves it;
    /// no autonomous wake remains.
    fn hibernate() -> ! {
        error!("battery critically low: hibernating until manual reset");
        loop {
            cortex_m::asm::wfi();
        }
    }

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("E-paper weather station starting...");

        let p = embassy_rp::init(Default::default());

        // Validate the build configuration strictly before any cycle work.
        // A misconfigured device cannot safely run.
        if let Err(errors) = BUILD_CONFIG.validate() {
            for config_error in &errors {
                error!("config error: {}", config_error);
            }
            defmt::panic!("invalid build configuration ({} errors)", errors.len());
        }
        info!("Build configuration valid (debug level {})", BUILD_CONFIG.debug_level);

        // Battery sense path: divider on ADC0
        let mut adc = Adc::new_blocking(p.ADC, adc::Config::default());
        let mut battery_channel = Channel::new_pin(p.PIN_26, Pull::None);

        // Onboard LED doubles as the tier indicator
        let led = Output::new(p.PIN_25, Level::Low);
        spawner.spawn(status_led_task(led)).unwrap();

        let policy = PowerPolicy::new(&BUILD_CONFIG.battery);
        let monitoring = matches!(BUILD_CONFIG.battery_monitoring, Some(true));
        if !monitoring {
            info!("Battery monitoring disabled; running on standard cadence");
        }
        let tier_sender = TIER_WATCH.dyn_sender();

        loop {
            let directive = if monitoring {
                let decision =
                    policy.evaluate_cycle(|| read_battery_millivolts(&mut adc, &mut battery_channel));

                if let Some(fault) = decision.fault {
                    warn!("battery sense fault: {}", fault);
                }
                match (decision.millivolts, decision.tier) {
                    (Some(millivolts), Some(tier)) => {
                        info!(
                            "battery {} mV ({}%), tier {}",
                            millivolts,
                            battery_percent(millivolts, &BUILD_CONFIG.battery),
                            tier.label()
                        );
                        tier_sender.send(tier);
                    }
                    _ => {
                        warn!(
                            "cycle inconclusive after {} samples, using fallback directive",
                            SAMPLE_RETRY_LIMIT
                        );
                    }
                }
                decision.directive
            } else {
                PowerDirective::ContinueNormally
            };

            match directive {
                PowerDirective::ContinueNormally => {
                    refresh_cycle(false).await;
                    sleep_minutes(BUILD_CONFIG.sleep.sleep_minutes).await;
                }
                PowerDirective::ContinueWithWarning => {
                    refresh_cycle(true).await;
                    sleep_minutes(BUILD_CONFIG.sleep.sleep_minutes).await;
                }
                PowerDirective::SleepFor { minutes } => {
                    refresh_cycle(true).await;
                    sleep_minutes(minutes).await;
                }
                PowerDirective::SkipAndSleep { minutes } => {
                    info!("skipping refresh, re-checking voltage in {} min", minutes);
                    sleep_minutes(minutes).await;
                }
                PowerDirective::Hibernate => hibernate(),
            }
        }
    }
}

/// The firmware targets the RP2350; building for the host yields an empty
/// binary so the library tests can compile the whole package.
#[cfg(not(target_arch = "arm"))]
fn main() {}
