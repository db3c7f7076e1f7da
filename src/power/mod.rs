//! Battery-aware power management.
//!
//! - `tier`: Voltage tier classification
//! - `policy`: Per-cycle directive derivation, sensor-fault handling
//! - `gauge`: Charge percentage estimation for the status readout
//! - `schedule`: Overnight quiet-window check

pub mod gauge;
pub mod policy;
pub mod schedule;
pub mod tier;

pub use gauge::battery_percent;
pub use policy::{CycleDecision, PowerDirective, PowerPolicy, SAMPLE_RETRY_LIMIT, SensorFault};
pub use schedule::in_quiet_hours;
pub use tier::BatteryTier;
