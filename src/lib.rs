//! Weather station library - testable core logic for the e-paper weather station.
//!
//! This library contains the configuration validator and the battery power
//! policy, both testable on the host machine. The binary (`main.rs`) uses this
//! library and adds the embedded-specific code (ADC sampling, status LED,
//! sleep/hibernate entry).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Build-time configuration: axis domains, resolved selections, validation
pub mod config;

// Battery power policy: tier classification, wake-cycle directives
pub mod power;
