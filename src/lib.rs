//! Build-time configuration of the TGAM1/MindFlex EEG bridge.
//!
//! Flags are Cargo features, constants come from `cfg.toml` through
//! `build.rs`. Firmware tasks take a [`Settings`] reference instead of
//! reaching for globals.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod flags;
pub mod publish;
pub mod reading;
pub mod serial;
pub mod settings;
pub mod signal;

pub use config::{Channel, Config, CONFIG};
pub use flags::{Flags, OutputMode, FLAGS};
pub use reading::EegReading;
pub use settings::{Settings, SETTINGS};
