//! Feature flags, resolved from Cargo features at compile time.

use heapless::Vec;
use log::LevelFilter;

pub const DEBUG: bool = cfg!(feature = "debug");
pub const TGAM_RECONFIGURE: bool = cfg!(feature = "tgam-reconfigure");
pub const TGAM_RAW_ONLY: bool = cfg!(feature = "tgam-raw-only");
pub const SERIAL_DATA: bool = cfg!(feature = "serial-data");
pub const CSV_OVER_SERIAL: bool = cfg!(feature = "csv-over-serial");
pub const WIFI: bool = cfg!(feature = "wifi");
pub const CSV_OVER_MQTT: bool = cfg!(feature = "csv-over-mqtt");

/// Data output modes. Meant to be picked one at a time, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    RawOnly,
    CsvOverSerial,
    CsvOverMqtt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub debug: bool,
    pub tgam_reconfigure: bool,
    pub tgam_raw_only: bool,
    pub serial_data: bool,
    pub csv_over_serial: bool,
    pub wifi: bool,
    pub csv_over_mqtt: bool,
}

pub const FLAGS: Flags = Flags {
    debug: DEBUG,
    tgam_reconfigure: TGAM_RECONFIGURE,
    tgam_raw_only: TGAM_RAW_ONLY,
    serial_data: SERIAL_DATA,
    csv_over_serial: CSV_OVER_SERIAL,
    wifi: WIFI,
    csv_over_mqtt: CSV_OVER_MQTT,
};

impl Flags {
    pub fn output_modes(&self) -> Vec<OutputMode, 3> {
        let mut modes = Vec::new();
        for (enabled, mode) in [
            (self.tgam_raw_only, OutputMode::RawOnly),
            (self.csv_over_serial, OutputMode::CsvOverSerial),
            (self.csv_over_mqtt, OutputMode::CsvOverMqtt),
        ] {
            if enabled {
                let pushed = modes.push(mode);
                debug_assert!(pushed.is_ok(), "capacity matches the number of modes");
            }
        }
        modes
    }

    pub fn has_exclusive_output_mode(&self) -> bool {
        self.output_modes().len() == 1
    }

    pub const fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
