use log::{info, warn};

use crate::config::{Config, CONFIG};
use crate::constants::{
    EFFECTIVE_SAMPLE_RATE_HZ, MQTT_KEEP_ALIVE_SECS, NOMINAL_SAMPLE_RATE_HZ, SERIAL_BAUD_RATE,
    VERSION,
};
use crate::flags::{Flags, FLAGS};

/// Everything resolved at build time, handed to consumers by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub flags: Flags,
    pub config: Config,
}

pub const SETTINGS: Settings = Settings {
    flags: FLAGS,
    config: CONFIG,
};

impl Settings {
    pub fn log_summary(&self) {
        info!("MindFlex bridge {}", VERSION);
        info!("Feature flags: {:?}", self.flags);
        info!("Output modes: {:?}", self.flags.output_modes());

        if self.flags.tgam_raw_only {
            info!(
                "Raw samples at {} Hz nominal, {} Hz expected over Wi-Fi",
                NOMINAL_SAMPLE_RATE_HZ, EFFECTIVE_SAMPLE_RATE_HZ
            );
        }

        if self.flags.csv_over_serial {
            info!("CSV over serial at {} baud", SERIAL_BAUD_RATE);
        }

        if self.flags.wifi {
            info!("Wi-Fi SSID: {:?}", self.config.wifi_ssid);
            info!(
                "MQTT broker: {}:{} (keep-alive {}s)",
                self.config.mqtt_server,
                self.config.mqtt_port,
                MQTT_KEEP_ALIVE_SECS
            );
            info!(
                "MQTT topics: status={:?} csv={:?} raw={:?}",
                self.config.mqtt_topic_status,
                self.config.mqtt_topic_csv,
                self.config.mqtt_topic_raw
            );
        }

        if !self.flags.has_exclusive_output_mode() {
            warn!(
                "Expected exactly one output mode, got {}",
                self.flags.output_modes().len()
            );
        }

        if self.config.topics_aliased() {
            warn!(
                "CSV and raw data share MQTT topic {:?}",
                self.config.mqtt_topic_csv
            );
        }
    }
}
