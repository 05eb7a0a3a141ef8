use core::fmt;

/// Publication channels of the bridge, each bound to one MQTT topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Status and debug messages
    Status,
    /// CSV readings
    Csv,
    /// Raw ADC samples
    Raw,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // MQTT broker hostname or IP address
    pub mqtt_server: &'static str,

    // MQTT port (plain TCP)
    pub mqtt_port: u16,

    // MQTT topic for status messages
    pub mqtt_topic_status: &'static str,

    // MQTT topic for CSV readings
    pub mqtt_topic_csv: &'static str,

    // MQTT topic for raw samples
    pub mqtt_topic_raw: &'static str,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_password: &'static str,
}

impl Config {
    pub const fn topic(&self, channel: Channel) -> &'static str {
        match channel {
            Channel::Status => self.mqtt_topic_status,
            Channel::Csv => self.mqtt_topic_csv,
            Channel::Raw => self.mqtt_topic_raw,
        }
    }

    /// True when CSV readings and raw samples land on the same topic.
    pub fn topics_aliased(&self) -> bool {
        self.mqtt_topic_csv == self.mqtt_topic_raw
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("mqtt_server", &self.mqtt_server)
            .field("mqtt_port", &self.mqtt_port)
            .field("mqtt_topic_status", &self.mqtt_topic_status)
            .field("mqtt_topic_csv", &self.mqtt_topic_csv)
            .field("mqtt_topic_raw", &self.mqtt_topic_raw)
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &"<redacted>")
            .finish()
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
