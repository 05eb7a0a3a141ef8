use heapless::String;

use crate::config::{Channel, Config};
use crate::constants::MQTT_PAYLOAD_MAX;
use crate::reading::EegReading;
use crate::signal::format_raw_payload;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    PayloadTooLarge,
}

/// A message ready to be handed to an MQTT client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub channel: Channel,
    pub topic: &'static str,
    pub payload: String<MQTT_PAYLOAD_MAX>,
}

impl Publication {
    fn new(config: &Config, channel: Channel) -> Self {
        Self {
            channel,
            topic: config.topic(channel),
            payload: String::new(),
        }
    }

    pub fn status(config: &Config, message: &str) -> Result<Self, Error> {
        let mut publication = Self::new(config, Channel::Status);
        publication
            .payload
            .push_str(message)
            .map_err(|_| Error::PayloadTooLarge)?;
        Ok(publication)
    }

    pub fn csv_reading(config: &Config, reading: &EegReading) -> Result<Self, Error> {
        let mut publication = Self::new(config, Channel::Csv);
        reading
            .write_csv(&mut publication.payload)
            .map_err(|_| Error::PayloadTooLarge)?;
        Ok(publication)
    }

    pub fn raw_sample(config: &Config, raw: i16) -> Result<Self, Error> {
        let mut publication = Self::new(config, Channel::Raw);
        publication
            .payload
            .push_str(&format_raw_payload(raw))
            .map_err(|_| Error::PayloadTooLarge)?;
        Ok(publication)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.payload.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG;
    use crate::signal::parse_raw_payload;

    #[test]
    fn raw_sample_goes_to_raw_topic() {
        let publication = Publication::raw_sample(&CONFIG, -16_384).unwrap();
        assert_eq!(publication.channel, Channel::Raw);
        assert_eq!(publication.topic, CONFIG.mqtt_topic_raw);
        assert_eq!(parse_raw_payload(publication.as_bytes()), Ok(-16_384));

        let widest = Publication::raw_sample(&CONFIG, i16::MIN).unwrap();
        assert_eq!(widest.payload.as_str(), "-32768");
    }

    #[test]
    fn csv_reading_has_no_terminator() {
        let reading = EegReading {
            attention: 80,
            ..EegReading::default()
        };
        let publication = Publication::csv_reading(&CONFIG, &reading).unwrap();
        assert_eq!(publication.topic, CONFIG.mqtt_topic_csv);
        assert_eq!(publication.payload.as_str(), "0,0,80,0,0,0,0,0,0,0,0,0");
    }

    #[test]
    fn status_routes_to_status_topic() {
        let publication = Publication::status(&CONFIG, "connected").unwrap();
        assert_eq!(publication.topic, CONFIG.mqtt_topic_status);
        assert_eq!(publication.as_bytes(), b"connected");
    }

    #[test]
    fn oversized_status_is_rejected() {
        let long = "x".repeat(MQTT_PAYLOAD_MAX + 1);
        assert_eq!(
            Publication::status(&CONFIG, &long),
            Err(Error::PayloadTooLarge)
        );
    }

    #[test]
    fn routing_follows_custom_topics() {
        let config = Config {
            mqtt_topic_raw: "MindFlex/raw",
            ..CONFIG
        };
        assert_eq!(
            Publication::raw_sample(&config, 1).unwrap().topic,
            "MindFlex/raw"
        );
        assert_eq!(
            Publication::csv_reading(&config, &EegReading::default())
                .unwrap()
                .topic,
            CONFIG.mqtt_topic_csv
        );
    }
}
