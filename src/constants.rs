/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// UART baud rate of the CSV-over-serial output (8N1)
pub const SERIAL_BAUD_RATE: u32 = 115_200;
/// Line terminator of every CSV line written over serial
pub const CSV_LINE_TERMINATOR: &str = "\r\n";
/// Number of columns in a CSV reading
pub const CSV_FIELD_COUNT: usize = 12;
/// Capacity of a formatted CSV line, terminator excluded
pub const CSV_LINE_MAX: usize = 128;

/// Full scale of the signed 16-bit TGAM1 ADC
pub const ADC_FULL_SCALE: f32 = 32_768.0;
/// Estimated maximum amplitude of on-scalp EEG, in microvolts
pub const MAX_MICROVOLTS: f32 = 100.0;
/// Raw sample rate according to the TGAM1 datasheet
pub const NOMINAL_SAMPLE_RATE_HZ: u32 = 500;
/// Raw sample rate seen by MQTT subscribers, below nominal because of Wi-Fi lag
pub const EFFECTIVE_SAMPLE_RATE_HZ: u32 = 475;

/// Keep-alive interval used by MQTT clients of the bridge
pub const MQTT_KEEP_ALIVE_SECS: u16 = 60;
/// Capacity of an MQTT publication payload
pub const MQTT_PAYLOAD_MAX: usize = 256;
/// Capacity of a raw sample payload ("-32768")
pub const RAW_PAYLOAD_MAX: usize = 6;
