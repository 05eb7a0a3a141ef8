use core::fmt::Write;

use heapless::String;

use crate::constants::{ADC_FULL_SCALE, MAX_MICROVOLTS, RAW_PAYLOAD_MAX};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NotUtf8,
    NotAnInteger,
}

/// Scales a raw ADC sample to an estimated on-scalp voltage.
pub fn raw_to_microvolts(raw: i16) -> f32 {
    f32::from(raw) / ADC_FULL_SCALE * MAX_MICROVOLTS
}

/// Raw samples are published as a bare signed decimal integer.
pub fn format_raw_payload(raw: i16) -> String<RAW_PAYLOAD_MAX> {
    let mut payload = String::new();
    let written = write!(payload, "{}", raw);
    debug_assert!(written.is_ok(), "i16 never exceeds six characters");
    payload
}

pub fn parse_raw_payload(payload: &[u8]) -> Result<i16, Error> {
    let text = core::str::from_utf8(payload).map_err(|_| Error::NotUtf8)?;
    text.trim().parse().map_err(|_| Error::NotAnInteger)
}

/// EEG frequency bands, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EegBand {
    LowDelta,
    HighDelta,
    Theta,
    Alpha,
    Beta,
    Gamma,
}

impl EegBand {
    pub const ALL: [EegBand; 6] = [
        EegBand::LowDelta,
        EegBand::HighDelta,
        EegBand::Theta,
        EegBand::Alpha,
        EegBand::Beta,
        EegBand::Gamma,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EegBand::LowDelta => "Low Delta",
            EegBand::HighDelta => "High Delta",
            EegBand::Theta => "Theta",
            EegBand::Alpha => "Alpha",
            EegBand::Beta => "Beta",
            EegBand::Gamma => "Gamma",
        }
    }

    /// (low, high) in Hz
    pub const fn range_hz(self) -> (f32, f32) {
        match self {
            EegBand::LowDelta => (0.0, 2.0),
            EegBand::HighDelta => (2.0, 4.0),
            EegBand::Theta => (4.0, 8.0),
            EegBand::Alpha => (8.0, 12.0),
            EegBand::Beta => (12.0, 30.0),
            EegBand::Gamma => (30.0, 45.0),
        }
    }

    pub fn contains(self, hz: f32) -> bool {
        let (low, high) = self.range_hz();
        hz >= low && hz <= high
    }

    /// First band containing `hz`; shared edges resolve to the lower band.
    pub fn for_frequency(hz: f32) -> Option<EegBand> {
        Self::ALL.into_iter().find(|band| band.contains(hz))
    }
}

/// Frequency spacing of a real FFT over `window_len` samples.
pub fn bin_width_hz(sample_rate_hz: u32, window_len: usize) -> Option<f32> {
    if window_len == 0 {
        return None;
    }
    Some(sample_rate_hz as f32 / window_len as f32)
}

/// Mean FFT magnitude per band, in [`EegBand::ALL`] order.
///
/// Bin `i` sits at `i * bin_hz`. Bounds are inclusive on both ends, so a bin
/// on a shared edge counts toward both neighbours. A band without bins is
/// `None`.
pub fn band_powers(magnitudes: &[f32], bin_hz: f32) -> [Option<f32>; 6] {
    let mut powers = [None; 6];
    for (power, band) in powers.iter_mut().zip(EegBand::ALL) {
        let (sum, count) = magnitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| band.contains(*i as f32 * bin_hz))
            .fold((0.0f32, 0usize), |(sum, count), (_, m)| (sum + m, count + 1));
        if count > 0 {
            *power = Some(sum / count as f32);
        }
    }
    powers
}
