//! One EEG reading as it travels over the CSV outputs.
//!
//! A line carries twelve decimal fields in [`CSV_HEADER`] order and ends with
//! `\r\n` on the wire. Host loggers drop lines whose field count is off, so
//! partial lines after a reconnect are harmless.

use core::fmt::{self, Write};
use core::str::FromStr;

use heapless::String;

use crate::constants::{CSV_FIELD_COUNT, CSV_LINE_MAX};

pub const CSV_HEADER: [&str; CSV_FIELD_COUNT] = [
    "signal_strength",
    "raw",
    "attention",
    "meditation",
    "delta",
    "theta",
    "low_alpha",
    "high_alpha",
    "low_beta",
    "high_beta",
    "low_gamma",
    "high_gamma",
];

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Line does not have exactly twelve fields
    FieldCount(usize),
    /// Field at `index` is not a number of the expected width
    InvalidField { index: usize },
    /// Formatted line does not fit its buffer
    Format,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EegReading {
    /// Poor-signal quality, 0 is a clean contact
    pub signal_strength: u8,
    pub raw: i16,
    pub attention: u8,
    pub meditation: u8,
    pub delta: u32,
    pub theta: u32,
    pub low_alpha: u32,
    pub high_alpha: u32,
    pub low_beta: u32,
    pub high_beta: u32,
    pub low_gamma: u32,
    pub high_gamma: u32,
}

pub fn write_header<W: Write>(out: &mut W) -> fmt::Result {
    for (i, name) in CSV_HEADER.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        out.write_str(name)?;
    }
    Ok(())
}

impl EegReading {
    pub fn write_csv<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            self.signal_strength,
            self.raw,
            self.attention,
            self.meditation,
            self.delta,
            self.theta,
            self.low_alpha,
            self.high_alpha,
            self.low_beta,
            self.high_beta,
            self.low_gamma,
            self.high_gamma
        )
    }

    /// Formats the reading without the line terminator.
    pub fn to_line(&self) -> Result<String<CSV_LINE_MAX>, Error> {
        let mut line = String::new();
        self.write_csv(&mut line).map_err(|_| Error::Format)?;
        Ok(line)
    }

    pub fn parse_line(line: &str) -> Result<Self, Error> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);

        let count = line.split(',').count();
        if count != CSV_FIELD_COUNT {
            return Err(Error::FieldCount(count));
        }

        let mut fields = line.split(',').map(str::trim).enumerate();

        Ok(Self {
            signal_strength: next_field(&mut fields)?,
            raw: next_field(&mut fields)?,
            attention: next_field(&mut fields)?,
            meditation: next_field(&mut fields)?,
            delta: next_field(&mut fields)?,
            theta: next_field(&mut fields)?,
            low_alpha: next_field(&mut fields)?,
            high_alpha: next_field(&mut fields)?,
            low_beta: next_field(&mut fields)?,
            high_beta: next_field(&mut fields)?,
            low_gamma: next_field(&mut fields)?,
            high_gamma: next_field(&mut fields)?,
        })
    }
}

fn next_field<'a, T, I>(fields: &mut I) -> Result<T, Error>
where
    T: FromStr,
    I: Iterator<Item = (usize, &'a str)>,
{
    let (index, value) = fields.next().ok_or(Error::FieldCount(0))?;
    value.parse().map_err(|_| Error::InvalidField { index })
}
