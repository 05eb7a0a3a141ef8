use embedded_io_async::Write;
use heapless::String;

use crate::constants::{CSV_LINE_MAX, CSV_LINE_TERMINATOR};
use crate::reading::{self, EegReading};

#[derive(Debug)]
pub enum Error {
    Format,
    WriteFailed,
}

/// Writes CSV lines to an already configured serial port.
pub struct CsvSerial<W>
where
    W: Write,
{
    writer: W,
    lines_written: u32,
    // a line was cut short and must be terminated before the next one
    dirty: bool,
}

impl<W> CsvSerial<W>
where
    W: Write,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
            dirty: false,
        }
    }

    pub async fn write_header(&mut self) -> Result<(), Error> {
        let mut line: String<CSV_LINE_MAX> = String::new();
        reading::write_header(&mut line).map_err(|_| Error::Format)?;
        self.write_line(&line).await
    }

    pub async fn write_reading(&mut self, reading: &EegReading) -> Result<(), Error> {
        let line = reading.to_line().map_err(|_| Error::Format)?;
        self.write_line(&line).await?;
        log::debug!("CSV line written: {}", line);
        Ok(())
    }

    pub fn lines_written(&self) -> u32 {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn write_line(&mut self, line: &str) -> Result<(), Error> {
        if self.dirty {
            // terminate the fragment so the host drops it as a short line
            self.write_bytes(CSV_LINE_TERMINATOR.as_bytes()).await?;
        }

        self.dirty = true;
        self.write_bytes(line.as_bytes()).await?;
        self.write_bytes(CSV_LINE_TERMINATOR.as_bytes()).await?;
        self.dirty = false;

        if let Err(e) = self.writer.flush().await {
            log::error!("Failed to flush serial port: {:?}", e);
            return Err(Error::WriteFailed);
        }

        self.lines_written = self.lines_written.wrapping_add(1);
        Ok(())
    }

    async fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.writer.write_all(bytes).await.map_err(|e| {
            log::error!("Failed to write to serial port: {:?}", e);
            Error::WriteFailed
        })
    }
}
