use core::convert::Infallible;

use embassy_futures::block_on;
use embedded_io_async::{ErrorKind, ErrorType, Write};
use mindflex_bridge::serial::{CsvSerial, Error};
use mindflex_bridge::EegReading;

#[derive(Default)]
struct Sink {
    bytes: Vec<u8>,
    flushes: usize,
}

impl ErrorType for Sink {
    type Error = Infallible;
}

impl Write for Sink {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

struct Unplugged;

impl ErrorType for Unplugged {
    type Error = ErrorKind;
}

impl Write for Unplugged {
    async fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        Err(ErrorKind::BrokenPipe)
    }
}

#[test]
fn writes_header_then_readings() {
    let mut serial = CsvSerial::new(Sink::default());
    let reading = EegReading {
        signal_strength: 26,
        raw: 7,
        attention: 40,
        meditation: 50,
        delta: 1,
        theta: 2,
        low_alpha: 3,
        high_alpha: 4,
        low_beta: 5,
        high_beta: 6,
        low_gamma: 7,
        high_gamma: 8,
    };

    block_on(async {
        serial.write_header().await.unwrap();
        serial.write_reading(&reading).await.unwrap();
    });

    assert_eq!(serial.lines_written(), 2);
    let sink = serial.into_inner();
    assert_eq!(sink.flushes, 2);

    let text = String::from_utf8(sink.bytes).unwrap();
    assert_eq!(
        text,
        "signal_strength,raw,attention,meditation,delta,theta,low_alpha,high_alpha,low_beta,high_beta,low_gamma,high_gamma\r\n\
         26,7,40,50,1,2,3,4,5,6,7,8\r\n"
    );

    let line = text.lines().nth(1).unwrap();
    assert_eq!(EegReading::parse_line(line).unwrap(), reading);
}

#[test]
fn write_failure_is_reported() {
    let mut serial = CsvSerial::new(Unplugged);
    let result = block_on(serial.write_reading(&EegReading::default()));
    assert!(matches!(result, Err(Error::WriteFailed)));
    assert_eq!(serial.lines_written(), 0);
}

/// Takes one byte, fails once, then behaves.
#[derive(Default)]
struct Glitchy {
    bytes: Vec<u8>,
    calls: usize,
}

impl ErrorType for Glitchy {
    type Error = ErrorKind;
}

impl Write for Glitchy {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.calls += 1;
        match self.calls {
            1 => {
                self.bytes.push(buf[0]);
                Ok(1)
            }
            2 => Err(ErrorKind::Interrupted),
            _ => {
                self.bytes.extend_from_slice(buf);
                Ok(buf.len())
            }
        }
    }
}

#[test]
fn fragment_after_failed_write_is_terminated() {
    let mut serial = CsvSerial::new(Glitchy::default());
    let cut = EegReading {
        signal_strength: 2,
        ..EegReading::default()
    };
    let next = EegReading {
        signal_strength: 6,
        attention: 1,
        ..EegReading::default()
    };

    let first = block_on(serial.write_reading(&cut));
    assert!(matches!(first, Err(Error::WriteFailed)));
    block_on(serial.write_reading(&next)).unwrap();
    assert_eq!(serial.lines_written(), 1);

    let text = String::from_utf8(serial.into_inner().bytes).unwrap();
    assert_eq!(text, "2\r\n6,0,1,0,0,0,0,0,0,0,0,0\r\n");

    let lines: Vec<&str> = text.lines().collect();
    assert!(EegReading::parse_line(lines[0]).is_err());
    assert_eq!(EegReading::parse_line(lines[1]).unwrap(), next);
}
