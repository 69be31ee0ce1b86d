use std::fs::File;
use std::io::{self, Read, Write};

use crate::config::Config;
use crate::error::HistoryError;

/// Size of the transfer buffer; one read and one write per chunk.
pub const BUFFER_SIZE: usize = 512;

/// Copies `input` to `output` one buffer at a time until end of file.
///
/// Every chunk read is handed to exactly one `write` call, so `output` sees
/// the same chunk boundaries the input produced. A write that accepts fewer
/// bytes than were read is an error, as is any other read or write failure.
/// Calls interrupted by a signal are reissued. The output is flushed once the
/// input is exhausted. Returns the number of bytes copied.
pub fn copy<R, W>(input: &mut R, output: &mut W, buffer: &mut [u8]) -> Result<u64, HistoryError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut copied = 0;

    loop {
        let read = match input.read(buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(HistoryError::Read(e)),
        };

        let written = loop {
            match output.write(&buffer[..read]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(HistoryError::Write(e)),
            }
        };
        if written != read {
            return Err(HistoryError::short_write(read, written));
        }
        copied += read as u64;
    }

    output.flush().map_err(HistoryError::Write)?;
    Ok(copied)
}

/// Opens the configured history file read-only and copies it to `output`.
/// The file is closed when this returns, whatever the outcome.
pub fn print_history<W>(config: &Config, output: &mut W) -> Result<u64, HistoryError>
where
    W: Write + ?Sized,
{
    let mut input = File::open(&config.path).map_err(|source| HistoryError::Open {
        path: config.path.clone(),
        source,
    })?;
    let mut buffer = [0; BUFFER_SIZE];

    copy(&mut input, output, &mut buffer)
}
