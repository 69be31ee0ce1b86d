use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a copy. Each variant renders as the fixed
/// diagnostic the binary prints after its `history: ` prefix; the underlying
/// io error is kept as the source but is not part of the message.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write error")]
    Write(#[source] io::Error),

    #[error("read error")]
    Read(#[source] io::Error),
}

impl HistoryError {
    /// A write that accepted fewer bytes than it was handed.
    pub(crate) fn short_write(expected: usize, written: usize) -> Self {
        HistoryError::Write(io::Error::new(
            io::ErrorKind::WriteZero,
            format!("wrote {written} of {expected} bytes"),
        ))
    }
}
