//! Prints the shell's `sh_history` file to standard output, byte for byte.

pub mod config;
pub mod copier;
pub mod error;

use std::io::{self, Write};
use std::process::ExitCode;

pub use config::Config;
pub use copier::{copy, print_history, BUFFER_SIZE};
pub use error::HistoryError;

/// Copies the history file named by the environment to stdout, reporting
/// failures on stderr.
pub fn run() -> ExitCode {
    let config = Config::from_env();
    let stderr = io::stderr();
    let mut diagnostics = stderr.lock();

    match unbuffered_stdout() {
        Ok(mut output) => run_with(&config, &mut output, &mut diagnostics),
        Err(err) => report(&HistoryError::Write(err), &mut diagnostics),
    }
}

/// A handle on fd 1 that bypasses the line buffer std keeps in front of
/// `Stdout`, so each chunk becomes exactly one `write(2)`.
#[cfg(unix)]
pub fn unbuffered_stdout() -> io::Result<Box<dyn Write>> {
    use std::os::fd::AsFd;

    let fd = io::stdout().as_fd().try_clone_to_owned()?;
    Ok(Box::new(std::fs::File::from(fd)))
}

#[cfg(not(unix))]
pub fn unbuffered_stdout() -> io::Result<Box<dyn Write>> {
    Ok(Box::new(io::stdout()))
}

/// Like [`run`], with the source and both streams supplied by the caller.
pub fn run_with<W, E>(config: &Config, output: &mut W, diagnostics: &mut E) -> ExitCode
where
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    match print_history(config, output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report(&err, diagnostics),
    }
}

fn report<E>(err: &HistoryError, diagnostics: &mut E) -> ExitCode
where
    E: Write + ?Sized,
{
    // Nothing useful is left to do if stderr is gone too.
    let _ = writeln!(diagnostics, "history: {err}");
    ExitCode::FAILURE
}
