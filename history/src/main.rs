use std::process::ExitCode;

// Arguments are ignored.
fn main() -> ExitCode {
    history::run()
}
